use super::*;

fn project() -> Project {
    Project {
        id: 3,
        project_no: "P-003".into(),
        project_name: "Substation".into(),
        project_leader: "Lin".into(),
        remark: None,
        created_by: None,
        created_at: None,
        updated_by: None,
        updated_at: Some("2026-01-02".into()),
    }
}

#[test]
fn cells_follow_column_order() {
    let cells = Projects::cells(&project());
    assert_eq!(cells.len(), Projects::columns().len());
    assert_eq!(cells[0], "P-003");
    assert_eq!(cells[3], "");
}

#[test]
fn values_round_into_update() {
    let values = Projects::values(&project());
    let update = Projects::to_update(&values).unwrap();
    assert_eq!(update.project_no.as_deref(), Some("P-003"));
    assert_eq!(update.remark, None);
}

#[test]
fn keyword_filters_by_name() {
    assert_eq!(Projects::filter("sub").project_name.as_deref(), Some("sub"));
}
