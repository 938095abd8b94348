use super::*;
use crate::net::crud::Projects;
use crate::util::forms::FormValues;

#[test]
fn column_constructors() {
    assert_eq!(Column::plain("Remark").sort, None);
    assert_eq!(Column::sorted("No.", "projectNo").sort, Some("projectNo"));
}

#[test]
fn create_enforces_required_fields() {
    let values = FormValues::from_pairs([("projectName", "Grid")]);
    let err = prepare::<Projects>(FormMode::Create, &values).err().unwrap();
    assert_eq!(err, ValidationError::Required("Project no."));
}

#[test]
fn create_builds_body_when_complete() {
    let values = FormValues::from_pairs([("projectNo", "P-1"), ("projectName", "Grid")]);
    match prepare::<Projects>(FormMode::Create, &values) {
        Ok(Submission::Create(body)) => {
            assert_eq!(body.project_no, "P-1");
            assert_eq!(body.project_leader, None);
        }
        _ => panic!("expected create submission"),
    }
}

#[test]
fn edit_skips_required_check_and_keeps_id() {
    let values = FormValues::from_pairs([("remark", "moved")]);
    match prepare::<Projects>(FormMode::Edit(4), &values) {
        Ok(Submission::Update(id, body)) => {
            assert_eq!(id, 4);
            assert_eq!(body.remark.as_deref(), Some("moved"));
            assert_eq!(body.project_no, None);
        }
        _ => panic!("expected update submission"),
    }
}
