//! Project management page.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use leptos::prelude::*;

use crate::components::resource_table::{AdminResource, Column, resource_table};
use crate::net::crud::Projects;
use crate::net::resources::{CreateProject, Project, ProjectFilter, UpdateProject};
use crate::util::forms::{FieldKind, FieldSpec, FormValues};
use crate::util::validation::ValidationError;

const PROJECT_NO: FieldSpec = FieldSpec::new("projectNo", "Project no.", FieldKind::Text).required();
const PROJECT_NAME: FieldSpec = FieldSpec::new("projectName", "Project name", FieldKind::Text).required();
const PROJECT_LEADER: FieldSpec = FieldSpec::new("projectLeader", "Project leader", FieldKind::Text);
const REMARK: FieldSpec = FieldSpec::new("remark", "Remark", FieldKind::TextArea);

impl AdminResource for Projects {
    const TITLE: &'static str = "Projects";
    const SINGULAR: &'static str = "project";
    const SEARCH_HINT: &'static str = "Search by project name";

    fn columns() -> &'static [Column] {
        const {
            &[
                Column::sorted("Project no.", "projectNo"),
                Column::sorted("Name", "projectName"),
                Column::plain("Leader"),
                Column::plain("Remark"),
                Column::sorted("Updated", "updatedAt"),
            ]
        }
    }

    fn fields() -> &'static [FieldSpec] {
        &[PROJECT_NO, PROJECT_NAME, PROJECT_LEADER, REMARK]
    }

    fn id(item: &Project) -> i64 {
        item.id
    }

    fn cells(item: &Project) -> Vec<String> {
        vec![
            item.project_no.clone(),
            item.project_name.clone(),
            item.project_leader.clone(),
            item.remark.clone().unwrap_or_default(),
            item.updated_at.clone().unwrap_or_default(),
        ]
    }

    fn filter(keyword: &str) -> ProjectFilter {
        ProjectFilter { project_name: Some(keyword.to_owned()), ..ProjectFilter::default() }
    }

    fn values(item: &Project) -> FormValues {
        FormValues::from_pairs([
            ("projectNo", item.project_no.clone()),
            ("projectName", item.project_name.clone()),
            ("projectLeader", item.project_leader.clone()),
            ("remark", item.remark.clone().unwrap_or_default()),
        ])
    }

    fn to_create(values: &FormValues) -> Result<CreateProject, ValidationError> {
        Ok(CreateProject {
            project_no: values.required_text(&PROJECT_NO)?,
            project_name: values.required_text(&PROJECT_NAME)?,
            project_leader: values.text(PROJECT_LEADER.key),
            remark: values.text(REMARK.key),
        })
    }

    fn to_update(values: &FormValues) -> Result<UpdateProject, ValidationError> {
        Ok(UpdateProject {
            project_no: values.text(PROJECT_NO.key),
            project_name: values.text(PROJECT_NAME.key),
            project_leader: values.text(PROJECT_LEADER.key),
            remark: values.text(REMARK.key),
        })
    }
}

#[component]
pub fn ProjectsPage() -> impl IntoView {
    resource_table::<Projects>()
}
