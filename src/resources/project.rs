use crate::endpoints::project;
use crate::error::Result;
use crate::notify::ConfirmPrompt;
use crate::resource::{Mutation, Resource};
use common::{CreateProjectPayload, ProjectForm, ProjectRow, UpdateProjectPayload};
use serde_json::Value;

#[derive(Debug, Clone, Copy, Default)]
pub struct Projects;

impl Resource for Projects {
    type Row = ProjectRow;
    type Form = ProjectForm;

    const LABEL: &'static str = "Project";
    const FORM_FIELDS: &'static [&'static str] = &["project_name", "customer_id"];

    fn list_path(&self, page: u32) -> String {
        project::get_all(page)
    }

    fn row_from_record(&self, record: &Value) -> ProjectRow {
        ProjectRow::from_record(record)
    }

    fn row_id(&self, row: &ProjectRow) -> String {
        row.id.clone()
    }

    fn form_from_row(&self, row: &ProjectRow) -> ProjectForm {
        ProjectForm::from(row)
    }

    fn create_request(&self, form: &ProjectForm) -> Result<Mutation> {
        Mutation::post(project::CREATE, &CreateProjectPayload::from(form))
    }

    fn update_request(&self, id: &str, form: &ProjectForm) -> Result<Mutation> {
        Mutation::put(project::update(id), &UpdateProjectPayload::from(form))
    }

    fn delete_request(&self, row: &ProjectRow) -> Mutation {
        Mutation::delete(project::delete(&row.id))
    }

    fn delete_prompt(&self, row: &ProjectRow) -> ConfirmPrompt {
        ConfirmPrompt::delete(Self::LABEL, &row.name)
    }
}
