//! State machine for the migration execution form.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::error;

use crate::catalog::{self, CriteriaFieldDescriptor};
use crate::client::api_client::ApiClient;
use crate::client::executor::ExecutionBackend;
use crate::model::migration::MigrationResult;

/// Raw values of the ten execution-form inputs.
#[derive(Clone, Debug, Default)]
pub struct MigrationConfigForm {
    pub source_db_server: String,
    pub source_db_name: String,
    pub target_db_name: String,
    pub etl_db_name: String,
    pub agreement: String,
    pub export_criteria: String,
    pub selection_parameter: String,
    pub export_directory: String,
    pub log_directory: String,
    pub agreement_notes: String,
}

/// Form input identifiers, used as validation-error keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum FormField {
    SourceDbServer,
    SourceDbName,
    TargetDbName,
    EtlDbName,
    Agreement,
    ExportCriteria,
    SelectionParameter,
    ExportDirectory,
    LogDirectory,
    AgreementNotes,
}

impl FormField {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::SourceDbServer => "sourceDbServer",
            FormField::SourceDbName => "sourceDbName",
            FormField::TargetDbName => "targetDbName",
            FormField::EtlDbName => "etlDbName",
            FormField::Agreement => "agreement",
            FormField::ExportCriteria => "exportCriteria",
            FormField::SelectionParameter => "selectionParameter",
            FormField::ExportDirectory => "exportDirectory",
            FormField::LogDirectory => "logDirectory",
            FormField::AgreementNotes => "agreementNotes",
        }
    }
}

/// An in-progress description edit.
#[derive(Clone, Debug)]
pub struct DescriptionEdit {
    pub record_id: i32,
    pub buffer: String,
}

/// Drives the execution form: field edits, submit validation, the simulated
/// execution, and inline description editing of history records.
pub struct FormController {
    values: MigrationConfigForm,
    errors: BTreeMap<FormField, String>,
    editing: Option<DescriptionEdit>,
    in_flight: bool,
    last_result: Option<MigrationResult>,
    client: Arc<ApiClient>,
    backend: Arc<dyn ExecutionBackend>,
}

impl FormController {
    pub fn new(client: Arc<ApiClient>, backend: Arc<dyn ExecutionBackend>) -> Self {
        Self {
            values: MigrationConfigForm::default(),
            errors: BTreeMap::new(),
            editing: None,
            in_flight: false,
            last_result: None,
            client,
            backend,
        }
    }

    pub fn values(&self) -> &MigrationConfigForm {
        &self.values
    }

    pub fn errors(&self) -> &BTreeMap<FormField, String> {
        &self.errors
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn last_result(&self) -> Option<&MigrationResult> {
        self.last_result.as_ref()
    }

    pub fn clear_result(&mut self) {
        self.last_result = None;
    }

    /// Overwrite one field's value. Validation errors stay as they are until
    /// the next submit; changing the criteria never clears a previously
    /// entered selection parameter.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();

        match field {
            FormField::SourceDbServer => self.values.source_db_server = value,
            FormField::SourceDbName => self.values.source_db_name = value,
            FormField::TargetDbName => self.values.target_db_name = value,
            FormField::EtlDbName => self.values.etl_db_name = value,
            FormField::Agreement => self.values.agreement = value,
            FormField::ExportCriteria => self.values.export_criteria = value,
            FormField::SelectionParameter => self.values.selection_parameter = value,
            FormField::ExportDirectory => self.values.export_directory = value,
            FormField::LogDirectory => self.values.log_directory = value,
            FormField::AgreementNotes => self.values.agreement_notes = value,
        }
    }

    /// The selection-parameter sub-field descriptor for the current criteria,
    /// or `None` when the sub-field is hidden.
    pub fn selection_parameter_field(&self) -> Option<&'static CriteriaFieldDescriptor> {
        catalog::criteria_field(&self.values.export_criteria)
    }

    fn validate(values: &MigrationConfigForm) -> BTreeMap<FormField, String> {
        let mut errors = BTreeMap::new();

        let required = [
            (
                FormField::SourceDbServer,
                &values.source_db_server,
                "Source DB Server",
            ),
            (
                FormField::SourceDbName,
                &values.source_db_name,
                "Source DB Name",
            ),
            (
                FormField::TargetDbName,
                &values.target_db_name,
                "Target DB Name",
            ),
            (FormField::EtlDbName, &values.etl_db_name, "ETL DB Name"),
            (FormField::Agreement, &values.agreement, "Agreement"),
            (
                FormField::ExportCriteria,
                &values.export_criteria,
                "Selection Query",
            ),
        ];

        for (field, value, label) in required {
            if value.is_empty() {
                errors.insert(field, format!("{} is required", label));
            }
        }

        if let Some(descriptor) = catalog::criteria_field(&values.export_criteria) {
            if descriptor.required && values.selection_parameter.is_empty() {
                errors.insert(
                    FormField::SelectionParameter,
                    format!("{} is required", descriptor.label),
                );
            }
        }

        errors
    }

    /// Validate and, when valid, run the execution backend.
    ///
    /// On validation failure the per-field errors are populated, nothing else
    /// happens, and `None` is returned. On success the prior result is
    /// cleared before the run and the outcome is stored and returned.
    pub async fn submit(&mut self) -> Option<MigrationResult> {
        self.errors = Self::validate(&self.values);

        if !self.errors.is_empty() {
            return None;
        }

        self.last_result = None;
        self.in_flight = true;

        let result = self.backend.execute(&self.values).await;

        self.in_flight = false;
        self.last_result = Some(result.clone());

        Some(result)
    }

    pub fn editing(&self) -> Option<&DescriptionEdit> {
        self.editing.as_ref()
    }

    /// Enter editing mode for a record, seeding the buffer with its current
    /// description.
    pub fn begin_edit_description(&mut self, record_id: i32, current_description: &str) {
        self.editing = Some(DescriptionEdit {
            record_id,
            buffer: current_description.to_string(),
        });
    }

    pub fn set_edit_buffer(&mut self, text: impl Into<String>) {
        if let Some(edit) = self.editing.as_mut() {
            edit.buffer = text.into();
        }
    }

    /// Persist the edit buffer. Editing mode ends whether or not the update
    /// succeeds; failures are only logged.
    pub async fn save_description(&mut self) {
        let Some(edit) = self.editing.take() else {
            return;
        };

        if let Err(e) = self
            .client
            .update_description(edit.record_id, &edit.buffer)
            .await
        {
            error!(
                "failed to update description for record {}: {}",
                edit.record_id, e
            );
        }
    }

    /// Discard the edit buffer and exit editing mode.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::http_client::{HttpClient, HttpClientConfig};

    struct StaticBackend;

    #[async_trait::async_trait]
    impl ExecutionBackend for StaticBackend {
        async fn execute(&self, _form: &MigrationConfigForm) -> MigrationResult {
            MigrationResult {
                record_count: 1200,
                execution_time: 10,
                success: true,
                message: "ok".to_string(),
            }
        }
    }

    // Client pointing at a closed port: store calls fail fast.
    fn unreachable_client() -> Arc<ApiClient> {
        let http_client = HttpClient::new(HttpClientConfig::new("http://127.0.0.1:9")).unwrap();
        Arc::new(ApiClient::new(http_client))
    }

    fn controller() -> FormController {
        FormController::new(unreachable_client(), Arc::new(StaticBackend))
    }

    fn fill_required(form: &mut FormController) {
        form.set_field(FormField::SourceDbServer, "SQL01");
        form.set_field(FormField::SourceDbName, "SRC");
        form.set_field(FormField::TargetDbName, "TGT");
        form.set_field(FormField::EtlDbName, "ETL");
        form.set_field(FormField::Agreement, "provider-import");
        form.set_field(FormField::ExportCriteria, "all-records");
    }

    #[tokio::test]
    async fn test_submit_empty_form_populates_errors() {
        let mut form = controller();

        assert!(form.submit().await.is_none());

        assert_eq!(form.errors().len(), 6);
        assert!(form.errors().contains_key(&FormField::SourceDbServer));
        assert!(form.errors().contains_key(&FormField::ExportCriteria));
        // no criteria selected, so the selection parameter is not required
        assert!(!form.errors().contains_key(&FormField::SelectionParameter));
    }

    #[tokio::test]
    async fn test_submit_valid_form_stores_result() {
        let mut form = controller();
        fill_required(&mut form);

        let result = form.submit().await.expect("valid form should execute");

        assert!(result.success);
        assert!(form.errors().is_empty());
        assert!(!form.is_in_flight());
        assert_eq!(form.last_result(), Some(&result));
    }

    #[tokio::test]
    async fn test_all_records_never_requires_selection_parameter() {
        let mut form = controller();
        fill_required(&mut form);

        assert!(form.selection_parameter_field().is_none());
        assert!(form.submit().await.is_some());
    }

    #[tokio::test]
    async fn test_required_criteria_rejects_empty_selection_parameter() {
        let mut form = controller();
        fill_required(&mut form);
        form.set_field(FormField::ExportCriteria, "by-contract");

        assert!(form.submit().await.is_none());
        assert!(form.errors().contains_key(&FormField::SelectionParameter));

        form.set_field(FormField::SelectionParameter, "CONTRACT001");
        assert!(form.submit().await.is_some());
    }

    #[tokio::test]
    async fn test_incremental_criteria_allows_empty_selection_parameter() {
        let mut form = controller();
        fill_required(&mut form);
        form.set_field(FormField::ExportCriteria, "incremental");

        assert!(form.selection_parameter_field().is_some());
        assert!(form.submit().await.is_some());
    }

    #[tokio::test]
    async fn test_criteria_change_keeps_selection_parameter_value() {
        let mut form = controller();
        form.set_field(FormField::ExportCriteria, "by-contract");
        form.set_field(FormField::SelectionParameter, "CONTRACT001");

        form.set_field(FormField::ExportCriteria, "by-date");

        assert_eq!(form.values().selection_parameter, "CONTRACT001");
        assert_eq!(
            form.selection_parameter_field().unwrap().label,
            "Date Range"
        );
    }

    #[tokio::test]
    async fn test_field_edit_keeps_errors_until_next_submit() {
        let mut form = controller();

        assert!(form.submit().await.is_none());
        let error_count = form.errors().len();

        form.set_field(FormField::SourceDbServer, "SQL01");
        assert_eq!(form.errors().len(), error_count);

        fill_required(&mut form);
        assert!(form.submit().await.is_some());
        assert!(form.errors().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_submit_keeps_previous_result() {
        let mut form = controller();
        fill_required(&mut form);
        form.submit().await.expect("valid form should execute");

        form.set_field(FormField::SourceDbServer, "");
        assert!(form.submit().await.is_none());

        // only a valid submit clears the prior result
        assert!(form.last_result().is_some());
    }

    #[tokio::test]
    async fn test_edit_description_lifecycle() {
        let mut form = controller();

        form.begin_edit_description(7, "initial text");
        assert_eq!(form.editing().unwrap().record_id, 7);
        assert_eq!(form.editing().unwrap().buffer, "initial text");

        form.set_edit_buffer("changed text");
        assert_eq!(form.editing().unwrap().buffer, "changed text");

        form.cancel_edit();
        assert!(form.editing().is_none());
    }

    #[tokio::test]
    async fn test_save_description_exits_editing_even_on_failure() {
        let mut form = controller();

        form.begin_edit_description(7, "text");
        // the client is unreachable, so the update fails and is swallowed
        form.save_description().await;

        assert!(form.editing().is_none());
    }
}
