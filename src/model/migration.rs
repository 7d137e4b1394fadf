//! API-facing model types for migration configuration records.

use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};
use validator::ValidationError;

use crate::api::validation;
use crate::entity::migration_configuration;

/// Outcome status of a migration run.
///
/// Stored as a plain string column; this enum covers the values the
/// application itself produces. Unknown strings read back as-is.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MigrationStatus {
    Completed,
    Failed,
    Running,
}

impl MigrationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MigrationStatus::Completed => "completed",
            MigrationStatus::Failed => "failed",
            MigrationStatus::Running => "running",
        }
    }
}

impl std::fmt::Display for MigrationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persisted migration configuration record as exposed over HTTP.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MigrationConfigInfo {
    pub id: i32,
    pub file_name: String,
    pub source_db_server: String,
    pub source_db_name: String,
    pub target_db_name: String,
    pub etl_db_name: String,
    pub agreement: String,
    pub agreement_label: String,
    pub export_criteria: String,
    pub criteria_label: String,
    pub selection_parameter: Option<String>,
    pub export_directory: Option<String>,
    pub log_directory: Option<String>,
    pub agreement_notes: Option<String>,
    pub export_date: DateTimeWithTimeZone,
    pub status: String,
    pub description: String,
    pub record_count: i32,
    pub execution_time: i32,
    pub created_at: DateTimeWithTimeZone,
}

impl From<migration_configuration::Model> for MigrationConfigInfo {
    fn from(model: migration_configuration::Model) -> Self {
        Self {
            id: model.id,
            file_name: model.file_name,
            source_db_server: model.source_db_server,
            source_db_name: model.source_db_name,
            target_db_name: model.target_db_name,
            etl_db_name: model.etl_db_name,
            agreement: model.agreement,
            agreement_label: model.agreement_label,
            export_criteria: model.export_criteria,
            criteria_label: model.criteria_label,
            selection_parameter: model.selection_parameter,
            export_directory: model.export_directory,
            log_directory: model.log_directory,
            agreement_notes: model.agreement_notes,
            export_date: model.export_date,
            status: model.status,
            description: model.description,
            record_count: model.record_count,
            execution_time: model.execution_time,
            created_at: model.created_at,
        }
    }
}

/// Creation parameters for a migration configuration record.
///
/// Mirrors the POST body of the HTTP surface. The identifier and creation
/// timestamp are assigned by the store.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertMigrationConfig {
    pub file_name: String,
    pub source_db_server: String,
    pub source_db_name: String,
    pub target_db_name: String,
    pub etl_db_name: String,
    pub agreement: String,
    pub agreement_label: String,
    pub export_criteria: String,
    pub criteria_label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection_parameter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_directory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_directory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agreement_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_date: Option<DateTimeWithTimeZone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record_count: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_time: Option<i32>,
}

impl InsertMigrationConfig {
    /// Validate that every required field is non-empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::validate_required("fileName", &self.file_name)?;
        validation::validate_required("sourceDbServer", &self.source_db_server)?;
        validation::validate_required("sourceDbName", &self.source_db_name)?;
        validation::validate_required("targetDbName", &self.target_db_name)?;
        validation::validate_required("etlDbName", &self.etl_db_name)?;
        validation::validate_required("agreement", &self.agreement)?;
        validation::validate_required("agreementLabel", &self.agreement_label)?;
        validation::validate_required("exportCriteria", &self.export_criteria)?;
        validation::validate_required("criteriaLabel", &self.criteria_label)?;
        validation::validate_record_count(self.record_count)?;
        validation::validate_execution_time(self.execution_time)?;
        Ok(())
    }
}

/// Body of the description PATCH route.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDescriptionParam {
    pub description: String,
}

/// Outcome of a (simulated) migration execution as surfaced to the user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MigrationResult {
    pub record_count: i32,
    pub execution_time: i32,
    pub success: bool,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_insert() -> InsertMigrationConfig {
        InsertMigrationConfig {
            file_name: "ProviderImport_20260801_001.dtsx".to_string(),
            source_db_server: "SQL-PROD-01".to_string(),
            source_db_name: "PLEXIS_PROD".to_string(),
            target_db_name: "CLIENT_STAGING".to_string(),
            etl_db_name: "PLEXIS_ETL_CONTROL".to_string(),
            agreement: "provider-import".to_string(),
            agreement_label: "Provider Import".to_string(),
            export_criteria: "all-records".to_string(),
            criteria_label: "All Records".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_insert_param_validates_when_complete() {
        assert!(full_insert().validate().is_ok());
    }

    #[test]
    fn test_insert_param_rejects_empty_required_field() {
        let mut param = full_insert();
        param.source_db_name = "".to_string();
        assert!(param.validate().is_err());
    }

    #[test]
    fn test_insert_param_rejects_negative_counters() {
        let mut param = full_insert();
        param.record_count = Some(-1);
        assert!(param.validate().is_err());

        let mut param = full_insert();
        param.execution_time = Some(-100);
        assert!(param.validate().is_err());
    }

    #[test]
    fn test_insert_param_serializes_camel_case() {
        let value = serde_json::to_value(full_insert()).unwrap();
        assert!(value.get("fileName").is_some());
        assert!(value.get("sourceDbServer").is_some());
        assert!(value.get("etlDbName").is_some());
        // omitted optionals are not serialized at all
        assert!(value.get("selectionParameter").is_none());
    }

    #[test]
    fn test_status_round_trip() {
        assert_eq!(MigrationStatus::Completed.as_str(), "completed");
        assert_eq!(
            serde_json::to_string(&MigrationStatus::Failed).unwrap(),
            "\"failed\""
        );
    }
}
