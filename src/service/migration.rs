//! Store operations for migration configuration records.

use chrono::Utc;
use sea_orm::*;

use crate::entity::migration_configuration;
use crate::model::migration::{InsertMigrationConfig, MigrationStatus};

/// Filter value that disables agreement filtering.
pub const FILTER_ALL: &str = "all";

/// All records ordered newest first, optionally restricted to one agreement
/// code (exact, case-sensitive). `None` and `"all"` return everything.
pub async fn find_all(
    db: &DatabaseConnection,
    agreement_filter: Option<&str>,
) -> anyhow::Result<Vec<migration_configuration::Model>> {
    let mut select = migration_configuration::Entity::find();

    if let Some(agreement) = agreement_filter.filter(|filter| *filter != FILTER_ALL) {
        select = select.filter(migration_configuration::Column::Agreement.eq(agreement));
    }

    let models = select
        .order_by_desc(migration_configuration::Column::CreatedAt)
        .all(db)
        .await?;

    Ok(models)
}

/// Persist a new record, assigning its identifier and creation timestamp.
///
/// Optional fields default here rather than in the database so that the
/// timestamps carry full precision.
pub async fn create(
    db: &DatabaseConnection,
    param: InsertMigrationConfig,
) -> anyhow::Result<migration_configuration::Model> {
    let now = Utc::now().fixed_offset();

    let active_model = migration_configuration::ActiveModel {
        file_name: Set(param.file_name),
        source_db_server: Set(param.source_db_server),
        source_db_name: Set(param.source_db_name),
        target_db_name: Set(param.target_db_name),
        etl_db_name: Set(param.etl_db_name),
        agreement: Set(param.agreement),
        agreement_label: Set(param.agreement_label),
        export_criteria: Set(param.export_criteria),
        criteria_label: Set(param.criteria_label),
        selection_parameter: Set(param.selection_parameter),
        export_directory: Set(param.export_directory),
        log_directory: Set(param.log_directory),
        agreement_notes: Set(param.agreement_notes),
        export_date: Set(param.export_date.unwrap_or(now)),
        status: Set(param
            .status
            .unwrap_or_else(|| MigrationStatus::Completed.to_string())),
        description: Set(param.description.unwrap_or_default()),
        record_count: Set(param.record_count.unwrap_or(0)),
        execution_time: Set(param.execution_time.unwrap_or(0)),
        created_at: Set(now),
        ..Default::default()
    };

    let model = active_model.insert(db).await?;

    Ok(model)
}

/// Replace the description of an existing record, leaving every other field
/// untouched. Returns `None` when the identifier is unknown.
pub async fn update_description(
    db: &DatabaseConnection,
    id: i32,
    description: &str,
) -> anyhow::Result<Option<migration_configuration::Model>> {
    let Some(model) = migration_configuration::Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };

    let mut active_model: migration_configuration::ActiveModel = model.into();
    active_model.description = Set(description.to_string());

    let updated = active_model.update(db).await?;

    Ok(Some(updated))
}

/// Remove a record permanently. Returns whether a row was actually deleted.
pub async fn delete(db: &DatabaseConnection, id: i32) -> anyhow::Result<bool> {
    let result = migration_configuration::Entity::delete_by_id(id)
        .exec(db)
        .await?;

    Ok(result.rows_affected > 0)
}
