//! `SeaORM` Entity for migration_configurations table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "migration_configurations")]
pub struct Model {
    #[sea_orm(primary_key)]
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
    #[sea_orm(column_type = "Text", nullable)]
    pub selection_parameter: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub export_directory: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub log_directory: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub agreement_notes: Option<String>,
    pub export_date: DateTimeWithTimeZone,
    pub status: String,
    pub description: String,
    pub record_count: i32,
    pub execution_time: i32,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
