//! Creates the migration_configurations table and its query indexes.

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MigrationConfigurations::Table)
                    .if_not_exists()
                    .col(pk_auto(MigrationConfigurations::Id))
                    .col(text(MigrationConfigurations::FileName))
                    .col(text(MigrationConfigurations::SourceDbServer))
                    .col(text(MigrationConfigurations::SourceDbName))
                    .col(text(MigrationConfigurations::TargetDbName))
                    .col(text(MigrationConfigurations::EtlDbName))
                    .col(text(MigrationConfigurations::Agreement))
                    .col(text(MigrationConfigurations::AgreementLabel))
                    .col(text(MigrationConfigurations::ExportCriteria))
                    .col(text(MigrationConfigurations::CriteriaLabel))
                    .col(text_null(MigrationConfigurations::SelectionParameter))
                    .col(text_null(MigrationConfigurations::ExportDirectory))
                    .col(text_null(MigrationConfigurations::LogDirectory))
                    .col(text_null(MigrationConfigurations::AgreementNotes))
                    .col(
                        timestamp_with_time_zone(MigrationConfigurations::ExportDate)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        string_len(MigrationConfigurations::Status, 20)
                            .default("completed"),
                    )
                    .col(text(MigrationConfigurations::Description).default(""))
                    .col(integer(MigrationConfigurations::RecordCount).default(0))
                    .col(integer(MigrationConfigurations::ExecutionTime).default(0))
                    .col(
                        timestamp_with_time_zone(MigrationConfigurations::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Indexes for the list query: equality filter on agreement, newest-first ordering
        manager
            .create_index(
                Index::create()
                    .name("idx_migration_configurations_agreement")
                    .table(MigrationConfigurations::Table)
                    .col(MigrationConfigurations::Agreement)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_migration_configurations_created_at")
                    .table(MigrationConfigurations::Table)
                    .col(MigrationConfigurations::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(MigrationConfigurations::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum MigrationConfigurations {
    Table,
    Id,
    FileName,
    SourceDbServer,
    SourceDbName,
    TargetDbName,
    EtlDbName,
    Agreement,
    AgreementLabel,
    ExportCriteria,
    CriteriaLabel,
    SelectionParameter,
    ExportDirectory,
    LogDirectory,
    AgreementNotes,
    ExportDate,
    Status,
    Description,
    RecordCount,
    ExecutionTime,
    CreatedAt,
}
