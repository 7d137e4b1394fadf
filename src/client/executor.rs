//! Execution backends.
//!
//! The simulated executor stands in for a real migration trigger; the form
//! controller and the store contracts never see the difference, so swapping
//! in a real backend touches nothing else.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;
use tracing::error;

use crate::catalog;
use crate::client::api_client::ApiClient;
use crate::client::form::MigrationConfigForm;
use crate::model::migration::{InsertMigrationConfig, MigrationResult, MigrationStatus};

/// Runs the migration described by a validated form and records the outcome.
#[async_trait]
pub trait ExecutionBackend: Send + Sync {
    async fn execute(&self, form: &MigrationConfigForm) -> MigrationResult;
}

/// Simulated migration runner: waits a random delay, synthesizes an outcome,
/// and creates the history record through the record store.
pub struct SimulatedExecutor {
    client: Arc<ApiClient>,
    delay_min_ms: u64,
    delay_max_ms: u64,
}

impl SimulatedExecutor {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self::with_delay_range(client, 2000, 5000)
    }

    /// Override the simulated delay bounds in milliseconds.
    pub fn with_delay_range(client: Arc<ApiClient>, delay_min_ms: u64, delay_max_ms: u64) -> Self {
        Self {
            client,
            delay_min_ms,
            delay_max_ms,
        }
    }

    fn pick_delay_ms(&self) -> u64 {
        if self.delay_max_ms > self.delay_min_ms {
            rand::rng().random_range(self.delay_min_ms..self.delay_max_ms)
        } else {
            self.delay_min_ms
        }
    }
}

#[async_trait]
impl ExecutionBackend for SimulatedExecutor {
    async fn execute(&self, form: &MigrationConfigForm) -> MigrationResult {
        let delay_ms = self.pick_delay_ms();

        tokio::time::sleep(Duration::from_millis(delay_ms)).await;

        let record_count: i32 = rand::rng().random_range(5000..55000);
        let execution_time = delay_ms as i32;
        let agreement_label = catalog::agreement_label(&form.agreement);
        let criteria_label = catalog::criteria_label(&form.export_criteria);
        let message = format!(
            "Successfully migrated {} records using {} with {} criteria.",
            group_thousands(record_count),
            agreement_label,
            criteria_label
        );

        let param = InsertMigrationConfig {
            file_name: catalog::generate_file_name(&form.agreement),
            source_db_server: form.source_db_server.clone(),
            source_db_name: form.source_db_name.clone(),
            target_db_name: form.target_db_name.clone(),
            etl_db_name: form.etl_db_name.clone(),
            agreement: form.agreement.clone(),
            agreement_label,
            export_criteria: form.export_criteria.clone(),
            criteria_label,
            selection_parameter: none_if_empty(&form.selection_parameter),
            export_directory: none_if_empty(&form.export_directory),
            log_directory: none_if_empty(&form.log_directory),
            agreement_notes: none_if_empty(&form.agreement_notes),
            export_date: None,
            status: Some(MigrationStatus::Completed.to_string()),
            description: Some(form.agreement_notes.clone()),
            record_count: Some(record_count),
            execution_time: Some(execution_time),
        };

        match self.client.create(&param).await {
            Ok(_) => MigrationResult {
                record_count,
                execution_time,
                success: true,
                message,
            },
            Err(e) => {
                error!("failed to save migration record: {}", e);

                MigrationResult {
                    record_count,
                    execution_time,
                    success: false,
                    message: "Migration completed but failed to save record to database."
                        .to_string(),
                }
            }
        }
    }
}

fn none_if_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Render a count with thousands separators, e.g. 15420 -> "15,420".
fn group_thousands(count: i32) -> String {
    let digits = count.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped
}
