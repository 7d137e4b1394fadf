// End-to-end tests: form controller -> simulated execution -> HTTP surface
// -> record store, against a real server on a random local port.

use std::sync::Arc;

use actix_web::{App, HttpServer, web};

use carga::api;
use carga::client::{
    ApiClient, FormController, FormField, HttpClient, HttpClientConfig, SimulatedExecutor,
};
use carga::model::common::{AppState, Configuration};
use carga_migration::{Migrator, MigratorTrait};
use sea_orm::Database;

async fn start_server() -> u16 {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("failed to connect to in-memory sqlite");

    Migrator::up(&db, None).await.expect("failed to run migrations");

    let app_state = AppState {
        app_config: Configuration::default(),
        database_connection: db,
        context_path: "/api".to_string(),
    };

    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .service(
                web::scope("/api")
                    .service(api::migration::routers())
                    .service(api::health::routers()),
            )
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("failed to bind test server");

    let port = server.addrs()[0].port();

    actix_web::rt::spawn(server.run());

    port
}

fn client_for(port: u16) -> Arc<ApiClient> {
    let http_client = HttpClient::new(HttpClientConfig::new(format!("http://127.0.0.1:{}", port)))
        .expect("failed to build http client");

    Arc::new(ApiClient::new(http_client))
}

fn fill_valid_form(form: &mut FormController) {
    form.set_field(FormField::SourceDbServer, "SQL01");
    form.set_field(FormField::SourceDbName, "SRC");
    form.set_field(FormField::TargetDbName, "TGT");
    form.set_field(FormField::EtlDbName, "ETL");
    form.set_field(FormField::Agreement, "provider-import");
    form.set_field(FormField::ExportCriteria, "all-records");
}

#[actix_web::test]
async fn test_execution_creates_history_record() {
    let port = start_server().await;
    let client = client_for(port);
    let backend = Arc::new(SimulatedExecutor::with_delay_range(client.clone(), 0, 0));
    let mut form = FormController::new(client.clone(), backend);

    fill_valid_form(&mut form);

    let result = form.submit().await.expect("valid form should execute");

    assert!(result.success);
    assert!(result.message.contains("Provider Import"));
    assert!(result.message.contains("All Records"));
    assert!((5000..55000).contains(&result.record_count));

    let records = client.list(None).await.unwrap();

    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.status, "completed");
    assert_eq!(record.agreement, "provider-import");
    assert_eq!(record.agreement_label, "Provider Import");
    assert_eq!(record.criteria_label, "All Records");
    assert_eq!(record.record_count, result.record_count);
    assert_eq!(record.execution_time, result.execution_time);
    assert_eq!(record.description, "");
    assert!(record.file_name.starts_with("ProviderImport_"));
    assert!(record.file_name.ends_with(".dtsx"));
}

#[actix_web::test]
async fn test_rejected_submit_creates_nothing() {
    let port = start_server().await;
    let client = client_for(port);
    let backend = Arc::new(SimulatedExecutor::with_delay_range(client.clone(), 0, 0));
    let mut form = FormController::new(client.clone(), backend);

    fill_valid_form(&mut form);
    form.set_field(FormField::ExportCriteria, "by-contract");
    // selection parameter left empty

    assert!(form.submit().await.is_none());
    assert!(form.errors().contains_key(&FormField::SelectionParameter));

    let records = client.list(None).await.unwrap();
    assert!(records.is_empty());
}

#[actix_web::test]
async fn test_description_edit_flow_invalidates_cache() {
    let port = start_server().await;
    let client = client_for(port);
    let backend = Arc::new(SimulatedExecutor::with_delay_range(client.clone(), 0, 0));
    let mut form = FormController::new(client.clone(), backend);

    fill_valid_form(&mut form);
    form.set_field(FormField::AgreementNotes, "initial notes");
    form.submit().await.expect("valid form should execute");

    let records = client.list(None).await.unwrap();
    assert_eq!(records[0].description, "initial notes");

    form.begin_edit_description(records[0].id, &records[0].description);
    form.set_edit_buffer("corrected notes");
    form.save_description().await;
    assert!(form.editing().is_none());

    // the cached list was invalidated by the update
    let records = client.list(None).await.unwrap();
    assert_eq!(records[0].description, "corrected notes");
}

#[actix_web::test]
async fn test_execution_degrades_when_store_is_unreachable() {
    // no server on this port
    let client = client_for(1);
    let backend = Arc::new(SimulatedExecutor::with_delay_range(client.clone(), 0, 0));
    let mut form = FormController::new(client, backend);

    fill_valid_form(&mut form);

    let result = form.submit().await.expect("execution still completes");

    assert!(!result.success);
    assert_eq!(
        result.message,
        "Migration completed but failed to save record to database."
    );
    // the synthesized outcome is still surfaced
    assert!((5000..55000).contains(&result.record_count));
}

#[actix_web::test]
async fn test_delete_through_client() {
    let port = start_server().await;
    let client = client_for(port);
    let backend = Arc::new(SimulatedExecutor::with_delay_range(client.clone(), 0, 0));
    let mut form = FormController::new(client.clone(), backend);

    fill_valid_form(&mut form);
    form.submit().await.expect("valid form should execute");

    let records = client.list(None).await.unwrap();
    assert_eq!(records.len(), 1);

    client.delete(records[0].id).await.unwrap();

    let records = client.list(None).await.unwrap();
    assert!(records.is_empty());

    // deleting an unknown id surfaces an error the caller may swallow
    assert!(client.delete(9999).await.is_err());
}
