//! Main entry point for the Carga server.

use actix_web::{App, HttpServer, middleware::Logger, web};
use tracing::info;

use carga::{
    api,
    model::{self, common::AppState},
    startup,
};
use carga_migration::{Migrator, MigratorTrait};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let configuration = model::common::Configuration::new();
    let _logging_guard = startup::init_logging(&configuration.logging_config())?;

    let database_connection = configuration.database_connection().await?;
    Migrator::up(&database_connection, None).await?;
    info!("database schema is up to date");

    let address = configuration.server_address();
    let server_port = configuration.server_port();
    let context_path = configuration.context_path();

    let app_state = AppState {
        app_config: configuration,
        database_connection,
        context_path: context_path.clone(),
    };

    info!("starting carga server on {}:{}", address, server_port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(app_state.clone()))
            .service(
                web::scope(&context_path)
                    .service(api::migration::routers())
                    .service(api::health::routers()),
            )
    })
    .bind((address, server_port))?
    .run()
    .await?;

    Ok(())
}
