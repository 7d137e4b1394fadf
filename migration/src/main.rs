use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    cli::run_cli(carga_migration::Migrator).await;
}
