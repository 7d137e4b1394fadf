//! HTTP routes for migration configuration records.

use actix_web::{HttpResponse, Responder, Scope, delete, get, patch, post, web};
use serde::Deserialize;
use tracing::error;

use crate::model::common::{ApiErrorBody, AppState};
use crate::model::migration::{
    InsertMigrationConfig, MigrationConfigInfo, UpdateDescriptionParam,
};
use crate::service;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListParams {
    agreement_filter: Option<String>,
}

#[get("")]
pub async fn list(data: web::Data<AppState>, params: web::Query<ListParams>) -> impl Responder {
    let configurations = service::migration::find_all(
        &data.database_connection,
        params.agreement_filter.as_deref(),
    )
    .await;

    match configurations {
        Ok(models) => {
            let records: Vec<MigrationConfigInfo> =
                models.into_iter().map(MigrationConfigInfo::from).collect();

            HttpResponse::Ok().json(records)
        }
        Err(e) => {
            error!("error fetching migration configurations: {}", e);

            HttpResponse::InternalServerError()
                .json(ApiErrorBody::new("Failed to fetch migration configurations"))
        }
    }
}

#[post("")]
pub async fn create(
    data: web::Data<AppState>,
    param: web::Json<InsertMigrationConfig>,
) -> impl Responder {
    let param = param.into_inner();

    if let Err(e) = param.validate() {
        error!("invalid migration configuration: {}", e);

        return HttpResponse::BadRequest()
            .json(ApiErrorBody::new("Failed to create migration configuration"));
    }

    match service::migration::create(&data.database_connection, param).await {
        Ok(model) => HttpResponse::Created().json(MigrationConfigInfo::from(model)),
        Err(e) => {
            error!("error creating migration configuration: {}", e);

            HttpResponse::BadRequest()
                .json(ApiErrorBody::new("Failed to create migration configuration"))
        }
    }
}

#[patch("/{id}/description")]
pub async fn update_description(
    data: web::Data<AppState>,
    path: web::Path<String>,
    param: web::Json<UpdateDescriptionParam>,
) -> impl Responder {
    let Ok(id) = path.into_inner().parse::<i32>() else {
        return HttpResponse::BadRequest()
            .json(ApiErrorBody::new("Failed to update migration description"));
    };

    match service::migration::update_description(
        &data.database_connection,
        id,
        &param.description,
    )
    .await
    {
        Ok(Some(model)) => HttpResponse::Ok().json(MigrationConfigInfo::from(model)),
        Ok(None) => HttpResponse::NotFound()
            .json(ApiErrorBody::new("Migration configuration not found")),
        Err(e) => {
            error!("error updating migration description: {}", e);

            HttpResponse::BadRequest()
                .json(ApiErrorBody::new("Failed to update migration description"))
        }
    }
}

#[delete("/{id}")]
pub async fn delete_configuration(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let Ok(id) = path.into_inner().parse::<i32>() else {
        return HttpResponse::BadRequest()
            .json(ApiErrorBody::new("Failed to delete migration configuration"));
    };

    match service::migration::delete(&data.database_connection, id).await {
        Ok(true) => HttpResponse::NoContent().finish(),
        Ok(false) => HttpResponse::NotFound()
            .json(ApiErrorBody::new("Migration configuration not found")),
        Err(e) => {
            error!("error deleting migration configuration: {}", e);

            HttpResponse::BadRequest()
                .json(ApiErrorBody::new("Failed to delete migration configuration"))
        }
    }
}

pub fn routers() -> Scope {
    web::scope("/migration-configurations")
        .service(list)
        .service(create)
        .service(update_description)
        .service(delete_configuration)
}
