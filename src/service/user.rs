//! Store operations for user accounts.
//!
//! Users are not reachable through any HTTP route; these operations mirror
//! the storage interface for completeness.

use sea_orm::*;

use crate::entity::users;

pub async fn find_by_id(
    db: &DatabaseConnection,
    id: i32,
) -> anyhow::Result<Option<users::Model>> {
    let user = users::Entity::find_by_id(id).one(db).await?;

    Ok(user)
}

pub async fn find_by_username(
    db: &DatabaseConnection,
    username: &str,
) -> anyhow::Result<Option<users::Model>> {
    let user = users::Entity::find()
        .filter(users::Column::Username.eq(username))
        .one(db)
        .await?;

    Ok(user)
}

pub async fn create(
    db: &DatabaseConnection,
    username: &str,
    password: &str,
) -> anyhow::Result<users::Model> {
    let active_model = users::ActiveModel {
        username: Set(username.to_string()),
        password: Set(password.to_string()),
        ..Default::default()
    };

    let user = active_model.insert(db).await?;

    Ok(user)
}
