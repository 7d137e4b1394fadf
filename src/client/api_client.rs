//! Typed API client for the migration configuration routes.

use serde::Serialize;

use crate::client::cache::QueryCache;
use crate::client::http_client::HttpClient;
use crate::model::migration::{
    InsertMigrationConfig, MigrationConfigInfo, UpdateDescriptionParam,
};

pub const CONFIGURATIONS_ENDPOINT: &str = "/migration-configurations";

/// API client providing typed access to the record store, with a query cache
/// in front of the list route.
pub struct ApiClient {
    http_client: HttpClient,
    cache: QueryCache,
}

impl ApiClient {
    pub fn new(http_client: HttpClient) -> Self {
        Self {
            http_client,
            cache: QueryCache::default(),
        }
    }

    pub async fn list(
        &self,
        agreement_filter: Option<&str>,
    ) -> anyhow::Result<Vec<MigrationConfigInfo>> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Query<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            agreement_filter: Option<&'a str>,
        }

        let key = QueryCache::key(CONFIGURATIONS_ENDPOINT, agreement_filter);

        if let Some(cached) = self.cache.get(&key) {
            return Ok(cached);
        }

        let records: Vec<MigrationConfigInfo> = self
            .http_client
            .get_with_query(CONFIGURATIONS_ENDPOINT, &Query { agreement_filter })
            .await?;

        self.cache.put(key, records.clone());

        Ok(records)
    }

    pub async fn create(
        &self,
        param: &InsertMigrationConfig,
    ) -> anyhow::Result<MigrationConfigInfo> {
        let created = self
            .http_client
            .post_json(CONFIGURATIONS_ENDPOINT, param)
            .await?;

        self.cache.invalidate_endpoint(CONFIGURATIONS_ENDPOINT);

        Ok(created)
    }

    pub async fn update_description(
        &self,
        id: i32,
        description: &str,
    ) -> anyhow::Result<MigrationConfigInfo> {
        let path = format!("{}/{}/description", CONFIGURATIONS_ENDPOINT, id);
        let param = UpdateDescriptionParam {
            description: description.to_string(),
        };

        let updated = self.http_client.patch_json(&path, &param).await?;

        self.cache.invalidate_endpoint(CONFIGURATIONS_ENDPOINT);

        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> anyhow::Result<()> {
        let path = format!("{}/{}", CONFIGURATIONS_ENDPOINT, id);

        self.http_client.delete(&path).await?;

        self.cache.invalidate_endpoint(CONFIGURATIONS_ENDPOINT);

        Ok(())
    }
}
