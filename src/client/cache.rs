//! Client-side query cache for list responses.
//!
//! Keyed by endpoint + filter. Every mutation against a collection must
//! invalidate that collection's entries before the caller observes
//! completion, so a refetch after create/update/delete always hits the
//! server.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::model::migration::MigrationConfigInfo;
use crate::service::migration::FILTER_ALL;

#[derive(Debug, Default)]
pub struct QueryCache {
    entries: RwLock<HashMap<String, Vec<MigrationConfigInfo>>>,
}

impl QueryCache {
    /// Cache key for a list query. An absent filter and the `all` sentinel
    /// produce the same key, matching the server's behavior.
    pub fn key(endpoint: &str, filter: Option<&str>) -> String {
        format!(
            "{}?agreementFilter={}",
            endpoint,
            filter.unwrap_or(FILTER_ALL)
        )
    }

    pub fn get(&self, key: &str) -> Option<Vec<MigrationConfigInfo>> {
        self.entries.read().unwrap().get(key).cloned()
    }

    pub fn put(&self, key: String, records: Vec<MigrationConfigInfo>) {
        self.entries.write().unwrap().insert(key, records);
    }

    /// Drop every cached query for the given endpoint, whatever its filter.
    pub fn invalidate_endpoint(&self, endpoint: &str) {
        self.entries
            .write()
            .unwrap()
            .retain(|key, _| !key.starts_with(endpoint));
    }
}
