//! Console-side components: HTTP access to the record store, the query
//! cache, the execution form controller, and the execution backend.

pub mod api_client;
pub mod cache;
pub mod executor;
pub mod form;
pub mod http_client;

pub use api_client::ApiClient;
pub use cache::QueryCache;
pub use executor::{ExecutionBackend, SimulatedExecutor};
pub use form::{DescriptionEdit, FormController, FormField, MigrationConfigForm};
pub use http_client::{HttpClient, HttpClientConfig};
