//! Repository contract: List/Create/Get/Update/Delete for one resource type.

mod sqlite;
pub use sqlite::{SqlResource, SqliteRepository};

use crate::error::RepositoryError;
use crate::resource::Resource;
use async_trait::async_trait;
use std::collections::HashMap;

/// Query-string filter for `list`. Only `limit` is recognized.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListFilter {
    pub limit: Option<u32>,
}

impl ListFilter {
    /// Absent, empty or non-numeric `limit` means no limit.
    pub fn from_query(params: &HashMap<String, String>) -> Self {
        let limit = params
            .get("limit")
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .and_then(|v| v.parse().ok());
        ListFilter { limit }
    }
}

#[async_trait]
pub trait Repository<R: Resource>: Send + Sync + 'static {
    /// Matching rows; none is an empty vec, not an error.
    async fn list(&self, filter: &ListFilter) -> Result<Vec<R>, RepositoryError>;

    /// Persists a new record and returns it with the identity storage assigned.
    async fn create(&self, resource: R) -> Result<R, RepositoryError>;

    async fn get(&self, id: i64) -> Result<R, RepositoryError>;

    /// `NotFound` when no row has `id`. The returned value carries `id`.
    async fn update(&self, id: i64, resource: R) -> Result<R, RepositoryError>;

    /// `NotFound` when no row has `id`.
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}
