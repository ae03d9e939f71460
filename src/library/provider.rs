use std::sync::Arc;

use async_trait::async_trait;

use super::{model::Snapshot, status::ConnectorStatus};
use crate::{error::LibraryError, nav::route::Route};

#[derive(Debug, Clone, Default)]
pub struct SearchResults {
    pub query: String,
    pub items: Vec<Route>,
}

impl SearchResults {
    pub fn empty(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            items: Vec::new(),
        }
    }
}

/// The library side of the remote: catalogue snapshots, connection status
/// and catalogue queries.
#[async_trait]
pub trait LibraryProvider: Send + Sync {
    fn snapshot(&self) -> Arc<Snapshot>;
    fn status(&self) -> ConnectorStatus;
    async fn search(&self, query: &str) -> Result<SearchResults, LibraryError>;
}
