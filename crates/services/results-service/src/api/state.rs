//! Application state.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::repository::{ResultRepository, ResultStore};
use crate::service::ResultService;

#[derive(Clone)]
pub struct AppState {
    pub results: Arc<ResultService>,
}

impl AppState {
    /// Wire the stack over a live database connection.
    pub fn new(db: DatabaseConnection) -> Self {
        let repo: Arc<dyn ResultRepository> = Arc::new(ResultStore::new(db));
        Self::with_repository(repo)
    }

    /// Wire the stack over an externally supplied repository (tests inject
    /// mocks here).
    pub fn with_repository(repo: Arc<dyn ResultRepository>) -> Self {
        Self {
            results: Arc::new(ResultService::new(repo)),
        }
    }
}
