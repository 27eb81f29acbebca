pub mod contact_service;

use super::Config;
use crate::persistence::DbContext;
use contact_service::{ContactService, ContactServiceApi};
use std::sync::Arc;
use thiserror::Error;

/// Generic result type
pub type Result<T> = std::result::Result<T, Error>;

/// Generic error type
#[derive(Debug, Error)]
pub enum Error {
    /// all errors originating from the persistence layer
    #[error("Persistence error: {0}")]
    Persistence(#[from] contacts_persistence::Error),

    /// errors that currently return early http status code Status::NotFound
    #[error("not found")]
    NotFound,

    /// errors that stem from validation
    #[error("Validation Error: {0}")]
    Validation(String),
}

/// A dependency container for all services that are used by the application
#[derive(Clone)]
pub struct ServiceContext {
    pub config: Config,
    pub contact_service: Arc<dyn ContactServiceApi>,
}

/// Builds up the service context dependencies from the given database context
pub fn create_service_context(config: Config, db: DbContext) -> ServiceContext {
    let contact_service = Arc::new(ContactService::new(db.contact_store));

    ServiceContext {
        config,
        contact_service,
    }
}
