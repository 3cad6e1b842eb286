//! Application State
//!
//! Holds the customer service shared by every handler.

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

use custdedup_core::modules::customer_pg::PostgresCustomerRepository;
use custdedup_core::{CustomerRepository, CustomerService, InMemoryCustomerRepository};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub(crate) inner: Arc<AppStateInner>,
}

pub struct AppStateInner {
    pub service: CustomerService,
}

impl AppState {
    pub fn new(service: CustomerService) -> Self {
        Self { inner: Arc::new(AppStateInner { service }) }
    }

    pub fn service(&self) -> &CustomerService {
        &self.inner.service
    }
}

/// Build the record store selected by configuration.
///
/// With a database URL the Postgres store is used and migrated; otherwise
/// records live in process memory and vanish on exit.
pub async fn open_store(
    database_url: Option<&str>,
    max_connections: u32,
) -> Result<Arc<dyn CustomerRepository>> {
    match database_url {
        Some(url) => {
            let repo = PostgresCustomerRepository::connect(url, max_connections)
                .await
                .context("Failed to connect to PostgreSQL")?;
            repo.run_migrations().await.context("Failed to run database migrations")?;
            info!("Using PostgreSQL record store");
            Ok(Arc::new(repo))
        },
        None => {
            info!("DATABASE_URL not set, using in-memory record store");
            Ok(Arc::new(InMemoryCustomerRepository::new()))
        },
    }
}
