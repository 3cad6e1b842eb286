//! PostgreSQL implementation of the customer repository.

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

use custdedup_types::{CustomerRecord, NewCustomer, SourceSystem};

use crate::modules::customer_pg_crud::{clear_all_impl, insert_many_impl, insert_one_impl};
use crate::modules::customer_pg_query::{list_all_impl, list_by_source_impl};
use crate::modules::repository::{CustomerRepository, RepoResult, RepositoryError};

/// PostgreSQL-backed customer repository.
pub struct PostgresCustomerRepository {
    /// Database connection pool.
    pool: PgPool,
}

impl PostgresCustomerRepository {
    /// Create repository with existing pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect to database and create repository.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(1)
            .acquire_timeout(Duration::from_secs(30))
            .idle_timeout(Duration::from_secs(300))
            .connect(database_url)
            .await?;
        Ok(Self::new(pool))
    }

    /// Run database migrations.
    pub async fn run_migrations(&self) -> RepoResult<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|err| RepositoryError::Database(err.to_string()))
    }
}

#[async_trait]
impl CustomerRepository for PostgresCustomerRepository {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn insert_one(&self, customer: NewCustomer) -> RepoResult<CustomerRecord> {
        insert_one_impl(&self.pool, customer).await
    }

    async fn insert_many(&self, customers: Vec<NewCustomer>) -> RepoResult<Vec<CustomerRecord>> {
        insert_many_impl(&self.pool, customers).await
    }

    async fn list_all(&self) -> RepoResult<Vec<CustomerRecord>> {
        list_all_impl(&self.pool).await
    }

    async fn list_by_source(&self, source: SourceSystem) -> RepoResult<Vec<CustomerRecord>> {
        list_by_source_impl(&self.pool, source).await
    }

    async fn clear_all(&self) -> RepoResult<u64> {
        clear_all_impl(&self.pool).await
    }
}
