//! Customer query operations for PostgreSQL.

use sqlx::postgres::PgPool;

use custdedup_types::{CustomerRecord, SourceSystem};

use crate::modules::customer_pg_helpers::{map_sqlx_err, row_to_customer, CUSTOMER_COLUMNS};
use crate::modules::repository::RepoResult;

/// List all customers.
pub(crate) async fn list_all_impl(pool: &PgPool) -> RepoResult<Vec<CustomerRecord>> {
    let rows = sqlx::query(&format!("SELECT {CUSTOMER_COLUMNS} FROM customers ORDER BY id"))
        .fetch_all(pool)
        .await
        .map_err(map_sqlx_err)?;

    rows.iter().map(row_to_customer).collect()
}

/// List customers imported from one source.
pub(crate) async fn list_by_source_impl(
    pool: &PgPool,
    source: SourceSystem,
) -> RepoResult<Vec<CustomerRecord>> {
    let rows = sqlx::query(&format!(
        "SELECT {CUSTOMER_COLUMNS} FROM customers WHERE source = $1 ORDER BY id"
    ))
    .bind(source.as_str())
    .fetch_all(pool)
    .await
    .map_err(map_sqlx_err)?;

    rows.iter().map(row_to_customer).collect()
}
