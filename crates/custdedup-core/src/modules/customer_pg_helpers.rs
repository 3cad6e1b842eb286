//! Helper functions for PostgreSQL customer operations.

use sqlx::Row;

use custdedup_types::{CustomerRecord, SourceSystem};

use crate::modules::repository::{RepoResult, RepositoryError};

pub(crate) const CUSTOMER_COLUMNS: &str =
    "id, customer_id, name, email, source, created_at, updated_at";

/// Convert a PostgreSQL row to a CustomerRecord.
pub(crate) fn row_to_customer(row: &sqlx::postgres::PgRow) -> RepoResult<CustomerRecord> {
    let source_tag: String = row.get("source");
    let source: SourceSystem = source_tag
        .parse()
        .map_err(|err: custdedup_types::CustomerError| {
            RepositoryError::Serialization(err.to_string())
        })?;

    Ok(CustomerRecord {
        id: row.get("id"),
        customer_id: row.get("customer_id"),
        name: row.get("name"),
        email: row.get("email"),
        source,
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    })
}

/// Map sqlx error to repository error.
pub(crate) fn map_sqlx_err(err: sqlx::Error) -> RepositoryError {
    RepositoryError::Database(err.to_string())
}
