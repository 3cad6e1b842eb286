use sqlx::postgres::{PgPool, PgRow};
use sqlx::{Executor, Postgres};

use custdedup_types::{CustomerRecord, NewCustomer};

use crate::modules::customer_pg_helpers::{map_sqlx_err, row_to_customer, CUSTOMER_COLUMNS};
use crate::modules::repository::RepoResult;

async fn insert_row<'e, E>(executor: E, customer: &NewCustomer) -> RepoResult<PgRow>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query(&format!(
        r#"INSERT INTO customers (customer_id, name, email, source, created_at)
           VALUES ($1, $2, $3, $4, NOW())
           RETURNING {CUSTOMER_COLUMNS}"#
    ))
    .bind(customer.customer_id())
    .bind(customer.name())
    .bind(customer.email())
    .bind(customer.source().as_str())
    .fetch_one(executor)
    .await
    .map_err(map_sqlx_err)
}

pub(crate) async fn insert_one_impl(
    pool: &PgPool,
    customer: NewCustomer,
) -> RepoResult<CustomerRecord> {
    let row = insert_row(pool, &customer).await?;
    row_to_customer(&row)
}

/// Insert a batch inside one transaction. Any failure rolls the whole batch
/// back when `tx` is dropped without commit.
pub(crate) async fn insert_many_impl(
    pool: &PgPool,
    customers: Vec<NewCustomer>,
) -> RepoResult<Vec<CustomerRecord>> {
    let mut tx = pool.begin().await.map_err(map_sqlx_err)?;

    let mut records = Vec::with_capacity(customers.len());
    for customer in &customers {
        let row = insert_row(&mut *tx, customer).await?;
        records.push(row_to_customer(&row)?);
    }

    tx.commit().await.map_err(map_sqlx_err)?;

    tracing::debug!("Inserted {} customer records in one transaction", records.len());
    Ok(records)
}

pub(crate) async fn clear_all_impl(pool: &PgPool) -> RepoResult<u64> {
    let result = sqlx::query("DELETE FROM customers").execute(pool).await.map_err(map_sqlx_err)?;
    Ok(result.rows_affected())
}
