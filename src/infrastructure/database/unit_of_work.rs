//! Transaction Boundaries
//!
//! Groups several statements into one atomic unit: everything commits
//! together or the transaction is rolled back when dropped.

use std::future::Future;
use std::pin::Pin;

use sqlx::{PgPool, Postgres, Transaction};

use crate::shared::error::AppError;

/// Boxed future borrowing the open transaction.
pub type TxFuture<'c, T> = Pin<Box<dyn Future<Output = Result<T, AppError>> + Send + 'c>>;

/// Execute a closure within a transaction.
///
/// Commits when the closure returns `Ok`; on `Err` the transaction is
/// dropped, which rolls it back.
///
/// # Example
/// ```ignore
/// let booking = with_transaction(&pool, |tx| Box::pin(async move {
///     debit(tx, booker_id, amount).await?;
///     credit(tx, owner_id, amount).await?;
///     insert_booking(tx, &booking).await
/// })).await?;
/// ```
pub async fn with_transaction<F, T>(pool: &PgPool, f: F) -> Result<T, AppError>
where
    F: for<'c> FnOnce(&'c mut Transaction<'static, Postgres>) -> TxFuture<'c, T>,
{
    let mut tx = pool.begin().await?;

    match f(&mut tx).await {
        Ok(result) => {
            tx.commit().await?;
            Ok(result)
        }
        Err(e) => {
            tracing::debug!(error = %e, "Rolling back transaction");
            tx.rollback().await?;
            Err(e)
        }
    }
}
