use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

use crate::config::Config;
use crate::error::EngineError;
use crate::granularity::Granularity;
use crate::series::{RawBucket, TimeRange};

/// Everything the engine needs from a data store: the summed value per
/// truncated bucket over an inclusive window, ascending by bucket start,
/// read from a single consistent snapshot.
#[async_trait]
pub trait BucketStore: Send + Sync {
    async fn read_bucket_sums(
        &self,
        range: &TimeRange,
        granularity: Granularity,
    ) -> Result<Vec<RawBucket>, EngineError>;
}

#[derive(sqlx::FromRow)]
struct BucketRow {
    bucket_start: DateTime<Utc>,
    total: f64,
}

/// Postgres-backed store reading the `samples (dt timestamptz, value double
/// precision)` relation. Each call runs one repeatable-read read-only
/// transaction, so every bucket in a result reflects the same snapshot.
pub struct PgBucketStore {
    pool: PgPool,
    query_timeout: Duration,
}

impl PgBucketStore {
    pub fn new(pool: PgPool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }

    pub async fn connect(config: &Config) -> Result<Self, EngineError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.db_pool_size)
            .connect(&config.database_url)
            .await
            .map_err(store_unavailable)?;
        Ok(Self::new(pool, config.query_timeout()))
    }

    async fn run_bucket_query(
        &self,
        range: &TimeRange,
        granularity: Granularity,
    ) -> Result<Vec<RawBucket>, EngineError> {
        let mut tx = self.pool.begin().await.map_err(store_unavailable)?;

        // Isolation must be set before the transaction runs its first query.
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await
            .map_err(store_unavailable)?;
        // date_trunc cuts day and month boundaries in the session time zone.
        sqlx::query("SET LOCAL TIME ZONE 'UTC'")
            .execute(&mut *tx)
            .await
            .map_err(store_unavailable)?;

        let rows: Vec<BucketRow> = sqlx::query_as(
            r#"
            SELECT
                date_trunc($1, dt) as bucket_start,
                sum(value) as total
            FROM samples
            WHERE dt >= $2
              AND dt <= $3
            GROUP BY bucket_start
            ORDER BY bucket_start ASC
            "#,
        )
        .bind(granularity.as_str())
        .bind(range.from)
        .bind(range.to)
        .fetch_all(&mut *tx)
        .await
        .map_err(store_unavailable)?;

        tx.commit().await.map_err(|err| {
            tracing::error!(error = %err, "bucket query commit failed");
            EngineError::TransactionError(err.to_string())
        })?;

        Ok(rows
            .into_iter()
            .map(|row| RawBucket {
                bucket_start: row.bucket_start,
                total: row.total,
            })
            .collect())
    }
}

#[async_trait]
impl BucketStore for PgBucketStore {
    async fn read_bucket_sums(
        &self,
        range: &TimeRange,
        granularity: Granularity,
    ) -> Result<Vec<RawBucket>, EngineError> {
        let query = self.run_bucket_query(range, granularity);
        match tokio::time::timeout(self.query_timeout, query).await {
            Ok(result) => result,
            Err(_) => {
                tracing::error!(
                    timeout_ms = self.query_timeout.as_millis() as u64,
                    "bucket query timed out"
                );
                Err(EngineError::StoreUnavailable(format!(
                    "bucket query timed out after {}ms",
                    self.query_timeout.as_millis()
                )))
            }
        }
    }
}

fn store_unavailable(err: sqlx::Error) -> EngineError {
    tracing::error!(error = %err, "bucket query failed");
    EngineError::StoreUnavailable(err.to_string())
}
