//! # series-engine
//!
//! Turns a raw timestamped value stream into a dense, zero-filled series of
//! sums bucketed by hour, day or calendar month. The store is read through
//! the [`BucketStore`] capability; [`PgBucketStore`] is the Postgres
//! implementation, reading every bucket of a request from one consistent
//! snapshot. Buckets absent from the store are reconciled to zero so the
//! returned series covers the requested window without holes.
//!
//! ```no_run
//! use series_engine::{Config, PgBucketStore, SeriesEngine, SeriesRequest};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = Config::from_env()?;
//! let store = PgBucketStore::connect(&config).await?;
//! let engine = SeriesEngine::new(store);
//!
//! let request = SeriesRequest {
//!     dt_from: "2022-10-01T00:00:00".to_string(),
//!     dt_upto: "2022-11-01T00:00:00".to_string(),
//!     group_type: "day".to_string(),
//! };
//! let series = engine.series(&request).await?;
//! println!("{}", series.to_json()?);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod granularity;
pub mod reconcile;
pub mod request;
pub mod series;
pub mod store;

pub use config::Config;
pub use engine::SeriesEngine;
pub use error::EngineError;
pub use granularity::{advance, parse_granularity, Granularity};
pub use reconcile::reconcile;
pub use request::SeriesRequest;
pub use series::{RawBucket, SeriesResult, TimeRange};
pub use store::{BucketStore, PgBucketStore};
