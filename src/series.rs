use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::EngineError;

/// Inclusive request window, both endpoints in UTC.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeRange {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl TimeRange {
    pub fn new(from: DateTime<Utc>, to: DateTime<Utc>) -> Result<Self, EngineError> {
        if from > to {
            return Err(EngineError::MalformedInput(format!(
                "window start {} is after window end {}",
                from.to_rfc3339(),
                to.to_rfc3339()
            )));
        }
        Ok(Self { from, to })
    }
}

/// One grouped row from the store: a truncated bucket start and the sum of
/// every sample value that truncates to it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RawBucket {
    pub bucket_start: DateTime<Utc>,
    pub total: f64,
}

/// Dense series covering the request window. `dataset[i]` is the summed
/// value for the bucket labeled `labels[i]`; labels are RFC 3339 strings in
/// ascending order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SeriesResult {
    pub dataset: Vec<f64>,
    pub labels: Vec<String>,
}

impl SeriesResult {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
