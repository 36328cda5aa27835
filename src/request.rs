use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::Deserialize;

use crate::error::EngineError;
use crate::granularity::{parse_granularity, Granularity};
use crate::series::TimeRange;

/// Raw request fields exactly as the transport hands them over.
#[derive(Clone, Debug, Deserialize)]
pub struct SeriesRequest {
    pub dt_from: String,
    pub dt_upto: String,
    pub group_type: String,
}

impl SeriesRequest {
    /// Checks all three fields and produces the typed query parameters.
    /// Always runs before any store access.
    pub fn validate(&self) -> Result<(TimeRange, Granularity), EngineError> {
        let from = parse_timestamp(&self.dt_from)?;
        let to = parse_timestamp(&self.dt_upto)?;
        let granularity = parse_granularity(&self.group_type)
            .ok_or_else(|| EngineError::InvalidGranularity(self.group_type.clone()))?;
        let range = TimeRange::new(from, to)?;
        Ok((range, granularity))
    }
}

/// Accepts RFC 3339, a naive ISO 8601 datetime, or a bare date. Inputs
/// without an offset are read as UTC.
fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, EngineError> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Ok(ts.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        .map_err(|_| EngineError::ParseError(value.to_string()))
}
