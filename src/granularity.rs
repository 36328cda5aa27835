use chrono::{DateTime, Duration, Months, Utc};

/// Bucket width used both for grouping in the store and for stepping the
/// series cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Granularity {
    Hour,
    Day,
    Month,
}

impl Granularity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Month => "month",
        }
    }
}

pub fn parse_granularity(value: &str) -> Option<Granularity> {
    match value {
        "hour" => Some(Granularity::Hour),
        "day" => Some(Granularity::Day),
        "month" => Some(Granularity::Month),
        _ => None,
    }
}

/// Steps a timestamp forward by exactly one bucket. Month steps follow the
/// calendar and clamp the day when the next month is shorter, so one month
/// after Jan 31 is Feb 28 (or Feb 29 in a leap year).
pub fn advance(ts: DateTime<Utc>, granularity: Granularity) -> DateTime<Utc> {
    match granularity {
        Granularity::Hour => ts.checked_add_signed(Duration::hours(1)).unwrap_or(ts),
        Granularity::Day => ts.checked_add_signed(Duration::days(1)).unwrap_or(ts),
        Granularity::Month => ts.checked_add_months(Months::new(1)).unwrap_or(ts),
    }
}
