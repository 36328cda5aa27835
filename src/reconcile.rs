use chrono::{DateTime, Utc};

use crate::error::EngineError;
use crate::granularity::{advance, Granularity};
use crate::series::{RawBucket, SeriesResult, TimeRange};

/// Turns the sparse ascending bucket sums for a window into a dense series,
/// substituting zero for every bucket the store returned nothing for.
///
/// Real buckets keep the store's truncated start as their label, so a window
/// that does not begin on a bucket boundary is labeled with the boundary,
/// not the window start. After the last real bucket exactly one trailing
/// zero bucket is appended when one more step still fits inside the window;
/// a window with no real buckets at all is zero-filled end to end. A cursor
/// that cannot step further (the edge of representable time) reads as past
/// the window end.
pub fn reconcile(
    range: &TimeRange,
    granularity: Granularity,
    raw: &[RawBucket],
) -> Result<SeriesResult, EngineError> {
    if range.from > range.to {
        return Err(EngineError::MalformedInput(format!(
            "window start {} is after window end {}",
            range.from.to_rfc3339(),
            range.to.to_rfc3339()
        )));
    }

    let mut dataset: Vec<f64> = Vec::new();
    let mut labels: Vec<DateTime<Utc>> = Vec::new();
    let mut cursor = Some(range.from);
    let mut previous: Option<DateTime<Utc>> = None;

    for bucket in raw {
        if let Some(prev) = previous {
            if bucket.bucket_start <= prev {
                return Err(EngineError::MalformedInput(format!(
                    "bucket sums out of order at {}",
                    bucket.bucket_start.to_rfc3339()
                )));
            }
        }
        previous = Some(bucket.bucket_start);

        while let Some(at) = cursor {
            if bucket.bucket_start <= at {
                break;
            }
            dataset.push(0.0);
            labels.push(at);
            cursor = step(at, granularity);
        }
        dataset.push(bucket.total);
        labels.push(bucket.bucket_start);
        cursor = step(bucket.bucket_start, granularity);
    }

    match raw.last() {
        Some(last) => {
            if let Some(tail) = step(last.bucket_start, granularity) {
                if tail <= range.to {
                    dataset.push(0.0);
                    labels.push(tail);
                }
            }
        }
        None => {
            while let Some(at) = cursor {
                if at > range.to {
                    break;
                }
                dataset.push(0.0);
                labels.push(at);
                cursor = step(at, granularity);
            }
        }
    }

    Ok(SeriesResult {
        dataset,
        labels: labels.into_iter().map(|ts| ts.to_rfc3339()).collect(),
    })
}

/// One bucket forward, or None once the step would leave representable time.
fn step(ts: DateTime<Utc>, granularity: Granularity) -> Option<DateTime<Utc>> {
    let next = advance(ts, granularity);
    if next > ts {
        Some(next)
    } else {
        None
    }
}
