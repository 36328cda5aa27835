use crate::error::EngineError;
use crate::reconcile::reconcile;
use crate::request::SeriesRequest;
use crate::series::SeriesResult;
use crate::store::BucketStore;

/// Front door of the crate. Validates a request, reads bucket sums through
/// the store capability and reconciles them into a dense series.
pub struct SeriesEngine<S> {
    store: S,
}

impl<S: BucketStore> SeriesEngine<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub async fn series(&self, request: &SeriesRequest) -> Result<SeriesResult, EngineError> {
        let (range, granularity) = request.validate()?;
        tracing::debug!(
            from = %range.from,
            to = %range.to,
            granularity = granularity.as_str(),
            "running bucket query"
        );
        let raw = self.store.read_bucket_sums(&range, granularity).await?;
        let result = reconcile(&range, granularity, &raw)?;
        tracing::debug!(
            raw_buckets = raw.len(),
            points = result.labels.len(),
            "series reconciled"
        );
        Ok(result)
    }
}
