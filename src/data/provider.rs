use std::time::Duration;

use async_trait::async_trait;

use crate::config::{CHART, DF};
use crate::data::{FetchError, placeholder};
use crate::domain::CashFlowSeries;

/// Abstract interface for fetching cash flow data.
#[async_trait]
pub trait CashFlowProvider: Send + Sync {
    /// Synchronous stand-in shown while `fetch_series` is pending.
    fn fetch_placeholder(&self) -> CashFlowSeries {
        placeholder::fetch_placeholder()
    }

    async fn fetch_series(&self) -> Result<CashFlowSeries, FetchError>;
}

#[derive(Debug, Clone)]
enum Source {
    Random,
    Fixture(CashFlowSeries),
}

/// Local data generation behind a simulated network delay.
#[derive(Debug, Clone)]
pub struct DemoProvider {
    latency: Duration,
    source: Source,
    failure: Option<FetchError>,
}

impl Default for DemoProvider {
    fn default() -> Self {
        Self::new(CHART.simulated_latency)
    }
}

impl DemoProvider {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            source: Source::Random,
            failure: None,
        }
    }

    /// Always answer with `series` instead of random values.
    pub fn with_fixture(mut self, series: CashFlowSeries) -> Self {
        self.source = Source::Fixture(series);
        self
    }

    /// Fixture from a JSON document shaped like `CashFlowSeries`.
    pub fn with_fixture_json(self, json: &str) -> Result<Self, FetchError> {
        let series: CashFlowSeries = serde_json::from_str(json)?;
        Ok(self.with_fixture(series))
    }

    /// Every fetch resolves to `err` after the usual latency.
    pub fn with_failure(mut self, err: FetchError) -> Self {
        self.failure = Some(err);
        self
    }
}

#[async_trait]
impl CashFlowProvider for DemoProvider {
    async fn fetch_series(&self) -> Result<CashFlowSeries, FetchError> {
        if DF.log_fetch {
            log::info!(
                "Fetching series (simulated latency {}ms)",
                self.latency.as_millis()
            );
        }

        tokio::time::sleep(self.latency).await;

        if let Some(err) = &self.failure {
            return Err(err.clone());
        }

        match &self.source {
            Source::Fixture(series) => Ok(series.clone()),
            Source::Random => placeholder::random_series()
                .map_err(|e| FetchError::Network(format!("random source failed: {}", e))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CashFlowRecord, ReportPeriod};

    #[tokio::test]
    async fn fixture_is_returned_verbatim() {
        let fixture = CashFlowSeries::new(
            vec![CashFlowRecord::new("Monday", 1.0, 2.0)],
            vec![CashFlowRecord::new("Monday", 3.0, 4.0)],
        );
        let provider = DemoProvider::new(Duration::ZERO).with_fixture(fixture.clone());
        assert_eq!(provider.fetch_series().await, Ok(fixture));
    }

    #[tokio::test]
    async fn random_series_has_placeholder_shape() {
        let provider = DemoProvider::new(Duration::ZERO);
        let placeholder = provider.fetch_placeholder();
        let series = provider.fetch_series().await.unwrap();
        assert!(placeholder.same_shape(&series));
        assert!(series.validate().is_ok());
    }

    #[tokio::test]
    async fn configured_failure_is_reported() {
        let provider = DemoProvider::new(Duration::from_millis(1))
            .with_failure(FetchError::Network("offline".into()));
        assert_eq!(
            provider.fetch_series().await,
            Err(FetchError::Network("offline".into()))
        );
    }

    #[test]
    fn fixture_json_is_parsed() {
        let json = r#"{
            "week_to_date": [{"label": "Monday", "cash_in": 1.0, "cash_out": 2.0}],
            "month_to_date": [{"label": "Monday", "cash_in": 5.0, "cash_out": 6.0}]
        }"#;
        let provider = DemoProvider::new(Duration::ZERO)
            .with_fixture_json(json)
            .unwrap();
        match provider.source {
            Source::Fixture(series) => {
                assert_eq!(series.find(ReportPeriod::Month, "Monday").map(|r| r.cash_in()), Some(5.0));
            }
            Source::Random => panic!("expected fixture"),
        }

        let err = DemoProvider::new(Duration::ZERO)
            .with_fixture_json("{not json")
            .unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }
}
