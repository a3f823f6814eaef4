use std::sync::Arc;
use std::time::Duration;

use futures::future::{AbortHandle, Abortable};
use tokio::runtime::Handle;
use tokio::sync::oneshot::{self, error::TryRecvError};

use crate::config::DF;
use crate::data::{CashFlowProvider, FetchError};
use crate::domain::CashFlowSeries;
use crate::utils::{AppInstant, format_duration};

pub type FetchOutcome = Result<CashFlowSeries, FetchError>;

/// One in-flight `fetch_series` call running on the tokio runtime.
///
/// The result comes back over a oneshot channel and is only ever read by the
/// owner. `cancel` aborts the future and drops the receiving end, so a cancelled
/// fetch can never deliver anything. Dropping the task cancels it too.
pub struct FetchTask {
    rx: Option<oneshot::Receiver<FetchOutcome>>,
    abort: AbortHandle,
    started: AppInstant,
}

impl FetchTask {
    pub fn spawn(runtime: &Handle, provider: Arc<dyn CashFlowProvider>, timeout: Duration) -> Self {
        let (tx, rx) = oneshot::channel();
        let (abort, registration) = AbortHandle::new_pair();

        let job = async move {
            let outcome = match tokio::time::timeout(timeout, provider.fetch_series()).await {
                Ok(outcome) => outcome,
                Err(_) => Err(FetchError::Timeout(timeout)),
            };
            // Receiver gone means the owner cancelled or was torn down.
            let _ = tx.send(outcome);
        };
        runtime.spawn(Abortable::new(job, registration));

        if DF.log_fetch {
            log::info!("Fetch task spawned (timeout {})", format_duration(timeout));
        }

        Self {
            rx: Some(rx),
            abort,
            started: AppInstant::now(),
        }
    }

    /// Non-blocking check for the render loop. Yields the outcome at most once.
    pub fn poll(&mut self) -> Option<FetchOutcome> {
        let rx = self.rx.as_mut()?;
        let outcome = match rx.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Closed) => Err(FetchError::Aborted),
        };
        self.finish(outcome)
    }

    /// Waits for the outcome. `None` if it was already taken or the task was cancelled.
    pub async fn wait(&mut self) -> Option<FetchOutcome> {
        let rx = self.rx.as_mut()?;
        let outcome = rx.await.unwrap_or(Err(FetchError::Aborted));
        self.finish(outcome)
    }

    pub fn cancel(&mut self) {
        self.abort.abort();
        if self.rx.take().is_some() && DF.log_fetch {
            log::info!(
                "Fetch task cancelled after {}",
                format_duration(self.started.elapsed())
            );
        }
    }

    /// True once the outcome has been taken or the task was cancelled.
    pub fn is_done(&self) -> bool {
        self.rx.is_none()
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    fn finish(&mut self, outcome: FetchOutcome) -> Option<FetchOutcome> {
        self.rx = None;
        if DF.log_fetch {
            match &outcome {
                Ok(_) => log::info!("Fetch resolved in {}", format_duration(self.elapsed())),
                Err(e) => log::warn!("Fetch failed after {}: {}", format_duration(self.elapsed()), e),
            }
        }
        Some(outcome)
    }
}

impl Drop for FetchTask {
    fn drop(&mut self) {
        self.abort.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DemoProvider;
    use async_trait::async_trait;

    struct Never;

    #[async_trait]
    impl CashFlowProvider for Never {
        async fn fetch_series(&self) -> FetchOutcome {
            std::future::pending().await
        }
    }

    #[tokio::test]
    async fn wait_yields_the_fixture_once() {
        let provider = Arc::new(DemoProvider::new(Duration::ZERO).with_fixture(CashFlowSeries::fixture()));
        let mut task = FetchTask::spawn(&Handle::current(), provider, Duration::from_secs(5));

        assert_eq!(task.wait().await, Some(Ok(CashFlowSeries::fixture())));
        assert!(task.is_done());
        assert_eq!(task.wait().await, None);
        assert_eq!(task.poll(), None);
    }

    #[tokio::test]
    async fn slow_provider_times_out() {
        let timeout = Duration::from_millis(20);
        let mut task = FetchTask::spawn(&Handle::current(), Arc::new(Never), timeout);
        assert_eq!(task.wait().await, Some(Err(FetchError::Timeout(timeout))));
    }

    #[tokio::test]
    async fn cancelled_task_delivers_nothing() {
        let provider = Arc::new(DemoProvider::new(Duration::from_millis(10)));
        let mut task = FetchTask::spawn(&Handle::current(), provider, Duration::from_secs(5));
        task.cancel();

        tokio::time::sleep(Duration::from_millis(30)).await;
        assert!(task.is_done());
        assert_eq!(task.poll(), None);
        assert_eq!(task.wait().await, None);
    }

    struct Panics;

    #[async_trait]
    impl CashFlowProvider for Panics {
        async fn fetch_series(&self) -> FetchOutcome {
            panic!("provider blew up")
        }
    }

    #[tokio::test]
    async fn panicking_provider_reports_aborted() {
        let mut task = FetchTask::spawn(&Handle::current(), Arc::new(Panics), Duration::from_secs(5));
        assert_eq!(task.wait().await, Some(Err(FetchError::Aborted)));
        assert!(task.is_done());
    }

    #[tokio::test]
    async fn poll_is_empty_while_pending() {
        let mut task = FetchTask::spawn(&Handle::current(), Arc::new(Never), Duration::from_secs(5));
        assert_eq!(task.poll(), None);
        assert!(!task.is_done());
    }
}
