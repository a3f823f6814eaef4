use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;

use crate::app::{Change, SubscriptionId};
use crate::config::{CHART, DF, constants::budget};
use crate::data::CashFlowProvider;
use crate::domain::{CashFlowRecord, CashFlowSeries, ReportPeriod};
use crate::engine::{FetchOutcome, FetchTask};
use crate::models::{LoadingState, Presentation, Selection, TapOutcome, TransitionError};
use crate::ui::{ChartSurface, Popover, find_record, relative_x};

type Observer = Box<dyn FnMut(&Change, &LoadingState<CashFlowSeries>) + Send>;

/// Owns everything the cash flow screen needs: the loading state, the tap
/// selection, the report period, and at most one in-flight fetch.
///
/// All mutation happens through `&mut self` on the thread that owns the view.
/// The render loop calls `poll` each frame; headless callers can `settle` instead.
pub struct CashFlowGraphController {
    provider: Arc<dyn CashFlowProvider>,
    runtime: Handle,
    fetch_timeout: Duration,

    state: LoadingState<CashFlowSeries>,
    selection: Selection,
    period: ReportPeriod,

    task: Option<FetchTask>,

    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl CashFlowGraphController {
    pub fn new(provider: Arc<dyn CashFlowProvider>, runtime: Handle) -> Self {
        Self {
            provider,
            runtime,
            fetch_timeout: CHART.fetch_timeout,
            state: LoadingState::Idle,
            selection: Selection::default(),
            period: ReportPeriod::default(),
            task: None,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    // --- Accessors ---

    pub fn state(&self) -> &LoadingState<CashFlowSeries> {
        &self.state
    }

    pub fn presentation(&self) -> Presentation<'_, CashFlowSeries> {
        self.state.displayed()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn period(&self) -> ReportPeriod {
        self.period
    }

    pub fn is_fetching(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_done())
    }

    /// Records on screen for the current period (placeholder or content).
    pub fn records(&self) -> &[CashFlowRecord] {
        self.state
            .payload()
            .map(|series| series.records(self.period))
            .unwrap_or(&[])
    }

    pub fn selected_record(&self) -> Option<&CashFlowRecord> {
        let label = self.selection.label()?;
        self.records().iter().find(|r| r.label() == label)
    }

    /// Detail box for the selection, if its popover is open and the category is drawn.
    pub fn popover(&self, surface: &dyn ChartSurface) -> Option<Popover> {
        if !self.selection.is_popover_visible() {
            return None;
        }
        let record = self.selected_record()?;
        Popover::build(
            record,
            surface,
            CHART.popover_box_width,
            CHART.currency_code,
        )
    }

    // --- Subscriptions ---

    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&Change, &LoadingState<CashFlowSeries>) + Send + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        if DF.log_subscribers {
            log::info!("Subscriber {:?} added ({} total)", id, self.observers.len());
        }
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        before != self.observers.len()
    }

    fn notify(&mut self, change: Change) {
        if DF.log_subscribers {
            log::info!("Notify {} subscriber(s): {:?}", self.observers.len(), change);
        }
        for (_, observer) in self.observers.iter_mut() {
            observer(&change, &self.state);
        }
    }

    fn transition<F>(&mut self, to: &'static str, apply: F) -> Result<(), TransitionError>
    where
        F: FnOnce(&mut LoadingState<CashFlowSeries>) -> Result<(), TransitionError>,
    {
        let from = self.state.name();
        match apply(&mut self.state) {
            Ok(()) => {
                if DF.log_state_transitions {
                    log::info!("LoadingState {} -> {}", from, to);
                }
                self.notify(Change::State { from, to });
                Ok(())
            }
            Err(e) => {
                if DF.log_state_transitions {
                    log::warn!("{}", e);
                }
                Err(e)
            }
        }
    }

    // --- Lifecycle ---

    /// The view became active: show a placeholder and start the fetch.
    /// Only valid from `Idle`, so a view gets at most one fetch per appearance.
    pub fn appear(&mut self) -> Result<(), TransitionError> {
        let placeholder = self.provider.fetch_placeholder();
        self.transition("Loading", |state| state.begin(placeholder))?;
        self.spawn_fetch();
        Ok(())
    }

    /// Start over after a failure, keeping the placeholder on screen.
    pub fn retry(&mut self) -> Result<(), TransitionError> {
        self.transition("Loading", |state| state.retry())?;
        self.spawn_fetch();
        Ok(())
    }

    /// Abandon the pending fetch. Nothing it produces will reach the state.
    pub fn cancel(&mut self) {
        if let Some(mut task) = self.task.take() {
            task.cancel();
        }
        if self.state.is_loading() {
            let _ = self.transition("Idle", |state| state.cancel());
        }
    }

    /// The view went away.
    pub fn disappear(&mut self) {
        self.cancel();
        self.selection.clear();
    }

    /// Applies a finished fetch, if there is one. Returns true if the state changed.
    pub fn poll(&mut self) -> bool {
        let Some(outcome) = self.task.as_mut().and_then(|t| t.poll()) else {
            return false;
        };
        self.task = None;
        self.apply_outcome(outcome)
    }

    /// Waits for the pending fetch and applies it. Returns true if the state changed.
    pub async fn settle(&mut self) -> bool {
        let outcome = match self.task.as_mut() {
            Some(task) => task.wait().await,
            None => None,
        };
        self.task = None;
        match outcome {
            Some(outcome) => self.apply_outcome(outcome),
            None => false,
        }
    }

    fn spawn_fetch(&mut self) {
        if let Some(mut stale) = self.task.take() {
            stale.cancel();
        }
        self.task = Some(FetchTask::spawn(
            &self.runtime,
            Arc::clone(&self.provider),
            self.fetch_timeout,
        ));
    }

    fn apply_outcome(&mut self, outcome: FetchOutcome) -> bool {
        let validated = crate::trace_time!("Series validation", budget::VALIDATION, {
            outcome.and_then(|series| {
                series.validate()?;
                Ok(series)
            })
        });

        let result = match validated {
            Ok(series) => {
                if let Some(placeholder) = self.state.placeholder() {
                    if !placeholder.same_shape(&series) {
                        log::warn!("Loaded series differs in shape from its placeholder");
                    }
                }
                self.transition("Loaded", |state| state.complete(series))
            }
            Err(reason) => self.transition("Failed", |state| state.fail(reason)),
        };
        result.is_ok()
    }

    // --- Interaction ---

    /// A tap at chart coordinates `(x, y)`. Only `x` matters for a bar chart.
    /// Taps are ignored until real content is loaded, and a tap that hits no
    /// category leaves the selection as it was.
    pub fn tap(&mut self, x: f64, _y: f64, surface: &dyn ChartSurface) -> TapOutcome {
        if !self.state.is_loaded() {
            return TapOutcome::Missed;
        }

        let offset = relative_x(x, surface.plot_origin_x());
        let hit = find_record(self.records(), offset, surface).map(|r| r.label().to_string());

        let outcome = self.selection.apply_tap(hit.as_deref());
        if outcome != TapOutcome::Missed {
            self.notify(Change::Selection(outcome.clone()));
        }
        outcome
    }

    pub fn set_period(&mut self, period: ReportPeriod) {
        if self.period == period {
            return;
        }
        self.period = period;
        self.notify(Change::Period(period));
    }
}

impl Drop for CashFlowGraphController {
    fn drop(&mut self) {
        if let Some(mut task) = self.task.take() {
            task.cancel();
        }
    }
}
