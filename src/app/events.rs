use crate::domain::ReportPeriod;
use crate::models::TapOutcome;

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);

/// What just changed on the controller. Subscribers are handed the loading
/// state as it is after the change.
#[derive(Debug, Clone, PartialEq)]
pub enum Change {
    State {
        from: &'static str,
        to: &'static str,
    },
    Selection(TapOutcome),
    Period(ReportPeriod),
}
