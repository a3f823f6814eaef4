//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Every accepted (or rejected) loading state transition.
    pub log_state_transitions: bool,

    /// Anything about handling self.selection i.e. the Selection struct
    pub log_selection: bool,

    /// Fetch task spawn, completion, cancellation.
    pub log_fetch: bool,

    /// Subscriber registration and notification fan-out
    pub log_subscribers: bool,

    pub log_placeholder: bool,

    /// `trace_time!` budget checks on placeholder generation and validation.
    pub log_performance: bool,
}

pub const DF: LogFlags = LogFlags {
    log_state_transitions: true,
    log_selection: true,
    log_fetch: true,

    log_subscribers: false,
    log_placeholder: false,

    log_performance: true,
};
