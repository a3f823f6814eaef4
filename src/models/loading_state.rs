use std::error::Error;
use std::fmt;
use std::mem;

use crate::data::FetchError;

/// Lifecycle of one fetch-and-render cycle.
///
/// `Idle -> Loading -> Loaded` is the happy path. `Loaded` is terminal: once real
/// content is shown nothing moves the machine back. A failed fetch keeps its
/// placeholder so the view never collapses, and `retry` returns it to `Loading`.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadingState<T> {
    Idle,
    Loading {
        placeholder: T,
    },
    Loaded {
        content: T,
    },
    Failed {
        placeholder: T,
        reason: FetchError,
    },
}

/// What the presentation layer should draw right now.
#[derive(Debug, PartialEq)]
pub enum Presentation<'a, T> {
    Empty,
    /// Placeholder drawn de-emphasised.
    Redacted(&'a T),
    Content(&'a T),
    Failed {
        placeholder: &'a T,
        reason: &'a FetchError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionError {
    pub from: &'static str,
    pub to: &'static str,
}

impl fmt::Display for TransitionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> std::fmt::Result {
        write!(f, "Illegal transition {} -> {}", self.from, self.to)
    }
}

impl Error for TransitionError {}

impl<T> Default for LoadingState<T> {
    fn default() -> Self {
        LoadingState::Idle
    }
}

impl<T> LoadingState<T> {
    pub fn name(&self) -> &'static str {
        match self {
            LoadingState::Idle => "Idle",
            LoadingState::Loading { .. } => "Loading",
            LoadingState::Loaded { .. } => "Loaded",
            LoadingState::Failed { .. } => "Failed",
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, LoadingState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadingState::Loading { .. })
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadingState::Loaded { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, LoadingState::Failed { .. })
    }

    pub fn content(&self) -> Option<&T> {
        match self {
            LoadingState::Loaded { content } => Some(content),
            _ => None,
        }
    }

    pub fn placeholder(&self) -> Option<&T> {
        match self {
            LoadingState::Loading { placeholder } | LoadingState::Failed { placeholder, .. } => {
                Some(placeholder)
            }
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&FetchError> {
        match self {
            LoadingState::Failed { reason, .. } => Some(reason),
            _ => None,
        }
    }

    pub fn displayed(&self) -> Presentation<'_, T> {
        match self {
            LoadingState::Idle => Presentation::Empty,
            LoadingState::Loading { placeholder } => Presentation::Redacted(placeholder),
            LoadingState::Loaded { content } => Presentation::Content(content),
            LoadingState::Failed {
                placeholder,
                reason,
            } => Presentation::Failed {
                placeholder,
                reason,
            },
        }
    }

    /// The payload on screen regardless of mode, if any.
    pub fn payload(&self) -> Option<&T> {
        self.content().or_else(|| self.placeholder())
    }

    /// `Idle -> Loading`.
    pub fn begin(&mut self, placeholder: T) -> Result<(), TransitionError> {
        if !self.is_idle() {
            return Err(TransitionError {
                from: self.name(),
                to: "Loading",
            });
        }
        *self = LoadingState::Loading { placeholder };
        Ok(())
    }

    /// `Loading -> Loaded`. The placeholder is dropped in the same step.
    pub fn complete(&mut self, content: T) -> Result<(), TransitionError> {
        if !self.is_loading() {
            return Err(TransitionError {
                from: self.name(),
                to: "Loaded",
            });
        }
        *self = LoadingState::Loaded { content };
        Ok(())
    }

    /// `Loading -> Failed`, keeping the placeholder on screen.
    pub fn fail(&mut self, reason: FetchError) -> Result<(), TransitionError> {
        match mem::replace(self, LoadingState::Idle) {
            LoadingState::Loading { placeholder } => {
                *self = LoadingState::Failed {
                    placeholder,
                    reason,
                };
                Ok(())
            }
            previous => {
                let from = previous.name();
                *self = previous;
                Err(TransitionError { from, to: "Failed" })
            }
        }
    }

    /// `Failed -> Loading`, reusing the placeholder already shown.
    pub fn retry(&mut self) -> Result<(), TransitionError> {
        match mem::replace(self, LoadingState::Idle) {
            LoadingState::Failed { placeholder, .. } => {
                *self = LoadingState::Loading { placeholder };
                Ok(())
            }
            previous => {
                let from = previous.name();
                *self = previous;
                Err(TransitionError {
                    from,
                    to: "Loading",
                })
            }
        }
    }

    /// `Loading -> Idle`. Only a cancelled fetch takes this edge.
    pub fn cancel(&mut self) -> Result<(), TransitionError> {
        if !self.is_loading() {
            return Err(TransitionError {
                from: self.name(),
                to: "Idle",
            });
        }
        *self = LoadingState::Idle;
        Ok(())
    }
}
