mod loading_state;
mod selection;

pub use loading_state::{LoadingState, Presentation, TransitionError};
pub use selection::{Selection, TapOutcome};
