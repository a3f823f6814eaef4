mod maths_utils;
mod perf;
mod time_utils;

pub use maths_utils::{format_currency, remap};
pub use time_utils::{AppInstant, format_duration};
