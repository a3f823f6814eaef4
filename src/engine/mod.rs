mod fetch_task;

pub use fetch_task::{FetchOutcome, FetchTask};
