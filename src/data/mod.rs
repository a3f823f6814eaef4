mod error;
mod placeholder;
mod provider;

pub use {
    error::FetchError,
    placeholder::{fetch_placeholder, random_amount},
    provider::{CashFlowProvider, DemoProvider},
};
