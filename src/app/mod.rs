mod controller;
mod events;

pub use controller::CashFlowGraphController;
pub use events::{Change, SubscriptionId};
