//! Orders module - executed and recurrent orders consumed by the order
//! reports.

mod orders_model;
mod orders_traits;

pub use orders_model::{Order, OrderRow, RecurrentOrder, RecurrentOrderRow};
pub use orders_traits::{OrderStoreTrait, RecurrentOrderStoreTrait};
