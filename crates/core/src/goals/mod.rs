//! Goals module - user savings goals consumed by the goals report.

mod goals_model;
mod goals_traits;

pub use goals_model::{Goal, GoalRow};
pub use goals_traits::GoalStoreTrait;
