//! Command implementations.

pub mod calculate;
pub mod config;

pub use self::calculate::{calculate, execute_calculate, exit_status};
pub use self::config::execute_config;
