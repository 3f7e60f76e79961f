//! State Management
//!
//! Global application state, the dashboard controller and the
//! auto-refresh loop.

pub mod controller;
pub mod global;
pub mod refresh;

pub use controller::DashboardController;
pub use global::{provide_global_state, FallRecord, GlobalState, StatsSnapshot, PER_PAGE};
pub use refresh::init_auto_refresh;
