//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod chart;
pub mod falls_table;
pub mod loading;
pub mod nav;
pub mod pagination;
pub mod stat_card;
pub mod toast;
pub mod video_modal;

pub use chart::{LocationChart, SeverityChart, TimelineChart};
pub use falls_table::FallsTable;
pub use loading::LoadingSpinner;
pub use nav::Nav;
pub use pagination::Pagination;
pub use stat_card::StatCards;
pub use toast::Toast;
pub use video_modal::VideoModal;
