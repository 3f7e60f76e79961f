//! Backend API Access
//!
//! HTTP client functions and response types.

pub mod client;

pub use client::{fetch_falls, fetch_stats, fetch_video_url, get_api_base, FallsPage};
