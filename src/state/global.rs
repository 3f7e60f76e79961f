//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;
use std::collections::HashMap;

/// Records shown per falls-table page.
pub const PER_PAGE: u32 = 10;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Latest stats snapshot from the API
    pub stats: RwSignal<Option<StatsSnapshot>>,
    /// Current page of fall records
    pub falls: RwSignal<Vec<FallRecord>>,
    /// Current falls-table page number (1-based)
    pub page: RwSignal<u32>,
    /// Total number of falls-table pages
    pub total_pages: RwSignal<u32>,
    /// Total number of fall records across all pages
    pub total_records: RwSignal<u32>,
    /// Last successful refresh timestamp
    pub last_updated: RwSignal<Option<i64>>,
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Video playback modal, when open
    pub video_modal: RwSignal<Option<VideoPlayback>>,
}

/// Aggregated fall statistics from the API.
///
/// Replaced wholesale on every refresh; never mutated in place.
#[derive(Clone, Debug, serde::Deserialize, PartialEq)]
pub struct StatsSnapshot {
    pub today: u32,
    pub this_week: u32,
    pub this_month: u32,
    pub total: u32,
    /// Fall counts keyed by `YYYY-MM-DD` date
    #[serde(default)]
    pub timeline: HashMap<String, u32>,
    /// Fall counts keyed by severity label (Low/Medium/High)
    #[serde(default)]
    pub by_severity: HashMap<String, u32>,
    /// Fall counts keyed by location, in server-provided order
    #[serde(default)]
    pub by_location: serde_json::Map<String, serde_json::Value>,
}

/// One detected fall event, as served by the API. Read-only on this side.
#[derive(Clone, Debug, serde::Deserialize, PartialEq)]
pub struct FallRecord {
    pub id: String,
    /// ISO-8601 timestamp string
    pub timestamp: String,
    pub location: String,
    pub person_id: String,
    #[serde(default)]
    pub detection_method: Option<String>,
    pub severity: String,
    /// Detection confidence, percentage
    pub confidence: f64,
    /// Fall duration in seconds
    pub duration: f64,
    /// Direct URL or opaque storage key, resolved at playback time
    pub video_url: String,
}

/// Source and description for the open video modal
#[derive(Clone, Debug, PartialEq)]
pub struct VideoPlayback {
    pub src: String,
    pub info: String,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        stats: create_rw_signal(None),
        falls: create_rw_signal(Vec::new()),
        page: create_rw_signal(1),
        total_pages: create_rw_signal(1),
        total_records: create_rw_signal(0),
        last_updated: create_rw_signal(None),
        loading: create_rw_signal(false),
        error: create_rw_signal(None),
        video_modal: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Record the time of the last successful refresh
    pub fn mark_updated(&self) {
        self.last_updated
            .set(Some(chrono::Local::now().timestamp_millis()));
    }

    /// Open the video modal with a resolved playback source
    pub fn open_video(&self, src: String, info: String) {
        self.video_modal.set(Some(VideoPlayback { src, info }));
    }

    /// Close the video modal
    pub fn close_video(&self) {
        self.video_modal.set(None);
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }

    /// Clear error message
    pub fn clear_error(&self) {
        self.error.set(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_snapshot_deserialize() {
        let json = r#"{
            "today": 1,
            "this_week": 3,
            "this_month": 7,
            "total": 42,
            "timeline": {"2026-08-06": 1},
            "by_severity": {"Low": 20, "Medium": 15, "High": 7},
            "by_location": {"kitchen": 12, "bathroom": 30}
        }"#;

        let stats: StatsSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(stats.total, 42);
        assert_eq!(stats.timeline.get("2026-08-06"), Some(&1));
        assert_eq!(stats.by_severity.get("High"), Some(&7));

        // server key order is preserved for locations
        let locations: Vec<&str> = stats.by_location.keys().map(|k| k.as_str()).collect();
        assert_eq!(locations, ["kitchen", "bathroom"]);
    }

    #[test]
    fn test_stats_snapshot_missing_maps_default_empty() {
        let json = r#"{"today": 0, "this_week": 0, "this_month": 0, "total": 0}"#;
        let stats: StatsSnapshot = serde_json::from_str(json).unwrap();
        assert!(stats.timeline.is_empty());
        assert!(stats.by_severity.is_empty());
        assert!(stats.by_location.is_empty());
    }

    #[test]
    fn test_fall_record_detection_method_optional() {
        let json = r#"{
            "id": "fall_1",
            "timestamp": "2026-08-06T14:30:00",
            "location": "living_room",
            "person_id": "camera_2",
            "severity": "High",
            "confidence": 92.5,
            "duration": 3.5,
            "video_url": "videos/fall_1.mp4"
        }"#;

        let record: FallRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.detection_method, None);
        assert_eq!(record.severity, "High");
    }
}
