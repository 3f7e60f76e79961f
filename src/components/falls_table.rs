//! Falls Table Component
//!
//! Paginated table of detected fall events.

use leptos::*;

use crate::state::controller::DashboardController;
use crate::state::global::{FallRecord, GlobalState};

/// Display fallback when a record carries no detection method
const DEFAULT_DETECTION_METHOD: &str = "Motion";

/// Falls table, rebuilt reactively from the current page of records
#[component]
pub fn FallsTable() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="overflow-x-auto">
            <table id="fallsTable" class="w-full text-left text-sm">
                <thead>
                    <tr class="text-gray-400 border-b border-gray-700">
                        <th class="py-3 pr-4">"Time"</th>
                        <th class="py-3 pr-4">"Location"</th>
                        <th class="py-3 pr-4">"Device"</th>
                        <th class="py-3 pr-4">"Detection"</th>
                        <th class="py-3 pr-4">"Severity"</th>
                        <th class="py-3 pr-4">"Duration"</th>
                        <th class="py-3">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let falls = state.falls.get();
                        if falls.is_empty() {
                            view! {
                                <tr>
                                    <td colspan="7" class="py-8 text-center text-gray-400">
                                        "No falls recorded"
                                    </td>
                                </tr>
                            }
                            .into_view()
                        } else {
                            falls
                                .into_iter()
                                .map(|fall| view! { <FallRow fall=fall /> })
                                .collect_view()
                        }
                    }}
                </tbody>
            </table>
        </div>
    }
}

/// Single fall record row
#[component]
fn FallRow(fall: FallRecord) -> impl IntoView {
    let ctrl = use_context::<DashboardController>().expect("DashboardController not found");

    let formatted_time = format_timestamp(&fall.timestamp);
    let severity_class = severity_badge_class(&fall.severity);
    let detection_method = fall
        .detection_method
        .clone()
        .unwrap_or_else(|| DEFAULT_DETECTION_METHOD.to_string());

    let detail_id = fall.id.clone();
    let video_reference = fall.video_url.clone();
    let video_fall_id = fall.id.clone();
    let ctrl_for_video = ctrl;

    view! {
        <tr class="border-b border-gray-700 last:border-0 hover:bg-gray-750">
            <td class="py-3 pr-4">
                <div class="timestamp text-gray-300">{formatted_time}</div>
            </td>
            <td class="py-3 pr-4">
                <span class="badge bg-gray-700 text-gray-200">{fall.location.clone()}</span>
            </td>
            <td class="py-3 pr-4">
                <span class="badge bg-gray-700 text-gray-200">{fall.person_id.clone()}</span>
            </td>
            <td class="py-3 pr-4">
                <span class="badge bg-blue-900 text-blue-200">{detection_method}</span>
            </td>
            <td class="py-3 pr-4">
                <span class=severity_class>{fall.confidence}</span>
            </td>
            <td class="py-3 pr-4 text-gray-300">{format!("{}s", fall.duration)}</td>
            <td class="py-3 space-x-2 whitespace-nowrap">
                <button
                    on:click=move |_| DashboardController::view_detail(&detail_id)
                    class="px-3 py-1 rounded border border-blue-500 text-blue-400 hover:bg-blue-500 hover:text-white text-xs transition-colors"
                >
                    "View"
                </button>
                <button
                    on:click=move |_| {
                        ctrl_for_video.play_video(video_reference.clone(), video_fall_id.clone())
                    }
                    class="px-3 py-1 rounded border border-green-500 text-green-400 hover:bg-green-500 hover:text-white text-xs transition-colors"
                >
                    "Video"
                </button>
            </td>
        </tr>
    }
}

/// Format an ISO-8601 timestamp for display, e.g. "Aug 6, 2026, 02:30 PM".
/// The backend emits both offset-carrying and naive timestamps; anything
/// unparseable is shown as-is.
fn format_timestamp(raw: &str) -> String {
    const DISPLAY_FORMAT: &str = "%b %-d, %Y, %I:%M %p";

    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return dt.format(DISPLAY_FORMAT).to_string();
    }
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format(DISPLAY_FORMAT).to_string();
    }
    raw.to_string()
}

/// Badge classes for a severity label; the style key is the lowercased label
fn severity_badge_class(severity: &str) -> String {
    format!("badge severity-{}", severity.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp_naive() {
        assert_eq!(
            format_timestamp("2026-08-06T14:30:00"),
            "Aug 6, 2026, 02:30 PM"
        );
        assert_eq!(
            format_timestamp("2026-08-06T14:30:00.123456"),
            "Aug 6, 2026, 02:30 PM"
        );
    }

    #[test]
    fn test_format_timestamp_with_offset() {
        assert_eq!(
            format_timestamp("2026-01-09T08:05:00+00:00"),
            "Jan 9, 2026, 08:05 AM"
        );
    }

    #[test]
    fn test_format_timestamp_passthrough_on_garbage() {
        assert_eq!(format_timestamp("not-a-date"), "not-a-date");
    }

    #[test]
    fn test_severity_badge_class_lowercases() {
        assert_eq!(severity_badge_class("High"), "badge severity-high");
        assert_eq!(severity_badge_class("Low"), "badge severity-low");
    }
}
