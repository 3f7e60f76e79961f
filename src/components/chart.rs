//! Chart Components
//!
//! Timeline, severity and location charts drawn on HTML5 Canvas.

use chrono::NaiveDate;
use leptos::*;
use std::collections::HashMap;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::state::global::GlobalState;

/// Days covered by the timeline chart, today included
pub const TIMELINE_DAYS: i64 = 30;

/// Severity categories in display order
pub const SEVERITY_LABELS: [&str; 3] = ["Low", "Medium", "High"];

/// Severity colors, matching [`SEVERITY_LABELS`]
pub const SEVERITY_COLORS: [&str; 3] = ["#28a745", "#ffc107", "#dc3545"];

const LINE_COLOR: &str = "#007bff";
const BAR_FILL: &str = "rgba(0, 123, 255, 0.8)";
const CANVAS_BG: &str = "#1f2937"; // gray-800
const GRID_COLOR: &str = "#374151"; // gray-700
const AXIS_TEXT: &str = "#9ca3af"; // gray-400
const EMPTY_TEXT: &str = "#6b7280"; // gray-500

// ============ Series Builders ============

/// Build the fixed 30-point timeline series: today and the preceding 29
/// days, oldest first, with 0 for any date absent from the input mapping.
pub fn timeline_series(today: NaiveDate, timeline: &HashMap<String, u32>) -> Vec<(String, u32)> {
    (0..TIMELINE_DAYS)
        .rev()
        .map(|offset| {
            let date = today - chrono::Duration::days(offset);
            let key = date.format("%Y-%m-%d").to_string();
            let count = timeline.get(&key).copied().unwrap_or(0);
            (date.format("%b %-d").to_string(), count)
        })
        .collect()
}

/// Severity counts in fixed [Low, Medium, High] order, 0 when missing
pub fn severity_series(by_severity: &HashMap<String, u32>) -> [u32; 3] {
    SEVERITY_LABELS.map(|label| by_severity.get(label).copied().unwrap_or(0))
}

/// Per-location counts in the server-provided key order
pub fn location_series(by_location: &serde_json::Map<String, serde_json::Value>) -> Vec<(String, u32)> {
    by_location
        .iter()
        .map(|(label, count)| (label.clone(), count.as_u64().unwrap_or(0) as u32))
        .collect()
}

/// Round a count axis up to a 5-step-friendly maximum
fn axis_max(max_count: u32) -> u32 {
    ((max_count.max(1) + 4) / 5) * 5
}

// ============ Components ============

/// 30-day falls timeline (line chart)
#[component]
pub fn TimelineChart() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Repaint whenever a new snapshot arrives
    create_effect(move |_| {
        if let (Some(canvas), Some(stats)) = (canvas_ref.get(), state.stats.get()) {
            let today = chrono::Local::now().date_naive();
            let series = timeline_series(today, &stats.timeline);
            draw_timeline(&canvas, &series);
        }
    });

    view! {
        <canvas
            id="timelineChart"
            node_ref=canvas_ref
            width="800"
            height="300"
            class="w-full h-64 rounded-lg"
        />
    }
}

/// Severity breakdown (doughnut chart with HTML legend)
#[component]
pub fn SeverityChart() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    let series = create_memo(move |_| {
        state
            .stats
            .get()
            .map(|s| severity_series(&s.by_severity))
            .unwrap_or([0, 0, 0])
    });

    create_effect(move |_| {
        let series = series.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_severity(&canvas, &series);
        }
    });

    view! {
        <div>
            <canvas
                id="severityChart"
                node_ref=canvas_ref
                width="300"
                height="240"
                class="w-full h-56"
            />

            // Legend
            <div class="flex justify-center flex-wrap gap-4 mt-4">
                {SEVERITY_LABELS
                    .iter()
                    .enumerate()
                    .map(|(idx, label)| {
                        view! {
                            <div class="flex items-center space-x-2">
                                <div
                                    class="w-3 h-3 rounded-full"
                                    style=format!("background-color: {}", SEVERITY_COLORS[idx])
                                />
                                <span class="text-sm text-gray-300">
                                    {*label}
                                    " ("
                                    {move || series.get()[idx]}
                                    ")"
                                </span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Falls per location (bar chart)
#[component]
pub fn LocationChart() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        if let (Some(canvas), Some(stats)) = (canvas_ref.get(), state.stats.get()) {
            let series = location_series(&stats.by_location);
            draw_location(&canvas, &series);
        }
    });

    view! {
        <canvas
            id="locationChart"
            node_ref=canvas_ref
            width="800"
            height="260"
            class="w-full h-56 rounded-lg"
        />
    }
}

// ============ Drawing ============

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    match canvas.get_context("2d") {
        Ok(Some(ctx)) => ctx.dyn_into::<CanvasRenderingContext2d>().ok(),
        _ => None,
    }
}

/// Clear the whole canvas; every repaint starts from a blank surface so at
/// most one drawing per chart is ever visible
fn clear_canvas(ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
    ctx.set_fill_style(&CANVAS_BG.into());
    ctx.fill_rect(0.0, 0.0, width, height);
}

/// Draw horizontal grid lines with integer labels from 0 up to `y_max`
fn draw_count_grid(
    ctx: &CanvasRenderingContext2d,
    margin_left: f64,
    margin_top: f64,
    chart_width: f64,
    chart_height: f64,
    y_max: u32,
) {
    ctx.set_stroke_style(&GRID_COLOR.into());
    ctx.set_line_width(1.0);

    for i in 0..=5 {
        let y = margin_top + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(margin_left + chart_width, y);
        ctx.stroke();

        let value = y_max - i * (y_max / 5);
        ctx.set_fill_style(&AXIS_TEXT.into());
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&value.to_string(), 8.0, y + 4.0);
    }
}

fn draw_timeline(canvas: &HtmlCanvasElement, series: &[(String, u32)]) {
    let ctx = match context_2d(canvas) {
        Some(ctx) => ctx,
        None => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    let margin_left = 40.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 30.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    clear_canvas(&ctx, width, height);

    let max_count = series.iter().map(|(_, count)| *count).max().unwrap_or(0);
    let y_max = axis_max(max_count);

    draw_count_grid(&ctx, margin_left, margin_top, chart_width, chart_height, y_max);

    let step = if series.len() > 1 {
        chart_width / (series.len() - 1) as f64
    } else {
        chart_width
    };

    let point_y = |count: u32| -> f64 {
        margin_top + (1.0 - count as f64 / y_max as f64) * chart_height
    };

    // Line
    ctx.set_stroke_style(&LINE_COLOR.into());
    ctx.set_line_width(2.0);
    ctx.begin_path();
    for (i, (_, count)) in series.iter().enumerate() {
        let x = margin_left + i as f64 * step;
        let y = point_y(*count);
        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.stroke();

    // Points
    ctx.set_fill_style(&LINE_COLOR.into());
    for (i, (_, count)) in series.iter().enumerate() {
        let x = margin_left + i as f64 * step;
        ctx.begin_path();
        let _ = ctx.arc(x, point_y(*count), 3.0, 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();
    }

    // Date labels, every 5th point to keep them readable
    ctx.set_fill_style(&AXIS_TEXT.into());
    ctx.set_font("12px sans-serif");
    for (i, (label, _)) in series.iter().enumerate() {
        if i % 5 == 0 {
            let x = margin_left + i as f64 * step;
            let _ = ctx.fill_text(label, x - 15.0, height - 8.0);
        }
    }
}

fn draw_severity(canvas: &HtmlCanvasElement, series: &[u32; 3]) {
    let ctx = match context_2d(canvas) {
        Some(ctx) => ctx,
        None => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    clear_canvas(&ctx, width, height);

    let total: u32 = series.iter().sum();
    if total == 0 {
        ctx.set_fill_style(&EMPTY_TEXT.into());
        ctx.set_font("14px sans-serif");
        let _ = ctx.fill_text("No falls recorded", width / 2.0 - 55.0, height / 2.0);
        return;
    }

    let cx = width / 2.0;
    let cy = height / 2.0;
    let radius = (width.min(height) / 2.0) - 10.0;

    // Wedges start at 12 o'clock
    let mut angle = -std::f64::consts::FRAC_PI_2;
    for (idx, count) in series.iter().enumerate() {
        if *count == 0 {
            continue;
        }

        let sweep = *count as f64 / total as f64 * std::f64::consts::PI * 2.0;
        ctx.set_fill_style(&SEVERITY_COLORS[idx].into());
        ctx.begin_path();
        ctx.move_to(cx, cy);
        let _ = ctx.arc(cx, cy, radius, angle, angle + sweep);
        ctx.close_path();
        ctx.fill();

        angle += sweep;
    }

    // 60% cutout turns the pie into a doughnut
    ctx.set_fill_style(&CANVAS_BG.into());
    ctx.begin_path();
    let _ = ctx.arc(cx, cy, radius * 0.6, 0.0, std::f64::consts::PI * 2.0);
    ctx.fill();

    // Total in the center
    ctx.set_fill_style(&AXIS_TEXT.into());
    ctx.set_font("bold 20px sans-serif");
    let _ = ctx.fill_text(&total.to_string(), cx - 8.0, cy + 6.0);
}

fn draw_location(canvas: &HtmlCanvasElement, series: &[(String, u32)]) {
    let ctx = match context_2d(canvas) {
        Some(ctx) => ctx,
        None => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    let margin_left = 40.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 30.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    clear_canvas(&ctx, width, height);

    if series.is_empty() {
        ctx.set_fill_style(&EMPTY_TEXT.into());
        ctx.set_font("14px sans-serif");
        let _ = ctx.fill_text("No location data", width / 2.0 - 50.0, height / 2.0);
        return;
    }

    let max_count = series.iter().map(|(_, count)| *count).max().unwrap_or(0);
    let y_max = axis_max(max_count);

    draw_count_grid(&ctx, margin_left, margin_top, chart_width, chart_height, y_max);

    let slot = chart_width / series.len() as f64;
    let bar_width = slot * 0.6;

    for (i, (label, count)) in series.iter().enumerate() {
        let bar_height = *count as f64 / y_max as f64 * chart_height;
        let x = margin_left + i as f64 * slot + (slot - bar_width) / 2.0;
        let y = margin_top + chart_height - bar_height;

        ctx.set_fill_style(&BAR_FILL.into());
        ctx.fill_rect(x, y, bar_width, bar_height);

        ctx.set_fill_style(&AXIS_TEXT.into());
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(label, x, height - 8.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_timeline_empty_input_is_30_zeros() {
        let series = timeline_series(date(2026, 8, 6), &HashMap::new());
        assert_eq!(series.len(), 30);
        assert!(series.iter().all(|(_, count)| *count == 0));
    }

    #[test]
    fn test_timeline_oldest_first_with_defaults() {
        let mut timeline = HashMap::new();
        timeline.insert("2026-08-06".to_string(), 3); // today
        timeline.insert("2026-07-08".to_string(), 2); // oldest covered day
        timeline.insert("2026-06-01".to_string(), 9); // outside the window

        let series = timeline_series(date(2026, 8, 6), &timeline);
        assert_eq!(series.len(), 30);
        assert_eq!(series[0], ("Jul 8".to_string(), 2));
        assert_eq!(series[29], ("Aug 6".to_string(), 3));
        assert_eq!(series[1].1, 0);
    }

    #[test]
    fn test_timeline_crosses_month_boundary() {
        let series = timeline_series(date(2026, 3, 5), &HashMap::new());
        // 30 days back from Mar 5 lands in early February
        assert_eq!(series[0].0, "Feb 4");
        assert_eq!(series[29].0, "Mar 5");
    }

    #[test]
    fn test_severity_fixed_order_and_defaults() {
        let mut by_severity = HashMap::new();
        by_severity.insert("High".to_string(), 5);
        assert_eq!(severity_series(&by_severity), [0, 0, 5]);

        by_severity.insert("Low".to_string(), 1);
        by_severity.insert("Medium".to_string(), 2);
        assert_eq!(severity_series(&by_severity), [1, 2, 5]);

        assert_eq!(severity_series(&HashMap::new()), [0, 0, 0]);
    }

    #[test]
    fn test_location_preserves_server_order() {
        let mut by_location = serde_json::Map::new();
        by_location.insert("kitchen".to_string(), 12u32.into());
        by_location.insert("bathroom".to_string(), 30u32.into());
        by_location.insert("bedroom".to_string(), 4u32.into());

        let series = location_series(&by_location);
        assert_eq!(
            series,
            vec![
                ("kitchen".to_string(), 12),
                ("bathroom".to_string(), 30),
                ("bedroom".to_string(), 4),
            ]
        );
    }

    #[test]
    fn test_axis_max_rounds_to_five() {
        assert_eq!(axis_max(0), 5);
        assert_eq!(axis_max(1), 5);
        assert_eq!(axis_max(5), 5);
        assert_eq!(axis_max(7), 10);
        assert_eq!(axis_max(23), 25);
    }
}
