//! Inline-SVG charts for the dashboard: a monthly line chart and an event-type
//! pie chart. Geometry is computed by plain functions so it stays testable.

use leptos::prelude::*;
use std::f64::consts::PI;

pub const PALETTE: [&str; 5] = ["#4b6cb7", "#36d1dc", "#ff7b7b", "#82ca9d", "#8884d8"];

const CHART_WIDTH: f64 = 520.0;
const CHART_HEIGHT: f64 = 260.0;
const CHART_PADDING: f64 = 32.0;

/// Map a series onto `"x1,y1 x2,y2 ..."` for an SVG polyline. The y axis runs
/// from zero to the series maximum (at least 1 so a flat zero series still
/// sits on the baseline).
pub fn polyline_points(values: &[i64], width: f64, height: f64, padding: f64) -> String {
    if values.is_empty() {
        return String::new();
    }

    let max = values.iter().copied().max().unwrap_or(0).max(1) as f64;
    let inner_w = width - 2.0 * padding;
    let inner_h = height - 2.0 * padding;
    let step = if values.len() > 1 {
        inner_w / (values.len() - 1) as f64
    } else {
        0.0
    };

    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let x = padding + step * i as f64;
            let y = height - padding - (*v as f64 / max) * inner_h;
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// One rendered pie slice.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSegment {
    pub label: String,
    pub count: i64,
    pub path: String,
    pub color: &'static str,
}

/// SVG path for a pie slice spanning `[start_frac, end_frac)` of the circle,
/// starting at 12 o'clock and going clockwise.
pub fn pie_slice_path(cx: f64, cy: f64, r: f64, start_frac: f64, end_frac: f64) -> String {
    // A single slice covering the whole circle degenerates (start == end on
    // the arc), so draw it as two half-circle arcs.
    if end_frac - start_frac >= 0.9999 {
        return format!(
            "M {cx} {} A {r} {r} 0 1 1 {cx} {} A {r} {r} 0 1 1 {cx} {} Z",
            cy - r,
            cy + r,
            cy - r
        );
    }

    let to_point = |frac: f64| {
        let angle = frac * 2.0 * PI - PI / 2.0;
        (cx + r * angle.cos(), cy + r * angle.sin())
    };

    let (x1, y1) = to_point(start_frac);
    let (x2, y2) = to_point(end_frac);
    let large_arc = if end_frac - start_frac > 0.5 { 1 } else { 0 };

    format!("M {cx} {cy} L {x1:.2} {y1:.2} A {r} {r} 0 {large_arc} 1 {x2:.2} {y2:.2} Z")
}

/// Turn labeled counts into pie slices. Zero-count entries are skipped.
pub fn pie_segments(data: &[(String, i64)], cx: f64, cy: f64, r: f64) -> Vec<PieSegment> {
    let total: i64 = data.iter().map(|(_, c)| (*c).max(0)).sum();
    if total == 0 {
        return Vec::new();
    }

    let mut segments = Vec::new();
    let mut cursor = 0.0;
    for (i, (label, count)) in data.iter().enumerate() {
        if *count <= 0 {
            continue;
        }
        let frac = *count as f64 / total as f64;
        segments.push(PieSegment {
            label: label.clone(),
            count: *count,
            path: pie_slice_path(cx, cy, r, cursor, cursor + frac),
            color: PALETTE[i % PALETTE.len()],
        });
        cursor += frac;
    }
    segments
}

/// Line chart of one numeric series against categorical x labels.
#[component]
pub fn LineChart(
    #[prop(into)] labels: Signal<Vec<String>>,
    #[prop(into)] values: Signal<Vec<i64>>,
) -> impl IntoView {
    let points = move || polyline_points(&values.get(), CHART_WIDTH, CHART_HEIGHT, CHART_PADDING);

    let markers = move || {
        let vals = values.get();
        let pts = polyline_points(&vals, CHART_WIDTH, CHART_HEIGHT, CHART_PADDING);
        pts.split(' ')
            .filter(|p| !p.is_empty())
            .filter_map(|p| {
                let (x, y) = p.split_once(',')?;
                Some(view! {
                    <circle cx=x.to_string() cy=y.to_string() r="3.5" fill=PALETTE[0] />
                })
            })
            .collect_view()
    };

    let x_labels = move || {
        let labels = labels.get();
        let count = labels.len();
        let inner_w = CHART_WIDTH - 2.0 * CHART_PADDING;
        let step = if count > 1 {
            inner_w / (count - 1) as f64
        } else {
            0.0
        };
        labels
            .into_iter()
            .enumerate()
            .map(|(i, label)| {
                let x = CHART_PADDING + step * i as f64;
                view! {
                    <text
                        x=format!("{x:.1}")
                        y=format!("{:.1}", CHART_HEIGHT - 8.0)
                        text-anchor="middle"
                        class="chart__axis-label"
                    >
                        {label}
                    </text>
                }
            })
            .collect_view()
    };

    view! {
        <svg
            class="chart chart--line"
            viewBox=format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}")
            role="img"
        >
            <line
                x1=CHART_PADDING
                y1={CHART_HEIGHT - CHART_PADDING}
                x2={CHART_WIDTH - CHART_PADDING}
                y2={CHART_HEIGHT - CHART_PADDING}
                class="chart__axis"
            />
            <line
                x1=CHART_PADDING
                y1=CHART_PADDING
                x2=CHART_PADDING
                y2={CHART_HEIGHT - CHART_PADDING}
                class="chart__axis"
            />
            <polyline
                points=points
                fill="none"
                stroke=PALETTE[0]
                stroke-width="2"
            />
            {markers}
            {x_labels}
        </svg>
    }
}

/// Pie chart with a legend, one slice per labeled count.
#[component]
pub fn PieChart(#[prop(into)] data: Signal<Vec<(String, i64)>>) -> impl IntoView {
    let segments = move || pie_segments(&data.get(), 110.0, 110.0, 100.0);

    view! {
        <div class="chart chart--pie">
            <svg viewBox="0 0 220 220" role="img">
                {move || {
                    segments()
                        .into_iter()
                        .map(|seg| {
                            view! { <path d=seg.path fill=seg.color /> }
                        })
                        .collect_view()
                }}
            </svg>
            <ul class="chart__legend">
                {move || {
                    segments()
                        .into_iter()
                        .map(|seg| {
                            view! {
                                <li>
                                    <span
                                        class="chart__legend-swatch"
                                        style=format!("background: {};", seg.color)
                                    ></span>
                                    {format!("{} ({})", seg.label, seg.count)}
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polyline_spans_the_padded_area() {
        let pts = polyline_points(&[0, 5, 10], 100.0, 100.0, 10.0);
        let parts: Vec<&str> = pts.split(' ').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "10.0,90.0"); // zero sits on the baseline
        assert_eq!(parts[1], "50.0,50.0");
        assert_eq!(parts[2], "90.0,10.0"); // max reaches the top padding
    }

    #[test]
    fn flat_zero_series_stays_on_baseline() {
        let pts = polyline_points(&[0, 0], 100.0, 100.0, 10.0);
        assert_eq!(pts, "10.0,90.0 90.0,90.0");
    }

    #[test]
    fn empty_series_yields_no_points() {
        assert_eq!(polyline_points(&[], 100.0, 100.0, 10.0), "");
    }

    #[test]
    fn segments_skip_zero_counts_and_cycle_palette() {
        let data = vec![
            ("Wedding".to_string(), 3),
            ("Birthday".to_string(), 0),
            ("Corporate".to_string(), 1),
        ];
        let segs = pie_segments(&data, 110.0, 110.0, 100.0);
        assert_eq!(segs.len(), 2);
        assert_eq!(segs[0].label, "Wedding");
        assert_eq!(segs[0].color, PALETTE[0]);
        assert_eq!(segs[1].label, "Corporate");
        assert_eq!(segs[1].color, PALETTE[2]);
    }

    #[test]
    fn single_entry_draws_a_full_circle() {
        let data = vec![("Wedding".to_string(), 7)];
        let segs = pie_segments(&data, 110.0, 110.0, 100.0);
        assert_eq!(segs.len(), 1);
        // Two-arc full circle, not a degenerate slice.
        assert_eq!(segs[0].path.matches('A').count(), 2);
    }

    #[test]
    fn majority_slice_uses_large_arc_flag() {
        let path = pie_slice_path(110.0, 110.0, 100.0, 0.0, 0.75);
        assert!(path.contains(" 0 1 1 "));
        let minor = pie_slice_path(110.0, 110.0, 100.0, 0.0, 0.25);
        assert!(minor.contains(" 0 0 1 "));
    }

    #[test]
    fn all_zero_distribution_has_no_segments() {
        let data = vec![("Wedding".to_string(), 0)];
        assert!(pie_segments(&data, 110.0, 110.0, 100.0).is_empty());
    }
}
