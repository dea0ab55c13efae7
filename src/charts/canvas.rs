//! Canvas Chart Backend
//!
//! Draws chart widgets directly onto HTML5 canvas anchors, one widget per
//! slot. Destroying a widget releases its canvas surface.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::charts::backend::ChartBackend;
use crate::charts::spec::{ChartKind, SlotSpec};
use crate::state::snapshot::ChartSeries;

const BACKGROUND: &str = "#1f2937"; // gray-800
const GRID_COLOR: &str = "#374151"; // gray-700
const LABEL_COLOR: &str = "#9ca3af"; // gray-400
const TEXT_COLOR: &str = "#f9fafb";
const LABEL_FONT: &str = "12px sans-serif";

const MARGIN_TOP: f64 = 20.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 40.0;
const MARGIN_LEFT: f64 = 60.0;
// Horizontal bars carry their category labels in the left margin.
const MARGIN_LEFT_WIDE: f64 = 96.0;

/// Live widget bound to one canvas anchor.
pub struct CanvasWidget {
    canvas: HtmlCanvasElement,
}

/// Production chart backend rendering onto 2d canvas contexts.
pub struct CanvasBackend;

impl ChartBackend for CanvasBackend {
    type Handle = CanvasWidget;

    fn anchor_mounted(&self, slot: &SlotSpec) -> bool {
        find_canvas(slot.anchor).is_some()
    }

    fn construct(&mut self, slot: &SlotSpec, series: &ChartSeries) -> Option<CanvasWidget> {
        let canvas = find_canvas(slot.anchor)?;
        let ctx = context_2d(&canvas)?;
        draw(&ctx, &canvas, slot, series);
        Some(CanvasWidget { canvas })
    }

    fn destroy(&mut self, handle: CanvasWidget) {
        // The canvas element itself belongs to the view; releasing the
        // widget only clears the drawn surface.
        if let Some(ctx) = context_2d(&handle.canvas) {
            ctx.clear_rect(
                0.0,
                0.0,
                handle.canvas.width() as f64,
                handle.canvas.height() as f64,
            );
        }
    }
}

fn find_canvas(id: &str) -> Option<HtmlCanvasElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into()
        .ok()
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    match canvas.get_context("2d") {
        Ok(Some(ctx)) => ctx.dyn_into().ok(),
        _ => None,
    }
}

fn draw(
    ctx: &CanvasRenderingContext2d,
    canvas: &HtmlCanvasElement,
    slot: &SlotSpec,
    series: &ChartSeries,
) {
    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    ctx.set_fill_style_str(BACKGROUND);
    ctx.fill_rect(0.0, 0.0, width, height);

    match slot.kind {
        ChartKind::Doughnut => draw_radial(ctx, width, height, slot, series, 0.55),
        ChartKind::Pie => draw_radial(ctx, width, height, slot, series, 0.0),
        ChartKind::Bar => draw_bars(ctx, width, height, slot, series),
        ChartKind::HorizontalBar => draw_horizontal_bars(ctx, width, height, slot, series),
        ChartKind::Line => draw_line(ctx, width, height, slot, series),
        ChartKind::Funnel => draw_funnel(ctx, width, height, slot, series),
    }
}

fn draw_radial(
    ctx: &CanvasRenderingContext2d,
    width: f64,
    height: f64,
    slot: &SlotSpec,
    series: &ChartSeries,
    hole_ratio: f64,
) {
    let angles = slice_angles(&series.values);
    if angles.is_empty() {
        return;
    }

    let cx = width / 2.0;
    let cy = height / 2.0;
    let radius = (width.min(height) / 2.0 - 16.0).max(10.0);

    for (idx, &(start, end)) in angles.iter().enumerate() {
        if end - start <= f64::EPSILON {
            continue;
        }
        ctx.set_fill_style_str(slot.color(idx));
        ctx.begin_path();
        ctx.move_to(cx, cy);
        let _ = ctx.arc(cx, cy, radius, start, end);
        ctx.close_path();
        ctx.fill();

        ctx.set_stroke_style_str("#fff");
        ctx.set_line_width(2.0);
        ctx.stroke();
    }

    if hole_ratio > 0.0 {
        ctx.set_fill_style_str(BACKGROUND);
        ctx.begin_path();
        let _ = ctx.arc(cx, cy, radius * hole_ratio, 0.0, std::f64::consts::TAU);
        ctx.fill();
    }

    // Value labels on slices wide enough to carry them
    let label_radius = if hole_ratio > 0.0 {
        radius * (hole_ratio + 1.0) / 2.0
    } else {
        radius * 0.66
    };
    ctx.set_fill_style_str(TEXT_COLOR);
    ctx.set_font(LABEL_FONT);
    ctx.set_text_align("center");
    for (idx, &(start, end)) in angles.iter().enumerate() {
        if (end - start) / std::f64::consts::TAU < 0.06 {
            continue;
        }
        let mid = (start + end) / 2.0;
        let x = cx + mid.cos() * label_radius;
        let y = cy + mid.sin() * label_radius;
        let _ = ctx.fill_text(&slot.format.format(series.values[idx]), x, y + 4.0);
    }
}

fn draw_bars(
    ctx: &CanvasRenderingContext2d,
    width: f64,
    height: f64,
    slot: &SlotSpec,
    series: &ChartSeries,
) {
    let chart_width = width - MARGIN_LEFT - MARGIN_RIGHT;
    let chart_height = height - MARGIN_TOP - MARGIN_BOTTOM;
    let y_max = axis_max(&series.values);

    draw_value_grid(ctx, width, chart_height, slot, y_max);

    let band = chart_width / series.len() as f64;
    let bar_width = band * 0.6;

    for (idx, &value) in series.values.iter().enumerate() {
        let bar_height = (value.max(0.0) / y_max) * chart_height;
        let x = MARGIN_LEFT + idx as f64 * band + (band - bar_width) / 2.0;
        let y = MARGIN_TOP + chart_height - bar_height;

        ctx.set_fill_style_str(slot.color(idx));
        ctx.fill_rect(x, y, bar_width, bar_height);

        ctx.set_fill_style_str(LABEL_COLOR);
        ctx.set_font(LABEL_FONT);
        ctx.set_text_align("center");
        let _ = ctx.fill_text(
            &truncate_label(&series.labels[idx], 10),
            x + bar_width / 2.0,
            height - 12.0,
        );
    }
}

fn draw_horizontal_bars(
    ctx: &CanvasRenderingContext2d,
    width: f64,
    height: f64,
    slot: &SlotSpec,
    series: &ChartSeries,
) {
    let chart_width = width - MARGIN_LEFT_WIDE - MARGIN_RIGHT;
    let chart_height = height - MARGIN_TOP - MARGIN_BOTTOM;
    let x_max = axis_max(&series.values);

    // Vertical grid with tick labels along the bottom
    ctx.set_stroke_style_str(GRID_COLOR);
    ctx.set_line_width(1.0);
    for i in 0..=5 {
        let x = MARGIN_LEFT_WIDE + (i as f64 / 5.0) * chart_width;
        ctx.begin_path();
        ctx.move_to(x, MARGIN_TOP);
        ctx.line_to(x, MARGIN_TOP + chart_height);
        ctx.stroke();

        ctx.set_fill_style_str(LABEL_COLOR);
        ctx.set_font(LABEL_FONT);
        ctx.set_text_align("center");
        let tick = x_max * (i as f64 / 5.0);
        let _ = ctx.fill_text(&slot.format.format(tick), x, height - 12.0);
    }

    let band = chart_height / series.len() as f64;
    let bar_height = band * 0.6;

    for (idx, &value) in series.values.iter().enumerate() {
        let bar_width = (value.max(0.0) / x_max) * chart_width;
        let y = MARGIN_TOP + idx as f64 * band + (band - bar_height) / 2.0;

        ctx.set_fill_style_str(slot.color(idx));
        ctx.fill_rect(MARGIN_LEFT_WIDE, y, bar_width, bar_height);

        ctx.set_fill_style_str(LABEL_COLOR);
        ctx.set_font(LABEL_FONT);
        ctx.set_text_align("right");
        let _ = ctx.fill_text(
            &truncate_label(&series.labels[idx], 12),
            MARGIN_LEFT_WIDE - 8.0,
            y + bar_height / 2.0 + 4.0,
        );
    }
}

fn draw_line(
    ctx: &CanvasRenderingContext2d,
    width: f64,
    height: f64,
    slot: &SlotSpec,
    series: &ChartSeries,
) {
    let chart_width = width - MARGIN_LEFT - MARGIN_RIGHT;
    let chart_height = height - MARGIN_TOP - MARGIN_BOTTOM;
    let y_max = axis_max(&series.values);

    draw_value_grid(ctx, width, chart_height, slot, y_max);

    let n = series.len();
    let x_at = |idx: usize| {
        if n == 1 {
            MARGIN_LEFT + chart_width / 2.0
        } else {
            MARGIN_LEFT + (idx as f64 / (n - 1) as f64) * chart_width
        }
    };
    let y_at = |value: f64| MARGIN_TOP + chart_height - (value.max(0.0) / y_max) * chart_height;

    // Area fill under the line
    if n > 1 {
        ctx.set_fill_style_str(slot.color(1));
        ctx.begin_path();
        ctx.move_to(x_at(0), MARGIN_TOP + chart_height);
        for (idx, &value) in series.values.iter().enumerate() {
            ctx.line_to(x_at(idx), y_at(value));
        }
        ctx.line_to(x_at(n - 1), MARGIN_TOP + chart_height);
        ctx.close_path();
        ctx.fill();

        ctx.set_stroke_style_str(slot.color(0));
        ctx.set_line_width(3.0);
        ctx.begin_path();
        for (idx, &value) in series.values.iter().enumerate() {
            if idx == 0 {
                ctx.move_to(x_at(idx), y_at(value));
            } else {
                ctx.line_to(x_at(idx), y_at(value));
            }
        }
        ctx.stroke();
    }

    ctx.set_fill_style_str(slot.color(0));
    for (idx, &value) in series.values.iter().enumerate() {
        ctx.begin_path();
        let _ = ctx.arc(x_at(idx), y_at(value), 3.0, 0.0, std::f64::consts::TAU);
        ctx.fill();
    }

    // At most six category labels along the x axis
    let step = (n + 5) / 6;
    ctx.set_fill_style_str(LABEL_COLOR);
    ctx.set_font(LABEL_FONT);
    ctx.set_text_align("center");
    for idx in (0..n).step_by(step.max(1)) {
        let _ = ctx.fill_text(
            &truncate_label(&series.labels[idx], 6),
            x_at(idx),
            height - 12.0,
        );
    }
}

fn draw_funnel(
    ctx: &CanvasRenderingContext2d,
    width: f64,
    height: f64,
    slot: &SlotSpec,
    series: &ChartSeries,
) {
    let chart_width = width - 2.0 * MARGIN_RIGHT;
    let chart_height = height - MARGIN_TOP - MARGIN_TOP;
    let widths = funnel_widths(&series.values, chart_width);
    let n = widths.len();
    let band = chart_height / n as f64;
    let gap = 6.0_f64.min(band * 0.2);
    let cx = width / 2.0;

    for idx in 0..n {
        let top_w = widths[idx];
        let bottom_w = widths.get(idx + 1).copied().unwrap_or(top_w * 0.6);
        let y0 = MARGIN_TOP + idx as f64 * band + gap / 2.0;
        let y1 = y0 + band - gap;

        ctx.set_fill_style_str(slot.color(idx));
        ctx.begin_path();
        ctx.move_to(cx - top_w / 2.0, y0);
        ctx.line_to(cx + top_w / 2.0, y0);
        ctx.line_to(cx + bottom_w / 2.0, y1);
        ctx.line_to(cx - bottom_w / 2.0, y1);
        ctx.close_path();
        ctx.fill();

        ctx.set_fill_style_str(TEXT_COLOR);
        ctx.set_font(LABEL_FONT);
        ctx.set_text_align("center");
        let label = format!(
            "{} ({})",
            truncate_label(&series.labels[idx], 14),
            slot.format.format(series.values[idx])
        );
        let _ = ctx.fill_text(&label, cx, y0 + (band - gap) / 2.0 + 4.0);
    }
}

/// Horizontal grid lines with tick labels down the left edge.
fn draw_value_grid(
    ctx: &CanvasRenderingContext2d,
    width: f64,
    chart_height: f64,
    slot: &SlotSpec,
    y_max: f64,
) {
    ctx.set_stroke_style_str(GRID_COLOR);
    ctx.set_line_width(1.0);
    for i in 0..=5 {
        let y = MARGIN_TOP + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(MARGIN_LEFT, y);
        ctx.line_to(width - MARGIN_RIGHT, y);
        ctx.stroke();

        let tick = y_max * (1.0 - i as f64 / 5.0);
        ctx.set_fill_style_str(LABEL_COLOR);
        ctx.set_font(LABEL_FONT);
        ctx.set_text_align("left");
        let _ = ctx.fill_text(&slot.format.format(tick), 5.0, y + 4.0);
    }
}

/// Slice boundaries for radial charts, starting at twelve o'clock.
/// Empty when the series has no positive mass to distribute.
fn slice_angles(values: &[f64]) -> Vec<(f64, f64)> {
    let total: f64 = values.iter().map(|v| v.max(0.0)).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut angles = Vec::with_capacity(values.len());
    let mut cursor = -std::f64::consts::FRAC_PI_2;
    for &value in values {
        let span = (value.max(0.0) / total) * std::f64::consts::TAU;
        angles.push((cursor, cursor + span));
        cursor += span;
    }
    angles
}

/// Upper bound for a zero-based value axis, padded so marks never touch
/// the chart frame.
fn axis_max(values: &[f64]) -> f64 {
    let max = values.iter().copied().fold(0.0_f64, f64::max);
    if max <= 0.0 {
        1.0
    } else {
        max * 1.1
    }
}

/// Stage widths proportional to the largest stage, floored so thin stages
/// stay clickable-size.
fn funnel_widths(values: &[f64], full_width: f64) -> Vec<f64> {
    let max = values.iter().copied().fold(0.0_f64, f64::max);
    values
        .iter()
        .map(|&v| {
            if max <= 0.0 {
                full_width * 0.05
            } else {
                ((v.max(0.0) / max) * full_width).max(full_width * 0.05)
            }
        })
        .collect()
}

fn truncate_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() <= max_chars {
        label.to_string()
    } else {
        let head: String = label.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_angles_cover_the_full_circle() {
        let angles = slice_angles(&[3.0, 1.0]);
        assert_eq!(angles.len(), 2);
        assert!((angles[0].0 - (-std::f64::consts::FRAC_PI_2)).abs() < 1e-9);

        let total: f64 = angles.iter().map(|(s, e)| e - s).sum();
        assert!((total - std::f64::consts::TAU).abs() < 1e-9);

        // three quarters of the mass in the first slice
        let first = angles[0].1 - angles[0].0;
        assert!((first - std::f64::consts::TAU * 0.75).abs() < 1e-9);
    }

    #[test]
    fn slice_angles_treat_negatives_as_zero_mass() {
        let angles = slice_angles(&[-2.0, 4.0]);
        assert!((angles[0].1 - angles[0].0).abs() < 1e-9);
        assert!(slice_angles(&[0.0, 0.0]).is_empty());
        assert!(slice_angles(&[-1.0]).is_empty());
    }

    #[test]
    fn axis_max_pads_and_never_collapses() {
        assert!((axis_max(&[10.0]) - 11.0).abs() < 1e-9);
        assert_eq!(axis_max(&[0.0, 0.0]), 1.0);
        assert_eq!(axis_max(&[]), 1.0);
    }

    #[test]
    fn funnel_widths_scale_and_floor() {
        let widths = funnel_widths(&[100.0, 50.0, 1.0], 400.0);
        assert!((widths[0] - 400.0).abs() < 1e-9);
        assert!((widths[1] - 200.0).abs() < 1e-9);
        // floored at 5% of the full width
        assert!((widths[2] - 20.0).abs() < 1e-9);
    }

    #[test]
    fn labels_truncate_on_char_boundaries() {
        assert_eq!(truncate_label("short", 10), "short");
        assert_eq!(truncate_label("a very long label", 8), "a very …");
        assert_eq!(truncate_label("žluťoučký kůň", 6), "žluťo…");
    }
}
