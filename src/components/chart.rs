//! Results Chart Component
//!
//! Vote-distribution bar chart using HTML5 Canvas. The canvas handle lives
//! inside the results dialog, so the chart exists exactly as long as the
//! dialog does; nothing is reused between openings.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::api::CandidateResult;

/// Bar colors, cycled across candidates
const BAR_COLORS: [&str; 6] = [
    "#6366F1", // Indigo
    "#8B5CF6", // Violet
    "#10B981", // Emerald
    "#F59E0B", // Amber
    "#EF4444", // Red
    "#3B82F6", // Blue
];

/// Vote-distribution bar chart
#[component]
pub fn ResultsChart(results: Vec<CandidateResult>) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Draw once the canvas is mounted; node refs resolve after render
    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_bars(&canvas, &results);
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width="640"
            height="320"
            class="w-full rounded-lg"
        />
    }
}

/// Step between y-axis ticks: whole votes, at most five intervals.
fn y_axis_step(max_votes: u32) -> u32 {
    if max_votes <= 5 {
        1
    } else {
        max_votes.div_ceil(5)
    }
}

/// Draw the bar chart on canvas
fn draw_bars(canvas: &HtmlCanvasElement, results: &[CandidateResult]) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Margins
    let margin_left = 40.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 50.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Clear canvas
    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    if results.is_empty() {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No votes recorded", width / 2.0 - 60.0, height / 2.0);
        return;
    }

    let max_votes = results.iter().map(|r| r.vote_count).max().unwrap_or(0);
    let step = y_axis_step(max_votes);
    let y_max = (max_votes.div_ceil(step).max(1) * step) as f64;

    // Horizontal grid lines with whole-vote tick labels
    ctx.set_stroke_style(&"#374151".into()); // gray-700
    ctx.set_line_width(1.0);
    ctx.set_font("12px sans-serif");

    let mut tick = 0;
    while (tick as f64) <= y_max {
        let y = margin_top + (1.0 - tick as f64 / y_max) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        ctx.set_fill_style(&"#9ca3af".into()); // gray-400
        let _ = ctx.fill_text(&tick.to_string(), 8.0, y + 4.0);

        tick += step;
    }

    // Bars with candidate labels underneath
    let slot_width = chart_width / results.len() as f64;
    let bar_width = (slot_width * 0.6).min(80.0);

    for (idx, result) in results.iter().enumerate() {
        let color = BAR_COLORS[idx % BAR_COLORS.len()];
        let bar_height = (result.vote_count as f64 / y_max) * chart_height;
        let x = margin_left + idx as f64 * slot_width + (slot_width - bar_width) / 2.0;
        let y = margin_top + chart_height - bar_height;

        ctx.set_fill_style(&color.into());
        ctx.fill_rect(x, y, bar_width, bar_height);

        // Vote count above the bar
        ctx.set_fill_style(&"#e5e7eb".into()); // gray-200
        let _ = ctx.fill_text(
            &result.vote_count.to_string(),
            x + bar_width / 2.0 - 4.0,
            (y - 6.0).max(12.0),
        );

        // Candidate name under the axis
        ctx.set_fill_style(&"#9ca3af".into());
        let label = truncate_label(&result.candidate_name, 12);
        let _ = ctx.fill_text(
            &label,
            x + bar_width / 2.0 - label.len() as f64 * 3.0,
            height - margin_bottom + 18.0,
        );
    }
}

/// Shorten long candidate names for the axis labels
fn truncate_label(name: &str, max_chars: usize) -> String {
    if name.chars().count() <= max_chars {
        name.to_string()
    } else {
        let head: String = name.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn y_axis_step_is_whole_votes() {
        assert_eq!(y_axis_step(0), 1);
        assert_eq!(y_axis_step(3), 1);
        assert_eq!(y_axis_step(5), 1);
        assert_eq!(y_axis_step(6), 2);
        assert_eq!(y_axis_step(23), 5);
        assert_eq!(y_axis_step(100), 20);
    }

    #[test]
    fn labels_truncate_preserving_short_names() {
        assert_eq!(truncate_label("Ada", 12), "Ada");
        assert_eq!(truncate_label("Bartholomew Cubbins", 12), "Bartholomew…");
    }
}
