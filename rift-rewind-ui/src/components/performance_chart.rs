//! Performance Chart Component
//!
//! Monthly win rate plotted on an HTML5 Canvas.

use leptos::*;
use rift_rewind::format::MonthlyPoint;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const LINE_COLOR: &str = "#C89B3C";
const BREAK_EVEN_COLOR: &str = "#4b5563";

#[component]
pub fn PerformanceChart(series: Vec<MonthlyPoint>) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let series = store_value(series);

    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            series.with_value(|points| draw_chart(&canvas, points));
        }
    });

    view! {
        <div class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"📊 Monthly Performance"</h2>
            <canvas
                node_ref=canvas_ref
                width="800"
                height="300"
                class="w-full h-64 rounded-lg"
            />
        </div>
    }
}

fn draw_chart(canvas: &HtmlCanvasElement, points: &[MonthlyPoint]) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    let margin_left = 50.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    if points.is_empty() {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No monthly data yet", width / 2.0 - 70.0, height / 2.0);
        return;
    }

    // Win rate axis is fixed at 0-100
    let y_for = |win_rate: f64| margin_top + (1.0 - win_rate.clamp(0.0, 100.0) / 100.0) * chart_height;
    let step = if points.len() > 1 {
        chart_width / (points.len() - 1) as f64
    } else {
        0.0
    };
    let x_for = |i: usize| {
        if points.len() > 1 {
            margin_left + i as f64 * step
        } else {
            margin_left + chart_width / 2.0
        }
    };

    ctx.set_stroke_style(&"#374151".into()); // gray-700
    ctx.set_line_width(1.0);
    ctx.set_font("12px sans-serif");
    for i in 0..=4 {
        let value = i as f64 * 25.0;
        let y = y_for(value);
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        ctx.set_fill_style(&"#9ca3af".into()); // gray-400
        let _ = ctx.fill_text(&format!("{}%", value), 5.0, y + 4.0);
    }

    ctx.set_stroke_style(&BREAK_EVEN_COLOR.into());
    ctx.begin_path();
    ctx.move_to(margin_left, y_for(50.0));
    ctx.line_to(width - margin_right, y_for(50.0));
    ctx.stroke();

    ctx.set_stroke_style(&LINE_COLOR.into());
    ctx.set_line_width(2.0);
    ctx.begin_path();
    for (i, point) in points.iter().enumerate() {
        let (x, y) = (x_for(i), y_for(point.win_rate));
        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.stroke();

    ctx.set_fill_style(&LINE_COLOR.into());
    for (i, point) in points.iter().enumerate() {
        ctx.begin_path();
        let _ = ctx.arc(x_for(i), y_for(point.win_rate), 4.0, 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();
    }

    ctx.set_fill_style(&"#9ca3af".into());
    for (i, point) in points.iter().enumerate() {
        let _ = ctx.fill_text(&point.label, x_for(i) - 18.0, height - 12.0);
    }
}
