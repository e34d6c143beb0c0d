use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use crate::model::{ChartData, Dataset};
use crate::state::Theme;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ChartKind {
    Line,
    Bar,
}

#[derive(Properties, PartialEq, Clone)]
pub struct ChartCanvasProps {
    pub data: ChartData,
    pub kind: ChartKind,
    pub height: u32,
    pub theme: Theme,
}

const PAD_LEFT: f64 = 46.0;
const PAD_RIGHT: f64 = 12.0;
const PAD_TOP: f64 = 12.0;
const PAD_BOTTOM: f64 = 26.0;

fn nice_max(datasets: &[Dataset]) -> f64 {
    let raw = datasets
        .iter()
        .filter(|d| !d.hidden)
        .flat_map(|d| d.data.iter().copied())
        .fold(0.0_f64, f64::max);
    if raw <= 0.0 {
        return 100.0;
    }
    // Round up to a tidy tick boundary.
    let step = 10.0_f64.powf(raw.log10().floor());
    (raw / step).ceil() * step
}

fn set_dash(ctx: &CanvasRenderingContext2d, on: bool) {
    let segments = js_sys::Array::new();
    if on {
        segments.push(&JsValue::from_f64(5.0));
        segments.push(&JsValue::from_f64(5.0));
    }
    let _ = ctx.set_line_dash(&segments);
}

fn draw(canvas: &HtmlCanvasElement, data: &ChartData, kind: ChartKind, theme: Theme) {
    let Some(ctx) = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
    else {
        return;
    };
    let w = canvas.width() as f64;
    let h = canvas.height() as f64;
    let plot_w = w - PAD_LEFT - PAD_RIGHT;
    let plot_h = h - PAD_TOP - PAD_BOTTOM;
    if plot_w <= 0.0 || plot_h <= 0.0 || data.labels.is_empty() {
        return;
    }
    let pal = theme.palette();
    let max = nice_max(&data.datasets);
    let y_of = |v: f64| PAD_TOP + plot_h * (1.0 - (v / max).min(1.0));
    let n = data.labels.len();

    ctx.clear_rect(0.0, 0.0, w, h);

    // Horizontal grid + y tick labels.
    ctx.set_font("11px sans-serif");
    set_dash(&ctx, false);
    for i in 0..=4 {
        let v = max * (i as f64) / 4.0;
        let y = y_of(v);
        ctx.set_stroke_style_str(pal.border);
        ctx.set_line_width(1.0);
        ctx.begin_path();
        ctx.move_to(PAD_LEFT, y);
        ctx.line_to(w - PAD_RIGHT, y);
        ctx.stroke();
        ctx.set_fill_style_str(pal.text_muted);
        let _ = ctx.fill_text(&format!("{}", v.round()), 4.0, y + 4.0);
    }
    // X labels.
    ctx.set_fill_style_str(pal.text_muted);
    for (i, label) in data.labels.iter().enumerate() {
        let x = if n > 1 {
            PAD_LEFT + plot_w * (i as f64) / ((n - 1) as f64)
        } else {
            PAD_LEFT + plot_w / 2.0
        };
        let _ = ctx.fill_text(label, x - 12.0, h - 8.0);
    }

    match kind {
        ChartKind::Line => {
            for ds in data.datasets.iter().filter(|d| !d.hidden) {
                let point_x = |i: usize| PAD_LEFT + plot_w * (i as f64) / ((n - 1).max(1) as f64);
                if ds.fill {
                    let gradient = ctx.create_linear_gradient(0.0, PAD_TOP, 0.0, h - PAD_BOTTOM);
                    let _ = gradient.add_color_stop(0.0, &format!("{}33", ds.color));
                    let _ = gradient.add_color_stop(1.0, &format!("{}00", ds.color));
                    ctx.begin_path();
                    for (i, v) in ds.data.iter().enumerate() {
                        if i == 0 {
                            ctx.move_to(point_x(i), y_of(*v));
                        } else {
                            ctx.line_to(point_x(i), y_of(*v));
                        }
                    }
                    ctx.line_to(point_x(ds.data.len() - 1), h - PAD_BOTTOM);
                    ctx.line_to(point_x(0), h - PAD_BOTTOM);
                    ctx.close_path();
                    ctx.set_fill_style_canvas_gradient(&gradient);
                    ctx.fill();
                }
                ctx.set_stroke_style_str(ds.color);
                ctx.set_line_width(2.0);
                set_dash(&ctx, ds.dashed);
                ctx.begin_path();
                for (i, v) in ds.data.iter().enumerate() {
                    if i == 0 {
                        ctx.move_to(point_x(i), y_of(*v));
                    } else {
                        ctx.line_to(point_x(i), y_of(*v));
                    }
                }
                ctx.stroke();
                set_dash(&ctx, false);
                if !ds.dashed {
                    ctx.set_fill_style_str(ds.color);
                    for (i, v) in ds.data.iter().enumerate() {
                        ctx.begin_path();
                        let _ = ctx.arc(point_x(i), y_of(*v), 3.0, 0.0, std::f64::consts::TAU);
                        ctx.fill();
                    }
                }
            }
        }
        ChartKind::Bar => {
            let visible: Vec<&Dataset> = data.datasets.iter().filter(|d| !d.hidden).collect();
            let group_w = plot_w / n as f64;
            let bar_w = (group_w * 0.7) / visible.len().max(1) as f64;
            for (d_idx, ds) in visible.iter().enumerate() {
                ctx.set_fill_style_str(ds.color);
                for (i, v) in ds.data.iter().enumerate() {
                    let x = PAD_LEFT + group_w * (i as f64) + group_w * 0.15 + bar_w * d_idx as f64;
                    let y = y_of(*v);
                    ctx.fill_rect(x, y, bar_w - 2.0, h - PAD_BOTTOM - y);
                }
            }
        }
    }
}

/// Draws the provided series on a 2D canvas. Chart internals stay here; the
/// rest of the app only assembles labels/datasets.
#[function_component(ChartCanvas)]
pub fn chart_canvas(props: &ChartCanvasProps) -> Html {
    let canvas_ref = use_node_ref();
    let pal = props.theme.palette();

    {
        let canvas_ref = canvas_ref.clone();
        let data = props.data.clone();
        let kind = props.kind;
        let theme = props.theme;
        let height = props.height;
        use_effect_with((data, theme), move |(data, theme)| {
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                let width = canvas
                    .parent_element()
                    .map(|p| p.client_width())
                    .filter(|w| *w > 0)
                    .unwrap_or(800) as u32;
                canvas.set_width(width);
                canvas.set_height(height);
                draw(&canvas, data, kind, *theme);
            }
            || ()
        });
    }

    let legend: Html = props
        .data
        .datasets
        .iter()
        .filter(|d| !d.hidden)
        .map(|ds| {
            html! {
                <span key={ds.label} style={format!("display:inline-flex; align-items:center; gap:6px; font-size:12px; color:{}; margin-right:16px;", pal.text_muted)}>
                    <span style={format!("display:inline-block; width:10px; height:10px; border-radius:2px; background:{};", ds.color)}></span>
                    { ds.label }
                </span>
            }
        })
        .collect();

    html! {
        <div style="width:100%;">
            <div style="margin-bottom:8px;">{ legend }</div>
            <canvas ref={canvas_ref} style="display:block; width:100%;"></canvas>
        </div>
    }
}
