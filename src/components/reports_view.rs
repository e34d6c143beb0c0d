use std::rc::Rc;

use yew::prelude::*;

use super::chart_canvas::{ChartCanvas, ChartKind};
use crate::model::{Region, Severity, comparison_chart, forecast_chart, sample_flows};
use crate::state::Theme;

#[derive(Properties, PartialEq, Clone)]
pub struct ReportsViewProps {
    pub regions: Rc<Vec<Region>>,
    pub theme: Theme,
}

fn heat_radius(severity: Severity) -> u32 {
    match severity {
        Severity::Critical => 80,
        Severity::Warning => 60,
        _ => 40,
    }
}

#[function_component(ReportsView)]
pub fn reports_view(props: &ReportsViewProps) -> Html {
    let pal = props.theme.palette();
    let card = format!(
        "background:{}; border:1px solid {}; border-radius:16px; padding:20px;",
        pal.surface, pal.border
    );

    let stat_card = |icon: &'static str, label: &'static str, value: &'static str, value_color: Option<&'static str>| {
        html! {
            <div style={card.clone()}>
                <div style="display:flex; align-items:center; gap:14px;">
                    <div style={format!("width:46px; height:46px; border-radius:12px; display:flex; align-items:center; justify-content:center; font-size:20px; background:{};", pal.surface_alt)}>{ icon }</div>
                    <div>
                        <p style={format!("margin:0; font-size:12px; color:{};", pal.text_muted)}>{ label }</p>
                        <h3 style={format!("margin:2px 0 0; font-size:22px; color:{};", value_color.unwrap_or(pal.text))}>{ value }</h3>
                    </div>
                </div>
            </div>
        }
    };

    let coords = |id: &str| -> (f64, f64) {
        props
            .regions
            .iter()
            .find(|r| r.id == id)
            .map(|r| (r.x_pct, r.y_pct))
            .unwrap_or((0.0, 0.0))
    };

    let heat_spots: Html = props
        .regions
        .iter()
        .map(|region| {
            let size = heat_radius(region.severity);
            html! {
                <div
                    key={region.id}
                    style={format!(
                        "position:absolute; left:{}%; top:{}%; width:{size}px; height:{size}px; border-radius:50%; background:{}; filter:blur(20px); opacity:0.7; transform:translate(-50%, -50%);",
                        region.x_pct, region.y_pct, region.severity.color(),
                    )}
                ></div>
            }
        })
        .collect();

    let flow_lines: Html = sample_flows()
        .into_iter()
        .enumerate()
        .map(|(i, flow)| {
            let (x1, y1) = coords(flow.from);
            let (x2, y2) = coords(flow.to);
            html! {
                <line
                    key={i}
                    x1={format!("{x1}%")} y1={format!("{y1}%")}
                    x2={format!("{x2}%")} y2={format!("{y2}%")}
                    stroke={flow.intensity.color()}
                    stroke-width="2"
                    stroke-dasharray="4,3"
                    opacity="0.85"
                />
            }
        })
        .collect();

    html! {
        <div style="display:flex; flex-direction:column; gap:24px;">
            <div style="display:grid; grid-template-columns:repeat(auto-fit, minmax(220px, 1fr)); gap:24px;">
                { stat_card("📈", "Predicted (30m)", "1,245", None) }
                { stat_card("⚡", "Confidence Score", "94%", Some("#22c55e")) }
                { stat_card("🕑", "Peak Time Today", "14:00", None) }
                { stat_card("✔", "Anomaly Status", "Normal", Some("#22c55e")) }
            </div>

            <div style="display:grid; grid-template-columns:1fr 1fr; gap:24px;">
                <div style={card.clone()}>
                    <h3 style="margin:0 0 16px; font-size:16px;">{"24-Hour Crowd Forecast"}</h3>
                    <ChartCanvas data={forecast_chart()} kind={ChartKind::Line} height={300} theme={props.theme} />
                </div>
                <div style={card.clone()}>
                    <h3 style="margin:0 0 16px; font-size:16px;">{"Historical Comparison (Today vs Yesterday)"}</h3>
                    <ChartCanvas data={comparison_chart()} kind={ChartKind::Bar} height={300} theme={props.theme} />
                </div>
            </div>

            <div style={card}>
                <div style="margin-bottom:18px;">
                    <h3 style="margin:0; font-size:16px;">{"Campus Density Heatmap"}</h3>
                    <p style={format!("margin:4px 0 0; font-size:13px; color:{};", pal.text_muted)}>{"Visualizing high-traffic zones across the campus."}</p>
                </div>
                <div style={format!("position:relative; width:100%; height:420px; border-radius:12px; overflow:hidden; border:1px solid {}; background:linear-gradient(135deg, {} 0%, {} 100%);", pal.border, pal.surface_alt, pal.page_bg)}>
                    <div style="position:absolute; inset:0; pointer-events:none;">
                        { heat_spots }
                    </div>
                    <svg style="position:absolute; inset:0; width:100%; height:100%; pointer-events:none;">
                        { flow_lines }
                    </svg>
                    <div style={format!("position:absolute; bottom:14px; right:14px; background:{}; border:1px solid {}; padding:10px 12px; border-radius:10px;", pal.surface, pal.border)}>
                        <div style="font-size:11px; font-weight:700; margin-bottom:6px;">{"Congestion Level"}</div>
                        <div style={format!("display:flex; align-items:center; gap:6px; font-size:10px; color:{};", pal.text_muted)}>
                            <span>{"Low"}</span>
                            <div style="width:90px; height:8px; border-radius:999px; background:linear-gradient(to right, #4ade80, #fbbf24, #dc2626);"></div>
                            <span>{"High"}</span>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
