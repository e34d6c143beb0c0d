use yew::prelude::*;

use crate::model::{TREND_LEN, TREND_NOW_INDEX};
use crate::state::Theme;

#[derive(Properties, PartialEq, Clone)]
pub struct TrendChartProps {
    pub trend: [u32; TREND_LEN],
    pub theme: Theme,
}

/// Nine-bar occupancy mini chart. Bar 6 is the live sample, later bars are
/// predictions and render hollow.
#[function_component(TrendChart)]
pub fn trend_chart(props: &TrendChartProps) -> Html {
    let pal = props.theme.palette();

    let bars: Html = props
        .trend
        .iter()
        .enumerate()
        .map(|(i, &val)| {
            let height = val.clamp(2, 100);
            let (fill, extra) = if i == TREND_NOW_INDEX {
                ("#2563eb".to_string(), String::new())
            } else if i > TREND_NOW_INDEX {
                (
                    "transparent".to_string(),
                    "border:1px dashed #2563eb; box-sizing:border-box;".to_string(),
                )
            } else {
                (format!("{}66", pal.accent), String::new())
            };
            let tooltip = if i == TREND_NOW_INDEX {
                format!("Live: {val}%")
            } else if i > TREND_NOW_INDEX {
                format!("Predicted: {val}%")
            } else {
                format!("Actual: {val}%")
            };
            html! {
                <div key={i} style="flex:1; display:flex; flex-direction:column; justify-content:flex-end; align-items:center; height:100%; position:relative;">
                    {
                        if i == TREND_NOW_INDEX {
                            html! { <span style="position:absolute; top:-18px; font-size:9px; font-weight:700; color:#2563eb;">{"Now"}</span> }
                        } else {
                            html! {}
                        }
                    }
                    <div
                        title={tooltip}
                        style={format!("width:70%; height:{height}%; border-radius:3px 3px 0 0; background:{fill}; {extra}")}
                    ></div>
                </div>
            }
        })
        .collect();

    html! {
        <div style="display:flex; gap:4px; align-items:flex-end; height:90px; padding-top:18px;">
            { bars }
        </div>
    }
}
