use yew::prelude::*;

use super::trend_chart::TrendChart;
use crate::model::Region;
use crate::state::Theme;

#[derive(Properties, PartialEq, Clone)]
pub struct RegionDetailsProps {
    pub region: Region,
    pub theme: Theme,
}

/// Detail panel for the selected region: status, load, peak/dwell stats and
/// the 9-bar occupancy trend.
#[function_component(RegionDetails)]
pub fn region_details(props: &RegionDetailsProps) -> Html {
    let pal = props.theme.palette();
    let region = &props.region;

    let stat = |label: &'static str, value: Html| {
        html! {
            <div style="display:flex; justify-content:space-between; align-items:center; font-size:13px;">
                <span style={format!("color:{};", pal.text_muted)}>{ label }</span>
                <span style="font-weight:600;">{ value }</span>
            </div>
        }
    };

    html! {
        <div style={format!("background:{}; border:1px solid {}; border-radius:16px; padding:20px; display:flex; flex-direction:column; gap:14px;", pal.surface, pal.border)}>
            <div>
                <h3 style="margin:0 0 6px; font-size:17px;">{ region.name }</h3>
                <div style={format!("display:inline-flex; align-items:center; gap:6px; font-size:12px; font-weight:600; color:{};", region.severity.color())}>
                    <span>{"●"}</span>
                    <span>{ region.status }</span>
                </div>
            </div>
            <div style="display:flex; align-items:baseline; gap:8px;">
                <span style="font-size:32px; font-weight:700;">{ format!("{}%", region.load_percent()) }</span>
                <span style={format!("font-size:12px; color:{};", pal.text_muted)}>
                    { format!("{} of {} capacity", region.current, region.capacity) }
                </span>
            </div>
            { stat("Peak Hour", html!{ { region.peak } }) }
            { stat("Avg. Dwell Time", html!{ { region.dwell } }) }
            { stat("Devices", html!{ <>{ region.device.icon() }{" 92% "}{ region.device.label() }</> }) }
            <div>
                <div style={format!("font-size:12px; font-weight:600; color:{}; margin-bottom:8px;", pal.text_muted)}>{"Occupancy Trend"}</div>
                <TrendChart trend={region.trend} theme={props.theme} />
            </div>
        </div>
    }
}
