use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::model::{Region, Severity};
use crate::state::Theme;

#[derive(Properties, PartialEq, Clone)]
pub struct EventCardProps {
    pub region: Region,
    pub zone: char,
    pub floor: usize,
    pub theme: Theme,
}

/// One region's card on the event management grid. Capacity slider and alert
/// toggle are local mock state; the sample data itself never changes.
#[function_component(EventCard)]
pub fn event_card(props: &EventCardProps) -> Html {
    let pal = props.theme.palette();
    let region = &props.region;
    let capacity = use_state(|| region.capacity);
    let alerts_on = use_state(|| {
        matches!(region.severity, Severity::Critical | Severity::Warning)
    });

    let on_capacity = {
        let capacity = capacity.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                if let Ok(v) = input.value().parse::<u32>() {
                    capacity.set(v);
                }
            }
        })
    };
    let on_alerts = {
        let alerts_on = alerts_on.clone();
        Callback::from(move |_| alerts_on.set(!*alerts_on))
    };

    let load = region.load_percent().min(100);
    let sev_color = region.severity.color();

    html! {
        <div style={format!("background:{}; border:1px solid {}; border-radius:16px; padding:20px; display:flex; flex-direction:column; gap:16px;", pal.surface, pal.border)}>
            <div style="display:flex; justify-content:space-between; align-items:flex-start;">
                <div>
                    <div style={format!("width:40px; height:40px; border-radius:10px; display:flex; align-items:center; justify-content:center; font-size:18px; margin-bottom:8px; background:{sev_color}22; color:{sev_color};")}>
                        { region.device.icon() }
                    </div>
                    <h3 style="margin:0; font-size:16px;">{ region.name }</h3>
                    <div style={format!("font-size:12px; color:{};", pal.text_muted)}>
                        { format!("Zone {} • Floor {}", props.zone, props.floor) }
                    </div>
                </div>
                <span style={format!("display:inline-flex; align-items:center; gap:6px; padding:4px 10px; border-radius:999px; font-size:11px; font-weight:700; background:{sev_color}22; color:{sev_color};")}>
                    <span>{"●"}</span>
                    { region.severity.badge_label() }
                </span>
            </div>

            <div>
                <div style="font-size:30px; font-weight:700;">{ region.current }</div>
                <div style={format!("display:flex; justify-content:space-between; font-size:12px; color:{};", pal.text_muted)}>
                    <span>{"Current Devices"}</span>
                    <span>{ format!("{load}% Load") }</span>
                </div>
            </div>

            <div style={format!("height:8px; border-radius:999px; background:{}; overflow:hidden;", pal.surface_alt)}>
                <div style={format!("height:100%; width:{load}%; background:{sev_color}; border-radius:999px;")}></div>
            </div>

            <div>
                <div style={format!("display:flex; justify-content:space-between; font-size:12px; color:{}; margin-bottom:6px;", pal.text_muted)}>
                    <span>{"Max Capacity"}</span>
                    <span style={format!("font-weight:700; color:{};", pal.text)}>{ *capacity }</span>
                </div>
                <input
                    type="range"
                    min="50"
                    max="2000"
                    value={capacity.to_string()}
                    oninput={on_capacity}
                    style="width:100%; accent-color:#2563eb;"
                />
            </div>

            <div style={format!("display:flex; justify-content:space-between; align-items:center; font-size:13px; border-top:1px solid {}; padding-top:14px;", pal.border)}>
                <span>{"Alerts"}</span>
                <label style="display:inline-flex; align-items:center; cursor:pointer;">
                    <input type="checkbox" checked={*alerts_on} onclick={on_alerts} style="accent-color:#2563eb; width:18px; height:18px;" />
                </label>
            </div>
        </div>
    }
}
