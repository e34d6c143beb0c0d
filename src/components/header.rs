use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::state::Theme;
use crate::util;

#[derive(Properties, PartialEq, Clone)]
pub struct HeaderProps {
    pub theme: Theme,
    pub title: &'static str,
    pub search: String,
    pub on_search: Callback<String>,
    pub on_export: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let pal = props.theme.palette();

    let oninput = {
        let on_search = props.on_search.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                on_search.emit(input.value());
            }
        })
    };
    let export = {
        let cb = props.on_export.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <header style={format!("height:72px; flex-shrink:0; display:flex; align-items:center; justify-content:space-between; padding:0 28px; background:{}; border-bottom:1px solid {};", pal.surface, pal.border)}>
            <div>
                <h2 style="margin:0; font-size:19px;">{ props.title }</h2>
                <div style={format!("display:flex; align-items:center; gap:8px; font-size:12px; color:{}; margin-top:2px;", pal.text_muted)}>
                    <span style="color:#22c55e;">{"●"}</span>
                    <span>{"Live Dashboard"}</span>
                    <span>{"•"}</span>
                    <span>{ util::current_date_label() }</span>
                </div>
            </div>
            <div style="display:flex; align-items:center; gap:14px;">
                <input
                    type="text"
                    placeholder="Search regions..."
                    value={props.search.clone()}
                    oninput={oninput}
                    style={format!("width:280px; padding:9px 14px; border-radius:10px; border:1px solid {}; background:{}; color:{}; font-size:13px; outline:none;", pal.border, pal.surface_alt, pal.text)}
                />
                <button
                    onclick={export}
                    style={format!("display:flex; align-items:center; gap:8px; padding:9px 16px; border-radius:10px; border:1px solid {}; background:{}; color:{}; font-size:13px; font-weight:600; cursor:pointer;", pal.border, pal.surface, pal.text_muted)}
                >
                    <span>{"⬇"}</span>
                    <span>{"Export"}</span>
                </button>
            </div>
        </header>
    }
}
