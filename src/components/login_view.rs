use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::state::Theme;

#[derive(Properties, PartialEq, Clone)]
pub struct LoginViewProps {
    pub theme: Theme,
    pub on_login: Callback<()>,
}

/// Mock sign-in screen. Submitting always succeeds; there is no real
/// authentication behind the dashboard.
#[function_component(LoginView)]
pub fn login_view(props: &LoginViewProps) -> Html {
    let pal = props.theme.palette();
    let email = use_state(|| "admin@campus.edu".to_string());
    let password = use_state(|| "password123".to_string());

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                email.set(input.value());
            }
        })
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                password.set(input.value());
            }
        })
    };
    let onsubmit = {
        let cb = props.on_login.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            cb.emit(());
        })
    };

    let input_style = format!(
        "width:100%; box-sizing:border-box; padding:12px 14px; border-radius:10px; border:1px solid {}; background:{}; color:{}; font-size:14px; outline:none;",
        pal.border, pal.surface_alt, pal.text
    );

    html! {
        <div style={format!("display:flex; align-items:center; justify-content:center; min-height:100vh; background:{}; font-family:system-ui, sans-serif;", pal.page_bg)}>
            <div style={format!("background:{}; border:1px solid {}; padding:32px; border-radius:16px; width:100%; max-width:400px; text-align:center; box-shadow:0 20px 40px rgba(0,0,0,0.1);", pal.surface, pal.border)}>
                <div style="width:48px; height:48px; background:#2563eb; border-radius:12px; display:flex; align-items:center; justify-content:center; margin:0 auto 16px; font-size:22px;">{"📶"}</div>
                <h1 style={format!("margin:0 0 8px; font-size:22px; color:{};", pal.text)}>{"CrowdSense"}</h1>
                <p style={format!("margin:0 0 28px; font-size:13px; color:{};", pal.text_muted)}>{"Campus Crowd Monitoring System"}</p>
                <form onsubmit={onsubmit} style="display:flex; flex-direction:column; gap:18px; text-align:left;">
                    <label style={format!("font-size:13px; font-weight:500; color:{};", pal.text)}>
                        {"Email Address"}
                        <input type="email" value={(*email).clone()} oninput={on_email} style={input_style.clone()} />
                    </label>
                    <label style={format!("font-size:13px; font-weight:500; color:{};", pal.text)}>
                        {"Password"}
                        <input type="password" value={(*password).clone()} oninput={on_password} style={input_style} />
                    </label>
                    <button type="submit" style="width:100%; background:#2563eb; color:#fff; font-weight:700; padding:12px; border:none; border-radius:10px; font-size:14px; cursor:pointer;">
                        {"Access Dashboard"}
                    </button>
                </form>
                <p style={format!("margin:28px 0 0; font-size:11px; color:{};", pal.text_muted)}>{"© 2026 CrowdSense Analytics"}</p>
            </div>
        </div>
    }
}
