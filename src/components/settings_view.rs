use yew::prelude::*;

use crate::state::Theme;

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsViewProps {
    pub theme: Theme,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Profile,
    Notifications,
    Security,
    Display,
}

/// Mock settings forms. Nothing here persists; the theme flag in the sidebar
/// is the only stored preference.
#[function_component(SettingsView)]
pub fn settings_view(props: &SettingsViewProps) -> Html {
    let pal = props.theme.palette();
    let tab = use_state(|| Tab::Profile);

    let tab_btn = |t: Tab, icon: &'static str, label: &'static str| {
        let tab = tab.clone();
        let active = *tab == t;
        let style = if active {
            "display:flex; align-items:center; gap:10px; width:100%; padding:10px 12px; border:none; border-radius:8px; font-size:13px; font-weight:600; cursor:pointer; text-align:left; background:rgba(59,130,246,0.12); color:#3b82f6;".to_string()
        } else {
            format!("display:flex; align-items:center; gap:10px; width:100%; padding:10px 12px; border:none; border-radius:8px; font-size:13px; cursor:pointer; text-align:left; background:transparent; color:{};", pal.text_muted)
        };
        html! {
            <button style={style} onclick={Callback::from(move |_| tab.set(t))}>
                <span>{ icon }</span>
                <span>{ label }</span>
            </button>
        }
    };

    let input_style = format!(
        "width:100%; box-sizing:border-box; padding:10px 14px; border-radius:10px; border:1px solid {}; background:{}; color:{}; font-size:13px; outline:none;",
        pal.border, pal.surface_alt, pal.text
    );
    let label_style = format!(
        "display:block; font-size:13px; font-weight:500; color:{}; margin-bottom:6px;",
        pal.text
    );
    let section_note = format!("margin:0; font-size:13px; color:{};", pal.text_muted);

    let toggle_row = |title: &'static str, desc: &'static str| {
        html! {
            <div style={format!("display:flex; justify-content:space-between; align-items:center; padding:16px; background:{}; border-radius:12px;", pal.surface_alt)}>
                <div>
                    <div style="font-size:14px; font-weight:600;">{ title }</div>
                    <div style={format!("font-size:12px; color:{};", pal.text_muted)}>{ desc }</div>
                </div>
                <input type="checkbox" checked={true} style="accent-color:#2563eb; width:18px; height:18px; cursor:pointer;" />
            </div>
        }
    };

    let content = match *tab {
        Tab::Profile => html! {
            <div style="display:flex; flex-direction:column; gap:20px;">
                <div>
                    <h3 style="margin:0 0 4px; font-size:16px;">{"Profile Information"}</h3>
                    <p style={section_note.clone()}>{"Update your account's profile information and email address."}</p>
                </div>
                <div style="display:grid; grid-template-columns:1fr 1fr; gap:18px;">
                    <div>
                        <label style={label_style.clone()}>{"First Name"}</label>
                        <input type="text" value="Admin" style={input_style.clone()} />
                    </div>
                    <div>
                        <label style={label_style.clone()}>{"Last Name"}</label>
                        <input type="text" value="User" style={input_style.clone()} />
                    </div>
                    <div style="grid-column:1 / -1;">
                        <label style={label_style.clone()}>{"Email Address"}</label>
                        <input type="email" value="admin@campus.edu" style={input_style.clone()} />
                    </div>
                </div>
                <div style="display:flex; justify-content:flex-end;">
                    <button style="display:flex; align-items:center; gap:8px; padding:10px 22px; background:#2563eb; color:#fff; border:none; border-radius:10px; font-size:13px; font-weight:600; cursor:pointer;">
                        {"Save Changes"}
                    </button>
                </div>
            </div>
        },
        Tab::Notifications => html! {
            <div style="display:flex; flex-direction:column; gap:20px;">
                <div>
                    <h3 style="margin:0 0 4px; font-size:16px;">{"Notification Preferences"}</h3>
                    <p style={section_note.clone()}>{"Manage how you receive notifications and alerts."}</p>
                </div>
                { toggle_row("Email Notifications", "Receive daily summaries and critical alerts via email.") }
                { toggle_row("Push Notifications", "Receive real-time alerts on your browser.") }
            </div>
        },
        Tab::Security => html! {
            <div style="display:flex; flex-direction:column; gap:20px;">
                <div>
                    <h3 style="margin:0 0 4px; font-size:16px;">{"Security Settings"}</h3>
                    <p style={section_note.clone()}>{"Manage your password and security questions."}</p>
                </div>
                <div>
                    <label style={label_style.clone()}>{"Current Password"}</label>
                    <input type="password" style={input_style.clone()} />
                </div>
                <div>
                    <label style={label_style.clone()}>{"New Password"}</label>
                    <input type="password" style={input_style.clone()} />
                </div>
                <div>
                    <button style={format!("padding:10px 22px; background:{}; color:{}; border:1px solid {}; border-radius:10px; font-size:13px; font-weight:600; cursor:pointer;", pal.surface_alt, pal.text, pal.border)}>
                        {"Update Password"}
                    </button>
                </div>
            </div>
        },
        Tab::Display => html! {
            <div style="display:flex; flex-direction:column; gap:20px;">
                <div>
                    <h3 style="margin:0 0 4px; font-size:16px;">{"Display Settings"}</h3>
                    <p style={section_note.clone()}>{"Customize the interface appearance."}</p>
                </div>
                <div style="padding:16px; background:rgba(234,179,8,0.12); color:#b45309; border-radius:12px; font-size:13px;">
                    {"Theme settings are currently managed via the quick toggle in the sidebar."}
                </div>
            </div>
        },
    };

    html! {
        <div style="max-width:900px; margin:0 auto;">
            <div style={format!("background:{}; border:1px solid {}; border-radius:16px; overflow:hidden; display:flex; min-height:560px;", pal.surface, pal.border)}>
                <div style={format!("width:220px; flex-shrink:0; border-right:1px solid {}; padding:16px; background:{};", pal.border, pal.surface_alt)}>
                    <nav style="display:flex; flex-direction:column; gap:4px;">
                        { tab_btn(Tab::Profile, "👤", "Profile") }
                        { tab_btn(Tab::Notifications, "🔔", "Notifications") }
                        { tab_btn(Tab::Security, "🔒", "Security") }
                        { tab_btn(Tab::Display, "🖥", "Display") }
                    </nav>
                </div>
                <div style="flex:1; padding:28px;">
                    { content }
                </div>
            </div>
        </div>
    }
}
