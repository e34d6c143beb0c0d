use yew::prelude::*;

use super::app::View;
use crate::state::Theme;

#[derive(Properties, PartialEq, Clone)]
pub struct SidebarProps {
    pub theme: Theme,
    pub active: View,
    pub on_navigate: Callback<View>,
    pub on_toggle_theme: Callback<()>,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let nav_item = |view: View, icon: &'static str, label: &'static str| {
        let on_navigate = props.on_navigate.clone();
        let is_active = props.active == view;
        let style = if is_active {
            "display:flex; align-items:center; gap:10px; padding:10px 12px; border-radius:8px; font-size:14px; cursor:pointer; background:rgba(59,130,246,0.12); color:#60a5fa; border:1px solid rgba(59,130,246,0.25);"
        } else {
            "display:flex; align-items:center; gap:10px; padding:10px 12px; border-radius:8px; font-size:14px; cursor:pointer; color:#94a3b8;"
        };
        html! {
            <div style={style} onclick={Callback::from(move |_| on_navigate.emit(view))}>
                <span>{ icon }</span>
                <span>{ label }</span>
            </div>
        }
    };

    let toggle = {
        let cb = props.on_toggle_theme.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let (theme_icon, theme_label) = if props.theme.is_dark() {
        ("☀", "Light Mode")
    } else {
        ("🌙", "Dark Mode")
    };

    // The sidebar stays dark in both themes, like the reference layout.
    html! {
        <aside style="width:256px; flex-shrink:0; background:#0f172a; border-right:1px solid #1e293b; display:flex; flex-direction:column; color:#e2e8f0;">
            <div style="height:64px; display:flex; align-items:center; gap:12px; padding:0 20px; border-bottom:1px solid #1e293b;">
                <div style="width:32px; height:32px; background:#2563eb; border-radius:8px; display:flex; align-items:center; justify-content:center;">{"📶"}</div>
                <div>
                    <div style="font-weight:700; font-size:16px; line-height:1.2;">{"CrowdSense"}</div>
                    <div style="font-size:11px; color:#64748b;">{"Campus Analytics"}</div>
                </div>
            </div>
            <nav style="flex:1; padding:20px 14px; display:flex; flex-direction:column; gap:4px; overflow-y:auto;">
                <div style="font-size:11px; font-weight:600; color:#475569; text-transform:uppercase; letter-spacing:0.05em; margin:0 8px 6px;">{"Main Menu"}</div>
                { nav_item(View::Overview, "🗺", "Overview") }
                { nav_item(View::Reports, "📊", "Reports") }
                <div style="height:1px; background:#1e293b; margin:14px 8px;"></div>
                <div style="font-size:11px; font-weight:600; color:#475569; text-transform:uppercase; letter-spacing:0.05em; margin:0 8px 6px;">{"Management"}</div>
                { nav_item(View::Events, "⚠", "Event Management") }
                { nav_item(View::Settings, "⚙", "Settings") }
                <div style="display:flex; align-items:center; gap:10px; padding:10px 12px; border-radius:8px; font-size:14px; cursor:pointer; color:#94a3b8; margin-top:14px;" onclick={toggle}>
                    <span>{ theme_icon }</span>
                    <span>{ theme_label }</span>
                </div>
            </nav>
            <div style="padding:16px; border-top:1px solid #1e293b; display:flex; align-items:center; gap:12px;">
                <div style="width:40px; height:40px; border-radius:50%; background:#334155; display:flex; align-items:center; justify-content:center;">{"👤"}</div>
                <div style="overflow:hidden;">
                    <div style="font-size:13px; font-weight:600; white-space:nowrap;">{"Admin User"}</div>
                    <div style="font-size:11px; color:#64748b; white-space:nowrap;">{"admin@campus.edu"}</div>
                </div>
            </div>
        </aside>
    }
}
