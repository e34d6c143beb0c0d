use std::rc::Rc;

use yew::prelude::*;

use super::{
    events_view::EventsView, header::Header, login_view::LoginView, overview_view::OverviewView,
    reports_view::ReportsView, settings_view::SettingsView, sidebar::Sidebar,
};
use crate::model::{Region, RegionProvider, SampleRegions};
use crate::state::Theme;
use crate::util;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum View {
    Login,
    Overview,
    Events,
    Reports,
    Settings,
}

impl View {
    pub fn title(self) -> &'static str {
        match self {
            View::Login => "CrowdSense",
            View::Overview => "Campus Overview",
            View::Events => "Event Management",
            View::Reports => "Reports & Forecast",
            View::Settings => "Settings",
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let view = use_state(|| View::Login);
    let theme = use_state(Theme::load);
    let search = use_state(String::new);
    // Region snapshot comes from the provider once; the samples are immutable.
    let regions: Rc<Vec<Region>> = use_memo((), |_| SampleRegions.regions());

    let toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_: ()| {
            let next = (*theme).toggled();
            next.store();
            theme.set(next);
        })
    };
    let navigate = {
        let view = view.clone();
        Callback::from(move |v: View| view.set(v))
    };
    let on_login = {
        let view = view.clone();
        Callback::from(move |_: ()| view.set(View::Overview))
    };
    let on_search = {
        let search = search.clone();
        Callback::from(move |term: String| search.set(term))
    };
    let on_export = {
        let regions = regions.clone();
        Callback::from(move |_: ()| util::export_report(&regions))
    };

    let pal = (*theme).palette();

    if *view == View::Login {
        return html! { <LoginView theme={*theme} on_login={on_login} /> };
    }

    let content = match *view {
        View::Login => unreachable!("handled above"),
        View::Overview => html! {
            <OverviewView regions={regions.clone()} theme={*theme} search={(*search).clone()} />
        },
        View::Events => html! { <EventsView regions={regions.clone()} theme={*theme} /> },
        View::Reports => html! { <ReportsView regions={regions.clone()} theme={*theme} /> },
        View::Settings => html! { <SettingsView theme={*theme} /> },
    };

    html! {
        <div style={format!("display:flex; width:100vw; height:100vh; overflow:hidden; background:{}; color:{}; font-family:system-ui, sans-serif;", pal.page_bg, pal.text)}>
            <Sidebar theme={*theme} active={*view} on_navigate={navigate} on_toggle_theme={toggle_theme} />
            <div style="flex:1; display:flex; flex-direction:column; min-width:0;">
                <Header
                    theme={*theme}
                    title={(*view).title()}
                    search={(*search).clone()}
                    on_search={on_search}
                    on_export={on_export}
                />
                <main style="flex:1; overflow-y:auto; padding:24px;">
                    { content }
                </main>
            </div>
        </div>
    }
}
