use std::rc::Rc;

use yew::prelude::*;

use super::event_card::EventCard;
use crate::model::Region;
use crate::state::Theme;

#[derive(Properties, PartialEq, Clone)]
pub struct EventsViewProps {
    pub regions: Rc<Vec<Region>>,
    pub theme: Theme,
}

#[function_component(EventsView)]
pub fn events_view(props: &EventsViewProps) -> Html {
    let cards: Html = props
        .regions
        .iter()
        .enumerate()
        .map(|(i, region)| {
            let zone = (b'A' + (i as u8 % 26)) as char;
            html! {
                <EventCard
                    key={region.id}
                    region={region.clone()}
                    zone={zone}
                    floor={i + 1}
                    theme={props.theme}
                />
            }
        })
        .collect();

    html! {
        <div style="display:grid; grid-template-columns:repeat(auto-fill, minmax(300px, 1fr)); gap:24px;">
            { cards }
        </div>
    }
}
