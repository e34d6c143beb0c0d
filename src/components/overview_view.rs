use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlElement, MouseEvent, TouchEvent, WheelEvent};
use yew::prelude::*;

use super::chart_canvas::{ChartCanvas, ChartKind};
use super::region_details::RegionDetails;
use crate::model::{Region, campus_overview_chart};
use crate::state::{PinchState, Theme, Viewport};

#[derive(Properties, PartialEq, Clone)]
pub struct OverviewViewProps {
    pub regions: Rc<Vec<Region>>,
    pub theme: Theme,
    /// Search term from the header; non-matching markers are dimmed.
    pub search: String,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum SeriesFilter {
    All,
    Actual,
    Predicted,
}

fn touch_points(e: &TouchEvent) -> Vec<(f64, f64)> {
    let list = e.touches();
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(|t| (t.client_x() as f64, t.client_y() as f64))
        .collect()
}

fn apply_transform(visual: &HtmlElement, vp: &Viewport) {
    let _ = visual.style().set_property("transform", &vp.transform_style());
}

#[function_component(OverviewView)]
pub fn overview_view(props: &OverviewViewProps) -> Html {
    let pal = props.theme.palette();
    let container_ref = use_node_ref();
    let visual_ref = use_node_ref();
    let viewport = use_mut_ref(Viewport::default);
    let pinch = use_mut_ref(PinchState::default);
    // First region is selected when the overview opens.
    let selected = use_state(|| 0_usize);
    let filter = use_state(|| SeriesFilter::All);

    // Gesture listeners. Attached once, removed on unmount; the transform is
    // applied imperatively to the visual layer so drags do not re-render the
    // whole view.
    {
        let container_ref = container_ref.clone();
        let visual_ref = visual_ref.clone();
        let viewport = viewport.clone();
        let pinch = pinch.clone();
        use_effect_with((), move |_| {
            let container: HtmlElement = container_ref
                .cast::<HtmlElement>()
                .expect("map container not attached");
            let visual: HtmlElement = visual_ref
                .cast::<HtmlElement>()
                .expect("map visual not attached");

            let mousedown_cb = {
                let viewport = viewport.clone();
                let visual = visual.clone();
                Closure::wrap(Box::new(move |e: MouseEvent| {
                    viewport
                        .borrow_mut()
                        .pointer_down(e.client_x() as f64, e.client_y() as f64);
                    let _ = visual.style().set_property("cursor", "grabbing");
                }) as Box<dyn FnMut(_)>)
            };
            let mousemove_cb = {
                let viewport = viewport.clone();
                let visual = visual.clone();
                Closure::wrap(Box::new(move |e: MouseEvent| {
                    let mut vp = viewport.borrow_mut();
                    if vp.pointer_move(e.client_x() as f64, e.client_y() as f64) {
                        e.prevent_default();
                        apply_transform(&visual, &vp);
                    }
                }) as Box<dyn FnMut(_)>)
            };
            let mouseup_cb = {
                let viewport = viewport.clone();
                let visual = visual.clone();
                Closure::wrap(Box::new(move |_e: MouseEvent| {
                    viewport.borrow_mut().pointer_up();
                    let _ = visual.style().set_property("cursor", "grab");
                }) as Box<dyn FnMut(_)>)
            };
            let wheel_cb = {
                let viewport = viewport.clone();
                let visual = visual.clone();
                Closure::wrap(Box::new(move |e: WheelEvent| {
                    e.prevent_default();
                    let mut vp = viewport.borrow_mut();
                    vp.wheel(e.delta_y());
                    apply_transform(&visual, &vp);
                }) as Box<dyn FnMut(_)>)
            };
            let touchstart_cb = {
                let viewport = viewport.clone();
                let pinch = pinch.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    pinch
                        .borrow_mut()
                        .touch_start(&touch_points(&e), &mut viewport.borrow_mut());
                }) as Box<dyn FnMut(_)>)
            };
            let touchmove_cb = {
                let viewport = viewport.clone();
                let pinch = pinch.clone();
                let visual = visual.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    e.prevent_default();
                    let mut vp = viewport.borrow_mut();
                    if pinch.borrow_mut().touch_move(&touch_points(&e), &mut vp) {
                        apply_transform(&visual, &vp);
                    }
                }) as Box<dyn FnMut(_)>)
            };
            let touchend_cb = {
                let viewport = viewport.clone();
                let pinch = pinch.clone();
                Closure::wrap(Box::new(move |_e: TouchEvent| {
                    pinch.borrow_mut().touch_end(&mut viewport.borrow_mut());
                }) as Box<dyn FnMut(_)>)
            };

            let add = |name: &str, cb: &::wasm_bindgen::JsValue| {
                let _ = container.add_event_listener_with_callback(name, cb.unchecked_ref());
            };
            add("mousedown", mousedown_cb.as_ref());
            add("mousemove", mousemove_cb.as_ref());
            add("mouseup", mouseup_cb.as_ref());
            add("mouseleave", mouseup_cb.as_ref());
            add("wheel", wheel_cb.as_ref());
            add("touchstart", touchstart_cb.as_ref());
            add("touchmove", touchmove_cb.as_ref());
            add("touchend", touchend_cb.as_ref());

            move || {
                let rm = |name: &str, cb: &::wasm_bindgen::JsValue| {
                    let _ = container.remove_event_listener_with_callback(name, cb.unchecked_ref());
                };
                rm("mousedown", mousedown_cb.as_ref());
                rm("mousemove", mousemove_cb.as_ref());
                rm("mouseup", mouseup_cb.as_ref());
                rm("mouseleave", mouseup_cb.as_ref());
                rm("wheel", wheel_cb.as_ref());
                rm("touchstart", touchstart_cb.as_ref());
                rm("touchmove", touchmove_cb.as_ref());
                rm("touchend", touchend_cb.as_ref());
            }
        });
    }

    let zoom_btn = |delta_in: bool, label: &'static str| {
        let viewport = viewport.clone();
        let visual_ref = visual_ref.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            let mut vp = viewport.borrow_mut();
            if delta_in {
                vp.zoom_in();
            } else {
                vp.zoom_out();
            }
            if let Some(visual) = visual_ref.cast::<HtmlElement>() {
                apply_transform(&visual, &vp);
            }
        });
        html! {
            <button onclick={onclick} style={format!("width:32px; height:32px; border-radius:8px; border:1px solid {}; background:{}; color:{}; font-size:16px; cursor:pointer;", pal.border, pal.surface, pal.text)}>
                { label }
            </button>
        }
    };

    let term = props.search.to_lowercase();
    let markers: Html = props
        .regions
        .iter()
        .enumerate()
        .map(|(i, region)| {
            let is_active = i == *selected;
            let dimmed = !term.is_empty() && !region.name.to_lowercase().contains(&term);
            let select = {
                let selected = selected.clone();
                Callback::from(move |e: MouseEvent| {
                    e.stop_propagation();
                    selected.set(i);
                })
            };
            let ring = if is_active {
                format!("0 0 0 4px {}55, 0 0 0 2px #ffffff", region.severity.color())
            } else {
                format!("0 0 0 6px {}33", region.severity.color())
            };
            html! {
                <div
                    key={region.id}
                    onclick={select}
                    title={region.name}
                    style={format!(
                        "position:absolute; left:{}%; top:{}%; transform:translate(-50%, -50%) scale({}); width:14px; height:14px; border-radius:50%; background:{}; box-shadow:{}; cursor:pointer; opacity:{}; transition:opacity 0.2s;",
                        region.x_pct,
                        region.y_pct,
                        if is_active { 1.3 } else { 1.0 },
                        region.severity.color(),
                        ring,
                        if dimmed { 0.2 } else { 1.0 },
                    )}
                ></div>
            }
        })
        .collect();

    let pill = |f: SeriesFilter, label: &'static str| {
        let filter = filter.clone();
        let active = *filter == f;
        let style = if active {
            "padding:5px 14px; border-radius:999px; border:none; background:#2563eb; color:#fff; font-size:12px; font-weight:600; cursor:pointer;".to_string()
        } else {
            format!("padding:5px 14px; border-radius:999px; border:1px solid {}; background:transparent; color:{}; font-size:12px; cursor:pointer;", pal.border, pal.text_muted)
        };
        html! {
            <button style={style} onclick={Callback::from(move |_| filter.set(f))}>{ label }</button>
        }
    };

    let chart = campus_overview_chart(
        matches!(*filter, SeriesFilter::All | SeriesFilter::Actual),
        matches!(*filter, SeriesFilter::All | SeriesFilter::Predicted),
    );
    let selected_region = props.regions.get(*selected).cloned();
    let card = format!(
        "background:{}; border:1px solid {}; border-radius:16px;",
        pal.surface, pal.border
    );

    html! {
        <div style="display:flex; flex-direction:column; gap:24px;">
            <div style="display:grid; grid-template-columns:2fr 1fr; gap:24px; align-items:start;">
                <div style={format!("{card} position:relative; overflow:hidden; height:420px;")}>
                    <div ref={container_ref} style="position:absolute; inset:0; touch-action:none;">
                        <div
                            ref={visual_ref.clone()}
                            style={format!(
                                "position:absolute; inset:0; cursor:grab; transform-origin:center; background:linear-gradient(135deg, {} 0%, {} 100%);",
                                pal.surface_alt, pal.page_bg
                            )}
                        >
                            // Rough campus footprint blocks behind the markers.
                            <div style={format!("position:absolute; left:28%; top:38%; width:16%; height:16%; border-radius:10px; background:{}; opacity:0.7;", pal.border)}></div>
                            <div style={format!("position:absolute; left:54%; top:48%; width:14%; height:14%; border-radius:10px; background:{}; opacity:0.7;", pal.border)}></div>
                            <div style={format!("position:absolute; left:18%; top:58%; width:15%; height:14%; border-radius:10px; background:{}; opacity:0.7;", pal.border)}></div>
                            <div style={format!("position:absolute; left:68%; top:22%; width:16%; height:17%; border-radius:10px; background:{}; opacity:0.7;", pal.border)}></div>
                            <div style={format!("position:absolute; left:43%; top:12%; width:15%; height:15%; border-radius:10px; background:{}; opacity:0.7;", pal.border)}></div>
                            { markers }
                        </div>
                    </div>
                    <div style="position:absolute; right:14px; top:14px; display:flex; flex-direction:column; gap:6px; z-index:10;">
                        { zoom_btn(true, "+") }
                        { zoom_btn(false, "−") }
                    </div>
                </div>
                {
                    if let Some(region) = selected_region {
                        html! { <RegionDetails region={region} theme={props.theme} /> }
                    } else {
                        html! {}
                    }
                }
            </div>
            <div style={format!("{card} padding:20px;")}>
                <div style="display:flex; align-items:center; justify-content:space-between; margin-bottom:16px;">
                    <h3 style="margin:0; font-size:16px;">{"Campus Footfall"}</h3>
                    <div style="display:flex; gap:8px;">
                        { pill(SeriesFilter::All, "All") }
                        { pill(SeriesFilter::Actual, "Actual") }
                        { pill(SeriesFilter::Predicted, "Predicted") }
                    </div>
                </div>
                <ChartCanvas data={chart} kind={ChartKind::Line} height={260} theme={props.theme} />
            </div>
        </div>
    }
}
