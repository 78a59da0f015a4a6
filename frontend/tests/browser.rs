#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement};
use yew::prelude::*;

use renovation_frontend::behavior::navigation::{
    navigate_to, navigation_callback, scroll_target, section_target, CONTACT_SECTION,
};
use renovation_frontend::behavior::ui_flags::{UiAction, UiFlags};
use renovation_frontend::behavior::visibility::{use_section_visibility, ObserverOptions, ViewportObserver};
use renovation_frontend::config;
use renovation_frontend::dom;
use renovation_frontend::metadata::{self, PageMetadata};
use renovation_frontend::variant::Variant;

wasm_bindgen_test_configure!(run_in_browser);

fn append_div(id: &str, style: &str) -> Element {
    let doc = dom::document().expect("document");
    let element = doc.create_element("div").expect("create div");
    element.set_id(id);
    element.set_attribute("style", style).expect("style");
    doc.body().expect("body").append_child(&element).expect("append");
    element
}

fn prepend_div(id: &str, style: &str) -> Element {
    let doc = dom::document().expect("document");
    let body = doc.body().expect("body");
    let element = doc.create_element("div").expect("create div");
    element.set_id(id);
    element.set_attribute("style", style).expect("style");
    body.insert_before(&element, body.first_child().as_ref()).expect("prepend");
    element
}

fn attribute(id: &str, name: &str) -> Option<String> {
    dom::document()
        .expect("document")
        .get_element_by_id(id)
        .and_then(|element| element.get_attribute(name))
}

#[wasm_bindgen_test]
fn scroll_metrics_are_readable() {
    let metrics = dom::scroll_metrics().expect("scroll metrics");
    assert!(metrics.offset >= 0.0);
    assert!(metrics.viewport_height > 0.0);
}

#[wasm_bindgen_test]
fn navigating_to_a_missing_section_is_a_noop() {
    assert!(!navigate_to("gibt-es-nicht").expect("navigate"));
    assert_eq!(section_target("gibt-es-nicht").expect("target"), None);
}

#[wasm_bindgen_test]
fn navigating_to_an_existing_section_succeeds() {
    let section = append_div("kontakt-test", "height: 10px;");
    assert!(navigate_to("kontakt-test").expect("navigate"));
    section.remove();
}

#[function_component(NavHost)]
fn nav_host() -> Html {
    let flags = use_reducer_eq(|| UiFlags::default().apply(UiAction::ToggleMenu));
    let onclick = navigation_callback(flags.clone()).reform(|_: MouseEvent| CONTACT_SECTION);
    html! {
        <button id="nav-host" data-menu-open={flags.menu_open.to_string()} {onclick}>
            {"Kontakt"}
        </button>
    }
}

#[wasm_bindgen_test]
async fn contact_navigation_aligns_under_header_and_closes_menu() {
    let spacer = append_div("nav-spacer", "height: 4000px;");
    let section = append_div(CONTACT_SECTION, "height: 600px;");
    let root = append_div("nav-root", "");

    yew::Renderer::<NavHost>::with_root(root.clone()).render();
    TimeoutFuture::new(50).await;
    assert_eq!(attribute("nav-host", "data-menu-open").as_deref(), Some("true"));

    let window = dom::window().expect("window");
    let expected = scroll_target(
        section.get_bounding_client_rect().top(),
        window.scroll_y().expect("scroll y"),
        config::HEADER_HEIGHT_PX,
    );
    assert!(expected > 0.0);
    assert_eq!(section_target(CONTACT_SECTION).expect("target"), Some(expected));

    let button: HtmlElement = dom::document()
        .expect("document")
        .get_element_by_id("nav-host")
        .expect("nav host rendered")
        .dyn_into()
        .expect("button element");
    button.click();
    TimeoutFuture::new(50).await;

    assert_eq!(attribute("nav-host", "data-menu-open").as_deref(), Some("false"));

    window.scroll_to_with_x_and_y(0.0, 0.0);
    root.remove();
    section.remove();
    spacer.remove();
}

#[wasm_bindgen_test]
async fn observer_reports_an_entry_once() {
    dom::window().expect("window").scroll_to_with_x_and_y(0.0, 0.0);
    let target = prepend_div("observed-once", "height: 50px;");
    let hits = Rc::new(Cell::new(0u32));

    let options = ObserverOptions { threshold: 0.0, root_margin: "0px" };
    let counter = hits.clone();
    let observer = ViewportObserver::new(&options, move |_| counter.set(counter.get() + 1)).expect("observer");
    observer.observe(&target);
    TimeoutFuture::new(200).await;
    assert_eq!(hits.get(), 1);

    // Leaving and re-entering would report again if the element were still observed.
    target.set_attribute("style", "display: none;").expect("hide");
    TimeoutFuture::new(100).await;
    target.set_attribute("style", "height: 50px;").expect("show");
    TimeoutFuture::new(200).await;
    assert_eq!(hits.get(), 1);

    drop(observer);
    target.remove();
}

#[wasm_bindgen_test]
async fn dropped_observer_stops_reporting() {
    dom::window().expect("window").scroll_to_with_x_and_y(0.0, 0.0);
    let target = prepend_div("observed-after-drop", "display: none;");
    let hits = Rc::new(Cell::new(0u32));

    let options = ObserverOptions { threshold: 0.0, root_margin: "0px" };
    let counter = hits.clone();
    let observer = ViewportObserver::new(&options, move |_| counter.set(counter.get() + 1)).expect("observer");
    observer.observe(&target);
    TimeoutFuture::new(100).await;
    drop(observer);

    target.set_attribute("style", "height: 50px;").expect("show");
    TimeoutFuture::new(200).await;
    assert_eq!(hits.get(), 0);

    target.remove();
}

#[wasm_bindgen_test]
fn invalid_root_margin_fails_observer_construction() {
    let options = ObserverOptions { threshold: 0.1, root_margin: "not a margin" };
    assert!(ViewportObserver::new(&options, |_| ()).is_err());
}

const FALLBACK_SECTIONS: &[&str] = &["fallback-a", "fallback-b", "fallback-c"];

#[function_component(FallbackHost)]
fn fallback_host() -> Html {
    let visibility = use_section_visibility(
        FALLBACK_SECTIONS,
        ObserverOptions { threshold: 0.1, root_margin: "not a margin" },
    );
    let all = FALLBACK_SECTIONS.iter().all(|id| visibility.contains(id));
    html! {
        <div id="fallback-host" data-revealed={visibility.len().to_string()} data-all={all.to_string()} />
    }
}

#[wasm_bindgen_test]
async fn sections_are_all_revealed_without_an_observer() {
    let root = append_div("fallback-root", "");
    yew::Renderer::<FallbackHost>::with_root(root.clone()).render();
    TimeoutFuture::new(50).await;

    assert_eq!(attribute("fallback-host", "data-revealed").as_deref(), Some("3"));
    assert_eq!(attribute("fallback-host", "data-all").as_deref(), Some("true"));
    root.remove();
}

#[wasm_bindgen_test]
fn metadata_is_applied_idempotently() {
    let meta: PageMetadata = Variant::Classic.metadata();
    metadata::apply(&meta).expect("first apply");
    metadata::apply(&meta).expect("second apply");

    let doc = dom::document().expect("document");
    assert_eq!(doc.title(), meta.title);
    let scripts = doc
        .query_selector_all("script#structured-data")
        .expect("query structured data");
    assert_eq!(scripts.length(), 1);
    let description = doc
        .query_selector("meta[name='description']")
        .expect("query description")
        .expect("description exists");
    assert_eq!(description.get_attribute("content").as_deref(), Some(meta.description));
}
