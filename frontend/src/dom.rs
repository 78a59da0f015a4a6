use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AddEventListenerOptions, Document, Window};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    #[error("no global window available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no root element")]
    NoRootElement,
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

/// Raw inputs for the scroll tracker, read straight from the live page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollMetrics {
    pub offset: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

pub fn scroll_metrics() -> Result<ScrollMetrics, DomError> {
    let window = window()?;
    let root = window
        .document()
        .ok_or(DomError::NoDocument)?
        .document_element()
        .ok_or(DomError::NoRootElement)?;
    let viewport_height = window.inner_height()?.as_f64().unwrap_or(0.0);

    Ok(ScrollMetrics {
        offset: window.scroll_y()?,
        document_height: f64::from(root.scroll_height()),
        viewport_height,
    })
}

/// Milliseconds from a monotonic clock when the page has one.
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
        .unwrap_or_else(web_sys::js_sys::Date::now)
}

/// A window event listener that unregisters itself when dropped.
pub struct WindowListener {
    window: Window,
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl WindowListener {
    pub fn passive(event: &'static str, handler: impl FnMut() + 'static) -> Result<Self, DomError> {
        let window = window()?;
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);

        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        window.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &options,
        )?;

        Ok(Self { window, event, callback })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}
