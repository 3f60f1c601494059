use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Why a feature could not be installed on the current page.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("element #{0} not found")]
    MissingId(&'static str),
    #[error("no elements match `{0}`")]
    MissingSelector(&'static str),
    #[error("#{0} has no 2d context")]
    NoContext(&'static str),
    #[error("no window")]
    NoWindow,
    #[error("js error: {0}")]
    Js(String),
}

impl From<wasm_bindgen::JsValue> for SetupError {
    fn from(v: wasm_bindgen::JsValue) -> Self {
        SetupError::Js(format!("{:?}", v))
    }
}

pub fn window() -> Result<web::Window, SetupError> {
    web::window().ok_or(SetupError::NoWindow)
}

pub fn require_id(
    document: &web::Document,
    id: &'static str,
) -> Result<web::Element, SetupError> {
    document
        .get_element_by_id(id)
        .ok_or(SetupError::MissingId(id))
}

pub fn require_selector(
    document: &web::Document,
    selector: &'static str,
) -> Result<web::Element, SetupError> {
    document
        .query_selector(selector)?
        .ok_or(SetupError::MissingSelector(selector))
}

/// All elements matching `selector`, in document order.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

pub fn canvas_2d(
    document: &web::Document,
    id: &'static str,
) -> Result<(web::HtmlCanvasElement, web::CanvasRenderingContext2d), SetupError> {
    let canvas = require_id(document, id)?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| SetupError::MissingId(id))?;
    let ctx = canvas
        .get_context("2d")?
        .and_then(|c| c.dyn_into::<web::CanvasRenderingContext2d>().ok())
        .ok_or(SetupError::NoContext(id))?;
    Ok((canvas, ctx))
}

#[inline]
pub fn add_listener<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Like `add_listener` but non-passive, so the handler may `prevent_default`
/// touch scrolling.
pub fn add_active_listener<E>(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(E) + 'static,
) where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

pub fn on_window_resize(handler: impl FnMut() + 'static) {
    if let Some(w) = web::window() {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        _ = w.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

pub fn set_timeout(ms: i32, f: impl FnOnce() + 'static) {
    if let Some(w) = web::window() {
        let cb = Closure::once_into_js(f);
        _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.unchecked_ref::<js_sys::Function>(),
            ms,
        );
    }
}

/// Match the canvas drawing buffer to its laid-out size.
pub fn sync_canvas_to_layout(canvas: &web::HtmlCanvasElement) -> (f32, f32) {
    let w = canvas.offset_width().max(0) as u32;
    let h = canvas.offset_height().max(0) as u32;
    canvas.set_width(w);
    canvas.set_height(h);
    (w as f32, h as f32)
}

pub fn computed_background(element: &web::Element) -> String {
    web::window()
        .and_then(|w| w.get_computed_style(element).ok().flatten())
        .and_then(|s| s.get_property_value("background-color").ok())
        .unwrap_or_default()
}

pub fn scroll_y() -> f64 {
    web::window()
        .and_then(|w| w.page_y_offset().ok())
        .unwrap_or(0.0)
}

pub fn viewport_height() -> f64 {
    web::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Whether an event originated inside `container`.
pub fn event_within(ev: &web::Event, container: &web::Element) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Node>().ok())
        .map(|n| container.contains(Some(&n)))
        .unwrap_or(false)
}
