// Helper functions for dealing with the DOM: looking things up, listening to
// events and scheduling callbacks

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, EventTarget, HtmlElement, Window};

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))
}

pub fn viewport_size(window: &Window) -> Result<(f64, f64), JsValue> {
    let width = window
        .inner_width()?
        .as_f64()
        .ok_or_else(|| JsValue::from_str("innerWidth is not a number"))?;
    let height = window
        .inner_height()?
        .as_f64()
        .ok_or_else(|| JsValue::from_str("innerHeight is not a number"))?;
    Ok((width, height))
}

// Every element matching `selector` that is an HtmlElement, in document order
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<HtmlElement>, JsValue> {
    let nodes = document.query_selector_all(selector)?;
    let mut elements = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        if let Some(element) = nodes.get(i).and_then(|node| node.dyn_into::<HtmlElement>().ok()) {
            elements.push(element);
        }
    }
    Ok(elements)
}

pub fn query(document: &Document, selector: &str) -> Result<Option<HtmlElement>, JsValue> {
    Ok(document
        .query_selector(selector)?
        .and_then(|element| element.dyn_into::<HtmlElement>().ok()))
}

// Listens for the rest of the page's life
pub fn on_event<F>(target: &EventTarget, name: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

pub fn request_animation_frame(callback: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    window()?.request_animation_frame(callback.as_ref().unchecked_ref::<js_sys::Function>())
}

pub fn set_timeout(callback: &Closure<dyn FnMut()>, delay_ms: i32) -> Result<i32, JsValue> {
    window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.as_ref().unchecked_ref::<js_sys::Function>(),
        delay_ms,
    )
}

pub fn log_error<T>(result: Result<T, JsValue>) {
    if let Err(e) = result {
        web_sys::console::error_1(&e);
    }
}

// Calls `step` after `delay_ms`, then again after whatever delay it returns,
// until it returns `None`. The callback is released once it is done.
pub fn run_timer<F>(delay_ms: i32, mut step: F) -> Result<(), JsValue>
where
    F: FnMut() -> Option<i32> + 'static,
{
    let slot: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let next = slot.clone();
    *slot.borrow_mut() = Some(Closure::wrap(Box::new(move || match step() {
        Some(delay_ms) => {
            if let Some(callback) = next.borrow().as_ref() {
                log_error(set_timeout(callback, delay_ms));
            }
        }
        None => {
            if let Some(finished) = next.borrow_mut().take() {
                log_error(drop_later(finished));
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(callback) = slot.borrow().as_ref() {
        set_timeout(callback, delay_ms)?;
    }
    Ok(())
}

// A closure can't be dropped while it is running, so hand it to a fresh task
fn drop_later(closure: Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    let release = Closure::once_into_js(move || drop(closure));
    window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
        release.unchecked_ref::<js_sys::Function>(),
        0,
    )
}
