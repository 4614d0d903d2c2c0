//! Test suite for the Web and headless browsers.

#![cfg(target_arch = "wasm32")]

extern crate wasm_bindgen_test;
use portfolio_particles::canvas::CanvasSurface;
use portfolio_particles::color::Color;
use portfolio_particles::dom_helpers::{log_error, run_timer};
use portfolio_particles::{page, reveal, ParticleBackground, Surface};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Event, HtmlCanvasElement, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn add_canvas(id: &str) -> HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();
    canvas.set_id(id);
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

#[wasm_bindgen_test]
fn canvas_surface_resizes_backing_store() {
    let canvas = add_canvas("surface-resize");
    let mut surface = CanvasSurface::new(canvas.clone()).unwrap();
    surface.set_size(400.0, 300.0);
    assert_eq!(canvas.width(), 400);
    assert_eq!(canvas.height(), 300);
    assert_eq!(surface.width(), 400.0);
    assert_eq!(surface.height(), 300.0);
}

#[wasm_bindgen_test]
fn canvas_surface_draws() {
    let canvas = add_canvas("surface-draw");
    let mut surface = CanvasSurface::new(canvas).unwrap();
    surface.set_size(50.0, 50.0);
    surface.clear().unwrap();
    surface
        .draw_circle(25.0, 25.0, 2.0, Color::ACCENT, 0.5)
        .unwrap();
    surface
        .draw_line([0.0, 0.0], [50.0, 50.0], Color::ACCENT, 0.1, 0.5)
        .unwrap();
}

#[wasm_bindgen_test]
fn missing_canvas_is_an_error() {
    assert!(CanvasSurface::from_element_id("no-such-canvas").is_err());
    assert!(ParticleBackground::new("no-such-canvas").is_err());
}

#[wasm_bindgen_test]
fn non_canvas_element_is_an_error() {
    let document = web_sys::window().unwrap().document().unwrap();
    let div = document.create_element("div").unwrap();
    div.set_id("not-a-canvas");
    document.body().unwrap().append_child(&div).unwrap();
    assert!(CanvasSurface::from_element_id("not-a-canvas").is_err());
}

#[wasm_bindgen_test]
fn background_ticks_and_resizes() {
    add_canvas("background");
    let mut background = ParticleBackground::new("background").unwrap();
    assert_eq!(background.particle_count(), 50);
    for _ in 0..10 {
        background.tick().unwrap();
    }

    background.resize_to(400.0, 300.0);
    assert_eq!(background.width(), 400.0);
    assert_eq!(background.height(), 300.0);
    background.tick().unwrap();

    let small = ParticleBackground::with_particle_count("background", 3).unwrap();
    assert_eq!(small.particle_count(), 3);
}

#[wasm_bindgen_test]
async fn timer_stops_and_releases_its_callback() {
    let calls = Rc::new(Cell::new(0));
    let counted = calls.clone();
    run_timer(0, move || {
        counted.set(counted.get() + 1);
        if counted.get() < 3 {
            Some(5)
        } else {
            None
        }
    })
    .unwrap();

    sleep(200).await;
    assert_eq!(calls.get(), 3);
    // The step closure and its clone of `calls` are gone
    assert_eq!(Rc::strong_count(&calls), 1);
}

#[wasm_bindgen_test]
fn logged_errors_do_not_panic() {
    log_error::<()>(Err(JsValue::from_str("expected test error")));
    log_error(Ok::<_, JsValue>(1));
}

#[wasm_bindgen_test]
async fn page_set_up_after_load_fades_in_and_reveals_on_resize() {
    let window = web_sys::window().unwrap();
    let document = window.document().unwrap();
    while document.ready_state() != "complete" {
        sleep(10).await;
    }
    let body = document.body().unwrap();

    let block = document
        .create_element("div")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    block.set_class_name("text-block");
    block.set_text_content(Some("below the fold"));
    block.style().set_property("position", "absolute").unwrap();
    block.style().set_property("top", "20000px").unwrap();
    body.append_child(&block).unwrap();

    page::setup(&document).unwrap();
    // The load event is long gone, the fade starts anyway
    assert_eq!(body.style().get_property_value("opacity").unwrap(), "0");
    assert_eq!(
        block.style().get_property_value("opacity").unwrap(),
        reveal::HIDDEN_OPACITY
    );

    block.style().set_property("top", "0px").unwrap();
    window
        .dispatch_event(&Event::new("resize").unwrap())
        .unwrap();
    sleep(300).await;

    assert_eq!(body.style().get_property_value("opacity").unwrap(), "1");
    assert_eq!(
        block.style().get_property_value("opacity").unwrap(),
        reveal::SHOWN_OPACITY
    );
}
