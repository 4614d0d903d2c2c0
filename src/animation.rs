// Drives a particle field from the browser: sizes the canvas to the window,
// ticks once per animation frame and follows window resizes.

use crate::canvas::CanvasSurface;
use crate::config::FieldConfig;
use crate::dom_helpers::{on_event, request_animation_frame, viewport_size, window};
use crate::field::ParticleField;
use crate::surface::Surface;
use crate::Timer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct ParticleBackground {
    field: ParticleField,
    surface: CanvasSurface,
}

#[wasm_bindgen]
impl ParticleBackground {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<ParticleBackground, JsValue> {
        ParticleBackground::with_config(canvas_id, FieldConfig::default())
    }

    pub fn with_particle_count(canvas_id: &str, count: usize) -> Result<ParticleBackground, JsValue> {
        ParticleBackground::with_config(canvas_id, FieldConfig::default().with_particle_count(count))
    }

    pub fn tick(&mut self) -> Result<(), JsValue> {
        let _timer = if self.field.config().profile {
            Some(Timer::new("ParticleBackground::tick"))
        } else {
            None
        };
        self.field.tick(&mut self.surface)
    }

    // Matches the canvas and the field to the current window size
    pub fn resize(&mut self) -> Result<(), JsValue> {
        let (width, height) = viewport_size(&window()?)?;
        self.resize_to(width, height);
        Ok(())
    }

    pub fn resize_to(&mut self, width: f64, height: f64) {
        self.surface.set_size(width, height);
        self.field.resize(width, height);
    }

    pub fn particle_count(&self) -> usize {
        self.field.particles().len()
    }

    pub fn width(&self) -> f64 {
        self.field.size().0
    }

    pub fn height(&self) -> f64 {
        self.field.size().1
    }
}

impl ParticleBackground {
    pub fn with_config(canvas_id: &str, config: FieldConfig) -> Result<ParticleBackground, JsValue> {
        config.validate().map_err(|e| JsValue::from_str(&e))?;
        let mut surface = CanvasSurface::from_element_id(canvas_id)?;
        let (width, height) = viewport_size(&window()?)?;
        surface.set_size(width, height);
        let mut rng = rand::thread_rng();
        let field = ParticleField::new(config, surface.width(), surface.height(), &mut rng);
        Ok(ParticleBackground { field, surface })
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }
}

// Runs the background for the lifetime of the page: one tick per animation
// frame, and a resize whenever the window changes size.
pub fn run(background: ParticleBackground) -> Result<(), JsValue> {
    let background = Rc::new(RefCell::new(background));
    let window = window()?;

    {
        let background = background.clone();
        on_event(&window, "resize", move |_| {
            if let Err(e) = background.borrow_mut().resize() {
                web_sys::console::error_1(&e);
            }
        })?;
    }

    // The frame closure has to reschedule itself, so it holds a handle to
    // its own slot.
    let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let next_frame = frame.clone();
    *frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if let Err(e) = background.borrow_mut().tick() {
            web_sys::console::error_1(&e);
        }
        if let Some(callback) = next_frame.borrow().as_ref() {
            if let Err(e) = request_animation_frame(callback) {
                web_sys::console::error_1(&e);
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(callback) = frame.borrow().as_ref() {
        request_animation_frame(callback)?;
    }
    Ok(())
}

#[wasm_bindgen]
pub fn start_particle_background(canvas_id: &str) -> Result<(), JsValue> {
    run(ParticleBackground::new(canvas_id)?)
}
