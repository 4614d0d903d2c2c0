#[macro_use]
mod utils;

pub mod animation;
pub mod canvas;
pub mod color;
pub mod config;
pub mod counter;
pub mod dom_helpers;
pub mod field;
pub mod navigation;
pub mod page;
pub mod particle;
pub mod reveal;
pub mod surface;
pub mod typing;

use wasm_bindgen::prelude::*;
use web_sys::console;

pub use animation::{start_particle_background, ParticleBackground};
pub use config::FieldConfig;
pub use field::ParticleField;
pub use particle::Particle;
pub use surface::Surface;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

pub const PARTICLE_CANVAS_ID: &str = "particleCanvas";

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}

// Boots the whole page: particle background first, then the page effects.
#[wasm_bindgen]
pub fn start() -> Result<(), JsValue> {
    initialize();
    start_particle_background(PARTICLE_CANVAS_ID)?;
    page::setup(&dom_helpers::document()?)?;
    console_log!("portfolio started");
    Ok(())
}

pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        console::time_end_with_label(self.name);
    }
}
