//! Draws the letter "F" with WebGL2 and moves it with two sliders.
//!
//! The scene, slider and query-string logic are plain Rust and build on any
//! target. Browser glue (GL setup, rendering, DOM widgets, console logging)
//! is only compiled for wasm32.

pub mod canvas;
pub mod config;
pub mod error;
pub mod geometry;
pub mod query;
pub mod scene;
pub mod shader;
pub mod slider;

pub use error::{Error, Result};

// Only compile wasm-specific code when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use crate::config::AppConfig;
    use crate::error::{Error, Result};
    use crate::geometry::F_VERTICES;
    use crate::scene::{axis_listener, Axis, Color, Scene, Session};
    use crate::slider::SliderBuilder;

    pub mod gl;
    pub mod logger;
    pub mod render;
    pub mod ui;

    /// Page entry point. Setup failures end up in the console only.
    #[wasm_bindgen(start)]
    pub fn main() {
        logger::init(log::LevelFilter::Info);
        match run(&AppConfig::default()) {
            Err(err) if !err.already_reported() => log::error!("scene setup failed: {err}"),
            _ => {}
        }
    }

    /// One-time setup: program, geometry, first frame, then the sliders.
    pub fn run(config: &AppConfig) -> Result<()> {
        let window = web_sys::window().ok_or_else(|| Error::missing("window"))?;
        let document = window.document().ok_or_else(|| Error::missing("document"))?;
        let canvas = document
            .query_selector(&config.canvas_selector)?
            .ok_or_else(|| Error::missing(&config.canvas_selector))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| Error::missing(&config.canvas_selector))?;

        let gl = render::context(&canvas)?;
        let program = gl::ProgramLoader::new(&document)
            .shader_ids(&config.vertex_shader_id, &config.fragment_shader_id)
            .load(&gl)?;

        let geometry = gl::GeometryBuffer::new(&gl)?;
        geometry.upload(&gl, &F_VERTICES);

        let color = Color::random_with(|| js_sys::Math::random() as f32);
        let renderer = render::Renderer::new(
            canvas.clone(),
            gl,
            program,
            geometry,
            config.resolution_multiplier,
        )?;
        let session = Rc::new(RefCell::new(Session::new(
            Scene::new(config.initial_translation, color),
            renderer,
        )));
        session.borrow_mut().redraw()?;
        log::info!("scene ready, color {:?}", color.0);

        let params = ui::page_params(&window);
        let [tx, ty] = config.initial_translation;
        ui::setup_slider(
            &document,
            &config.x_slider_selector,
            SliderBuilder::for_selector(&config.x_slider_selector)
                .value(tx as f64)
                .max(canvas.width() as f64)
                .on_slide(axis_listener(&session, Axis::X)),
            &params,
        )?;
        ui::setup_slider(
            &document,
            &config.y_slider_selector,
            SliderBuilder::for_selector(&config.y_slider_selector)
                .value(ty as f64)
                .max(canvas.height() as f64)
                .on_slide(axis_listener(&session, Axis::Y)),
            &params,
        )?;
        Ok(())
    }
}
