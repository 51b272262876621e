use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, WebGl2RenderingContext as GL, WebGlProgram, WebGlUniformLocation};

use super::gl::GeometryBuffer;
use crate::canvas::resize_needed;
use crate::error::{Error, Result};
use crate::geometry::{COMPONENTS, VERTEX_COUNT};
use crate::scene::{FrameUniforms, Scene, Surface};

/// WebGL2 context of `canvas`.
pub fn context(canvas: &HtmlCanvasElement) -> Result<GL> {
    canvas
        .get_context("webgl2")?
        .ok_or(Error::NoContext)?
        .dyn_into::<GL>()
        .map_err(|_| Error::NoContext)
}

/// Draws the scene with one program and one vertex buffer. Holds no scene
/// state of its own, so repeated draws of the same scene are identical.
pub struct Renderer {
    gl: GL,
    canvas: HtmlCanvasElement,
    program: WebGlProgram,
    geometry: GeometryBuffer,
    position_location: u32,
    resolution_location: Option<WebGlUniformLocation>,
    color_location: Option<WebGlUniformLocation>,
    translation_location: Option<WebGlUniformLocation>,
    resolution_multiplier: f64,
}

impl Renderer {
    pub fn new(
        canvas: HtmlCanvasElement,
        gl: GL,
        program: WebGlProgram,
        geometry: GeometryBuffer,
        resolution_multiplier: f64,
    ) -> Result<Self> {
        let position = gl.get_attrib_location(&program, "a_position");
        if position < 0 {
            return Err(Error::Resource("a_position attribute"));
        }
        let resolution_location = gl.get_uniform_location(&program, "u_resolution");
        let color_location = gl.get_uniform_location(&program, "u_color");
        let translation_location = gl.get_uniform_location(&program, "u_translation");

        Ok(Self {
            gl,
            canvas,
            program,
            geometry,
            position_location: position as u32,
            resolution_location,
            color_location,
            translation_location,
            resolution_multiplier,
        })
    }

    pub fn gl(&self) -> &GL {
        &self.gl
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Match the backing store to the displayed size. Returns `true` if it changed.
    pub fn resize_to_display(&self) -> bool {
        let current = (self.canvas.width(), self.canvas.height());
        let client = (self.canvas.client_width(), self.canvas.client_height());
        match resize_needed(current, client, self.resolution_multiplier) {
            Some((w, h)) => {
                self.canvas.set_width(w);
                self.canvas.set_height(h);
                log::debug!("canvas resized to {w}x{h}");
                true
            }
            None => false,
        }
    }
}

impl Surface for Renderer {
    fn draw(&mut self, scene: &Scene) -> Result<()> {
        let gl = &self.gl;
        self.resize_to_display();

        let (width, height) = (self.canvas.width(), self.canvas.height());
        // clip space -> pixels
        gl.viewport(0, 0, width as i32, height as i32);
        gl.clear(GL::COLOR_BUFFER_BIT);

        gl.use_program(Some(&self.program));
        gl.enable_vertex_attrib_array(self.position_location);
        self.geometry.bind(gl);
        gl.vertex_attrib_pointer_with_i32(self.position_location, COMPONENTS, GL::FLOAT, false, 0, 0);

        let uniforms = FrameUniforms::new(scene, width, height);
        gl.uniform2fv_with_f32_array(self.resolution_location.as_ref(), &uniforms.resolution);
        gl.uniform4fv_with_f32_array(self.color_location.as_ref(), &uniforms.color);
        gl.uniform2fv_with_f32_array(self.translation_location.as_ref(), &uniforms.translation);

        gl.draw_arrays(GL::TRIANGLES, 0, VERTEX_COUNT);
        Ok(())
    }
}
