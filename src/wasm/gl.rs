//! Shader compilation, program linking and the static vertex buffer.

use web_sys::{Document, WebGl2RenderingContext as GL, WebGlBuffer, WebGlProgram, WebGlShader};

use crate::error::{Error, Result};
use crate::shader::{compile_diagnostic, ShaderKind};

/// Receives human-readable compile/link diagnostics.
pub type ErrorSink = Box<dyn FnMut(&str)>;

fn console_sink() -> ErrorSink {
    Box::new(|msg| log::error!("{msg}"))
}

/// Compile `source` as a `kind` shader. On failure the shader is deleted
/// and the error carries the compiler log plus the numbered source.
pub fn compile_shader(gl: &GL, kind: ShaderKind, source: &str) -> Result<WebGlShader> {
    let shader = gl
        .create_shader(kind.gl_enum())
        .ok_or(Error::Resource("shader"))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    let compiled = gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false);
    if compiled {
        return Ok(shader);
    }

    let info = gl.get_shader_info_log(&shader).unwrap_or_default();
    gl.delete_shader(Some(&shader));
    Err(Error::ShaderCompile {
        kind,
        diagnostic: compile_diagnostic(&info, source),
    })
}

pub fn link_program(gl: &GL, shaders: &[WebGlShader]) -> Result<WebGlProgram> {
    let program = gl.create_program().ok_or(Error::Resource("program"))?;
    for shader in shaders {
        gl.attach_shader(&program, shader);
    }
    gl.link_program(&program);

    let linked = gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false);
    if linked {
        return Ok(program);
    }

    let info = gl.get_program_info_log(&program).unwrap_or_default();
    gl.delete_program(Some(&program));
    Err(Error::ProgramLink(info))
}

/// Text of the script element `id`, e.g. `<script id="vertex-shader-2d">`.
pub fn script_source(document: &Document, id: &str) -> Result<String> {
    let elem = document
        .get_element_by_id(id)
        .ok_or_else(|| Error::missing(id))?;
    Ok(elem.text_content().unwrap_or_default())
}

/// Builds the program from two shader scripts embedded in the page.
///
/// A missing script is returned as an error straight away. Compile and link
/// failures are also handed to the error sink (the console by default)
/// before being returned.
pub struct ProgramLoader<'a> {
    document: &'a Document,
    vertex_id: String,
    fragment_id: String,
    on_error: ErrorSink,
}

impl<'a> ProgramLoader<'a> {
    pub fn new(document: &'a Document) -> Self {
        Self {
            document,
            vertex_id: "vertex-shader-2d".into(),
            fragment_id: "fragment-shader-2d".into(),
            on_error: console_sink(),
        }
    }

    pub fn shader_ids(mut self, vertex: &str, fragment: &str) -> Self {
        self.vertex_id = vertex.into();
        self.fragment_id = fragment.into();
        self
    }

    pub fn on_error(mut self, sink: impl FnMut(&str) + 'static) -> Self {
        self.on_error = Box::new(sink);
        self
    }

    pub fn load(mut self, gl: &GL) -> Result<WebGlProgram> {
        let vertex_src = script_source(self.document, &self.vertex_id)?;
        let vertex = self.reported(compile_shader(gl, ShaderKind::Vertex, &vertex_src))?;

        let fragment_src = script_source(self.document, &self.fragment_id)?;
        let fragment = self.reported(compile_shader(gl, ShaderKind::Fragment, &fragment_src))?;

        let program = self.reported(link_program(gl, &[vertex, fragment]))?;
        log::debug!("linked program from #{} and #{}", self.vertex_id, self.fragment_id);
        Ok(program)
    }

    fn reported<T>(&mut self, result: Result<T>) -> Result<T> {
        if let Err(err) = &result {
            (self.on_error)(&err.to_string());
        }
        result
    }
}

/// `ARRAY_BUFFER` holding the shape's positions.
pub struct GeometryBuffer {
    buffer: WebGlBuffer,
}

impl GeometryBuffer {
    pub fn new(gl: &GL) -> Result<Self> {
        let buffer = gl.create_buffer().ok_or(Error::Resource("buffer"))?;
        Ok(Self { buffer })
    }

    pub fn bind(&self, gl: &GL) {
        gl.bind_buffer(GL::ARRAY_BUFFER, Some(&self.buffer));
    }

    /// Replace the buffer contents with `vertices`.
    pub fn upload(&self, gl: &GL, vertices: &[f32]) {
        self.bind(gl);
        let data = js_sys::Float32Array::from(vertices);
        gl.buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &data, GL::STATIC_DRAW);
    }
}
