//! Error types for scene setup and rendering.

use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::shader::ShaderKind;

/// Result type alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// A required DOM element (canvas, shader script) is absent.
    #[error("*** Error: unknown element '{0}'")]
    MissingElement(String),

    /// The canvas could not hand out a WebGL2 context.
    #[error("WebGL2 not supported")]
    NoContext,

    /// Shader failed to compile; `diagnostic` carries the log and numbered source.
    #[error("*** Error compiling {kind} shader: {diagnostic}")]
    ShaderCompile { kind: ShaderKind, diagnostic: String },

    #[error("Error in program linking: {0}")]
    ProgramLink(String),

    /// `create_*` returned no handle (usually a lost context).
    #[error("failed to create {0}")]
    Resource(&'static str),

    /// Error thrown by the JS side.
    #[error("js error: {0}")]
    Js(String),
}

impl Error {
    pub fn missing(id: impl Into<String>) -> Self {
        Self::MissingElement(id.into())
    }

    /// Compile and link failures go to the program loader's error sink
    /// before they are returned.
    pub fn already_reported(&self) -> bool {
        matches!(self, Self::ShaderCompile { .. } | Self::ProgramLink(_))
    }
}

impl From<JsValue> for Error {
    fn from(value: JsValue) -> Self {
        let msg = value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}"));
        Self::Js(msg)
    }
}

impl From<Error> for JsValue {
    fn from(err: Error) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(Error::missing("vertex-shader-2d")
            .to_string()
            .contains("unknown element 'vertex-shader-2d'"));
        assert!(Error::ProgramLink("bad varying".into())
            .to_string()
            .starts_with("Error in program linking:"));
        let compile = Error::ShaderCompile {
            kind: ShaderKind::Fragment,
            diagnostic: "1: void main() {".into(),
        };
        assert!(compile.to_string().contains("fragment shader"));
    }

    #[test]
    fn only_sink_errors_count_as_reported() {
        let compile = Error::ShaderCompile {
            kind: ShaderKind::Vertex,
            diagnostic: String::new(),
        };
        assert!(compile.already_reported());
        assert!(Error::ProgramLink(String::new()).already_reported());
        assert!(!Error::missing("canvas").already_reported());
        assert!(!Error::NoContext.already_reported());
        assert!(!Error::Resource("buffer").already_reported());
    }
}
