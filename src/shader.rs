//! Shader kinds and compile diagnostics.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderKind {
    Vertex,
    Fragment,
}

impl ShaderKind {
    /// `WebGl2RenderingContext::VERTEX_SHADER` / `FRAGMENT_SHADER`.
    pub fn gl_enum(self) -> u32 {
        match self {
            ShaderKind::Vertex => 0x8B31,
            ShaderKind::Fragment => 0x8B30,
        }
    }
}

impl fmt::Display for ShaderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShaderKind::Vertex => "vertex",
            ShaderKind::Fragment => "fragment",
        })
    }
}

/// Prefix every source line with its 1-based number, `"N: line"`.
pub fn numbered_source(source: &str) -> String {
    source
        .split('\n')
        .enumerate()
        .map(|(i, line)| format!("{}: {}", i + 1, line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Compiler log followed by the numbered source.
pub fn compile_diagnostic(info_log: &str, source: &str) -> String {
    format!("{}\n{}", info_log.trim_end(), numbered_source(source))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_every_line_from_one() {
        let src = "void main() {\n  gl_Position = vec4(0);\n}";
        assert_eq!(
            numbered_source(src),
            "1: void main() {\n2:   gl_Position = vec4(0);\n3: }"
        );
    }

    #[test]
    fn empty_source_still_gets_a_line() {
        assert_eq!(numbered_source(""), "1: ");
    }

    #[test]
    fn diagnostic_keeps_log_then_listing() {
        let d = compile_diagnostic("ERROR: 0:2: 'foo' : syntax error\n", "a\nfoo");
        assert_eq!(d, "ERROR: 0:2: 'foo' : syntax error\n1: a\n2: foo");
    }

    #[test]
    fn gl_enums_match_webgl_constants() {
        assert_eq!(ShaderKind::Vertex.gl_enum(), 35633);
        assert_eq!(ShaderKind::Fragment.gl_enum(), 35632);
    }
}
