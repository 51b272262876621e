//! Page wiring: which elements to look up and the starting scene.

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub canvas_selector: String,
    pub vertex_shader_id: String,
    pub fragment_shader_id: String,
    pub x_slider_selector: String,
    pub y_slider_selector: String,
    pub initial_translation: [f32; 2],
    /// Backing-store pixels per CSS pixel.
    pub resolution_multiplier: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            canvas_selector: "#canvas".into(),
            vertex_shader_id: "vertex-shader-2d".into(),
            fragment_shader_id: "fragment-shader-2d".into(),
            x_slider_selector: "#x".into(),
            y_slider_selector: "#y".into(),
            initial_translation: [350.0, 350.0],
            resolution_multiplier: 1.0,
        }
    }
}
