//! Scene state and the session that owns it.
//!
//! A [`Session`] pairs the mutable [`Scene`] (translation plus a fixed
//! color) with whatever [`Surface`] draws it. Slider subscribers reach the
//! scene only through the session, so every change is followed by exactly
//! one redraw.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::Result;
use crate::slider::SlideEvent;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color(pub [f32; 4]);

impl Color {
    /// Opaque color with r, g, b drawn from `next` (expected in `[0, 1)`).
    pub fn random_with(mut next: impl FnMut() -> f32) -> Self {
        let r = next();
        let g = next();
        let b = next();
        Color([r, g, b, 1.0])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    translation: [f32; 2],
    color: Color,
}

impl Scene {
    pub fn new(translation: [f32; 2], color: Color) -> Self {
        Self { translation, color }
    }

    pub fn translation(&self) -> [f32; 2] {
        self.translation
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

/// Uniform values for one draw of `scene` onto a `width` × `height` target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameUniforms {
    pub resolution: [f32; 2],
    pub color: [f32; 4],
    pub translation: [f32; 2],
}

impl FrameUniforms {
    pub fn new(scene: &Scene, width: u32, height: u32) -> Self {
        Self {
            resolution: [width as f32, height as f32],
            color: scene.color.0,
            translation: scene.translation,
        }
    }
}

/// Something that can present a scene: the WebGL renderer in the browser,
/// a recorder in tests.
pub trait Surface {
    fn draw(&mut self, scene: &Scene) -> Result<()>;
}

pub struct Session<S> {
    scene: Scene,
    surface: S,
}

impl<S: Surface> Session<S> {
    pub fn new(scene: Scene, surface: S) -> Self {
        Self { scene, surface }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn redraw(&mut self) -> Result<()> {
        self.surface.draw(&self.scene)
    }

    /// Move the shape along one axis and redraw.
    pub fn translate(&mut self, axis: Axis, value: f64) -> Result<()> {
        self.scene.translation[axis.index()] = value as f32;
        log::debug!("translation now {:?}", self.scene.translation);
        self.redraw()
    }
}

/// Slider subscriber that drives `axis` of a shared session. Draw failures
/// are logged; the event loop keeps running.
pub fn axis_listener<S: Surface + 'static>(
    session: &Rc<RefCell<Session<S>>>,
    axis: Axis,
) -> impl FnMut(&SlideEvent) + 'static {
    let session = Rc::clone(session);
    move |event: &SlideEvent| {
        if let Err(err) = session.borrow_mut().translate(axis, event.value) {
            log::error!("redraw after {axis:?} slide failed: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counter(usize);

    impl Surface for Counter {
        fn draw(&mut self, _scene: &Scene) -> Result<()> {
            self.0 += 1;
            Ok(())
        }
    }

    #[test]
    fn random_color_is_opaque() {
        let mut vals = [0.25_f32, 0.5, 0.75].into_iter();
        let c = Color::random_with(|| vals.next().unwrap_or(0.0));
        assert_eq!(c, Color([0.25, 0.5, 0.75, 1.0]));
    }

    #[test]
    fn translate_touches_one_axis_and_redraws_once() {
        let color = Color([0.1, 0.2, 0.3, 1.0]);
        let mut session = Session::new(Scene::new([350.0, 350.0], color), Counter::default());
        session.translate(Axis::Y, 12.0).unwrap();
        assert_eq!(session.scene().translation(), [350.0, 12.0]);
        assert_eq!(session.scene().color(), color);
        assert_eq!(session.surface().0, 1);
    }

    #[test]
    fn uniforms_are_a_pure_function_of_scene_and_size() {
        let scene = Scene::new([10.0, 20.0], Color([1.0, 0.0, 0.5, 1.0]));
        let a = FrameUniforms::new(&scene, 640, 480);
        let b = FrameUniforms::new(&scene, 640, 480);
        assert_eq!(a, b);
        assert_eq!(a.resolution, [640.0, 480.0]);
        assert_eq!(a.translation, [10.0, 20.0]);
        assert_eq!(a.color, [1.0, 0.0, 0.5, 1.0]);
    }
}
