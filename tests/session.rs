#![cfg(not(target_arch = "wasm32"))]

use std::cell::RefCell;
use std::rc::Rc;

use translate_wasm::query::QueryParams;
use translate_wasm::scene::{axis_listener, Axis, Color, Scene, Session, Surface};
use translate_wasm::slider::SliderBuilder;
use translate_wasm::Result;

/// Keeps a copy of every scene it was asked to draw.
#[derive(Default)]
struct Recorder {
    frames: Vec<Scene>,
}

impl Surface for Recorder {
    fn draw(&mut self, scene: &Scene) -> Result<()> {
        self.frames.push(scene.clone());
        Ok(())
    }
}

const COLOR: Color = Color([0.2, 0.4, 0.6, 1.0]);

fn session() -> Rc<RefCell<Session<Recorder>>> {
    let session = Session::new(Scene::new([350.0, 350.0], COLOR), Recorder::default());
    let session = Rc::new(RefCell::new(session));
    session.borrow_mut().redraw().unwrap();
    session
}

#[test]
fn moving_x_slider_redraws_once_with_new_translation() {
    let session = session();
    let params = QueryParams::default();
    let mut x = SliderBuilder::for_selector("#x")
        .value(350.0)
        .max(800.0)
        .on_slide(axis_listener(&session, Axis::X))
        .build(&params);
    let y = SliderBuilder::for_selector("#y")
        .value(350.0)
        .max(600.0)
        .on_slide(axis_listener(&session, Axis::Y))
        .build(&params);

    assert!(x.handle_input("100"));

    let s = session.borrow();
    assert_eq!(s.scene().translation(), [100.0, 350.0]);
    assert_eq!(s.scene().color(), COLOR);
    // initial frame + exactly one re-render
    assert_eq!(s.surface().frames.len(), 2);
    assert_eq!(s.surface().frames[1].translation(), [100.0, 350.0]);
    assert_eq!(y.value(), 350.0);
}

#[test]
fn set_value_does_not_redraw() {
    let session = session();
    let mut y = SliderBuilder::for_selector("#y")
        .value(350.0)
        .max(600.0)
        .on_slide(axis_listener(&session, Axis::Y))
        .build(&QueryParams::default());

    y.set_value(10.0);

    let s = session.borrow();
    assert_eq!(y.display(), "10");
    assert_eq!(s.scene().translation(), [350.0, 350.0]);
    assert_eq!(s.surface().frames.len(), 1);
}

#[test]
fn events_apply_in_dispatch_order() {
    let session = session();
    let params = QueryParams::default();
    let mut x = SliderBuilder::for_selector("#x")
        .max(800.0)
        .on_slide(axis_listener(&session, Axis::X))
        .build(&params);
    let mut y = SliderBuilder::for_selector("#y")
        .max(600.0)
        .on_slide(axis_listener(&session, Axis::Y))
        .build(&params);

    x.handle_input("5");
    y.handle_input("6");
    x.handle_input("7");

    let s = session.borrow();
    let seen: Vec<[f32; 2]> = s.surface().frames.iter().map(Scene::translation).collect();
    assert_eq!(
        seen,
        vec![[350.0, 350.0], [5.0, 350.0], [5.0, 6.0], [7.0, 6.0]]
    );
}

#[test]
fn redraw_of_unchanged_scene_is_identical() {
    let session = session();
    session.borrow_mut().redraw().unwrap();
    let s = session.borrow();
    assert_eq!(s.surface().frames[0], s.surface().frames[1]);
}
