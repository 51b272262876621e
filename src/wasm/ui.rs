//! DOM rendering of [`Slider`]s.
//!
//! Markup produced inside the container:
//! ```text
//! div.widget-outer
//!   div.widget-label    label text
//!   div.widget-value    formatted value
//!   input.widget-slider type=range, min/max/value in step units
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, Element, HtmlInputElement, Window};

use crate::error::Result;
use crate::query::QueryParams;
use crate::slider::{Slider, SliderBuilder};

/// Global object whose string properties preset query parameters.
pub const PRESET_PARAMS: &str = "hackedParams";

/// Pairs from `window.hackedParams`, overridden by the page's query string.
pub fn page_params(window: &Window) -> QueryParams {
    let mut params = QueryParams::default();
    if let Ok(preset) = js_sys::Reflect::get(window, &JsValue::from_str(PRESET_PARAMS)) {
        if preset.is_object() {
            for entry in js_sys::Object::entries(preset.unchecked_ref::<js_sys::Object>()).iter() {
                let pair = entry.unchecked_into::<js_sys::Array>();
                if let (Some(key), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
                    params.insert(key, value);
                }
            }
        }
    }
    params.merge_search(&window.location().search().unwrap_or_default());
    params
}

/// Mount a slider into the element matching `selector`. A missing container
/// is not an error; there is simply no widget.
pub fn setup_slider(
    document: &Document,
    selector: &str,
    builder: SliderBuilder,
    params: &QueryParams,
) -> Result<Option<SliderWidget>> {
    let Some(parent) = document.query_selector(selector)? else {
        log::warn!("no container for slider {selector}");
        return Ok(None);
    };
    SliderWidget::mount(document, &parent, builder.build(params)).map(Some)
}

/// A mounted slider. Event listeners stay registered for the page lifetime,
/// so dropping the widget only drops this handle.
///
/// Subscribers run after the slider state and readout are updated and
/// outside any borrow of the slider, so they may call [`set_value`] on the
/// same widget.
///
/// [`set_value`]: SliderWidget::set_value
pub struct SliderWidget {
    slider: Rc<RefCell<Slider>>,
    input: HtmlInputElement,
    value_elem: Element,
}

impl SliderWidget {
    /// Replace `parent`'s children with the slider markup and start
    /// listening for `input` and `change` events.
    pub fn mount(document: &Document, parent: &Element, mut slider: Slider) -> Result<Self> {
        let layout = slider.layout();

        let root = div(document, "widget-outer")?;
        let label = div(document, "widget-label")?;
        label.set_text_content(Some(&layout.label));
        let value_elem = div(document, "widget-value")?;
        value_elem.set_text_content(Some(&layout.display));

        let input = document
            .create_element("input")?
            .dyn_into::<HtmlInputElement>()
            .map_err(JsValue::from)?;
        input.set_class_name("widget-slider");
        input.set_type("range");
        input.set_min(&layout.min.to_string());
        input.set_max(&layout.max.to_string());
        input.set_value(&layout.value.to_string());

        root.append_child(&label)?;
        root.append_child(&value_elem)?;
        root.append_child(&input)?;
        parent.set_inner_html("");
        parent.append_child(&root)?;

        let mut listeners = slider.take_listeners();
        let slider = Rc::new(RefCell::new(slider));
        let on_change = {
            let slider = Rc::clone(&slider);
            let input = input.clone();
            let value_elem = value_elem.clone();
            Closure::wrap(Box::new(move || {
                let event = {
                    let mut slider = slider.borrow_mut();
                    let Some(event) = slider.apply_input(&input.value()) else {
                        return;
                    };
                    value_elem.set_text_content(Some(&slider.display()));
                    event
                };
                for listener in &mut listeners {
                    listener.on_slide(&event);
                }
            }) as Box<dyn FnMut()>)
        };
        input.add_event_listener_with_callback("input", on_change.as_ref().unchecked_ref())?;
        input.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;
        on_change.forget();

        Ok(Self {
            slider,
            input,
            value_elem,
        })
    }

    /// Move the control and its readout to `value` without notifying
    /// subscribers.
    pub fn set_value(&self, value: f64) {
        let mut slider = self.slider.borrow_mut();
        slider.set_value(value);
        self.input.set_value(&slider.raw().to_string());
        self.value_elem.set_text_content(Some(&slider.display()));
    }

    pub fn value(&self) -> f64 {
        self.slider.borrow().value()
    }

    /// Text currently shown in the value readout.
    pub fn display_text(&self) -> String {
        self.value_elem.text_content().unwrap_or_default()
    }

    pub fn input(&self) -> &HtmlInputElement {
        &self.input
    }
}

fn div(document: &Document, class: &str) -> Result<Element> {
    let elem = document.create_element("div")?;
    elem.set_class_name(class);
    Ok(elem)
}
