//! Slider model: value transforms, labels and change subscribers.
//!
//! The control itself works in integer "raw" steps. A raw position `r` maps
//! to the semantic value `r * step`, shown to the user as
//! `r * step * ui_mult` with `ui_precision` decimals. DOM mounting lives in
//! `wasm::ui`; everything here is plain data so it can be tested natively.
//!
//! # Example
//! ```rust
//! use translate_wasm::query::QueryParams;
//! use translate_wasm::slider::SliderBuilder;
//!
//! let mut slider = SliderBuilder::for_selector("#x")
//!     .value(350.0)
//!     .max(800.0)
//!     .build(&QueryParams::default());
//! assert_eq!(slider.label(), "x");
//! assert_eq!(slider.display(), "350");
//! slider.handle_input("100");
//! assert_eq!(slider.value(), 100.0);
//! ```

use crate::query::QueryParams;

/// Delivered to subscribers when the user moves the control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideEvent {
    /// `raw * step`.
    pub value: f64,
}

/// Subscriber interface for slider changes.
pub trait SlideListener {
    fn on_slide(&mut self, event: &SlideEvent);
}

impl<F: FnMut(&SlideEvent)> SlideListener for F {
    fn on_slide(&mut self, event: &SlideEvent) {
        self(event)
    }
}

/// Everything needed to lay the control out, already in raw units.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderLayout {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub value: f64,
    pub display: String,
}

pub struct SliderBuilder {
    name: String,
    precision: usize,
    ui_precision: Option<usize>,
    min: f64,
    max: f64,
    step: f64,
    value: f64,
    ui_mult: f64,
    listeners: Vec<Box<dyn SlideListener>>,
}

impl SliderBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            precision: 0,
            ui_precision: None,
            min: 0.0,
            max: 1.0,
            step: 1.0,
            value: 0.0,
            ui_mult: 1.0,
            listeners: Vec::new(),
        }
    }

    /// Name the slider after its `#id` container selector.
    pub fn for_selector(selector: &str) -> Self {
        Self::new(selector.strip_prefix('#').unwrap_or(selector))
    }

    pub fn name(mut self, v: impl Into<String>) -> Self { self.name = v.into(); self }
    pub fn precision(mut self, v: usize) -> Self { self.precision = v; self }
    /// Decimals shown; defaults to `precision`.
    pub fn ui_precision(mut self, v: usize) -> Self { self.ui_precision = Some(v); self }
    pub fn min(mut self, v: f64) -> Self { self.min = v; self }
    pub fn max(mut self, v: f64) -> Self { self.max = v; self }
    /// Zero or non-finite steps are ignored.
    pub fn step(mut self, v: f64) -> Self {
        if v != 0.0 && v.is_finite() {
            self.step = v;
        }
        self
    }
    pub fn value(mut self, v: f64) -> Self { self.value = v; self }
    /// Display-only multiplier. Zero or non-finite values are ignored.
    pub fn ui_mult(mut self, v: f64) -> Self {
        if v != 0.0 && v.is_finite() {
            self.ui_mult = v;
        }
        self
    }
    pub fn on_slide(mut self, listener: impl SlideListener + 'static) -> Self {
        self.listeners.push(Box::new(listener));
        self
    }

    pub fn build(self, params: &QueryParams) -> Slider {
        let label = params
            .ui_label(&self.name)
            .map(str::to_owned)
            .unwrap_or(self.name);
        Slider {
            label,
            step: self.step,
            ui_mult: self.ui_mult,
            ui_precision: self.ui_precision.unwrap_or(self.precision),
            min_raw: self.min / self.step,
            max_raw: self.max / self.step,
            raw: self.value / self.step,
            listeners: self.listeners,
        }
    }
}

pub struct Slider {
    label: String,
    step: f64,
    ui_mult: f64,
    ui_precision: usize,
    min_raw: f64,
    max_raw: f64,
    raw: f64,
    listeners: Vec<Box<dyn SlideListener>>,
}

impl Slider {
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Control position in step units.
    pub fn raw(&self) -> f64 {
        self.raw
    }

    pub fn value(&self) -> f64 {
        self.raw * self.step
    }

    pub fn display(&self) -> String {
        to_fixed(self.raw * self.step * self.ui_mult, self.ui_precision)
    }

    pub fn layout(&self) -> SliderLayout {
        SliderLayout {
            label: self.label.clone(),
            min: self.min_raw,
            max: self.max_raw,
            value: self.raw,
            display: self.display(),
        }
    }

    pub fn subscribe(&mut self, listener: impl SlideListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Hand the subscribers to a caller that dispatches events itself.
    pub fn take_listeners(&mut self) -> Vec<Box<dyn SlideListener>> {
        std::mem::take(&mut self.listeners)
    }

    /// Move the control to the position in `text` without notifying
    /// anyone. `None` when the text has no leading integer.
    pub fn apply_input(&mut self, text: &str) -> Option<SlideEvent> {
        let Some(raw) = parse_leading_int(text) else {
            log::debug!("slider '{}': ignoring non-numeric input {text:?}", self.label);
            return None;
        };
        self.raw = raw as f64;
        Some(SlideEvent { value: self.value() })
    }

    /// Apply a control `input`/`change` event carrying the control's text
    /// value. Subscribers run in subscription order before this returns.
    /// Returns `false` (and notifies nobody) when the text has no leading
    /// integer.
    pub fn handle_input(&mut self, text: &str) -> bool {
        let Some(event) = self.apply_input(text) else {
            return false;
        };
        for listener in &mut self.listeners {
            listener.on_slide(&event);
        }
        true
    }

    /// Move the control programmatically. Subscribers are not notified.
    pub fn set_value(&mut self, value: f64) {
        self.raw = value / self.step;
    }
}

/// `x` with `digits` decimals, rounded like JS `Number#toFixed`: exact
/// ties go away from zero and negative zero prints as `0`.
fn to_fixed(x: f64, digits: usize) -> String {
    if !x.is_finite() {
        return x.to_string();
    }
    let sign = if x < 0.0 { "-" } else { "" };
    let ax = x.abs();
    if !is_tie(ax, digits) {
        return format!("{sign}{:.*}", digits, ax);
    }
    // A tie has exactly `digits + 1` decimals, the last one a 5.
    let mut text: Vec<char> = format!("{:.*}", digits + 1, ax).chars().collect();
    text.pop();
    if digits == 0 {
        text.pop();
    }
    let mut carry = true;
    for c in text.iter_mut().rev() {
        match *c {
            '.' => continue,
            '9' => *c = '0',
            d => {
                *c = (d as u8 + 1) as char;
                carry = false;
                break;
            }
        }
    }
    let body: String = text.into_iter().collect();
    format!("{sign}{}{body}", if carry { "1" } else { "" })
}

/// Whether `ax * 10^digits` lies exactly halfway between two integers.
///
/// With `ax = m * 2^e` (`m` odd) that value is `m * 5^digits *
/// 2^(e + digits)`, which is an odd multiple of 1/2 iff `e + digits == -1`.
fn is_tie(ax: f64, digits: usize) -> bool {
    if ax == 0.0 {
        return false;
    }
    let bits = ax.to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i64;
    let frac = bits & ((1u64 << 52) - 1);
    let (mantissa, exp) = if biased == 0 {
        (frac, -1074)
    } else {
        (frac | (1u64 << 52), biased - 1075)
    };
    mantissa.trailing_zeros() as i64 + exp + digits as i64 == -1
}

/// Leading optional sign and decimal digits, ignoring surrounding
/// whitespace and any trailing text (`"12.7px"` → 12).
fn parse_leading_int(text: &str) -> Option<i64> {
    let t = text.trim_start();
    let (neg, digits) = match t.as_bytes().first() {
        Some(b'-') => (true, &t[1..]),
        Some(b'+') => (false, &t[1..]),
        _ => (false, t),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let n: i64 = digits[..end].parse().ok()?;
    Some(if neg { -n } else { n })
}
