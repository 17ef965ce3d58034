//! Animatable properties, their values, and the per-target style book.
//!
//! The [`StyleBook`] remembers the last value written for every
//! `(target, property)` pair. Tweens read their start values from it, and the
//! host turns it into CSS declarations after each frame. Transform components
//! (`x`, `y`, `xPercent`, `yPercent`, `scale`) are composed into a single
//! `transform` declaration.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Handle for a page element registered with the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetId(pub u32);

/// A property the animator knows how to interpolate and render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Prop {
    Opacity,
    /// Horizontal translation in pixels.
    X,
    /// Vertical translation in pixels.
    Y,
    /// Horizontal translation as a percentage of the element's own width.
    XPercent,
    /// Vertical translation as a percentage of the element's own height.
    YPercent,
    Scale,
    BorderColor,
    BackgroundColor,
    Visibility,
    Display,
}

impl Prop {
    /// The value assumed when nothing has been written yet.
    #[must_use]
    pub fn initial(self) -> Option<Value> {
        match self {
            Self::Opacity | Self::Scale => Some(Value::Number(1.0)),
            Self::X | Self::Y | Self::XPercent | Self::YPercent => Some(Value::Number(0.0)),
            Self::BorderColor | Self::BackgroundColor | Self::Visibility | Self::Display => None,
        }
    }

    #[must_use]
    pub fn is_transform(self) -> bool {
        matches!(self, Self::X | Self::Y | Self::XPercent | Self::YPercent | Self::Scale)
    }

    /// CSS property name this prop renders to.
    #[must_use]
    pub fn css_name(self) -> &'static str {
        match self {
            Self::Opacity => "opacity",
            Self::X | Self::Y | Self::XPercent | Self::YPercent | Self::Scale => "transform",
            Self::BorderColor => "border-color",
            Self::BackgroundColor => "background-color",
            Self::Visibility => "visibility",
            Self::Display => "display",
        }
    }
}

/// Error returned when a color string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported color: {0:?}")]
pub struct ColorError(pub String);

/// An sRGB color with straight alpha. Channels are `0..=255`, alpha `0..=1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    #[must_use]
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    #[must_use]
    pub fn lerp(self, to: Self, ratio: f64) -> Self {
        let mix = |a: f64, b: f64| a + (b - a) * ratio;
        Self {
            r: mix(self.r, to.r).clamp(0.0, 255.0),
            g: mix(self.g, to.g).clamp(0.0, 255.0),
            b: mix(self.b, to.b).clamp(0.0, 255.0),
            a: mix(self.a, to.a).clamp(0.0, 1.0),
        }
    }
}

impl FromStr for Rgba {
    type Err = ColorError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let err = || ColorError(raw.to_owned());
        let value = raw.trim().to_ascii_lowercase();
        if value == "transparent" {
            return Ok(Self::new(0.0, 0.0, 0.0, 0.0));
        }
        if let Some(hex) = value.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(err);
        }
        let args = value
            .strip_prefix("rgba(")
            .or_else(|| value.strip_prefix("rgb("))
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(err)?;
        let parts = args
            .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .map(str::parse::<f64>)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| err())?;
        match parts.as_slice() {
            [r, g, b] => Ok(Self::new(*r, *g, *b, 1.0)),
            [r, g, b, a] => Ok(Self::new(*r, *g, *b, *a)),
            _ => Err(err()),
        }
    }
}

fn parse_hex(hex: &str) -> Option<Rgba> {
    let expanded = match hex.len() {
        3 | 4 => hex.chars().flat_map(|c| [c, c]).collect::<String>(),
        6 | 8 => hex.to_owned(),
        _ => return None,
    };
    if !expanded.is_ascii() {
        return None;
    }
    let channel = |at: usize| -> Option<f64> {
        match u8::from_str_radix(expanded.get(at..at + 2)?, 16) {
            Ok(v) => Some(f64::from(v)),
            Err(_) => None,
        }
    };
    let a = if expanded.len() == 8 { channel(6)? / 255.0 } else { 1.0 };
    Some(Rgba::new(channel(0)?, channel(2)?, channel(4)?, a))
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b) = (self.r.round(), self.g.round(), self.b.round());
        if self.a >= 1.0 {
            write!(f, "rgb({r}, {g}, {b})")
        } else {
            write!(f, "rgba({r}, {g}, {b}, {})", fmt_num(self.a))
        }
    }
}

/// A property value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Color(Rgba),
    /// Anything that cannot be interpolated (`visible`, `block`, unresolved
    /// `var(...)` references). Applied as soon as a tween starts.
    Keyword(String),
}

impl Value {
    /// Parse a CSS color, keeping unparseable input as a keyword.
    #[must_use]
    pub fn color_or_keyword(raw: &str) -> Self {
        raw.parse::<Rgba>()
            .map_or_else(|_| Self::Keyword(raw.trim().to_owned()), Self::Color)
    }

    #[must_use]
    pub fn keyword(raw: &str) -> Self {
        Self::Keyword(raw.to_owned())
    }

    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Value at `ratio` of the way from `from` to `to`.
    ///
    /// Mismatched kinds and keywords jump straight to `to`.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn interpolate(from: Option<&Value>, to: &Value, ratio: f64) -> Value {
        if ratio == 1.0 {
            return to.clone();
        }
        match (from, to) {
            (Some(Self::Number(a)), Self::Number(b)) => Self::Number(a + (b - a) * ratio),
            (Some(Self::Color(a)), Self::Color(b)) => Self::Color(a.lerp(*b, ratio)),
            _ => to.clone(),
        }
    }

    fn css(&self) -> String {
        match self {
            Self::Number(n) => fmt_num(*n),
            Self::Color(c) => c.to_string(),
            Self::Keyword(k) => k.clone(),
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<Rgba> for Value {
    fn from(value: Rgba) -> Self {
        Self::Color(value)
    }
}

/// One CSS declaration ready to be written to an element's inline style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: &'static str,
    pub value: String,
}

/// Last written value per `(target, prop)`.
#[derive(Debug, Clone, Default)]
pub struct StyleBook {
    values: HashMap<(TargetId, Prop), Value>,
}

impl StyleBook {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The value last written, or the property's initial value.
    #[must_use]
    pub fn current(&self, target: TargetId, prop: Prop) -> Option<Value> {
        self.values.get(&(target, prop)).cloned().or_else(|| prop.initial())
    }

    #[must_use]
    pub fn number(&self, target: TargetId, prop: Prop) -> Option<f64> {
        self.current(target, prop).and_then(|v| v.as_number())
    }

    pub fn write(&mut self, target: TargetId, prop: Prop, value: Value) {
        self.values.insert((target, prop), value);
    }

    /// CSS declarations covering `props` on `target`. All transform props
    /// collapse into one composed `transform` declaration.
    #[must_use]
    pub fn declarations(&self, target: TargetId, props: impl IntoIterator<Item = Prop>) -> Vec<Declaration> {
        let mut out = Vec::new();
        let mut transform_done = false;
        for prop in props {
            if prop.is_transform() {
                if !transform_done {
                    out.push(Declaration { property: "transform", value: self.transform(target) });
                    transform_done = true;
                }
                continue;
            }
            if let Some(value) = self.values.get(&(target, prop)) {
                out.push(Declaration { property: prop.css_name(), value: value.css() });
            }
        }
        out
    }

    fn transform(&self, target: TargetId) -> String {
        let n = |prop| self.number(target, prop).unwrap_or(0.0);
        let scale = self.number(target, Prop::Scale).unwrap_or(1.0);
        format!(
            "translate({}%, {}%) translate({}px, {}px) scale({})",
            fmt_num(n(Prop::XPercent)),
            fmt_num(n(Prop::YPercent)),
            fmt_num(n(Prop::X)),
            fmt_num(n(Prop::Y)),
            fmt_num(scale),
        )
    }
}

/// Format a number for CSS with at most four decimals and no negative zero.
#[must_use]
pub fn fmt_num(value: f64) -> String {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    if rounded == 0.0 || !rounded.is_finite() {
        return "0".to_owned();
    }
    format!("{rounded}")
}
