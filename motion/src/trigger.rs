//! Scroll-position trigger regions.
//!
//! A region is described by two [`Anchor`]s, each pairing a point on the
//! trigger element with a point on the viewport: `"-100% bottom"` means
//! "when the point one element-height above the element's top reaches the
//! bottom of the viewport". [`TriggerSpec::bounds`] turns the anchors into
//! scroll offsets, and [`ScrollTrigger::update`] reports which boundaries the
//! page crossed since the last update.

#[cfg(test)]
#[path = "trigger_test.rs"]
mod trigger_test;

use std::str::FromStr;

use serde::Deserialize;

/// Error returned when an anchor string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid trigger anchor: {0:?}")]
pub struct AnchorError(pub String);

/// A distance along an element or the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    /// Percentage of the measured size. `top` is 0%, `center` 50%,
    /// `bottom` 100%.
    Percent(f64),
    Px(f64),
}

impl Length {
    #[must_use]
    pub fn resolve(self, size: f64) -> f64 {
        match self {
            Self::Percent(p) => size * p / 100.0,
            Self::Px(px) => px,
        }
    }
}

impl FromStr for Length {
    type Err = AnchorError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let err = || AnchorError(raw.to_owned());
        let s = raw.trim().to_ascii_lowercase();
        match s.as_str() {
            "top" => return Ok(Self::Percent(0.0)),
            "center" => return Ok(Self::Percent(50.0)),
            "bottom" => return Ok(Self::Percent(100.0)),
            _ => {}
        }
        if let Some(p) = s.strip_suffix('%') {
            return p.parse().map(Self::Percent).map_err(|_| err());
        }
        let px = s.strip_suffix("px").unwrap_or(&s);
        px.parse().map(Self::Px).map_err(|_| err())
    }
}

/// `"<element point> <viewport point>"`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub struct Anchor {
    pub element: Length,
    pub viewport: Length,
}

impl FromStr for Anchor {
    type Err = AnchorError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let mut parts = raw.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(element), Some(viewport), None) => Ok(Self {
                element: element.parse().map_err(|_| AnchorError(raw.to_owned()))?,
                viewport: viewport.parse().map_err(|_| AnchorError(raw.to_owned()))?,
            }),
            _ => Err(AnchorError(raw.to_owned())),
        }
    }
}

impl TryFrom<String> for Anchor {
    type Error = AnchorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Start and end anchors of a trigger region.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct TriggerSpec {
    pub start: Anchor,
    pub end: Anchor,
}

impl Default for TriggerSpec {
    /// From one element-height before the element enters at the bottom
    /// until two element-heights past the top.
    fn default() -> Self {
        Self {
            start: Anchor { element: Length::Percent(-100.0), viewport: Length::Percent(100.0) },
            end: Anchor { element: Length::Percent(200.0), viewport: Length::Percent(0.0) },
        }
    }
}

impl TriggerSpec {
    /// Scroll offsets `(start, end)` for an element whose top sits at
    /// `element_top` in document coordinates.
    #[must_use]
    pub fn bounds(&self, element_top: f64, element_height: f64, viewport_height: f64) -> (f64, f64) {
        let at = |anchor: Anchor| {
            element_top + anchor.element.resolve(element_height) - anchor.viewport.resolve(viewport_height)
        };
        let start = at(self.start);
        (start, at(self.end).max(start))
    }
}

/// Where the scroll position sits relative to a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    Before,
    Inside,
    After,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerEvent {
    /// Scrolling forward into the region.
    Enter,
    /// Scrolling forward past the end.
    Leave,
    /// Scrolling backward into the region from past its end.
    EnterBack,
    /// Scrolling backward past the start.
    LeaveBack,
}

impl TriggerEvent {
    /// Whether the event puts the scroll position inside the region.
    #[must_use]
    pub fn is_entering(self) -> bool {
        matches!(self, Self::Enter | Self::EnterBack)
    }
}

/// Tracks one region against successive scroll positions.
#[derive(Debug, Clone)]
pub struct ScrollTrigger {
    start: f64,
    end: f64,
    zone: Zone,
}

impl ScrollTrigger {
    /// A trigger that starts out before its region.
    #[must_use]
    pub fn new((start, end): (f64, f64)) -> Self {
        Self { start, end: end.max(start), zone: Zone::Before }
    }

    /// Re-measure after layout changes, keeping the current zone.
    pub fn set_bounds(&mut self, (start, end): (f64, f64)) {
        self.start = start;
        self.end = end.max(start);
    }

    #[must_use]
    pub fn bounds(&self) -> (f64, f64) {
        (self.start, self.end)
    }

    #[must_use]
    pub fn zone(&self) -> Zone {
        self.zone
    }

    #[must_use]
    pub fn zone_of(&self, scroll_y: f64) -> Zone {
        if scroll_y < self.start {
            Zone::Before
        } else if scroll_y > self.end {
            Zone::After
        } else {
            Zone::Inside
        }
    }

    /// Move to `scroll_y` and return the boundary crossings, in order. A jump
    /// across the whole region reports both crossings.
    pub fn update(&mut self, scroll_y: f64) -> Vec<TriggerEvent> {
        let next = self.zone_of(scroll_y);
        let events = match (self.zone, next) {
            (Zone::Before, Zone::Inside) => vec![TriggerEvent::Enter],
            (Zone::Before, Zone::After) => vec![TriggerEvent::Enter, TriggerEvent::Leave],
            (Zone::Inside, Zone::After) => vec![TriggerEvent::Leave],
            (Zone::Inside, Zone::Before) => vec![TriggerEvent::LeaveBack],
            (Zone::After, Zone::Inside) => vec![TriggerEvent::EnterBack],
            (Zone::After, Zone::Before) => vec![TriggerEvent::EnterBack, TriggerEvent::LeaveBack],
            _ => Vec::new(),
        };
        self.zone = next;
        events
    }
}
