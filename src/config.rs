//! Site configuration.
//!
//! DESIGN
//! ======
//! Every field has a default matching the site's stock markup, so the page
//! works with no configuration at all. A page may override any part by
//! embedding JSON in `<script type="application/json" id="pagefx-config">`.
//! Easing names and timeline positions are plain strings
//! (`"power2.out"`, `">-0.12"`) parsed by `motion`.
//!
//! Button `timings` and `colors` blocks are merged field by field over the
//! variant's own defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use motion::consts::{CLIENTS_MARQUEE_CYCLE, HERO_MARQUEE_CYCLE};
use motion::ease::Ease;
use motion::flair::{FlairColors, FlairConfig, FlairTimings, Variant};
use motion::reveal::RevealTimings;
use motion::trigger::TriggerSpec;
use serde::Deserialize;

/// DOM id of the inline configuration script.
pub const CONFIG_ELEMENT_ID: &str = "pagefx-config";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid pagefx config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid pagefx config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

#[cfg(feature = "hydrate")]
impl From<LogLevel> for log::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Self::Error,
            LogLevel::Warn => Self::Warn,
            LogLevel::Info => Self::Info,
            LogLevel::Debug => Self::Debug,
            LogLevel::Trace => Self::Trace,
        }
    }
}

// =============================================================================
// SELECTORS
// =============================================================================

/// CSS selectors for every element the effects hook into.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub button: String,
    pub button_flair: String,
    pub button_big: String,
    pub button_big_flair: String,
    pub hero_title: String,
    /// Inline span inside the title whose text is not split.
    pub title_inline_span: String,
    pub hero_secondary: String,
    pub title_wrapper: String,
    pub title_span: String,
    pub hero_description: String,
    pub hero_cta: String,
    pub hero_logos: String,
    pub nav: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            button: ".button".to_owned(),
            button_flair: ".button__flair".to_owned(),
            button_big: ".button-big".to_owned(),
            button_big_flair: ".button-big__flair".to_owned(),
            hero_title: ".hero_title".to_owned(),
            title_inline_span: ".text-span".to_owned(),
            hero_secondary: ".hero_title-little".to_owned(),
            title_wrapper: ".hero_title_wrapper".to_owned(),
            title_span: ".title_span".to_owned(),
            hero_description: ".hero_description".to_owned(),
            hero_cta: ".hero_descriptions .button-big".to_owned(),
            hero_logos: ".hero_logos".to_owned(),
            nav: ".nav_container".to_owned(),
        }
    }
}

// =============================================================================
// BUTTONS
// =============================================================================

/// Per-field overrides of a variant's flair timings. Fields left out keep
/// the variant's own value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TimingsPatch {
    pub surface_enter: Option<f64>,
    pub surface_ease: Option<Ease>,
    pub flair_enter: Option<f64>,
    pub flair_ease: Option<Ease>,
    pub flair_delay_ratio: Option<f64>,
    pub follow: Option<f64>,
    pub follow_ease: Option<Ease>,
    pub leave: Option<f64>,
    pub leave_ease: Option<Ease>,
}

impl TimingsPatch {
    #[must_use]
    pub fn apply(&self, base: FlairTimings) -> FlairTimings {
        FlairTimings {
            surface_enter: self.surface_enter.unwrap_or(base.surface_enter),
            surface_ease: self.surface_ease.unwrap_or(base.surface_ease),
            flair_enter: self.flair_enter.unwrap_or(base.flair_enter),
            flair_ease: self.flair_ease.unwrap_or(base.flair_ease),
            flair_delay_ratio: self.flair_delay_ratio.unwrap_or(base.flair_delay_ratio),
            follow: self.follow.unwrap_or(base.follow),
            follow_ease: self.follow_ease.unwrap_or(base.follow_ease),
            leave: self.leave.unwrap_or(base.leave),
            leave_ease: self.leave_ease.unwrap_or(base.leave_ease),
        }
    }
}

/// Per-field overrides of a variant's colors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ColorsPatch {
    pub surface_rest: Option<String>,
    pub surface_hover: Option<String>,
    pub flair_hover: Option<String>,
}

impl ColorsPatch {
    #[must_use]
    pub fn apply(&self, base: FlairColors) -> FlairColors {
        FlairColors {
            surface_rest: self.surface_rest.clone().unwrap_or(base.surface_rest),
            surface_hover: self.surface_hover.clone().unwrap_or(base.surface_hover),
            flair_hover: self.flair_hover.clone().or(base.flair_hover),
        }
    }
}

/// Overrides for one button variant.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FlairSection {
    pub timings: TimingsPatch,
    pub colors: ColorsPatch,
}

impl FlairSection {
    #[must_use]
    pub fn resolve(&self, variant: Variant) -> FlairConfig {
        let base = match variant {
            Variant::Plain => FlairConfig::plain(),
            Variant::Big => FlairConfig::big(),
        };
        FlairConfig { variant, timings: self.timings.apply(base.timings), colors: self.colors.apply(base.colors) }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ButtonsConfig {
    pub plain: FlairSection,
    pub big: FlairSection,
}

// =============================================================================
// MARQUEES
// =============================================================================

/// One looping logo row.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MarqueeConfig {
    /// Name used in log messages.
    pub name: String,
    /// The row whose children are duplicated and slid.
    pub container: String,
    /// Element whose scroll position gates play/pause.
    pub section: String,
    /// Seconds per loop.
    pub cycle: f64,
    pub trigger: TriggerSpec,
}

impl MarqueeConfig {
    #[must_use]
    pub fn hero() -> Self {
        Self {
            name: "hero logos".to_owned(),
            container: ".hero_logos-container".to_owned(),
            section: ".hero_logos".to_owned(),
            cycle: HERO_MARQUEE_CYCLE,
            trigger: TriggerSpec::default(),
        }
    }

    #[must_use]
    pub fn clients() -> Self {
        Self {
            name: "clients logos".to_owned(),
            container: ".clients_logos-container".to_owned(),
            section: ".clients_logo".to_owned(),
            cycle: CLIENTS_MARQUEE_CYCLE,
            trigger: TriggerSpec::default(),
        }
    }
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self::hero()
    }
}

// =============================================================================
// SITE CONFIG
// =============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub log_level: LogLevel,
    pub selectors: Selectors,
    pub buttons: ButtonsConfig,
    pub reveal: RevealTimings,
    pub marquees: Vec<MarqueeConfig>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            selectors: Selectors::default(),
            buttons: ButtonsConfig::default(),
            reveal: RevealTimings::default(),
            marquees: vec![MarqueeConfig::hero(), MarqueeConfig::clients()],
        }
    }
}

impl SiteConfig {
    /// Parse and validate inline JSON.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Configuration from the optional inline script body. Invalid input
    /// falls back to defaults and hands back the error for logging.
    #[must_use]
    pub fn from_inline(raw: Option<&str>) -> (Self, Option<ConfigError>) {
        match raw.map(str::trim).filter(|r| !r.is_empty()) {
            None => (Self::default(), None),
            Some(raw) => match Self::from_json(raw) {
                Ok(config) => (config, None),
                Err(err) => (Self::default(), Some(err)),
            },
        }
    }

    /// Reject values no effect can run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for marquee in &self.marquees {
            if !(marquee.cycle.is_finite() && marquee.cycle > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "marquee {:?} cycle must be positive, got {}",
                    marquee.name, marquee.cycle
                )));
            }
            if marquee.container.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("marquee {:?} has no container selector", marquee.name)));
            }
        }
        let timings = [
            ("plain", self.buttons.plain.resolve(Variant::Plain).timings),
            ("big", self.buttons.big.resolve(Variant::Big).timings),
        ];
        for (name, t) in timings {
            if !(0.0..=1.0).contains(&t.flair_delay_ratio) {
                return Err(ConfigError::Invalid(format!(
                    "{name} button flair_delay_ratio must be within 0..=1, got {}",
                    t.flair_delay_ratio
                )));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn flair(&self, variant: Variant) -> FlairConfig {
        match variant {
            Variant::Plain => self.buttons.plain.resolve(variant),
            Variant::Big => self.buttons.big.resolve(variant),
        }
    }
}
