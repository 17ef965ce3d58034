//! Named easing curves.
//!
//! Names follow the conventions used in the site's animation configuration:
//! `none`, `power0`–`power4` with an optional `.in` / `.out` / `.inOut`
//! suffix (bare `powerN` means `.out`), and `elastic.out(amplitude, period)`.

#[cfg(test)]
#[path = "ease_test.rs"]
mod ease_test;

use std::f64::consts::TAU;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::consts::ELASTIC_DEFAULT_PERIOD;

/// Error returned when an ease name cannot be parsed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EaseError {
    /// The name does not match any known curve.
    #[error("unknown ease: {0:?}")]
    Unknown(String),
    /// The curve exists but its parameter list is malformed.
    #[error("invalid parameters for ease {name:?}: {detail}")]
    Params { name: String, detail: String },
}

/// Which end of the curve is eased.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    In,
    Out,
    InOut,
}

/// An easing curve mapping linear progress in `[0, 1]` to eased output.
///
/// Output may leave `[0, 1]` for overshooting curves (`ElasticOut`).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub enum Ease {
    Linear,
    /// Polynomial ease of degree `power + 1`; `power == 0` is linear.
    Power(u8, Direction),
    ElasticOut { amplitude: f64, period: f64 },
}

impl Default for Ease {
    fn default() -> Self {
        Self::Power(1, Direction::Out)
    }
}

impl Ease {
    /// Shorthand for `powerN.out`.
    #[must_use]
    pub fn out(power: u8) -> Self {
        Self::Power(power, Direction::Out)
    }

    /// Shorthand for `powerN.inOut`.
    #[must_use]
    pub fn in_out(power: u8) -> Self {
        Self::Power(power, Direction::InOut)
    }

    #[must_use]
    pub fn elastic(amplitude: f64, period: f64) -> Self {
        Self::ElasticOut { amplitude, period }
    }

    /// Evaluate the curve. Input is clamped to `[0, 1]`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear | Self::Power(0, _) => t,
            Self::Power(power, direction) => {
                let exp = i32::from(power) + 1;
                match direction {
                    Direction::In => t.powi(exp),
                    Direction::Out => 1.0 - (1.0 - t).powi(exp),
                    Direction::InOut => {
                        if t < 0.5 {
                            (2.0 * t).powi(exp) / 2.0
                        } else {
                            1.0 - (2.0 * (1.0 - t)).powi(exp) / 2.0
                        }
                    }
                }
            }
            Self::ElasticOut { amplitude, period } => elastic_out(t, amplitude, period),
        }
    }
}

fn elastic_out(t: f64, amplitude: f64, period: f64) -> f64 {
    if t >= 1.0 {
        return 1.0;
    }
    if t <= 0.0 {
        return 0.0;
    }
    let amp = amplitude.max(1.0);
    let base_period = if period > 0.0 { period } else { ELASTIC_DEFAULT_PERIOD };
    let period = if amplitude < 1.0 && amplitude > 0.0 {
        base_period / amplitude
    } else {
        base_period
    };
    let shift = period / TAU * (1.0 / amp).asin();
    amp * 2f64.powf(-10.0 * t) * ((t - shift) * TAU / period).sin() + 1.0
}

impl FromStr for Ease {
    type Err = EaseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let name = raw.trim().to_ascii_lowercase();
        let (head, args) = match name.split_once('(') {
            Some((head, rest)) => {
                let Some(args) = rest.strip_suffix(')') else {
                    return Err(EaseError::Params { name: raw.to_owned(), detail: "missing ')'".to_owned() });
                };
                (head.trim(), Some(args))
            }
            None => (name.as_str(), None),
        };

        match head {
            "none" | "linear" => Ok(Self::Linear),
            "elastic" | "elastic.out" => parse_elastic(raw, args),
            _ => parse_power(raw, head),
        }
    }
}

impl TryFrom<String> for Ease {
    type Error = EaseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

fn parse_elastic(raw: &str, args: Option<&str>) -> Result<Ease, EaseError> {
    let Some(args) = args else {
        return Ok(Ease::elastic(1.0, ELASTIC_DEFAULT_PERIOD));
    };
    let mut values = Vec::new();
    for part in args.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let value = part.parse::<f64>().map_err(|_| EaseError::Params {
            name: raw.to_owned(),
            detail: format!("{part:?} is not a number"),
        })?;
        values.push(value);
    }
    match values.as_slice() {
        [] => Ok(Ease::elastic(1.0, ELASTIC_DEFAULT_PERIOD)),
        [amplitude] => Ok(Ease::elastic(*amplitude, ELASTIC_DEFAULT_PERIOD)),
        [amplitude, period] => Ok(Ease::elastic(*amplitude, *period)),
        _ => Err(EaseError::Params { name: raw.to_owned(), detail: "expected at most two values".to_owned() }),
    }
}

fn parse_power(raw: &str, head: &str) -> Result<Ease, EaseError> {
    let unknown = || EaseError::Unknown(raw.to_owned());
    let rest = head.strip_prefix("power").ok_or_else(unknown)?;
    let (digits, suffix) = rest.split_once('.').unwrap_or((rest, "out"));
    let power = digits.parse::<u8>().map_err(|_| unknown())?;
    if power > 4 {
        return Err(unknown());
    }
    let direction = match suffix {
        "in" => Direction::In,
        "out" => Direction::Out,
        "inout" => Direction::InOut,
        _ => return Err(unknown()),
    };
    Ok(Ease::Power(power, direction))
}

impl fmt::Display for Ease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "none"),
            Self::Power(power, Direction::In) => write!(f, "power{power}.in"),
            Self::Power(power, Direction::Out) => write!(f, "power{power}.out"),
            Self::Power(power, Direction::InOut) => write!(f, "power{power}.inOut"),
            Self::ElasticOut { amplitude, period } => write!(f, "elastic.out({amplitude}, {period})"),
        }
    }
}
