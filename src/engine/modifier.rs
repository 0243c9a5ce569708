use serde::{Deserialize, Serialize};

use crate::types::{Attribute, Timestamp, px};

/// One interpolation window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSpan {
    pub start: Timestamp,
    /// Milliseconds.
    pub duration: u64,
}

impl TimeSpan {
    pub const fn new(start: Timestamp, duration: u64) -> Self {
        TimeSpan { start, duration }
    }

    pub const fn end(&self) -> Timestamp {
        self.start.saturating_add(self.duration)
    }

    /// Progress through the window, clamped to `0.0..=1.0`.
    ///
    /// A zero-length window is always settled: it reports `1.0` for any `now`.
    pub fn ratio(&self, now: Timestamp) -> f64 {
        if self.duration == 0 {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.start);
        (elapsed as f64 / self.duration as f64).clamp(0.0, 1.0)
    }
}

/// A single visual attribute: either fixed, or animated over a `TimeSpan`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Modifier {
    Interpolated {
        attribute: String,
        span: TimeSpan,
        start_value: i64,
        end_value: i64,
        /// Only ever written by `advance`.
        current_value: i64,
    },
    Static {
        attribute: String,
        value: String,
    },
}

impl Modifier {
    /// A fresh interpolation. Its current value sits at `start_value` until
    /// the first `advance`.
    pub fn interpolated(
        attribute: impl Into<String>,
        span: TimeSpan,
        start_value: i64,
        end_value: i64,
    ) -> Self {
        Modifier::Interpolated {
            attribute: attribute.into(),
            span,
            start_value,
            end_value,
            current_value: start_value,
        }
    }

    pub fn fixed(attribute: impl Into<String>, value: impl Into<String>) -> Self {
        Modifier::Static {
            attribute: attribute.into(),
            value: value.into(),
        }
    }

    pub fn attribute(&self) -> &str {
        match self {
            Modifier::Interpolated { attribute, .. } | Modifier::Static { attribute, .. } => {
                attribute
            }
        }
    }

    /// Recompute the current value of an interpolation for `now`.
    /// Static modifiers come back unchanged.
    pub fn advance(self, now: Timestamp) -> Self {
        match self {
            Modifier::Interpolated {
                attribute,
                span,
                start_value,
                end_value,
                ..
            } => {
                let current_value = lerp(start_value, end_value, span.ratio(now));
                Modifier::Interpolated {
                    attribute,
                    span,
                    start_value,
                    end_value,
                    current_value,
                }
            }
            fixed @ Modifier::Static { .. } => fixed,
        }
    }

    /// Whether further `advance` calls can still change this modifier.
    pub fn is_settled(&self, now: Timestamp) -> bool {
        match self {
            Modifier::Interpolated { span, .. } => span.ratio(now) >= 1.0,
            Modifier::Static { .. } => true,
        }
    }

    pub fn to_attribute(&self) -> Attribute {
        match self {
            Modifier::Interpolated {
                attribute,
                current_value,
                ..
            } => (attribute.clone(), px(*current_value)),
            Modifier::Static { attribute, value } => (attribute.clone(), value.clone()),
        }
    }
}

/// Integer linear interpolation. Endpoints come back exactly and the result
/// never leaves the `[start, end]` range, whatever the magnitudes.
fn lerp(start: i64, end: i64, ratio: f64) -> i64 {
    if ratio <= 0.0 {
        return start;
    }
    if ratio >= 1.0 {
        return end;
    }
    let (start, end) = (i128::from(start), i128::from(end));
    let delta = ((end - start) as f64 * ratio).round() as i128;
    (start + delta).clamp(start.min(end), start.max(end)) as i64
}
