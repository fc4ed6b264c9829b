//! Typewriter pacing configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::DialogError;

/// What `begin_line` does when a line is still typing or settling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReentryPolicy {
    /// Drop the current line and start the new one
    #[default]
    Restart,
    /// Refuse with [`DialogError::LineInProgress`]
    Reject,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    /// Base reveal rate in characters per second
    pub letters_per_second: f64,
    /// Speed multiplier applied by the fast-forward input
    pub fast_forward_multiplier: f64,
    /// Trailing pause after the last character, at 1x speed
    pub settle_delay_secs: f64,
    pub reentry: ReentryPolicy,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            letters_per_second: 30.0,
            fast_forward_multiplier: 10.0,
            settle_delay_secs: 1.0,
            reentry: ReentryPolicy::Restart,
        }
    }
}

impl TypewriterConfig {
    pub fn with_rate(letters_per_second: f64) -> Self {
        Self {
            letters_per_second,
            ..Self::default()
        }
    }

    /// Parse from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, DialogError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), DialogError> {
        if !(self.letters_per_second.is_finite() && self.letters_per_second > 0.0) {
            return Err(DialogError::InvalidConfig(format!(
                "letters_per_second must be positive, got {}",
                self.letters_per_second
            )));
        }
        if !(self.fast_forward_multiplier.is_finite() && self.fast_forward_multiplier >= 1.0) {
            return Err(DialogError::InvalidConfig(format!(
                "fast_forward_multiplier must be at least 1, got {}",
                self.fast_forward_multiplier
            )));
        }
        if !(self.settle_delay_secs.is_finite() && self.settle_delay_secs >= 0.0) {
            return Err(DialogError::InvalidConfig(format!(
                "settle_delay_secs must be non-negative, got {}",
                self.settle_delay_secs
            )));
        }
        if !(self.letters_per_second * self.fast_forward_multiplier).is_finite() {
            return Err(DialogError::InvalidConfig(format!(
                "fast_forward_multiplier {} overflows at {} letters per second",
                self.fast_forward_multiplier, self.letters_per_second
            )));
        }

        // The longest waits are the 1x ones; every scaled wait is shorter
        for (field, secs) in [
            ("letters_per_second", 1.0 / self.letters_per_second),
            ("settle_delay_secs", self.settle_delay_secs),
        ] {
            Duration::try_from_secs_f64(secs).map_err(|_| {
                DialogError::InvalidConfig(format!("{field} gives a delay of {secs}s, too long"))
            })?;
        }
        Ok(())
    }

    /// Delay before the first character appears. Not affected by fast-forward.
    pub fn pre_roll(&self) -> Duration {
        seconds(1.0 / self.letters_per_second)
    }

    /// Wait after each character at the given speed multiplier
    pub fn char_interval(&self, multiplier: f64) -> Duration {
        seconds(1.0 / (self.letters_per_second * multiplier))
    }

    /// Trailing pause once every character is visible.
    ///
    /// Scales as `settle_delay / multiplier`, so fast-forward shortens it.
    pub fn settle_delay(&self, multiplier: f64) -> Duration {
        seconds(self.settle_delay_secs / multiplier)
    }
}

/// Convert float seconds, saturating values that do not fit a `Duration`
fn seconds(secs: f64) -> Duration {
    Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
}
