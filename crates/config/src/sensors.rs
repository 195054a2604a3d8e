//! Drag activation thresholds for pointer and touch input.
//!
//! A press only turns into a drag once it clears the activation policy of
//! its input modality:
//!
//! - Pointer (mouse-class) input activates after moving at least
//!   `distance` pixels away from where the button went down.
//! - Touch input activates after being held for `delay_ms` milliseconds
//!   without drifting more than `tolerance` pixels.
//!
//! ```json5
//! {
//!   sensors: {
//!     pointer: { distance: 5 },
//!     touch: { delay_ms: 100, tolerance: 5 },
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Default pointer activation distance in pixels.
pub const DEFAULT_POINTER_DISTANCE: u32 = 5;

/// Default touch hold delay in milliseconds.
pub const DEFAULT_TOUCH_DELAY_MS: u64 = 100;

/// Default touch drift tolerance in pixels.
pub const DEFAULT_TOUCH_TOLERANCE: u32 = 5;

/// Longest touch hold delay accepted (10 seconds).
pub const MAX_TOUCH_DELAY_MS: u64 = 10_000;

/// Activation policy for mouse-class input.
///
/// # Examples
///
/// ```
/// use tack_config::PointerSensorConfig;
///
/// let config = PointerSensorConfig::default();
/// assert_eq!(config.distance, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerSensorConfig {
    /// Minimum travel, in pixels, before a press becomes a drag.
    #[serde(default = "default_pointer_distance")]
    pub distance: u32,
}

fn default_pointer_distance() -> u32 {
    DEFAULT_POINTER_DISTANCE
}

impl Default for PointerSensorConfig {
    fn default() -> Self {
        Self {
            distance: DEFAULT_POINTER_DISTANCE,
        }
    }
}

/// Activation policy for touch input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TouchSensorConfig {
    /// How long, in milliseconds, a contact must be held before it drags.
    #[serde(default = "default_touch_delay_ms")]
    pub delay_ms: u64,

    /// How far, in pixels, the contact may drift while being held.
    #[serde(default = "default_touch_tolerance")]
    pub tolerance: u32,
}

fn default_touch_delay_ms() -> u64 {
    DEFAULT_TOUCH_DELAY_MS
}

fn default_touch_tolerance() -> u32 {
    DEFAULT_TOUCH_TOLERANCE
}

impl Default for TouchSensorConfig {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_TOUCH_DELAY_MS,
            tolerance: DEFAULT_TOUCH_TOLERANCE,
        }
    }
}

/// Activation thresholds for every input modality.
///
/// # Examples
///
/// ```
/// use tack_config::SensorConfig;
///
/// let config = SensorConfig::default();
/// assert_eq!(config.touch.delay_ms, 100);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorConfig {
    /// Mouse-class activation policy.
    #[serde(default)]
    pub pointer: PointerSensorConfig,

    /// Touch activation policy.
    #[serde(default)]
    pub touch: TouchSensorConfig,
}

impl SensorConfig {
    /// Validates the thresholds.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSensor`] if a distance or tolerance is
    /// zero, or if the touch delay exceeds [`MAX_TOUCH_DELAY_MS`].
    pub fn validate(&self) -> Result<()> {
        if self.pointer.distance == 0 {
            return Err(ConfigError::InvalidSensor {
                reason: "pointer distance must be greater than 0".to_string(),
            });
        }

        if self.touch.tolerance == 0 {
            return Err(ConfigError::InvalidSensor {
                reason: "touch tolerance must be greater than 0".to_string(),
            });
        }

        if self.touch.delay_ms > MAX_TOUCH_DELAY_MS {
            return Err(ConfigError::InvalidSensor {
                reason: format!(
                    "touch delay {}ms exceeds maximum of {}ms",
                    self.touch.delay_ms, MAX_TOUCH_DELAY_MS
                ),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SensorConfig::default();
        assert_eq!(config.pointer.distance, DEFAULT_POINTER_DISTANCE);
        assert_eq!(config.touch.delay_ms, DEFAULT_TOUCH_DELAY_MS);
        assert_eq!(config.touch.tolerance, DEFAULT_TOUCH_TOLERANCE);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_zero_distance() {
        let config = SensorConfig {
            pointer: PointerSensorConfig { distance: 0 },
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("pointer distance"));
    }

    #[test]
    fn rejects_zero_tolerance() {
        let config = SensorConfig {
            touch: TouchSensorConfig {
                tolerance: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn delay_boundaries() {
        let mut config = SensorConfig::default();

        config.touch.delay_ms = 0;
        assert!(config.validate().is_ok());

        config.touch.delay_ms = MAX_TOUCH_DELAY_MS;
        assert!(config.validate().is_ok());

        config.touch.delay_ms = MAX_TOUCH_DELAY_MS + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn deserialize_partial() {
        let config: SensorConfig =
            serde_json::from_str(r#"{"touch": {"delay_ms": 250}}"#).unwrap();
        assert_eq!(config.pointer.distance, DEFAULT_POINTER_DISTANCE);
        assert_eq!(config.touch.delay_ms, 250);
        assert_eq!(config.touch.tolerance, DEFAULT_TOUCH_TOLERANCE);
    }
}
