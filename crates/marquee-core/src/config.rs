//! Tunables for a marquee instance.
//!
//! Every field defaults to the value in `constants.rs`; hosts override them
//! (the web front-end reads `data-marquee-*` attributes) and call
//! [`MarqueeConfig::validate`] before constructing a [`crate::Marquee`].

use crate::constants::*;
use crate::error::MarqueeError;

#[derive(Clone, Debug, PartialEq)]
pub struct MarqueeConfig {
    pub scroll_ease: f32,
    pub velocity: f32,
    pub drag_factor: f32,
    pub wheel_factor: f32,
    pub wheel_enabled: bool,
    pub distortion_range: f32,
    pub distortion_max: f32,
    pub distortion_ease: f32,
    pub preview_threshold: f32,
    pub preview_inset: f32,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            scroll_ease: SCROLL_EASE,
            velocity: IDLE_VELOCITY,
            drag_factor: DRAG_FACTOR,
            wheel_factor: WHEEL_FACTOR,
            wheel_enabled: true,
            distortion_range: DISTORTION_RANGE,
            distortion_max: DISTORTION_MAX,
            distortion_ease: DISTORTION_EASE,
            preview_threshold: PREVIEW_THRESHOLD,
            preview_inset: PREVIEW_INSET,
        }
    }
}

impl MarqueeConfig {
    pub fn validate(&self) -> Result<(), MarqueeError> {
        check_ease("scroll_ease", self.scroll_ease)?;
        check_ease("distortion_ease", self.distortion_ease)?;
        check_finite("velocity", self.velocity)?;
        check_positive("drag_factor", self.drag_factor)?;
        check_positive("wheel_factor", self.wheel_factor)?;
        check_positive("distortion_range", self.distortion_range)?;
        check_finite("distortion_max", self.distortion_max)?;
        check_finite("preview_threshold", self.preview_threshold)?;
        check_finite("preview_inset", self.preview_inset)?;
        if self.velocity < 0.0 {
            return Err(MarqueeError::InvalidConfig {
                field: "velocity",
                reason: "must not be negative; direction comes from the scroll",
            });
        }
        if !(0.0..=100.0).contains(&self.distortion_max) {
            return Err(MarqueeError::InvalidConfig {
                field: "distortion_max",
                reason: "must be a percentage in [0, 100]",
            });
        }
        Ok(())
    }
}

fn check_finite(field: &'static str, value: f32) -> Result<(), MarqueeError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(MarqueeError::InvalidConfig {
            field,
            reason: "must be finite",
        })
    }
}

fn check_positive(field: &'static str, value: f32) -> Result<(), MarqueeError> {
    check_finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(MarqueeError::InvalidConfig {
            field,
            reason: "must be greater than zero",
        })
    }
}

fn check_ease(field: &'static str, value: f32) -> Result<(), MarqueeError> {
    check_finite(field, value)?;
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(MarqueeError::InvalidConfig {
            field,
            reason: "must be in (0, 1]",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(MarqueeConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_out_of_range_ease() {
        let cfg = MarqueeConfig {
            scroll_ease: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(MarqueeError::InvalidConfig {
                field: "scroll_ease",
                ..
            })
        ));
    }

    #[test]
    fn rejects_nan_range() {
        let cfg = MarqueeConfig {
            distortion_range: f32::NAN,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_velocity_is_allowed() {
        let cfg = MarqueeConfig {
            velocity: 0.0,
            ..Default::default()
        };
        assert!(cfg.validate().is_ok());
    }
}
