//! Tunables for the web effect.
//!
//! `SpiderConfig::default()` reproduces the shipped look. Front-ends that let
//! callers override values must run [`SpiderConfig::validate`] before
//! building a [`crate::SpiderState`] from it.

use crate::constants::*;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq)]
pub struct SpiderConfig {
    pub point_count: usize,
    pub speed_factor: f32,
    pub velocity_damping: f32,
    pub connect_distance: f32,

    pub spring_stiffness: f32,
    pub spring_damping: f32,

    pub orbit_step_rad: f64,
    pub orbit_period_ms: u32,
    pub orbit_radius: f32,
    pub orbit_radius_min: f32,
    pub orbit_radius_max: f32,
    pub radius_speed_multiplier: f32,

    pub point_radius: f32,
    pub line_width: f32,
    pub point_color: String,
    pub line_color: String,
    pub glyph: String,

    /// Fixed seed for point placement; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SpiderConfig {
    fn default() -> Self {
        Self {
            point_count: DEFAULT_POINT_COUNT,
            speed_factor: DEFAULT_SPEED_FACTOR,
            velocity_damping: DEFAULT_VELOCITY_DAMPING,
            connect_distance: DEFAULT_CONNECT_DISTANCE,
            spring_stiffness: DEFAULT_SPRING_STIFFNESS,
            spring_damping: DEFAULT_SPRING_DAMPING,
            orbit_step_rad: DEFAULT_ORBIT_STEP_RAD,
            orbit_period_ms: DEFAULT_ORBIT_PERIOD_MS,
            orbit_radius: DEFAULT_ORBIT_RADIUS,
            orbit_radius_min: DEFAULT_ORBIT_RADIUS_MIN,
            orbit_radius_max: DEFAULT_ORBIT_RADIUS_MAX,
            radius_speed_multiplier: DEFAULT_RADIUS_SPEED_MULTIPLIER,
            point_radius: DEFAULT_POINT_RADIUS,
            line_width: DEFAULT_LINE_WIDTH,
            point_color: DEFAULT_POINT_COLOR.to_string(),
            line_color: DEFAULT_LINE_COLOR.to_string(),
            glyph: DEFAULT_GLYPH.to_string(),
            seed: None,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("point count must be at least 1")]
    NoPoints,
    #[error("point count {count} exceeds the maximum of {max}")]
    TooManyPoints { count: usize, max: usize },
    #[error("{name} must be finite, got {value}")]
    NotFinite { name: &'static str, value: f32 },
    #[error("{name} must be greater than zero, got {value}")]
    NotPositive { name: &'static str, value: f32 },
    #[error("{name} must not be negative, got {value}")]
    Negative { name: &'static str, value: f32 },
    #[error("velocity damping must be in (0, 1), got {0}")]
    DampingOutOfRange(f32),
    #[error("orbit radius bounds are inverted: min {min} > max {max}")]
    InvertedRadiusBounds { min: f32, max: f32 },
    #[error("orbit timer period must be at least 1 ms")]
    ZeroOrbitPeriod,
}

impl SpiderConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.point_count == 0 {
            return Err(ConfigError::NoPoints);
        }
        if self.point_count > MAX_POINT_COUNT {
            return Err(ConfigError::TooManyPoints {
                count: self.point_count,
                max: MAX_POINT_COUNT,
            });
        }
        if !self.orbit_step_rad.is_finite() {
            return Err(ConfigError::NotFinite {
                name: "orbit step",
                value: self.orbit_step_rad as f32,
            });
        }
        let finite = [
            ("speed factor", self.speed_factor),
            ("velocity damping", self.velocity_damping),
            ("connect distance", self.connect_distance),
            ("spring stiffness", self.spring_stiffness),
            ("spring damping", self.spring_damping),
            ("orbit radius", self.orbit_radius),
            ("orbit radius min", self.orbit_radius_min),
            ("orbit radius max", self.orbit_radius_max),
            ("radius speed multiplier", self.radius_speed_multiplier),
            ("point radius", self.point_radius),
            ("line width", self.line_width),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { name, value });
            }
        }
        let positive = [
            ("connect distance", self.connect_distance),
            ("spring stiffness", self.spring_stiffness),
            ("point radius", self.point_radius),
            ("line width", self.line_width),
        ];
        for (name, value) in positive {
            if value <= 0.0 {
                return Err(ConfigError::NotPositive { name, value });
            }
        }
        if self.spring_damping < 0.0 {
            return Err(ConfigError::Negative {
                name: "spring damping",
                value: self.spring_damping,
            });
        }
        if self.velocity_damping <= 0.0 || self.velocity_damping >= 1.0 {
            return Err(ConfigError::DampingOutOfRange(self.velocity_damping));
        }
        if self.orbit_radius_min > self.orbit_radius_max {
            return Err(ConfigError::InvertedRadiusBounds {
                min: self.orbit_radius_min,
                max: self.orbit_radius_max,
            });
        }
        if self.orbit_period_ms == 0 {
            return Err(ConfigError::ZeroOrbitPeriod);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(SpiderConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_zero_points() {
        let cfg = SpiderConfig {
            point_count: 0,
            ..Default::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::NoPoints));
    }

    #[test]
    fn rejects_point_counts_above_max() {
        let cfg = SpiderConfig {
            point_count: u32::MAX as usize,
            ..Default::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::TooManyPoints {
                count: u32::MAX as usize,
                max: MAX_POINT_COUNT,
            })
        );
        let at_max = SpiderConfig {
            point_count: MAX_POINT_COUNT,
            ..Default::default()
        };
        assert_eq!(at_max.validate(), Ok(()));
    }

    #[test]
    fn rejects_non_finite_orbit_step() {
        let cfg = SpiderConfig {
            orbit_step_rad: f64::INFINITY,
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::NotFinite {
                name: "orbit step",
                ..
            })
        ));
    }

    #[test]
    fn rejects_non_decaying_damping() {
        for d in [0.0, 1.0, 1.5] {
            let cfg = SpiderConfig {
                velocity_damping: d,
                ..Default::default()
            };
            assert_eq!(cfg.validate(), Err(ConfigError::DampingOutOfRange(d)));
        }
    }

    #[test]
    fn rejects_inverted_radius_bounds() {
        let cfg = SpiderConfig {
            orbit_radius_min: 90.0,
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvertedRadiusBounds { .. })
        ));
    }

    #[test]
    fn rejects_nan_before_sign_checks() {
        let cfg = SpiderConfig {
            connect_distance: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::NotFinite {
                name: "connect distance",
                ..
            })
        ));
    }

    #[test]
    fn error_messages_name_the_field() {
        let cfg = SpiderConfig {
            spring_stiffness: -1.0,
            ..Default::default()
        };
        let msg = cfg.validate().unwrap_err().to_string();
        assert!(msg.contains("spring stiffness"), "{msg}");
    }
}
