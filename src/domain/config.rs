//! Scene configuration.
//!
//! Defaults: 10 kg ball of radius 0.1 m, heavy
//! angular damping, 1/120 s fixed step, and a launch impulse of 10.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::core::{SessionError, SessionResult};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub gravity: Vec3,
    /// Seconds per physics step.
    pub fixed_timestep: f32,
    /// Upper bound on steps per frame before surplus time is dropped.
    pub max_substeps: u32,
    /// Impulse length applied on every throw.
    pub launch_magnitude: f32,
    pub ball: BallConfig,
    pub ground_restitution: f32,
    pub highlight: HighlightPalette,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallConfig {
    pub radius: f32,
    pub mass: f32,
    pub linear_damping: f32,
    pub angular_damping: f32,
    pub restitution: f32,
    pub friction: f32,
}

/// `0xRRGGBB` colors for each highlight state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightPalette {
    pub neutral: u32,
    pub armed: u32,
    pub launched: u32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            gravity: Vec3::new(0.0, -9.81, 0.0),
            fixed_timestep: 1.0 / 120.0,
            max_substeps: 10,
            launch_magnitude: crate::systems::interaction::FIXED_MAGNITUDE,
            ball: BallConfig::default(),
            ground_restitution: 0.3,
            highlight: HighlightPalette::default(),
        }
    }
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            radius: 0.1,
            mass: 10.0,
            linear_damping: 0.21,
            angular_damping: 0.9,
            restitution: 0.3,
            friction: 0.3,
        }
    }
}

impl Default for HighlightPalette {
    fn default() -> Self {
        Self {
            neutral: 0x000000,
            armed: 0xff0000,
            launched: 0x0000ff,
        }
    }
}

impl SceneConfig {
    pub fn from_json(json: &str) -> SessionResult<Self> {
        let config: SceneConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn validate(&self) -> SessionResult<()> {
        if !self.gravity.is_finite() {
            return Err(SessionError::InvalidConfig("gravity must be finite".into()));
        }
        if !(self.fixed_timestep.is_finite() && self.fixed_timestep > 0.0) {
            return Err(SessionError::InvalidConfig(
                "fixed_timestep must be positive".into(),
            ));
        }
        if self.max_substeps == 0 {
            return Err(SessionError::InvalidConfig("max_substeps must be at least 1".into()));
        }
        if !(self.launch_magnitude.is_finite() && self.launch_magnitude >= 0.0) {
            return Err(SessionError::InvalidConfig(
                "launch_magnitude must be non-negative".into(),
            ));
        }
        self.ball.validate()?;
        if !(0.0..=1.0).contains(&self.ground_restitution) {
            return Err(SessionError::InvalidConfig(
                "ground_restitution must be within 0..=1".into(),
            ));
        }
        Ok(())
    }
}

impl BallConfig {
    fn validate(&self) -> SessionResult<()> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(SessionError::InvalidConfig("ball.radius must be positive".into()));
        }
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(SessionError::InvalidConfig("ball.mass must be positive".into()));
        }
        for (name, value) in [
            ("ball.linear_damping", self.linear_damping),
            ("ball.angular_damping", self.angular_damping),
            ("ball.restitution", self.restitution),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(SessionError::InvalidConfig(format!("{name} must be within 0..=1")));
            }
        }
        if !(self.friction.is_finite() && self.friction >= 0.0) {
            return Err(SessionError::InvalidConfig("ball.friction must be non-negative".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(SceneConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config = SceneConfig::from_json(r#"{ "launch_magnitude": 4.0, "ball": { "mass": 2.0 } }"#)
            .unwrap();
        assert_eq!(config.launch_magnitude, 4.0);
        assert_eq!(config.ball.mass, 2.0);
        assert_eq!(config.ball.radius, 0.1);
        assert_eq!(config.fixed_timestep, 1.0 / 120.0);
    }

    #[test]
    fn json_round_trips_through_active_config() {
        let config = SceneConfig::default();
        assert_eq!(SceneConfig::from_json(&config.to_json()).unwrap(), config);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            SceneConfig::from_json(r#"{ "fixed_timestep": 0.0 }"#),
            Err(SessionError::InvalidConfig(_))
        ));
        assert!(matches!(
            SceneConfig::from_json(r#"{ "ball": { "linear_damping": 1.5 } }"#),
            Err(SessionError::InvalidConfig(_))
        ));
        assert!(matches!(
            SceneConfig::from_json("not json"),
            Err(SessionError::ConfigParse(_))
        ));
    }
}
