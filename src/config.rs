//! Simulation configuration
//!
//! Configuration is read from a TOML file, by default
//! `<user config dir>/pendulum/config.toml`. Every section and field is
//! optional; anything missing takes its default value.

use crate::physics::{
    DEFAULT_TIME_STEP, GeneralizedCoordinates, PendulumError, PendulumParameters, PendulumState,
    STANDARD_GRAVITY, Scalar, Vector,
};
use bevy::prelude::*;
use core::f64::consts::PI;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Configuration loading, saving and validation errors
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read or parsed
    Load(config::ConfigError),
    /// The configuration could not be serialized to TOML
    Serialize(toml::ser::Error),
    /// The configuration could not be written
    Io(std::io::Error),
    /// Time step must be positive and finite
    InvalidTimeStep(Scalar),
    /// At least one step must run per frame
    InvalidStepsPerFrame,
    /// Pendulum parameters or initial conditions were rejected
    Pendulum(PendulumError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Load(err) => write!(f, "failed to load configuration: {err}"),
            ConfigError::Serialize(err) => write!(f, "failed to serialize configuration: {err}"),
            ConfigError::Io(err) => write!(f, "failed to write configuration: {err}"),
            ConfigError::InvalidTimeStep(dt) => {
                write!(f, "time step must be positive and finite, got {dt}")
            }
            ConfigError::InvalidStepsPerFrame => write!(f, "steps per frame must be at least 1"),
            ConfigError::Pendulum(err) => write!(f, "invalid pendulum: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Load(err) => Some(err),
            ConfigError::Serialize(err) => Some(err),
            ConfigError::Io(err) => Some(err),
            ConfigError::Pendulum(err) => Some(err),
            ConfigError::InvalidTimeStep(_) | ConfigError::InvalidStepsPerFrame => None,
        }
    }
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::Load(err)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(err: toml::ser::Error) -> Self {
        ConfigError::Serialize(err)
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<PendulumError> for ConfigError {
    fn from(err: PendulumError) -> Self {
        ConfigError::Pendulum(err)
    }
}

#[derive(Resource, Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    pub physics: PhysicsConfig,
    pub rendering: RenderingConfig,
    pub ui: UiConfig,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct PhysicsConfig {
    pub time_step: Scalar,
    pub steps_per_frame: usize,
    pub gravity: Scalar,
    pub masses: [Scalar; 2],
    pub lengths: [Scalar; 2],
    pub pivot: [Scalar; 2],
    pub initial_angles: [Scalar; 2],
    pub initial_angular_velocities: [Scalar; 2],
    pub start_paused: bool,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            time_step: DEFAULT_TIME_STEP,
            steps_per_frame: 1,
            gravity: STANDARD_GRAVITY,
            masses: [1.0, 1.0],
            lengths: [0.2, 0.2],
            pivot: [0.5, 0.5],
            initial_angles: [3.0 * PI / 4.0, 0.0],
            initial_angular_velocities: [0.0, 0.0],
            start_paused: false,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct RenderingConfig {
    pub window_title: String,
    pub window_width: f32,
    pub window_height: f32,
    pub background_color: [f32; 3],
    pub joint_color: [f32; 3],
    /// Radius of the pivot and bob markers, in normalized display units
    pub joint_radius: f32,
    pub show_links: bool,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            window_title: "Pendulum".into(),
            window_width: 1000.0,
            window_height: 1000.0,
            background_color: [0.9, 0.9, 0.9],
            joint_color: [0.0, 0.0, 0.0],
            joint_radius: 0.01,
            show_links: false,
        }
    }
}

impl RenderingConfig {
    pub fn background_color(&self) -> Color {
        let [r, g, b] = self.background_color;
        Color::srgb(r, g, b)
    }

    pub fn joint_color(&self) -> Color {
        let [r, g, b] = self.joint_color;
        Color::srgb(r, g, b)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    pub hud_enabled: bool,
    pub font_size: f32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            hud_enabled: true,
            font_size: 14.0,
        }
    }
}

impl SimulationConfig {
    /// Location of the per-user configuration file, if the platform has one
    pub fn user_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "pendulum").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load the per-user configuration file, falling back to defaults
    pub fn load_from_user_config() -> Self {
        match Self::user_config_path() {
            Some(path) => Self::load_or_default(path),
            None => {
                warn!("No user configuration directory available. Using defaults.");
                Self::default()
            }
        }
    }

    /// Load configuration from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    /// Load configuration from a file, falling back to defaults if the file doesn't exist
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            info!("Config file {} not found. Using defaults.", path.display());
            return Self::default();
        }

        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to parse config file {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Save configuration to a file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    pub fn pendulum_parameters(&self) -> PendulumParameters {
        let [x, y] = self.physics.pivot;
        PendulumParameters {
            mass: self.physics.masses,
            length: self.physics.lengths,
            gravity: self.physics.gravity,
            pivot: Vector::new(x, y),
        }
    }

    pub fn initial_coordinates(&self) -> GeneralizedCoordinates {
        GeneralizedCoordinates::new(
            self.physics.initial_angles,
            self.physics.initial_angular_velocities,
        )
    }

    /// Build the pendulum the simulation starts (and restarts) from
    pub fn build_state(&self) -> Result<PendulumState, PendulumError> {
        PendulumState::new(self.pendulum_parameters(), self.initial_coordinates())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let dt = self.physics.time_step;
        if !(dt.is_finite() && dt > 0.0) {
            return Err(ConfigError::InvalidTimeStep(dt));
        }
        if self.physics.steps_per_frame == 0 {
            return Err(ConfigError::InvalidStepsPerFrame);
        }
        self.build_state()?;
        Ok(())
    }
}
