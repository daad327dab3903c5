//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`TB_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;
use std::time::Duration;

use tesseract_math::Vec4;
use tesseract_physics::Bounds4D;

use crate::error::ConfigurationError;
use crate::systems::{FrameCount, FrameDriver, InitialVelocity, SimulationConfig};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Simulation configuration
    #[serde(default)]
    pub simulation: SimulationSettings,
    /// Frontend configuration
    #[serde(default)]
    pub frontend: FrontendConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`TB_*`)
    pub fn load() -> Result<Self, figment::Error> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, figment::Error> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // TB_SIMULATION__RADIUS=0.2 -> simulation.radius = 0.2
        figment = figment.merge(Env::prefixed("TB_").split("__"));

        figment.extract()
    }

    /// Build and validate the runtime simulation settings
    pub fn to_simulation_config(&self) -> Result<SimulationConfig, ConfigurationError> {
        let config = self.simulation.to_simulation_config();
        config.validate()?;
        Ok(config)
    }

    /// Frame driver ticking at the configured interval
    pub fn frame_driver(&self) -> FrameDriver {
        FrameDriver::new(Duration::from_millis(self.frontend.tick_interval_ms))
    }
}

/// Simulation configuration as written in the config files
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    /// Wall coordinates [low, high], shared by every axis
    pub bounds: Bounds4D,
    /// Ball collision radius
    pub radius: f32,
    /// Time step per tick in seconds
    pub dt: f32,
    /// Eye distance along w; must exceed bounds high + radius
    pub projection_distance: f32,
    /// Starting position [x, y, z, w]
    pub initial_position: [f32; 4],
    /// Fixed starting velocity [x, y, z, w]; random when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_velocity: Option<[f32; 4]>,
    /// Range [min, max] each random velocity component is drawn from
    pub velocity_range: [f32; 2],
    /// Seed for the random velocity; entropy when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Number of ticks, or "unbounded"
    pub frame_count: FrameCount,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            bounds: Bounds4D::default(),
            radius: 0.1,
            dt: 0.02,
            projection_distance: 3.0,
            initial_position: [0.0; 4],
            initial_velocity: None,
            velocity_range: [-0.5, 0.5],
            seed: None,
            frame_count: FrameCount::default(),
        }
    }
}

impl SimulationSettings {
    /// Convert to the runtime config without validating it
    pub fn to_simulation_config(&self) -> SimulationConfig {
        let initial_velocity = match self.initial_velocity {
            Some(v) => InitialVelocity::Fixed(Vec4::from(v)),
            None => InitialVelocity::Random {
                min: self.velocity_range[0],
                max: self.velocity_range[1],
                seed: self.seed,
            },
        };

        SimulationConfig {
            bounds: self.bounds,
            radius: self.radius,
            dt: self.dt,
            projection_distance: self.projection_distance,
            initial_position: Vec4::from(self.initial_position),
            initial_velocity,
            frame_count: self.frame_count,
        }
    }
}

/// Rendering frontend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontendConfig {
    /// Milliseconds between ticks (20 = 50Hz)
    pub tick_interval_ms: u64,
    /// Log the ball position every N ticks (0 = never)
    pub log_every: u64,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 20,
            log_every: 50,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
