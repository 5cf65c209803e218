//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! two-body scenario. A scenario consists of:
//!
//! - [`WindowConfig`]     – window / bounce rectangle size in pixels
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`BodyConfig`]       – initial state for each of the two bodies
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! window:
//!   width: 900
//!   height: 600
//!
//! parameters:
//!   delta_t: 0.1            # fixed step size
//!   g: 100.0                # gravitational constant (unscaled)
//!   dampening: 0.98         # speed retained per wall bounce
//!   trajectory_len: 2000    # trail capacity per body
//!   trajectory_width: 2.0   # trail dot radius
//!
//! bodies:
//!   - x: [ 200.0, 200.0 ]
//!     v: [ 10.0, 0.0 ]
//!     m: 100.0
//!     radius: 30.0
//!   - x: [ 400.0, 400.0 ]
//!     v: [ -10.0, 0.0 ]
//!     m: 50.0
//!     radius: 25.0
//! ```
//!
//! `ScenarioConfig::default()` reproduces exactly this scenario, so the
//! binary runs the same fixed setup when no file is given. The engine maps
//! this configuration into its internal runtime representation.

use serde::Deserialize;

/// Window / bounce rectangle size in pixels
#[derive(Deserialize, Debug, Clone)]
pub struct WindowConfig {
    pub width: u32,  // surface width in pixels
    pub height: u32, // surface height in pixels
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 900,
            height: 600,
        }
    }
}

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub delta_t: f64,          // time step size
    pub g: f64,                // gravitational constant
    pub dampening: f64,        // velocity retention factor per wall bounce
    pub trajectory_len: usize, // trail capacity per body
    pub trajectory_width: f64, // trail dot radius in pixels
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            delta_t: 0.1,
            g: 100.0,
            dampening: 0.98,
            trajectory_len: 2000,
            trajectory_width: 2.0,
        }
    }
}

/// Configuration for a single body’s initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub x: Vec<f64>, // Initial position vector `x` in pixels
    pub v: Vec<f64>, // Initial velocity vector `v` in pixels per time unit
    pub m: f64,      // Mass of the body
    pub radius: f64, // Radius of the body in pixels
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub window: WindowConfig, // window / bounce rectangle
    #[serde(default)]
    pub parameters: ParametersConfig, // global numerical and physical parameters
    pub bodies: Vec<BodyConfig>, // exactly two bodies defining the initial state
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            parameters: ParametersConfig::default(),
            bodies: vec![
                BodyConfig {
                    x: vec![200.0, 200.0],
                    v: vec![10.0, 0.0],
                    m: 100.0,
                    radius: 30.0,
                },
                BodyConfig {
                    x: vec![400.0, 400.0],
                    v: vec![-10.0, 0.0],
                    m: 50.0,
                    radius: 25.0,
                },
            ],
        }
    }
}
