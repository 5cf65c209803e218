//! Build a fully-initialized simulation scenario from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - numerical parameters (`Parameters`)
//! - the bounce rectangle (`Bounds`)
//! - system state (`System` with both bodies at t = 0)
//! - active kick set (`KickSet` with mutual gravity registered)
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! physics and rendering systems.

use anyhow::{ensure, Result};
use bevy::prelude::Resource;

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::simulation::forces::{KickSet, PairGravity};
use crate::simulation::params::{Bounds, Parameters};
use crate::simulation::states::{Body, NVec2, System};

/// Bevy resource representing a fully-initialized two-body scenario
///
/// This is the main “runtime bundle” constructed from a [`ScenarioConfig`]:
/// it contains the parameters, bounce rectangle, current system state, and
/// the set of active force laws (kicks)
#[derive(Resource)]
pub struct Scenario {
    pub parameters: Parameters,
    pub bounds: Bounds,
    pub system: System,
    pub kicks: KickSet,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        ensure!(
            cfg.bodies.len() == 2,
            "scenario must define exactly 2 bodies, got {}",
            cfg.bodies.len()
        );

        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors
        let a = build_body(&cfg.bodies[0])?;
        let b = build_body(&cfg.bodies[1])?;

        // Initial system state: both bodies at t = 0
        let system = System { a, b, t: 0.0 };

        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            delta_t: p_cfg.delta_t,
            g: p_cfg.g,
            dampening: p_cfg.dampening,
            trajectory_len: p_cfg.trajectory_len,
            trajectory_width: p_cfg.trajectory_width,
        };

        // Bounce rectangle matches the window surface
        let bounds = Bounds {
            width: cfg.window.width as f64,
            height: cfg.window.height as f64,
        };

        // Kicks: construct a KickSet and register mutual gravity
        let kicks = KickSet::new().with(PairGravity { g: parameters.g });

        Ok(Self {
            parameters,
            bounds,
            system,
            kicks,
        })
    }
}

fn build_body(bc: &BodyConfig) -> Result<Body> {
    ensure!(
        bc.x.len() == 2 && bc.v.len() == 2,
        "body position and velocity must each have 2 components"
    );
    Ok(Body {
        x: NVec2::new(bc.x[0], bc.x[1]),
        v: NVec2::new(bc.v[0], bc.v[1]),
        m: bc.m,
        radius: bc.radius,
    })
}
