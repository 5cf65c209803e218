//! Core state types for the two-body simulation.
//!
//! Defines the body struct and the system holding exactly two bodies:
//! - `Body` using `NVec2`
//! - `System` with the pair `a` / `b` and the current simulation time `t`
//!
//! Both bodies are created once at startup and mutated in place every frame.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec2, // position (pixels)
    pub v: NVec2, // velocity (pixels per time unit)
    pub m: f64, // mass
    pub radius: f64, // radius (pixels)
}

#[derive(Debug, Clone)]
pub struct System {
    pub a: Body, // first body
    pub b: Body, // second body
    pub t: f64, // time
}
