//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds the runtime constants:
//! - integration step size,
//! - gravitational constant `G`,
//! - wall bounce dampening factor,
//! - trail capacity and dot radius
//!
//! `Bounds` is the rectangle the bodies bounce inside, matching the window
//! surface in pixels.

#[derive(Debug, Clone)]
pub struct Parameters {
    pub delta_t: f64, // step size
    pub g: f64, // gravitational constant
    pub dampening: f64, // velocity retention on wall bounce
    pub trajectory_len: usize, // trail capacity (positions kept per body)
    pub trajectory_width: f64, // radius of each trail dot
}

#[derive(Debug, Clone)]
pub struct Bounds {
    pub width: f64, // right wall
    pub height: f64, // bottom wall
}
