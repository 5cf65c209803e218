//! Fixed-step time integrator for the two-body system
//!
//! Explicit Euler with the position update first: positions drift on the
//! previous step's velocities, then the kick set updates the velocities,
//! then both bodies bounce off the walls. The order is part of the contract;
//! swapping it changes every trajectory.

use super::boundary::apply_boundary;
use super::forces::KickSet;
use super::params::{Bounds, Parameters};
use super::states::{NVec2, System};

/// Advance the system by one step using explicit Euler
/// Updates positions, velocities, and `sys.t` in-place based on
/// `params.delta_t`
pub fn euler_step(sys: &mut System, kicks: &KickSet, params: &Parameters, bounds: &Bounds) {
    let dt = params.delta_t; // time step dt

    // Drift: x_n+1 = x_n + dt * v_n for both bodies, using the
    // previous step's velocities
    sys.a.x += dt * sys.a.v;
    sys.b.x += dt * sys.b.v;

    // Accumulate kicks at the updated positions x_n+1
    let mut dv = [NVec2::zeros(); 2];
    kicks.accumulate_kicks(&*sys, &mut dv);

    // Kick: v_n+1 = v_n + dv (no dt factor on the kick)
    sys.a.v += dv[0];
    sys.b.v += dv[1];

    // Did a body exit the screen?
    apply_boundary(&mut sys.a, bounds, params.dampening);
    apply_boundary(&mut sys.b, bounds, params.dampening);

    // Increment the system time by one full step
    sys.t += dt;
}
