//! Force contributors for the two-body engine
//!
//! Defines the `Kick` trait and the mutual Newtonian gravity law. A kick is
//! the velocity increment applied to each body once per step; it carries no
//! `dt` factor of its own, the step cadence is the implicit time unit.

use crate::simulation::states::{System, NVec2};

/// Collection of kick terms (gravity, drag, etc.)
/// Each term implements [`Kick`] and their contributions are summed
/// into one velocity increment per body
pub struct KickSet {
    terms: Vec<Box<dyn Kick + Send + Sync>>,
}

impl KickSet {
    /// Create an empty kick set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add a kick term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Kick + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total velocity increments for both bodies in `sys`
    /// - `out[0]` receives the sum of contributions on body `a`
    /// - `out[1]` receives the sum of contributions on body `b`
    pub fn accumulate_kicks(&self, sys: &System, out: &mut [NVec2; 2]) {
        // Zero buffer
        for k in out.iter_mut() {
            *k = NVec2::zeros();
        }
        // Iterate over all kick contributors
        for term in &self.terms {
            term.kick(sys, out);
        }
    }
}

impl Default for KickSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for per-step velocity-increment sources operating on [`System`]
/// Implementations add their contribution into `out[0]` (body `a`) and
/// `out[1]` (body `b`)
pub trait Kick {
    fn kick(&self, sys: &System, out: &mut [NVec2; 2]);
}

/// Mutual Newtonian gravity between the pair, no softening
///
/// Each body accelerates toward the other, scaled by the *other* body's
/// mass (the accelerating body's own mass cancels out of F = ma). With a
/// zero separation the direction vector is NaN and the velocities go NaN
/// with it; the coincident case is accepted, not guarded.
pub struct PairGravity {
    pub g: f64, // gravitational constant
}

impl Kick for PairGravity {
    fn kick(&self, sys: &System, out: &mut [NVec2; 2]) {
        // r is the displacement vector from a to b.
        // a feels a pull along +r, b feels a pull along -r.
        let r = sys.b.x - sys.a.x;

        // Separation distance |r|
        let d = r.norm();

        // Unit direction from a toward b
        let dir = r / d;

        // Kick magnitude: G / |r|^2
        let a_mag = self.g / (d * d);

        // Apply Newton's law in reduced form:
        // dv_a +=  (G / d^2) * m_b * dir
        // dv_b += -(G / d^2) * m_a * dir
        // (equal and opposite momentum change)
        out[0] += a_mag * sys.b.m * dir;
        out[1] -= a_mag * sys.a.m * dir;
    }
}
