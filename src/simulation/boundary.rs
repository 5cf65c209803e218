//! Screen boundary collision response
//!
//! Clamps a body back inside the window rectangle and reflects the
//! corresponding velocity component, losing a fixed fraction of speed on
//! that axis per bounce.

use crate::simulation::params::Bounds;
use crate::simulation::states::Body;

/// Bounce `body` off the four walls of `bounds`.
///
/// The four checks run independently in the order right, bottom, top, left,
/// so a body pushed into a corner gets both axes corrected in one call. When
/// the body's edge has crossed a wall its center is clamped so the edge sits
/// exactly on the wall and the axis velocity becomes `-v * dampening`.
/// Calling this again on a body fully inside the bounds is a no-op.
pub fn apply_boundary(body: &mut Body, bounds: &Bounds, dampening: f64) {
    if body.x.x + body.radius > bounds.width {
        body.x.x = bounds.width - body.radius;
        body.v.x = -body.v.x * dampening;
    }
    if body.x.y + body.radius > bounds.height {
        body.x.y = bounds.height - body.radius;
        body.v.y = -body.v.y * dampening;
    }
    if body.x.y - body.radius < 0.0 {
        body.x.y = body.radius;
        body.v.y = -body.v.y * dampening;
    }
    if body.x.x - body.radius < 0.0 {
        body.x.x = body.radius;
        body.v.x = -body.v.x * dampening;
    }
}
