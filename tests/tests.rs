use tbsim::simulation::boundary::apply_boundary;
use tbsim::simulation::forces::{KickSet, PairGravity};
use tbsim::simulation::integrator::euler_step;
use tbsim::simulation::params::{Bounds, Parameters};
use tbsim::simulation::states::{Body, NVec2, System};
use tbsim::simulation::trajectory::Trajectory;
use tbsim::configuration::config::{BodyConfig, ScenarioConfig};
use tbsim::simulation::scenario::Scenario;
use tbsim::visualization::framebuffer::FrameBuffer;

/// Build a body at `(x, y)` with velocity `(vx, vy)`
pub fn body(x: f64, y: f64, vx: f64, vy: f64, m: f64, radius: f64) -> Body {
    Body {
        x: NVec2::new(x, y),
        v: NVec2::new(vx, vy),
        m,
        radius,
    }
}

/// Build a two-body System separated by `dist` along x, at rest
pub fn two_body_system(dist: f64, m1: f64, m2: f64) -> System {
    System {
        a: body(-dist / 2.0, 0.0, 0.0, 0.0, m1, 0.0),
        b: body(dist / 2.0, 0.0, 0.0, 0.0, m2, 0.0),
        t: 0.0,
    }
}

/// Default physics parameters for tests
pub fn test_params() -> Parameters {
    Parameters {
        delta_t: 0.1,
        g: 100.0,
        dampening: 0.98,
        trajectory_len: 2000,
        trajectory_width: 2.0,
    }
}

/// The 900x600 window rectangle
pub fn test_bounds() -> Bounds {
    Bounds {
        width: 900.0,
        height: 600.0,
    }
}

/// Build a gravity term + KickSet
pub fn gravity_set(p: &Parameters) -> KickSet {
    KickSet::new().with(PairGravity { g: p.g })
}

// ==================================================================================
// Gravity tests
// ==================================================================================

#[test]
fn gravity_newton_third_law() {
    let sys = two_body_system(1.0, 2.0, 3.0);
    let p = test_params();
    let kicks = gravity_set(&p);

    let mut dv = [NVec2::zeros(); 2];
    kicks.accumulate_kicks(&sys, &mut dv);

    let net = dv[0] * sys.a.m + dv[1] * sys.b.m;

    assert!(net.norm() < 1e-12, "Net momentum change not zero: {:?}", net);
}

#[test]
fn gravity_points_toward_other_body() {
    let sys = two_body_system(2.0, 1.0, 1.0);
    let p = test_params();
    let kicks = gravity_set(&p);

    let mut dv = [NVec2::zeros(); 2];
    kicks.accumulate_kicks(&sys, &mut dv);

    let dx = sys.b.x - sys.a.x;

    // Kick on a should point in the same direction as +dx (attraction)
    assert!(dx.norm() > 0.0);
    assert!(dv[0].dot(&dx) > 0.0, "Kick on a is not toward b");
    assert!(dv[1].dot(&dx) < 0.0, "Kick on b is not toward a");
}

#[test]
fn gravity_inverse_square_law() {
    let sys_r = two_body_system(1.0, 1.0, 1.0);
    let sys_2r = two_body_system(2.0, 1.0, 1.0);
    let p = test_params();
    let kicks = gravity_set(&p);

    let mut dv_r = [NVec2::zeros(); 2];
    let mut dv_2r = [NVec2::zeros(); 2];

    kicks.accumulate_kicks(&sys_r, &mut dv_r);
    kicks.accumulate_kicks(&sys_2r, &mut dv_2r);

    let ratio = dv_r[0].norm() / dv_2r[0].norm();

    assert!((ratio - 4.0).abs() < 1e-12, "Expected ~4x, got {}", ratio);
}

// ==================================================================================
// Boundary tests
// ==================================================================================

#[test]
fn boundary_reflects_with_dampening() {
    let bounds = test_bounds();
    let mut b = body(890.0, 300.0, 5.0, 0.0, 1.0, 30.0);

    apply_boundary(&mut b, &bounds, 0.98);

    // Center clamped so the edge sits exactly on the wall
    assert_eq!(b.x.x, 870.0);
    // Reflected component is exactly -0.98 x the original
    assert_eq!(b.v.x, -5.0 * 0.98);
    // Other axis untouched
    assert_eq!(b.x.y, 300.0);
    assert_eq!(b.v.y, 0.0);
}

#[test]
fn boundary_idempotent_once_inside() {
    let bounds = test_bounds();
    let mut b = body(890.0, 595.0, 5.0, 3.0, 1.0, 30.0);

    apply_boundary(&mut b, &bounds, 0.98);
    let after_first = b.clone();
    apply_boundary(&mut b, &bounds, 0.98);

    assert_eq!(b.x, after_first.x);
    assert_eq!(b.v, after_first.v);
}

#[test]
fn boundary_corner_corrects_both_axes() {
    let bounds = test_bounds();
    let mut b = body(10.0, 10.0, -4.0, -2.0, 1.0, 30.0);

    apply_boundary(&mut b, &bounds, 0.98);

    assert_eq!(b.x.x, 30.0);
    assert_eq!(b.x.y, 30.0);
    assert_eq!(b.v.x, 4.0 * 0.98);
    assert_eq!(b.v.y, 2.0 * 0.98);
}

// ==================================================================================
// Integrator tests
// ==================================================================================

#[test]
fn euler_step_positions_use_previous_velocity() {
    // With no kick terms the step is pure drift, and even with gravity the
    // position update must not see the post-kick velocities
    let p = test_params();
    let bounds = test_bounds();
    let kicks = gravity_set(&p);

    let mut sys = System {
        a: body(200.0, 200.0, 10.0, 0.0, 100.0, 30.0),
        b: body(400.0, 400.0, -10.0, 0.0, 50.0, 25.0),
        t: 0.0,
    };
    euler_step(&mut sys, &kicks, &p, &bounds);

    assert_eq!(sys.a.x, NVec2::new(201.0, 200.0));
    assert_eq!(sys.b.x, NVec2::new(399.0, 400.0));
    assert!((sys.t - 0.1).abs() < 1e-15);
}

#[test]
fn euler_step_matches_reference_computation() {
    let p = test_params();
    let bounds = test_bounds();
    let kicks = gravity_set(&p);

    let mut sys = System {
        a: body(200.0, 200.0, 10.0, 0.0, 100.0, 30.0),
        b: body(400.0, 400.0, -10.0, 0.0, 50.0, 25.0),
        t: 0.0,
    };
    euler_step(&mut sys, &kicks, &p, &bounds);

    // Reference: drift to (201,200)/(399,400), then kick from the updated
    // separation (198, 200)
    let d = (198.0f64 * 198.0 + 200.0 * 200.0).sqrt();
    let a_mag = 100.0 / (d * d);
    let dir = NVec2::new(198.0 / d, 200.0 / d);
    let expect_va = NVec2::new(10.0, 0.0) + a_mag * 50.0 * dir;
    let expect_vb = NVec2::new(-10.0, 0.0) - a_mag * 100.0 * dir;

    assert!((sys.a.v - expect_va).norm() < 1e-9, "vA {:?} != {:?}", sys.a.v, expect_va);
    assert!((sys.b.v - expect_vb).norm() < 1e-9, "vB {:?} != {:?}", sys.b.v, expect_vb);
}

#[test]
fn euler_step_conserves_momentum_away_from_walls() {
    let p = test_params();
    let bounds = test_bounds();
    let kicks = gravity_set(&p);

    let mut sys = System {
        a: body(300.0, 300.0, 10.0, 0.0, 100.0, 30.0),
        b: body(500.0, 300.0, -10.0, 0.0, 50.0, 25.0),
        t: 0.0,
    };
    let before = sys.a.m * sys.a.v + sys.b.m * sys.b.v;

    for _ in 0..10 {
        euler_step(&mut sys, &kicks, &p, &bounds);
    }

    let after = sys.a.m * sys.a.v + sys.b.m * sys.b.v;
    assert!((after - before).norm() < 1e-9, "Momentum drifted: {:?} -> {:?}", before, after);
}

// ==================================================================================
// Trajectory tests
// ==================================================================================

#[test]
fn trajectory_partial_fill_is_newest_last() {
    let mut trail = Trajectory::new(2000);
    for i in 0..5 {
        trail.push(&body(i as f64, 0.0, 0.0, 0.0, 1.0, 30.0));
    }

    assert_eq!(trail.len(), 5);
    let xs: Vec<f64> = trail.iter().map(|p| p.x.x).collect();
    assert_eq!(xs, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn trajectory_drops_oldest_first() {
    // 5 pushes into a 3-capacity buffer leave the last 3 in order
    let mut trail = Trajectory::new(3);
    for i in 1..=5 {
        trail.push(&body(i as f64, 0.0, 0.0, 0.0, 1.0, 30.0));
        assert!(trail.len() <= 3);
    }

    assert_eq!(trail.len(), 3);
    let xs: Vec<f64> = trail.iter().map(|p| p.x.x).collect();
    assert_eq!(xs, vec![3.0, 4.0, 5.0]);
}

#[test]
fn trajectory_records_radius() {
    let mut trail = Trajectory::new(3);
    trail.push(&body(1.0, 2.0, 0.0, 0.0, 1.0, 30.0));

    let point = trail.iter().next().unwrap();
    assert_eq!(point.x, NVec2::new(1.0, 2.0));
    assert_eq!(point.radius, 30.0);
}

// ==================================================================================
// Rasterizer tests
// ==================================================================================

/// Count pixels of `color` in the buffer
fn count_pixels(fb: &FrameBuffer, color: u32) -> usize {
    let mut n = 0;
    for y in 0..fb.height() as i64 {
        for x in 0..fb.width() as i64 {
            if fb.pixel(x, y) == Some(color) {
                n += 1;
            }
        }
    }
    n
}

#[test]
fn fill_circle_radius_one_is_single_pixel() {
    let mut fb = FrameBuffer::new(50, 50);
    fb.fill_circle(NVec2::new(25.0, 25.0), 1.0, 0xffffff);

    assert_eq!(count_pixels(&fb, 0xffffff), 1);
    assert_eq!(fb.pixel(25, 25), Some(0xffffff));
}

#[test]
fn fill_circle_radius_two_is_nine_pixel_block() {
    // dist^2 < 4 holds for the 3x3 block around the center and nothing else
    let mut fb = FrameBuffer::new(50, 50);
    fb.fill_circle(NVec2::new(25.0, 25.0), 2.0, 0xffffff);

    assert_eq!(count_pixels(&fb, 0xffffff), 9);
    for dx in -1..=1i64 {
        for dy in -1..=1i64 {
            assert_eq!(fb.pixel(25 + dx, 25 + dy), Some(0xffffff));
        }
    }
}

#[test]
fn fill_circle_boundary_pixels_excluded() {
    // Pixels at exactly dist^2 == r^2 stay untouched (strict inequality)
    let mut fb = FrameBuffer::new(50, 50);
    fb.fill_circle(NVec2::new(25.0, 25.0), 2.0, 0xffffff);

    assert_eq!(fb.pixel(27, 25), Some(0));
    assert_eq!(fb.pixel(23, 25), Some(0));
    assert_eq!(fb.pixel(25, 27), Some(0));
    assert_eq!(fb.pixel(25, 23), Some(0));
}

#[test]
fn fill_circle_clips_at_buffer_edges() {
    // A disc hanging off the top-left corner keeps only its in-bounds quarter
    let mut fb = FrameBuffer::new(50, 50);
    fb.fill_circle(NVec2::new(0.0, 0.0), 2.0, 0xffffff);

    assert_eq!(count_pixels(&fb, 0xffffff), 4);
    assert_eq!(fb.pixel(0, 0), Some(0xffffff));
    assert_eq!(fb.pixel(1, 1), Some(0xffffff));
}

#[test]
fn clear_fills_everything() {
    let mut fb = FrameBuffer::new(10, 10);
    fb.clear(0x1b1b1b);

    assert_eq!(count_pixels(&fb, 0x1b1b1b), 100);
}

// ==================================================================================
// Scenario tests
// ==================================================================================

#[test]
fn default_scenario_builds_fixed_setup() {
    let scenario = Scenario::build_scenario(ScenarioConfig::default()).unwrap();

    assert_eq!(scenario.system.a.x, NVec2::new(200.0, 200.0));
    assert_eq!(scenario.system.a.m, 100.0);
    assert_eq!(scenario.system.b.v, NVec2::new(-10.0, 0.0));
    assert_eq!(scenario.bounds.width, 900.0);
    assert_eq!(scenario.parameters.trajectory_len, 2000);
    assert_eq!(scenario.parameters.dampening, 0.98);
}

#[test]
fn scenario_rejects_wrong_body_count() {
    let cfg = ScenarioConfig {
        bodies: vec![BodyConfig {
            x: vec![200.0, 200.0],
            v: vec![10.0, 0.0],
            m: 100.0,
            radius: 30.0,
        }],
        ..Default::default()
    };

    assert!(Scenario::build_scenario(cfg).is_err());
}
