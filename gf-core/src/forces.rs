//! Physical forces acting on the ball.
//!
//! Pure functions computing the per-tick force breakdown for a ball in
//! flight:
//!
//! - **Gravity**: constant downward force, mass × g
//! - **Wind**: horizontal vector from heading and speed, optionally scaled
//!   by a logarithmic altitude profile
//! - **Lift**: Magnus force perpendicular to the ground-relative velocity
//!   and the spin axis, proportional to speed²
//! - **Drag**: air resistance opposing the ground-relative velocity,
//!   proportional to speed²
//! - **Spin decay**: exponential loss of spin over flight time
//!
//! Aerodynamic forces act on the *ground-relative* velocity (ball velocity
//! minus wind), not the raw velocity: a ball flying into a headwind sees a
//! higher airspeed and therefore more lift and drag.
//!
//! ```text
//! Backspin (axis +X, flying +Z):
//!     ↑ lift = cross(v_ground, axis) pushes the ball UP
//!     Ball carries farther than gravity alone would allow
//! ```

use crate::types::{constants, Vec3, Wind};

/// Per-tick force breakdown, retained on each ball for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ForceBreakdown {
    pub gravity: Vec3,
    pub lift: Vec3,
    pub drag: Vec3,
    pub net: Vec3,
}

/// Constant gravity force for a ball of the given mass, pointing down.
pub fn gravity_force(mass: f64) -> Vec3 {
    Vec3::new(0.0, mass * -constants::GRAVITY, 0.0)
}

/// Wind vector experienced by a ball at the given height.
///
/// The base vector is horizontal, built from the wind heading and speed.
/// With the logarithmic profile enabled, speed scales by
/// `ln(h / z0) / ln(h_ref / z0)` with roughness length z0 = 0.4 m and
/// reference height h_ref = 10 m; the height is clamped to z0 so the ratio
/// never drops below one.
pub fn wind_vector(wind: &Wind, height: f64) -> Vec3 {
    let base = Vec3::new(
        wind.speed * wind.direction.sin(),
        0.0,
        wind.speed * wind.direction.cos(),
    );

    if !wind.log_profile {
        return base;
    }

    let clamped_height = height.max(constants::ROUGHNESS_LENGTH);
    let scale = (clamped_height / constants::ROUGHNESS_LENGTH).ln()
        / (constants::WIND_REFERENCE_HEIGHT / constants::ROUGHNESS_LENGTH).ln();

    base * scale
}

/// Lift force for a ground-relative velocity and spin axis.
///
/// Acts perpendicular to the relative motion, along
/// `normalize(cross(v_ground, spin_axis))`, with magnitude k·Cl·|v_ground|².
/// Zero when the ground-relative speed is zero.
pub fn lift_force(ground_velocity: &Vec3, spin_axis: &Vec3, lift_coefficient: f64) -> Vec3 {
    let speed_sq = ground_velocity.magnitude_squared();
    if speed_sq <= 0.0 {
        return Vec3::ZERO;
    }

    let direction = ground_velocity.cross(spin_axis).normalized();
    let magnitude = constants::AERO_FORCE_CONSTANT * lift_coefficient * speed_sq;

    direction * magnitude
}

/// Drag force for a ground-relative velocity.
///
/// Acts opposite to the relative motion with magnitude k·Cd·|v_ground|².
/// Zero when the ground-relative speed is zero.
pub fn drag_force(ground_velocity: &Vec3, drag_coefficient: f64) -> Vec3 {
    let speed_sq = ground_velocity.magnitude_squared();
    if speed_sq <= 0.0 {
        return Vec3::ZERO;
    }

    let direction = -ground_velocity.normalized();
    let magnitude = constants::AERO_FORCE_CONSTANT * drag_coefficient * speed_sq;

    direction * magnitude
}

/// Spin rate after `flight_time` seconds of exponential decay from the rate
/// at the last launch or bounce.
pub fn decayed_spin_rate(spin_rate_at_launch: f64, flight_time: f64) -> f64 {
    spin_rate_at_launch * (-flight_time / constants::SPIN_DECAY_TIME).exp()
}

// =============================================================================
// Tests
// =============================================================================
