//! Core types for the physics simulation.
//!
//! All units are SI:
//! - Position: meters (m)
//! - Velocity: meters per second (m/s)
//! - Spin rate: revolutions per minute (RPM)
//! - Mass: kilograms (kg)
//! - Force: Newtons (N)
//! - Angles: radians

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

// =============================================================================
// Vec3 - 3D Vector
// =============================================================================

/// A 3D vector used for positions, velocities, forces, and spin axes.
///
/// Coordinate system (right-handed):
/// - X: horizontal, positive to the right of the tee
/// - Y: vertical (positive upward)
/// - Z: horizontal, positive down range (toward the target)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Squared magnitude (avoids sqrt for comparisons)
    pub fn magnitude_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Magnitude (length) of the vector
    pub fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Returns a unit vector in the same direction, or zero if magnitude is zero
    pub fn normalized(&self) -> Self {
        let mag = self.magnitude();
        if mag < 1e-10 {
            Self::ZERO
        } else {
            *self / mag
        }
    }

    /// Dot product
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product
    pub fn cross(&self, other: &Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Projection onto the ground plane (Y component zeroed)
    pub fn horizontal(&self) -> Self {
        Self {
            x: self.x,
            y: 0.0,
            z: self.z,
        }
    }

    /// Rotation around the X axis by `angle` radians (right-hand rule)
    pub fn rotated_x(&self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            x: self.x,
            y: self.y * cos - self.z * sin,
            z: self.y * sin + self.z * cos,
        }
    }

    /// Rotation around the Y axis by `angle` radians (right-hand rule)
    pub fn rotated_y(&self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            x: self.x * cos + self.z * sin,
            y: self.y,
            z: -self.x * sin + self.z * cos,
        }
    }

    /// Rotation around the Z axis by `angle` radians (right-hand rule)
    pub fn rotated_z(&self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
            z: self.z,
        }
    }

    /// Linear interpolation between two vectors
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        *self + (*other - *self) * t
    }
}

// Operator overloads for Vec3
impl Add for Vec3 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;
    fn mul(self, scalar: f64) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }
}

impl Div<f64> for Vec3 {
    type Output = Self;
    fn div(self, scalar: f64) -> Self {
        Self {
            x: self.x / scalar,
            y: self.y / scalar,
            z: self.z / scalar,
        }
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl Default for Vec3 {
    fn default() -> Self {
        Self::ZERO
    }
}

// =============================================================================
// Spin Conversions
// =============================================================================

/// Convert revolutions per minute to radians per second.
pub fn rpm_to_rad_s(rpm: f64) -> f64 {
    rpm * 0.10471975511965977
}

/// Convert radians per second to revolutions per minute.
pub fn rad_s_to_rpm(rad_s: f64) -> f64 {
    rad_s * 9.549296585513727
}

// =============================================================================
// Ball Phase
// =============================================================================

/// Simulation phase of a ball.
///
/// The set is closed; every tick dispatches over it exhaustively, so a ball
/// can never reach an unhandled phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallPhase {
    /// At rest. Terminal until the slot is respawned.
    Idle,
    /// Airborne under gravity, lift, and drag; collision-checked.
    Flying,
    /// On the ground, decelerating under rolling friction.
    Rolling,
}

// =============================================================================
// Launch Parameters
// =============================================================================

/// Initial conditions for a launched ball.
///
/// `angle` is the elevation above the horizon, `heading` rotates the shot
/// around the vertical axis, and `spin_axis_angle` tilts the spin axis away
/// from pure backspin (a nonzero tilt produces draw/fade curvature).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaunchParams {
    /// Ball speed at launch (m/s)
    pub speed: f64,
    /// Launch elevation angle (rad)
    pub angle: f64,
    /// Horizontal heading (rad)
    pub heading: f64,
    /// Total spin rate at launch (RPM)
    pub spin_rate: f64,
    /// Spin axis tilt (rad), 0 = pure backspin
    pub spin_axis_angle: f64,
}

// =============================================================================
// Wind
// =============================================================================

/// Wind conditions for a world.
///
/// `direction` is a world-frame heading in radians. When `log_profile` is
/// set, wind speed is scaled with altitude using a logarithmic profile, so a
/// ball near the ground sees less wind than one at apex.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    /// Wind speed (m/s)
    pub speed: f64,
    /// Wind heading (rad)
    pub direction: f64,
    /// Apply the logarithmic altitude profile
    pub log_profile: bool,
}

impl Wind {
    /// Calm conditions.
    pub fn calm() -> Self {
        Self {
            speed: 0.0,
            direction: 0.0,
            log_profile: false,
        }
    }
}

impl Default for Wind {
    fn default() -> Self {
        Self::calm()
    }
}

// =============================================================================
// Material Properties
// =============================================================================

/// Physical properties of a ball.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BallProperties {
    pub name: String,
    pub mass: f64,
    pub radius: f64,
}

impl BallProperties {
    /// R&A/USGA conforming ball (45.9 g, 42.7 mm diameter)
    pub fn conforming() -> Self {
        Self {
            name: "Conforming".to_string(),
            mass: 0.0459,    // kg
            radius: 0.02135, // 21.35 mm
        }
    }
}

impl Default for BallProperties {
    fn default() -> Self {
        Self::conforming()
    }
}

/// Contact properties of the ground surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceProperties {
    pub name: String,
    /// Coefficient of restitution for the bounce
    pub restitution: f64,
    /// Coulomb friction coefficient at impact
    pub friction: f64,
    /// Constant decelerating force while rolling (N)
    pub rolling_friction: f64,
}

impl SurfaceProperties {
    /// Typical fairway turf.
    pub fn fairway() -> Self {
        Self {
            name: "Fairway".to_string(),
            restitution: 0.5,
            friction: 0.4,
            rolling_friction: 0.04,
        }
    }
}

impl Default for SurfaceProperties {
    fn default() -> Self {
        Self::fairway()
    }
}

// =============================================================================
// Collision Outcome
// =============================================================================

/// A confirmed swept-sphere impact within a timestep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Impact {
    /// Time of contact, within [0, dt]
    pub time: f64,
    /// Contact point on the surface
    pub point: Vec3,
    /// Surface normal at the contact point
    pub normal: Vec3,
}

// =============================================================================
// Physical Constants
// =============================================================================

/// Physical constants used in the simulation.
pub mod constants {
    /// Gravitational acceleration (m/s²)
    pub const GRAVITY: f64 = 9.81;

    /// 0.5 × reference cross-sectional area of a golf ball (0.001425 m²)
    /// × air density (1.2 kg/m³). Folded into lift/drag magnitudes.
    pub const AERO_FORCE_CONSTANT: f64 = 0.0008551855026042919;

    /// Time constant of the exponential spin decay (s). Spin drops roughly
    /// 4% per second.
    pub const SPIN_DECAY_TIME: f64 = 24.5;

    /// Apex height at or below which an impact ends the bounce sequence and
    /// the ball starts rolling (m)
    pub const MIN_BOUNCE_HEIGHT: f64 = 0.1;

    /// Squared speed at or below which a rolling ball comes to rest (m²/s²)
    pub const SPEED_EPSILON: f64 = 1e-4;

    /// Height at which the logarithmic wind profile reaches zero (m)
    pub const ROUGHNESS_LENGTH: f64 = 0.4;

    /// Reference height for the logarithmic wind profile (m)
    pub const WIND_REFERENCE_HEIGHT: f64 = 10.0;

    /// Tee height above the ground datum (1.5 in)
    pub const TEE_HEIGHT: f64 = 0.0381;

    /// Small value for floating-point comparisons
    pub const EPSILON: f64 = 1e-10;
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_operations() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(a - b, Vec3::new(-3.0, -3.0, -3.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(a.dot(&b), 32.0); // 1*4 + 2*5 + 3*6 = 32
    }

    #[test]
    fn test_vec3_cross_product() {
        let x = Vec3::new(1.0, 0.0, 0.0);
        let y = Vec3::new(0.0, 1.0, 0.0);
        let z = x.cross(&y);
        assert!((z.x).abs() < 1e-10);
        assert!((z.y).abs() < 1e-10);
        assert!((z.z - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_vec3_normalized() {
        let v = Vec3::new(3.0, 4.0, 0.0);
        let n = v.normalized();
        assert!((n.magnitude() - 1.0).abs() < 1e-10);
        assert!((n.x - 0.6).abs() < 1e-10);
        assert!((n.y - 0.8).abs() < 1e-10);
    }

    #[test]
    fn test_vec3_normalized_zero() {
        assert_eq!(Vec3::ZERO.normalized(), Vec3::ZERO);
    }

    #[test]
    fn test_rotated_x_elevates_forward_vector() {
        // Launch convention: rotated_x(-angle) lifts a down-range vector.
        let forward = Vec3::new(0.0, 0.0, 10.0);
        let launched = forward.rotated_x(-0.2);
        assert!(launched.y > 0.0, "Elevation should raise the vector");
        assert!(launched.z > 0.0 && launched.z < 10.0);
        assert!((launched.magnitude() - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_rotated_y_preserves_height() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        let r = v.rotated_y(1.3);
        assert!((r.y - 2.0).abs() < 1e-10);
        assert!((r.magnitude() - v.magnitude()).abs() < 1e-10);
    }

    #[test]
    fn test_rotated_z_tilts_spin_axis() {
        let axis = Vec3::new(1.0, 0.0, 0.0);
        let tilted = axis.rotated_z(std::f64::consts::FRAC_PI_2);
        assert!((tilted.x).abs() < 1e-10);
        assert!((tilted.y - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_rpm_conversion_round_trip() {
        let rpm = 2600.0;
        let back = rad_s_to_rpm(rpm_to_rad_s(rpm));
        assert!((back - rpm).abs() < 1e-9);

        // 1 revolution per second = 60 RPM = 2π rad/s
        assert!((rpm_to_rad_s(60.0) - std::f64::consts::TAU).abs() < 1e-9);
    }

    #[test]
    fn test_horizontal_projection() {
        let v = Vec3::new(3.0, 7.0, -4.0);
        assert_eq!(v.horizontal(), Vec3::new(3.0, 0.0, -4.0));
    }

    #[test]
    fn test_conforming_ball_properties() {
        let props = BallProperties::conforming();
        assert!((props.mass - 0.0459).abs() < 1e-12);
        assert!((props.radius - 0.02135).abs() < 1e-12);
    }
}
