//! Rebound resolution for ground impacts.
//!
//! Computes post-impact velocity and spin from the incoming state and the
//! surface normal using a segmented sliding/rolling friction model.
//!
//! ## Model
//!
//! The impact is resolved in a local contact frame:
//!
//! ```text
//! y: surface normal
//! x: horizontal component of the incoming velocity, normalized
//! z: x × y
//! ```
//!
//! The normal component always reflects with restitution (v'_y = −e·v_y).
//! In each of the two tangential planes (x–y and z–y) the contact either
//! **slides** — Coulomb friction impulses reduce tangential velocity and
//! pump angular velocity — or **rolls** — velocity and spin jump straight
//! to the no-slip relation. The branch is picked per plane by comparing μ
//! against a critical value μc = 2(v_t + r·ω)/(7·v_y·(1+e)); sliding when
//! μ < μc.
//!
//! The two planes are resolved independently, a simplification that does
//! not capture coupled spin response after the bounce. Spin about the
//! normal axis is untouched (no friction torque about the normal is
//! modeled).
//!
//! An impact with no horizontal velocity leaves the tangential frame
//! undefined; that case degenerates to a pure normal reflection with the
//! spin state preserved.

use crate::types::{constants, rad_s_to_rpm, rpm_to_rad_s, SurfaceProperties, Vec3};

/// Post-impact kinematic state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rebound {
    pub velocity: Vec3,
    /// Renormalized rotation axis (zero if all spin was absorbed)
    pub spin_axis: Vec3,
    /// Spin rate (RPM)
    pub spin_rate: f64,
}

/// Frame-local sliding response in a tangential plane.
///
/// Returns the resolved tangential velocity and angular velocity.
fn slide(v_t: f64, v_y: f64, w: f64, e: f64, mu: f64, r: f64) -> (f64, f64) {
    let v_rt = v_t - mu * v_y.abs() * (1.0 + e);
    let w_r = ((5.0 * mu * v_y.abs()) / (2.0 * r)) * (1.0 + e) - w;
    (v_rt, w_r)
}

/// Frame-local no-slip (rolling) response in a tangential plane.
fn roll(v_t: f64, w: f64, r: f64) -> (f64, f64) {
    let v_rt = ((5.0 * v_t) - (2.0 * r * w)) / 7.0;
    let w_r = v_rt / r;
    (v_rt, w_r)
}

/// Resolve a confirmed ground impact.
///
/// `velocity` is the incoming velocity at the moment of contact;
/// `spin_axis`/`spin_rate` describe the incoming angular velocity (RPM);
/// `surface_normal` is the contact normal; `radius` the ball radius.
pub fn resolve_rebound(
    velocity: Vec3,
    spin_axis: Vec3,
    spin_rate: f64,
    surface_normal: Vec3,
    surface: &SurfaceProperties,
    radius: f64,
) -> Rebound {
    let e = surface.restitution;
    let mu = surface.friction;
    let r = radius;

    let angular_velocity = spin_axis * rpm_to_rad_s(spin_rate);

    let horizontal = velocity.horizontal();
    if horizontal.magnitude_squared() < constants::EPSILON {
        // Degenerate contact frame: no horizontal motion to align the
        // tangential axis with. Reflect the normal component and keep the
        // spin state as-is.
        let normal_speed = velocity.dot(&surface_normal);
        return Rebound {
            velocity: velocity - surface_normal * ((1.0 + e) * normal_speed),
            spin_axis,
            spin_rate,
        };
    }

    // Orthonormal contact frame
    let x_basis = horizontal.normalized();
    let y_basis = surface_normal;
    let z_basis = x_basis.cross(&y_basis).normalized();

    // Components in the contact frame
    let vx = velocity.dot(&x_basis);
    let vy = velocity.dot(&y_basis);
    let vz = velocity.dot(&z_basis);
    let wx = angular_velocity.dot(&x_basis);
    let wy = angular_velocity.dot(&y_basis);
    let wz = angular_velocity.dot(&z_basis);

    let restitution_term = 7.0 * (vy * (1.0 + e));

    // x–y plane: slide or roll
    let mu_critical_xy = (2.0 * (vx + r * wz)) / restitution_term;
    let (v_rx, w_rz) = if mu < mu_critical_xy {
        slide(vx, vy, wz, e, mu, r)
    } else {
        roll(vx, wz, r)
    };

    // z–y plane: the analogous decision on the perpendicular components
    let mu_critical_zy = (2.0 * (vz + r * wx)) / restitution_term;
    let (v_rz, w_rx) = if mu < mu_critical_zy {
        slide(vz, vy, wx, e, mu, r)
    } else {
        roll(vz, wx, r)
    };

    // Normal component reflects with restitution
    let v_ry = -(e * vy);

    // Recompose into world space; the basis is orthonormal, so the
    // inverse transform is the weighted sum of the basis vectors.
    let resolved_velocity = x_basis * v_rx + y_basis * v_ry + z_basis * v_rz;
    let resolved_angular = x_basis * w_rx + y_basis * wy + z_basis * w_rz;

    Rebound {
        velocity: resolved_velocity,
        spin_axis: resolved_angular.normalized(),
        spin_rate: rad_s_to_rpm(resolved_angular.magnitude()),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const RADIUS: f64 = 0.02135;

    fn fairway() -> SurfaceProperties {
        SurfaceProperties::fairway()
    }

    fn up() -> Vec3 {
        Vec3::new(0.0, 1.0, 0.0)
    }

    #[test]
    fn test_vertical_drop_reflects_with_restitution() {
        // Purely vertical impact, no spin: the degenerate-frame path.
        // Outgoing vertical speed is e × incoming; nothing else changes.
        let incoming = Vec3::new(0.0, -4.0, 0.0);
        let rebound = resolve_rebound(incoming, up(), 0.0, up(), &fairway(), RADIUS);

        assert!((rebound.velocity.y - 2.0).abs() < 1e-10);
        assert!(rebound.velocity.x.abs() < 1e-10);
        assert!(rebound.velocity.z.abs() < 1e-10);
        assert_eq!(rebound.spin_rate, 0.0);
    }

    #[test]
    fn test_vertical_drop_preserves_spin() {
        let incoming = Vec3::new(0.0, -4.0, 0.0);
        let axis = Vec3::new(1.0, 0.0, 0.0);
        let rebound = resolve_rebound(incoming, axis, 2600.0, up(), &fairway(), RADIUS);

        assert!((rebound.spin_rate - 2600.0).abs() < 1e-10);
        assert_eq!(rebound.spin_axis, axis);
    }

    #[test]
    fn test_normal_component_restitution() {
        // Shallow impact without spin takes the rolling branch; the
        // vertical component still reflects with e = 0.5.
        let incoming = Vec3::new(0.0, -5.0, 20.0);
        let rebound = resolve_rebound(incoming, Vec3::ZERO, 0.0, up(), &fairway(), RADIUS);

        assert!((rebound.velocity.y - 2.5).abs() < 1e-10);
    }

    #[test]
    fn test_spinless_impact_rolls() {
        // μc is negative for a descending ball without spin, so both
        // planes roll: forward speed drops to 5/7 and the contact spins
        // the ball up to the no-slip rate (topspin).
        let incoming = Vec3::new(0.0, -5.0, 20.0);
        let rebound = resolve_rebound(incoming, Vec3::ZERO, 0.0, up(), &fairway(), RADIUS);

        assert!((rebound.velocity.z - 20.0 * 5.0 / 7.0).abs() < 1e-9);
        assert!(rebound.velocity.x.abs() < 1e-9);

        // No-slip relation: ω = v / r
        let expected_rpm = rad_s_to_rpm((20.0 * 5.0 / 7.0) / RADIUS);
        assert!((rebound.spin_rate - expected_rpm).abs() < 1e-6);

        // Topspin after the bounce: axis along −X for +Z travel.
        assert!((rebound.spin_axis.x + 1.0).abs() < 1e-9);
        assert!((rebound.spin_axis.magnitude() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_heavy_backspin_slides() {
        // Slow, steep landing with strong backspin pushes μc above μ, so
        // the x–y plane slides: Coulomb friction knocks the forward speed
        // back by μ·|vy|·(1+e).
        let incoming = Vec3::new(0.0, -1.0, 1.0);
        let axis = Vec3::new(1.0, 0.0, 0.0);
        let spin_rpm = rad_s_to_rpm(200.0); // ~1900 RPM backspin
        let surface = fairway();

        let rebound = resolve_rebound(incoming, axis, spin_rpm, up(), &surface, RADIUS);

        let expected_forward = 1.0 - surface.friction * 1.0 * (1.0 + surface.restitution);
        assert!(
            (rebound.velocity.z - expected_forward).abs() < 1e-9,
            "Sliding friction should cut forward speed to {}, got {}",
            expected_forward,
            rebound.velocity.z
        );
        assert!((rebound.velocity.y - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_spin_axis_is_renormalized() {
        let incoming = Vec3::new(3.0, -6.0, 30.0);
        let axis = Vec3::new(1.0, 0.0, 0.0).rotated_z(0.3);
        let rebound = resolve_rebound(incoming, axis, 3000.0, up(), &fairway(), RADIUS);

        assert!((rebound.spin_axis.magnitude() - 1.0).abs() < 1e-10);
        assert!(rebound.spin_rate >= 0.0);
    }

    #[test]
    fn test_bounce_loses_energy() {
        let incoming = Vec3::new(0.0, -10.0, 40.0);
        let axis = Vec3::new(1.0, 0.0, 0.0);
        let rebound = resolve_rebound(incoming, axis, 2600.0, up(), &fairway(), RADIUS);

        assert!(
            rebound.velocity.magnitude() < incoming.magnitude(),
            "Bounce should not add translational energy"
        );
        assert!(rebound.velocity.y > 0.0, "Ball leaves the surface");
    }

    #[test]
    fn test_rebound_on_tilted_surface() {
        // A slightly tilted normal still produces an outgoing velocity on
        // the positive side of the surface.
        let normal = Vec3::new(0.1, 1.0, 0.0).normalized();
        let incoming = Vec3::new(0.0, -8.0, 25.0);
        let rebound = resolve_rebound(incoming, Vec3::new(1.0, 0.0, 0.0), 2000.0, normal, &fairway(), RADIUS);

        assert!(
            rebound.velocity.dot(&normal) > 0.0,
            "Outgoing velocity must point away from the surface"
        );
    }
}
