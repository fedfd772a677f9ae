//! Swept sphere collision detection.
//!
//! Finds the earliest valid impact of a moving ball against the static
//! triangle mesh within one timestep. Each triangle is tested as its
//! supporting plane (anchored at the triangle's first vertex, using the
//! pre-averaged face normal): continuous detection solves for the time at
//! which the sphere center's signed distance reaches ± radius, so fast
//! balls cannot tunnel through the ground between ticks.
//!
//! The scan accepts the *first* triangle whose contact time falls inside
//! [0, dt], in buffer order, rather than the time-minimal hit across all
//! triangles. For sparse, non-overlapping ground geometry the two agree;
//! the approximation is ported deliberately and exercised in tests.
//!
//! The scan also maintains the ball's height bookkeeping: for every
//! triangle considered it measures the center's height above that plane
//! and tracks the running maximum since the last bounce, which later
//! drives the bounce-vs-roll decision.

use crate::collision::mesh::CollisionMesh;
use crate::types::{Impact, Vec3};

/// Running height-above-ground bookkeeping for one ball.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HeightTracker {
    /// Height above the most recently considered triangle plane (m)
    pub current: f64,
    /// Maximum height observed since the last bounce (m)
    pub max: f64,
}

impl HeightTracker {
    pub fn observe(&mut self, height: f64) {
        self.current = height;
        if height > self.max {
            self.max = height;
        }
    }

    /// Reset the apex tracker after a bounce.
    pub fn reset_max(&mut self) {
        self.max = 0.0;
    }
}

/// A sphere swept along its velocity for one timestep.
#[derive(Debug, Clone, Copy)]
pub struct SweptSphere {
    pub position: Vec3,
    pub velocity: Vec3,
    pub radius: f64,
}

impl SweptSphere {
    /// Test against the plane `normal · p = d`.
    ///
    /// Returns the contact time and surface contact point. A sphere
    /// already within `radius` of the plane reports an immediate hit at
    /// t = 0 from its current center; a sphere moving parallel to or away
    /// from the plane reports no hit. The returned time is unclamped —
    /// the caller decides whether it falls within the timestep.
    pub fn against_plane(&self, normal: &Vec3, d: f64) -> Option<(f64, Vec3)> {
        let distance = normal.dot(&self.position) - d;

        if distance.abs() <= self.radius {
            // Already overlapping the plane
            return Some((0.0, self.position));
        }

        let denom = normal.dot(&self.velocity);
        if denom * distance >= 0.0 {
            // Moving parallel to or away from the plane
            return None;
        }

        // Contact occurs when the signed distance reaches the radius on
        // the side the sphere started from.
        let r = if distance > 0.0 {
            self.radius
        } else {
            -self.radius
        };

        let time = (r - distance) / denom;
        let point = self.position + self.velocity * time - *normal * r;

        Some((time, point))
    }

    /// Scan the mesh for the first triangle hit within `dt`.
    ///
    /// Updates `heights` for every triangle considered, whether or not a
    /// collision is found.
    pub fn first_impact(
        &self,
        mesh: &CollisionMesh,
        dt: f64,
        heights: &mut HeightTracker,
    ) -> Option<Impact> {
        for triangle in mesh.triangles() {
            let anchor = mesh.vertex_position(triangle.a);
            let normal = triangle.normal;

            heights.observe((self.position - anchor).dot(&normal));

            let d = normal.dot(&anchor);
            if let Some((time, point)) = self.against_plane(&normal, d) {
                if (0.0..=dt).contains(&time) {
                    return Some(Impact {
                        time,
                        point,
                        normal,
                    });
                }
            }
        }

        None
    }
}

// =============================================================================
// Tests
// =============================================================================
