//! Per-ball state machine.
//!
//! Each ball advances through three phases:
//!
//! ```text
//! Flying ──(impact, apex ≤ 0.1 m)──→ Rolling ──(speed² ≤ 1e-4)──→ Idle
//!    ↺ (impact, apex > 0.1 m: rebound and keep flying)
//! ```
//!
//! While **Flying** the full aerodynamic model applies: spin decays
//! exponentially from the rate at the last launch or bounce, the wind
//! vector is sampled at the ball's height, coefficients come from the
//! tabulated lookup on the ground-relative speed, and the net force
//! integrates with semi-implicit Euler. Every flying tick ends with a
//! swept-sphere collision query against the static mesh.
//!
//! While **Rolling** only a constant-magnitude friction force acts, on a
//! level surface, until the ball is slow enough to stop. **Idle** is a
//! no-op until the pool slot is reused.
//!
//! The per-step force breakdown (gravity, lift, drag, net, wind) stays on
//! the ball for diagnostic display.

use crate::aero::lift_and_drag_coefficients;
use crate::collision::{resolve_rebound, CollisionMesh, HeightTracker, SweptSphere};
use crate::forces::{
    decayed_spin_rate, drag_force, gravity_force, lift_force, wind_vector, ForceBreakdown,
};
use crate::types::{constants, BallPhase, BallProperties, LaunchParams, SurfaceProperties, Vec3, Wind};

/// One simulated projectile.
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    /// Tee position the ball was launched from
    pub start_position: Vec3,
    pub position: Vec3,
    pub velocity: Vec3,
    pub acceleration: Vec3,
    /// Wind vector experienced during the last tick
    pub wind_vector: Vec3,

    /// Unit rotation axis
    pub spin_axis: Vec3,
    /// Current spin rate (RPM)
    pub spin_rate: f64,
    /// Spin rate at the last launch or bounce; the decay envelope starts here
    pub reference_spin_rate: f64,

    /// Force breakdown from the last tick
    pub forces: ForceBreakdown,

    pub phase: BallPhase,
    /// Seconds in flight since the last launch or bounce
    pub flight_time: f64,
    /// Current and maximum height above the contact plane
    pub heights: HeightTracker,
    /// Set at spawn, stays set until the slot is reused
    pub alive: bool,
}

impl Ball {
    /// Create a flying ball on the tee with the given launch conditions.
    ///
    /// Velocity starts as a down-range vector rotated up by the launch
    /// angle, then around the vertical by the heading. The spin axis
    /// starts as the right-pointing reference axis, rotated by the same
    /// heading and then tilted by the spin-axis angle.
    pub fn launch(params: &LaunchParams, props: &BallProperties) -> Self {
        let start_position = Vec3::new(0.0, constants::TEE_HEIGHT + props.radius, 0.0);

        let velocity = Vec3::new(0.0, 0.0, params.speed)
            .rotated_x(-params.angle)
            .rotated_y(params.heading);

        let spin_axis = Vec3::new(1.0, 0.0, 0.0)
            .rotated_y(params.heading)
            .rotated_z(params.spin_axis_angle);

        Self {
            start_position,
            position: start_position,
            velocity,
            acceleration: Vec3::ZERO,
            wind_vector: Vec3::ZERO,
            spin_axis,
            spin_rate: params.spin_rate,
            reference_spin_rate: params.spin_rate,
            forces: ForceBreakdown {
                gravity: gravity_force(props.mass),
                ..ForceBreakdown::default()
            },
            phase: BallPhase::Flying,
            flight_time: 0.0,
            heights: HeightTracker::default(),
            alive: true,
        }
    }

    /// Advance this ball by one fixed timestep.
    pub fn simulate(
        &mut self,
        wind: &Wind,
        mesh: &CollisionMesh,
        props: &BallProperties,
        surface: &SurfaceProperties,
        dt: f64,
    ) {
        if !self.alive {
            return;
        }

        match self.phase {
            BallPhase::Idle => {}
            BallPhase::Flying => {
                self.simulate_flying(wind, props, dt);
                self.handle_collision(mesh, props, surface, dt);
            }
            BallPhase::Rolling => {
                self.simulate_rolling(props, surface, dt);
            }
        }
    }

    /// One flying tick: spin decay, wind, aerodynamic forces, integration.
    fn simulate_flying(&mut self, wind: &Wind, props: &BallProperties, dt: f64) {
        self.spin_rate = decayed_spin_rate(self.reference_spin_rate, self.flight_time);

        self.wind_vector = wind_vector(wind, self.position.y);

        let ground_velocity = self.velocity - self.wind_vector;

        let coefficients =
            lift_and_drag_coefficients(ground_velocity.magnitude_squared(), self.spin_rate);

        self.forces.lift = lift_force(&ground_velocity, &self.spin_axis, coefficients.lift);
        self.forces.drag = drag_force(&ground_velocity, coefficients.drag);
        self.forces.net = self.forces.gravity + self.forces.lift + self.forces.drag;

        self.integrate(props.mass, dt);

        self.flight_time += dt;
    }

    /// Collision query and the bounce-vs-roll transition.
    fn handle_collision(
        &mut self,
        mesh: &CollisionMesh,
        props: &BallProperties,
        surface: &SurfaceProperties,
        dt: f64,
    ) {
        let sphere = SweptSphere {
            position: self.position,
            velocity: self.velocity,
            radius: props.radius,
        };

        let Some(impact) = sphere.first_impact(mesh, dt, &mut self.heights) else {
            return;
        };

        log::debug!(
            "Impact: velocity ({:.2}, {:.2}, {:.2}), normal ({:.2}, {:.2}, {:.2}), \
             axis ({:.2}, {:.2}, {:.2}), spin {:.2} RPM, apex {:.3} m",
            self.velocity.x,
            self.velocity.y,
            self.velocity.z,
            impact.normal.x,
            impact.normal.y,
            impact.normal.z,
            self.spin_axis.x,
            self.spin_axis.y,
            self.spin_axis.z,
            self.spin_rate,
            self.heights.max,
        );

        self.position = impact.point + impact.normal * props.radius;
        self.flight_time = 0.0;

        if self.heights.max <= constants::MIN_BOUNCE_HEIGHT {
            // The bounce sequence has flattened out; start rolling.
            self.heights.reset_max();
            self.phase = BallPhase::Rolling;
            return;
        }

        let rebound = resolve_rebound(
            self.velocity,
            self.spin_axis,
            self.spin_rate,
            impact.normal,
            surface,
            props.radius,
        );

        self.velocity = rebound.velocity;
        self.spin_axis = rebound.spin_axis;
        self.spin_rate = rebound.spin_rate;
        self.reference_spin_rate = rebound.spin_rate;

        self.heights.reset_max();
    }

    /// One rolling tick: level-surface friction only, no aerodynamics.
    fn simulate_rolling(&mut self, props: &BallProperties, surface: &SurfaceProperties, dt: f64) {
        self.acceleration = Vec3::ZERO;
        self.forces.lift = Vec3::ZERO;
        self.forces.drag = Vec3::ZERO;
        self.velocity.y = 0.0;

        if self.velocity.magnitude_squared() > constants::SPEED_EPSILON {
            let friction_direction = -self.velocity.normalized();
            self.forces.net = friction_direction * surface.rolling_friction;

            self.integrate(props.mass, dt);
        } else {
            self.velocity = Vec3::ZERO;
            self.spin_rate = 0.0;
            self.phase = BallPhase::Idle;
        }
    }

    /// Semi-implicit Euler step from the accumulated net force.
    fn integrate(&mut self, mass: f64, dt: f64) {
        self.acceleration = self.forces.net / mass;
        self.velocity += self.acceleration * dt;
        self.position += self.velocity * dt;
    }
}

// =============================================================================
// Tests
// =============================================================================
