//! Simulation world: the ball pool plus the shared environment.
//!
//! A [`World`] owns every live ball together with the conditions they all
//! share: the wind field, the ball construction, and the surface the
//! course is made of. One [`World::update`] call advances every ball by a
//! single fixed timestep against a caller-provided collision mesh.
//!
//! Balls live in a fixed-capacity pool. Spawning past the capacity is
//! rejected with an error rather than growing the pool, so a runaway
//! caller cannot blow up per-tick simulation cost.

use crate::ball::Ball;
use crate::collision::CollisionMesh;
use crate::types::{BallProperties, LaunchParams, SurfaceProperties, Wind};

/// Default ball pool capacity.
pub const MAX_BALLS: usize = 10_000;

/// Error type for pool exhaustion.
#[derive(Debug)]
pub struct CapacityError {
    pub capacity: usize,
}

impl std::fmt::Display for CapacityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ball pool full (capacity {})", self.capacity)
    }
}

impl std::error::Error for CapacityError {}

/// Fixed-capacity pool of simulated balls.
#[derive(Debug, Clone)]
pub struct BallPool {
    balls: Vec<Ball>,
    capacity: usize,
}

impl BallPool {
    pub fn new() -> Self {
        Self::with_capacity(MAX_BALLS)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            balls: Vec::new(),
            capacity,
        }
    }

    /// Launch a new ball, returning its pool index.
    pub fn spawn(
        &mut self,
        params: &LaunchParams,
        props: &BallProperties,
    ) -> Result<usize, CapacityError> {
        if self.balls.len() >= self.capacity {
            log::warn!("Ball pool full ({} balls), launch rejected", self.capacity);
            return Err(CapacityError {
                capacity: self.capacity,
            });
        }

        self.balls.push(Ball::launch(params, props));
        Ok(self.balls.len() - 1)
    }

    /// Remove the most recently spawned ball.
    pub fn pop_last(&mut self) -> Option<Ball> {
        self.balls.pop()
    }

    /// Remove every ball.
    pub fn clear(&mut self) {
        self.balls.clear();
    }

    pub fn get(&self, index: usize) -> Option<&Ball> {
        self.balls.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Ball> {
        self.balls.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Ball> {
        self.balls.iter()
    }

    pub fn len(&self) -> usize {
        self.balls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balls.is_empty()
    }
}

impl Default for BallPool {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything that changes per tick, plus the shared conditions.
///
/// `Clone` is cheap enough at pool scale that callers can snapshot the
/// world before a tick and interpolate between the two states for
/// rendering.
#[derive(Debug, Clone)]
pub struct World {
    pub pool: BallPool,
    pub wind: Wind,
    pub ball_properties: BallProperties,
    pub surface: SurfaceProperties,
}

impl World {
    pub fn new(ball_properties: BallProperties, surface: SurfaceProperties) -> Self {
        Self {
            pool: BallPool::new(),
            wind: Wind::calm(),
            ball_properties,
            surface,
        }
    }

    /// Launch a ball with the world's ball construction.
    pub fn launch(&mut self, params: &LaunchParams) -> Result<usize, CapacityError> {
        self.pool.spawn(params, &self.ball_properties)
    }

    /// Advance every ball by one fixed timestep.
    pub fn update(&mut self, mesh: &CollisionMesh, dt: f64) {
        for ball in &mut self.pool.balls {
            ball.simulate(&self.wind, mesh, &self.ball_properties, &self.surface, dt);
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new(BallProperties::conforming(), SurfaceProperties::fairway())
    }
}

// =============================================================================
// Tests
// =============================================================================
