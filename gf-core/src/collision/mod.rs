//! Collision handling for the ball against the static environment.
//!
//! This module handles:
//! - **Mesh**: the immutable triangle geometry the ball can hit
//! - **Detection**: finding when and where impacts occur (swept sphere)
//! - **Resolution**: computing post-impact velocity and spin

pub mod detection;
pub mod mesh;
pub mod resolution;

pub use detection::{HeightTracker, SweptSphere};
pub use mesh::{CollisionMesh, MeshError, Triangle, Vertex};
pub use resolution::{resolve_rebound, Rebound};
