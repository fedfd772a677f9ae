//! # GF Core
//!
//! A physics engine for realistic golf ball flight simulation.
//!
//! ## Architecture
//!
//! - `types`: Core data structures (Vec3, launch conditions, material properties)
//! - `aero`: Tabulated lift/drag coefficient lookup
//! - `forces`: Physical forces (gravity, lift, drag, wind, spin decay)
//! - `collision`: Swept-sphere detection against triangle meshes and bounce resolution
//! - `ball`: Per-ball flight/roll/idle state machine
//! - `world`: Ball pool and shared simulation conditions
//! - `time`: Fixed-timestep tick accumulation
//! - `materials`: YAML-based material configuration loader

pub mod aero;
pub mod ball;
pub mod collision;
pub mod forces;
pub mod materials;
pub mod time;
pub mod types;
pub mod world;
