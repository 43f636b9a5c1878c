//! impulse2d: small 2D rigid-body engine (circles + axis-aligned rectangles,
//! impulse resolution, positional correction, target steering)

pub mod api;
pub mod body;
pub mod broadphase;
pub mod error;
pub mod math;
pub mod narrowphase;
pub mod resolution;
pub mod steering;
pub mod types;
pub mod world;

pub use crate::api::*;
pub use crate::body::{Body, BodyDesc, NO_TARGET};
pub use crate::error::PhysicsError;
pub use crate::types::*;
pub use crate::world::PhysicsWorld;
