use glam::Vec2;
use thiserror::Error;

/// Errors reported by body creation and world construction.
///
/// Numerical degeneracies during a step are never errors; they fall back to
/// fixed directions or skip the affected pair.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PhysicsError {
    /// The registry already holds `capacity` bodies.
    #[error("body registry is full (capacity {capacity})")]
    CapacityExhausted { capacity: usize },
    /// Mass is negative or not finite. Zero is allowed and means static.
    #[error("mass must be finite and non-negative, got {0}")]
    InvalidMass(f32),
    #[error("restitution must lie in [0, 1], got {0}")]
    InvalidRestitution(f32),
    /// Shape extents must be finite and positive; positions must be finite.
    #[error("invalid shape size or placement {0:?}")]
    InvalidSize(Vec2),
    #[error("speed scale must be finite and non-negative, got {0}")]
    InvalidSpeed(f32),
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
}
