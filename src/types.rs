use glam::Vec2;
use std::time::Duration;

use crate::error::PhysicsError;

/// Stable handle of a body: its index in the registry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BodyHandle(pub u32);

impl BodyHandle {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Supported body shapes. Fixed for the lifetime of a body.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Shape {
    /// Circle; the body's position is its center.
    Circle { radius: f32 },
    /// Axis-aligned rectangle; the body's position is its min (top-left) corner.
    Rectangle { width: f32, height: f32 },
}

impl Shape {
    /// Full extents: `(radius, radius)` for circles, `(width, height)` for rectangles.
    pub fn size(self) -> Vec2 {
        match self {
            Shape::Circle { radius } => Vec2::splat(radius),
            Shape::Rectangle { width, height } => Vec2::new(width, height),
        }
    }
}

/// Axis-aligned bounds.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

/// World-space circle used by the narrow phase.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CircleShape {
    pub center: Vec2,
    pub radius: f32,
}

/// World-space rectangle used by the narrow phase (centered form).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RectShape {
    pub center: Vec2,
    pub half_extents: Vec2,
}

/// A body's shape placed in the world.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Collider {
    Circle(CircleShape),
    Rect(RectShape),
}

/// Raw contact between two primitives.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Contact {
    /// Unit normal pointing from the reference shape (A) toward B.
    pub normal: Vec2,
    /// Penetration depth (>= 0).
    pub penetration: f32,
}

/// Contact between two registry bodies. Lives for one step only.
///
/// For mixed pairs `a` is always the rectangle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Manifold {
    pub a: BodyHandle,
    pub b: BodyHandle,
    pub normal: Vec2,
    pub penetration: f32,
}

impl Manifold {
    pub fn new(a: BodyHandle, b: BodyHandle, contact: Contact) -> Self {
        Self {
            a,
            b,
            normal: contact.normal,
            penetration: contact.penetration,
        }
    }
}

/// Simulation tunables.
#[derive(Clone, Debug)]
pub struct SimConfig {
    /// Maximum number of bodies the registry accepts.
    pub capacity: usize,
    /// Fraction of the remaining penetration removed per step (Baumgarte percent).
    pub correction_percent: f32,
    /// Penetration tolerated without correction.
    pub correction_slop: f32,
    /// Steering stops once the body center is closer than this to its target.
    pub arrival_threshold: f32,
    /// Steps per second expected from the external frame clock.
    pub frame_rate: u32,
    /// Record per-phase timings for the last step.
    pub enable_timing: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            capacity: 100,
            correction_percent: 0.2,
            correction_slop: 0.01,
            arrival_threshold: 1.0,
            frame_rate: 60,
            enable_timing: false,
        }
    }
}

impl SimConfig {
    /// Check the ranges every other module relies on.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        if self.capacity == 0 {
            return Err(PhysicsError::InvalidConfig("capacity must be at least 1"));
        }
        // Handles are u32 indices
        if self.capacity > u32::MAX as usize {
            return Err(PhysicsError::InvalidConfig("capacity must fit in a u32 handle"));
        }
        if !(self.correction_percent > 0.0 && self.correction_percent <= 1.0) {
            return Err(PhysicsError::InvalidConfig(
                "correction_percent must lie in (0, 1]",
            ));
        }
        if !(self.correction_slop >= 0.0 && self.correction_slop.is_finite()) {
            return Err(PhysicsError::InvalidConfig(
                "correction_slop must be finite and non-negative",
            ));
        }
        if !(self.arrival_threshold > 0.0 && self.arrival_threshold.is_finite()) {
            return Err(PhysicsError::InvalidConfig(
                "arrival_threshold must be finite and positive",
            ));
        }
        if self.frame_rate == 0 {
            return Err(PhysicsError::InvalidConfig("frame_rate must be at least 1"));
        }
        Ok(())
    }

    /// Duration of one step at `frame_rate`.
    pub fn frame_time(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.frame_rate.max(1) as f64)
    }
}

/// Counters for one completed step.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    pub bodies: usize,
    /// Pairs handed from the broad phase to the narrow phase.
    pub pairs_tested: usize,
    /// Pairs the narrow phase found in contact.
    pub contacts: usize,
    /// Contacts that received an impulse.
    pub resolved: usize,
    /// Contacts skipped because the bodies were already separating.
    pub separating: usize,
    /// Contacts skipped because both bodies have zero inverse mass.
    pub immovable: usize,
    /// Bodies that reached their target this step.
    pub arrivals: usize,
}

/// Timing breakdown for the last step (milliseconds).
#[derive(Copy, Clone, Debug, Default)]
pub struct StepTiming {
    pub step_ms: f64,
    pub bounds_ms: f64,
    pub narrowphase_ms: f64,
    pub resolve_ms: f64,
    pub steer_ms: f64,
    pub integrate_ms: f64,
}

/// Read-only snapshot of one body for a renderer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BodyView {
    pub handle: BodyHandle,
    pub shape: Shape,
    pub position: Vec2,
    pub size: Vec2,
    pub bounding_box: Aabb,
    pub velocity: Vec2,
    pub target: Option<Vec2>,
    pub collided: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let cfg = SimConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.frame_time(), Duration::from_secs_f64(1.0 / 60.0));
    }

    #[test]
    fn test_config_ranges() {
        let bad = [
            SimConfig { capacity: 0, ..Default::default() },
            SimConfig { correction_percent: 1.5, ..Default::default() },
            SimConfig { correction_slop: -0.1, ..Default::default() },
            SimConfig { arrival_threshold: 0.0, ..Default::default() },
            SimConfig { frame_rate: 0, ..Default::default() },
        ];
        for cfg in bad {
            assert!(matches!(cfg.validate(), Err(PhysicsError::InvalidConfig(_))), "{cfg:?}");
        }
    }

    #[test]
    fn test_shape_size() {
        assert_eq!(Shape::Circle { radius: 3.0 }.size(), Vec2::splat(3.0));
        assert_eq!(Shape::Rectangle { width: 2.0, height: 5.0 }.size(), Vec2::new(2.0, 5.0));
    }
}
