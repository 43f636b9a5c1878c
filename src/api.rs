use glam::Vec2;

use crate::body::{Body, BodyDesc};
use crate::error::PhysicsError;
use crate::types::*;

/// Public API contract for the simulation world.
pub trait PhysicsWorldApi {
    /// Construct an empty world. Fails if `cfg` does not validate.
    fn new(cfg: SimConfig) -> Result<Self, PhysicsError>
    where
        Self: Sized;

    // --- Registry ----------------------------------------------------------

    /// Append a body and return its handle. Fails once capacity is exhausted.
    fn create_body(&mut self, desc: BodyDesc) -> Result<BodyHandle, PhysicsError>;

    /// Convenience: circle with default speed/mass/restitution.
    fn create_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        target: Option<Vec2>,
    ) -> Result<BodyHandle, PhysicsError>;

    /// Convenience: rectangle (min corner + full size) with defaults.
    fn create_rect(
        &mut self,
        min_corner: Vec2,
        size: Vec2,
        target: Option<Vec2>,
    ) -> Result<BodyHandle, PhysicsError>;

    // --- Stepping ----------------------------------------------------------

    /// Run one full step: bounds, broad phase, narrow phase, resolution,
    /// steering, integration.
    fn step(&mut self) -> StepReport;

    // --- Read access -------------------------------------------------------

    fn body(&self, handle: BodyHandle) -> Option<&Body>;

    fn bodies(&self) -> &[Body];

    /// Whether the body was in contact during the last step.
    fn collided(&self, handle: BodyHandle) -> bool;

    /// Render snapshot of every body, in handle order.
    fn views(&self) -> Vec<BodyView>;

    // --- Queries -----------------------------------------------------------

    /// Handles of all bodies whose shape contains `p`.
    fn query_point(&self, p: Vec2) -> Vec<BodyHandle>;

    /// Narrow-phase test between two bodies without touching any state.
    fn overlap_pair(&self, a: BodyHandle, b: BodyHandle) -> Option<Manifold>;
}

/// Shape-pair contact tests.
///
/// The mixed test only accepts `(rect, circle)`; the circle-first order cannot
/// be expressed.
pub trait NarrowphaseApi {
    fn circle_circle(a: CircleShape, b: CircleShape) -> Option<Contact>;
    fn rect_rect(a: RectShape, b: RectShape) -> Option<Contact>;
    fn rect_circle(rect: RectShape, circle: CircleShape) -> Option<Contact>;

    fn point_in_circle(p: Vec2, circle: CircleShape) -> bool;
    fn point_in_rect(p: Vec2, rect: RectShape) -> bool;
}
