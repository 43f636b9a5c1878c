use glam::Vec2;

use crate::error::PhysicsError;
use crate::types::*;

/// Legacy "no target" marker accepted by [`BodyDesc::target`].
pub const NO_TARGET: Vec2 = Vec2::new(-1.0, -1.0);

/// Creation request for one body.
///
/// Defaults: speed scale 1, no target, mass 1, restitution 0.5.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BodyDesc {
    pub shape: Shape,
    /// Center for circles, min corner for rectangles.
    pub position: Vec2,
    pub target: Option<Vec2>,
    pub speed_scale: f32,
    /// 0 means infinite mass (static body).
    pub mass: f32,
    pub restitution: f32,
}

impl BodyDesc {
    pub fn new(shape: Shape, position: Vec2) -> Self {
        Self {
            shape,
            position,
            target: None,
            speed_scale: 1.0,
            mass: 1.0,
            restitution: 0.5,
        }
    }

    pub fn circle(center: Vec2, radius: f32) -> Self {
        Self::new(Shape::Circle { radius }, center)
    }

    pub fn rect(min_corner: Vec2, size: Vec2) -> Self {
        Self::new(
            Shape::Rectangle {
                width: size.x,
                height: size.y,
            },
            min_corner,
        )
    }

    /// Set the steering target. [`NO_TARGET`] clears it.
    pub fn target(mut self, target: Vec2) -> Self {
        self.target = if target == NO_TARGET { None } else { Some(target) };
        self
    }

    pub fn speed(mut self, speed_scale: f32) -> Self {
        self.speed_scale = speed_scale;
        self
    }

    pub fn mass(mut self, mass: f32) -> Self {
        self.mass = mass;
        self
    }

    pub fn restitution(mut self, restitution: f32) -> Self {
        self.restitution = restitution;
        self
    }

    /// Static body: zero inverse mass, never moved by impulses or correction.
    pub fn immovable(self) -> Self {
        self.mass(0.0)
    }
}

/// One rigid body in the registry.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Body {
    pub shape: Shape,
    /// Center for circles, min corner for rectangles.
    pub position: Vec2,
    pub velocity: Vec2,
    /// Multiplier applied to the velocity at integration.
    pub speed_scale: f32,
    pub mass: f32,
    /// Derived from `mass` once at creation; 0 for static bodies.
    pub inverse_mass: f32,
    pub restitution: f32,
    pub target: Option<Vec2>,
    /// Refreshed at the start of every step.
    pub bounding_box: Aabb,
}

impl Body {
    /// Validate a creation request and build the body.
    pub fn from_desc(desc: BodyDesc) -> Result<Self, PhysicsError> {
        let size = desc.shape.size();
        if !(size.x > 0.0 && size.y > 0.0 && size.is_finite()) || !desc.position.is_finite() {
            return Err(PhysicsError::InvalidSize(size));
        }
        if !(desc.mass >= 0.0 && desc.mass.is_finite()) {
            return Err(PhysicsError::InvalidMass(desc.mass));
        }
        if !(0.0..=1.0).contains(&desc.restitution) {
            return Err(PhysicsError::InvalidRestitution(desc.restitution));
        }
        if !(desc.speed_scale >= 0.0 && desc.speed_scale.is_finite()) {
            return Err(PhysicsError::InvalidSpeed(desc.speed_scale));
        }
        if let Some(t) = desc.target {
            if !t.is_finite() {
                return Err(PhysicsError::InvalidSize(t));
            }
        }

        let inverse_mass = if desc.mass == 0.0 { 0.0 } else { 1.0 / desc.mass };
        let mut body = Self {
            shape: desc.shape,
            position: desc.position,
            velocity: Vec2::ZERO,
            speed_scale: desc.speed_scale,
            mass: desc.mass,
            inverse_mass,
            restitution: desc.restitution,
            target: desc.target,
            bounding_box: Aabb::default(),
        };
        body.refresh_bounds();
        Ok(body)
    }

    /// Full extents; for circles both components equal the radius.
    pub fn size(&self) -> Vec2 {
        self.shape.size()
    }

    pub fn half_extents(&self) -> Vec2 {
        match self.shape {
            Shape::Circle { radius } => Vec2::splat(radius),
            Shape::Rectangle { width, height } => Vec2::new(width, height) * 0.5,
        }
    }

    /// Canonical reference point shared by the narrow phase and steering.
    pub fn center(&self) -> Vec2 {
        match self.shape {
            Shape::Circle { .. } => self.position,
            Shape::Rectangle { .. } => self.position + self.half_extents(),
        }
    }

    pub fn is_static(&self) -> bool {
        self.inverse_mass == 0.0
    }

    /// Recompute `bounding_box` from position and size.
    pub fn refresh_bounds(&mut self) {
        let c = self.center();
        let h = self.half_extents();
        self.bounding_box = Aabb {
            min: c - h,
            max: c + h,
        };
    }

    /// The body's shape in world space.
    pub fn collider(&self) -> Collider {
        match self.shape {
            Shape::Circle { radius } => Collider::Circle(CircleShape {
                center: self.position,
                radius,
            }),
            Shape::Rectangle { .. } => Collider::Rect(RectShape {
                center: self.center(),
                half_extents: self.half_extents(),
            }),
        }
    }

    /// `position += velocity * speed_scale`.
    pub fn integrate(&mut self) {
        self.position += self.velocity * self.speed_scale;
    }
}
