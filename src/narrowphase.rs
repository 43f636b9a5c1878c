use glam::Vec2;

use crate::api::NarrowphaseApi;
use crate::math::{axis_sign, clamp_to_extents, normalize_or};
use crate::types::*;

/// Narrowphase primitive tests. Normals point from the first argument toward the second.
pub struct Narrowphase;

impl NarrowphaseApi for Narrowphase {
    fn circle_circle(a: CircleShape, b: CircleShape) -> Option<Contact> {
        let n = b.center - a.center;
        let rsum = a.radius + b.radius;
        let dist2 = n.length_squared();
        if dist2 > rsum * rsum {
            return None;
        }
        let dist = dist2.sqrt();
        if dist != 0.0 {
            Some(Contact {
                normal: n / dist,
                penetration: rsum - dist,
            })
        } else {
            // Coincident centers: fixed axis, A's radius as depth
            Some(Contact {
                normal: Vec2::X,
                penetration: a.radius,
            })
        }
    }

    fn rect_rect(a: RectShape, b: RectShape) -> Option<Contact> {
        // Overlap extents along each axis
        let n = b.center - a.center;
        let ox = (a.half_extents.x + b.half_extents.x) - n.x.abs();
        let oy = (a.half_extents.y + b.half_extents.y) - n.y.abs();
        if ox <= 0.0 || oy <= 0.0 {
            return None;
        }

        // Axis of least penetration; ties go to Y
        if ox < oy {
            Some(Contact {
                normal: Vec2::new(axis_sign(n.x), 0.0),
                penetration: ox,
            })
        } else {
            Some(Contact {
                normal: Vec2::new(0.0, axis_sign(n.y)),
                penetration: oy,
            })
        }
    }

    fn rect_circle(rect: RectShape, circle: CircleShape) -> Option<Contact> {
        let n = circle.center - rect.center;
        let h = rect.half_extents;
        let closest = clamp_to_extents(n, h);

        if n == closest {
            // Center inside the box: push out through the face of the dominant axis
            let (normal, depth_to_face) = if n.x.abs() > n.y.abs() {
                (Vec2::new(axis_sign(n.x), 0.0), h.x - n.x.abs())
            } else {
                (Vec2::new(0.0, axis_sign(n.y)), h.y - n.y.abs())
            };
            return Some(Contact {
                normal,
                penetration: circle.radius + depth_to_face,
            });
        }

        let delta = n - closest;
        let dist2 = delta.length_squared();
        if dist2 > circle.radius * circle.radius {
            return None;
        }
        let dist = dist2.sqrt();
        Some(Contact {
            normal: normalize_or(delta, Vec2::new(0.0, axis_sign(n.y))),
            penetration: circle.radius - dist,
        })
    }

    fn point_in_circle(p: Vec2, circle: CircleShape) -> bool {
        (p - circle.center).length_squared() <= circle.radius * circle.radius
    }

    fn point_in_rect(p: Vec2, rect: RectShape) -> bool {
        let min = rect.center - rect.half_extents;
        let max = rect.center + rect.half_extents;
        p.x >= min.x && p.x <= max.x && p.y >= min.y && p.y <= max.y
    }
}
