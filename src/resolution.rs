use log::{debug, trace};

use crate::body::Body;
use crate::types::{Manifold, SimConfig};

/// What happened to one contact during resolution.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Resolution {
    /// Impulse and positional correction applied.
    Applied { impulse: f32, correction: f32 },
    /// Relative velocity already points apart; nothing changed.
    Separating,
    /// Both bodies have zero inverse mass; nothing changed.
    Immovable,
}

/// Resolve one contact: impulse exchange along the normal, then positional
/// correction. `a` and `b` must match `m.a` and `m.b`.
pub fn resolve_contact(a: &mut Body, b: &mut Body, m: &Manifold, cfg: &SimConfig) -> Resolution {
    let rel = b.velocity - a.velocity;
    let vel_along_normal = rel.dot(m.normal);
    if vel_along_normal > 0.0 {
        return Resolution::Separating;
    }

    let inv_sum = a.inverse_mass + b.inverse_mass;
    if inv_sum == 0.0 {
        debug!("skipping contact {:?} <-> {:?}: both bodies immovable", m.a, m.b);
        return Resolution::Immovable;
    }

    let e = a.restitution.min(b.restitution);
    let j = -(1.0 + e) * vel_along_normal / inv_sum;
    let impulse = m.normal * j;
    a.velocity -= impulse * a.inverse_mass;
    b.velocity += impulse * b.inverse_mass;

    let correction = correct_positions(a, b, m, cfg);
    trace!(
        "resolved {:?} <-> {:?}: j={j:.4} correction={correction:.4}",
        m.a, m.b
    );
    Resolution::Applied {
        impulse: j,
        correction,
    }
}

/// Baumgarte correction: move the bodies apart by `percent` of the penetration
/// beyond `slop`, split by inverse mass. Returns the correction magnitude.
pub fn correct_positions(a: &mut Body, b: &mut Body, m: &Manifold, cfg: &SimConfig) -> f32 {
    let inv_sum = a.inverse_mass + b.inverse_mass;
    if inv_sum == 0.0 {
        return 0.0;
    }
    let magnitude = (m.penetration - cfg.correction_slop).max(0.0) / inv_sum * cfg.correction_percent;
    let correction = m.normal * magnitude;
    a.position -= correction * a.inverse_mass;
    b.position += correction * b.inverse_mass;
    magnitude
}
