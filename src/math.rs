use glam::Vec2;

/// Lengths at or below this are treated as zero when normalizing.
pub const LENGTH_EPSILON: f32 = 1e-6;

/// Normalize `v`, returning `fallback` when `v` has (near) zero length.
pub fn normalize_or(v: Vec2, fallback: Vec2) -> Vec2 {
    let len = v.length();
    if len > LENGTH_EPSILON { v / len } else { fallback }
}

/// Clamp `v` component-wise into `[-half, half]`.
pub fn clamp_to_extents(v: Vec2, half: Vec2) -> Vec2 {
    let clamp = |x: f32, h: f32| x.max(-h).min(h);
    Vec2::new(clamp(v.x, half.x), clamp(v.y, half.y))
}

/// +1 for non-negative values, -1 otherwise. Zero maps to +1 so axis picks stay deterministic.
pub fn axis_sign(x: f32) -> f32 {
    if x < 0.0 { -1.0 } else { 1.0 }
}
