use glam::Vec2;
use log::debug;

use crate::body::Body;

/// Per-body steering result for one step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SteerOutcome {
    /// No target; velocity left as is.
    Idle,
    /// Velocity now points at the target.
    Seeking,
    /// Within the arrival threshold: stopped and target cleared.
    Arrived,
    /// In contact this step: target dropped, velocity left to resolution.
    Interrupted,
}

/// Move-toward-target logic. Operates on the body's center.
///
/// Travel per step is `velocity * speed_scale`; when the target is closer than
/// one full step the velocity is shortened so integration lands on it.
pub fn steer(body: &mut Body, collided: bool, arrival_threshold: f32) -> SteerOutcome {
    let Some(target) = body.target else {
        return SteerOutcome::Idle;
    };
    if collided {
        body.target = None;
        return SteerOutcome::Interrupted;
    }

    let to_target = target - body.center();
    let dist = to_target.length();
    if dist < arrival_threshold {
        body.velocity = Vec2::ZERO;
        body.target = None;
        debug!("arrived at {target:?}");
        return SteerOutcome::Arrived;
    }

    // dist >= threshold > 0, so the division is safe
    let dir = to_target / dist;
    body.velocity = if body.speed_scale > 0.0 && dist < body.speed_scale {
        dir * (dist / body.speed_scale)
    } else {
        dir
    };
    SteerOutcome::Seeking
}
