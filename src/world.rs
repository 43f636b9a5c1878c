use glam::Vec2;
use log::{debug, trace, warn};

use std::time::Instant;

use crate::api::{NarrowphaseApi, PhysicsWorldApi};
use crate::body::{Body, BodyDesc};
use crate::broadphase::all_pairs;
use crate::error::PhysicsError;
use crate::narrowphase::Narrowphase;
use crate::resolution::{Resolution, resolve_contact};
use crate::steering::{SteerOutcome, steer};
use crate::types::*;

/// Body registry plus the per-step pipeline.
pub struct PhysicsWorld {
    pub cfg: SimConfig,
    step_counter: u64,

    bodies: Vec<Body>,
    // Contact flags published by the last step, one per body
    collided: Vec<bool>,

    last_report: StepReport,
    last_timing: Option<StepTiming>,
}

impl PhysicsWorldApi for PhysicsWorld {
    fn new(cfg: SimConfig) -> Result<Self, PhysicsError> {
        cfg.validate()?;
        Ok(Self {
            // capacity is a limit checked in create_body, not a reservation
            bodies: Vec::new(),
            collided: Vec::new(),
            cfg,
            step_counter: 0,
            last_report: StepReport::default(),
            last_timing: None,
        })
    }

    fn create_body(&mut self, desc: BodyDesc) -> Result<BodyHandle, PhysicsError> {
        if self.bodies.len() >= self.cfg.capacity {
            warn!(
                "rejecting {:?} body: registry full ({} bodies)",
                desc.shape, self.cfg.capacity
            );
            return Err(PhysicsError::CapacityExhausted {
                capacity: self.cfg.capacity,
            });
        }
        let body = Body::from_desc(desc)?;
        let handle = BodyHandle(self.bodies.len() as u32);
        debug!(
            "created {:?} as {:?} at {:?} (target {:?})",
            body.shape, handle, body.position, body.target
        );
        self.bodies.push(body);
        self.collided.push(false);
        Ok(handle)
    }

    fn create_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        target: Option<Vec2>,
    ) -> Result<BodyHandle, PhysicsError> {
        let mut desc = BodyDesc::circle(center, radius);
        desc.target = target;
        self.create_body(desc)
    }

    fn create_rect(
        &mut self,
        min_corner: Vec2,
        size: Vec2,
        target: Option<Vec2>,
    ) -> Result<BodyHandle, PhysicsError> {
        let mut desc = BodyDesc::rect(min_corner, size);
        desc.target = target;
        self.create_body(desc)
    }

    fn step(&mut self) -> StepReport {
        let timed = self.cfg.enable_timing;
        let t_all = if timed { Some(Instant::now()) } else { None };
        let mut timing = StepTiming::default();
        let n = self.bodies.len();
        let mut report = StepReport {
            bodies: n,
            ..Default::default()
        };

        // 1. Fresh contact flags
        let mut collided = vec![false; n];

        // 2. Bounds
        let t0 = if timed { Some(Instant::now()) } else { None };
        for body in &mut self.bodies {
            body.refresh_bounds();
        }
        timing.bounds_ms = elapsed_ms(t0);

        // 3. Broad + narrow phase
        let t1 = if timed { Some(Instant::now()) } else { None };
        let mut manifolds = Vec::new();
        for (i, j) in all_pairs(n) {
            report.pairs_tested += 1;
            if let Some(m) = self.manifold_idx(i, j) {
                trace!(
                    "contact {:?} -> {:?}: n=({:.3},{:.3}) depth={:.3}",
                    m.a, m.b, m.normal.x, m.normal.y, m.penetration
                );
                collided[i] = true;
                collided[j] = true;
                manifolds.push(m);
            }
        }
        report.contacts = manifolds.len();
        timing.narrowphase_ms = elapsed_ms(t1);

        // 4. Resolution, in discovery order
        let t2 = if timed { Some(Instant::now()) } else { None };
        for m in &manifolds {
            let (ai, bi) = (m.a.index(), m.b.index());
            if !(collided[ai] && collided[bi]) {
                continue;
            }
            let (a, b) = pair_mut(&mut self.bodies, ai, bi);
            match resolve_contact(a, b, m, &self.cfg) {
                Resolution::Applied { .. } => report.resolved += 1,
                Resolution::Separating => report.separating += 1,
                Resolution::Immovable => report.immovable += 1,
            }
        }
        timing.resolve_ms = elapsed_ms(t2);

        // 5. Steering
        let t3 = if timed { Some(Instant::now()) } else { None };
        for (body, &hit) in self.bodies.iter_mut().zip(&collided) {
            if steer(body, hit, self.cfg.arrival_threshold) == SteerOutcome::Arrived {
                report.arrivals += 1;
            }
        }
        timing.steer_ms = elapsed_ms(t3);

        // 6. Integration
        let t4 = if timed { Some(Instant::now()) } else { None };
        for body in &mut self.bodies {
            body.integrate();
        }
        timing.integrate_ms = elapsed_ms(t4);

        self.collided = collided;
        self.step_counter = self.step_counter.wrapping_add(1);
        self.last_report = report;
        self.last_timing = t_all.map(|t| StepTiming {
            step_ms: t.elapsed().as_secs_f64() * 1000.0,
            ..timing
        });
        report
    }

    fn body(&self, handle: BodyHandle) -> Option<&Body> {
        self.bodies.get(handle.index())
    }

    fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    fn collided(&self, handle: BodyHandle) -> bool {
        self.collided.get(handle.index()).copied().unwrap_or(false)
    }

    fn views(&self) -> Vec<BodyView> {
        self.bodies
            .iter()
            .zip(&self.collided)
            .enumerate()
            .map(|(i, (b, &collided))| BodyView {
                handle: BodyHandle(i as u32),
                shape: b.shape,
                position: b.position,
                size: b.size(),
                bounding_box: b.bounding_box,
                velocity: b.velocity,
                target: b.target,
                collided,
            })
            .collect()
    }

    fn query_point(&self, p: Vec2) -> Vec<BodyHandle> {
        self.bodies
            .iter()
            .enumerate()
            .filter(|(_, b)| match b.collider() {
                Collider::Circle(c) => Narrowphase::point_in_circle(p, c),
                Collider::Rect(r) => Narrowphase::point_in_rect(p, r),
            })
            .map(|(i, _)| BodyHandle(i as u32))
            .collect()
    }

    fn overlap_pair(&self, a: BodyHandle, b: BodyHandle) -> Option<Manifold> {
        let (ai, bi) = (a.index(), b.index());
        if ai == bi || ai >= self.bodies.len() || bi >= self.bodies.len() {
            return None;
        }
        self.manifold_idx(ai, bi)
    }
}

impl PhysicsWorld {
    /// Narrow-phase dispatch on the pair's shapes. Mixed pairs always put the
    /// rectangle first.
    fn manifold_idx(&self, ai: usize, bi: usize) -> Option<Manifold> {
        let (ha, hb) = (BodyHandle(ai as u32), BodyHandle(bi as u32));
        match (self.bodies[ai].collider(), self.bodies[bi].collider()) {
            (Collider::Circle(ca), Collider::Circle(cb)) => {
                Narrowphase::circle_circle(ca, cb).map(|c| Manifold::new(ha, hb, c))
            }
            (Collider::Rect(ra), Collider::Rect(rb)) => {
                Narrowphase::rect_rect(ra, rb).map(|c| Manifold::new(ha, hb, c))
            }
            (Collider::Rect(r), Collider::Circle(c)) => {
                Narrowphase::rect_circle(r, c).map(|contact| Manifold::new(ha, hb, contact))
            }
            (Collider::Circle(c), Collider::Rect(r)) => {
                Narrowphase::rect_circle(r, c).map(|contact| Manifold::new(hb, ha, contact))
            }
        }
    }

    /// Registry capacity fixed at construction.
    pub fn capacity(&self) -> usize {
        self.cfg.capacity
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Number of steps completed since construction.
    pub fn steps_run(&self) -> u64 {
        self.step_counter
    }

    /// Counters from the last completed step.
    pub fn last_report(&self) -> StepReport {
        self.last_report
    }

    /// Timing breakdown for the last step, when `enable_timing` is set.
    pub fn timing(&self) -> Option<StepTiming> {
        self.last_timing
    }
}

fn elapsed_ms(start: Option<Instant>) -> f64 {
    start.map(|t| t.elapsed().as_secs_f64() * 1000.0).unwrap_or(0.0)
}

/// Two distinct mutable bodies, returned in `(i, j)` order.
fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &mut Body) {
    debug_assert_ne!(i, j);
    if i < j {
        let (lo, hi) = bodies.split_at_mut(j);
        (&mut lo[i], &mut hi[0])
    } else {
        let (lo, hi) = bodies.split_at_mut(i);
        (&mut hi[0], &mut lo[j])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world() -> PhysicsWorld {
        PhysicsWorld::new(SimConfig::default()).unwrap()
    }

    #[test]
    fn test_new_rejects_bad_config() {
        let cfg = SimConfig {
            correction_percent: 0.0,
            ..Default::default()
        };
        assert!(matches!(PhysicsWorld::new(cfg), Err(PhysicsError::InvalidConfig(_))));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_huge_capacity_rejected_without_allocating() {
        let cfg = SimConfig {
            capacity: usize::MAX / 2,
            ..Default::default()
        };
        assert!(matches!(PhysicsWorld::new(cfg), Err(PhysicsError::InvalidConfig(_))));

        // Largest accepted capacity is a limit only; construction stays cheap
        let cfg = SimConfig {
            capacity: u32::MAX as usize,
            ..Default::default()
        };
        let mut w = PhysicsWorld::new(cfg).unwrap();
        assert!(w.is_empty());
        assert_eq!(w.create_circle(Vec2::ZERO, 1.0, None).unwrap(), BodyHandle(0));
    }

    #[test]
    fn test_steps_run_counts_completed_steps() {
        let mut w = world();
        assert_eq!(w.steps_run(), 0);
        w.create_circle(Vec2::ZERO, 1.0, None).unwrap();
        for _ in 0..3 {
            w.step();
        }
        assert_eq!(w.steps_run(), 3);
    }

    #[test]
    fn test_create_assigns_sequential_handles() {
        let mut w = world();
        let a = w.create_circle(Vec2::ZERO, 5.0, None).unwrap();
        let b = w.create_rect(Vec2::new(20.0, 0.0), Vec2::new(4.0, 4.0), None).unwrap();
        assert_eq!(a, BodyHandle(0));
        assert_eq!(b, BodyHandle(1));
        assert_eq!(w.len(), 2);
        assert!(w.body(b).unwrap().shape == Shape::Rectangle { width: 4.0, height: 4.0 });
        assert!(w.body(BodyHandle(7)).is_none());
    }

    #[test]
    fn test_capacity_exhaustion() {
        let cfg = SimConfig {
            capacity: 2,
            ..Default::default()
        };
        let mut w = PhysicsWorld::new(cfg).unwrap();
        w.create_circle(Vec2::ZERO, 1.0, None).unwrap();
        w.create_circle(Vec2::new(10.0, 0.0), 1.0, None).unwrap();
        let err = w.create_circle(Vec2::new(20.0, 0.0), 1.0, None).unwrap_err();
        assert_eq!(err, PhysicsError::CapacityExhausted { capacity: 2 });
        assert_eq!(w.len(), 2);
    }

    #[test]
    fn test_invalid_body_not_registered() {
        let mut w = world();
        assert!(w.create_body(BodyDesc::circle(Vec2::ZERO, 1.0).mass(f32::NAN)).is_err());
        assert!(w.is_empty());
    }

    #[test]
    fn test_mixed_pair_puts_rect_first() {
        let mut w = world();
        let c = w.create_circle(Vec2::new(12.5, 5.0), 3.0, None).unwrap();
        let r = w.create_rect(Vec2::ZERO, Vec2::new(10.0, 10.0), None).unwrap();
        let m = w.overlap_pair(c, r).unwrap();
        assert_eq!(m.a, r);
        assert_eq!(m.b, c);
        assert_eq!(m.normal, Vec2::X);
        assert!((m.penetration - 0.5).abs() < 1e-5);
        assert_eq!(w.overlap_pair(r, c), Some(m));
        assert!(w.overlap_pair(c, c).is_none());
    }

    #[test]
    fn test_step_flags_and_report() {
        let mut w = world();
        let a = w.create_circle(Vec2::new(0.0, 0.0), 25.0, None).unwrap();
        let b = w.create_circle(Vec2::new(40.0, 0.0), 25.0, None).unwrap();
        let far = w.create_circle(Vec2::new(500.0, 500.0), 5.0, None).unwrap();
        let r = w.step();
        assert_eq!(r.bodies, 3);
        assert_eq!(r.pairs_tested, 3);
        assert_eq!(r.contacts, 1);
        assert_eq!(r.resolved, 1);
        assert!(w.collided(a) && w.collided(b));
        assert!(!w.collided(far));
        assert_eq!(w.last_report(), r);
    }

    #[test]
    fn test_flags_do_not_leak_across_steps() {
        let mut w = world();
        let a = w.create_circle(Vec2::new(0.0, 0.0), 5.0, None).unwrap();
        let b = w.create_circle(Vec2::new(20.0, 0.0), 5.0, Some(Vec2::new(-200.0, 0.0))).unwrap();
        let mut hit = false;
        for _ in 0..50 {
            if w.step().contacts > 0 {
                hit = true;
                break;
            }
        }
        assert!(hit);
        assert!(w.collided(a) && w.collided(b));
        // Contact dropped b's target and bounced both to the left, a faster
        assert!(w.body(b).unwrap().target.is_none());
        assert!(w.body(a).unwrap().velocity.x < w.body(b).unwrap().velocity.x);
        let r = w.step();
        assert_eq!(r.contacts, 0);
        assert!(!w.collided(a) && !w.collided(b));
    }

    #[test]
    fn test_static_pair_skipped_without_nan() {
        let mut w = world();
        w.create_body(BodyDesc::rect(Vec2::ZERO, Vec2::new(10.0, 10.0)).immovable()).unwrap();
        w.create_body(BodyDesc::rect(Vec2::new(5.0, 5.0), Vec2::new(10.0, 10.0)).immovable()).unwrap();
        let r = w.step();
        assert_eq!(r.contacts, 1);
        assert_eq!(r.immovable, 1);
        for b in w.bodies() {
            assert!(b.position.is_finite() && b.velocity.is_finite());
        }
        assert_eq!(w.bodies()[0].position, Vec2::ZERO);
    }

    #[test]
    fn test_views_and_query_point() {
        let mut w = world();
        let c = w.create_circle(Vec2::new(0.0, 0.0), 2.0, Some(Vec2::new(50.0, 0.0))).unwrap();
        let r = w.create_rect(Vec2::new(10.0, 10.0), Vec2::new(4.0, 2.0), None).unwrap();
        w.step();
        let views = w.views();
        assert_eq!(views.len(), 2);
        assert_eq!(views[0].handle, c);
        assert_eq!(views[0].target, Some(Vec2::new(50.0, 0.0)));
        assert_eq!(views[0].velocity, Vec2::X);
        assert_eq!(views[1].bounding_box.min, Vec2::new(10.0, 10.0));
        assert_eq!(views[1].bounding_box.max, Vec2::new(14.0, 12.0));
        assert_eq!(views[1].size, Vec2::new(4.0, 2.0));
        assert!(!views[1].collided);

        assert_eq!(w.query_point(Vec2::new(12.0, 11.0)), vec![r]);
        assert_eq!(w.query_point(Vec2::new(1.0, 1.0)), vec![c]);
        assert!(w.query_point(Vec2::new(-40.0, 0.0)).is_empty());
    }

    #[test]
    fn test_timing_recorded_when_enabled() {
        let cfg = SimConfig {
            enable_timing: true,
            ..Default::default()
        };
        let mut w = PhysicsWorld::new(cfg).unwrap();
        w.create_circle(Vec2::ZERO, 1.0, None).unwrap();
        assert!(w.timing().is_none());
        w.step();
        let t = w.timing().unwrap();
        assert!(t.step_ms >= 0.0);
        assert!(world().timing().is_none());
    }

    #[test]
    fn test_pair_mut_orders() {
        let mut bodies: Vec<Body> = (0..3)
            .map(|i| Body::from_desc(BodyDesc::circle(Vec2::new(i as f32, 0.0), 1.0)).unwrap())
            .collect();
        let (a, b) = pair_mut(&mut bodies, 2, 0);
        assert_eq!(a.position.x, 2.0);
        assert_eq!(b.position.x, 0.0);
        let (a, b) = pair_mut(&mut bodies, 0, 1);
        assert_eq!(a.position.x, 0.0);
        assert_eq!(b.position.x, 1.0);
    }
}
