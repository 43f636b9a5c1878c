use glam::Vec2;
use impulse2d::*;

fn main() {
    for &n in &[10usize, 50, 100, 200] {
        let cfg = SimConfig {
            capacity: n,
            enable_timing: true,
            ..Default::default()
        };
        let mut world = PhysicsWorld::new(cfg).expect("valid config");
        let cols = (n as f32).sqrt().ceil() as usize;
        for i in 0..n {
            let p = Vec2::new((i % cols) as f32 * 30.0, (i / cols) as f32 * 30.0);
            let target = Vec2::new(cols as f32 * 15.0, cols as f32 * 15.0);
            let desc = if i % 2 == 0 {
                BodyDesc::circle(p, 10.0)
            } else {
                BodyDesc::rect(p, Vec2::new(18.0, 18.0))
            };
            world.create_body(desc.target(target)).expect("capacity");
        }

        let frames = 300;
        let mut total_ms = 0.0;
        let mut contacts = 0;
        for _ in 0..frames {
            contacts += world.step().contacts;
            if let Some(t) = world.timing() {
                total_ms += t.step_ms;
            }
        }
        let budget_ms = world.cfg.frame_time().as_secs_f64() * 1000.0;
        println!(
            "n={n:4} pairs/step={:6} avg_step={:.4}ms (budget {:.2}ms) contacts={contacts}",
            broadphase::pair_count(n),
            total_ms / frames as f64,
            budget_ms
        );
    }
}
