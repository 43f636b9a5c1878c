use glam::Vec2;
use impulse2d::*;

fn main() {
    let mut world = PhysicsWorld::new(SimConfig::default()).expect("default config is valid");

    let left = world
        .create_body(BodyDesc::circle(Vec2::new(0.0, 0.0), 25.0).target(Vec2::new(400.0, 0.0)))
        .expect("capacity");
    let right = world
        .create_body(BodyDesc::circle(Vec2::new(200.0, 0.0), 25.0).target(Vec2::new(-200.0, 0.0)))
        .expect("capacity");
    let wall = world
        .create_body(BodyDesc::rect(Vec2::new(300.0, -100.0), Vec2::new(20.0, 200.0)).immovable())
        .expect("capacity");

    println!("left={:?} right={:?} wall={:?}", left, right, wall);

    for frame in 0..400 {
        let report = world.step();
        if report.contacts > 0 {
            println!(
                "frame {frame}: contacts={} resolved={} separating={}",
                report.contacts, report.resolved, report.separating
            );
            for v in world.views().iter().filter(|v| v.collided) {
                println!(
                    "  {:?} pos=({:.2},{:.2}) vel=({:.3},{:.3})",
                    v.handle, v.position.x, v.position.y, v.velocity.x, v.velocity.y
                );
            }
        }
    }
}
