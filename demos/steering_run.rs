use glam::Vec2;
use impulse2d::*;

fn main() {
    let mut world = PhysicsWorld::new(SimConfig::default()).expect("default config is valid");

    // Same placements a scene editor would hand over: rectangles with targets, plus a parked circle
    let targets = [
        (Vec2::new(50.0, 50.0), Vec2::new(700.0, 80.0)),
        (Vec2::new(60.0, 300.0), Vec2::new(650.0, 500.0)),
        (Vec2::new(400.0, 550.0), Vec2::new(400.0, 20.0)),
    ];
    for (start, end) in targets {
        world
            .create_body(BodyDesc::rect(start, Vec2::new(25.0, 50.0)).target(end).speed(3.0))
            .expect("capacity");
    }
    world
        .create_body(BodyDesc::circle(Vec2::new(400.0, 300.0), 25.0).speed(3.0))
        .expect("capacity");

    let mut frame = 0;
    while world.bodies().iter().any(|b| b.target.is_some()) && frame < 2_000 {
        let report = world.step();
        if report.arrivals > 0 || report.contacts > 0 {
            println!(
                "frame {frame}: arrivals={} contacts={}",
                report.arrivals, report.contacts
            );
        }
        frame += 1;
    }
    for v in world.views() {
        println!(
            "{:?} {:?} at ({:.1},{:.1}) vel=({:.2},{:.2})",
            v.handle, v.shape, v.position.x, v.position.y, v.velocity.x, v.velocity.y
        );
    }
}
