use glam::Vec3;
use xr_golf_engine::core::ManualClock;
use xr_golf_engine::{PlacementPhase, SceneConfig, SessionCore, TrackingFrame, Transform};

fn at(p: Vec3) -> TrackingFrame {
    TrackingFrame::new(vec![Transform::from_position(p)])
}

fn placed_session() -> (SessionCore, ManualClock) {
    let clock = ManualClock::new(10.0);
    let mut core = SessionCore::with_clock(SceneConfig::default(), Box::new(clock.clone())).unwrap();
    let ticket = core.frame(Some(&TrackingFrame::empty())).unwrap();
    core.hit_test_source_ready(ticket).unwrap();

    core.frame(Some(&at(Vec3::new(0.0, -1.0, -1.0))));
    core.select_start(0.0, 0.0, 0.0).unwrap();
    core.select_end(0.0, 0.0, 0.0).unwrap();
    core.frame(Some(&at(Vec3::new(0.0, -1.0, -1.0))));

    core.frame(Some(&at(Vec3::new(0.0, -0.5, -1.0))));
    core.select_start(0.0, 0.0, 0.0).unwrap();
    core.select_end(0.0, 0.0, 0.0).unwrap();
    core.frame(Some(&at(Vec3::new(0.0, -0.5, -1.0))));
    assert_eq!(core.phase(), PlacementPhase::Ready);
    (core, clock)
}

fn run(core: &mut SessionCore, clock: &ManualClock, seconds: f64) {
    let frames = (seconds * 90.0) as usize;
    for _ in 0..frames {
        clock.advance(1.0 / 90.0);
        core.frame(None);
    }
}

#[test]
fn ball_comes_to_rest_on_the_ground() {
    let (mut core, clock) = placed_session();
    run(&mut core, &clock, 4.0);
    let ball = core.physics().ball().unwrap();
    assert!((ball.position.y - (-0.9)).abs() < 0.02, "ball at {:?}", ball.position);
    assert!(ball.velocity.length() < 0.05);
}

#[test]
fn throw_travels_away_from_release_point() {
    let (mut core, clock) = placed_session();
    run(&mut core, &clock, 3.0);
    let rest = core.physics().ball().unwrap().position;

    // Pull back toward the viewer (+Z) and release: ball heads to -Z.
    core.select_start(0.0, 0.0, 0.0).unwrap();
    core.frame(None);
    core.select_end(rest.x, rest.y, rest.z + 0.5).unwrap();
    core.frame(None);
    run(&mut core, &clock, 1.0);

    let ball = core.physics().ball().unwrap();
    assert!(ball.position.z < rest.z - 0.1, "ball at {:?}", ball.position);
    assert_eq!(core.interaction().throws(), 1);
    assert_eq!(core.physics().ground().unwrap().transform.position, Vec3::new(0.0, -1.0, -1.0));
}

#[test]
fn long_stall_is_capped_at_max_substeps() {
    let (mut core, clock) = placed_session();
    let before = core.physics().steps();
    clock.advance(5.0);
    core.frame(None);
    assert_eq!(core.physics().steps() - before, SceneConfig::default().max_substeps as u64);
}
