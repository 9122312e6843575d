mod common;

use common::{bouncing_ball, RecordingRenderer};
use glam::Vec3;
use scene_animator::core::{FrameBudget, FrameInfo, ManualClock, SteppedClock, Viewport};
use scene_animator::math::{Color, ReplayEntropy};
use scene_animator::motion::{Axis, Bounce, Kinematics, Spin, Vertical};
use scene_animator::types::Transform;
use scene_animator::{AnimationLoop, Session};

#[test]
fn rotation_is_rate_times_elapsed() {
    let mut kinematics = Kinematics::stationary().with_spin(Spin::tumble(0.5));
    let mut transform = Transform::default();

    for t in [0.0, 0.016, 1.0, 3.25, 100.0, 2.0] {
        kinematics.update(&mut transform, t);
        assert_eq!(transform.rotation, Vec3::splat(0.5 * t), "t={}", t);
    }
}

#[test]
fn repeated_ticks_at_same_time_do_not_accumulate() {
    let mut kinematics = Kinematics::stationary().with_spin(Spin::new(2.0, &[Axis::Y]));
    let mut transform = Transform::default();

    for _ in 0..10 {
        kinematics.update(&mut transform, 1.5);
    }
    assert_eq!(transform.rotation, Vec3::new(0.0, 3.0, 0.0));
}

#[test]
fn ascending_past_upper_flips_and_recolors_same_tick() {
    let (renderer, _) = RecordingRenderer::with_log();
    let mut session = Session::with_renderer(
        renderer,
        Viewport::new(800, 600),
        1.0,
        bouncing_ball(70.0, 1.0, true),
    )
    .with_entropy(ReplayEntropy::new(vec![0x0065_4321]));
    session.scene_mut().objects[0].transform.position.y = 69.5;

    session.tick(&FrameInfo::new(0, 0.0, 0.0)).unwrap();

    let ball = &session.scene().objects[0];
    assert_eq!(ball.transform.position.y, 70.5);
    assert_eq!(ball.kinematics.vertical.unwrap().heading, Vertical::Descending);
    assert_eq!(ball.material.color, Color::from_hex(0x123456));
}

#[test]
fn descending_past_lower_flips_back() {
    let mut bounce = Bounce::<Vertical>::new(1.0, -70.0, 70.0).with_recolor();
    bounce.heading = Vertical::Descending;
    let mut kinematics = Kinematics::stationary().with_vertical(bounce);
    let mut transform = Transform::at(Vec3::new(0.0, -69.5, 0.0));

    let update = kinematics.update(&mut transform, 0.0);

    assert!(update.vertical_flip);
    assert!(update.recolor);
    assert_eq!(transform.position.y, -70.5);
    assert_eq!(kinematics.vertical.unwrap().heading, Vertical::Ascending);
}

#[test]
fn no_recolor_without_flip() {
    let (renderer, _) = RecordingRenderer::with_log();
    let mut session = Session::with_renderer(
        renderer,
        Viewport::new(800, 600),
        1.0,
        bouncing_ball(70.0, 1.0, true),
    )
    .with_entropy(ReplayEntropy::new(vec![0]));

    for n in 0..10 {
        session.tick(&FrameInfo::new(n, n as f32, 1.0)).unwrap();
    }
    assert_eq!(session.scene().objects[0].material.color, Color::from_hex(0x808080));
}

#[test]
fn seventy_one_ticks_flip_exactly_once() {
    let (renderer, log) = RecordingRenderer::with_log();
    let mut session = Session::with_renderer(
        renderer,
        Viewport::new(800, 600),
        1.0,
        bouncing_ball(70.0, 1.0, true),
    );
    let mut animation = AnimationLoop::new(SteppedClock::new(1.0 / 60.0), FrameBudget::new(71));

    let mut flips = 0;
    let mut heading = Vertical::Ascending;
    while let Some(frame) = animation.next_frame() {
        session.tick(&frame).unwrap();
        let now = session.scene().objects[0].kinematics.vertical.unwrap().heading;
        if now != heading {
            flips += 1;
            heading = now;
        }
    }

    let ball = &session.scene().objects[0];
    assert_eq!(flips, 1);
    assert_eq!(heading, Vertical::Descending);
    assert_eq!(ball.transform.position.y, 69.0);
    assert_eq!(log.borrow().renders, 71);
    assert_eq!(session.camera().aspect(), 800.0 / 600.0);
}

#[test]
fn run_stops_when_budget_is_spent() {
    let (renderer, log) = RecordingRenderer::with_log();
    let mut session = Session::with_renderer(
        renderer,
        Viewport::new(800, 600),
        1.0,
        bouncing_ball(5.0, 1.0, false),
    );
    let mut clock = ManualClock::new();
    clock.set(4.0);
    let mut animation = AnimationLoop::new(clock, FrameBudget::new(12));

    let frames = animation.run(&mut session).unwrap();

    assert_eq!(frames, 12);
    assert_eq!(session.ticks(), 12);
    assert_eq!(log.borrow().renders, 12);
    assert!(animation.next_frame().is_none());
    // 5 up (flip at 5), 7 down
    assert_eq!(session.scene().objects[0].transform.position.y, -2.0);
}
