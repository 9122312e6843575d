mod common;

use common::{bouncing_ball, RecordingRenderer};
use scene_animator::core::{OffscreenCanvas, SoftwareRenderer, Viewport};
use scene_animator::traits::Renderer;
use scene_animator::Session;

fn session() -> Session<SoftwareRenderer<OffscreenCanvas>> {
    Session::with_renderer(
        SoftwareRenderer::new(OffscreenCanvas::new(), true),
        Viewport::new(800, 600),
        1.0,
        bouncing_ball(70.0, 1.0, false),
    )
}

#[test]
fn aspect_matches_width_over_height() {
    let mut session = session();

    for (w, h) in [(800, 600), (1920, 1080), (333, 777), (1, 4000)] {
        session.resize(Viewport::new(w, h), 1.0);
        assert_eq!(session.camera().aspect(), w as f32 / h as f32, "{}x{}", w, h);
        assert_eq!(session.renderer().size(), (w, h));
    }
}

#[test]
fn pixel_ratio_is_capped_at_two() {
    let mut session = session();

    for (dpr, expected) in [(0.5, 0.5), (1.0, 1.0), (1.5, 1.5), (2.0, 2.0), (3.0, 2.0), (4.5, 2.0)] {
        session.resize(Viewport::new(100, 50), dpr);
        assert_eq!(session.renderer().pixel_ratio(), expected, "dpr {}", dpr);
    }

    session.resize(Viewport::new(100, 50), 3.0);
    assert_eq!(session.renderer().buffer_size(), (200, 100));
}

#[test]
fn resizing_twice_equals_resizing_once() {
    let mut once = session();
    once.resize(Viewport::new(1024, 768), 1.25);

    let mut twice = session();
    twice.resize(Viewport::new(1024, 768), 1.25);
    twice.resize(Viewport::new(1024, 768), 1.25);

    assert_eq!(once.camera(), twice.camera());
    assert_eq!(once.viewport(), twice.viewport());
    assert_eq!(once.renderer().size(), twice.renderer().size());
    assert_eq!(once.renderer().pixel_ratio(), twice.renderer().pixel_ratio());
    assert_eq!(once.renderer().frame(), twice.renderer().frame());
    assert_eq!(once.snapshot(), twice.snapshot());
}

#[test]
fn zero_height_resize_is_ignored() {
    let (renderer, log) = RecordingRenderer::with_log();
    let mut session = Session::with_renderer(
        renderer,
        Viewport::new(800, 600),
        1.0,
        bouncing_ball(70.0, 1.0, false),
    );
    let calls = log.borrow().set_size_calls;

    session.resize(Viewport::new(800, 0), 1.0);

    assert_eq!(log.borrow().set_size_calls, calls);
    assert_eq!(session.camera().aspect(), 800.0 / 600.0);
}

#[test]
fn render_sees_resized_camera() {
    let (renderer, log) = RecordingRenderer::with_log();
    let mut session = Session::with_renderer(
        renderer,
        Viewport::new(800, 600),
        1.0,
        bouncing_ball(70.0, 1.0, false),
    );

    session.resize(Viewport::new(500, 1000), 1.0);
    session
        .tick(&scene_animator::core::FrameInfo::new(0, 0.0, 0.0))
        .unwrap();

    assert_eq!(log.borrow().last_aspect, Some(0.5));
}

#[test]
fn scale_change_at_fixed_physical_size() {
    let mut session = session();

    session.resize_physical(1600, 1200, 2.0);
    assert_eq!(session.viewport(), Viewport::new(800, 600));
    assert_eq!(session.renderer().pixel_ratio(), 2.0);
    assert_eq!(session.renderer().buffer_size(), (1600, 1200));
    let aspect = session.camera().aspect();

    // Window dragged to a 1x monitor without changing its pixel size
    session.resize_physical(1600, 1200, 1.0);
    assert_eq!(session.viewport(), Viewport::new(1600, 1200));
    assert_eq!(session.renderer().pixel_ratio(), 1.0);
    assert_eq!(session.renderer().buffer_size(), (1600, 1200));
    assert_eq!(session.camera().aspect(), aspect);
}

#[test]
fn high_scale_factor_is_capped_for_the_buffer() {
    let mut session = session();

    session.resize_physical(3000, 1500, 3.0);

    assert_eq!(session.viewport(), Viewport::new(1000, 500));
    assert_eq!(session.renderer().pixel_ratio(), 2.0);
    assert_eq!(session.renderer().buffer_size(), (2000, 1000));
}
