use futures::executor::block_on;
use starfall_portfolio::application::RenderSession;
use starfall_portfolio::domain::background::{BackgroundOptions, TimeStep, Viewport};
use starfall_portfolio::domain::errors::RenderError;
use starfall_portfolio::infrastructure::host::{GPU_HANDLES_PER_SURFACE, HeadlessHost};
use std::rc::Rc;

fn attach(host: &Rc<HeadlessHost>) -> RenderSession<HeadlessHost> {
    block_on(RenderSession::attach(host.clone(), BackgroundOptions::default())).expect("attach")
}

#[test]
fn attach_resize_detach_scenario() {
    let host = Rc::new(HeadlessHost::new(Viewport::new(1920, 1080)));
    let session = attach(&host);

    assert_eq!(session.uniforms().resolution, [1920.0, 1080.0]);
    assert_eq!(session.surface_size(), Some(Viewport::new(1920, 1080)));
    assert_eq!(host.mount_children(), 1);
    assert_eq!(host.live_gpu_handles(), GPU_HANDLES_PER_SURFACE);
    assert_eq!(host.listener_count(), 1);
    assert!(session.is_frame_scheduled());

    host.run_frame(0.0);
    host.resize(Viewport::new(800, 600));
    host.run_frame(16.0);

    assert_eq!(session.uniforms().resolution, [800.0, 600.0]);
    assert_eq!(session.surface_size(), Some(Viewport::new(800, 600)));
    assert_eq!(host.draws().last().map(|u| u.resolution), Some([800.0, 600.0]));
    // resizing reuses the surface
    assert_eq!(host.surfaces_created(), 1);

    session.detach();

    assert_eq!(host.pending_frames(), 0);
    assert_eq!(host.listener_count(), 0);
    assert_eq!(host.mount_children(), 0);
    assert_eq!(host.live_gpu_handles(), 0);
}

#[test]
fn time_advances_by_a_constant_step() {
    let host = Rc::new(HeadlessHost::new(Viewport::new(640, 480)));
    let session = attach(&host);

    // irregular timestamps must not matter
    for timestamp in [0.0, 5.0, 100.0, 101.0, 400.0] {
        host.run_frame(timestamp);
    }

    let times: Vec<f32> = host.draws().iter().map(|u| u.time).collect();
    assert_eq!(times.len(), 5);
    for pair in times.windows(2) {
        assert!((pair[1] - pair[0] - 0.016).abs() < 1e-5, "{:?}", times);
    }
    assert!((times[0] - 0.016).abs() < 1e-6);
    assert_eq!(session.frames_rendered(), 5);
}

#[test]
fn measured_step_follows_timestamps() {
    let host = Rc::new(HeadlessHost::new(Viewport::new(640, 480)));
    let options = BackgroundOptions { time_step: TimeStep::Measured { max_seconds: 0.1 } };
    let _session = block_on(RenderSession::attach(host.clone(), options)).expect("attach");

    host.run_frame(1000.0);
    host.run_frame(1033.0);
    host.run_frame(5000.0);

    let times: Vec<f32> = host.draws().iter().map(|u| u.time).collect();
    assert!((times[1] - times[0] - 0.033).abs() < 1e-4, "{:?}", times);
    // a long pause is capped
    assert!((times[2] - times[1] - 0.1).abs() < 1e-4, "{:?}", times);
}

#[test]
fn no_frame_runs_after_detach() {
    let host = Rc::new(HeadlessHost::new(Viewport::new(320, 240)));
    let session = attach(&host);
    host.run_frame(0.0);
    assert_eq!(host.draws().len(), 1);

    session.detach();

    assert_eq!(host.run_frame(16.0), 0);
    assert_eq!(host.draws().len(), 1);
}

#[test]
fn dropping_the_session_tears_it_down() {
    let host = Rc::new(HeadlessHost::new(Viewport::new(320, 240)));
    {
        let _session = attach(&host);
        assert_eq!(host.mount_children(), 1);
    }
    assert_eq!(host.pending_frames(), 0);
    assert_eq!(host.listener_count(), 0);
    assert_eq!(host.mount_children(), 0);
    assert_eq!(host.live_gpu_handles(), 0);
}

#[test]
fn reattach_creates_an_independent_session() {
    let host = Rc::new(HeadlessHost::new(Viewport::new(1024, 768)));

    let first = attach(&host);
    host.run_frame(0.0);
    host.run_frame(16.0);
    first.detach();

    let second = attach(&host);
    assert_eq!(host.surfaces_created(), 2);
    assert_eq!(host.mount_children(), 1);
    assert_eq!(host.live_gpu_handles(), GPU_HANDLES_PER_SURFACE);
    assert_eq!(host.listener_count(), 1);
    assert_eq!(second.frames_rendered(), 0);

    host.run_frame(32.0);
    // the clock starts over for the new session
    assert!((host.draws().last().map(|u| u.time).unwrap_or_default() - 0.016).abs() < 1e-6);

    second.detach();
    assert_eq!(host.mount_children(), 0);
}

#[test]
fn missing_gpu_leaves_the_mount_untouched() {
    let host = Rc::new(HeadlessHost::without_gpu(Viewport::new(800, 600)));
    let result = block_on(RenderSession::attach(host.clone(), BackgroundOptions::default()));

    assert!(matches!(result, Err(RenderError::CapabilityAbsent(_))));
    assert_eq!(host.mount_children(), 0);
    assert_eq!(host.live_gpu_handles(), 0);
    assert_eq!(host.listener_count(), 0);
    assert_eq!(host.pending_frames(), 0);
}

#[test]
fn many_resizes_do_not_allocate() {
    let host = Rc::new(HeadlessHost::new(Viewport::new(800, 600)));
    let session = attach(&host);

    for step in 1..=50u32 {
        host.resize(Viewport::new(100 + step * 10, 100 + step * 5));
    }

    assert_eq!(host.surfaces_created(), 1);
    assert_eq!(host.mount_children(), 1);
    assert_eq!(host.live_gpu_handles(), GPU_HANDLES_PER_SURFACE);
    assert_eq!(session.viewport(), Viewport::new(600, 350));
}

#[test]
fn zero_sized_resize_is_ignored() {
    let host = Rc::new(HeadlessHost::new(Viewport::new(800, 600)));
    let session = attach(&host);

    host.resize(Viewport::new(0, 600));

    assert_eq!(session.viewport(), Viewport::new(800, 600));
    assert_eq!(session.uniforms().resolution, [800.0, 600.0]);
}

#[test]
fn zero_sized_viewport_still_attaches_one_pixel() {
    let host = Rc::new(HeadlessHost::new(Viewport::new(0, 0)));
    let session = attach(&host);
    assert_eq!(session.surface_size(), Some(Viewport::new(1, 1)));
}

#[test]
fn time_keeps_increasing_with_a_degenerate_fixed_step() {
    let host = Rc::new(HeadlessHost::new(Viewport::new(640, 480)));
    let options = BackgroundOptions { time_step: TimeStep::Fixed { seconds: -0.5 } };
    let _session = block_on(RenderSession::attach(host.clone(), options)).expect("attach");

    for timestamp in [0.0, 16.0, 32.0] {
        host.run_frame(timestamp);
    }

    let times: Vec<f32> = host.draws().iter().map(|u| u.time).collect();
    assert!(times[0] > 0.0, "{:?}", times);
    assert!(times.windows(2).all(|pair| pair[1] > pair[0]), "{:?}", times);
}
