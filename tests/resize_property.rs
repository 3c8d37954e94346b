use futures::executor::block_on;
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use starfall_portfolio::application::RenderSession;
use starfall_portfolio::domain::background::{BackgroundOptions, Viewport};
use starfall_portfolio::infrastructure::host::HeadlessHost;
use std::rc::Rc;

fn viewport(width: u16, height: u16) -> Viewport {
    Viewport::new(width as u32, height as u32)
}

#[quickcheck]
fn last_resize_wins(sizes: Vec<(u16, u16)>) -> TestResult {
    let sizes: Vec<Viewport> = sizes
        .into_iter()
        .map(|(w, h)| viewport(w, h))
        .filter(|v| !v.is_empty())
        .collect();
    let Some(last) = sizes.last().copied() else {
        return TestResult::discard();
    };

    let host = Rc::new(HeadlessHost::new(Viewport::new(1280, 720)));
    let session = block_on(RenderSession::attach(host.clone(), BackgroundOptions::default())).expect("attach");
    for size in &sizes {
        host.resize(*size);
        host.run_frame(0.0);
    }

    TestResult::from_bool(
        session.uniforms().resolution == [last.width as f32, last.height as f32]
            && session.surface_size() == Some(last)
            && host.surfaces_created() == 1,
    )
}

#[quickcheck]
fn detach_always_returns_to_baseline(frames: u8, resizes: Vec<(u16, u16)>) -> bool {
    let host = Rc::new(HeadlessHost::new(Viewport::new(640, 480)));
    let session = block_on(RenderSession::attach(host.clone(), BackgroundOptions::default())).expect("attach");
    for (w, h) in resizes {
        host.resize(viewport(w, h));
    }
    for frame in 0..frames {
        host.run_frame(frame as f64 * 16.0);
    }
    session.detach();

    host.mount_children() == 0
        && host.live_gpu_handles() == 0
        && host.listener_count() == 0
        && host.pending_frames() == 0
}
