//! Lifecycle of one animated background.
//!
//! A [`RenderSession`] owns its drawing surface, its frame callback and its
//! resize listener. The frame loop is a chain of one-shot callbacks: each
//! frame advances the clock, draws, and requests the next frame. Callbacks
//! only hold a weak reference to the session state, so dropping the session
//! is enough to stop the chain even if a callback is already queued.

use crate::domain::background::{
    AuroraUniforms, BackgroundHost, BackgroundOptions, FrameCallback, FrameClock, ResizeCallback,
    SurfaceBackend, Viewport,
};
use crate::domain::errors::RenderResult;
use crate::domain::logging::LogComponent;
use crate::{log_debug, log_info, log_warn};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

const COMPONENT: LogComponent = LogComponent::Session("RenderSession");

/// An attached aurora background.
pub struct RenderSession<H: BackgroundHost> {
    state: Rc<RefCell<SessionState<H>>>,
}

struct SessionState<H: BackgroundHost> {
    host: Rc<H>,
    surface: Option<H::Surface>,
    uniforms: AuroraUniforms,
    viewport: Viewport,
    clock: FrameClock,
    frame: Option<H::FrameHandle>,
    resize_listener: Option<H::ListenerHandle>,
    closed: bool,
}

impl<H: BackgroundHost> RenderSession<H> {
    /// Put a drawing surface into the host's mount point and start the frame
    /// loop. Fails without side effects when the host cannot provide a
    /// hardware-accelerated surface.
    pub async fn attach(host: Rc<H>, options: BackgroundOptions) -> RenderResult<Self> {
        let viewport = host.viewport().at_least_one_pixel();
        let surface = host.create_surface(viewport).await?;

        let state = Rc::new(RefCell::new(SessionState {
            host: host.clone(),
            surface: Some(surface),
            uniforms: AuroraUniforms::new(viewport),
            viewport,
            clock: FrameClock::new(options.time_step),
            frame: None,
            resize_listener: None,
            closed: false,
        }));

        let listener = host.subscribe_resize(SessionState::resize_callback(Rc::downgrade(&state)));
        let frame = host.request_frame(SessionState::frame_callback(Rc::downgrade(&state)));
        {
            let mut state = state.borrow_mut();
            state.resize_listener = Some(listener);
            state.frame = Some(frame);
        }

        log_info!(
            COMPONENT,
            "🌌 Aurora attached at {}x{} ({:?})",
            viewport.width,
            viewport.height,
            options.time_step
        );
        Ok(Self { state })
    }

    /// Stop the frame loop and release every resource. When this returns no
    /// frame is scheduled, no listener is registered and the mount point no
    /// longer holds the surface.
    pub fn detach(self) {
        self.state.borrow_mut().shutdown();
    }

    pub fn uniforms(&self) -> AuroraUniforms {
        self.state.borrow().uniforms
    }

    /// Viewport of the most recent usable resize (or of attach).
    pub fn viewport(&self) -> Viewport {
        self.state.borrow().viewport
    }

    /// Pixel buffer size of the live surface.
    pub fn surface_size(&self) -> Option<Viewport> {
        self.state.borrow().surface.as_ref().map(SurfaceBackend::size)
    }

    pub fn frames_rendered(&self) -> u64 {
        self.state.borrow().clock.frames()
    }

    pub fn is_frame_scheduled(&self) -> bool {
        self.state.borrow().frame.is_some()
    }

    pub fn is_attached(&self) -> bool {
        let state = self.state.borrow();
        !state.closed && state.surface.is_some()
    }
}

impl<H: BackgroundHost> Drop for RenderSession<H> {
    fn drop(&mut self) {
        match self.state.try_borrow_mut() {
            Ok(mut state) => state.shutdown(),
            Err(_) => {
                log_warn!(COMPONENT, "Session dropped while busy; teardown left to the frame callback");
            }
        }
    }
}

impl<H: BackgroundHost> SessionState<H> {
    fn frame_callback(state: Weak<RefCell<Self>>) -> FrameCallback {
        Box::new(move |timestamp| match state.upgrade() {
            Some(state) => Self::on_frame(&state, timestamp),
            None => {
                log_warn!(COMPONENT, "Frame fired after teardown; ignored");
            }
        })
    }

    fn resize_callback(state: Weak<RefCell<Self>>) -> ResizeCallback {
        Box::new(move |viewport| match state.upgrade() {
            Some(state) => state.borrow_mut().on_resize(viewport),
            None => {
                log_warn!(COMPONENT, "Resize delivered after teardown; ignored");
            }
        })
    }

    fn on_frame(this: &Rc<RefCell<Self>>, timestamp: f64) {
        let mut guard = this.borrow_mut();
        let state = &mut *guard;
        if state.closed {
            log_warn!(COMPONENT, "Frame fired after teardown; ignored");
            return;
        }
        // The handle belongs to the callback that is running now.
        state.frame = None;

        state.uniforms.time = state.clock.tick(timestamp);
        if let Some(surface) = state.surface.as_mut() {
            if let Err(err) = surface.draw(&state.uniforms) {
                log_warn!(COMPONENT, "Frame {} skipped: {}", state.clock.frames(), err);
            }
        }

        state.frame = Some(state.host.request_frame(Self::frame_callback(Rc::downgrade(this))));
    }

    fn on_resize(&mut self, viewport: Viewport) {
        if self.closed {
            log_warn!(COMPONENT, "Resize delivered after teardown; ignored");
            return;
        }
        // A minimised window reports 0 in one dimension; wgpu cannot configure
        // an empty surface, so the last usable size stays in effect.
        if viewport.is_empty() {
            log_debug!(COMPONENT, "Ignoring degenerate resize {}x{}", viewport.width, viewport.height);
            return;
        }
        self.viewport = viewport;
        self.uniforms.set_resolution(viewport);
        if let Some(surface) = self.surface.as_mut() {
            surface.resize(viewport);
        }
    }

    fn shutdown(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        if let Some(frame) = self.frame.take() {
            self.host.cancel_frame(frame);
        }
        if let Some(listener) = self.resize_listener.take() {
            self.host.unsubscribe_resize(listener);
        }
        if let Some(surface) = self.surface.take() {
            surface.release();
        }
        log_info!(COMPONENT, "🧹 Aurora detached after {} frames", self.clock.frames());
    }
}
