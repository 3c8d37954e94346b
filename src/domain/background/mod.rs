//! Model of the animated aurora background.
//!
//! The renderer never talks to the browser directly. Everything it needs from
//! its environment (viewport size, a place to put a drawing surface, frame
//! callbacks, resize notifications) goes through [`BackgroundHost`], so the
//! session lifecycle in `application::render_session` runs the same against
//! the DOM and against the in-memory host used by tests.

pub mod clock;
pub mod uniforms;
pub mod viewport;

pub use clock::{FrameClock, NOMINAL_FRAME_SECONDS, TimeStep};
pub use uniforms::AuroraUniforms;
pub use viewport::Viewport;

use crate::domain::errors::RenderResult;
use serde::{Deserialize, Serialize};
use std::future::Future;

/// Invoked once with the scheduler's frame timestamp in milliseconds.
pub type FrameCallback = Box<dyn FnOnce(f64)>;

/// Invoked with the new viewport on every resize notification.
pub type ResizeCallback = Box<dyn FnMut(Viewport)>;

/// Tunables of a render session.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BackgroundOptions {
    pub time_step: TimeStep,
}

/// A drawing surface placed in a mount point, together with the shader
/// program, geometry and GPU context that draw into it.
pub trait SurfaceBackend {
    /// Current size of the pixel buffer.
    fn size(&self) -> Viewport;

    /// Resize the pixel buffer in place.
    fn resize(&mut self, viewport: Viewport);

    /// Draw one frame with the given uniforms.
    fn draw(&mut self, uniforms: &AuroraUniforms) -> RenderResult<()>;

    /// Remove the surface from its mount point, then free the shader
    /// program, geometry buffers and context.
    fn release(self)
    where
        Self: Sized;
}

/// Environment a render session runs in.
pub trait BackgroundHost: 'static {
    type Surface: SurfaceBackend + 'static;
    /// Keeps a requested frame alive; passing it to `cancel_frame` guarantees
    /// the callback never runs.
    type FrameHandle: 'static;
    type ListenerHandle: 'static;

    fn viewport(&self) -> Viewport;

    /// Insert a drawing surface of `viewport` size into the mount point and
    /// acquire a hardware-accelerated context for it. On failure the mount
    /// point is left as it was.
    fn create_surface(&self, viewport: Viewport) -> impl Future<Output = RenderResult<Self::Surface>>;

    fn request_frame(&self, callback: FrameCallback) -> Self::FrameHandle;

    fn cancel_frame(&self, handle: Self::FrameHandle);

    fn subscribe_resize(&self, callback: ResizeCallback) -> Self::ListenerHandle;

    fn unsubscribe_resize(&self, handle: Self::ListenerHandle);
}
