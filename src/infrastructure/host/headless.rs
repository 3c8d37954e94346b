//! In-memory [`BackgroundHost`] that stands in for a browser window.
//!
//! Frames run only when [`HeadlessHost::run_frame`] is called and resize
//! events only when [`HeadlessHost::resize`] fires them, so tests drive the
//! session deterministically. The host keeps the same books a leak check
//! needs: children of the mount point, live GPU handles, registered
//! listeners and pending frame callbacks.

use crate::domain::background::{
    AuroraUniforms, BackgroundHost, FrameCallback, ResizeCallback, SurfaceBackend, Viewport,
};
use crate::domain::errors::{RenderError, RenderResult};
use std::cell::{Cell, RefCell};
use std::future::{Future, ready};
use std::rc::Rc;

/// Context, shader program, quad buffer and uniform buffer.
pub const GPU_HANDLES_PER_SURFACE: usize = 4;

#[derive(Default)]
struct Books {
    mount_children: RefCell<Vec<u32>>,
    live_gpu_handles: Cell<usize>,
    surfaces_created: Cell<u32>,
    draws: RefCell<Vec<AuroraUniforms>>,
}

pub struct HeadlessHost {
    viewport: Cell<Viewport>,
    gpu_available: bool,
    next_id: Cell<u32>,
    frames: RefCell<Vec<(u32, FrameCallback)>>,
    listeners: RefCell<Vec<(u32, ResizeCallback)>>,
    /// Listeners unsubscribed while a resize is being dispatched.
    unsubscribed: RefCell<Vec<u32>>,
    books: Rc<Books>,
}

impl HeadlessHost {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport: Cell::new(viewport),
            gpu_available: true,
            next_id: Cell::new(1),
            frames: RefCell::new(Vec::new()),
            listeners: RefCell::new(Vec::new()),
            unsubscribed: RefCell::new(Vec::new()),
            books: Rc::new(Books::default()),
        }
    }

    /// A host whose GPU cannot be acquired. Surface creation still inserts
    /// the canvas first, like the browser does, and has to take it out again.
    pub fn without_gpu(viewport: Viewport) -> Self {
        Self { gpu_available: false, ..Self::new(viewport) }
    }

    /// Run every frame callback pending right now. Callbacks requested while
    /// running wait for the next call. Returns how many ran.
    pub fn run_frame(&self, timestamp_ms: f64) -> usize {
        let due = std::mem::take(&mut *self.frames.borrow_mut());
        let count = due.len();
        for (_, callback) in due {
            callback(timestamp_ms);
        }
        count
    }

    /// Change the viewport and notify every listener synchronously.
    pub fn resize(&self, viewport: Viewport) {
        self.viewport.set(viewport);
        self.unsubscribed.borrow_mut().clear();
        let mut listeners = std::mem::take(&mut *self.listeners.borrow_mut());
        for (id, callback) in listeners.iter_mut() {
            if !self.unsubscribed.borrow().contains(id) {
                callback(viewport);
            }
        }
        let unsubscribed = std::mem::take(&mut *self.unsubscribed.borrow_mut());
        listeners.retain(|(id, _)| !unsubscribed.contains(id));
        let mut current = self.listeners.borrow_mut();
        listeners.append(&mut current);
        *current = listeners;
    }

    pub fn pending_frames(&self) -> usize {
        self.frames.borrow().len()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn mount_children(&self) -> usize {
        self.books.mount_children.borrow().len()
    }

    pub fn live_gpu_handles(&self) -> usize {
        self.books.live_gpu_handles.get()
    }

    pub fn surfaces_created(&self) -> u32 {
        self.books.surfaces_created.get()
    }

    /// Uniforms of every successful draw, oldest first.
    pub fn draws(&self) -> Vec<AuroraUniforms> {
        self.books.draws.borrow().clone()
    }

    fn next_id(&self) -> u32 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }
}

impl BackgroundHost for HeadlessHost {
    type Surface = HeadlessSurface;
    type FrameHandle = u32;
    type ListenerHandle = u32;

    fn viewport(&self) -> Viewport {
        self.viewport.get()
    }

    fn create_surface(&self, viewport: Viewport) -> impl Future<Output = RenderResult<HeadlessSurface>> {
        let id = self.next_id();
        self.books.mount_children.borrow_mut().push(id);
        let mut surface = HeadlessSurface {
            id,
            size: viewport,
            books: self.books.clone(),
            gpu_handles: 0,
        };
        let result = if self.gpu_available {
            surface.gpu_handles = GPU_HANDLES_PER_SURFACE;
            let live = self.books.live_gpu_handles.get();
            self.books.live_gpu_handles.set(live + GPU_HANDLES_PER_SURFACE);
            self.books.surfaces_created.set(self.books.surfaces_created.get() + 1);
            Ok(surface)
        } else {
            // dropping `surface` takes the canvas back out
            Err(RenderError::CapabilityAbsent("headless host has no GPU".into()))
        };
        ready(result)
    }

    fn request_frame(&self, callback: FrameCallback) -> u32 {
        let id = self.next_id();
        self.frames.borrow_mut().push((id, callback));
        id
    }

    fn cancel_frame(&self, handle: u32) {
        self.frames.borrow_mut().retain(|(id, _)| *id != handle);
    }

    fn subscribe_resize(&self, callback: ResizeCallback) -> u32 {
        let id = self.next_id();
        self.listeners.borrow_mut().push((id, callback));
        id
    }

    fn unsubscribe_resize(&self, handle: u32) {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(id, _)| *id != handle);
        if listeners.len() == before {
            // not registered right now, so it may be out for dispatch
            self.unsubscribed.borrow_mut().push(handle);
        }
    }
}

/// Surface bookkeeping without pixels. Dropping it without `release` still
/// returns everything, like the browser surface's guard.
pub struct HeadlessSurface {
    id: u32,
    size: Viewport,
    books: Rc<Books>,
    gpu_handles: usize,
}

impl HeadlessSurface {
    fn free(&mut self) {
        self.books.mount_children.borrow_mut().retain(|child| *child != self.id);
        let live = self.books.live_gpu_handles.get();
        self.books.live_gpu_handles.set(live.saturating_sub(self.gpu_handles));
        self.gpu_handles = 0;
    }
}

impl SurfaceBackend for HeadlessSurface {
    fn size(&self) -> Viewport {
        self.size
    }

    fn resize(&mut self, viewport: Viewport) {
        self.size = viewport;
    }

    fn draw(&mut self, uniforms: &AuroraUniforms) -> RenderResult<()> {
        self.books.draws.borrow_mut().push(*uniforms);
        Ok(())
    }

    fn release(mut self) {
        self.free();
    }
}

impl Drop for HeadlessSurface {
    fn drop(&mut self) {
        self.free();
    }
}
