//! [`BackgroundHost`] backed by the DOM, `requestAnimationFrame` and WebGPU.

use crate::domain::background::{
    AuroraUniforms, BackgroundHost, FrameCallback, ResizeCallback, SurfaceBackend, Viewport,
};
use crate::domain::errors::{RenderError, RenderResult};
use crate::domain::logging::LogComponent;
use crate::event_utils::{EventOptions, WindowEventListenerHandle, window_event_listener_with_options};
use crate::infrastructure::rendering::AuroraRenderer;
use crate::log_debug;
use gloo::render::{AnimationFrame, request_animation_frame};
use std::future::Future;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlCanvasElement};

const COMPONENT: LogComponent = LogComponent::Host("BrowserHost");

/// Mounts the aurora canvas into one DOM element.
pub struct BrowserHost {
    mount: Element,
}

impl BrowserHost {
    pub fn new(mount: Element) -> Self {
        Self { mount }
    }

    pub fn mount(&self) -> &Element {
        &self.mount
    }
}

/// `window.innerWidth` x `window.innerHeight`, or zero without a window.
pub fn window_viewport() -> Viewport {
    let Some(window) = web_sys::window() else {
        return Viewport::default();
    };
    let read = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    Viewport::from_css_pixels(read(window.inner_width()), read(window.inner_height()))
}

impl BackgroundHost for BrowserHost {
    type Surface = BrowserSurface;
    type FrameHandle = AnimationFrame;
    type ListenerHandle = WindowEventListenerHandle;

    fn viewport(&self) -> Viewport {
        window_viewport()
    }

    fn create_surface(&self, viewport: Viewport) -> impl Future<Output = RenderResult<BrowserSurface>> {
        let mount = self.mount.clone();
        async move {
            let canvas = MountedCanvas::insert(&mount)?;
            let renderer = AuroraRenderer::new(canvas.element().clone(), viewport).await?;
            Ok(BrowserSurface { renderer: Some(renderer), canvas })
        }
    }

    fn request_frame(&self, callback: FrameCallback) -> AnimationFrame {
        request_animation_frame(callback)
    }

    fn cancel_frame(&self, handle: AnimationFrame) {
        // AnimationFrame calls cancelAnimationFrame on drop
        drop(handle);
    }

    fn subscribe_resize(&self, mut callback: ResizeCallback) -> WindowEventListenerHandle {
        window_event_listener_with_options(leptos::ev::resize, &EventOptions::default(), move |_| {
            callback(window_viewport())
        })
    }

    fn unsubscribe_resize(&self, handle: WindowEventListenerHandle) {
        handle.remove();
    }
}

/// Canvas appended to a mount point; removed again when dropped unless
/// already detached.
struct MountedCanvas {
    canvas: HtmlCanvasElement,
    attached: bool,
}

impl MountedCanvas {
    fn insert(mount: &Element) -> RenderResult<Self> {
        let document = mount
            .owner_document()
            .ok_or_else(|| RenderError::Mount("mount point is not in a document".into()))?;
        let canvas = document
            .create_element("canvas")
            .map_err(|e| RenderError::Mount(format!("{:?}", e)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| RenderError::Mount("created element is not a canvas".into()))?;

        let style = canvas.style();
        for (property, value) in [
            ("position", "fixed"),
            ("top", "0"),
            ("left", "0"),
            ("width", "100vw"),
            ("height", "100vh"),
            ("z-index", "0"),
            ("display", "block"),
            ("pointer-events", "none"),
        ] {
            style
                .set_property(property, value)
                .map_err(|e| RenderError::Mount(format!("{:?}", e)))?;
        }

        mount
            .append_child(&canvas)
            .map_err(|e| RenderError::Mount(format!("{:?}", e)))?;
        Ok(Self { canvas, attached: true })
    }

    fn element(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    fn detach(&mut self) {
        if self.attached {
            self.canvas.remove();
            self.attached = false;
        }
    }
}

impl Drop for MountedCanvas {
    fn drop(&mut self) {
        self.detach();
    }
}

/// The aurora canvas and the WebGPU renderer drawing into it.
pub struct BrowserSurface {
    renderer: Option<AuroraRenderer>,
    canvas: MountedCanvas,
}

impl SurfaceBackend for BrowserSurface {
    fn size(&self) -> Viewport {
        match self.renderer.as_ref() {
            Some(renderer) => renderer.size(),
            None => Viewport::new(self.canvas.element().width(), self.canvas.element().height()),
        }
    }

    fn resize(&mut self, viewport: Viewport) {
        self.canvas.element().set_width(viewport.width);
        self.canvas.element().set_height(viewport.height);
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.resize(viewport);
        }
        log_debug!(COMPONENT, "Surface resized to {}x{}", viewport.width, viewport.height);
    }

    fn draw(&mut self, uniforms: &AuroraUniforms) -> RenderResult<()> {
        match self.renderer.as_mut() {
            Some(renderer) => renderer.render(uniforms),
            None => Err(RenderError::Surface("renderer already released".into())),
        }
    }

    fn release(mut self) {
        self.canvas.detach();
        if let Some(renderer) = self.renderer.take() {
            renderer.release();
        }
    }
}
