//! Implementations of [`BackgroundHost`](crate::domain::background::BackgroundHost).

#[cfg(target_arch = "wasm32")]
pub mod browser;
pub mod headless;

#[cfg(target_arch = "wasm32")]
pub use browser::{BrowserHost, BrowserSurface, window_viewport};
pub use headless::{GPU_HANDLES_PER_SURFACE, HeadlessHost, HeadlessSurface};
