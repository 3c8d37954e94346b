pub mod gpu_structures;
#[cfg(target_arch = "wasm32")]
pub mod renderer;

#[cfg(target_arch = "wasm32")]
pub use renderer::AuroraRenderer;
