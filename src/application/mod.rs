//! Application layer: orchestrates domain types against a host environment.

pub mod render_session;

pub use render_session::RenderSession;
