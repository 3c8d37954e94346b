pub mod config;
pub mod host;
pub mod navigation;
pub mod rendering;
pub mod services;
