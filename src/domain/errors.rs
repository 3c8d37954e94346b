use derive_more::{Display, From};

/// Failures of the background renderer. Everything after a successful
/// attach is infallible apart from per-frame surface errors.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum RenderError {
    #[display(fmt = "Hardware-accelerated rendering unavailable: {}", _0)]
    CapabilityAbsent(String),
    #[display(fmt = "Mount point rejected the drawing surface: {}", _0)]
    Mount(String),
    #[display(fmt = "Surface error: {}", _0)]
    Surface(String),
}

impl std::error::Error for RenderError {}

impl From<RenderError> for wasm_bindgen::JsValue {
    fn from(err: RenderError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}

#[derive(Debug, Display, From)]
pub enum ConfigError {
    #[display(fmt = "Invalid portfolio configuration: {}", _0)]
    Parse(serde_json::Error),
}

impl std::error::Error for ConfigError {}

pub type RenderResult<T> = Result<T, RenderError>;
pub type ConfigResult<T> = Result<T, ConfigError>;
