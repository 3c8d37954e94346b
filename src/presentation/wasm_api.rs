//! JavaScript surface for pages that embed only the background, or that want
//! to check a configuration before handing it to the page.

use crate::application::RenderSession;
use crate::domain::background::BackgroundOptions;
use crate::domain::logging::LogComponent;
use crate::domain::portfolio::PortfolioConfig;
use crate::infrastructure::host::BrowserHost;
use crate::log_info;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;

const COMPONENT: LogComponent = LogComponent::Page("WasmApi");

/// A running aurora background. Dropping the JS object (`free()`) detaches
/// it as well.
#[wasm_bindgen(js_name = AuroraBackground)]
pub struct AuroraBackgroundHandle {
    session: Option<RenderSession<BrowserHost>>,
}

#[wasm_bindgen(js_class = AuroraBackground)]
impl AuroraBackgroundHandle {
    /// Attach a background to `container`. `options` uses the same JSON shape
    /// as the `background` field of the page configuration.
    pub async fn attach(container: Element, options: Option<String>) -> Result<AuroraBackgroundHandle, JsValue> {
        let options = match options {
            Some(json) => serde_json::from_str::<BackgroundOptions>(&json)
                .map_err(|e| JsValue::from_str(&format!("Invalid background options: {}", e)))?,
            None => BackgroundOptions::default(),
        };
        let session = RenderSession::attach(Rc::new(BrowserHost::new(container)), options).await?;
        log_info!(COMPONENT, "Background attached from JavaScript");
        Ok(Self { session: Some(session) })
    }

    /// Stop the animation and remove the canvas. Calling it twice is harmless.
    pub fn detach(&mut self) {
        if let Some(session) = self.session.take() {
            session.detach();
        }
    }

    #[wasm_bindgen(getter, js_name = isAttached)]
    pub fn is_attached(&self) -> bool {
        self.session.as_ref().is_some_and(RenderSession::is_attached)
    }

    #[wasm_bindgen(getter, js_name = framesRendered)]
    pub fn frames_rendered(&self) -> f64 {
        self.session.as_ref().map_or(0.0, |session| session.frames_rendered() as f64)
    }
}

/// Throws with the parse error when `json` is not a valid page configuration.
#[wasm_bindgen(js_name = validatePortfolioConfig)]
pub fn validate_portfolio_config(json: &str) -> Result<(), JsValue> {
    PortfolioConfig::from_json(json)
        .map(|_| ())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
