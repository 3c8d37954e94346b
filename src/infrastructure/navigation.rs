use crate::domain::logging::LogComponent;
use crate::domain::portfolio::{Action, NavigationTarget};
use crate::{log_debug, log_warn};

const COMPONENT: LogComponent = LogComponent::Page("Navigation");

/// Carry out a button's [`Action`]. Actions without a target do nothing.
pub fn perform(action: &Action) {
    let Some(target) = action.target() else {
        log_debug!(COMPONENT, "Ignoring '{}' action without a target", action.as_ref());
        return;
    };
    log_debug!(COMPONENT, "{} -> {} (new tab: {})", action.as_ref(), target.url, target.new_tab);
    if let Err(message) = open(&target) {
        log_warn!(COMPONENT, "Navigation to {} failed: {}", target.url, message);
    }
}

fn open(target: &NavigationTarget) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    if target.new_tab {
        window
            .open_with_url_and_target(&target.url, "_blank")
            .map(|_| ())
            .map_err(|e| format!("{:?}", e))
    } else {
        window.location().set_href(&target.url).map_err(|e| format!("{:?}", e))
    }
}
