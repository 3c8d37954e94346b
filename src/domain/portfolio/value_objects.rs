use serde::{Deserialize, Serialize};

/// What a button does when clicked. Serialized with a `kind` tag so the page
/// configuration stays plain JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, strum::AsRefStr)]
#[serde(tag = "kind", rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum Action {
    #[default]
    None,
    OpenUrl {
        url: String,
        #[serde(default = "new_tab_by_default", rename = "newTab")]
        new_tab: bool,
    },
    Navigate {
        url: String,
    },
    Mailto {
        address: String,
    },
}

fn new_tab_by_default() -> bool {
    true
}

/// Resolved browser navigation for an [`Action`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationTarget {
    pub url: String,
    pub new_tab: bool,
}

impl Action {
    pub fn open_in_new_tab(url: impl Into<String>) -> Self {
        Action::OpenUrl { url: url.into(), new_tab: true }
    }

    /// `None` when there is nothing to navigate to.
    pub fn target(&self) -> Option<NavigationTarget> {
        let (url, new_tab) = match self {
            Action::None => return None,
            Action::OpenUrl { url, new_tab } => (url.trim().to_string(), *new_tab),
            Action::Navigate { url } => (url.trim().to_string(), false),
            Action::Mailto { address } => {
                let address = address.trim();
                if address.is_empty() {
                    return None;
                }
                (format!("mailto:{}", address), false)
            }
        };
        (!url.is_empty()).then_some(NavigationTarget { url, new_tab })
    }

    pub fn is_none(&self) -> bool {
        self.target().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_match_json_tags() {
        assert_eq!(Action::None.as_ref(), "none");
        assert_eq!(Action::open_in_new_tab("x").as_ref(), "openUrl");
        assert_eq!(Action::Mailto { address: "a@b.c".into() }.as_ref(), "mailto");
    }

    #[test]
    fn blank_targets_resolve_to_nothing() {
        assert_eq!(Action::Navigate { url: "   ".into() }.target(), None);
        assert_eq!(Action::Mailto { address: String::new() }.target(), None);
        assert!(Action::None.is_none());
    }
}
