use super::entities::Project;
use super::value_objects::Action;

/// Open/close state of the project detail dialog.
///
/// Closing keeps the last project so the dialog can still render its content
/// while it fades out; opening always replaces it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectSelection {
    selected: Option<Project>,
    open: bool,
}

impl ProjectSelection {
    pub fn open(&mut self, project: Project) {
        self.selected = Some(project);
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Dialog-style `onOpenChange`: opening without a selection is ignored.
    pub fn set_open(&mut self, open: bool) {
        self.open = open && self.selected.is_some();
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn selected(&self) -> Option<&Project> {
        self.selected.as_ref()
    }
}

/// The link button at the bottom of the project dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalLink {
    pub label: &'static str,
    /// Show the Behance glyph next to the label.
    pub show_icon: bool,
    pub action: Action,
}

impl ExternalLink {
    /// `None` when the project has neither an action nor a usable URL.
    pub fn for_project(project: &Project) -> Option<Self> {
        let action = project
            .action
            .clone()
            .unwrap_or_else(|| Action::open_in_new_tab(project.external_url.clone()));
        if action.is_none() {
            return None;
        }
        let behance = project.external_url.contains("behance.net");
        Some(Self {
            label: if behance { "Behance" } else { "View Website" },
            show_icon: behance,
            action,
        })
    }
}

/// Alt text of the `index`-th (zero-based) screenshot.
pub fn screenshot_alt(title: &str, index: usize) -> String {
    format!("{} screenshot {}", title, index + 1)
}

/// Stats are separated by a divider; nothing follows the last one.
pub fn needs_separator(index: usize, count: usize) -> bool {
    index + 1 < count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(url: &str) -> Project {
        Project {
            title: "Wavacation".into(),
            description: "Booking".into(),
            full_description: String::new(),
            tags: vec![],
            images: vec![],
            external_url: url.into(),
            action: None,
        }
    }

    #[test]
    fn separators_sit_between_stats_only() {
        let placed: Vec<bool> = (0..3).map(|i| needs_separator(i, 3)).collect();
        assert_eq!(placed, vec![true, true, false]);
        assert!(!needs_separator(0, 1));
    }

    #[test]
    fn screenshot_alt_is_one_based() {
        assert_eq!(screenshot_alt("PlayMate", 0), "PlayMate screenshot 1");
    }

    #[test]
    fn set_open_requires_a_selection() {
        let mut selection = ProjectSelection::default();
        selection.set_open(true);
        assert!(!selection.is_open());
        selection.open(project("https://wavacation.com/"));
        selection.set_open(false);
        assert!(!selection.is_open());
        selection.set_open(true);
        assert!(selection.is_open());
    }

    #[test]
    fn project_without_destination_has_no_link() {
        assert_eq!(ExternalLink::for_project(&project("")), None);
    }
}
