use super::value_objects::Action;
use crate::domain::background::BackgroundOptions;
use crate::domain::errors::ConfigResult;
use serde::{Deserialize, Serialize};

const FIGMA_DESIGN_URL: &str =
    "https://www.figma.com/design/U8RHx87I6RFIWD5zBNCMmi/Untitled?node-id=1-3&p=f&t=UgONNzmnhi91UgWd-0";

/// Everything the landing page shows. Every field is optional in JSON and
/// falls back to the built-in sample content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PortfolioConfig {
    pub logo: Logo,
    pub nav_links: Vec<NavLink>,
    pub resume: ActionButton,
    pub hero: HeroContent,
    pub cta_buttons: CtaButtons,
    pub projects: Vec<Project>,
    pub stats: Vec<Stat>,
    #[serde(alias = "showAnimatedBackground")]
    pub show_background: bool,
    pub background: BackgroundOptions,
}

impl PortfolioConfig {
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            logo: Logo::default(),
            nav_links: vec![
                NavLink::new("About", "#about"),
                NavLink::new("Projects", "#projects"),
                NavLink::new("Skills", "#skills"),
            ],
            resume: ActionButton::new("Resume", Action::open_in_new_tab("/resume.pdf")),
            hero: HeroContent::default(),
            cta_buttons: CtaButtons::default(),
            projects: sample_projects(),
            stats: vec![
                Stat::new("50+", "Projects Completed"),
                Stat::new("5+", "Years Experience"),
                Stat::new("15+", "Happy Clients"),
            ],
            show_background: true,
            background: BackgroundOptions::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Logo {
    pub initials: String,
    pub name: String,
}

impl Default for Logo {
    fn default() -> Self {
        Self { initials: "MT".into(), name: "Meng To".into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl NavLink {
    pub fn new(label: &str, href: &str) -> Self {
        Self { label: label.into(), href: href.into() }
    }
}

/// A labelled button bound to an [`Action`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionButton {
    pub label: String,
    pub action: Action,
}

impl ActionButton {
    pub fn new(label: &str, action: Action) -> Self {
        Self { label: label.into(), action }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeroContent {
    pub title_line1: String,
    /// Rendered with the gradient treatment.
    #[serde(alias = "titleLine2Gradient")]
    pub title_line2: String,
    pub subtitle: String,
}

impl Default for HeroContent {
    fn default() -> Self {
        Self {
            title_line1: "Creative Developer &".into(),
            title_line2: "Digital Designer".into(),
            subtitle: "I craft beautiful digital experiences through code and design. \
                       Specializing in modern web development, UI/UX design, and bringing \
                       innovative ideas to life."
                .into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CtaButtons {
    pub primary: ActionButton,
    pub secondary: ActionButton,
    /// Only the built-in sample has one; a configured `ctaButtons` without it
    /// shows two buttons.
    #[serde(default)]
    pub tertiary: Option<ActionButton>,
}

impl Default for CtaButtons {
    fn default() -> Self {
        Self {
            primary: ActionButton::new("View My Work", Action::None),
            secondary: ActionButton::new("Get In Touch", Action::None),
            tertiary: Some(ActionButton::new("View Design", Action::open_in_new_tab(FIGMA_DESIGN_URL))),
        }
    }
}

/// A gallery entry. `title` and `description` are required; the rest may be
/// left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub full_description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Screenshot URLs; the first one doubles as the card thumbnail.
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default, alias = "behanceUrl")]
    pub external_url: String,
    /// Overrides what the detail view's link button does.
    #[serde(default)]
    pub action: Option<Action>,
}

impl Project {
    pub fn thumbnail(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

impl Stat {
    pub fn new(value: &str, label: &str) -> Self {
        Self { value: value.into(), label: label.into() }
    }
}

fn sample_projects() -> Vec<Project> {
    let project = |title: &str, description: &str, full: &str, tags: &[&str], images: &[&str], url: &str| Project {
        title: title.into(),
        description: description.into(),
        full_description: full.into(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        images: images.iter().map(|i| i.to_string()).collect(),
        external_url: url.into(),
        action: None,
    };
    vec![
        project(
            "FinTech Mobile App",
            "React Native app with AI-powered financial insights.",
            "This innovative FinTech mobile app leverages React Native and Node.js to provide users \
             with AI-powered financial insights. It features real-time data analysis, personalized \
             investment recommendations, and secure transaction processing. The app includes \
             interactive charts, budget tracking, and seamless integration with banking APIs.",
            &["React Native", "Node.js"],
            &["/assets/01.png", "/assets/02.png"],
            "https://behance.net/fintech-app",
        ),
        project(
            "Data Visualization Platform",
            "Interactive dashboard for complex data analysis.",
            "A comprehensive data visualization platform built with D3.js and Python. This tool \
             allows users to create interactive dashboards for complex data analysis, featuring \
             advanced charting capabilities, real-time data streaming, and customizable \
             visualizations. It supports multiple data sources and provides export functionality \
             for reports.",
            &["D3.js", "Python"],
            &["/assets/03.png", "/assets/04.png"],
            "https://behance.net/data-viz-platform",
        ),
        project(
            "3D Portfolio Site",
            "Immersive WebGL experience with 3D elements.",
            "An immersive 3D portfolio website created using Three.js and WebGL. This project \
             showcases interactive 3D models, particle systems, and smooth animations. It features \
             a custom shader for realistic lighting effects and optimized performance for various \
             devices, providing an engaging user experience.",
            &["Three.js", "WebGL"],
            &["/assets/portfolio-3d/011.png"],
            "https://behance.net/3d-portfolio",
        ),
    ]
}
