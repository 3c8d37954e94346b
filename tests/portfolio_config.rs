use insta::assert_json_snapshot;
use starfall_portfolio::domain::background::TimeStep;
use starfall_portfolio::domain::portfolio::{Action, ExternalLink, PortfolioConfig, Project, ProjectSelection};

fn project(external_url: &str) -> Project {
    Project {
        title: "PlayMate".into(),
        description: "Sports meetups".into(),
        full_description: String::new(),
        tags: vec!["Mobile App".into()],
        images: vec![],
        external_url: external_url.into(),
        action: None,
    }
}

#[test]
fn empty_object_is_the_sample_page() {
    let config = PortfolioConfig::from_json("{}").expect("parse");
    assert_eq!(config, PortfolioConfig::default());
    assert_eq!(config.logo.initials, "MT");
    assert_eq!(config.nav_links.len(), 3);
    assert_eq!(config.projects.len(), 3);
    assert_eq!(config.stats.len(), 3);
    assert!(config.show_background);
    assert!(config.cta_buttons.tertiary.is_some());
    assert_eq!(config.background.time_step, TimeStep::Fixed { seconds: 0.016 });
}

#[test]
fn page_props_shape_is_accepted() {
    let json = r#"{
        "logo": { "initials": "PP", "name": "preetham" },
        "hero": {
            "titleLine1": "UI/UX Designer &",
            "titleLine2Gradient": "Product Experience Creator",
            "subtitle": "Modern, intuitive digital experiences."
        },
        "ctaButtons": {
            "primary": { "label": "View My Work", "action": { "kind": "navigate", "url": "https://www.behance.net/preethapriyath" } },
            "secondary": { "label": "Get In Touch", "action": { "kind": "mailto", "address": "someone@example.com" } }
        },
        "projects": [
            { "title": "Wavacation", "description": "Booking website", "behanceUrl": "https://wavacation.com/" }
        ],
        "showAnimatedBackground": false,
        "background": { "timeStep": { "mode": "measured", "maxSeconds": 0.05 } }
    }"#;
    let config = PortfolioConfig::from_json(json).expect("parse");

    assert_eq!(config.logo.name, "preetham");
    assert_eq!(config.hero.title_line2, "Product Experience Creator");
    assert_eq!(config.cta_buttons.tertiary, None);
    assert_eq!(
        config.cta_buttons.secondary.action.target().map(|t| t.url),
        Some("mailto:someone@example.com".to_string())
    );
    assert_eq!(config.projects[0].external_url, "https://wavacation.com/");
    assert!(config.projects[0].tags.is_empty());
    assert!(!config.show_background);
    assert_eq!(config.background.time_step, TimeStep::Measured { max_seconds: 0.05 });
    // untouched sections keep the sample content
    assert_eq!(config.stats, PortfolioConfig::default().stats);
}

#[test]
fn project_without_title_is_rejected() {
    let err = PortfolioConfig::from_json(r#"{ "projects": [ { "description": "x" } ] }"#).unwrap_err();
    assert!(err.to_string().contains("title"), "{err}");
}

#[test]
fn malformed_json_is_an_error() {
    assert!(PortfolioConfig::from_json("{ \"logo\": ").is_err());
}

#[test]
fn open_url_defaults_to_a_new_tab() {
    let action: Action = serde_json::from_str(r#"{ "kind": "openUrl", "url": " /resume.pdf " }"#).expect("parse");
    assert_json_snapshot!(action.target(), @r###"
    {
      "url": "/resume.pdf",
      "new_tab": true
    }
    "###);
}

#[test]
fn behance_links_get_the_icon() {
    let link = ExternalLink::for_project(&project("https://behance.net/fintech-app")).expect("link");
    assert_eq!(link.label, "Behance");
    assert!(link.show_icon);
    assert_eq!(link.action, Action::open_in_new_tab("https://behance.net/fintech-app"));

    let link = ExternalLink::for_project(&project("https://wavacation.com/")).expect("link");
    assert_eq!(link.label, "View Website");
    assert!(!link.show_icon);
}

#[test]
fn project_action_overrides_the_url() {
    let mut project = project("https://behance.net/x");
    project.action = Some(Action::Navigate { url: "/case-study".into() });
    let link = ExternalLink::for_project(&project).expect("link");
    assert_eq!(link.action, Action::Navigate { url: "/case-study".into() });
    assert_eq!(link.label, "Behance");
}

#[test]
fn dialog_selection_keeps_last_project_while_closing() {
    let mut selection = ProjectSelection::default();
    selection.open(project("a"));
    assert!(selection.is_open());
    selection.close();
    assert!(!selection.is_open());
    assert_eq!(selection.selected().map(|p| p.external_url.as_str()), Some("a"));

    selection.open(project("b"));
    assert_eq!(selection.selected().map(|p| p.external_url.as_str()), Some("b"));
}

#[test]
fn backwards_time_step_is_rejected() {
    let json = r#"{ "background": { "timeStep": { "mode": "fixed", "seconds": -0.5 } } }"#;
    let err = PortfolioConfig::from_json(json).unwrap_err();
    assert!(err.to_string().contains("positive"), "{err}");
}
