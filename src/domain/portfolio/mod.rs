pub mod entities;
pub mod services;
pub mod value_objects;

pub use entities::{ActionButton, CtaButtons, HeroContent, Logo, NavLink, PortfolioConfig, Project, Stat};
pub use services::{ExternalLink, ProjectSelection, needs_separator, screenshot_alt};
pub use value_objects::{Action, NavigationTarget};
