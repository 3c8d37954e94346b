//! Page sections. Each component takes plain config values; the only shared
//! reactive state is the dialog's [`ProjectSelection`](crate::domain::portfolio::ProjectSelection).

pub mod background;
pub mod dialog;
pub mod hero;
pub mod nav;
pub mod projects;
pub mod stats;

pub use background::AuroraBackground;
pub use dialog::ProjectDialog;
pub use hero::Hero;
pub use nav::NavBar;
pub use projects::{ProjectCard, ProjectGrid};
pub use stats::StatsStrip;
