//! UI Components for the portfolio page.
//!
//! One component per page section, plus the star field background and the
//! project card with its detail modal.

mod about;
mod contact;
mod hero;
mod nav_header;
mod project_card;
mod skills;
mod social_sidebar;
mod star_field;

pub use about::About;
pub use contact::Contact;
pub use hero::Hero;
pub use nav_header::NavHeader;
pub use project_card::{ProjectCard, ProjectModal, ProjectsSection};
pub use skills::Skills;
pub use social_sidebar::SocialSidebar;
pub use star_field::StarField;
