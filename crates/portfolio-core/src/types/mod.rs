//! Content data types for the portfolio page.

pub mod profile;
pub mod project;
pub mod skill;

pub use profile::Profile;
pub use project::ProjectRecord;
pub use skill::{Skill, SkillGroup};
