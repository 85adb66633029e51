//! Skill Types
//!
//! The skills grid: named groups of technologies, each with a devicon slug
//! resolved to a CDN icon URL at render time.

use serde::{Deserialize, Serialize};

/// Base URL for devicon SVG icons.
const DEVICON_CDN: &str = "https://cdn.jsdelivr.net/gh/devicons/devicon/icons";

/// One technology entry in the skills grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// Display name (e.g. "PostgreSQL")
    pub name: String,

    /// Devicon slug (e.g. "postgresql")
    pub icon: String,
}

impl Skill {
    pub fn new(name: &str, icon: &str) -> Self {
        Self {
            name: name.to_string(),
            icon: icon.to_string(),
        }
    }

    /// CDN URL for this skill's original-style devicon SVG.
    pub fn icon_url(&self) -> String {
        format!("{DEVICON_CDN}/{icon}/{icon}-original.svg", icon = self.icon)
    }
}

/// One column of the skills grid (e.g. "Front-End").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    /// Group heading
    pub name: String,

    /// Skills in display order
    pub skills: Vec<Skill>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_url() {
        let skill = Skill::new("PostgreSQL", "postgresql");
        assert_eq!(
            skill.icon_url(),
            "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/postgresql/postgresql-original.svg"
        );
    }
}
