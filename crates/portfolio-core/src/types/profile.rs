//! Profile Type
//!
//! Personal information rendered in the hero, about, contact, and social
//! sidebar sections.

use serde::{Deserialize, Serialize};

/// Owner profile for the portfolio page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Display name shown in the hero greeting
    pub name: String,

    /// Short monogram shown in the navigation bar
    pub monogram: String,

    /// Professional headline under the hero greeting
    pub headline: String,

    /// Longer tagline paragraph in the hero
    pub tagline: String,

    /// About-section paragraphs, in display order
    pub about: Vec<String>,

    /// City / country line
    pub location: String,

    /// Contact email address
    pub email: String,

    /// Contact phone number
    pub phone: String,

    /// Education line shown in the about info panel
    pub education: String,

    /// Portrait image URL or path
    pub portrait_url: String,

    /// GitHub profile URL
    pub github_url: String,

    /// LinkedIn profile URL
    pub linkedin_url: String,
}

impl Profile {
    /// First name, used by the hero greeting.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }

    /// `mailto:` link for the contact section.
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// `tel:` link for the contact section and social sidebar.
    pub fn tel(&self) -> String {
        format!("tel:{}", self.phone.replace(' ', ""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_links() {
        let profile = Profile {
            name: "Abdellatif Hissoune".to_string(),
            monogram: "AH".to_string(),
            headline: "Full Stack Developer".to_string(),
            tagline: String::new(),
            about: vec![],
            location: "Safi, Morocco".to_string(),
            email: "dev@example.com".to_string(),
            phone: "+212 690 732 817".to_string(),
            education: "YouCode (UM6P)".to_string(),
            portrait_url: String::new(),
            github_url: String::new(),
            linkedin_url: String::new(),
        };
        assert_eq!(profile.mailto(), "mailto:dev@example.com");
        assert_eq!(profile.tel(), "tel:+212690732817");
        assert_eq!(profile.first_name(), "Abdellatif");
    }
}
