//! Project Record Type
//!
//! One immutable portfolio project entry as shown on a project card and
//! inside its detail modal.

use serde::{Deserialize, Serialize};

/// One portfolio project: card summary plus the full requirement sheet
/// rendered in the detail modal.
///
/// Records are supplied by the [`Catalog`](crate::Catalog) and never created
/// or mutated at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Project title, shown on the card and as the modal heading
    pub title: String,

    /// Short description, rendered as the project objectives in the modal
    pub description: String,

    /// Technology tags, in display order
    pub technologies: Vec<String>,

    /// Technology logo URLs shown on the card, in display order
    pub logos: Vec<String>,

    /// Requirement bullet points ("cahier des charges"), in display order
    #[serde(alias = "cahier")]
    pub requirements: Vec<String>,
}

impl ProjectRecord {
    /// Whether the record carries the minimum content a card needs.
    pub fn is_well_formed(&self) -> bool {
        !self.title.trim().is_empty() && !self.description.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ProjectRecord {
        ProjectRecord {
            title: "SmartShop".to_string(),
            description: "B2B commerce API".to_string(),
            technologies: vec!["Spring Boot".to_string(), "PostgreSQL".to_string()],
            logos: vec!["https://example.com/spring.svg".to_string()],
            requirements: vec!["Loyalty tiers".to_string(), "Split payments".to_string()],
        }
    }

    #[test]
    fn test_well_formed() {
        assert!(sample().is_well_formed());
    }

    #[test]
    fn test_empty_title_not_well_formed() {
        let mut record = sample();
        record.title = "   ".to_string();
        assert!(!record.is_well_formed());
    }

    #[test]
    fn test_deserialize_accepts_cahier_alias() {
        let json = r#"{
            "title": "Nostalgia",
            "description": "Cultural auctions platform",
            "technologies": ["Laravel"],
            "logos": [],
            "cahier": ["Real-time bidding", "PayPal integration"]
        }"#;
        let record: ProjectRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.requirements.len(), 2);
        assert_eq!(record.requirements[0], "Real-time bidding");
    }

    #[test]
    fn test_json_roundtrip_preserves_order() {
        let record = sample();
        let json = serde_json::to_string(&record).unwrap();
        let back: ProjectRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
