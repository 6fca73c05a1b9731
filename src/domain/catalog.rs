//! Public catalog view of a submitted tool.
//!
//! `CatalogEntry` is the shape handed to display and search surfaces. It
//! carries every catalog field of the underlying record and none of the
//! moderation metadata (`id`, `submitted_by`, `submitted_at`, `status`).

use serde::{Deserialize, Serialize};

use super::tool::SubmittedTool;

/// A catalog-facing record with moderation metadata stripped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogEntry {
    pub name: String,
    pub category: String,
    pub pricing_type: String,
    pub price: Option<f64>,
    pub currency: String,
    pub description: String,
    pub features: Vec<String>,
    pub tags: Vec<String>,
    pub compatibility: Vec<String>,
    pub website: String,
    pub logo: String,
    pub last_updated: String,
    pub rating: f64,
    pub review_count: u32,
}

impl From<&SubmittedTool> for CatalogEntry {
    fn from(tool: &SubmittedTool) -> Self {
        Self {
            name: tool.name.clone(),
            category: tool.category.clone(),
            pricing_type: tool.pricing_type.clone(),
            price: tool.price,
            currency: tool.currency.clone(),
            description: tool.description.clone(),
            features: tool.features.clone(),
            tags: tool.tags.clone(),
            compatibility: tool.compatibility.clone(),
            website: tool.website.clone(),
            logo: tool.logo.clone(),
            last_updated: tool.last_updated.clone(),
            rating: tool.rating,
            review_count: tool.review_count,
        }
    }
}

impl CatalogEntry {
    /// Case-insensitive substring match over name, description, category
    /// and tags. An empty query matches everything.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }

        self.name.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
            || self.category.to_lowercase().contains(&query)
            || self.tags.iter().any(|t| t.to_lowercase().contains(&query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tool::ToolForm;

    fn sample_entry() -> CatalogEntry {
        let form = ToolForm {
            name: "Acme Deploy".to_string(),
            category: "dev-tools".to_string(),
            pricing_type: "free".to_string(),
            description: "One-click deployments".to_string(),
            tags: vec!["ci".to_string(), "automation".to_string()],
            website: "https://acme.io".to_string(),
            submitter_name: "jane".to_string(),
            ..Default::default()
        };
        CatalogEntry::from(&SubmittedTool::from_form(form))
    }

    #[test]
    fn test_entry_carries_catalog_fields() {
        let entry = sample_entry();
        assert_eq!(entry.name, "Acme Deploy");
        assert_eq!(entry.category, "dev-tools");
        assert_eq!(entry.rating, 0.0);
        assert_eq!(entry.review_count, 0);
    }

    #[test]
    fn test_entry_json_has_no_moderation_metadata() {
        let entry = sample_entry();
        let value = serde_json::to_value(&entry).unwrap();
        let obj = value.as_object().unwrap();

        assert!(!obj.contains_key("id"));
        assert!(!obj.contains_key("status"));
        assert!(!obj.contains_key("submitted_by"));
        assert!(!obj.contains_key("submitted_at"));
    }

    #[test]
    fn test_matches_query_on_name() {
        let entry = sample_entry();
        assert!(entry.matches_query("acme"));
        assert!(entry.matches_query("DEPLOY"));
    }

    #[test]
    fn test_matches_query_on_tags() {
        let entry = sample_entry();
        assert!(entry.matches_query("automation"));
        assert!(!entry.matches_query("database"));
    }

    #[test]
    fn test_matches_query_empty_matches_all() {
        let entry = sample_entry();
        assert!(entry.matches_query(""));
        assert!(entry.matches_query("   "));
    }
}
