//! Submitted tool record and related types
//!
//! `SubmittedTool` is the persisted entity. It is created from a
//! `ToolForm` (validation of the form itself is the caller's job),
//! moderated through its `status` field, and exposed publicly only via
//! `CatalogEntry`.

use crate::id::{generate_submission_id, now_ms};
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Logo path used when a submission carries no logo reference
pub const PLACEHOLDER_LOGO: &str = "/icons/unknown-icon.svg";

/// Currency used when a submission does not specify one
pub const DEFAULT_CURRENCY: &str = "USD";

/// Moderation state of a submitted tool.
///
/// `Rejected` is admitted by the type for forward compatibility but no
/// operation currently produces it; the only exercised transition is
/// `Pending -> Approved`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    /// Awaiting moderation (initial state of every submission)
    Pending,
    /// Visible in the public catalog
    Approved,
    /// Declined by moderation (never set by any current operation)
    Rejected,
}

impl SubmissionStatus {
    /// String form matching the serialized representation
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Pending => "pending",
            SubmissionStatus::Approved => "approved",
            SubmissionStatus::Rejected => "rejected",
        }
    }
}

impl std::str::FromStr for SubmissionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(SubmissionStatus::Pending),
            "approved" => Ok(SubmissionStatus::Approved),
            "rejected" => Ok(SubmissionStatus::Rejected),
            other => Err(format!("unknown status: {}", other)),
        }
    }
}

/// The validated form-data bundle passed to `submit`.
///
/// Required-field and format validation happens upstream; the store only
/// normalizes optional fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolForm {
    pub name: String,
    pub category: String,
    pub pricing_type: String,
    pub price: Option<f64>,
    pub currency: Option<String>,
    pub description: String,
    pub features: Vec<String>,
    pub tags: Vec<String>,
    pub compatibility: Vec<String>,
    pub website: String,
    pub logo: Option<String>,
    pub submitter_name: String,
}

/// The persisted catalog entry.
///
/// The JSON array of these records is the store's wire format and must
/// round-trip byte-equivalently through serde.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubmittedTool {
    //=== Moderation metadata (stripped from the public view) ===
    /// Unique identifier (timestamp + random suffix), assigned once
    pub id: String,

    /// Current moderation state
    pub status: SubmissionStatus,

    /// Name of the submitter, immutable after creation
    pub submitted_by: String,

    /// Unix timestamp in milliseconds, immutable after creation
    pub submitted_at: i64,

    //=== Catalog fields (pass-through, public) ===
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

    /// Date stamp (YYYY-MM-DD) set at creation
    pub last_updated: String,

    //=== Reputation (always zeroed at creation, never caller-set) ===
    pub rating: f64,
    pub review_count: u32,
}

impl SubmittedTool {
    /// Build a new pending record from form data.
    ///
    /// Applies the creation-time defaults: fresh id, `pending` status,
    /// zeroed reputation, trimmed list fields with blanks dropped,
    /// placeholder logo and USD currency when unspecified.
    pub fn from_form(form: ToolForm) -> Self {
        Self {
            id: generate_submission_id(),
            status: SubmissionStatus::Pending,
            submitted_by: form.submitter_name,
            submitted_at: now_ms(),
            name: form.name,
            category: form.category,
            pricing_type: form.pricing_type,
            price: form.price,
            currency: non_blank(form.currency).unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
            description: form.description,
            features: normalize_list(form.features),
            tags: normalize_list(form.tags),
            compatibility: normalize_list(form.compatibility),
            website: form.website,
            logo: non_blank(form.logo).unwrap_or_else(|| PLACEHOLDER_LOGO.to_string()),
            last_updated: Utc::now().format("%Y-%m-%d").to_string(),
            rating: 0.0,
            review_count: 0,
        }
    }
}

/// Trim each entry and drop the ones left empty.
fn normalize_list(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Trimmed value of an optional string, or None if missing/blank.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
