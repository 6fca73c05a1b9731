//! Intent classification for chat messages.
//!
//! Maps one free-text message to exactly one intent category using
//! ordered substring rules. This is a best-effort heuristic, not NLP:
//! the first matching rule wins and the rule order is part of the
//! contract (a message containing both "recommend" and "find" is a
//! recommendation, never a search).

use serde::{Deserialize, Serialize};

/// The fixed set of intent categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Recommendation,
    Search,
    Comparison,
    Implementation,
    CostAnalysis,
    Trends,
    StackBuilder,
    General,
}

impl Intent {
    /// String form matching the serialized representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Recommendation => "recommendation",
            Intent::Search => "search",
            Intent::Comparison => "comparison",
            Intent::Implementation => "implementation",
            Intent::CostAnalysis => "cost_analysis",
            Intent::Trends => "trends",
            Intent::StackBuilder => "stack_builder",
            Intent::General => "general",
        }
    }
}

/// Classify a message into exactly one intent.
///
/// Total function: never fails, empty input falls through to
/// `General`. Matching is case-insensitive; rules are evaluated in
/// priority order.
pub fn classify(message: &str) -> Intent {
    let msg = message.to_lowercase();

    if contains_any(&msg, &["recommend", "suggest", "need", "for my project", "for a"])
        || (msg.contains("best") && msg.contains("tool"))
    {
        Intent::Recommendation
    } else if contains_any(&msg, &["compare", "vs", "versus", "difference between"]) {
        Intent::Comparison
    } else if contains_any(&msg, &["find", "search", "show", "list", "looking for"]) {
        Intent::Search
    } else if msg.contains("implementation")
        && contains_any(&msg, &["analysis", "complexity", "timeline"])
    {
        Intent::Implementation
    } else if msg.contains("cost") && contains_any(&msg, &["analysis", "ownership", "calculate"]) {
        Intent::CostAnalysis
    } else if contains_any(&msg, &["trends", "latest", "popular", "trending"]) {
        Intent::Trends
    } else if contains_any(&msg, &["stack", "setup", "build a complete"]) {
        Intent::StackBuilder
    } else {
        Intent::General
    }
}

fn contains_any(message: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| message.contains(k))
}
