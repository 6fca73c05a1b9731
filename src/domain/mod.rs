//! Domain types for toolcat
//!
//! This module contains the core domain types:
//! - SubmittedTool: the persisted catalog entry with moderation state
//! - SubmissionStatus: the moderation gate (pending/approved/rejected)
//! - ToolForm: the validated input bundle handed to the store
//! - CatalogEntry: the public catalog view with moderation metadata stripped

pub mod catalog;
pub mod tool;

pub use catalog::CatalogEntry;
pub use tool::{DEFAULT_CURRENCY, PLACEHOLDER_LOGO, SubmissionStatus, SubmittedTool, ToolForm};
