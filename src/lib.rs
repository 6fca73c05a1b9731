//! toolcat - a submission store and intent classifier for tool discovery
//!
//! toolcat keeps the durable record of user-submitted catalog entries
//! behind a moderation gate (pending -> approved) and classifies free-text
//! chat messages into a fixed set of intent categories.

pub mod domain;
pub mod error;
pub mod id;
pub mod intent;
pub mod storage;
pub mod store;

pub use error::{Result, ToolcatError};
pub use store::ToolSubmissionStore;
