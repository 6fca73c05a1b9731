//! The submitted-tool lifecycle store.
//!
//! `ToolSubmissionStore` owns the durable collection of submitted
//! catalog entries and the moderation gate over them. Every mutating
//! call performs a full read-modify-write of the collection against the
//! injected backend, which is only safe under a single logical writer
//! per medium; concurrent writers lose updates at whole-collection
//! granularity.
//!
//! Error policy is asymmetric on purpose: writes fail loud
//! (`Persistence`), reads fail soft (unreadable or unparsable persisted
//! data is treated as an empty collection so a corrupt medium never
//! blocks the rest of the application).

use log::warn;

use crate::domain::{CatalogEntry, SubmissionStatus, SubmittedTool, ToolForm};
use crate::error::Result;
use crate::storage::StorageBackend;

/// Store for submitted catalog entries with a moderation gate.
pub struct ToolSubmissionStore<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> ToolSubmissionStore<B> {
    /// Create a store over the given persistence backend.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Persist a new submission and return its id.
    ///
    /// The record enters in `pending` state with zeroed reputation; list
    /// fields are trimmed with blanks dropped and missing logo/currency
    /// resolve to their defaults. On a write failure nothing is
    /// appended.
    pub fn submit(&mut self, form: ToolForm) -> Result<String> {
        let mut tools = self.load();
        let tool = SubmittedTool::from_form(form);
        let id = tool.id.clone();
        tools.push(tool);
        self.persist(&tools)?;
        Ok(id)
    }

    /// All records, every status, in insertion order.
    pub fn list(&self) -> Vec<SubmittedTool> {
        self.load()
    }

    /// Look up a single record by id.
    pub fn get(&self, id: &str) -> Option<SubmittedTool> {
        self.load().into_iter().find(|t| t.id == id)
    }

    /// Flip a record's status to `approved` and persist.
    ///
    /// An unknown id is a deliberate no-op, not an error; the condition
    /// is logged so it stays observable. Re-approving an approved
    /// record is harmless.
    pub fn approve(&mut self, id: &str) -> Result<()> {
        let mut tools = self.load();
        match tools.iter_mut().find(|t| t.id == id) {
            Some(tool) => {
                tool.status = SubmissionStatus::Approved;
                self.persist(&tools)
            }
            None => {
                warn!("approve: no record with id {}", id);
                Ok(())
            }
        }
    }

    /// Approved records as public catalog entries, insertion order,
    /// moderation metadata stripped.
    pub fn list_approved(&self) -> Vec<CatalogEntry> {
        self.load()
            .iter()
            .filter(|t| t.status == SubmissionStatus::Approved)
            .map(CatalogEntry::from)
            .collect()
    }

    /// Approved entries matching a substring query.
    pub fn search_catalog(&self, query: &str) -> Vec<CatalogEntry> {
        self.list_approved()
            .into_iter()
            .filter(|e| e.matches_query(query))
            .collect()
    }

    /// Load the full collection, treating a missing, unreadable or
    /// unparsable medium as empty.
    fn load(&self) -> Vec<SubmittedTool> {
        let data = match self.backend.read() {
            Ok(Some(data)) => data,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("unreadable catalog medium, treating as empty: {}", e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&data) {
            Ok(tools) => tools,
            Err(e) => {
                warn!("unparsable catalog data, treating as empty: {}", e);
                Vec::new()
            }
        }
    }

    /// Serialize and write the whole collection.
    fn persist(&mut self, tools: &[SubmittedTool]) -> Result<()> {
        let data = serde_json::to_string(tools)?;
        self.backend.write(&data)
    }
}
