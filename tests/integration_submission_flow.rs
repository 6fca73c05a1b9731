//! Submission lifecycle integration tests
//!
//! Exercises the store end to end over the file backend: submit,
//! moderate, reopen, and read the public catalog view.

use tempfile::TempDir;
use toolcat::domain::{SubmissionStatus, SubmittedTool, ToolForm};
use toolcat::error::Result;
use toolcat::intent::{Intent, classify};
use toolcat::storage::{FileBackend, StorageBackend};
use toolcat::store::ToolSubmissionStore;

fn sample_form(name: &str) -> ToolForm {
    ToolForm {
        name: name.to_string(),
        category: "dev-tools".to_string(),
        pricing_type: "free".to_string(),
        description: "x".to_string(),
        website: "https://a.io".to_string(),
        submitter_name: "jane".to_string(),
        ..Default::default()
    }
}

/// Integration test: a submission survives a store restart
#[test]
fn test_submission_persists_across_instances() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("catalog.json");

    let id = {
        let mut store = ToolSubmissionStore::new(FileBackend::new(&path)?);
        store.submit(sample_form("Acme"))?
    };

    {
        let store = ToolSubmissionStore::new(FileBackend::new(&path)?);
        let tool = store.get(&id).expect("record should survive reopen");
        assert_eq!(tool.name, "Acme");
        assert_eq!(tool.status, SubmissionStatus::Pending);
    }

    Ok(())
}

/// Integration test: full moderate-then-publish flow, two submissions,
/// one approval
#[test]
fn test_approve_one_of_two_then_catalog() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("catalog.json");
    let mut store = ToolSubmissionStore::new(FileBackend::new(&path)?);

    let first = store.submit(sample_form("First"))?;
    let _second = store.submit(sample_form("Second"))?;

    store.approve(&first)?;

    let catalog = store.list_approved();
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog[0].name, "First");

    // Approval persisted: a fresh instance sees the same catalog
    let reopened = ToolSubmissionStore::new(FileBackend::new(&path)?);
    assert_eq!(reopened.list_approved().len(), 1);
    assert_eq!(reopened.list().len(), 2);

    Ok(())
}

/// Integration test: form normalization on the way into the store
#[test]
fn test_submit_applies_normalization() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let mut store = ToolSubmissionStore::new(FileBackend::new(temp_dir.path().join("catalog.json"))?);

    let form = ToolForm {
        features: vec!["a".to_string(), "".to_string(), " b ".to_string()],
        tags: vec!["".to_string(), "ai".to_string()],
        ..sample_form("Acme")
    };

    let id = store.submit(form)?;
    let tool = store.get(&id).expect("just submitted");

    assert_eq!(tool.features, vec!["a", "b"]);
    assert_eq!(tool.tags, vec!["ai"]);
    assert!(tool.compatibility.is_empty());
    assert_eq!(tool.logo, "/icons/unknown-icon.svg");
    assert_eq!(tool.status.as_str(), "pending");
    assert_eq!(tool.rating, 0.0);
    assert_eq!(tool.review_count, 0);

    Ok(())
}

/// Integration test: a corrupt catalog file reads as empty and the next
/// write recovers it
#[test]
fn test_corrupt_file_tolerance() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("catalog.json");
    std::fs::write(&path, "{{{ definitely not json")?;

    let mut store = ToolSubmissionStore::new(FileBackend::new(&path)?);
    assert!(store.list().is_empty());

    let id = store.submit(sample_form("Fresh"))?;
    assert_eq!(store.list().len(), 1);
    assert_eq!(store.list()[0].id, id);

    Ok(())
}

/// Integration test: the persisted wire format round-trips
#[test]
fn test_wire_format_roundtrip() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("catalog.json");
    let mut store = ToolSubmissionStore::new(FileBackend::new(&path)?);

    for i in 0..50 {
        store.submit(sample_form(&format!("tool-{}", i)))?;
    }

    let backend = FileBackend::new(&path)?;
    let raw = backend.read()?.expect("collection written");
    let parsed: Vec<SubmittedTool> = serde_json::from_str(&raw)?;
    assert_eq!(parsed, store.list());

    Ok(())
}

/// Integration test: approve on an unknown id leaves the file untouched
#[test]
fn test_unknown_approve_is_noop_on_disk() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("catalog.json");
    let mut store = ToolSubmissionStore::new(FileBackend::new(&path)?);

    let id = store.submit(sample_form("Acme"))?;
    let before = FileBackend::new(&path)?.read()?;

    store.approve("does-not-exist")?;

    let after = FileBackend::new(&path)?.read()?;
    assert_eq!(before, after);
    assert_eq!(store.get(&id).unwrap().status, SubmissionStatus::Pending);

    Ok(())
}

/// Integration test: classifier scenarios through the public API
#[test]
fn test_classifier_scenarios() {
    assert_eq!(classify("Can you recommend a tool for my project?"), Intent::Recommendation);
    assert_eq!(classify("compare Docker vs Podman"), Intent::Comparison);
    assert_eq!(classify("what are the latest trending AI tools"), Intent::Trends);
    assert_eq!(classify("anything else entirely"), Intent::General);
}
