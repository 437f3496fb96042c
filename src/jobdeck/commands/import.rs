use crate::commands::{CmdMessage, CmdResult};
use crate::error::{JobdeckError, Result};
use crate::jobs::JobTrackingStore;
use crate::model::NewJob;
use crate::store::StorageBackend;
use std::fs;
use std::path::Path;

/// Imports a JSON array of job objects (same field names as the stored
/// records; every field optional).
pub fn run<B: StorageBackend>(
    store: &JobTrackingStore<B>,
    path: &Path,
    source: &str,
) -> Result<CmdResult> {
    let content = fs::read_to_string(path).map_err(JobdeckError::Io)?;
    let inputs: Vec<NewJob> = serde_json::from_str(&content).map_err(JobdeckError::Serialization)?;

    let mut result = CmdResult::default();
    if inputs.is_empty() {
        result.add_message(CmdMessage::info("Nothing to import."));
        return Ok(result);
    }

    let report = store.import(inputs, source);
    if !report.saved {
        result.add_message(CmdMessage::error("Failed to save imported jobs"));
        return Ok(result);
    }

    for (title, company) in &report.duplicates {
        result.add_message(CmdMessage::warning(format!(
            "Skipped duplicate: {} at {}",
            title, company
        )));
    }
    result.add_message(CmdMessage::success(format!(
        "Imported {} job(s) from {}",
        report.added.len(),
        path.display()
    )));
    Ok(result.with_jobs(report.added))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn imports_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jobs.json");
        fs::write(
            &path,
            r#"[
                {"title": "Engineer", "company": "Acme", "url": "https://a.example/1"},
                {"title": "Engineer", "company": "Acme"},
                {"company": "Globex", "matchScore": 64}
            ]"#,
        )
        .unwrap();

        let store = JobTrackingStore::new(MemBackend::new());
        let result = run(&store, &path, "import").unwrap();
        assert_eq!(result.jobs.len(), 2);
        assert_eq!(store.list_all().len(), 2);
        assert!(result.messages[0].content.starts_with("Skipped duplicate"));
        let untitled = store.list_all().into_iter().find(|j| j.company == "Globex").unwrap();
        assert_eq!(untitled.title, "Untitled Position");
        assert_eq!(untitled.match_score, 64);
    }

    #[test]
    fn bad_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jobs.json");
        fs::write(&path, "{").unwrap();
        let store = JobTrackingStore::new(MemBackend::new());
        assert!(matches!(
            run(&store, &path, "import"),
            Err(JobdeckError::Serialization(_))
        ));
    }
}
