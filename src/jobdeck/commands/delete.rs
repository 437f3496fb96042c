use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::jobs::JobTrackingStore;
use crate::store::StorageBackend;

use super::helpers::resolve_jobs;

/// Deletes every resolved job with one bulk write.
pub fn run<B: StorageBackend, S: AsRef<str>>(
    store: &JobTrackingStore<B>,
    ids: &[S],
) -> Result<CmdResult> {
    let jobs = resolve_jobs(store, ids)?;
    let mut result = CmdResult::default();

    let targets: Vec<&str> = jobs.iter().map(|j| j.id.as_str()).collect();
    if !store.bulk_delete(&targets) {
        result.add_message(CmdMessage::error("Failed to delete jobs"));
        return Ok(result);
    }

    for job in &jobs {
        result.add_message(CmdMessage::success(format!(
            "Job deleted: {} at {}",
            job.title, job.company
        )));
    }
    Ok(result.with_jobs(jobs))
}
