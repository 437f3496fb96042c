use crate::commands::{CmdMessage, CmdResult, JobUpdate};
use crate::error::Result;
use crate::jobs::JobTrackingStore;
use crate::store::StorageBackend;

use super::helpers::resolve_job;

pub fn run<B: StorageBackend>(
    store: &JobTrackingStore<B>,
    id: &str,
    update: JobUpdate,
) -> Result<CmdResult> {
    let mut job = resolve_job(store, id)?;
    let mut result = CmdResult::default();

    if update.is_empty() {
        result.add_message(CmdMessage::info("Nothing to update."));
        return Ok(result);
    }

    update.apply(&mut job);
    if store.update(&job) {
        result.add_message(CmdMessage::success(format!(
            "Job updated: {} at {}",
            job.title, job.company
        )));
        result.jobs.push(job);
    } else {
        result.add_message(CmdMessage::error(format!(
            "Failed to update {} at {}",
            job.title, job.company
        )));
    }
    Ok(result)
}
