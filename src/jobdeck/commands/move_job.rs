use crate::board;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::jobs::JobTrackingStore;
use crate::model::JobStatus;
use crate::store::StorageBackend;

use super::helpers::resolve_job;

pub fn run<B: StorageBackend>(
    store: &JobTrackingStore<B>,
    id: &str,
    target: JobStatus,
) -> Result<CmdResult> {
    let job = resolve_job(store, id)?;
    let outcome = board::move_job(store, &job.id, target);
    let mut result = CmdResult::default();

    if !outcome.moved {
        result.add_message(CmdMessage::error(format!(
            "Failed to move {} to {}",
            job.title,
            target.label()
        )));
        return Ok(result);
    }

    result.add_message(CmdMessage::success(format!(
        "{} at {}: {} -> {}",
        job.title,
        job.company,
        job.status.label(),
        target.label()
    )));
    if let Some(notice) = outcome.notice {
        result.add_message(CmdMessage::info(notice));
    }
    if let Some(moved) = outcome.job {
        result.jobs.push(moved);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::JobdeckError;
    use crate::model::NewJob;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn moves_by_id_prefix() {
        let store = JobTrackingStore::new(MemBackend::new());
        let job = store
            .add(NewJob::new("Engineer", "Acme"), "manual", JobStatus::Applied)
            .job
            .unwrap();

        let result = run(&store, &job.id[..job.id.len() - 2], JobStatus::Interviewing).unwrap();
        assert_eq!(result.messages.len(), 2);
        assert!(result.messages[1].content.contains("Interview stage"));
        assert_eq!(result.jobs[0].status, JobStatus::Interviewing);
    }

    #[test]
    fn unknown_id_is_an_error() {
        let store = JobTrackingStore::new(MemBackend::new());
        assert!(matches!(
            run(&store, "job_nope", JobStatus::Offer),
            Err(JobdeckError::NotFound(_))
        ));
    }
}
