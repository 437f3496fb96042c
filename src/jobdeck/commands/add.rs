use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::jobs::JobTrackingStore;
use crate::model::{JobStatus, NewJob};
use crate::store::StorageBackend;

pub fn run<B: StorageBackend>(
    store: &JobTrackingStore<B>,
    input: NewJob,
    source: &str,
    status: JobStatus,
) -> Result<CmdResult> {
    let outcome = store.add(input, source, status);
    let mut result = CmdResult::default();

    match outcome.job {
        Some(job) => {
            result.add_message(CmdMessage::success(format!(
                "Job added ({}): {} at {}",
                job.status.label(),
                job.title,
                job.company
            )));
            result.jobs.push(job);
        }
        None if outcome.duplicate => result.add_message(CmdMessage::warning(outcome.message)),
        None => result.add_message(CmdMessage::error(outcome.message)),
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn reports_added_job() {
        let store = JobTrackingStore::new(MemBackend::new());
        let result = run(&store, NewJob::new("Engineer", "Acme"), "manual", JobStatus::NewLeads).unwrap();
        assert_eq!(result.jobs.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
    }

    #[test]
    fn duplicate_is_a_warning() {
        let store = JobTrackingStore::new(MemBackend::new());
        run(&store, NewJob::new("Engineer", "Acme"), "manual", JobStatus::NewLeads).unwrap();
        let result = run(&store, NewJob::new("Engineer", "Acme"), "manual", JobStatus::NewLeads).unwrap();
        assert!(result.jobs.is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert!(result.messages[0].content.contains("already being tracked"));
    }

    #[test]
    fn failed_write_is_an_error_message() {
        let store = JobTrackingStore::new(MemBackend::new());
        store.backend().set_simulate_write_error(true);
        let result = run(&store, NewJob::new("Engineer", "Acme"), "manual", JobStatus::NewLeads).unwrap();
        assert!(result.has_errors());
    }
}
