use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::jobs::JobTrackingStore;
use crate::store::StorageBackend;

pub fn run<B: StorageBackend>(store: &JobTrackingStore<B>) -> Result<CmdResult> {
    let analytics = store.analytics();
    let mut result = CmdResult::default();
    if analytics.total == 0 {
        result.add_message(CmdMessage::info("No jobs tracked yet."));
    }
    if let Some(updated) = store.last_updated() {
        result.add_message(CmdMessage::info(format!(
            "Last updated {}",
            updated.format("%Y-%m-%d %H:%M UTC")
        )));
    }
    result.analytics = Some(analytics);
    Ok(result)
}
