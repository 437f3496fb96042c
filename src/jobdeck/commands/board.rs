use crate::board::BoardColumns;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::jobs::JobTrackingStore;
use crate::store::StorageBackend;

pub fn run<B: StorageBackend>(store: &JobTrackingStore<B>) -> Result<CmdResult> {
    let jobs = store.list_all();
    let mut result = CmdResult::default();
    if jobs.is_empty() {
        result.add_message(CmdMessage::info("The board is empty. Add a job to get started."));
    }
    result.board = Some(BoardColumns::group(&jobs));
    Ok(result)
}
