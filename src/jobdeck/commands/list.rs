use crate::board::JobQuery;
use crate::commands::{CmdMessage, CmdResult, Paging};
use crate::error::Result;
use crate::jobs::JobTrackingStore;
use crate::store::StorageBackend;

pub fn run<B: StorageBackend>(store: &JobTrackingStore<B>, query: &JobQuery) -> Result<CmdResult> {
    let page = query.refresh(store);
    let mut result = CmdResult::default();

    if page.total == 0 {
        result.add_message(CmdMessage::info("No jobs found."));
    }
    result.paging = Some(Paging {
        page: page.page,
        pages: page.pages,
        total: page.total,
    });

    Ok(result.with_jobs(page.items))
}
