//! # Kanban Board
//!
//! Column grouping, card moves and the filtered/sorted/paged view of the job
//! collection. Views hold no state of their own between refreshes: on every
//! change signal they call `list_all()` again and recompute from scratch.
//!
//! ## Moves
//!
//! Any status may move to any other. Two targets have side effects:
//! - `applied`: stamps `application_date` with today's date if it is unset,
//!   in the same `update` call as the status change.
//! - `interviewing`: produces a notice for the user; stored data changes only
//!   by the status field.

use crate::error::JobdeckError;
use crate::jobs::JobTrackingStore;
use crate::model::{local_date, JobStatus, TrackedJob};
use crate::store::StorageBackend;
use chrono::Utc;
use std::cmp::Reverse;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq)]
pub struct MoveOutcome {
    pub moved: bool,
    pub job: Option<TrackedJob>,
    /// Message for the user, if the transition calls for one.
    pub notice: Option<String>,
}

impl MoveOutcome {
    fn not_moved() -> Self {
        Self {
            moved: false,
            job: None,
            notice: None,
        }
    }
}

/// Applies a drop of card `id` onto column `target`.
pub fn move_job<B: StorageBackend>(
    store: &JobTrackingStore<B>,
    id: &str,
    target: JobStatus,
) -> MoveOutcome {
    let Some(mut job) = store.get_by_id(id) else {
        return MoveOutcome::not_moved();
    };

    job.status = target;
    if target == JobStatus::Applied && job.application_date.is_none() {
        job.application_date = Some(local_date(Utc::now()));
    }

    if !store.update(&job) {
        return MoveOutcome::not_moved();
    }

    let notice = match target {
        JobStatus::Interviewing => Some(format!(
            "Interview stage reached for {} at {}. Time to prepare!",
            job.title, job.company
        )),
        _ => None,
    };

    MoveOutcome {
        moved: true,
        job: Some(job),
        notice,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoardColumn {
    pub status: JobStatus,
    pub jobs: Vec<TrackedJob>,
}

/// One column per status, in board order, each keeping collection order.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardColumns {
    pub columns: Vec<BoardColumn>,
}

impl BoardColumns {
    pub fn group(jobs: &[TrackedJob]) -> Self {
        let columns = JobStatus::ALL
            .iter()
            .map(|status| BoardColumn {
                status: *status,
                jobs: jobs.iter().filter(|j| j.status == *status).cloned().collect(),
            })
            .collect();
        Self { columns }
    }

    pub fn column(&self, status: JobStatus) -> &[TrackedJob] {
        self.columns
            .iter()
            .find(|c| c.status == status)
            .map(|c| c.jobs.as_slice())
            .unwrap_or(&[])
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Newest first.
    #[default]
    Added,
    /// Highest first.
    MatchScore,
    Company,
    Title,
}

impl FromStr for SortKey {
    type Err = JobdeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "added" | "date" | "recent" => Ok(SortKey::Added),
            "score" | "match" | "match-score" => Ok(SortKey::MatchScore),
            "company" => Ok(SortKey::Company),
            "title" => Ok(SortKey::Title),
            _ => Err(JobdeckError::Api(format!("Unknown sort key: {}", s))),
        }
    }
}

/// Filters, ordering and paging for a job list view.
#[derive(Debug, Clone, PartialEq)]
pub struct JobQuery {
    /// Empty means every status.
    pub statuses: Vec<JobStatus>,
    pub source: Option<String>,
    pub search: Option<String>,
    pub sort: SortKey,
    /// 1-based.
    pub page: usize,
    /// 0 disables paging.
    pub per_page: usize,
}

impl Default for JobQuery {
    fn default() -> Self {
        Self {
            statuses: Vec::new(),
            source: None,
            search: None,
            sort: SortKey::default(),
            page: 1,
            per_page: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct JobPage {
    pub items: Vec<TrackedJob>,
    /// Matches before paging.
    pub total: usize,
    pub page: usize,
    pub pages: usize,
}

impl JobQuery {
    pub fn matches(&self, job: &TrackedJob) -> bool {
        if !self.statuses.is_empty() && !self.statuses.contains(&job.status) {
            return false;
        }
        if let Some(source) = &self.source {
            if !job.source.eq_ignore_ascii_case(source) {
                return false;
            }
        }
        if let Some(term) = self.search.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            let term = term.to_lowercase();
            let hit = [&job.title, &job.company, &job.location, &job.notes]
                .iter()
                .any(|field| field.to_lowercase().contains(&term));
            if !hit {
                return false;
            }
        }
        true
    }

    pub fn apply(&self, jobs: &[TrackedJob]) -> JobPage {
        let mut items: Vec<TrackedJob> = jobs.iter().filter(|j| self.matches(j)).cloned().collect();

        match self.sort {
            SortKey::Added => items.sort_by_key(|j| Reverse(j.added_at)),
            SortKey::MatchScore => items.sort_by_key(|j| Reverse(j.match_score)),
            SortKey::Company => items.sort_by_key(|j| j.company.to_lowercase()),
            SortKey::Title => items.sort_by_key(|j| j.title.to_lowercase()),
        }

        let total = items.len();
        if self.per_page == 0 {
            return JobPage {
                items,
                total,
                page: 1,
                pages: 1,
            };
        }

        let pages = total.div_ceil(self.per_page).max(1);
        let page = self.page.clamp(1, pages);
        let items = items
            .into_iter()
            .skip((page - 1) * self.per_page)
            .take(self.per_page)
            .collect();

        JobPage {
            items,
            total,
            page,
            pages,
        }
    }

    /// Re-reads the store and recomputes the view.
    pub fn refresh<B: StorageBackend>(&self, store: &JobTrackingStore<B>) -> JobPage {
        self.apply(&store.list_all())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NewJob;
    use crate::store::mem_backend::MemBackend;
    use chrono::NaiveDate;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn store() -> JobTrackingStore<MemBackend> {
        JobTrackingStore::new(MemBackend::new())
    }

    fn add(store: &JobTrackingStore<MemBackend>, title: &str, status: JobStatus) -> TrackedJob {
        store
            .add(NewJob::new(title, "Acme"), "manual", status)
            .job
            .unwrap()
    }

    #[test]
    fn move_into_applied_stamps_date() {
        let store = store();
        let job = add(&store, "Engineer", JobStatus::Reviewing);
        assert!(job.application_date.is_none());

        let outcome = move_job(&store, &job.id, JobStatus::Applied);
        assert!(outcome.moved);
        assert!(outcome.notice.is_none());

        let stored = store.get_by_id(&job.id).unwrap();
        assert_eq!(stored.status, JobStatus::Applied);
        assert_eq!(stored.application_date, Some(local_date(Utc::now())));
    }

    #[test]
    fn move_into_applied_keeps_existing_date() {
        let store = store();
        let mut job = add(&store, "Engineer", JobStatus::Reviewing);
        let earlier = NaiveDate::from_ymd_opt(2023, 11, 2).unwrap();
        job.application_date = Some(earlier);
        store.update(&job);

        move_job(&store, &job.id, JobStatus::Applied);
        assert_eq!(store.get_by_id(&job.id).unwrap().application_date, Some(earlier));
    }

    #[test]
    fn move_into_interviewing_gives_notice_only() {
        let store = store();
        let job = add(&store, "Engineer", JobStatus::Applied);
        let outcome = move_job(&store, &job.id, JobStatus::Interviewing);
        assert!(outcome.notice.unwrap().contains("Engineer"));

        let stored = store.get_by_id(&job.id).unwrap();
        assert_eq!(stored.status, JobStatus::Interviewing);
        assert_eq!(stored.application_date, job.application_date);
        assert!(stored.interview_date.is_none());
    }

    #[test]
    fn any_status_can_move_anywhere() {
        let store = store();
        let job = add(&store, "Engineer", JobStatus::Offer);
        assert!(move_job(&store, &job.id, JobStatus::NewLeads).moved);
        assert!(move_job(&store, &job.id, JobStatus::Archived).moved);
        assert_eq!(store.get_by_id(&job.id).unwrap().status, JobStatus::Archived);
    }

    #[test]
    fn move_unknown_card_does_nothing() {
        let store = store();
        add(&store, "Engineer", JobStatus::NewLeads);
        let outcome = move_job(&store, "missing", JobStatus::Applied);
        assert!(!outcome.moved);
        assert!(outcome.job.is_none());
    }

    #[test]
    fn columns_follow_board_order() {
        let store = store();
        add(&store, "a", JobStatus::Offer);
        add(&store, "b", JobStatus::NewLeads);
        add(&store, "c", JobStatus::Offer);
        let board = BoardColumns::group(&store.list_all());

        assert_eq!(board.columns.len(), JobStatus::ALL.len());
        assert_eq!(board.columns[0].status, JobStatus::NewLeads);
        let offers: Vec<&str> = board
            .column(JobStatus::Offer)
            .iter()
            .map(|j| j.title.as_str())
            .collect();
        assert_eq!(offers, vec!["a", "c"]);
        assert!(board.column(JobStatus::Rejected).is_empty());
    }

    #[test]
    fn query_filters_by_status_and_search() {
        let store = store();
        add(&store, "Backend Engineer", JobStatus::Applied);
        add(&store, "Frontend Engineer", JobStatus::NewLeads);
        add(&store, "Designer", JobStatus::Applied);

        let query = JobQuery {
            statuses: vec![JobStatus::Applied],
            search: Some("engineer".into()),
            ..Default::default()
        };
        let page = query.refresh(&store);
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].title, "Backend Engineer");
    }

    #[test]
    fn query_sorts_by_score() {
        let store = store();
        for (title, score) in [("low", 10), ("high", 95), ("mid", 50)] {
            store.add(
                NewJob::new(title, "Acme").with_match_score(score),
                "manual",
                JobStatus::NewLeads,
            );
        }
        let query = JobQuery {
            sort: SortKey::MatchScore,
            ..Default::default()
        };
        let titles: Vec<String> = query.refresh(&store).items.into_iter().map(|j| j.title).collect();
        assert_eq!(titles, vec!["high", "mid", "low"]);
    }

    #[test]
    fn query_pages_and_clamps() {
        let store = store();
        for i in 0..5 {
            add(&store, &format!("job {}", i), JobStatus::NewLeads);
        }
        let query = JobQuery {
            sort: SortKey::Title,
            per_page: 2,
            page: 3,
            ..Default::default()
        };
        let page = query.refresh(&store);
        assert_eq!(page.total, 5);
        assert_eq!(page.pages, 3);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].title, "job 4");

        let beyond = JobQuery { page: 9, ..query };
        assert_eq!(beyond.refresh(&store).page, 3);
    }

    #[test]
    fn view_recomputes_on_every_change() {
        let store = Rc::new(store());
        let view: Rc<RefCell<Option<JobPage>>> = Rc::new(RefCell::new(None));
        let query = JobQuery {
            statuses: vec![JobStatus::Interviewing],
            ..Default::default()
        };

        let weak = Rc::downgrade(&store);
        let v = Rc::clone(&view);
        store.on_change(move || {
            if let Some(store) = weak.upgrade() {
                *v.borrow_mut() = Some(query.refresh(&store));
            }
        });

        let job = add(&store, "Engineer", JobStatus::Applied);
        assert_eq!(view.borrow().as_ref().unwrap().total, 0);

        move_job(&store, &job.id, JobStatus::Interviewing);
        assert_eq!(view.borrow().as_ref().unwrap().total, 1);
    }
}
