use crate::model::{JobStatus, TrackedJob};
use serde::Serialize;
use std::collections::BTreeMap;

pub const UNKNOWN_SOURCE: &str = "unknown";

/// Aggregates over the current job collection. Always recomputed, never stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobAnalytics {
    pub total: usize,
    /// Every status is present, zero counts included.
    pub by_status: BTreeMap<JobStatus, usize>,
    pub by_source: BTreeMap<String, usize>,
    /// Mean of the non-zero match scores, rounded; 0 when none are scored.
    pub average_match_score: u32,
    /// Status past `applied`, or an application date on record.
    pub total_applied: usize,
    /// Status `interviewing`/`offer`, or an interview date on record.
    pub total_interviews: usize,
    pub total_offers: usize,
}

impl JobAnalytics {
    pub fn from_jobs(jobs: &[TrackedJob]) -> Self {
        let mut by_status: BTreeMap<JobStatus, usize> =
            JobStatus::ALL.iter().map(|s| (*s, 0)).collect();
        let mut by_source: BTreeMap<String, usize> = BTreeMap::new();
        let mut score_sum: u64 = 0;
        let mut scored: u64 = 0;

        for job in jobs {
            *by_status.entry(job.status).or_insert(0) += 1;

            let source = if job.source.trim().is_empty() {
                UNKNOWN_SOURCE.to_string()
            } else {
                job.source.clone()
            };
            *by_source.entry(source).or_insert(0) += 1;

            if job.match_score > 0 {
                score_sum += u64::from(job.match_score);
                scored += 1;
            }
        }

        let average_match_score = if scored == 0 {
            0
        } else {
            (score_sum as f64 / scored as f64).round() as u32
        };

        Self {
            total: jobs.len(),
            by_status,
            by_source,
            average_match_score,
            total_applied: jobs.iter().filter(|j| j.has_applied()).count(),
            total_interviews: jobs.iter().filter(|j| j.has_interviewed()).count(),
            total_offers: jobs
                .iter()
                .filter(|j| j.status == JobStatus::Offer)
                .count(),
        }
    }

    pub fn count(&self, status: JobStatus) -> usize {
        self.by_status.get(&status).copied().unwrap_or(0)
    }

    /// Interviews per application, as a whole percentage.
    pub fn response_rate(&self) -> u32 {
        percentage(self.total_interviews, self.total_applied)
    }

    /// Offers per application, as a whole percentage.
    pub fn offer_rate(&self) -> u32 {
        percentage(self.total_offers, self.total_applied)
    }
}

fn percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    (part as f64 * 100.0 / whole as f64).round() as u32
}
