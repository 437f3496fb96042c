use crate::documents::DocumentStore;
use crate::error::{JobdeckError, Result};
use crate::jobs::JobTrackingStore;
use crate::model::{CareerDocument, TrackedJob};
use crate::store::StorageBackend;

/// Resolves each input to one record: an exact id wins, otherwise the input
/// must be a prefix of exactly one id.
fn resolve<T, S: AsRef<str>>(
    records: &[T],
    inputs: &[S],
    id_of: impl Fn(&T) -> &str,
    kind: &str,
) -> Result<Vec<T>>
where
    T: Clone,
{
    let mut resolved = Vec::with_capacity(inputs.len());
    for input in inputs {
        let input = input.as_ref().trim();
        if input.is_empty() {
            return Err(JobdeckError::Api(format!("Empty {} id", kind)));
        }

        if let Some(exact) = records.iter().find(|r| id_of(r) == input) {
            resolved.push(exact.clone());
            continue;
        }

        let matches: Vec<&T> = records
            .iter()
            .filter(|r| id_of(r).starts_with(input))
            .collect();
        match matches.as_slice() {
            [single] => resolved.push((*single).clone()),
            [] => return Err(JobdeckError::NotFound(format!("{} {}", kind, input))),
            _ => {
                return Err(JobdeckError::Api(format!(
                    "Ambiguous {} id {:?} matches {} records",
                    kind,
                    input,
                    matches.len()
                )))
            }
        }
    }
    Ok(resolved)
}

pub fn resolve_jobs<B: StorageBackend, S: AsRef<str>>(
    store: &JobTrackingStore<B>,
    inputs: &[S],
) -> Result<Vec<TrackedJob>> {
    resolve(&store.list_all(), inputs, |j| j.id.as_str(), "job")
}

pub fn resolve_job<B: StorageBackend>(store: &JobTrackingStore<B>, input: &str) -> Result<TrackedJob> {
    resolve_jobs(store, &[input])?
        .pop()
        .ok_or_else(|| JobdeckError::NotFound(format!("job {}", input)))
}

pub fn resolve_documents<B: StorageBackend, S: AsRef<str>>(
    store: &DocumentStore<B>,
    inputs: &[S],
) -> Result<Vec<CareerDocument>> {
    resolve(&store.list_all(), inputs, |d| d.id.as_str(), "document")
}

pub fn resolve_document<B: StorageBackend>(
    store: &DocumentStore<B>,
    input: &str,
) -> Result<CareerDocument> {
    resolve_documents(store, &[input])?
        .pop()
        .ok_or_else(|| JobdeckError::NotFound(format!("document {}", input)))
}
