//! # Storage Layer
//!
//! jobdeck keeps each entity type in a single named slot of a flat key-value
//! area, the same shape as a browser's `localStorage`. The [`StorageBackend`]
//! trait is that area; the stores above it never touch files or maps directly.
//!
//! ## Slots
//!
//! | key                         | value                                   |
//! |-----------------------------|-----------------------------------------|
//! | `tracked_jobs`              | JSON array of `TrackedJob`              |
//! | `tracked_jobs_last_updated` | RFC 3339 timestamp of the last job write |
//! | `work_history_documents`    | JSON array of `CareerDocument`          |
//!
//! A slot is always read and written whole ([`collection::Collection`]).
//! There is no locking and no versioning: two writers sharing an area
//! overwrite each other, last write wins.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: one `<key>.json` file per slot, written atomically.
//! - [`mem_backend::MemBackend`]: a `HashMap`, for tests and embedding.

use crate::error::Result;
use std::rc::Rc;

pub mod collection;
pub mod fs_backend;
pub mod mem_backend;

pub const TRACKED_JOBS_KEY: &str = "tracked_jobs";
pub const TRACKED_JOBS_UPDATED_KEY: &str = "tracked_jobs_last_updated";
pub const DOCUMENTS_KEY: &str = "work_history_documents";

/// Raw string storage keyed by slot name.
///
/// All methods take `&self`; implementations use interior mutability since
/// jobdeck is single-threaded.
pub trait StorageBackend {
    /// Returns `Ok(None)` when the key was never written.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Removing a missing key is not an error.
    fn remove_item(&self, key: &str) -> Result<()>;

    fn keys(&self) -> Result<Vec<String>>;
}

/// Lets several stores (or several "tabs") share one storage area.
impl<B: StorageBackend + ?Sized> StorageBackend for Rc<B> {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        (**self).remove_item(key)
    }

    fn keys(&self) -> Result<Vec<String>> {
        (**self).keys()
    }
}
