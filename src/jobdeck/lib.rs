//! # Jobdeck Architecture
//!
//! Jobdeck is a **UI-agnostic job search tracker**. It is a library that keeps
//! a list of job applications and a list of career documents (resumes, cover
//! letters) in a flat key-value storage area, with a CLI client on top.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, args.rs, wired by main.rs)                │
//! │  - Parses arguments, prints, owns exit codes and logging    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade; parses statuses/types; owns both stores     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Turns store outcomes into CmdResult + user messages      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Stores (jobs.rs, documents.rs, board.rs, analytics.rs)     │
//! │  - Full-collection read-modify-write, never raise           │
//! │  - Change notification (notify.rs)                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - StorageBackend trait: get/set/remove string items        │
//! │  - FsBackend (production), MemBackend (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Consistency
//!
//! Each entity type is one JSON array in one slot. Every mutation loads the
//! whole array, changes it and writes the whole array back. Two writers
//! sharing a storage area do not coordinate: the last full write wins. After
//! a successful write the store notifies its listeners, which re-read
//! everything; there is no diffing.
//!
//! ## Failure Handling
//!
//! The stores never return errors. A missing or corrupt slot reads as an
//! empty collection; a failed write returns `false` and is logged with
//! `tracing`. The command layer turns those into messages for the user.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per user action
//! - [`jobs`]: Job tracking store
//! - [`documents`]: Career document store
//! - [`board`]: Kanban moves, columns and list queries
//! - [`analytics`]: Derived pipeline statistics
//! - [`notify`]: Change notification
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Records, enums and default-applying factories
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod analytics;
pub mod api;
pub mod board;
pub mod commands;
pub mod config;
pub mod documents;
pub mod error;
pub mod jobs;
pub mod model;
pub mod notify;
pub mod store;
