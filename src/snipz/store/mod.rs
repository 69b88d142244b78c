//! # Storage Layer
//!
//! [`SnippetStore`] owns the snippet table for one invocation and exposes the
//! load/save/add/delete primitives the command layer builds on. Raw I/O goes
//! through the [`StorageBackend`] trait:
//!
//! - [`fs_backend::FsBackend`]: production backend, one JSON file on disk
//! - [`mem_backend::MemBackend`]: in-memory backend for tests, with error injection
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.config/micro/
//! ├── snippets.json          # {"name": "body", ...}, 2-space indented
//! └── .snippets-{uuid}.tmp   # transient, renamed over snippets.json on save
//! ```

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod snippet_store;

pub use backend::StorageBackend;
pub use snippet_store::SnippetStore;
