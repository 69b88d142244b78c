//! # Snipz Architecture
//!
//! Snipz keeps small named text fragments ("snippets") in a single JSON file and
//! exposes four operations on them: list, show, add and delete. The library holds
//! all of the logic; the `snipz` binary is a thin client on top of it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints results, reads the console      │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per operation, returns `CmdResult`            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - SnippetStore owns the table for one invocation           │
//! │  - StorageBackend trait: FsBackend (production),            │
//! │    MemBackend (testing)                                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Lifecycle
//!
//! Every invocation of the binary does exactly one thing: build a store, load the
//! table, run one command, persist if the command mutated the table, exit. There is
//! no locking; two concurrent writers race and the last save wins.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Logic for each operation
//! - [`store`]: Snippet store and its storage backends
//! - [`model`]: The snippet table
//! - [`input`]: Reading a snippet body from a line-oriented source
//! - [`config`]: Location of the persistence file
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod store;
