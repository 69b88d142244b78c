//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for snipz
//! operations. It dispatches to `commands/*.rs` and returns structured
//! [`CmdResult`] values; it never prints and never exits.
//!
//! `SnipzApi<B: StorageBackend>` is generic over the storage backend:
//! - Production: `SnipzApi<FsBackend>`
//! - Testing: `SnipzApi<MemBackend>`

use crate::commands;
use crate::config::SnipzPaths;
use crate::error::Result;
use crate::store::fs_backend::FsBackend;
use crate::store::{SnippetStore, StorageBackend};
use std::io::BufRead;

pub struct SnipzApi<B: StorageBackend> {
    store: SnippetStore<B>,
}

impl SnipzApi<FsBackend> {
    /// Opens the file-backed store at `paths` and loads it.
    pub fn open(paths: &SnipzPaths) -> Result<Self> {
        Self::load(FsBackend::new(paths))
    }
}

impl<B: StorageBackend> SnipzApi<B> {
    /// Wraps `backend` and loads the persisted table. Load failures abort here,
    /// before any command can run.
    pub fn load(backend: B) -> Result<Self> {
        let mut store = SnippetStore::new(backend);
        store.load()?;
        Ok(Self { store })
    }

    pub fn list(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn show(&self, name: &str) -> Result<CmdResult> {
        commands::show::run(&self.store, name)
    }

    pub fn add<R: BufRead>(&mut self, name: &str, source: R) -> Result<CmdResult> {
        commands::add::run(&mut self.store, name, source)
    }

    pub fn delete(&mut self, name: &str) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, name)
    }

    pub fn store(&self) -> &SnippetStore<B> {
        &self.store
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
