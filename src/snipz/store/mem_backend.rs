use super::backend::StorageBackend;
use crate::error::{Result, SnipzError};
use crate::model::SnippetTable;
use std::cell::{Cell, RefCell};
use std::io;
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since snipz is single-threaded,
/// which lets `StorageBackend` keep `&self` receivers.
#[derive(Default)]
pub struct MemBackend {
    persisted: RefCell<Option<SnippetTable>>,
    saves: Cell<usize>,
    simulate_write_error: Cell<bool>,
    simulate_read_error: Cell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend that starts with `table` already persisted.
    pub fn with_table(table: SnippetTable) -> Self {
        let backend = Self::default();
        *backend.persisted.borrow_mut() = Some(table);
        backend
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    pub fn set_simulate_read_error(&self, simulate: bool) {
        self.simulate_read_error.set(simulate);
    }

    /// What a fresh process would load.
    pub fn persisted(&self) -> Option<SnippetTable> {
        self.persisted.borrow().clone()
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl StorageBackend for MemBackend {
    fn load_table(&self) -> Result<Option<SnippetTable>> {
        if self.simulate_read_error.get() {
            return Err(SnipzError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "simulated read error",
            )));
        }
        Ok(self.persisted.borrow().clone())
    }

    fn save_table(&self, table: &SnippetTable) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(SnipzError::Io(io::Error::other("simulated write error")));
        }
        *self.persisted.borrow_mut() = Some(table.clone());
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from("<memory>/snippets.json")
    }
}
