use super::backend::StorageBackend;
use crate::error::{Result, SnipzError};
use crate::model::{validate_name, SnippetTable};

/// Owns the snippet table for the lifetime of one invocation.
///
/// Mutations update the in-memory table first and then persist the whole table.
/// If persisting fails the error is returned and the in-memory table keeps the
/// mutation; the backend still holds the last successful save.
pub struct SnippetStore<B: StorageBackend> {
    backend: B,
    table: SnippetTable,
}

impl<B: StorageBackend> SnippetStore<B> {
    /// A store with an empty table. Call [`SnippetStore::load`] to read persisted state.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            table: SnippetTable::new(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn table(&self) -> &SnippetTable {
        &self.table
    }

    /// Replace the in-memory table with the persisted one. Nothing persisted yet
    /// means an empty table.
    pub fn load(&mut self) -> Result<()> {
        self.table = self.backend.load_table()?.unwrap_or_default();
        tracing::debug!(
            location = %self.backend.location().display(),
            count = self.table.len(),
            "snippet table ready"
        );
        Ok(())
    }

    pub fn save(&self) -> Result<()> {
        self.backend.save_table(&self.table)
    }

    /// Snippet names in ascending byte order.
    pub fn names(&self) -> Vec<String> {
        self.table.names()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.table.get(name)
    }

    /// Store `body` under `name`, overwriting any previous body, then persist.
    /// Returns the replaced body, if there was one.
    pub fn add(&mut self, name: &str, body: String) -> Result<Option<String>> {
        validate_name(name)?;
        let previous = self.table.insert(name.to_string(), body);
        self.save()?;
        tracing::info!(name, overwritten = previous.is_some(), "snippet stored");
        Ok(previous)
    }

    /// Remove `name` and persist. Returns the removed body.
    pub fn delete(&mut self, name: &str) -> Result<String> {
        let removed = self
            .table
            .remove(name)
            .ok_or_else(|| SnipzError::NotFound(name.to_string()))?;
        self.save()?;
        tracing::info!(name, "snippet deleted");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;

    fn loaded(backend: MemBackend) -> SnippetStore<MemBackend> {
        let mut store = SnippetStore::new(backend);
        store.load().unwrap();
        store
    }

    #[test]
    fn load_without_persisted_state_is_empty() {
        let store = loaded(MemBackend::new());
        assert!(store.table().is_empty());
    }

    #[test]
    fn load_replaces_in_memory_table() {
        let persisted: SnippetTable = [("a".to_string(), "1".to_string())].into_iter().collect();
        let mut store = SnippetStore::new(MemBackend::with_table(persisted.clone()));
        store.load().unwrap();
        assert_eq!(store.table(), &persisted);
    }

    #[test]
    fn load_propagates_read_errors() {
        let backend = MemBackend::new();
        backend.set_simulate_read_error(true);
        let mut store = SnippetStore::new(backend);
        assert!(matches!(store.load().unwrap_err(), SnipzError::Io(_)));
    }

    #[test]
    fn add_persists_immediately() {
        let mut store = loaded(MemBackend::new());
        store.add("x", "body".into()).unwrap();

        assert_eq!(store.backend().save_count(), 1);
        let persisted = store.backend().persisted().unwrap();
        assert_eq!(persisted.get("x"), Some("body"));
    }

    #[test]
    fn add_rejects_empty_name_without_saving() {
        let mut store = loaded(MemBackend::new());
        let err = store.add("", "body".into()).unwrap_err();
        assert!(matches!(err, SnipzError::InvalidName(_)));
        assert_eq!(store.backend().save_count(), 0);
    }

    #[test]
    fn failed_save_keeps_memory_mutated_but_not_disk() {
        let mut store = loaded(MemBackend::new());
        store.backend().set_simulate_write_error(true);

        assert!(store.add("x", "body".into()).is_err());
        assert_eq!(store.get("x"), Some("body"));
        assert!(store.backend().persisted().is_none());
    }

    #[test]
    fn delete_missing_name_leaves_table_untouched() {
        let mut store = loaded(MemBackend::new());
        store.add("keep", "me".into()).unwrap();

        let err = store.delete("gone").unwrap_err();
        assert!(matches!(err, SnipzError::NotFound(ref n) if n == "gone"));
        assert_eq!(store.names(), vec!["keep"]);
        assert_eq!(store.backend().save_count(), 1);
    }

    #[test]
    fn failed_save_after_delete_keeps_entry_on_disk_only() {
        let mut store = loaded(MemBackend::new());
        store.add("x", "body".into()).unwrap();
        store.backend().set_simulate_write_error(true);

        assert!(matches!(store.delete("x").unwrap_err(), SnipzError::Io(_)));
        assert!(store.get("x").is_none());
        assert_eq!(
            store.backend().persisted().unwrap().get("x"),
            Some("body")
        );
    }

    #[test]
    fn delete_removes_and_persists() {
        let mut store = loaded(MemBackend::new());
        store.add("x", "body".into()).unwrap();

        assert_eq!(store.delete("x").unwrap(), "body");
        assert!(store.get("x").is_none());
        assert!(store.backend().persisted().unwrap().is_empty());
    }
}
