use crate::error::Result;
use crate::model::SnippetTable;
use std::path::PathBuf;

/// Raw persistence for the snippet table.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while `SnippetStore` handles the "what".
pub trait StorageBackend {
    /// Load the persisted table.
    /// Returns Ok(None) if nothing has been persisted yet.
    /// Returns Err on read failures or malformed content.
    fn load_table(&self) -> Result<Option<SnippetTable>>;

    /// Replace the persisted table.
    /// MUST fully replace prior content (e.g. write to tmp then rename).
    fn save_table(&self, table: &SnippetTable) -> Result<()>;

    /// Location of the persisted table. Virtual for in-memory backends.
    fn location(&self) -> PathBuf;
}
