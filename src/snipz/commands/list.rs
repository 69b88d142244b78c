use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{SnippetStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &SnippetStore<B>) -> Result<CmdResult> {
    let names = store.names();
    if names.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("No snippets saved."));
        return Ok(result);
    }
    Ok(CmdResult::default().with_listed_names(names))
}
