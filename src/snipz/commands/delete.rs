use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{SnippetStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &mut SnippetStore<B>, name: &str) -> Result<CmdResult> {
    store.delete(name)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Snippet '{}' deleted.", name)));
    Ok(result)
}
