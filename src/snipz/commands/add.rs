use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::input::read_body;
use crate::model::validate_name;
use crate::store::{SnippetStore, StorageBackend};
use std::io::BufRead;

/// Reads the body from `source` (see [`crate::input`]) and stores it under `name`.
/// An existing snippet with the same name is overwritten without asking.
pub fn run<B: StorageBackend, R: BufRead>(
    store: &mut SnippetStore<B>,
    name: &str,
    source: R,
) -> Result<CmdResult> {
    validate_name(name)?;
    let body = read_body(source)?;
    store.add(name, body)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Snippet '{}' added.", name)));
    Ok(result)
}
