use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{SnippetStore, StorageBackend};

/// A missing snippet is not an error here: the result carries a notice instead.
pub fn run<B: StorageBackend>(store: &SnippetStore<B>, name: &str) -> Result<CmdResult> {
    match store.get(name) {
        Some(body) => Ok(CmdResult::default().with_snippet(body.to_string())),
        None => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::warning(format!(
                "Snippet '{}' not found.",
                name
            )));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn returns_body_verbatim() {
        let mut store = SnippetStore::new(MemBackend::new());
        let body = "  leading\n\ninner blank\ttrailing  ".to_string();
        store.add("ws", body.clone()).unwrap();

        let result = run(&store, "ws").unwrap();
        assert_eq!(result.snippet, Some(body));
        assert!(result.messages.is_empty());
    }

    #[test]
    fn missing_snippet_is_a_notice() {
        let store = SnippetStore::new(MemBackend::new());

        let result = run(&store, "nope").unwrap();
        assert!(result.snippet.is_none());
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(result.messages[0].content, "Snippet 'nope' not found.");
    }

    #[test]
    fn empty_body_is_still_found() {
        let mut store = SnippetStore::new(MemBackend::new());
        store.add("blank", String::new()).unwrap();

        let result = run(&store, "blank").unwrap();
        assert_eq!(result.snippet.as_deref(), Some(""));
    }
}
