use colored::Colorize;
use snipz::api::{CmdMessage, MessageLevel};

pub(super) fn render_names(names: &[String]) -> String {
    let mut out = String::from("Saved snippets:");
    for name in names {
        out.push_str("\n- ");
        out.push_str(name);
    }
    out
}

pub(super) fn render_message(message: &CmdMessage) -> String {
    match message.level {
        MessageLevel::Info => message.content.dimmed().to_string(),
        MessageLevel::Success => message.content.green().to_string(),
        MessageLevel::Warning => message.content.yellow().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_bulleted_under_a_header() {
        let names = vec!["alpha".to_string(), "beta".to_string()];
        assert_eq!(render_names(&names), "Saved snippets:\n- alpha\n- beta");
    }

    #[test]
    fn messages_render_their_text() {
        colored::control::set_override(false);
        let msg = CmdMessage::warning("Snippet 'x' not found.");
        assert_eq!(render_message(&msg), "Snippet 'x' not found.");
    }
}
