// src/chat/prompt.rs
//
// Assembles the exact message sequence sent to the model: one persona
// message, the prior history in order, then the new question with its
// retrieved context. Pure; session mutation is the caller's job and only
// happens after generation succeeds.

use crate::chat::session::ChatMessage;
use crate::search::Document;

pub const PERSONA: &str = "You are a sustainability expert. Use the provided context to answer user questions accurately and concisely.";

/// Joins document bodies with a blank line between them.
pub fn merge_context(docs: &[Document]) -> String {
    docs.iter()
        .map(|d| d.content.as_str())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// `system + history + "Context:\n…\n\nQuestion: …"`. Zero documents still
/// produce the (empty) context block; downstream tolerates it.
pub fn build_messages(history: &[ChatMessage], docs: &[Document], query: &str) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(history.len() + 2);
    messages.push(ChatMessage::system(PERSONA));
    messages.extend_from_slice(history);
    messages.push(ChatMessage::user(format!(
        "Context:\n{}\n\nQuestion: {}",
        merge_context(docs),
        query
    )));
    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::session::Role;

    fn doc(content: &str) -> Document {
        Document {
            content: content.to_string(),
            title: String::new(),
            link: String::new(),
        }
    }

    #[test]
    fn empty_context_keeps_block() {
        let messages = build_messages(&[], &[], "What is composting?");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[0].content, PERSONA);
        assert_eq!(
            messages[1].content,
            "Context:\n\n\nQuestion: What is composting?"
        );
    }

    #[test]
    fn documents_join_with_blank_line() {
        let messages = build_messages(&[], &[doc("first"), doc("second")], "q");
        assert_eq!(messages[1].content, "Context:\nfirst\n\nsecond\n\nQuestion: q");
    }

    #[test]
    fn history_sits_between_persona_and_question() {
        let history = vec![
            ChatMessage::user("one"),
            ChatMessage::assistant("two"),
            ChatMessage::user("three"),
            ChatMessage::assistant("four"),
        ];
        let messages = build_messages(&history, &[], "five");

        // system + 2 prior pairs + new user message
        assert_eq!(messages.len(), 1 + history.len() + 1);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[1..5], history[..]);
        assert_eq!(messages[5].role, Role::User);
        assert!(messages[5].content.ends_with("Question: five"));
    }
}
