use crate::models::message::{ChatMessage, MessageId, Sender};

/// Ordered message list for one chat panel.
#[derive(Debug, Default)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
    next_id: MessageId,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message and returns its id.
    pub fn push(&mut self, sender: Sender, text: impl Into<String>) -> MessageId {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage::new(id, sender, text));
        id
    }

    /// Appends one character to message `id`.
    /// Returns false when the message no longer exists (conversation cleared).
    pub fn append_char(&mut self, id: MessageId, ch: char) -> bool {
        match self.messages.iter_mut().find(|m| m.id == id) {
            Some(message) => {
                message.text.push(ch);
                true
            }
            None => false,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Drops every message. Ids keep counting up so a late writer holding an
    /// old id can never land in a newer message.
    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

#[cfg(test)]
impl Conversation {
    pub fn get(&self, id: MessageId) -> Option<&ChatMessage> {
        self.messages.iter().find(|m| m.id == id)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
