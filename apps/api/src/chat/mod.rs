// FAQ chatbot: rule-based classification, cancellable reveals, optional speech.

pub mod classifier;
pub mod conversation;
pub mod handlers;
pub mod responder;
pub mod reveal;
pub mod speech;

pub use responder::{ChatResponder, ChatSnapshot};
