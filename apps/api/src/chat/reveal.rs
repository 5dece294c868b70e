//! Character-by-character reveal of a bot reply as a cancellable task.
//!
//! Every tick appends the next character to the reveal's own message. If the
//! message has disappeared (conversation cleared) the task stops on its own,
//! so a reveal can never write into someone else's message.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};

use crate::chat::conversation::Conversation;
use crate::chat::speech::SpeechSynthesizer;
use crate::models::message::MessageId;

/// Start/cancel handle for one running reveal and its optional speech playback.
#[derive(Debug)]
pub struct RevealHandle {
    message_id: MessageId,
    typing: JoinHandle<()>,
    speech: Option<JoinHandle<()>>,
}

impl RevealHandle {
    pub fn message_id(&self) -> MessageId {
        self.message_id
    }

    /// True once every character has been written (or the reveal was cancelled).
    pub fn is_finished(&self) -> bool {
        self.typing.is_finished()
    }

    /// Stops typing and speech together. Characters already written stay.
    pub fn cancel(&self) {
        self.typing.abort();
        if let Some(speech) = &self.speech {
            speech.abort();
        }
    }
}

/// Spawns the reveal of `text` into message `message_id`.
///
/// One character per `interval`, whether or not speech is playing. When a
/// synthesizer is given it speaks the full text in parallel.
pub fn spawn_reveal(
    conversation: Arc<Mutex<Conversation>>,
    message_id: MessageId,
    text: String,
    interval: Duration,
    synthesizer: Option<Arc<dyn SpeechSynthesizer>>,
) -> RevealHandle {
    let speech = synthesizer.map(|synth| {
        let spoken = text.clone();
        tokio::spawn(async move {
            if let Err(e) = synth.speak(&spoken).await {
                warn!("Speech playback for message {message_id} failed: {e}");
            }
        })
    });

    let typing = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        ticker.tick().await; // first tick fires immediately

        for ch in text.chars() {
            ticker.tick().await;
            if !conversation.lock().append_char(message_id, ch) {
                debug!("Message {message_id} discarded mid-reveal, stopping");
                return;
            }
        }
        debug!("Reveal of message {message_id} complete");
    });

    RevealHandle {
        message_id,
        typing,
        speech,
    }
}
