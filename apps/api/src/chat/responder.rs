//! Chat responder — the FAQ chatbot behind the floating chat panel.
//!
//! Owns the conversation, the panel open flag and every in-flight reveal.
//! Methods take `&self`; the only lock held across a tick is the conversation
//! mutex, and no lock is held across an `.await`.
//!
//! The conversation only exists while the panel is open. Input arriving while
//! it is closed is dropped.
//!
//! Lock order: `panel` before `conversation`.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::chat::classifier::{classify, WELCOME_MESSAGE};
use crate::chat::conversation::Conversation;
use crate::chat::reveal::{spawn_reveal, RevealHandle};
use crate::chat::speech::{NoSpeech, SpeechRecognizer, SpeechSynthesizer};
use crate::models::message::{ChatMessage, MessageId, Sender};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelStatus {
    Listening,
    Typing,
    Idle,
}

impl PanelStatus {
    /// Caption shown under the assistant's name.
    pub fn caption(&self) -> &'static str {
        match self {
            PanelStatus::Listening => "Listening...",
            PanelStatus::Typing => "Typing...",
            PanelStatus::Idle => "Ask me anything",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatSnapshot {
    pub open: bool,
    pub status: PanelStatus,
    pub caption: &'static str,
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Default)]
struct Panel {
    open: bool,
    reveals: Vec<RevealHandle>,
}

/// Holds one pending recognition. Released on drop, including when the
/// `listen` future is dropped mid-await.
struct ListeningGuard<'a>(&'a AtomicUsize);

impl<'a> ListeningGuard<'a> {
    fn new(pending: &'a AtomicUsize) -> Self {
        pending.fetch_add(1, Ordering::SeqCst);
        Self(pending)
    }
}

impl Drop for ListeningGuard<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

pub struct ChatResponder {
    reveal_interval: Duration,
    synthesizer: Arc<dyn SpeechSynthesizer>,
    conversation: Arc<Mutex<Conversation>>,
    panel: Mutex<Panel>,
    /// Recognitions currently awaiting a transcript.
    listening: AtomicUsize,
}

impl ChatResponder {
    pub fn new(reveal_interval: Duration) -> Self {
        Self::with_synthesizer(reveal_interval, Arc::new(NoSpeech))
    }

    pub fn with_synthesizer(
        reveal_interval: Duration,
        synthesizer: Arc<dyn SpeechSynthesizer>,
    ) -> Self {
        Self {
            reveal_interval,
            synthesizer,
            conversation: Arc::new(Mutex::new(Conversation::new())),
            panel: Mutex::new(Panel::default()),
            listening: AtomicUsize::new(0),
        }
    }

    pub fn is_open(&self) -> bool {
        self.panel.lock().open
    }

    pub fn is_listening(&self) -> bool {
        self.listening.load(Ordering::SeqCst) > 0
    }

    /// True while any reply is still being revealed.
    pub fn is_typing(&self) -> bool {
        let mut panel = self.panel.lock();
        panel.reveals.retain(|r| !r.is_finished());
        !panel.reveals.is_empty()
    }

    pub fn messages(&self) -> Vec<ChatMessage> {
        self.conversation.lock().messages().to_vec()
    }

    pub fn status(&self) -> PanelStatus {
        if self.is_listening() {
            PanelStatus::Listening
        } else if self.is_typing() {
            PanelStatus::Typing
        } else {
            PanelStatus::Idle
        }
    }

    pub fn snapshot(&self) -> ChatSnapshot {
        let status = self.status();
        ChatSnapshot {
            open: self.is_open(),
            status,
            caption: status.caption(),
            messages: self.messages(),
        }
    }

    /// Opens or closes the panel and returns the new open state.
    ///
    /// Opening reveals the welcome message. Closing cancels every reveal and
    /// any speech, then discards the conversation.
    pub fn toggle_open(&self) -> bool {
        let mut panel = self.panel.lock();
        if panel.open {
            for reveal in panel.reveals.drain(..) {
                reveal.cancel();
            }
            self.synthesizer.cancel();
            self.conversation.lock().clear();
            panel.open = false;
            info!("Chat panel closed, conversation discarded");
        } else {
            panel.open = true;
            self.reveal(&mut panel, WELCOME_MESSAGE);
            info!("Chat panel opened");
        }
        panel.open
    }

    /// Handles typed (or transcribed) input.
    ///
    /// Blank input, or any input while the panel is closed, is ignored and
    /// returns `None`. Otherwise the user message is appended and the id of the
    /// bot reply being revealed is returned.
    pub fn submit(&self, text: &str) -> Option<MessageId> {
        if text.trim().is_empty() {
            debug!("Ignoring blank chat input");
            return None;
        }

        let response = classify(text);
        let mut panel = self.panel.lock();
        if !panel.open {
            debug!("Chat panel closed, ignoring input");
            return None;
        }
        self.conversation.lock().push(Sender::User, text);
        Some(self.reveal(&mut panel, &response))
    }

    /// Transcribes one utterance and submits it.
    ///
    /// Without an available recognizer, with the panel closed, or when
    /// recognition fails, nothing is submitted and the chat carries on
    /// text-only.
    pub async fn listen(&self, recognizer: &dyn SpeechRecognizer) -> Option<MessageId> {
        if !recognizer.is_available() {
            debug!("Speech recognition unavailable, staying text-only");
            return None;
        }
        if !self.is_open() {
            debug!("Chat panel closed, not listening");
            return None;
        }

        let heard = {
            let _listening = ListeningGuard::new(&self.listening);
            recognizer.listen().await
        };

        match heard {
            Ok(transcript) => self.submit(&transcript),
            Err(e) => {
                warn!("Speech recognition failed: {e}");
                None
            }
        }
    }

    /// Cancels everything in flight. Used when the owning session goes away.
    pub fn shutdown(&self) {
        let mut panel = self.panel.lock();
        for reveal in panel.reveals.drain(..) {
            reveal.cancel();
        }
        self.synthesizer.cancel();
    }

    /// Appends an empty bot message and reveals `text` into it.
    ///
    /// Takes the held panel guard so the handle is registered before any close
    /// can run.
    fn reveal(&self, panel: &mut Panel, text: &str) -> MessageId {
        let message_id = self.conversation.lock().push(Sender::Bot, "");
        let synthesizer = self
            .synthesizer
            .is_available()
            .then(|| self.synthesizer.clone());
        panel.reveals.push(spawn_reveal(
            self.conversation.clone(),
            message_id,
            text.to_string(),
            self.reveal_interval,
            synthesizer,
        ));
        message_id
    }
}

impl Drop for ChatResponder {
    fn drop(&mut self) {
        for reveal in self.panel.get_mut().reveals.drain(..) {
            reveal.cancel();
        }
    }
}
