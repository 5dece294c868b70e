//! Speech capabilities — optional, trait-based voice input and output.
//!
//! The responder queries `is_available()` before every use and falls back to
//! text-only behaviour when a capability is missing. Errors are never surfaced
//! to the visitor; the responder logs and carries on.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("Speech capability unavailable")]
    Unavailable,

    #[error("Speech recognition failed: {0}")]
    Recognition(String),
}

/// Text-to-speech output. Playback runs alongside the character reveal.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    fn is_available(&self) -> bool;

    /// Plays `text` and resolves when playback ends.
    async fn speak(&self, text: &str) -> Result<(), SpeechError>;

    /// Stops any playback in progress.
    fn cancel(&self);
}

/// Speech-to-text input. One call transcribes one utterance.
#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    fn is_available(&self) -> bool;

    async fn listen(&self) -> Result<String, SpeechError>;
}

/// Capability stand-in for hosts with no speech support.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSpeech;

#[async_trait]
impl SpeechSynthesizer for NoSpeech {
    fn is_available(&self) -> bool {
        false
    }

    async fn speak(&self, _text: &str) -> Result<(), SpeechError> {
        Err(SpeechError::Unavailable)
    }

    fn cancel(&self) {}
}

#[async_trait]
impl SpeechRecognizer for NoSpeech {
    fn is_available(&self) -> bool {
        false
    }

    async fn listen(&self) -> Result<String, SpeechError> {
        Err(SpeechError::Unavailable)
    }
}

/// Recognizer for an utterance the visitor's browser already transcribed.
/// An empty transcript counts as a recognition failure.
#[derive(Debug, Clone)]
pub struct TranscriptRecognizer {
    transcript: String,
}

impl TranscriptRecognizer {
    pub fn new(transcript: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
        }
    }
}

#[async_trait]
impl SpeechRecognizer for TranscriptRecognizer {
    fn is_available(&self) -> bool {
        true
    }

    async fn listen(&self) -> Result<String, SpeechError> {
        if self.transcript.trim().is_empty() {
            return Err(SpeechError::Recognition("no speech detected".to_string()));
        }
        Ok(self.transcript.clone())
    }
}
