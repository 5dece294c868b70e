//! Third-party embeds (ad script, floating WhatsApp widget).
//!
//! These are opaque, fire-and-forget additions for the front-end to inject.
//! An embed that cannot be built is logged and skipped; it never blocks
//! startup, navigation or chat.

pub mod handlers;

use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::Config;
use crate::models::section::SectionId;

const AD_SCRIPT_SRC: &str = "https://pagead2.googlesyndication.com/pagead/js/adsbygoogle.js";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Embed {
    AdScript {
        section: SectionId,
        src: &'static str,
        client: String,
    },
    ChatWidget {
        section: SectionId,
        phone_number: String,
        reply_time: String,
    },
}

#[derive(Debug, Error)]
pub enum EmbedError {
    #[error("Invalid ad client id '{0}'")]
    InvalidAdClient(String),

    #[error("Invalid widget phone number '{0}'")]
    InvalidPhoneNumber(String),
}

fn ad_script(client: &str) -> Result<Embed, EmbedError> {
    let well_formed = client.starts_with("ca-pub-")
        && client["ca-pub-".len()..].chars().all(|c| c.is_ascii_digit())
        && client.len() > "ca-pub-".len();
    if !well_formed {
        return Err(EmbedError::InvalidAdClient(client.to_string()));
    }
    Ok(Embed::AdScript {
        section: SectionId::Experience,
        src: AD_SCRIPT_SRC,
        client: client.to_string(),
    })
}

fn chat_widget(phone_number: &str, reply_time: &str) -> Result<Embed, EmbedError> {
    if phone_number.is_empty() || !phone_number.chars().all(|c| c.is_ascii_digit()) {
        return Err(EmbedError::InvalidPhoneNumber(phone_number.to_string()));
    }
    Ok(Embed::ChatWidget {
        section: SectionId::Contact,
        phone_number: phone_number.to_string(),
        reply_time: reply_time.to_string(),
    })
}

/// Resolves the configured embeds, dropping (and logging) any that are invalid.
pub fn build_embeds(config: &Config) -> Vec<Embed> {
    let mut candidates = vec![chat_widget(
        &config.whatsapp_number,
        &config.widget_reply_time,
    )];
    if let Some(client) = &config.adsense_client {
        candidates.push(ad_script(client));
    }

    let embeds: Vec<Embed> = candidates
        .into_iter()
        .filter_map(|candidate| match candidate {
            Ok(embed) => Some(embed),
            Err(e) => {
                warn!("Skipping embed: {e}");
                None
            }
        })
        .collect();

    info!("Resolved {} embed(s)", embeds.len());
    embeds
}
