use axum::{extract::State, Json};
use serde::Serialize;
use tracing::info;

use crate::contact::{build_whatsapp_url, ContactForm};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ContactRedirectResponse {
    pub redirect_url: String,
    pub notice: &'static str,
}

/// POST /api/v1/contact
///
/// Returns the WhatsApp link for the browser to open in a new tab.
pub async fn handle_contact(
    State(state): State<AppState>,
    Json(form): Json<ContactForm>,
) -> Result<Json<ContactRedirectResponse>, AppError> {
    let redirect_url = build_whatsapp_url(&state.config.whatsapp_number, &form)?;
    info!("Contact form redirected to WhatsApp");
    Ok(Json(ContactRedirectResponse {
        redirect_url,
        notice: "Redirecting to WhatsApp...",
    }))
}
