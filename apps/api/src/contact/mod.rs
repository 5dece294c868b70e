//! Contact form → WhatsApp redirect.
//!
//! The form is never stored or sent anywhere by the service; it is formatted
//! into a pre-filled message link the visitor's browser opens.

pub mod handlers;

use serde::Deserialize;

use crate::errors::AppError;

const WHATSAPP_BASE_URL: &str = "https://wa.me";

#[derive(Debug, Clone, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), AppError> {
        let fields = [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(AppError::Validation(format!("{field} cannot be empty")));
            }
        }
        Ok(())
    }

    /// The message body exactly as the recipient sees it.
    pub fn to_message(&self) -> String {
        format!(
            "*New Contact Message* \nName: {} \nEmail: {} \nSubject: {} \nMessage: {}",
            self.name, self.email, self.subject, self.message
        )
    }
}

/// Builds `https://wa.me/{number}?text={encoded message}` for a valid form.
pub fn build_whatsapp_url(number: &str, form: &ContactForm) -> Result<String, AppError> {
    form.validate()?;
    Ok(format!(
        "{WHATSAPP_BASE_URL}/{number}?text={}",
        urlencoding::encode(&form.to_message())
    ))
}
