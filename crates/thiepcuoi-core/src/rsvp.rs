//! Guestbook wishes and attendance confirmations.
//!
//! Wishes go to a remote endpoint as a single form POST; the response is
//! never inspected. Confirmations stay local in the
//! [`ConfirmationStore`](crate::storage::ConfirmationStore).

use chrono::{DateTime, Utc};
use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{InvitationResult, ValidationError};
use crate::storage::ConfirmationStore;

/// Apps Script endpoint collecting guestbook wishes.
pub const WISH_ENDPOINT: &str = "https://script.google.com/macros/s/AKfycbx6aMRy5xNvO0XRy5BV6QcNAzs5w53spnJld1-U7Fhuj-gQwkVR0Siw4QPlGVvoreLI/exec";

pub const WISH_THANKS: &str = "🎉 Cảm ơn bạn đã gửi lời chúc!";
pub const CONFIRM_THANKS: &str = "Cảm ơn bạn đã xác nhận tham dự!";
pub const VALIDATION_ALERT: &str = "Vui lòng điền đầy đủ thông tin!";
pub const NETWORK_ALERT: &str = "⚠ Không kết nối được server. Vui lòng thử lại.";
pub const GENERIC_ALERT: &str = "Có lỗi xảy ra. Vui lòng thử lại.";

/// Where a wish was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormSource {
    /// The inline guestbook section
    Guestbook,
    /// The wish modal, closed after a successful send
    Modal,
}

/// Raw wish form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WishForm {
    pub name: String,
    pub message: String,
}

/// A validated wish, fields trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wish {
    pub name: String,
    pub message: String,
}

impl WishForm {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }

    pub fn validate(&self) -> Result<Wish, ValidationError> {
        let name = self.name.trim();
        let message = self.message.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingField("name"));
        }
        if message.is_empty() {
            return Err(ValidationError::MissingField("message"));
        }
        Ok(Wish {
            name: name.to_string(),
            message: message.to_string(),
        })
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.message.clear();
    }
}

/// Delivers a wish somewhere.
pub trait WishSender: Send + Sync {
    fn send<'a>(&'a self, wish: &'a Wish) -> BoxFuture<'a, InvitationResult<()>>;
}

/// Posts wishes as `application/x-www-form-urlencoded`.
#[derive(Debug, Clone)]
pub struct HttpWishSender {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpWishSender {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for HttpWishSender {
    fn default() -> Self {
        Self::new(WISH_ENDPOINT)
    }
}

impl WishSender for HttpWishSender {
    fn send<'a>(&'a self, wish: &'a Wish) -> BoxFuture<'a, InvitationResult<()>> {
        Box::pin(async move {
            // Only transport errors count; the status is not checked
            let response = self
                .client
                .post(&self.endpoint)
                .form(&[("name", wish.name.as_str()), ("message", wish.message.as_str())])
                .send()
                .await?;
            info!(status = %response.status(), "Wish delivered");
            Ok(())
        })
    }
}

/// Validate and send a wish. Invalid forms never reach the sender.
pub async fn submit_wish(sender: &dyn WishSender, form: &WishForm) -> InvitationResult<Wish> {
    let wish = form.validate()?;
    if let Err(e) = sender.send(&wish).await {
        warn!(error = %e, "Failed to submit wish");
        return Err(e);
    }
    Ok(wish)
}

/// Raw attendance form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfirmationForm {
    pub name: String,
    pub guests: String,
}

/// One attendance confirmation as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confirmation {
    pub name: String,
    /// Party size
    pub number: u32,
    pub date: DateTime<Utc>,
}

impl ConfirmationForm {
    pub fn new(name: impl Into<String>, guests: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            guests: guests.into(),
        }
    }

    pub fn validate(&self, now: DateTime<Utc>) -> Result<Confirmation, ValidationError> {
        let name = self.name.trim();
        let guests = self.guests.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingField("name"));
        }
        if guests.is_empty() {
            return Err(ValidationError::MissingField("guests"));
        }
        Ok(Confirmation {
            name: name.to_string(),
            number: parse_party_size(guests)?,
            date: now,
        })
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.guests.clear();
    }
}

/// Party size from the leading digits of the input (`"3 người"` is 3).
pub fn parse_party_size(input: &str) -> Result<u32, ValidationError> {
    let trimmed = input.trim();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());

    unsigned[..end]
        .parse::<u32>()
        .map_err(|_| ValidationError::InvalidPartySize(input.to_string()))
}

/// Validate a confirmation and append it to the store.
pub fn submit_confirmation(
    store: &ConfirmationStore,
    form: &ConfirmationForm,
) -> InvitationResult<Confirmation> {
    let confirmation = form.validate(Utc::now())?;
    store.append(&confirmation)?;
    info!(
        name = %confirmation.name,
        number = confirmation.number,
        "Attendance confirmed"
    );
    Ok(confirmation)
}
