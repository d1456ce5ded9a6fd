use serde::Serialize;

use crate::domain::{Fields, Payload, Timestamp, ValidationError};

use super::Record;

/// New filmmaker-hub Update record
#[derive(Debug, Serialize)]
pub struct NewUpdate {
    pub title: String,
    pub message: String,
    pub published_at: Timestamp,
    /// workshop, panel, notice, market, accreditation, ...
    pub category: Option<String>,
}

impl Record for NewUpdate {
    const COLLECTION: &'static str = "update";
}

impl TryFrom<Payload> for NewUpdate {
    type Error = ValidationError;

    fn try_from(payload: Payload) -> Result<Self, Self::Error> {
        let mut fields = Fields::new(payload);

        let title = fields.required_str("title");
        let message = fields.required_str("message");
        let published_at = fields.optional_parsed("published_at");
        let category = fields.optional_str("category");

        let (Some(title), Some(message)) = (title, message) else {
            return Err(fields.into_error());
        };
        fields.finish()?;

        Ok(Self {
            title,
            message,
            published_at: published_at.unwrap_or_else(Timestamp::now),
            category,
        })
    }
}
