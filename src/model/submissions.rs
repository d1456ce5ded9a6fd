use serde::Serialize;

use crate::domain::{EmailAddress, Fields, Payload, ValidationError};

use super::Record;

/// Status given to a submission when the filmmaker does not supply one
pub const DEFAULT_STATUS: &str = "received";

/// New film Submission record
#[derive(Debug, Serialize)]
pub struct NewSubmission {
    pub title: String,
    pub director: String,
    pub email: EmailAddress,
    pub country: Option<String>,
    pub category: String,
    pub duration_min: Option<i64>,
    pub synopsis: Option<String>,
    /// Private link to the screener, stored as given
    pub screener_link: Option<String>,
    /// Review status, e.g. received, in_review, selected, rejected.
    /// Not restricted to those values.
    pub status: String,
}

impl Record for NewSubmission {
    const COLLECTION: &'static str = "submission";
}

impl TryFrom<Payload> for NewSubmission {
    type Error = ValidationError;

    fn try_from(payload: Payload) -> Result<Self, Self::Error> {
        let mut fields = Fields::new(payload);

        let title = fields.required_str("title");
        let director = fields.required_str("director");
        let email = fields.required_parsed("email");
        let country = fields.optional_str("country");
        let category = fields.required_str("category");
        let duration_min = fields.optional_int("duration_min", 1..);
        let synopsis = fields.optional_str("synopsis");
        let screener_link = fields.optional_str("screener_link");
        let status = fields.defaulted_str("status", DEFAULT_STATUS);

        let (Some(title), Some(director), Some(email), Some(category), Some(status)) =
            (title, director, email, category, status)
        else {
            return Err(fields.into_error());
        };
        fields.finish()?;

        Ok(Self {
            title,
            director,
            email,
            country,
            category,
            duration_min,
            synopsis,
            screener_link,
            status,
        })
    }
}
