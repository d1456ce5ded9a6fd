use serde::Serialize;

use crate::domain::{EmailAddress, Fields, Payload, ValidationError};

use super::Record;

const DEFAULT_LANGUAGE: &str = "en";

/// New NewsletterSubscription record
#[derive(Debug, Serialize)]
pub struct NewNewsletterSubscription {
    pub email: EmailAddress,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// en, fr, es, ... An explicit `null` is kept.
    pub language: Option<String>,
}

impl Record for NewNewsletterSubscription {
    const COLLECTION: &'static str = "newslettersubscription";
}

impl TryFrom<Payload> for NewNewsletterSubscription {
    type Error = ValidationError;

    fn try_from(payload: Payload) -> Result<Self, Self::Error> {
        let mut fields = Fields::new(payload);

        let email = fields.required_parsed("email");
        let first_name = fields.optional_str("first_name");
        let last_name = fields.optional_str("last_name");
        let language = fields.nullable_str("language", DEFAULT_LANGUAGE);

        let Some(email) = email else {
            return Err(fields.into_error());
        };
        fields.finish()?;

        Ok(Self {
            email,
            first_name,
            last_name,
            language,
        })
    }
}
