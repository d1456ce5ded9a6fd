use serde::Serialize;

use crate::domain::{Fields, Payload, Timestamp, ValidationError};

use super::Record;

/// New program Event record
#[derive(Debug, Serialize)]
pub struct NewEvent {
    pub title: String,
    /// Id of a related film, not checked for existence
    pub film_id: Option<String>,
    /// screening, gala, workshop, panel, market, networking, ...
    #[serde(rename = "type")]
    pub event_type: String,
    pub venue: Option<String>,
    pub starts_at: Timestamp,
    pub ends_at: Timestamp,
    pub description: Option<String>,
}

impl Record for NewEvent {
    const COLLECTION: &'static str = "event";
}

impl TryFrom<Payload> for NewEvent {
    type Error = ValidationError;

    fn try_from(payload: Payload) -> Result<Self, Self::Error> {
        let mut fields = Fields::new(payload);

        let title = fields.required_str("title");
        let film_id = fields.optional_str("film_id");
        let event_type = fields.required_str("type");
        let venue = fields.optional_str("venue");
        let starts_at = fields.required_parsed("starts_at");
        let ends_at = fields.required_parsed("ends_at");
        let description = fields.optional_str("description");

        let (Some(title), Some(event_type), Some(starts_at), Some(ends_at)) =
            (title, event_type, starts_at, ends_at)
        else {
            return Err(fields.into_error());
        };
        fields.finish()?;

        Ok(Self {
            title,
            film_id,
            event_type,
            venue,
            starts_at,
            ends_at,
            description,
        })
    }
}
