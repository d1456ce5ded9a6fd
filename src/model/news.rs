use serde::Serialize;

use crate::domain::{Fields, Payload, Timestamp, ValidationError, WebUrl};

use super::Record;

/// New NewsItem record
#[derive(Debug, Serialize)]
pub struct NewNewsItem {
    pub title: String,
    pub content: String,
    pub cover_image: Option<WebUrl>,
    /// Defaults to the time the item was received
    pub published_at: Timestamp,
    pub tags: Option<Vec<String>>,
}

impl Record for NewNewsItem {
    const COLLECTION: &'static str = "newsitem";
}

impl TryFrom<Payload> for NewNewsItem {
    type Error = ValidationError;

    fn try_from(payload: Payload) -> Result<Self, Self::Error> {
        let mut fields = Fields::new(payload);

        let title = fields.required_str("title");
        let content = fields.required_str("content");
        let cover_image = fields.optional_parsed("cover_image");
        let published_at = fields.optional_parsed("published_at");
        let tags = fields.optional_list("tags", Ok::<_, String>);

        let (Some(title), Some(content)) = (title, content) else {
            return Err(fields.into_error());
        };
        fields.finish()?;

        Ok(Self {
            title,
            content,
            cover_image,
            published_at: published_at.unwrap_or_else(Timestamp::now),
            tags,
        })
    }
}
