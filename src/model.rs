use serde::Serialize;

mod events;
mod films;
mod news;
mod newsletter;
mod sponsors;
mod submissions;
mod updates;

pub use events::NewEvent;
pub use films::NewFilm;
pub use news::NewNewsItem;
pub use newsletter::NewNewsletterSubscription;
pub use sponsors::NewSponsor;
pub use submissions::{NewSubmission, DEFAULT_STATUS};
pub use updates::NewUpdate;

/// A validated record that can be stored as a document
pub trait Record: Serialize + Send + Sync {
    /// Name of the collection the record is stored in
    const COLLECTION: &'static str;
}

/// Response body for a newly created record
#[derive(Debug, Serialize)]
pub struct Created {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Created {
    pub fn new(id: String) -> Self {
        Self { id, status: None }
    }

    pub fn with_status(id: String, status: String) -> Self {
        Self {
            id,
            status: Some(status),
        }
    }
}
