use serde::Serialize;

use crate::domain::{EmailAddress, Fields, Payload, ValidationError, WebUrl};

use super::Record;

/// New Film record
#[derive(Debug, Serialize)]
pub struct NewFilm {
    pub title: String,
    pub synopsis: Option<String>,
    pub director: String,
    pub country: Option<String>,
    /// Release year, 1900 through 2100
    pub year: Option<i64>,
    pub genre: Option<String>,
    /// Running time in minutes, at least one
    pub duration_min: Option<i64>,
    /// Programming category, e.g. Feature Films, Short Films, Docs, Student, Caribbean Spotlight
    pub category: Option<String>,
    pub trailer_url: Option<WebUrl>,
    pub stills: Option<Vec<WebUrl>>,
    pub press_kit_url: Option<WebUrl>,
    pub director_bio: Option<String>,
    pub director_contact: Option<EmailAddress>,
}

impl Record for NewFilm {
    const COLLECTION: &'static str = "film";
}

impl TryFrom<Payload> for NewFilm {
    type Error = ValidationError;

    fn try_from(payload: Payload) -> Result<Self, Self::Error> {
        let mut fields = Fields::new(payload);

        let title = fields.required_str("title");
        let synopsis = fields.optional_str("synopsis");
        let director = fields.required_str("director");
        let country = fields.optional_str("country");
        let year = fields.optional_int("year", 1900..=2100);
        let genre = fields.optional_str("genre");
        let duration_min = fields.optional_int("duration_min", 1..);
        let category = fields.optional_str("category");
        let trailer_url = fields.optional_parsed("trailer_url");
        let stills = fields.optional_list("stills", |s| s.parse::<WebUrl>());
        let press_kit_url = fields.optional_parsed("press_kit_url");
        let director_bio = fields.optional_str("director_bio");
        let director_contact = fields.optional_parsed("director_contact");

        let (Some(title), Some(director)) = (title, director) else {
            return Err(fields.into_error());
        };
        fields.finish()?;

        Ok(Self {
            title,
            synopsis,
            director,
            country,
            year,
            genre,
            duration_min,
            category,
            trailer_url,
            stills,
            press_kit_url,
            director_bio,
            director_contact,
        })
    }
}
