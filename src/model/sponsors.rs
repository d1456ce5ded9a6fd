use serde::Serialize;

use crate::domain::{Fields, Payload, ValidationError, WebUrl};

use super::Record;

/// New Sponsor record
#[derive(Debug, Serialize)]
pub struct NewSponsor {
    pub name: String,
    /// title, presenting, gold, silver, partner, media, ...
    pub tier: String,
    pub logo_url: Option<WebUrl>,
    pub website: Option<WebUrl>,
    pub description: Option<String>,
}

impl Record for NewSponsor {
    const COLLECTION: &'static str = "sponsor";
}

impl TryFrom<Payload> for NewSponsor {
    type Error = ValidationError;

    fn try_from(payload: Payload) -> Result<Self, Self::Error> {
        let mut fields = Fields::new(payload);

        let name = fields.required_str("name");
        let tier = fields.required_str("tier");
        let logo_url = fields.optional_parsed("logo_url");
        let website = fields.optional_parsed("website");
        let description = fields.optional_str("description");

        let (Some(name), Some(tier)) = (name, tier) else {
            return Err(fields.into_error());
        };
        fields.finish()?;

        Ok(Self {
            name,
            tier,
            logo_url,
            website,
            description,
        })
    }
}
