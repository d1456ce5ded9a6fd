use std::str::FromStr;

use serde::{Serialize, Serializer};

use url::Url;

/// An absolute `http` or `https` URL
#[derive(Debug, PartialEq, Clone)]
pub struct WebUrl(Url);

impl FromStr for WebUrl {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let url = Url::parse(value.trim()).map_err(|e| format!("Invalid URL: {}", e))?;

        match url.scheme() {
            "http" | "https" => {}
            other => return Err(format!("URL scheme {} is not allowed", other)),
        }
        if url.host_str().map_or(true, str::is_empty) {
            return Err("URL is missing a host".into());
        }

        Ok(Self(url))
    }
}

impl AsRef<str> for WebUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl Serialize for WebUrl {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0.as_str())
    }
}
