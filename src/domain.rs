mod email_address;
mod timestamp;
mod validation;
mod web_url;

pub use email_address::EmailAddress;
pub use timestamp::Timestamp;
pub use validation::{FieldViolation, Fields, Payload, ValidationError};
pub use web_url::WebUrl;
