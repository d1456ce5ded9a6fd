use std::ops::{Bound, RangeBounds};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use thiserror::Error;

const FIELD_REQUIRED: &str = "field required";

/// A single violated constraint on an input field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

/// Every constraint an input payload failed to meet
#[derive(Debug, Error)]
#[error("Validation failed")]
pub struct ValidationError(Vec<FieldViolation>);

impl ValidationError {
    pub fn violations(&self) -> &[FieldViolation] {
        &self.0
    }
}

/// Raw JSON object received for a create request
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct Payload(Map<String, Value>);

/// Reads typed fields out of a [`Payload`], recording every violation instead
/// of stopping at the first one.
///
/// Required readers return `None` once they have recorded a violation, so a
/// record is built with a `let-else` over the required values followed by
/// [`Fields::finish`]:
///
/// ```ignore
/// let mut fields = Fields::new(payload);
/// let title = fields.required_str("title");
/// let year = fields.optional_int("year", 1900..=2100);
///
/// let Some(title) = title else {
///     return Err(fields.into_error());
/// };
/// fields.finish()?;
/// ```
///
/// Fields that are never read are ignored.
#[derive(Debug)]
pub struct Fields {
    payload: Map<String, Value>,
    violations: Vec<FieldViolation>,
}

impl Fields {
    pub fn new(payload: Payload) -> Self {
        Self {
            payload: payload.0,
            violations: Vec::new(),
        }
    }

    fn violation(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.violations.push(FieldViolation {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Take a field's value, treating an explicit `null` the same as absence
    fn take(&mut self, name: &str) -> Option<Value> {
        match self.payload.remove(name) {
            None | Some(Value::Null) => None,
            Some(value) => Some(value),
        }
    }

    fn require<T>(&mut self, name: &str, value: Option<T>, present: bool) -> Option<T> {
        if !present {
            self.violation(name, FIELD_REQUIRED);
        }
        value
    }

    fn string_value(&mut self, name: &str, value: Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s),
            _ => {
                self.violation(name, "must be a string");
                None
            }
        }
    }

    fn parsed_value<T>(&mut self, name: &str, value: Value) -> Option<T>
    where
        T: FromStr<Err = String>,
    {
        let raw = self.string_value(name, value)?;
        match raw.parse() {
            Ok(parsed) => Some(parsed),
            Err(message) => {
                self.violation(name, message);
                None
            }
        }
    }

    pub fn required_str(&mut self, name: &str) -> Option<String> {
        let value = self.take(name);
        let present = value.is_some();
        let value = value.and_then(|v| self.string_value(name, v));
        self.require(name, value, present)
    }

    pub fn optional_str(&mut self, name: &str) -> Option<String> {
        let value = self.take(name)?;
        self.string_value(name, value)
    }

    /// Read a string field and parse it into a domain type
    pub fn required_parsed<T>(&mut self, name: &str) -> Option<T>
    where
        T: FromStr<Err = String>,
    {
        let value = self.take(name);
        let present = value.is_some();
        let value = value.and_then(|v| self.parsed_value(name, v));
        self.require(name, value, present)
    }

    pub fn optional_parsed<T>(&mut self, name: &str) -> Option<T>
    where
        T: FromStr<Err = String>,
    {
        let value = self.take(name)?;
        self.parsed_value(name, value)
    }

    /// Read a string field that falls back to `default` when absent.
    /// An explicit `null` is a violation.
    pub fn defaulted_str(&mut self, name: &str, default: &str) -> Option<String> {
        match self.payload.remove(name) {
            None => Some(default.into()),
            Some(Value::Null) => {
                self.violation(name, "must not be null");
                None
            }
            Some(value) => self.string_value(name, value),
        }
    }

    /// Read a nullable string field that falls back to `default` only when absent
    pub fn nullable_str(&mut self, name: &str, default: &str) -> Option<String> {
        match self.payload.remove(name) {
            None => Some(default.into()),
            Some(Value::Null) => None,
            Some(value) => self.string_value(name, value),
        }
    }

    /// Read an integer field that must fall within `range`.
    /// Floats with no fractional part count as integers.
    pub fn optional_int(&mut self, name: &str, range: impl RangeBounds<i64>) -> Option<i64> {
        let value = self.take(name)?;
        let Some(n) = integer(&value) else {
            self.violation(name, "must be an integer");
            return None;
        };
        if !range.contains(&n) {
            self.violation(name, describe_range(&range));
            return None;
        }
        Some(n)
    }

    /// Read a list of string items, parsing each one with `parse`.
    /// Item violations are reported as `name[index]`.
    pub fn optional_list<T>(
        &mut self,
        name: &str,
        parse: impl Fn(String) -> Result<T, String>,
    ) -> Option<Vec<T>> {
        let value = self.take(name)?;
        let Value::Array(items) = value else {
            self.violation(name, "must be a list");
            return None;
        };

        let mut parsed = Vec::with_capacity(items.len());
        let mut valid = true;
        for (i, item) in items.into_iter().enumerate() {
            let field = format!("{}[{}]", name, i);
            let result = match item {
                Value::String(s) => parse(s),
                _ => Err("must be a string".to_string()),
            };
            match result {
                Ok(item) => parsed.push(item),
                Err(message) => {
                    valid = false;
                    self.violation(field, message);
                }
            }
        }

        valid.then_some(parsed)
    }

    /// Consume the reader, failing if any violation was recorded
    pub fn finish(self) -> Result<(), ValidationError> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError(self.violations))
        }
    }

    /// Consume the reader into its recorded violations.
    /// Only called after a required field came back empty, which always
    /// records a violation.
    pub fn into_error(self) -> ValidationError {
        ValidationError(self.violations)
    }
}

fn integer(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
            .map(|f| f as i64)
    })
}

fn describe_range(range: &impl RangeBounds<i64>) -> String {
    match (range.start_bound(), range.end_bound()) {
        (Bound::Included(lo), Bound::Included(hi)) => format!("must be between {} and {}", lo, hi),
        (Bound::Included(lo), _) => format!("must be at least {}", lo),
        (_, Bound::Included(hi)) => format!("must be at most {}", hi),
        _ => "is out of range".into(),
    }
}
