use bson::{Bson, Document};

use chrono::SecondsFormat;

use serde_json::{Map, Value};

/// Store-native identifier key
pub const NATIVE_ID: &str = "_id";

/// Render a store identifier as the string exposed to clients
pub fn id_string(id: &Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Shape a stored document for clients: the native `_id` is replaced by a
/// string `id` and store-specific values become plain JSON.
pub fn project(mut document: Document) -> Value {
    let mut object = Map::new();

    if let Some(id) = document.remove(NATIVE_ID) {
        object.insert("id".into(), Value::String(id_string(&id)));
    }
    for (key, value) in document {
        object.insert(key, to_json(value));
    }

    Value::Object(object)
}

fn to_json(value: Bson) -> Value {
    match value {
        Bson::Null | Bson::Undefined => Value::Null,
        Bson::Boolean(b) => Value::Bool(b),
        Bson::Int32(n) => n.into(),
        Bson::Int64(n) => n.into(),
        Bson::Double(n) => serde_json::Number::from_f64(n).map_or(Value::Null, Value::Number),
        Bson::String(s) => Value::String(s),
        Bson::Array(items) => Value::Array(items.into_iter().map(to_json).collect()),
        Bson::Document(document) => Value::Object(
            document
                .into_iter()
                .map(|(key, value)| (key, to_json(value)))
                .collect(),
        ),
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::DateTime(datetime) => Value::String(
            datetime
                .to_chrono()
                .to_rfc3339_opts(SecondsFormat::AutoSi, true),
        ),
        other => other.into_relaxed_extjson(),
    }
}
