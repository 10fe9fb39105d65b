use serde_json::{Map, Value};
use uuid::Uuid;

use crate::error::StoreError;

/// Free-form order body. No field is required or interpreted by the service.
pub type Document = Map<String, Value>;

/// Key under which the store-assigned identifier is exposed.
pub const ID_FIELD: &str = "_id";

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: Uuid,
    pub fields: Document,
}

impl Order {
    pub fn into_document(self) -> Document {
        let mut doc = self.fields;
        doc.insert(ID_FIELD.to_string(), Value::String(self.id.to_string()));
        doc
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateResult {
    pub matched_count: u64,
}

pub fn parse_order_id(raw: &str) -> Result<Uuid, StoreError> {
    Ok(Uuid::parse_str(raw)?)
}

/// Drops the reserved `_id` key; ids are assigned by the store and never rewritten.
pub fn without_id(mut doc: Document) -> Document {
    doc.remove(ID_FIELD);
    doc
}

/// True when any key or string value holds U+0000, which JSONB cannot store.
pub fn contains_nul(doc: &Document) -> bool {
    doc.iter()
        .any(|(key, value)| key.contains('\0') || value_contains_nul(value))
}

fn value_contains_nul(value: &Value) -> bool {
    match value {
        Value::String(s) => s.contains('\0'),
        Value::Array(items) => items.iter().any(value_contains_nul),
        Value::Object(map) => contains_nul(map),
        _ => false,
    }
}
