use serde::Serialize;
use serde_json::Value;
use sqlx::FromRow;
use sqlx::types::Json;
use utoipa::ToSchema;
use uuid::Uuid;

/// A schemaless document row: store-assigned id plus the JSONB payload.
#[derive(Debug, Clone, FromRow)]
pub struct StoredDocument {
    pub id: Uuid,
    pub doc: Json<Value>,
}

impl StoredDocument {
    /// Reads a top-level string field from the document, if present.
    pub fn field_str(&self, key: &str) -> Option<&str> {
        self.doc.0.get(key).and_then(Value::as_str)
    }

    /// The document as returned on the wire: the stored payload with the
    /// store-assigned `id` injected as a top-level field. Non-object
    /// payloads (legal, nothing validates them) are returned as stored.
    pub fn into_api_value(self) -> Value {
        let Json(mut doc) = self.doc;
        if let Value::Object(map) = &mut doc {
            map.insert("id".to_string(), Value::String(self.id.to_string()));
        }
        doc
    }
}

/// Result of a single-document insert, in the driver-result shape
/// existing API clients parse.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsertResult {
    pub acknowledged: bool,
    pub inserted_id: Option<Uuid>,
}

impl InsertResult {
    pub fn new(id: Uuid) -> Self {
        Self {
            acknowledged: true,
            inserted_id: Some(id),
        }
    }
}

/// Result of a single-document update. Postgres reports one affected-rows
/// figure, so both counts carry it.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResult {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
}

impl UpdateResult {
    pub fn new(rows_affected: u64) -> Self {
        Self {
            acknowledged: true,
            matched_count: rows_affected,
            modified_count: rows_affected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn api_value_injects_id() {
        let id = Uuid::new_v4();
        let doc = StoredDocument {
            id,
            doc: Json(json!({ "email": "u@x.com", "role": "admin" })),
        };

        let value = doc.into_api_value();
        assert_eq!(value["id"], json!(id.to_string()));
        assert_eq!(value["email"], json!("u@x.com"));
    }

    #[test]
    fn non_object_payload_returned_as_stored() {
        let doc = StoredDocument {
            id: Uuid::new_v4(),
            doc: Json(json!("just a string")),
        };
        assert_eq!(doc.into_api_value(), json!("just a string"));
    }

    #[test]
    fn field_str_reads_top_level_strings() {
        let doc = StoredDocument {
            id: Uuid::new_v4(),
            doc: Json(json!({ "email": "u@x.com", "count": 3 })),
        };
        assert_eq!(doc.field_str("email"), Some("u@x.com"));
        assert_eq!(doc.field_str("count"), None);
        assert_eq!(doc.field_str("missing"), None);
    }

    #[test]
    fn insert_result_serializes_with_driver_field_names() {
        let id = Uuid::new_v4();
        let value = serde_json::to_value(InsertResult::new(id)).unwrap();
        assert_eq!(value["acknowledged"], json!(true));
        assert_eq!(value["insertedId"], json!(id.to_string()));
    }

    #[test]
    fn update_result_carries_rows_affected_in_both_counts() {
        let value = serde_json::to_value(UpdateResult::new(1)).unwrap();
        assert_eq!(value["matchedCount"], json!(1));
        assert_eq!(value["modifiedCount"], json!(1));
    }
}
