//! Normalized view of the catalog API payload
//!
//! The server response is loosely structured; every field here defaults
//! rather than failing, so a missing or oddly-typed field never takes the
//! whole payload down. Rendering decides how defaults are displayed.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Display label used when the server sends no message
pub const DEFAULT_MESSAGE: &str = "Gearbox Catalog";

/// Normalized API response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse {
    #[serde(default = "default_message", deserialize_with = "de_message")]
    pub message: String,
    #[serde(default, deserialize_with = "de_filter_echo")]
    pub filters_applied: Option<serde_json::Map<String, Value>>,
    #[serde(default)]
    pub summary: Summary,
    #[serde(default, deserialize_with = "de_records")]
    pub categories: Vec<Category>,
    #[serde(default, deserialize_with = "de_records")]
    pub gearboxes: Vec<Gearbox>,
}

/// Item counts reported by the server
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Summary {
    #[serde(default, deserialize_with = "de_count")]
    pub total_items: u64,
    #[serde(default, deserialize_with = "de_count")]
    pub categories: u64,
    #[serde(default, deserialize_with = "de_count")]
    pub gearbox_products: u64,
}

/// One category record
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    #[serde(default, deserialize_with = "de_scalar")]
    pub category_name: Option<String>,
    #[serde(default, deserialize_with = "de_scalar")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "de_scalar")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "de_scalar")]
    pub created_at: Option<String>,
}

/// One gearbox product record; every field is optional on the wire
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Gearbox {
    #[serde(default, deserialize_with = "de_scalar")]
    pub model_name: Option<String>,
    #[serde(default, deserialize_with = "de_scalar")]
    pub manufacturer: Option<String>,
    #[serde(default, deserialize_with = "de_scalar")]
    pub gearbox_type: Option<String>,
    #[serde(default, deserialize_with = "de_scalar")]
    pub torque_rating: Option<String>,
    #[serde(default, deserialize_with = "de_scalar")]
    pub performance_rating: Option<String>,
    #[serde(default, deserialize_with = "de_scalar")]
    pub application_type: Option<String>,
    #[serde(default, deserialize_with = "de_scalar")]
    pub price_range: Option<String>,
    #[serde(default, deserialize_with = "de_scalar")]
    pub gearbox_id: Option<String>,
}

impl Default for ApiResponse {
    fn default() -> Self {
        Self {
            message: default_message(),
            filters_applied: None,
            summary: Summary::default(),
            categories: Vec::new(),
            gearboxes: Vec::new(),
        }
    }
}

impl ApiResponse {
    /// Normalize a raw payload. Never fails: anything that is not shaped as
    /// expected (including a top-level non-object) collapses to the
    /// all-defaults empty response.
    pub fn normalize(payload: &Value) -> Self {
        serde_json::from_value(payload.clone()).unwrap_or_default()
    }
}

fn default_message() -> String {
    DEFAULT_MESSAGE.to_string()
}

/// Render a JSON scalar as a display string; objects and arrays don't count
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn de_scalar<'de, D: Deserializer<'de>>(de: D) -> Result<Option<String>, D::Error> {
    let value = Value::deserialize(de)?;
    Ok(scalar_to_string(&value))
}

fn de_message<'de, D: Deserializer<'de>>(de: D) -> Result<String, D::Error> {
    let value = Value::deserialize(de)?;
    Ok(scalar_to_string(&value).unwrap_or_else(default_message))
}

fn de_count<'de, D: Deserializer<'de>>(de: D) -> Result<u64, D::Error> {
    let value = Value::deserialize(de)?;
    Ok(match value {
        Value::Number(n) => n.as_u64().unwrap_or(0),
        Value::String(s) => s.parse().unwrap_or(0),
        _ => 0,
    })
}

fn de_filter_echo<'de, D: Deserializer<'de>>(
    de: D,
) -> Result<Option<serde_json::Map<String, Value>>, D::Error> {
    let value = Value::deserialize(de)?;
    Ok(match value {
        Value::Object(map) => Some(map),
        _ => None,
    })
}

/// Deserialize a record list, defaulting each malformed entry instead of
/// rejecting the whole response
fn de_records<'de, D, T>(de: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: for<'a> Deserialize<'a> + Default,
{
    let value = Value::deserialize(de)?;
    let Value::Array(items) = value else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .map(|item| serde_json::from_value(item).unwrap_or_default())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_object_defaults() {
        let resp = ApiResponse::normalize(&json!({}));
        assert_eq!(resp.message, DEFAULT_MESSAGE);
        assert_eq!(resp.summary.total_items, 0);
        assert_eq!(resp.summary.categories, 0);
        assert_eq!(resp.summary.gearbox_products, 0);
        assert!(resp.categories.is_empty());
        assert!(resp.gearboxes.is_empty());
        assert!(resp.filters_applied.is_none());
    }

    #[test]
    fn test_non_object_payload_defaults() {
        assert_eq!(ApiResponse::normalize(&json!("oops")), ApiResponse::default());
        assert_eq!(ApiResponse::normalize(&json!([1, 2])), ApiResponse::default());
        assert_eq!(ApiResponse::normalize(&Value::Null), ApiResponse::default());
    }

    #[test]
    fn test_full_payload() {
        let resp = ApiResponse::normalize(&json!({
            "message": "Gearbox Catalog - All Items",
            "filters_applied": {"category": "automotive"},
            "summary": {"total_items": 3, "categories": 1, "gearbox_products": 2},
            "categories": [{"category_name": "Automotive", "description": "Cars"}],
            "gearboxes": [
                {"model_name": "GX-100", "torque_rating": 2500},
                {"manufacturer": "ZF"}
            ]
        }));
        assert_eq!(resp.message, "Gearbox Catalog - All Items");
        assert_eq!(resp.summary.total_items, 3);
        assert_eq!(resp.categories.len(), 1);
        assert_eq!(resp.gearboxes.len(), 2);
        // numeric scalar is coerced to a display string
        assert_eq!(resp.gearboxes[0].torque_rating.as_deref(), Some("2500"));
        assert_eq!(resp.gearboxes[1].model_name, None);
        let echo = resp.filters_applied.unwrap();
        assert_eq!(echo.get("category"), Some(&json!("automotive")));
    }

    #[test]
    fn test_record_level_defaulting() {
        // A record missing fields keeps its place with None fields; a
        // malformed (non-object) record becomes an all-default record.
        let resp = ApiResponse::normalize(&json!({
            "categories": [{"category_name": "Marine"}, "bogus"]
        }));
        assert_eq!(resp.categories.len(), 2);
        assert_eq!(resp.categories[0].category_name.as_deref(), Some("Marine"));
        assert_eq!(resp.categories[0].description, None);
        assert_eq!(resp.categories[1], Category::default());
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let first = ApiResponse::normalize(&json!({
            "summary": {"total_items": "2"},
            "gearboxes": [{"model_name": "GX-100", "performance_rating": 92.5}]
        }));
        let round_tripped = serde_json::to_value(&first).unwrap();
        assert_eq!(ApiResponse::normalize(&round_tripped), first);
    }
}
