use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Page size assumed when the server does not report one.
pub const DEFAULT_PAGE_SIZE: u64 = 25;

/// One server-returned entity (submission, bot event, aggregate row).
///
/// The shape is endpoint-dependent, so the record is kept as an open map and
/// callers go through the typed accessors below instead of a fixed schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(pub Map<String, Value>);

impl Record {
    /// Field value, treating an explicit JSON `null` the same as an absent key.
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|v| !v.is_null())
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        self.value(key).and_then(Value::as_str)
    }

    pub fn array(&self, key: &str) -> Option<&[Value]> {
        self.value(key).and_then(Value::as_array).map(Vec::as_slice)
    }

    pub fn flag(&self, key: &str) -> Option<bool> {
        self.value(key).and_then(Value::as_bool)
    }

    pub fn count(&self, key: &str) -> Option<i64> {
        self.value(key).and_then(Value::as_i64)
    }

    /// Record identifier as used in detail URLs. Accepts string and numeric ids.
    pub fn id(&self) -> Option<String> {
        match self.value("id")? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Array field rendered as plain strings (non-string elements are JSON encoded).
    pub fn string_list(&self, key: &str) -> Vec<String> {
        self.array(key)
            .map(|items| {
                items
                    .iter()
                    .map(|item| match item {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Reads a JSON `null` as the type's default, so `"results": null` decodes
/// like a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One page of a paginated collection endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectionPage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default)]
    pub page_size: Option<u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<Record>,
}

impl CollectionPage {
    /// Server page size, falling back to [`DEFAULT_PAGE_SIZE`] when absent or zero.
    pub fn effective_page_size(&self) -> u64 {
        self.page_size
            .filter(|size| *size > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn null_fields_read_as_absent() {
        let r = record(json!({ "email": null, "ip_address": "203.0.113.7" }));
        assert!(r.value("email").is_none());
        assert!(r.value("missing").is_none());
        assert_eq!(r.text("ip_address"), Some("203.0.113.7"));
    }

    #[test]
    fn id_accepts_numbers_and_strings() {
        assert_eq!(record(json!({ "id": 42 })).id().as_deref(), Some("42"));
        assert_eq!(record(json!({ "id": "abc" })).id().as_deref(), Some("abc"));
        assert_eq!(record(json!({ "id": "" })).id(), None);
        assert_eq!(record(json!({})).id(), None);
    }

    #[test]
    fn string_list_stringifies_elements() {
        let r = record(json!({ "attack_categories": ["XSS", 3, true] }));
        assert_eq!(r.string_list("attack_categories"), vec!["XSS", "3", "true"]);
        assert!(r.string_list("missing").is_empty());
    }

    #[test]
    fn page_tolerates_missing_fields() {
        let page: CollectionPage = serde_json::from_value(json!({ "results": [{ "id": 1 }] })).unwrap();
        assert_eq!(page.count, 0);
        assert_eq!(page.next, None);
        assert_eq!(page.effective_page_size(), DEFAULT_PAGE_SIZE);
        assert_eq!(page.results.len(), 1);

        let page: CollectionPage =
            serde_json::from_value(json!({ "count": 53, "page_size": 0, "results": [] })).unwrap();
        assert_eq!(page.effective_page_size(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn page_reads_null_as_empty() {
        let page: CollectionPage =
            serde_json::from_value(json!({ "count": null, "next": null, "results": null })).unwrap();
        assert_eq!(page.count, 0);
        assert!(page.results.is_empty());
    }
}
