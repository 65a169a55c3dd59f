use serde::{Deserialize, Serialize};

use super::collection::null_as_default;

/// Aggregate figures returned by the `snapshot/` endpoint.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Snapshot {
    #[serde(default)]
    pub total_events: Option<u64>,
    #[serde(default)]
    pub total_injection_attempts: Option<u64>,
    #[serde(default)]
    pub total_ips: Option<u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub attack_category_snapshot: Vec<AttackCategorySnapshot>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct AttackCategorySnapshot {
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub most_popular_paths: Vec<PathCount>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct PathCount {
    #[serde(default, deserialize_with = "null_as_default")]
    pub request_path: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub path_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_category_breakdown() {
        let raw = r#"{
            "total_events": 12,
            "total_ips": 3,
            "attack_category_snapshot": [
                {"category": "SQL Injection", "total_count": 1,
                 "most_popular_paths": [{"request_path": "/api/bot-events/", "path_count": 1}]}
            ]
        }"#;
        let snapshot: Snapshot = serde_json::from_str(raw).unwrap();
        assert_eq!(snapshot.total_events, Some(12));
        assert_eq!(snapshot.total_injection_attempts, None);
        assert_eq!(snapshot.attack_category_snapshot[0].most_popular_paths[0].path_count, 1);
    }

    #[test]
    fn null_collections_and_names_read_as_empty() {
        let snapshot: Snapshot =
            serde_json::from_str(r#"{"total_events": 4, "attack_category_snapshot": null}"#).unwrap();
        assert!(snapshot.attack_category_snapshot.is_empty());

        let raw = r#"{
            "attack_category_snapshot": [
                {"category": null, "total_count": null, "most_popular_paths": null},
                {"category": "XSS", "most_popular_paths": [{"request_path": null, "path_count": 2}]}
            ]
        }"#;
        let snapshot: Snapshot = serde_json::from_str(raw).unwrap();
        let first = &snapshot.attack_category_snapshot[0];
        assert_eq!(first.category, "");
        assert_eq!(first.total_count, 0);
        assert!(first.most_popular_paths.is_empty());
        assert_eq!(snapshot.attack_category_snapshot[1].most_popular_paths[0].request_path, "");
    }
}
