//! Lenient field access over loosely-shaped JSON payloads.
//!
//! Platform APIs (and the fetchers wrapping them) disagree on key names and
//! value types: counts arrive as numbers, numeric strings, or `null`. The
//! reader accepts what it can, treats everything else as absent, and keeps
//! track of how many expected fields were actually present.

use serde_json::{Map, Value};

/// Field reader for one payload object
pub(crate) struct PayloadReader<'a> {
    map: &'a Map<String, Value>,
    expected: usize,
    present: usize,
}

impl<'a> PayloadReader<'a> {
    pub(crate) const fn new(map: &'a Map<String, Value>) -> Self {
        Self {
            map,
            expected: 0,
            present: 0,
        }
    }

    /// First non-null value among `keys`
    pub(crate) fn raw(&self, keys: &[&str]) -> Option<&'a Value> {
        keys.iter()
            .filter_map(|key| self.map.get(*key))
            .find(|value| !value.is_null())
    }

    /// Account identifier: a non-empty string or an integer
    pub(crate) fn identity(&self, keys: &[&str]) -> Option<String> {
        match self.raw(keys)? {
            Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Optional free text. Not tracked for completeness.
    pub(crate) fn text(&self, keys: &[&str]) -> Option<String> {
        match self.raw(keys)? {
            Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
            _ => None,
        }
    }

    /// Optional flag. Not tracked for completeness.
    pub(crate) fn flag(&self, keys: &[&str]) -> bool {
        self.raw(keys).and_then(as_flag).unwrap_or(false)
    }

    /// Expected counter: missing or unreadable counts as 0 and lowers completeness
    pub(crate) fn count(&mut self, keys: &[&str]) -> u64 {
        self.expected += 1;
        match self.raw(keys).and_then(as_count) {
            Some(value) => {
                self.present += 1;
                value
            }
            None => 0,
        }
    }

    /// Expected array: missing or non-array counts as empty and lowers completeness
    pub(crate) fn list(&mut self, keys: &[&str]) -> &'a [Value] {
        self.expected += 1;
        match self.raw(keys) {
            Some(Value::Array(items)) => {
                self.present += 1;
                items
            }
            _ => &[],
        }
    }

    /// Expected object: missing or non-object lowers completeness
    pub(crate) fn object(&mut self, keys: &[&str]) -> Option<&'a Map<String, Value>> {
        self.expected += 1;
        let object = self.raw(keys).and_then(Value::as_object);
        if object.is_some() {
            self.present += 1;
        }
        object
    }

    /// Expected field that may be either an array or an object
    pub(crate) fn collection(&mut self, keys: &[&str]) -> Option<&'a Value> {
        self.expected += 1;
        let value = self
            .raw(keys)
            .filter(|v| v.is_array() || v.is_object());
        if value.is_some() {
            self.present += 1;
        }
        value
    }

    /// Fraction of expected fields that were present
    pub(crate) fn completeness(&self) -> f64 {
        if self.expected == 0 {
            1.0
        } else {
            self.present as f64 / self.expected as f64
        }
    }
}

/// Read a counter leniently: numbers and numeric strings are accepted,
/// negative or non-finite values clamp to 0.
pub(crate) fn as_count(value: &Value) -> Option<u64> {
    let raw = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().replace(['_', ','], "").parse::<f64>().ok()?,
        _ => return None,
    };
    Some(clamp_count(raw))
}

fn clamp_count(raw: f64) -> u64 {
    if raw.is_finite() && raw > 0.0 {
        // float-to-int casts saturate at u64::MAX
        raw as u64
    } else {
        0
    }
}

fn as_flag(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.trim().to_lowercase().as_str() {
            "true" | "yes" | "1" => Some(true),
            "false" | "no" | "0" => Some(false),
            _ => None,
        },
        Value::Number(n) => n.as_f64().map(|x| x != 0.0),
        _ => None,
    }
}

/// String field of a nested object
pub(crate) fn nested_text(object: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| object.get(*key))
        .find_map(|value| match value {
            Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
            _ => None,
        })
}

/// Counter field of a nested object (0 when absent)
pub(crate) fn nested_count(object: &Map<String, Value>, keys: &[&str]) -> u64 {
    keys.iter()
        .filter_map(|key| object.get(*key))
        .find_map(as_count)
        .unwrap_or(0)
}

/// Flag field of a nested object (false when absent)
pub(crate) fn nested_flag(object: &Map<String, Value>, keys: &[&str]) -> bool {
    keys.iter()
        .filter_map(|key| object.get(*key))
        .find_map(as_flag)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("fixture must be an object"),
        }
    }

    #[test]
    fn test_count_accepts_numbers_and_numeric_strings() {
        assert_eq!(as_count(&json!(42)), Some(42));
        assert_eq!(as_count(&json!(12.9)), Some(12));
        assert_eq!(as_count(&json!("1,234")), Some(1234));
        assert_eq!(as_count(&json!(-5)), Some(0));
        assert_eq!(as_count(&json!(1e300)), Some(u64::MAX));
        assert_eq!(as_count(&json!("lots")), None);
        assert_eq!(as_count(&json!([1])), None);
    }

    #[test]
    fn test_completeness_tracks_expected_fields() {
        let map = object(json!({"followers": 10, "following": "n/a", "repos": []}));
        let mut reader = PayloadReader::new(&map);
        assert_eq!(reader.count(&["followers"]), 10);
        assert_eq!(reader.count(&["following"]), 0);
        assert!(reader.list(&["repos"]).is_empty());
        assert!((reader.completeness() - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_first_non_null_alias_wins() {
        let map = object(json!({"total_stars": null, "stars": 7}));
        let mut reader = PayloadReader::new(&map);
        assert_eq!(reader.count(&["total_stars", "stars"]), 7);
    }

    #[test]
    fn test_identity_accepts_integers_and_rejects_blank() {
        let map = object(json!({"user_id": 9001, "login": "  "}));
        let reader = PayloadReader::new(&map);
        assert_eq!(reader.identity(&["user_id"]), Some("9001".to_string()));
        assert_eq!(reader.identity(&["login"]), None);
    }

    #[test]
    fn test_flag_parsing() {
        let map = object(json!({"a": "yes", "b": 0, "c": {}}));
        let reader = PayloadReader::new(&map);
        assert!(reader.flag(&["a"]));
        assert!(!reader.flag(&["b"]));
        assert!(!reader.flag(&["c"]));
    }
}
