use serde_json::{Map, Value};

/// One raw result row as returned by the platform.
///
/// Platform field names are flat strings that embed the source view (e.g.
/// `"summary_delivery_events.keyword"`), are inconsistent across report
/// types, and have drifted across API versions. Accessors therefore take an
/// ordered list of candidate keys and return the first non-null hit; the
/// candidate lists live with each normalizer and encode observed platform
/// behavior, so they must stay explicit rather than being unified.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow(Map<String, Value>);

impl RawRow {
    /// Wrap a raw JSON object.
    #[must_use]
    pub const fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// First candidate key holding a non-empty string.
    ///
    /// Numbers are accepted and rendered as strings, since the platform
    /// string-casts some dimension ids inconsistently.
    #[must_use]
    pub fn str_at(&self, candidates: &[&str]) -> Option<String> {
        for key in candidates {
            match self.0.get(*key) {
                Some(Value::String(s)) if !s.is_empty() => return Some(s.clone()),
                Some(Value::Number(n)) => return Some(n.to_string()),
                _ => {}
            }
        }
        None
    }

    /// First candidate key holding a non-negative integer, defaulting to 0.
    ///
    /// Accepts JSON numbers and numeric strings; negative or fractional
    /// counts are clamped to 0 rather than propagated.
    #[must_use]
    pub fn u64_at(&self, candidates: &[&str]) -> u64 {
        for key in candidates {
            if let Some(n) = self.number_at(key) {
                if n >= 0.0 {
                    return n as u64;
                }
                return 0;
            }
        }
        0
    }

    /// First candidate key holding a float, defaulting to 0.0.
    ///
    /// Accepts JSON numbers and numeric strings.
    #[must_use]
    pub fn f64_at(&self, candidates: &[&str]) -> f64 {
        for key in candidates {
            if let Some(n) = self.number_at(key) {
                return n;
            }
        }
        0.0
    }

    fn number_at(&self, key: &str) -> Option<f64> {
        match self.0.get(key) {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
    }
}

/// Extract result rows from a download payload.
///
/// The platform has shipped downloads both as a bare JSON array and wrapped
/// in an envelope object; all observed envelope keys are tried in order.
/// Non-object rows are skipped.
#[must_use]
pub fn parse_rows(payload: &Value) -> Vec<RawRow> {
    const ENVELOPE_KEYS: &[&str] = &["results", "data", "rows"];

    let items = match payload {
        Value::Array(items) => Some(items),
        Value::Object(map) => ENVELOPE_KEYS
            .iter()
            .find_map(|k| map.get(*k).and_then(Value::as_array)),
        _ => None,
    };

    items
        .map(|items| {
            items
                .iter()
                .filter_map(|item| match item {
                    Value::Object(fields) => Some(RawRow::new(fields.clone())),
                    _ => None,
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Extract a remote-assigned identifier from a response, trying the given
/// keys at the top level and one level under each.
///
/// Ids arrive as JSON numbers or numeric strings depending on endpoint.
#[must_use]
pub fn extract_id(payload: &Value, candidates: &[&str]) -> Option<u64> {
    fn as_id(v: &Value) -> Option<u64> {
        match v {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.parse::<u64>().ok(),
            _ => None,
        }
    }

    for key in candidates {
        if let Some(v) = payload.get(*key)
            && let Some(id) = as_id(v)
        {
            return Some(id);
        }
    }
    // Some endpoints nest the resource under a wrapper object.
    for key in candidates {
        if let Some(Value::Object(inner)) = payload.get(*key) {
            if let Some(id) = inner.get("id").and_then(as_id) {
                return Some(id);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(v: Value) -> RawRow {
        match v {
            Value::Object(m) => RawRow::new(m),
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn str_at_respects_candidate_order() {
        let r = row(json!({"b": "second", "a": "first"}));
        assert_eq!(r.str_at(&["a", "b"]).as_deref(), Some("first"));
        assert_eq!(r.str_at(&["missing", "b"]).as_deref(), Some("second"));
        assert_eq!(r.str_at(&["missing"]), None);
    }

    #[test]
    fn empty_string_does_not_satisfy_lookup() {
        let r = row(json!({"a": "", "b": "fallback"}));
        assert_eq!(r.str_at(&["a", "b"]).as_deref(), Some("fallback"));
    }

    #[test]
    fn numeric_coercion_accepts_strings() {
        let r = row(json!({"imps": "2000", "ecpm": "5.25"}));
        assert_eq!(r.u64_at(&["imps"]), 2000);
        assert!((r.f64_at(&["ecpm"]) - 5.25).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_metrics_default_to_zero() {
        let r = row(json!({}));
        assert_eq!(r.u64_at(&["imps"]), 0);
        assert!(r.f64_at(&["spend"]).abs() < f64::EPSILON);
    }

    #[test]
    fn parse_rows_handles_bare_and_enveloped_payloads() {
        let bare = json!([{"a": 1}, {"a": 2}]);
        let wrapped = json!({"results": [{"a": 1}], "total": 1});
        assert_eq!(parse_rows(&bare).len(), 2);
        assert_eq!(parse_rows(&wrapped).len(), 1);
        assert!(parse_rows(&json!("nope")).is_empty());
    }

    #[test]
    fn extract_id_tolerates_string_and_nesting() {
        assert_eq!(extract_id(&json!({"id": 7}), &["id"]), Some(7));
        assert_eq!(extract_id(&json!({"id": "7"}), &["id"]), Some(7));
        assert_eq!(
            extract_id(&json!({"snapshot": {"id": 9}}), &["id", "snapshot"]),
            Some(9)
        );
        assert_eq!(extract_id(&json!({}), &["id"]), None);
    }
}
