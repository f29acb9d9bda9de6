//! Query-string encoding and decoding.

use std::borrow::Cow;

use indexmap::map::Entry;
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// A decoded query parameter: one value, or every value of a repeated key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum QueryValue {
    One(String),
    Many(Vec<String>),
}

impl QueryValue {
    /// The value, if the key appeared once.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            QueryValue::One(value) => Some(value),
            QueryValue::Many(_) => None,
        }
    }

    /// All values in order of appearance.
    pub fn values(&self) -> &[String] {
        match self {
            QueryValue::One(value) => std::slice::from_ref(value),
            QueryValue::Many(values) => values,
        }
    }

    fn push(&mut self, value: String) {
        match self {
            QueryValue::One(first) => {
                let first = std::mem::take(first);
                *self = QueryValue::Many(vec![first, value]);
            }
            QueryValue::Many(values) => values.push(value),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::One(value.to_string())
    }
}

/// Render the members of an object (or the elements of an array, keyed by
/// index) as `key=value` pairs joined by `&`.
///
/// Keys and values are percent-encoded. Null and nested objects are
/// skipped. An array member expands to one pair per truthy scalar element.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use spx_util::obj_to_url_params;
///
/// let params = json!({"name": "james", "isHuman": true, "age": 99});
/// assert_eq!(obj_to_url_params(&params), "name=james&isHuman=true&age=99");
///
/// let params = json!({"c": ["see", "", "sea"]});
/// assert_eq!(obj_to_url_params(&params), "c=see&c=sea");
/// ```
pub fn obj_to_url_params(params: &Value) -> String {
    let mut out = Vec::new();
    let mut add = |key: &str, value: &Value| match value {
        Value::Array(items) => {
            for item in items.iter().filter(|item| is_truthy(item)) {
                if let Some(text) = scalar_string(item) {
                    out.push(encode_pair(key, &text));
                }
            }
        }
        other => {
            if let Some(text) = scalar_string(other) {
                out.push(encode_pair(key, &text));
            }
        }
    };
    match params {
        Value::Object(map) => {
            for (key, value) in map {
                add(key, value);
            }
        }
        Value::Array(items) => {
            for (idx, value) in items.iter().enumerate() {
                add(&idx.to_string(), value);
            }
        }
        _ => {}
    }
    out.join("&")
}

/// Parse a query string into its parameters.
///
/// Accepts a full URL, a `?`-prefixed query or a bare query. Input with more
/// than one `?` yields no parameters. Pairs must contain exactly one `=`;
/// keys and values are percent-decoded and pairs with an empty key or value
/// are dropped. A repeated key collects its values into [`QueryValue::Many`].
///
/// # Examples
///
/// ```
/// use spx_util::{url_to_object, QueryValue};
///
/// let params = url_to_object("http://localhost:8080/index.html?thing=james%20morrin&count=34");
/// assert_eq!(params["thing"], QueryValue::from("james morrin"));
/// assert_eq!(params["count"].as_str(), Some("34"));
/// ```
pub fn url_to_object(url: &str) -> IndexMap<String, QueryValue> {
    let mut out = IndexMap::new();
    let query = if url.contains('?') {
        let mut parts = url.split('?');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(_), Some(query), None) => query,
            _ => return out,
        }
    } else {
        url
    };

    for pair in query.split('&') {
        let pieces: Vec<&str> = pair.split('=').collect();
        let [key, value] = pieces[..] else {
            continue;
        };
        let key = decode(key);
        let value = decode(value);
        if key.is_empty() || value.is_empty() {
            continue;
        }
        match out.entry(key) {
            Entry::Occupied(mut entry) => entry.get_mut().push(value),
            Entry::Vacant(entry) => {
                entry.insert(QueryValue::One(value));
            }
        }
    }
    out
}

fn encode_pair(key: &str, value: &str) -> String {
    format!(
        "{}={}",
        urlencoding::encode(key),
        urlencoding::encode(value)
    )
}

/// Percent-decode, keeping the raw text when it does not decode to UTF-8.
fn decode(text: &str) -> String {
    urlencoding::decode(text)
        .map(Cow::into_owned)
        .unwrap_or_else(|_| text.to_string())
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// String form of a scalar the way a browser would print it.
fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(match n.as_f64() {
            // Whole floats print without a fraction; `-0` prints as `0`.
            Some(f) if n.is_f64() && f == 0.0 => "0".to_string(),
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => format!("{f}"),
            _ => n.to_string(),
        }),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_escapes_params() {
        let params = json!({"crazy": "this has spaces", "nuts": "this ? & things"});
        assert_eq!(
            obj_to_url_params(&params),
            "crazy=this%20has%20spaces&nuts=this%20%3F%20%26%20things"
        );
    }

    #[test]
    fn test_array_root_uses_indices() {
        let params = json!(["three", "little", "pigs"]);
        assert_eq!(obj_to_url_params(&params), "0=three&1=little&2=pigs");
    }

    #[test]
    fn test_skips_null_and_objects() {
        let params = json!({"a": null, "b": {"x": 1}, "c": "", "d": [0, false, null, {"y": 2}, 7]});
        assert_eq!(obj_to_url_params(&params), "c=&d=7");
    }

    #[test]
    fn test_numbers_print_like_a_browser() {
        let params = json!({"int": 3, "float": 1.5, "whole": 2.0, "neg": -4});
        assert_eq!(obj_to_url_params(&params), "int=3&float=1.5&whole=2&neg=-4");
    }

    #[test]
    fn test_large_whole_floats_keep_their_value() {
        let params = json!({"big": 1e20, "neg": -1e19, "zero": -0.0, "max": u64::MAX});
        assert_eq!(
            obj_to_url_params(&params),
            "big=100000000000000000000&neg=-10000000000000000000&zero=0&max=18446744073709551615"
        );
    }

    #[test]
    fn test_scalar_root_is_empty() {
        assert_eq!(obj_to_url_params(&json!("x")), "");
        assert_eq!(obj_to_url_params(&json!(null)), "");
        assert_eq!(obj_to_url_params(&json!({})), "");
    }

    #[test]
    fn test_url_to_object_forms() {
        let expected: IndexMap<String, QueryValue> = [
            ("thing".to_string(), QueryValue::from("james")),
            ("count".to_string(), QueryValue::from("34")),
            ("last".to_string(), QueryValue::from("morrin")),
        ]
        .into_iter()
        .collect();

        for input in [
            "http://localhost:8080/index.html?thing=james&count=34&last=morrin",
            "thing=james&count=34&last=morrin",
            "?thing=james&count=34&last=morrin",
        ] {
            assert_eq!(url_to_object(input), expected, "{input}");
        }
    }

    #[test]
    fn test_url_to_object_drops_empty_and_malformed() {
        let out = url_to_object("thing=&count=34&=x&a=b=c&flag&last=morrin");
        let keys: Vec<&str> = out.keys().map(String::as_str).collect();
        assert_eq!(keys, ["count", "last"]);
    }

    #[test]
    fn test_url_to_object_repeated_keys() {
        let out = url_to_object("c=see&c=sea&c=si");
        assert_eq!(
            out["c"],
            QueryValue::Many(vec!["see".into(), "sea".into(), "si".into()])
        );
        assert_eq!(out["c"].as_str(), None);
        assert_eq!(out["c"].values().len(), 3);
    }

    #[test]
    fn test_url_to_object_two_question_marks() {
        assert!(url_to_object("http://a.com?x=1?y=2").is_empty());
    }

    #[test]
    fn test_url_to_object_keeps_undecodable_text() {
        let out = url_to_object("bad=%FF");
        assert_eq!(out["bad"].as_str(), Some("%FF"));
    }

    #[test]
    fn test_query_value_serializes_untagged() {
        let out = url_to_object("a=1&b=2&b=3");
        assert_eq!(
            serde_json::to_value(&out).unwrap(),
            json!({"a": "1", "b": ["2", "3"]})
        );
    }
}
