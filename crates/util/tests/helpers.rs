use proptest::prelude::*;
use serde_json::{json, Map, Value};
use spx_util::{
    append_query_params, clean_unknown_chars, clean_white_space, hash_code, obj_to_url_params,
    select_weighted, url_to_object, QueryValue,
};

proptest! {
    #[test]
    fn encoded_params_decode_to_the_same_pairs(
        pairs in proptest::collection::btree_map("[a-zA-Z0-9 ?&=%é]{1,8}", "[a-zA-Z0-9 ?&=%é]{1,8}", 1..6),
    ) {
        let params: Map<String, Value> = pairs
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect();
        let decoded = url_to_object(&obj_to_url_params(&Value::Object(params)));

        prop_assert_eq!(decoded.len(), pairs.len());
        for (key, value) in &pairs {
            prop_assert_eq!(decoded.get(key), Some(&QueryValue::One(value.clone())));
        }
    }

    #[test]
    fn hash_only_sees_printable_ascii(text in "\\PC{0,32}") {
        let flattened: String = text
            .chars()
            .flat_map(|c| {
                let n = if c as u32 > 126 { c.len_utf16() } else { 0 };
                let kept = if n == 0 { Some(c) } else { None };
                kept.into_iter().chain(std::iter::repeat('!').take(n))
            })
            .collect();
        prop_assert_eq!(hash_code(&text), hash_code(&flattened));
        prop_assert!(hash_code(&text).chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn cleaned_text_is_printable(text in "\\PC{0,32}") {
        let cleaned = clean_unknown_chars(&text, None);
        prop_assert!(cleaned.chars().all(|c| (' '..='~').contains(&c)));
        prop_assert_eq!(cleaned.chars().count(), text.chars().count());

        let collapsed = clean_white_space(&text);
        prop_assert!(!collapsed.contains("  "));
        prop_assert_eq!(collapsed.trim(), collapsed.as_str());
    }

    #[test]
    fn weighted_selection_is_monotonic(
        weights in proptest::collection::vec(0.5f64..10.0, 1..8),
        a in 0.0f64..1.0,
        b in 0.0f64..1.0,
    ) {
        let items: Vec<(usize, f64)> = weights.into_iter().enumerate().collect();
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let low = select_weighted(&items, low).unwrap().0;
        let high = select_weighted(&items, high).unwrap().0;
        prop_assert!(low <= high);
    }
}

#[test]
fn query_string_builds_on_existing_url() {
    let url = append_query_params("http://swoop.com/p?x=1", &json!({"q": "a b", "list": ["1", "2"]}));
    assert_eq!(url, "http://swoop.com/p?x=1&q=a%20b&list=1&list=2");

    let parsed = url_to_object(&url);
    assert_eq!(parsed["x"].as_str(), Some("1"));
    assert_eq!(parsed["q"].as_str(), Some("a b"));
    assert_eq!(parsed["list"].values(), ["1", "2"]);
}
