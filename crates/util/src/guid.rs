use regex::Regex;
use uuid::Uuid;

fn guid_regex() -> &'static Regex {
    use std::sync::OnceLock;
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^\{?[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}\}?$",
        )
        .unwrap()
    })
}

/// Whether `text` is a hyphenated GUID, optionally wrapped in braces.
///
/// # Examples
///
/// ```
/// use spx_util::is_guid;
///
/// assert!(is_guid("3F2504E0-4F89-11D3-9A0C-0305E82C3301"));
/// assert!(is_guid("{3f2504e0-4f89-11d3-9a0c-0305e82c3301}"));
/// assert!(!is_guid("3f2504e04f8911d39a0c0305e82c3301"));
/// ```
pub fn is_guid(text: &str) -> bool {
    guid_regex().is_match(text)
}

/// A random (version 4) GUID in lowercase hyphenated form.
pub fn guid() -> String {
    Uuid::new_v4().to_string()
}
