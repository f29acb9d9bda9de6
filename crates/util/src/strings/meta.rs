use indexmap::IndexMap;

/// Parse a `<meta>` content attribute such as a viewport declaration.
///
/// Entries are separated by commas, semicolons or whitespace. Only entries
/// with exactly one `=` are kept; a later duplicate key replaces the value.
///
/// # Examples
///
/// ```
/// use spx_util::parse_meta_content;
///
/// let info = parse_meta_content("width=device-width, initial-scale=1.0");
/// assert_eq!(info["width"], "device-width");
/// assert_eq!(info["initial-scale"], "1.0");
/// ```
pub fn parse_meta_content(content: &str) -> IndexMap<String, String> {
    let mut out = IndexMap::new();
    for entry in content.split(|c: char| c == ',' || c == ';' || c.is_whitespace()) {
        let parts: Vec<&str> = entry.split('=').collect();
        if let [key, value] = parts[..] {
            out.insert(key.to_string(), value.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single() {
        let info = parse_meta_content("width=device-width");
        assert_eq!(info.len(), 1);
        assert_eq!(info["width"], "device-width");
    }

    #[test]
    fn test_separators() {
        for content in [
            "width=device-width,scale=1.0",
            "width=device-width;scale=1.0",
            "width=device-width scale=1.0",
        ] {
            let info = parse_meta_content(content);
            assert_eq!(info.len(), 2, "{content}");
            assert_eq!(info["width"], "device-width");
            assert_eq!(info["scale"], "1.0");
        }
    }

    #[test]
    fn test_trailing_separator() {
        let info = parse_meta_content("width=device-width,");
        assert_eq!(info.len(), 1);
        assert_eq!(info["width"], "device-width");
    }

    #[test]
    fn test_ignores_entries_without_single_equals() {
        assert!(parse_meta_content("thing,seo,yea").is_empty());
        assert!(parse_meta_content("a=b=c").is_empty());
        assert!(parse_meta_content("").is_empty());
    }
}
