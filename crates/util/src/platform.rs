//! User-agent sniffing.

use regex::Regex;

fn msie_regex() -> &'static Regex {
    use std::sync::OnceLock;
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)MSIE ([0-9]+[.0-9]*)").unwrap())
}

/// The Internet Explorer version named by a user-agent string.
///
/// Reads the number after `MSIE ` up to its first fractional part, so
/// `MSIE 5.5.1` is `5.5`. Returns `None` for other browsers.
///
/// # Examples
///
/// ```
/// use spx_util::ie_version;
///
/// assert_eq!(ie_version("Mozilla/4.0 (compatible; MSIE 6.0; Windows NT 5.1)"), Some(6.0));
/// assert_eq!(ie_version("Mozilla/5.0 (X11; Linux x86_64) Firefox/120.0"), None);
/// ```
pub fn ie_version(user_agent: &str) -> Option<f64> {
    let raw = msie_regex().captures(user_agent)?.get(1)?.as_str();
    let mut parts = raw.split('.');
    let whole = parts.next().unwrap_or_default();
    let number = match parts.next() {
        Some(fraction) if !fraction.is_empty() => format!("{whole}.{fraction}"),
        _ => whole.to_string(),
    };
    number.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_versions() {
        assert_eq!(
            ie_version("Mozilla/4.0 (compatible; MSIE 7.0b; Windows NT 6.0)"),
            Some(7.0)
        );
        assert_eq!(
            ie_version("Mozilla/5.0 (compatible; MSIE 10.0; Windows NT 6.2; Trident/6.0)"),
            Some(10.0)
        );
        assert_eq!(ie_version("Mozilla/4.0 (compatible; msie 5.5.1)"), Some(5.5));
        assert_eq!(ie_version("MSIE 9."), Some(9.0));
    }

    #[test]
    fn test_not_ie() {
        assert_eq!(ie_version(""), None);
        assert_eq!(ie_version("MSIE x"), None);
        // IE 11 dropped the MSIE token.
        assert_eq!(
            ie_version("Mozilla/5.0 (Windows NT 6.3; Trident/7.0; rv:11.0) like Gecko"),
            None
        );
    }
}
