use regex::Regex;

fn white_space_regex() -> &'static Regex {
    use std::sync::OnceLock;
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\s\u{00a0}\u{feff}]+").unwrap())
}

/// Check if a character lies in the printable ASCII range (`' '` to `'~'`).
///
/// # Examples
///
/// ```
/// use spx_util::strings::is_printable_ascii;
///
/// assert!(is_printable_ascii('a'));
/// assert!(is_printable_ascii(' '));
/// assert!(!is_printable_ascii('\n'));
/// assert!(!is_printable_ascii('é'));
/// ```
pub fn is_printable_ascii(ch: char) -> bool {
    matches!(ch, ' '..='~')
}

/// Collapse every run of whitespace (line breaks and non-breaking spaces
/// included) to a single space and trim both ends.
///
/// # Examples
///
/// ```
/// use spx_util::clean_white_space;
///
/// assert_eq!(clean_white_space("  queens\n of\u{a0}\u{a0}the\r\n stone age "), "queens of the stone age");
/// ```
pub fn clean_white_space(text: &str) -> String {
    white_space_regex()
        .replace_all(text, " ")
        .trim_matches(' ')
        .to_string()
}

/// Replace every character outside printable ASCII with `substitute`.
///
/// A missing or empty substitute means a single space.
///
/// # Examples
///
/// ```
/// use spx_util::clean_unknown_chars;
///
/// assert_eq!(clean_unknown_chars("caf\u{e9}\tbar", None), "caf  bar");
/// assert_eq!(clean_unknown_chars("caf\u{e9}", Some("?")), "caf?");
/// ```
pub fn clean_unknown_chars(text: &str, substitute: Option<&str>) -> String {
    let substitute = substitute.filter(|s| !s.is_empty()).unwrap_or(" ");
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if is_printable_ascii(ch) {
            out.push(ch);
        } else {
            out.push_str(substitute);
        }
    }
    out
}
