/// A short, stable hash of `text` as lowercase hex.
///
/// Classic 31-multiplier rolling hash over UTF-16 code units, wrapping at 32
/// bits. Units above `0x7E` all count as `!` so that the hash only depends on
/// the printable-ASCII shape of the text. The result is the absolute value of
/// the signed 32-bit hash.
///
/// # Examples
///
/// ```
/// use spx_util::hash_code;
///
/// assert_eq!(hash_code(""), "0");
/// assert_eq!(hash_code("hello"), "5e918d2");
/// assert_eq!(hash_code("café"), hash_code("caf!"));
/// ```
pub fn hash_code(text: &str) -> String {
    let hash = text.encode_utf16().fold(0i32, |hash, unit| {
        let code = if unit > 126 { 33 } else { i32::from(unit) };
        hash.wrapping_shl(5).wrapping_sub(hash).wrapping_add(code)
    });
    format!("{:x}", i64::from(hash).abs())
}
