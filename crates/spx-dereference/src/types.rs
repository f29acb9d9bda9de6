//! Type definitions for path access.

use std::borrow::Cow;
use std::fmt;

/// A step in a path.
///
/// Can be either a string (object key) or number (array index). The accessor
/// does not distinguish between the two when the container can interpret
/// either: an `Index` on an object addresses the member named by the number,
/// and a canonical numeric `Key` on an array addresses that element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathStep {
    Key(String),
    Index(usize),
}

impl PathStep {
    /// Parse a raw step, producing `Index` for canonical non-negative integers.
    ///
    /// # Example
    ///
    /// ```
    /// use spx_dereference::PathStep;
    ///
    /// assert_eq!(PathStep::parse("3"), PathStep::Index(3));
    /// assert_eq!(PathStep::parse("03"), PathStep::Key("03".to_string()));
    /// assert_eq!(PathStep::parse("foo"), PathStep::Key("foo".to_string()));
    /// ```
    pub fn parse(step: &str) -> Self {
        if is_valid_index(step) {
            if let Ok(idx) = step.parse() {
                return PathStep::Index(idx);
            }
        }
        PathStep::Key(step.to_string())
    }

    /// The step as an object member name.
    pub fn as_key(&self) -> Cow<'_, str> {
        match self {
            PathStep::Key(key) => Cow::Borrowed(key),
            PathStep::Index(idx) => Cow::Owned(idx.to_string()),
        }
    }

    /// The step as an array index, if it can be one.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            PathStep::Index(idx) => Some(*idx),
            PathStep::Key(key) if is_valid_index(key) => key.parse().ok(),
            PathStep::Key(_) => None,
        }
    }
}

impl fmt::Display for PathStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathStep::Key(key) => f.write_str(key),
            PathStep::Index(idx) => write!(f, "{idx}"),
        }
    }
}

impl From<&str> for PathStep {
    fn from(key: &str) -> Self {
        PathStep::Key(key.to_string())
    }
}

impl From<String> for PathStep {
    fn from(key: String) -> Self {
        PathStep::Key(key)
    }
}

impl From<usize> for PathStep {
    fn from(idx: usize) -> Self {
        PathStep::Index(idx)
    }
}

/// A path: an ordered sequence of steps.
pub type Path = Vec<PathStep>;

/// Build a path from anything convertible into steps.
///
/// # Example
///
/// ```
/// use spx_dereference::{to_path, PathStep};
///
/// assert_eq!(
///     to_path(["a", "b"]),
///     vec![PathStep::Key("a".into()), PathStep::Key("b".into())]
/// );
/// ```
pub fn to_path<I, S>(steps: I) -> Path
where
    I: IntoIterator<Item = S>,
    S: Into<PathStep>,
{
    steps.into_iter().map(Into::into).collect()
}

/// Check if a string represents a canonical non-negative integer index.
pub fn is_valid_index(index: &str) -> bool {
    if index.is_empty() {
        return false;
    }
    let bytes = index.as_bytes();
    if bytes.len() > 1 && bytes[0] == b'0' {
        return false;
    }
    bytes.iter().all(|&b| b.is_ascii_digit())
}

/// A value that can hold children addressed by a key.
///
/// Implementors decide which keys they accept. A container that cannot hold
/// a child under some key (a scalar, or an array given a non-index key)
/// reports it by handing the value back from [`Container::set_child`].
pub trait Container: Sized {
    type Key;

    /// A fresh, empty container used for intermediate path segments.
    fn empty() -> Self;

    fn child(&self, key: &Self::Key) -> Option<&Self>;

    fn child_mut(&mut self, key: &Self::Key) -> Option<&mut Self>;

    /// Store `value` under `key`, replacing any existing child.
    ///
    /// Returns the value back when this container cannot hold it.
    fn set_child(&mut self, key: &Self::Key, value: Self) -> Result<(), Self>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_step() {
        assert_eq!(PathStep::parse("0"), PathStep::Index(0));
        assert_eq!(PathStep::parse("42"), PathStep::Index(42));
        assert_eq!(PathStep::parse("-1"), PathStep::Key("-1".to_string()));
        assert_eq!(PathStep::parse(""), PathStep::Key(String::new()));
    }

    #[test]
    fn test_step_as_index() {
        assert_eq!(PathStep::Index(2).as_index(), Some(2));
        assert_eq!(PathStep::from("7").as_index(), Some(7));
        assert_eq!(PathStep::from("07").as_index(), None);
        assert_eq!(PathStep::from("x").as_index(), None);
    }

    #[test]
    fn test_step_display() {
        assert_eq!(PathStep::Index(5).to_string(), "5");
        assert_eq!(PathStep::from("foo").to_string(), "foo");
        assert_eq!(PathStep::Index(5).as_key(), "5");
    }

    #[test]
    fn test_is_valid_index() {
        assert!(is_valid_index("0"));
        assert!(is_valid_index("123"));
        assert!(!is_valid_index("-1"));
        assert!(!is_valid_index("1.5"));
        assert!(!is_valid_index(""));
        assert!(!is_valid_index("01"));
    }
}
