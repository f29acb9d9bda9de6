use std::fmt;

use serde::{Deserialize, Serialize};

/// Separator used when a topic name is given as a single string.
pub const DEFAULT_DELIMITER: char = '.';

/// A topic address: an ordered list of namespace segments.
///
/// The empty topic is the root and addresses every topic in a hub.
///
/// # Example
///
/// ```
/// use spx_pubsub::Topic;
///
/// let topic = Topic::parse("eventA.ns1", '.');
/// assert_eq!(topic.segments(), ["eventA", "ns1"]);
/// assert!(Topic::parse("eventA", '.').covers(&topic));
/// assert!(Topic::parse("", '.').is_root());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Topic {
    segments: Vec<String>,
}

impl Topic {
    /// The root topic.
    pub fn root() -> Self {
        Self::default()
    }

    /// Split a delimited name into segments.
    ///
    /// The empty name is the root. Empty segments (`"a..b"`) are kept as-is.
    pub fn parse(name: &str, delimiter: char) -> Self {
        if name.is_empty() {
            return Self::root();
        }
        Self {
            segments: name.split(delimiter).map(str::to_string).collect(),
        }
    }

    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// A more specific topic one segment below this one.
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        Self { segments }
    }

    /// The enclosing namespace, or `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        let (_, parent) = self.segments.split_last()?;
        Some(Self {
            segments: parent.to_vec(),
        })
    }

    /// Whether publishing to `self` reaches subscribers of `other`.
    ///
    /// True when `self` is `other` or one of its enclosing namespaces.
    pub fn covers(&self, other: &Topic) -> bool {
        other.segments.starts_with(&self.segments)
    }

    /// Render the topic with the given delimiter.
    pub fn join(&self, delimiter: char) -> String {
        let mut out = String::new();
        for (idx, segment) in self.segments.iter().enumerate() {
            if idx > 0 {
                out.push(delimiter);
            }
            out.push_str(segment);
        }
        out
    }
}

/// Joins segments with [`DEFAULT_DELIMITER`] whatever delimiter the topic was
/// parsed with. Use [`Topic::join`] or
/// [`TopicHub::topic_name`](crate::TopicHub::topic_name) for other delimiters.
impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join(DEFAULT_DELIMITER))
    }
}

impl From<&str> for Topic {
    fn from(name: &str) -> Self {
        Topic::parse(name, DEFAULT_DELIMITER)
    }
}

/// Conversion into a [`Topic`] using a hub's configured delimiter.
///
/// Strings are split on the delimiter; topics pass through untouched.
pub trait IntoTopic {
    fn into_topic(self, delimiter: char) -> Topic;
}

impl IntoTopic for Topic {
    fn into_topic(self, _delimiter: char) -> Topic {
        self
    }
}

impl IntoTopic for &Topic {
    fn into_topic(self, _delimiter: char) -> Topic {
        self.clone()
    }
}

impl IntoTopic for &str {
    fn into_topic(self, delimiter: char) -> Topic {
        Topic::parse(self, delimiter)
    }
}

impl IntoTopic for String {
    fn into_topic(self, delimiter: char) -> Topic {
        Topic::parse(&self, delimiter)
    }
}

impl IntoTopic for &String {
    fn into_topic(self, delimiter: char) -> Topic {
        Topic::parse(self, delimiter)
    }
}
