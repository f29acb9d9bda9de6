use serde::Deserialize;

use crate::topic::DEFAULT_DELIMITER;

/// Options for a [`TopicHub`](crate::TopicHub).
///
/// Deserializable so it can sit inside a host application's configuration;
/// missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HubConfig {
    /// Separator between namespace segments in string topic names.
    pub delimiter: char,
    /// Remove topic nodes left without callbacks or sub-topics after an
    /// unsubscribe. Off by default: empty nodes stay in the tree.
    pub prune_empty: bool,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            prune_empty: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = HubConfig::default();
        assert_eq!(config.delimiter, '.');
        assert!(!config.prune_empty);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: HubConfig = serde_json::from_str(r#"{"prune_empty": true}"#).unwrap();
        assert_eq!(
            config,
            HubConfig {
                delimiter: '.',
                prune_empty: true,
            }
        );

        let config: HubConfig = serde_json::from_str(r#"{"delimiter": "/"}"#).unwrap();
        assert_eq!(config.delimiter, '/');
    }
}
