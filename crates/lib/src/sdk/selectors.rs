use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Restricts which destinations a pipeline's output may be scheduled to.
///
/// Serialized as `{directory?, matchLabels}` in `destination_selectors.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationSelector {
    /// Output sub-directory the selector applies to; the whole output when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub match_labels: BTreeMap<String, String>,
}

impl DestinationSelector {
    /// Selector matching destinations labelled with every given pair.
    pub fn matching<K, V>(labels: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            directory: None,
            match_labels: labels
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Scopes the selector to an output sub-directory.
    pub fn in_directory(mut self, directory: impl Into<String>) -> Self {
        self.directory = Some(directory.into());
        self
    }
}
