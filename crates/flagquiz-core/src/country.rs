//! Country domain model.

use serde::{Deserialize, Serialize};

/// A quiz target country as produced by the oracle (or its fallback table).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    /// Canonical English name, e.g. "Japan".
    pub english_name: String,
    /// Localized (Japanese) display name, e.g. "日本".
    pub localized_name: String,
    /// Flag image URI, treated as opaque by the game logic.
    pub flag_url: String,
}

impl Country {
    /// Creates a country record from its three components.
    pub fn new(
        english_name: impl Into<String>,
        localized_name: impl Into<String>,
        flag_url: impl Into<String>,
    ) -> Self {
        Self {
            english_name: english_name.into(),
            localized_name: localized_name.into(),
            flag_url: flag_url.into(),
        }
    }
}
