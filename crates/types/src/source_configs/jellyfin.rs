//! Jellyfin measure configuration types.

use serde::{Deserialize, Serialize};

pub const DEFAULT_SERVER: &str = "http://localhost:8096";

fn default_server() -> String {
    DEFAULT_SERVER.to_string()
}

/// Options of a single now-playing measure
///
/// Field names serialize as the host option names (`PlayerType`,
/// `JellyfinToken`, ...). An empty `PlayerName` makes the measure a primary
/// that polls the server; a non-empty one makes it a secondary reading
/// from the primary of that name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MeasureConfig {
    #[serde(default)]
    pub player_type: String,
    #[serde(default)]
    pub player_name: String,
    #[serde(default)]
    pub jellyfin_token: String,
    #[serde(default)]
    pub jellyfin_username: String,
    #[serde(default = "default_server")]
    pub jellyfin_server: String,
    #[serde(default)]
    pub disable_leading_zero: i32,
}

impl MeasureConfig {
    pub fn is_secondary(&self) -> bool {
        !self.player_name.is_empty()
    }

    pub fn suppress_leading_zero(&self) -> bool {
        self.disable_leading_zero == 1
    }

    /// Session owner filter, `None` when every user matches
    pub fn username_filter(&self) -> Option<&str> {
        Some(self.jellyfin_username.as_str()).filter(|name| !name.is_empty())
    }
}

impl Default for MeasureConfig {
    fn default() -> Self {
        Self {
            player_type: String::new(),
            player_name: String::new(),
            jellyfin_token: String::new(),
            jellyfin_username: String::new(),
            jellyfin_server: default_server(),
            disable_leading_zero: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_option_names() {
        let config: MeasureConfig = serde_json::from_str(
            r#"{"PlayerType":"Title","JellyfinToken":"abc","DisableLeadingZero":1}"#,
        )
        .unwrap();
        assert_eq!(config.player_type, "Title");
        assert_eq!(config.jellyfin_token, "abc");
        assert_eq!(config.jellyfin_server, DEFAULT_SERVER);
        assert!(config.suppress_leading_zero());
        assert!(!config.is_secondary());
        assert_eq!(config.username_filter(), None);
    }

    #[test]
    fn test_secondary_and_filter() {
        let config = MeasureConfig {
            player_name: "MeasurePlayer".to_string(),
            jellyfin_username: "alice".to_string(),
            disable_leading_zero: 2,
            ..MeasureConfig::default()
        };
        assert!(config.is_secondary());
        assert_eq!(config.username_filter(), Some("alice"));
        assert!(!config.suppress_leading_zero());
    }
}
