//! Raw session model of the Jellyfin `/Sessions` endpoint
//!
//! Only the outer session shape is typed. The nested `PlayState` and
//! `NowPlayingItem` objects are kept as JSON maps and read one field at a
//! time, so a missing or oddly-typed field fails only that field.

use jellyfin_nowplaying_core::DerivationError;
use serde::Deserialize;
use serde_json::{Map, Value};

/// One entry of the `/Sessions` response
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawSession {
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub play_state: Option<RawObject>,
    #[serde(default)]
    pub now_playing_item: Option<RawObject>,
}

impl RawSession {
    pub fn item(&self) -> Result<&RawObject, DerivationError> {
        self.now_playing_item
            .as_ref()
            .ok_or(DerivationError::MissingField("NowPlayingItem"))
    }

    pub fn play_state(&self) -> Result<&RawObject, DerivationError> {
        self.play_state
            .as_ref()
            .ok_or(DerivationError::MissingField("PlayState"))
    }
}

/// Decode a `/Sessions` response body
pub fn parse_sessions(body: &[u8]) -> Result<Vec<RawSession>, serde_json::Error> {
    serde_json::from_slice(body)
}

/// A loosely typed JSON object
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct RawObject(Map<String, Value>);

impl RawObject {
    /// Present, non-null value of `key`
    fn value(&self, key: &'static str) -> Result<&Value, DerivationError> {
        match self.0.get(key) {
            None | Some(Value::Null) => Err(DerivationError::MissingField(key)),
            Some(value) => Ok(value),
        }
    }

    pub fn text(&self, key: &'static str) -> Result<&str, DerivationError> {
        self.value(key)?.as_str().ok_or(DerivationError::WrongType {
            field: key,
            expected: "a string",
        })
    }

    /// String value, or a number rendered as text
    pub fn text_or_number(&self, key: &'static str) -> Result<String, DerivationError> {
        match self.value(key)? {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) => Ok(n.to_string()),
            _ => Err(DerivationError::WrongType {
                field: key,
                expected: "a string or number",
            }),
        }
    }

    pub fn integer(&self, key: &'static str) -> Result<i64, DerivationError> {
        self.value(key)?.as_i64().ok_or(DerivationError::WrongType {
            field: key,
            expected: "an integer",
        })
    }

    /// Like [`RawObject::integer`] but absent or null reads as 0
    pub fn integer_or_zero(&self, key: &'static str) -> Result<i64, DerivationError> {
        match self.integer(key) {
            Err(DerivationError::MissingField(_)) => Ok(0),
            other => other,
        }
    }

    /// Boolean value; absent or null reads as false
    pub fn flag_or_false(&self, key: &'static str) -> Result<bool, DerivationError> {
        match self.value(key) {
            Err(DerivationError::MissingField(_)) => Ok(false),
            Err(err) => Err(err),
            Ok(value) => value.as_bool().ok_or(DerivationError::WrongType {
                field: key,
                expected: "a boolean",
            }),
        }
    }

    /// First element of a list of strings
    pub fn first_text(&self, key: &'static str) -> Result<&str, DerivationError> {
        let list = self.value(key)?.as_array().ok_or(DerivationError::WrongType {
            field: key,
            expected: "a list",
        })?;
        let first = list.first().ok_or(DerivationError::EmptyList(key))?;
        first.as_str().ok_or(DerivationError::WrongType {
            field: key,
            expected: "a list of strings",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> RawObject {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_parse_sessions_tolerates_missing_objects() {
        let body = br#"[
            {"UserName": "alice", "PlayState": {"PositionTicks": 10}},
            {"UserName": null, "NowPlayingItem": null},
            {}
        ]"#;
        let sessions = parse_sessions(body).unwrap();
        assert_eq!(sessions.len(), 3);
        assert_eq!(sessions[0].user_name.as_deref(), Some("alice"));
        assert!(sessions[0].item().is_err());
        assert!(sessions[1].play_state().is_err());
        assert!(sessions[2].user_name.is_none());
    }

    #[test]
    fn test_parse_sessions_rejects_non_list() {
        assert!(parse_sessions(br#"{"error": "unauthorized"}"#).is_err());
        assert!(parse_sessions(b"<html>").is_err());
    }

    #[test]
    fn test_field_readers() {
        let item = object(json!({
            "Name": "So What",
            "ProductionYear": 1959,
            "Artists": ["Miles Davis", "John Coltrane"],
            "RunTimeTicks": 5620000000i64,
            "Empty": [],
            "Null": null,
        }));

        assert_eq!(item.text("Name"), Ok("So What"));
        assert_eq!(item.text_or_number("ProductionYear"), Ok("1959".to_string()));
        assert_eq!(item.first_text("Artists"), Ok("Miles Davis"));
        assert_eq!(item.integer("RunTimeTicks"), Ok(5_620_000_000));
        assert_eq!(item.first_text("Empty"), Err(DerivationError::EmptyList("Empty")));
        assert_eq!(item.text("Null"), Err(DerivationError::MissingField("Null")));
        assert_eq!(item.integer_or_zero("Missing"), Ok(0));
        assert_eq!(item.flag_or_false("Missing"), Ok(false));
        assert!(matches!(
            item.integer("Name"),
            Err(DerivationError::WrongType { field: "Name", .. })
        ));
    }
}
