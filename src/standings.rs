//! Team records and decoding of the standings array.

use crate::error::ParseError;
use serde::Deserialize;
use serde_json::Value;

/// One team's season statistics, as one element of the root array
///
/// Keys other than the ten below are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TeamRecord {
    /// Team name
    #[serde(rename = "TeamName")]
    pub name: String,

    /// Division name
    #[serde(rename = "DivName")]
    pub div_name: String,

    /// Games won
    #[serde(rename = "Wins")]
    pub wins: i32,

    /// Games lost
    #[serde(rename = "Losses")]
    pub losses: i32,

    /// Games tied
    #[serde(rename = "Ties")]
    pub ties: i32,

    /// Games played
    #[serde(rename = "GamesPlayed")]
    pub games_played: i32,

    /// Standings points
    #[serde(rename = "Points")]
    pub points: i32,

    /// Goals scored
    #[serde(rename = "GF")]
    pub goals_for: i32,

    /// Goals conceded
    #[serde(rename = "GA")]
    pub goals_against: i32,

    /// Goal difference (signed)
    #[serde(rename = "PlusMinus")]
    pub goal_difference: i32,
}

/// Decode a response body into team records, preserving array order
///
/// Every element is validated before anything is returned, so a bad element
/// anywhere yields an error and no records.
///
/// # Errors
///
/// - [`ParseError::InvalidJson`] if the body is not JSON
/// - [`ParseError::NotAnArray`] if the root is any other JSON value
/// - [`ParseError::InvalidRecord`] with the element's index if it is not an
///   object, misses a key, or holds a value of the wrong type or range
pub fn parse_standings(body: &[u8]) -> Result<Vec<TeamRecord>, ParseError> {
    let root: Value = serde_json::from_slice(body).map_err(ParseError::InvalidJson)?;

    let items = match root {
        Value::Array(items) => items,
        other => {
            return Err(ParseError::NotAnArray {
                found: json_kind(&other),
            });
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item)
                .map_err(|source| ParseError::InvalidRecord { index, source })
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
