//! Domain record for a collected joke and its sheet-row shape.
//!
//! # Design
//! The upstream payload is loosely shaped: keys may be missing and extra
//! keys are common. Decoding goes through an explicit partial-decode step
//! (`JokeRecord::from_value`) that substitutes `"N/A"` for absent fields
//! instead of failing; only a structurally unusable payload (not a JSON
//! object) yields no record. The `category` field is always the category
//! the joke was requested under; the payload's own category labels are
//! ignored on purpose.

use serde::Deserialize;
use serde_json::Value;

/// Placeholder written in place of any field the payload did not carry.
pub const PLACEHOLDER: &str = "N/A";

/// Sheet column order. `to_row` emits cells in exactly this order.
pub const COLUMNS: [&str; 4] = ["id", "url", "value", "category"];

/// One collected joke, normalized for the sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JokeRecord {
    pub id: String,
    pub url: String,
    pub value: String,
    pub category: String,
}

/// The subset of the payload we keep, with placeholders for absent keys.
/// Extra keys (`categories`, `icon_url`, timestamps) are ignored.
#[derive(Deserialize)]
struct RawJoke {
    #[serde(default = "placeholder")]
    id: String,
    #[serde(default = "placeholder")]
    url: String,
    #[serde(default = "placeholder")]
    value: String,
}

fn placeholder() -> String {
    PLACEHOLDER.to_string()
}

impl JokeRecord {
    /// Decode a joke payload fetched under `category`.
    ///
    /// Returns `None` when the payload is not a JSON object (including
    /// `null`). Missing `id`/`url`/`value` keys become `"N/A"`; the
    /// `category` field is forced to the requested category string.
    pub fn from_value(category: &str, payload: &Value) -> Option<JokeRecord> {
        let raw: RawJoke = serde_json::from_value(payload.clone()).ok()?;
        Some(JokeRecord {
            id: raw.id,
            url: raw.url,
            value: raw.value,
            category: category.to_string(),
        })
    }

    /// Cells for one sheet row, in `COLUMNS` order.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.url.clone(),
            self.value.clone(),
            self.category.clone(),
        ]
    }
}

/// Convert a batch of records into sheet rows, preserving order.
pub fn to_rows(jokes: &[JokeRecord]) -> Vec<Vec<String>> {
    jokes.iter().map(JokeRecord::to_row).collect()
}
