// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Student record domain model and its JSON wire shape (UI-agnostic).
//!
//! The backend labels fields `nama`, `kelas` and `umur`; they map 1:1 to
//! `name`, `class` and `age` here.

use std::fmt;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// Backend-assigned record identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RecordId(pub i64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        lenient_i64(deserializer).map(RecordId)
    }
}

/// A single student entry as stored by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    #[serde(rename = "nama")]
    pub name: String,
    #[serde(rename = "kelas")]
    pub class: String,
    #[serde(rename = "umur", deserialize_with = "lenient_age")]
    pub age: u32,
}

/// Editable fields of a record without its identifier; the create payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RecordFields {
    #[serde(rename = "nama")]
    pub name: String,
    #[serde(rename = "kelas")]
    pub class: String,
    #[serde(rename = "umur")]
    pub age: u32,
}

impl Record {
    /// Combine an identifier with edited fields into a full record.
    pub fn with_fields(id: RecordId, fields: RecordFields) -> Self {
        Self {
            id,
            name: fields.name,
            class: fields.class,
            age: fields.age,
        }
    }
}

/// Body of a delete request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DeleteRequest {
    pub id: RecordId,
}

// PHP/MySQL backends frequently hand integers back as strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(i64),
    Text(String),
}

fn lenient_i64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(n) => Ok(n),
        NumberOrText::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("expected an integer, got {text:?}"))),
    }
}

fn lenient_age<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let raw = lenient_i64(deserializer)?;
    u32::try_from(raw).map_err(|_| de::Error::custom(format!("age out of range: {raw}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_backend_labels() {
        let record: Record =
            serde_json::from_value(json!({"id": 1, "nama": "Ana", "kelas": "7A", "umur": 12}))
                .unwrap();

        assert_eq!(
            record,
            Record {
                id: RecordId(1),
                name: "Ana".into(),
                class: "7A".into(),
                age: 12,
            }
        );
    }

    #[test]
    fn accepts_numeric_strings_from_php() {
        let record: Record = serde_json::from_value(
            json!({"id": "7", "nama": "Budi", "kelas": "8B", "umur": " 13 "}),
        )
        .unwrap();

        assert_eq!(record.id, RecordId(7));
        assert_eq!(record.age, 13);
    }

    #[test]
    fn rejects_negative_age_and_garbage_ids() {
        let negative = serde_json::from_value::<Record>(
            json!({"id": 1, "nama": "A", "kelas": "B", "umur": -1}),
        );
        assert!(negative.is_err());

        let garbage = serde_json::from_value::<Record>(
            json!({"id": "abc", "nama": "A", "kelas": "B", "umur": 1}),
        );
        assert!(garbage.is_err());
    }

    #[test]
    fn payloads_use_wire_labels() {
        let fields = RecordFields {
            name: "Budi".into(),
            class: "8B".into(),
            age: 13,
        };
        assert_eq!(
            serde_json::to_value(&fields).unwrap(),
            json!({"nama": "Budi", "kelas": "8B", "umur": 13})
        );

        let record = Record::with_fields(RecordId(5), fields);
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({"id": 5, "nama": "Budi", "kelas": "8B", "umur": 13})
        );

        assert_eq!(
            serde_json::to_value(DeleteRequest { id: RecordId(3) }).unwrap(),
            json!({"id": 3})
        );
    }
}
