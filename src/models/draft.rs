// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Client-side form draft shadowing at most one record's editable fields.

use thiserror::Error;

use crate::models::record::{Record, RecordFields, RecordId};

/// Whether submitting the draft creates a new record or updates an existing one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DraftMode {
    #[default]
    Creating,
    Editing(RecordId),
}

/// Transient, editable copy of a record's fields as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub class: String,
    /// Raw age input; parsed on submit.
    pub age: String,
    pub mode: DraftMode,
}

/// Backend call a valid draft turns into.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    Create(RecordFields),
    Update(Record),
}

/// Reasons a draft cannot be submitted yet.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("name is required")]
    MissingName,
    #[error("class is required")]
    MissingClass,
    #[error("age is required")]
    MissingAge,
    #[error("age must be a whole number of zero or more, got {0:?}")]
    InvalidAge(String),
}

impl Draft {
    /// Start editing `record`: copy its fields and remember its id.
    pub fn from_record(record: &Record) -> Self {
        Self {
            name: record.name.clone(),
            class: record.class.clone(),
            age: record.age.to_string(),
            mode: DraftMode::Editing(record.id),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, DraftMode::Editing(_))
    }

    /// Reset to an empty draft in creating mode.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Check required fields and parse the age. Text fields are sent as typed.
    pub fn fields(&self) -> Result<RecordFields, DraftError> {
        if self.name.is_empty() {
            return Err(DraftError::MissingName);
        }
        if self.class.is_empty() {
            return Err(DraftError::MissingClass);
        }
        let age_text = self.age.trim();
        if age_text.is_empty() {
            return Err(DraftError::MissingAge);
        }
        let age = age_text
            .parse::<u32>()
            .map_err(|_| DraftError::InvalidAge(age_text.to_string()))?;

        Ok(RecordFields {
            name: self.name.clone(),
            class: self.class.clone(),
            age,
        })
    }

    /// Build the create or update call for the current mode.
    pub fn submission(&self) -> Result<Submission, DraftError> {
        let fields = self.fields()?;
        Ok(match self.mode {
            DraftMode::Creating => Submission::Create(fields),
            DraftMode::Editing(id) => Submission::Update(Record::with_fields(id, fields)),
        })
    }
}
