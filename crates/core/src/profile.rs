//! The user profile record and its store.
//!
//! This module defines the single domain entity of the application, the
//! [`UserProfile`], and the [`ProfileStore`] that holds exactly one profile
//! value for the lifetime of a session.
//!
//! ## Update model
//!
//! Edits never mutate a stored profile in place. Every update builds a new
//! profile value with exactly one field changed (the `with_*` methods) and
//! then replaces the stored value wholesale through [`ProfileStore::set`].
//! This keeps the store trivially consistent: there is never a partially
//! applied edit to observe.
//!
//! ## Shape tolerance
//!
//! Imported profiles are deliberately not schema-checked. Missing fields
//! fall back to their empty defaults, unknown fields are ignored, and scalar
//! values of the wrong JSON type (numbers, booleans) are coerced to their
//! text form. Downstream consumers must tolerate partially-populated
//! profiles.

use serde::Deserialize;
use serde_json::Value;

fn text_from_value(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        // Nested structures are kept as their raw JSON text.
        other => other.to_string(),
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(text_from_value(value))
}

fn lenient_lines<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items.into_iter().map(text_from_value).collect(),
        Value::Null => Vec::new(),
        other => vec![text_from_value(other)],
    })
}

/// The user-editable health profile record.
///
/// All fields are free text with no validation; `age` is numeric-looking
/// but stored as text. `symptoms` is an append-only sequence of lines
/// formatted as `"<category>: <detail>"` in submission order. Field order
/// here is also the serialised field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UserProfile {
    #[serde(deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(deserialize_with = "lenient_text")]
    pub age: String,
    #[serde(deserialize_with = "lenient_text")]
    pub notes: String,
    #[serde(rename = "medicalInfo", deserialize_with = "lenient_text")]
    pub medical_info: String,
    #[serde(deserialize_with = "lenient_lines")]
    pub symptoms: Vec<String>,
}

impl UserProfile {
    /// Creates an empty profile, as at the start of a session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of this profile with `name` replaced.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Returns a copy of this profile with `age` replaced.
    #[must_use]
    pub fn with_age(mut self, age: impl Into<String>) -> Self {
        self.age = age.into();
        self
    }

    /// Returns a copy of this profile with `notes` replaced.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Returns a copy of this profile with `medicalInfo` replaced.
    #[must_use]
    pub fn with_medical_info(mut self, medical_info: impl Into<String>) -> Self {
        self.medical_info = medical_info.into();
        self
    }

    /// Returns a copy of this profile with one formatted symptom line
    /// appended. There is no edit or remove operation; the sequence only
    /// grows, and insertion order is display order.
    #[must_use]
    pub fn with_symptom(mut self, line: impl Into<String>) -> Self {
        self.symptoms.push(line.into());
        self
    }
}

/// Holds exactly one [`UserProfile`] value at a time.
///
/// The store has a single logical writer (the session loop), so no locking
/// is needed. [`set`](ProfileStore::set) always replaces the stored value
/// wholesale; field-level merging is the caller's responsibility via the
/// `with_*` methods on [`UserProfile`].
#[derive(Debug, Default)]
pub struct ProfileStore {
    current: UserProfile,
}

impl ProfileStore {
    /// Creates a store holding an empty profile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current profile value.
    pub fn get(&self) -> &UserProfile {
        &self.current
    }

    /// Replaces the stored profile wholesale.
    pub fn set(&mut self, profile: UserProfile) {
        self.current = profile;
    }
}
