//! Typed resume data model.
//!
//! Plain text fields default to `""` and sequences to empty when absent (or
//! `null`) in input. `Resume::summary` and the `Contact` fields are genuinely
//! optional: absent and empty are distinct and both survive persistence.

mod entries;
mod resume;

use serde::{Deserialize, Deserializer};

pub use entries::{Education, Experience, Project, SkillGroup};
pub use resume::{Contact, Entry, Resume, Section};

/// Reads `null` as `T::default()`.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Short name of a JSON value's kind, for error messages.
pub(crate) fn value_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "text",
        serde_json::Value::Array(_) => "a sequence",
        serde_json::Value::Object(_) => "a mapping",
    }
}
