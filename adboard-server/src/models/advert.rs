//! Advertisement write payloads
//!
//! Two schema variants over the same three fields: a creation draft
//! requires all of them, an update patch keeps only the keys actually
//! present in the input. Both are built from raw JSON so that payload
//! presence (not value-nullness) decides what a patch changes.

use serde_json::{Map, Value as JsonValue};

use super::ValidationError;

/// Maximum length for the header field
pub const MAX_HEADER_LEN: usize = 100;

/// Maximum length for the description field
pub const MAX_DESCRIPTION_LEN: usize = 1000;

/// Maximum length for the owner field
pub const MAX_OWNER_LEN: usize = 100;

/// Per-field rules; bounds match the column definitions.
#[derive(Debug, Clone, Copy)]
struct FieldRules {
    name: &'static str,
    max_len: usize,
    reject_empty: bool,
}

const HEADER: FieldRules = FieldRules {
    name: "header",
    max_len: MAX_HEADER_LEN,
    reject_empty: true,
};

const DESCRIPTION: FieldRules = FieldRules {
    name: "description",
    max_len: MAX_DESCRIPTION_LEN,
    reject_empty: false,
};

const OWNER: FieldRules = FieldRules {
    name: "owner",
    max_len: MAX_OWNER_LEN,
    reject_empty: false,
};

/// Fully-populated creation payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvertDraft {
    pub header: String,
    pub description: String,
    pub owner: String,
}

impl AdvertDraft {
    /// Validate a creation payload.
    ///
    /// All three fields must be present and string-typed; unknown keys
    /// are ignored. Returns the first offending field on failure.
    pub fn from_json(body: &JsonValue) -> Result<Self, ValidationError> {
        let map = as_object(body)?;

        Ok(Self {
            header: required(map, HEADER)?,
            description: required(map, DESCRIPTION)?,
            owner: required(map, OWNER)?,
        })
    }
}

/// Partial update payload.
///
/// `None` means the key was absent from the input, never "set to null";
/// explicit nulls are rejected as wrong-typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdvertPatch {
    pub header: Option<String>,
    pub description: Option<String>,
    pub owner: Option<String>,
}

impl AdvertPatch {
    /// Validate an update payload; any subset of the fields is fine,
    /// including none of them.
    pub fn from_json(body: &JsonValue) -> Result<Self, ValidationError> {
        let map = as_object(body)?;

        Ok(Self {
            header: optional(map, HEADER)?,
            description: optional(map, DESCRIPTION)?,
            owner: optional(map, OWNER)?,
        })
    }

    /// True if no field was supplied.
    pub fn is_empty(&self) -> bool {
        self.header.is_none() && self.description.is_none() && self.owner.is_none()
    }
}

fn as_object(body: &JsonValue) -> Result<&Map<String, JsonValue>, ValidationError> {
    body.as_object().ok_or(ValidationError::WrongType {
        field: "body",
        expected: "object",
    })
}

fn required(map: &Map<String, JsonValue>, rules: FieldRules) -> Result<String, ValidationError> {
    match map.get(rules.name) {
        None => Err(ValidationError::Missing { field: rules.name }),
        Some(value) => checked(value, rules),
    }
}

fn optional(
    map: &Map<String, JsonValue>,
    rules: FieldRules,
) -> Result<Option<String>, ValidationError> {
    map.get(rules.name).map(|value| checked(value, rules)).transpose()
}

fn checked(value: &JsonValue, rules: FieldRules) -> Result<String, ValidationError> {
    let s = value.as_str().ok_or(ValidationError::WrongType {
        field: rules.name,
        expected: "string",
    })?;

    if rules.reject_empty && s.is_empty() {
        return Err(ValidationError::Empty { field: rules.name });
    }

    if s.chars().count() > rules.max_len {
        return Err(ValidationError::TooLong {
            field: rules.name,
            max: rules.max_len,
        });
    }

    Ok(s.to_owned())
}
