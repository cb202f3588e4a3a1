//! Payload validation.
//!
//! Payloads are first read into field records that accept any JSON value, so a
//! wrongly typed field is reported rather than aborting deserialization. The
//! `validator` derive then checks every field, and all violations come back
//! together, ordered by field name. Fields a record does not name are ignored.

use std::borrow::Cow;

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::core::models::{EntryEvent, EntryPayload};
use crate::errors::WorkerError;

/// Fields of a worker payload, checked before they are typed.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct EntryFields {
    #[serde(default, deserialize_with = "present")]
    #[validate(required(message = "is a required property"), custom(function = "non_empty_string"))]
    pub id: Option<Value>,

    #[serde(default, deserialize_with = "present")]
    #[validate(required(message = "is a required property"), custom(function = "non_empty_string"))]
    pub entry: Option<Value>,
}

/// Fields of a persister event, checked before they are typed.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct EventFields {
    #[serde(default, deserialize_with = "present")]
    #[validate(required(message = "is a required property"), custom(function = "hyphenated_uuid"))]
    pub id: Option<Value>,

    #[serde(default, deserialize_with = "present")]
    #[validate(required(message = "is a required property"), custom(function = "non_empty_string"))]
    pub entry: Option<Value>,

    #[serde(rename = "createdAt", default, deserialize_with = "present")]
    #[validate(required(message = "is a required property"), custom(function = "non_empty_string"))]
    pub created_at: Option<Value>,

    #[serde(default, deserialize_with = "present")]
    #[validate(required(message = "is a required property"), custom(function = "non_empty_object"))]
    pub metadata: Option<Value>,
}

/// Keeps an explicit `null` as `Some(Value::Null)`; only an absent key is `None`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

fn violation(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

fn non_empty_string(value: &Value) -> Result<(), ValidationError> {
    match value.as_str() {
        None => Err(violation("type", "is not of type 'string'")),
        Some("") => Err(violation("length", "is too short (minimum length 1)")),
        Some(_) => Ok(()),
    }
}

/// Only the 36-character hyphenated form counts.
fn hyphenated_uuid(value: &Value) -> Result<(), ValidationError> {
    let text = value
        .as_str()
        .ok_or_else(|| violation("type", "is not of type 'string'"))?;
    if text.len() == 36 && Uuid::parse_str(text).is_ok() {
        Ok(())
    } else {
        Err(violation("uuid", "is not a valid UUID"))
    }
}

fn non_empty_object(value: &Value) -> Result<(), ValidationError> {
    match value.as_object() {
        None => Err(violation("type", "is not of type 'object'")),
        Some(object) if object.is_empty() => {
            Err(violation("length", "should have at least 1 property"))
        }
        Some(_) => Ok(()),
    }
}

fn check<'de, T>(value: &'de Value) -> Result<(), WorkerError>
where
    T: Deserialize<'de> + Validate,
{
    if !value.is_object() {
        return Err(WorkerError::from_violations(&[
            "payload is not of type 'object'".to_string()
        ]));
    }
    T::deserialize(value)?.validate()?;
    Ok(())
}

/// Validates a worker payload and extracts its typed fields.
///
/// # Errors
///
/// Returns [`WorkerError::ValidationError`] listing every violated constraint.
pub fn validate_entry(value: &Value) -> Result<EntryPayload, WorkerError> {
    check::<EntryFields>(value)?;
    Ok(EntryPayload::deserialize(value)?)
}

/// Validates a persister event and extracts its typed fields.
///
/// # Errors
///
/// Returns [`WorkerError::ValidationError`] listing every violated constraint.
pub fn validate_event(value: &Value) -> Result<EntryEvent, WorkerError> {
    check::<EventFields>(value)?;
    Ok(EntryEvent::deserialize(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const REQUIRED: &str = "is a required property";

    #[test]
    fn explicit_null_is_present() {
        let fields = EntryFields::deserialize(&json!({ "entry": null })).unwrap();
        assert_eq!(fields.entry, Some(Value::Null));
        assert_eq!(fields.id, None);
    }

    #[test]
    fn required_message_matches_derive() {
        let errors = EntryFields::default().validate().unwrap_err();
        let field_errors = errors.field_errors();
        assert_eq!(field_errors.len(), 2);
        assert!(
            field_errors
                .values()
                .flat_map(|errors| errors.iter())
                .all(|error| error.message.as_deref() == Some(REQUIRED))
        );
    }

    #[test]
    fn one_character_is_long_enough() {
        assert!(non_empty_string(&json!("é")).is_ok());
        assert_eq!(non_empty_string(&json!("")).unwrap_err().code, "length");
        assert_eq!(non_empty_string(&json!(1)).unwrap_err().code, "type");
    }

    #[test]
    fn uuid_must_be_hyphenated() {
        assert!(hyphenated_uuid(&json!("67e55044-10b1-426f-9247-bb680e5fe0c8")).is_ok());
        assert!(hyphenated_uuid(&json!("67e5504410b1426f9247bb680e5fe0c8")).is_err());
        assert!(hyphenated_uuid(&json!("not-a-uuid")).is_err());
    }

    #[test]
    fn object_needs_a_property() {
        assert!(non_empty_object(&json!({})).is_err());
        assert!(non_empty_object(&json!({ "asent": {} })).is_ok());
        assert_eq!(non_empty_object(&json!("x")).unwrap_err().code, "type");
    }
}
