use moood::core::validation::{validate_entry, validate_event};
use moood::errors::WorkerError;
use serde_json::json;

fn validation_message(payload: &serde_json::Value) -> String {
    match validate_entry(payload) {
        Err(WorkerError::ValidationError(msg)) => msg,
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn test_valid_payload_passes() {
    let payload = json!({ "id": "1", "entry": "I love sunny days." });
    let request = validate_entry(&payload).unwrap();
    assert_eq!(request.id, "1");
    assert_eq!(request.entry, "I love sunny days.");
}

#[test]
fn test_extra_fields_are_tolerated() {
    let payload = json!({
        "id": "1",
        "entry": "Some text",
        "createdAt": "2024-01-01T00:00:00Z",
        "anything": [1, 2, 3]
    });
    assert!(validate_entry(&payload).is_ok());
}

#[test]
fn test_empty_entry_reports_minimum_length() {
    let msg = validation_message(&json!({ "id": "2", "entry": "" }));
    assert_eq!(msg, "'entry' is too short (minimum length 1)");
}

#[test]
fn test_missing_id_reports_required() {
    let msg = validation_message(&json!({ "entry": "The cat sat on the mat." }));
    assert_eq!(msg, "'id' is a required property");
}

#[test]
fn test_all_violations_are_reported_by_field_name() {
    let msg = validation_message(&json!({ "id": 42 }));
    assert_eq!(
        msg,
        "'entry' is a required property, 'id' is not of type 'string'"
    );

    let err = validate_entry(&json!({ "id": "", "entry": null })).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Validation of payload failed: 'entry' is not of type 'string', 'id' is too short (minimum length 1)"
    );
}

#[test]
fn test_empty_entry_and_missing_id_together() {
    let msg = validation_message(&json!({ "entry": "" }));
    assert_eq!(
        msg,
        "'entry' is too short (minimum length 1), 'id' is a required property"
    );
}

#[test]
fn test_non_object_payload_is_rejected() {
    for payload in [json!(null), json!("entry"), json!([{"id": "1", "entry": "x"}])] {
        let msg = validation_message(&payload);
        assert_eq!(msg, "payload is not of type 'object'");
    }
}

#[test]
fn test_whitespace_entry_satisfies_minimum_length() {
    let request = validate_entry(&json!({ "id": "1", "entry": " " })).unwrap();
    assert_eq!(request.entry, " ");
}

#[test]
fn test_event_requires_every_field() {
    let err = validate_event(&json!({})).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Validation of payload failed: 'createdAt' is a required property, \
         'entry' is a required property, 'id' is a required property, \
         'metadata' is a required property"
    );
}

#[test]
fn test_valid_event_is_extracted() {
    let event = json!({
        "id": "67e55044-10b1-426f-9247-bb680e5fe0c8",
        "entry": "The cat sat on the mat.",
        "createdAt": "2024-05-01T10:00:00Z",
        "metadata": { "asent": { "negative": 0.0, "positive": 0.5, "neutral": 0.5 } }
    });

    let parsed = validate_event(&event).unwrap();
    assert_eq!(parsed.created_at, "2024-05-01T10:00:00Z");
    assert!(parsed.metadata.contains_key("asent"));
}

#[test]
fn test_event_with_bad_id_and_empty_metadata() {
    let event = json!({
        "id": "1",
        "entry": "text",
        "createdAt": "2024-05-01T10:00:00Z",
        "metadata": {}
    });

    let err = validate_event(&event).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("'id' is not a valid UUID"), "{msg}");
    assert!(msg.contains("'metadata' should have at least 1 property"), "{msg}");
}

#[test]
fn test_event_with_wrongly_typed_fields() {
    let event = json!({
        "id": 7,
        "entry": "text",
        "createdAt": null,
        "metadata": ["asent"]
    });

    let err = validate_event(&event).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Validation of payload failed: 'createdAt' is not of type 'string', \
         'id' is not of type 'string', 'metadata' is not of type 'object'"
    );
}
