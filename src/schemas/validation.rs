use super::schema::SchemaHandle;
use crate::{
    error::{PlannerError, Result},
    types::itinerary::TripRequest,
};
use jsonschema::{Draft, JSONSchema};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::OnceLock;

const MAX_SCHEMA_ERRORS: usize = 3;

/// Schema describing a [`TripRequest`] payload
pub fn trip_request_schema() -> &'static SchemaHandle {
    static SCHEMA: OnceLock<SchemaHandle> = OnceLock::new();
    SCHEMA.get_or_init(|| SchemaHandle::for_type::<TripRequest>("trip_request"))
}

/// Compiled validator for [`trip_request_schema`], built once per process
fn trip_request_validator() -> Result<&'static JSONSchema> {
    static VALIDATOR: OnceLock<std::result::Result<JSONSchema, String>> = OnceLock::new();
    VALIDATOR
        .get_or_init(|| compile(trip_request_schema()).map_err(|err| err.to_string()))
        .as_ref()
        .map_err(|msg| PlannerError::Validation(msg.clone()))
}

fn compile(schema: &SchemaHandle) -> Result<JSONSchema> {
    JSONSchema::options()
        .with_draft(Draft::Draft7)
        .compile(schema.schema_json())
        .map_err(|err| {
            PlannerError::Validation(format!(
                "Failed to prepare `{}` schema for validation: {}",
                schema.schema_name(),
                err
            ))
        })
}

/// Validate a payload against a schema, compiling it first
pub fn validate_payload(schema: &SchemaHandle, payload: &Value) -> Result<()> {
    let validator = compile(schema)?;
    check(&validator, schema.schema_name(), payload)
}

/// Validate a payload against the cached trip request schema
pub fn validate_trip_request(payload: &Value) -> Result<()> {
    check(
        trip_request_validator()?,
        trip_request_schema().schema_name(),
        payload,
    )
}

fn check(validator: &JSONSchema, schema_name: &str, payload: &Value) -> Result<()> {
    if let Err(errors) = validator.validate(payload) {
        let mut details = Vec::new();
        let mut truncated = false;

        for (idx, error) in errors.enumerate() {
            if idx < MAX_SCHEMA_ERRORS {
                let mut path = error.instance_path.to_string();
                if path.is_empty() {
                    path = "<root>".to_string();
                }
                details.push(format!("{}: {}", path, error));
            } else {
                truncated = true;
                break;
            }
        }

        let mut detail_str = if details.is_empty() {
            "payload failed schema validation".to_string()
        } else {
            details.join("; ")
        };

        if truncated {
            detail_str.push_str("; additional errors truncated");
        }

        return Err(PlannerError::Validation(format!(
            "Payload does not match `{}` schema: {}",
            schema_name,
            detail_str
        )));
    }

    Ok(())
}

/// Deserialize with the failing path reported in the error
pub fn deserialize_payload<T: DeserializeOwned>(schema: &SchemaHandle, payload: Value) -> Result<T> {
    serde_path_to_error::deserialize(payload).map_err(|err| {
        let path = err.path().to_string();
        let location = if path.is_empty() || path == "." {
            "<root>".to_string()
        } else {
            path
        };
        PlannerError::Validation(format!(
            "failed to deserialize `{}` at {}: {}",
            schema.schema_name(),
            location,
            err.inner()
        ))
    })
}

/// Parse a trip request from JSON text.
///
/// Structural problems are errors; out-of-range `days` are not, since the
/// selector clamps them.
pub fn parse_trip_request(raw: &str) -> Result<TripRequest> {
    let payload: Value = serde_json::from_str(raw)?;
    validate_trip_request(&payload)?;
    deserialize_payload(trip_request_schema(), payload)
}

impl TripRequest {
    pub fn from_json(raw: &str) -> Result<Self> {
        parse_trip_request(raw)
    }

    pub fn from_value(payload: Value) -> Result<Self> {
        validate_trip_request(&payload)?;
        deserialize_payload(trip_request_schema(), payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::itinerary::{Budget, Interest};
    use serde_json::json;

    #[test]
    fn test_schema_lists_request_fields() {
        let schema = trip_request_schema().schema_json();
        let properties = schema["properties"].as_object().unwrap();
        assert!(properties.contains_key("days"));
        assert!(properties.contains_key("interest"));
        assert!(properties.contains_key("budget"));
        assert_eq!(schema["properties"]["days"]["type"], "integer");
    }

    #[test]
    fn test_parse_valid_request() {
        let request =
            parse_trip_request(r#"{"days": 2, "interest": "Culture", "budget": "Low"}"#).unwrap();
        assert_eq!(request, TripRequest::new(2, Interest::Culture, Budget::Low));
    }

    #[test]
    fn test_out_of_range_days_are_accepted() {
        let request = TripRequest::from_value(json!({
            "days": -4,
            "interest": "Nature",
            "budget": "High"
        }))
        .unwrap();
        assert_eq!(request.days, -4);
    }

    #[test]
    fn test_unknown_interest_is_rejected() {
        let err = TripRequest::from_value(json!({
            "days": 3,
            "interest": "Beach",
            "budget": "Medium"
        }))
        .unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert!(err.to_string().contains("trip_request"));
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let err = TripRequest::from_json(r#"{"days": 3, "interest": "Nature"}"#).unwrap_err();
        assert!(err.to_string().contains("budget"));
    }

    #[test]
    fn test_deserialize_reports_path() {
        let err = deserialize_payload::<TripRequest>(
            trip_request_schema(),
            json!({"days": "three", "interest": "Nature", "budget": "Low"}),
        )
        .unwrap_err();
        assert!(err.to_string().contains("at days"));
    }

    #[test]
    fn test_malformed_json_is_serialization_error() {
        let err = TripRequest::from_json("{days: 3").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_trip_request_validator_is_compiled_once() {
        let first = trip_request_validator().unwrap();
        let second = trip_request_validator().unwrap();
        assert!(std::ptr::eq(first, second));

        let bad = json!({ "days": "three", "interest": "Nature", "budget": "Low" });
        let cached = validate_trip_request(&bad).unwrap_err().to_string();
        let fresh = validate_payload(trip_request_schema(), &bad)
            .unwrap_err()
            .to_string();
        assert_eq!(cached, fresh);
    }
}
