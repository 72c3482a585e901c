pub mod schema;
pub mod validation;

pub use schema::SchemaHandle;
pub use validation::{
    deserialize_payload, parse_trip_request, trip_request_schema, validate_payload,
    validate_trip_request,
};
