//! Machine-readable error kinds placed in the `type` field of each detail.

/// Body is not valid JSON (syntax error, truncated document, trailing data).
pub const JSON_INVALID: &str = "json_invalid";

/// Body was sent with a non-JSON content type.
pub const JSON_TYPE: &str = "json_type";

/// Required field or parameter is absent.
pub const MISSING: &str = "missing";

/// Field not declared by the target type.
pub const EXTRA_FORBIDDEN: &str = "extra_forbidden";

/// Value has the wrong JSON type, e.g. a string where an integer is expected.
pub const INVALID_TYPE: &str = "invalid_type";

/// Value has the right shape but is not accepted (bad variant, bad length,
/// unparsable number in a query or path parameter).
pub const INVALID_VALUE: &str = "invalid_value";

/// Anything the deserializer reports that fits no other kind.
pub const VALUE_ERROR: &str = "value_error";

/// Message used when a required body is empty.
pub const BODY_REQUIRED_MESSAGE: &str = "Field required";

/// Message used when the body is not declared as JSON.
pub const JSON_CONTENT_TYPE_MESSAGE: &str = "Expected a JSON request body";
