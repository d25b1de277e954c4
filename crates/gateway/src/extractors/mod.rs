//! Request extractors that reject malformed input with `VALIDATION_ERROR`.

mod validated_json;
mod validated_request;

pub use validated_json::ValidatedJson;
pub use validated_request::{UserIdPath, ValidatedForm, ValidatedQuery};

use validator::ValidationErrors;

/// First field-level message, or a generic one.
pub(crate) fn validation_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .into_iter()
        .min_by(|(a, _), (b, _)| a.cmp(b))
        .and_then(|(field, errors)| {
            errors.first().map(|error| match &error.message {
                Some(msg) => msg.to_string(),
                None => format!("{}: invalid value", field),
            })
        })
        .unwrap_or_else(|| "Validation failed".to_string())
}
