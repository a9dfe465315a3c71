//! Request payload validation.
//!
//! Payloads are checked client-side before any network call; the first
//! violation message becomes the inline error shown to the user.

use validator::Validate;

use common::{AppError, AppResult};

/// Validate a request payload, surfacing the first violation message.
pub fn validate_payload<T: Validate>(payload: &T) -> AppResult<()> {
    payload.validate().map_err(|e| {
        let message = e
            .field_errors()
            .values()
            .next()
            .and_then(|errors| errors.first())
            .and_then(|error| error.message.as_ref())
            .map(|msg| msg.to_string())
            .unwrap_or_else(|| "Validation failed".to_string());
        AppError::validation(message)
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Probe {
        #[validate(length(min = 2, message = "Name is too short"))]
        name: String,
    }

    #[test]
    fn first_violation_message_is_surfaced() {
        let err = validate_payload(&Probe {
            name: "x".to_string(),
        })
        .unwrap_err();
        assert_eq!(err.user_message(), "Name is too short");
    }

    #[test]
    fn valid_payload_passes() {
        assert!(validate_payload(&Probe {
            name: "ok".to_string()
        })
        .is_ok());
    }
}
