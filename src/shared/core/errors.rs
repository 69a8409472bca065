use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

use crate::shared::core::primitives::EntityId;
use crate::shared::infrastructure::entity_store::EntityStoreError;
use crate::shared::infrastructure::payment_gateway::PaymentGatewayError;
use crate::shared::infrastructure::payment_gateway::card::CardValidationError;

/// One rejected input field, named as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("validation failed on {}", fields(.0))]
    Validation(Vec<FieldError>),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error(transparent)]
    Store(#[from] EntityStoreError),

    #[error(transparent)]
    Payment(#[from] PaymentGatewayError),

    /// The gateway approved the charge but the outcome never reached the
    /// registration. Carries what is needed to reconcile it by hand.
    #[error("payment {payment_id} for registration {registration_id} was not recorded: {source}")]
    UnrecordedPayment {
        registration_id: EntityId,
        payment_id: String,
        source: EntityStoreError,
    },
}

fn fields(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.field.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<ValidationErrors> for ApplicationError {
    fn from(errors: ValidationErrors) -> Self {
        ApplicationError::Validation(validation_fields(&errors))
    }
}

impl From<CardValidationError> for ApplicationError {
    fn from(error: CardValidationError) -> Self {
        ApplicationError::Validation(card_fields(&error))
    }
}

/// Flattens `validator` output into wire-named field errors, sorted by field.
pub fn validation_fields(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut fields: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errors)| {
            let field = camel_case(&field);
            errors.iter().map(move |error| {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("invalid ({})", error.code));
                FieldError::new(field.clone(), message)
            })
        })
        .collect();
    fields.sort_by(|a, b| a.field.cmp(&b.field));
    fields
}

pub fn card_fields(error: &CardValidationError) -> Vec<FieldError> {
    error
        .problems
        .iter()
        .map(|p| FieldError::new(p.field(), p.message()))
        .collect()
}

fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod application_error_tests {
    use super::*;
    use rstest::rstest;
    use validator::Validate;

    #[derive(Validate)]
    struct SignupForm {
        #[validate(length(min = 1, message = "First name is required"))]
        first_name: String,
        #[validate(email(message = "Valid email is required"))]
        email: String,
    }

    #[rstest]
    fn it_should_list_every_offending_field_in_camel_case() {
        let form = SignupForm {
            first_name: String::new(),
            email: "nope".into(),
        };
        let error: ApplicationError = form.validate().unwrap_err().into();
        match error {
            ApplicationError::Validation(fields) => {
                assert_eq!(
                    fields,
                    vec![
                        FieldError::new("email", "Valid email is required"),
                        FieldError::new("firstName", "First name is required"),
                    ]
                );
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[rstest]
    #[case("dental_license_number", "dentalLicenseNumber")]
    #[case("courseId", "courseId")]
    #[case("cvv", "cvv")]
    fn it_should_convert_field_names_to_camel_case(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(camel_case(input), expected);
    }
}
