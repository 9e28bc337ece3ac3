//! First-violation reporting over `validator` results.
//!
//! The API reports only the FIRST violated rule, in field declaration
//! order. `validator::ValidationErrors` is backed by a map, so each schema
//! declares its field order and this module restores it. Callers must not
//! assume multi-error aggregation.

use validator::{Validate, ValidationError, ValidationErrors};

/// A single field/message pair from a failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

/// Validation with ordered, first-error-only reporting.
pub trait FirstViolation: Validate {
    /// Field names in declaration order.
    const FIELD_ORDER: &'static [&'static str];

    /// Run the schema; on failure return the first violated rule.
    fn validate_first(&self) -> Result<(), FieldViolation> {
        match self.validate() {
            Ok(()) => Ok(()),
            Err(errors) => Err(first_violation(&errors, Self::FIELD_ORDER)),
        }
    }
}

/// Collect violations ordered by the schema's field order. Fields outside
/// the declared order (struct-level rules) sort last.
pub fn violations(errors: &ValidationErrors, field_order: &[&str]) -> Vec<FieldViolation> {
    let mut out = Vec::new();

    for field in field_order {
        if let Some(kind) = errors.errors().get(*field)
            && let validator::ValidationErrorsKind::Field(field_errors) = kind
        {
            for err in field_errors {
                out.push(FieldViolation {
                    field: (*field).to_string(),
                    message: message_of(err),
                });
            }
        }
    }

    for (field, kind) in errors.errors() {
        if field_order.contains(&field.as_ref()) {
            continue;
        }
        if let validator::ValidationErrorsKind::Field(field_errors) = kind {
            for err in field_errors {
                out.push(FieldViolation {
                    field: field.to_string(),
                    message: message_of(err),
                });
            }
        }
    }

    out
}

fn first_violation(errors: &ValidationErrors, field_order: &[&str]) -> FieldViolation {
    violations(errors, field_order)
        .into_iter()
        .next()
        .unwrap_or(FieldViolation {
            field: String::new(),
            message: "Invalid input".to_string(),
        })
}

fn message_of(err: &ValidationError) -> String {
    err.message
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| format!("Invalid value ({})", err.code))
}
