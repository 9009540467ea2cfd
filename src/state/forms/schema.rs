//! Validation schema for the order form
//!
//! Each field has an ordered rule table. Rules run top to bottom and the
//! first failing rule decides the error. Toppings have no rules.

use super::order_form::OrderValues;
use thiserror::Error;

/// Minimum full name length in UTF-16 code units, after trimming
pub const FULL_NAME_MIN_CHARS: usize = 3;

/// Maximum full name length in UTF-16 code units, after trimming
pub const FULL_NAME_MAX_CHARS: usize = 20;

/// Accepted size codes
pub const VALID_SIZES: &[&str] = &["S", "M", "L"];

/// A field-level validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("full name must be at least 3 characters")]
    FullNameTooShort,
    #[error("full name must be at most 20 characters")]
    FullNameTooLong,
    #[error("size must be S or M or L")]
    SizeIncorrect,
}

/// Fields that carry validation rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidatedField {
    FullName,
    Size,
}

struct Rule {
    passes: fn(&str) -> bool,
    error: ValidationError,
}

/// Name length as browsers count it: astral-plane characters weigh two units
fn full_name_len(value: &str) -> usize {
    value.trim().encode_utf16().count()
}

fn full_name_long_enough(value: &str) -> bool {
    full_name_len(value) >= FULL_NAME_MIN_CHARS
}

fn full_name_short_enough(value: &str) -> bool {
    full_name_len(value) <= FULL_NAME_MAX_CHARS
}

fn size_is_known(value: &str) -> bool {
    VALID_SIZES.contains(&value)
}

const FULL_NAME_RULES: &[Rule] = &[
    Rule {
        passes: full_name_long_enough,
        error: ValidationError::FullNameTooShort,
    },
    Rule {
        passes: full_name_short_enough,
        error: ValidationError::FullNameTooLong,
    },
];

const SIZE_RULES: &[Rule] = &[Rule {
    passes: size_is_known,
    error: ValidationError::SizeIncorrect,
}];

fn rules_for(field: ValidatedField) -> &'static [Rule] {
    match field {
        ValidatedField::FullName => FULL_NAME_RULES,
        ValidatedField::Size => SIZE_RULES,
    }
}

/// Validate a single field value against its rule table
pub fn validate_field(field: ValidatedField, value: &str) -> Result<(), ValidationError> {
    match rules_for(field).iter().find(|rule| !(rule.passes)(value)) {
        Some(rule) => Err(rule.error),
        None => Ok(()),
    }
}

/// Validate every rule-carrying field of the order, in schema order
pub fn validate_order(values: &OrderValues) -> Result<(), ValidationError> {
    validate_field(ValidatedField::FullName, &values.full_name)?;
    validate_field(ValidatedField::Size, &values.size)
}
