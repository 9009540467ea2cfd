//! Form domain layer
//!
//! Type-safe order form handling: field values, the validation schema and
//! the controller that derives the submit gate.

mod field;
mod order_form;
mod schema;

pub use field::{FieldChange, FormFocus};
pub use order_form::{OrderForm, OrderRequest, SubmitOutcome};
#[cfg(test)]
pub use order_form::OrderValues;
pub use schema::ValidationError;
