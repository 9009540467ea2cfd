//! Order form state and controller operations

use super::field::{FieldChange, FormFocus};
use super::schema::{validate_field, validate_order, ValidatedField, ValidationError};
use crate::state::catalog::{find_topping, TOPPINGS};
use serde::Serialize;
use std::collections::BTreeSet;

/// Current contents of the order form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderValues {
    pub full_name: String,
    /// Raw selector value: "", "S", "M" or "L"
    pub size: String,
    pub toppings: BTreeSet<String>,
}

/// Body of `POST /api/order`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub full_name: String,
    pub size: String,
    pub toppings: Vec<String>,
}

impl From<&OrderValues> for OrderRequest {
    fn from(values: &OrderValues) -> Self {
        Self {
            full_name: values.full_name.clone(),
            size: values.size.clone(),
            toppings: values.toppings.iter().cloned().collect(),
        }
    }
}

/// Per-field inline errors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub full_name: Option<ValidationError>,
    pub size: Option<ValidationError>,
}

impl FieldErrors {
    fn set(&mut self, field: ValidatedField, error: Option<ValidationError>) {
        match field {
            ValidatedField::FullName => self.full_name = error,
            ValidatedField::Size => self.size = error,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.full_name.is_none() && self.size.is_none()
    }
}

/// Result banner of the last resolved submission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionStatus {
    success: Option<String>,
    failure: Option<String>,
}

impl SubmissionStatus {
    pub fn succeed(&mut self, message: impl Into<String>) {
        self.success = Some(message.into());
        self.failure = None;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.failure = Some(message.into());
        self.success = None;
    }

    pub fn success(&self) -> Option<&str> {
        self.success.as_deref().filter(|m| !m.is_empty())
    }

    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref().filter(|m| !m.is_empty())
    }
}

/// How a submission resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Placed { message: String },
    Failed { message: String },
}

/// The order form controller
///
/// Owns the field values, their errors, the submission banner and the
/// submit gate. `submit_enabled` is written only by
/// [`OrderForm::recompute_submit_gate`].
#[derive(Debug, Clone)]
pub struct OrderForm {
    values: OrderValues,
    errors: FieldErrors,
    status: SubmissionStatus,
    submit_enabled: bool,
    /// Focused row
    pub focus: FormFocus,
    /// Highlighted row in the toppings checklist
    pub topping_cursor: usize,
    /// Requests sent but not yet resolved
    pub in_flight: usize,
}

impl OrderForm {
    pub fn new() -> Self {
        let mut form = Self {
            values: OrderValues::default(),
            errors: FieldErrors::default(),
            status: SubmissionStatus::default(),
            submit_enabled: false,
            focus: FormFocus::default(),
            topping_cursor: 0,
            in_flight: 0,
        };
        form.recompute_submit_gate();
        form
    }

    pub fn values(&self) -> &OrderValues {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    /// Apply one user edit, validate the touched field, then re-derive the gate
    pub fn on_field_change(&mut self, change: FieldChange) {
        match change {
            FieldChange::Topping { id, checked } => {
                if find_topping(&id).is_none() {
                    tracing::warn!("Ignoring unknown topping id {id:?}");
                    return;
                }
                if checked {
                    self.values.toppings.insert(id);
                } else {
                    self.values.toppings.remove(&id);
                }
            }
            FieldChange::FullName(value) => {
                self.values.full_name = value;
                self.validate_single(ValidatedField::FullName);
            }
            FieldChange::Size(value) => {
                self.values.size = value;
                self.validate_single(ValidatedField::Size);
            }
        }
        self.recompute_submit_gate();
    }

    fn validate_single(&mut self, field: ValidatedField) {
        let value = match field {
            ValidatedField::FullName => &self.values.full_name,
            ValidatedField::Size => &self.values.size,
        };
        let error = validate_field(field, value).err();
        self.errors.set(field, error);
    }

    /// Re-derive the submit gate from the whole form
    pub fn recompute_submit_gate(&mut self) {
        self.submit_enabled = validate_order(&self.values).is_ok();
    }

    /// Toggle the topping under the checklist cursor
    pub fn toggle_topping_at_cursor(&mut self) {
        if let Some(topping) = TOPPINGS.get(self.topping_cursor) {
            let checked = !self.values.toppings.contains(topping.id);
            self.on_field_change(FieldChange::Topping {
                id: topping.id.to_string(),
                checked,
            });
        }
    }

    pub fn move_topping_cursor_down(&mut self) {
        if self.topping_cursor + 1 < TOPPINGS.len() {
            self.topping_cursor += 1;
        }
    }

    pub fn move_topping_cursor_up(&mut self) {
        self.topping_cursor = self.topping_cursor.saturating_sub(1);
    }

    /// Snapshot the current values as a request body and count it in flight.
    ///
    /// Does not re-validate; callers consult [`OrderForm::submit_enabled`].
    pub fn submit(&mut self) -> OrderRequest {
        self.in_flight += 1;
        OrderRequest::from(&self.values)
    }

    /// Apply the resolution of a previously submitted request
    pub fn complete_submission(&mut self, outcome: SubmitOutcome) {
        self.in_flight = self.in_flight.saturating_sub(1);
        match outcome {
            SubmitOutcome::Placed { message } => {
                self.status.succeed(message);
                self.values = OrderValues::default();
                self.recompute_submit_gate();
            }
            SubmitOutcome::Failed { message } => {
                self.status.fail(message);
            }
        }
    }
}

impl Default for OrderForm {
    fn default() -> Self {
        Self::new()
    }
}
