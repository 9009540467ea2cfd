//! Form field value objects

/// Focusable rows of the order form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormFocus {
    #[default]
    FullName,
    Size,
    Toppings,
    Submit,
}

impl FormFocus {
    pub fn next(&self) -> Self {
        match self {
            Self::FullName => Self::Size,
            Self::Size => Self::Toppings,
            Self::Toppings => Self::Submit,
            Self::Submit => Self::FullName,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::FullName => Self::Submit,
            Self::Size => Self::FullName,
            Self::Toppings => Self::Size,
            Self::Submit => Self::Toppings,
        }
    }
}

/// A single user edit to the order form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldChange {
    /// New full text of the full name input
    FullName(String),
    /// New raw value of the size selector
    Size(String),
    /// A topping checkbox changed state
    Topping { id: String, checked: bool },
}
