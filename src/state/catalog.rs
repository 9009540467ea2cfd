//! Fixed topping catalog and size options

/// A selectable pizza topping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topping {
    pub id: &'static str,
    pub label: &'static str,
}

/// Toppings offered on the order form, in display order
pub const TOPPINGS: &[Topping] = &[
    Topping {
        id: "1",
        label: "Pepperoni",
    },
    Topping {
        id: "2",
        label: "Green Peppers",
    },
    Topping {
        id: "3",
        label: "Pineapple",
    },
    Topping {
        id: "4",
        label: "Mushrooms",
    },
    Topping {
        id: "5",
        label: "Ham",
    },
];

/// Size selector options as (value, label); the empty value is the placeholder
pub const SIZE_OPTIONS: &[(&str, &str)] = &[
    ("", "----Choose Size----"),
    ("S", "Small"),
    ("M", "Medium"),
    ("L", "Large"),
];

/// Look up a topping by id
pub fn find_topping(id: &str) -> Option<&'static Topping> {
    TOPPINGS.iter().find(|t| t.id == id)
}

/// Label shown for a size value; unknown values are shown verbatim
pub fn size_label(value: &str) -> &str {
    SIZE_OPTIONS
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, label)| *label)
        .unwrap_or(value)
}

/// Next size option after `value`, wrapping around
pub fn next_size(value: &str) -> &'static str {
    let idx = SIZE_OPTIONS.iter().position(|(v, _)| *v == value);
    let next = idx.map(|i| (i + 1) % SIZE_OPTIONS.len()).unwrap_or(0);
    SIZE_OPTIONS[next].0
}

/// Previous size option before `value`, wrapping around
pub fn prev_size(value: &str) -> &'static str {
    let idx = SIZE_OPTIONS.iter().position(|(v, _)| *v == value);
    let prev = match idx {
        Some(0) | None => SIZE_OPTIONS.len() - 1,
        Some(i) => i - 1,
    };
    SIZE_OPTIONS[prev].0
}
