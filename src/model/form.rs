//! Form state shared by every resource editor.
//!
//! Forms are described as data ([`FieldSpec`]) so one editor component can
//! render and submit any resource kind.

use std::collections::BTreeMap;

use thiserror::Error;

/// Whether a form is creating a new record or editing an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i64),
}

impl FormMode {
    pub fn from_route_id(id: Option<i64>) -> Self {
        match id {
            Some(id) => FormMode::Edit(id),
            None => FormMode::Create,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, FormMode::Edit(_))
    }
}

/// Input widget for a single form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    TextArea,
    /// Numeric input with HTML `step` and `min` constraints
    Number {
        step: &'static str,
        min: &'static str,
    },
    Email,
    Password,
    Checkbox,
}

impl FieldKind {
    /// HTML `type` attribute for `input` based kinds
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Text | FieldKind::TextArea => "text",
            FieldKind::Number { .. } => "number",
            FieldKind::Email => "email",
            FieldKind::Password => "password",
            FieldKind::Checkbox => "checkbox",
        }
    }
}

/// Description of one form field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub placeholder: &'static str,
}

impl FieldSpec {
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: false,
            placeholder: "",
        }
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub const fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = placeholder;
        self
    }
}

/// Current value of a field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

/// Editable values of a form, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValues {
    values: BTreeMap<&'static str, FieldValue>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.set_text(name, value);
        self
    }

    pub fn with_flag(mut self, name: &'static str, value: bool) -> Self {
        self.set_flag(name, value);
        self
    }

    pub fn set_text(&mut self, name: &'static str, value: impl Into<String>) {
        self.values.insert(name, FieldValue::Text(value.into()));
    }

    pub fn set_flag(&mut self, name: &'static str, value: bool) {
        self.values.insert(name, FieldValue::Flag(value));
    }

    /// Text value of a field; missing or checkbox fields read as empty
    pub fn text(&self, name: &str) -> &str {
        match self.values.get(name) {
            Some(FieldValue::Text(value)) => value,
            _ => "",
        }
    }

    pub fn flag(&self, name: &str) -> bool {
        matches!(self.values.get(name), Some(FieldValue::Flag(true)))
    }

    pub fn set(&mut self, name: &'static str, value: FieldValue) {
        self.values.insert(name, value);
    }

    /// Value to show in the input for `field`.
    pub fn value_for(&self, field: &FieldSpec) -> FieldValue {
        match field.kind {
            FieldKind::Checkbox => FieldValue::Flag(self.flag(field.name)),
            _ => FieldValue::Text(self.text(field.name).to_string()),
        }
    }

    /// Check the HTML `required` constraint for every field in `fields`.
    pub fn check_required(&self, fields: &[FieldSpec]) -> Result<(), FormError> {
        for field in fields {
            if field.required
                && field.kind != FieldKind::Checkbox
                && self.text(field.name).is_empty()
            {
                return Err(FormError::Missing { label: field.label });
            }
        }
        Ok(())
    }
}

/// Form input that cannot be turned into a payload.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("{label} is required")]
    Missing { label: &'static str },

    #[error("{label} must be a non-negative number")]
    InvalidNumber { label: &'static str },
}

/// Split a comma-separated tag string, trimming entries and dropping empty ones.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn join_tags(tags: &[String]) -> String {
    tags.join(", ")
}

/// Parse a decimal number field the way an HTML `number` input with `min="0"` would accept it.
pub fn parse_non_negative(input: &str, label: &'static str) -> Result<f64, FormError> {
    match input.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(FormError::InvalidNumber { label }),
    }
}

/// Render a price with exactly two decimal places.
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}
