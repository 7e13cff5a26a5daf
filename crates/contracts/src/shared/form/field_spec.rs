//! Typed description of dialog fields
//!
//! A dialog is an ordered `Vec<FieldSpec>`; the renderer lives in the
//! frontend, the model never depends on it.

use std::collections::HashMap;

use super::validation::ValidationRules;

/// Options shared by every value-carrying field
#[derive(Debug, Clone, PartialEq)]
pub struct FieldBase {
    pub fieldname: &'static str,
    pub label: &'static str,
    pub rules: ValidationRules,
    pub hidden: bool,
    pub description: Option<&'static str>,
}

impl FieldBase {
    pub const fn new(fieldname: &'static str, label: &'static str) -> Self {
        Self {
            fieldname,
            label,
            rules: ValidationRules::none(),
            hidden: false,
            description: None,
        }
    }

    pub const fn required(mut self) -> Self {
        self.rules.required = true;
        self
    }

    pub const fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub const fn describe(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }
}

/// Dialog field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldSpec {
    /// Free text input
    TextInput(FieldBase),
    /// Reference to another record type ("Brand", "Item Group")
    LinkInput { base: FieldBase, target: &'static str },
    Checkbox { base: FieldBase, default: bool },
    /// Drop-down; the first option is usually empty
    Select { base: FieldBase, options: Vec<String> },
    /// Computed value shown to the user, never edited
    ReadOnlyDisplay(FieldBase),
    SectionBreak { label: Option<&'static str> },
    ColumnBreak,
    /// Slot for custom content (size grid, chips editor)
    Html { fieldname: &'static str },
}

impl FieldSpec {
    pub fn base(&self) -> Option<&FieldBase> {
        match self {
            Self::TextInput(base) | Self::ReadOnlyDisplay(base) => Some(base),
            Self::LinkInput { base, .. }
            | Self::Checkbox { base, .. }
            | Self::Select { base, .. } => Some(base),
            Self::SectionBreak { .. } | Self::ColumnBreak | Self::Html { .. } => None,
        }
    }

    pub fn fieldname(&self) -> Option<&'static str> {
        match self {
            Self::Html { fieldname } => Some(fieldname),
            _ => self.base().map(|b| b.fieldname),
        }
    }

    pub fn is_required(&self) -> bool {
        self.base().is_some_and(|b| b.rules.required)
    }

    /// Labels of required fields whose value is missing or blank
    pub fn validate_required(
        fields: &[FieldSpec],
        values: &HashMap<String, String>,
    ) -> Vec<&'static str> {
        fields
            .iter()
            .filter_map(FieldSpec::base)
            .filter(|base| base.rules.required && !base.hidden)
            .filter(|base| {
                values
                    .get(base.fieldname)
                    .map_or(true, |v| v.trim().is_empty())
            })
            .map(|base| base.label)
            .collect()
    }

    /// Replace options of a `Select` field. Returns false for other kinds.
    pub fn set_options(&mut self, next: Vec<String>) -> bool {
        match self {
            Self::Select { options, .. } => {
                *options = next;
                true
            }
            _ => false,
        }
    }
}

/// Check the value map against the field rules.
///
/// Returns the error messages of all fields that failed, in dialog order.
pub fn validate_values(fields: &[FieldSpec], values: &HashMap<String, String>) -> Vec<String> {
    fields
        .iter()
        .filter_map(FieldSpec::base)
        .filter(|base| !base.hidden)
        .filter_map(|base| {
            let value = values.get(base.fieldname).map(String::as_str).unwrap_or("");
            base.rules.validate_string(value, base.label).err()
        })
        .collect()
}

/// Select options built from names: an empty first entry followed by the names
pub fn select_options<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    std::iter::once(String::new())
        .chain(names.into_iter().map(Into::into))
        .collect()
}
