//! Field descriptions and raw values for the resource edit modal.
//!
//! DESIGN
//! ======
//! The modal keeps every input as a string keyed by field name. Conversion to
//! typed request bodies happens once, on submit, through the accessors here,
//! so a half-typed number never has to be representable. Key/value list
//! fields are edited as one `key=value` entry per line.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use std::collections::BTreeMap;
use std::str::FromStr;

use super::validation::ValidationError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Password,
    Number,
    TextArea,
    Checkbox,
    /// One of the listed wire values.
    Select(&'static [&'static str]),
    /// `key=value` lines.
    Pairs,
    /// A project id, picked from the loaded project list.
    ProjectRef,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub const fn new(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self { key, label, kind, required: false }
    }

    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Raw form input, keyed by [`FieldSpec::key`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormValues {
    values: BTreeMap<String, String>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from `(key, value)` pairs, e.g. an existing row.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self { values: pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }

    pub fn get(&self, key: &str) -> &str {
        self.values.get(key).map_or("", String::as_str)
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.values.insert(key.to_owned(), value.into());
    }

    /// Trimmed value, or `None` when blank.
    pub fn text(&self, key: &str) -> Option<String> {
        let value = self.get(key).trim();
        (!value.is_empty()).then(|| value.to_owned())
    }

    /// # Errors
    ///
    /// [`ValidationError::Required`] when blank.
    pub fn required_text(&self, spec: &FieldSpec) -> Result<String, ValidationError> {
        self.text(spec.key).ok_or(ValidationError::Required(spec.label))
    }

    /// Parsed number, `None` when blank.
    ///
    /// # Errors
    ///
    /// [`ValidationError::InvalidNumber`] when present but unparsable.
    pub fn number<T: FromStr>(&self, spec: &FieldSpec) -> Result<Option<T>, ValidationError> {
        self.text(spec.key)
            .map(|raw| raw.parse::<T>().map_err(|_| ValidationError::InvalidNumber(spec.label)))
            .transpose()
    }

    /// # Errors
    ///
    /// `Required` when blank, `InvalidNumber` when unparsable.
    pub fn required_number<T: FromStr>(&self, spec: &FieldSpec) -> Result<T, ValidationError> {
        self.number(spec)?.ok_or(ValidationError::Required(spec.label))
    }

    /// Parsed select value, `None` when blank.
    ///
    /// # Errors
    ///
    /// [`ValidationError::InvalidChoice`] when `parse` rejects the value.
    pub fn choice<T>(&self, spec: &FieldSpec, parse: fn(&str) -> Option<T>) -> Result<Option<T>, ValidationError> {
        self.text(spec.key)
            .map(|raw| parse(&raw).ok_or(ValidationError::InvalidChoice(spec.label)))
            .transpose()
    }

    pub fn flag(&self, key: &str) -> bool {
        self.get(key) == "true"
    }

    pub fn set_flag(&mut self, key: &str, on: bool) {
        self.set(key, if on { "true" } else { "false" });
    }

    /// # Errors
    ///
    /// [`ValidationError::InvalidEntry`] for a malformed line.
    pub fn pairs(&self, spec: &FieldSpec) -> Result<Vec<(String, String)>, ValidationError> {
        parse_pairs(spec.label, self.get(spec.key))
    }
}

/// Check every required field is filled in.
///
/// # Errors
///
/// [`ValidationError::Required`] for the first blank required field.
pub fn check_required(specs: &[FieldSpec], values: &FormValues) -> Result<(), ValidationError> {
    match specs
        .iter()
        .find(|spec| spec.required && spec.kind != FieldKind::Checkbox && values.text(spec.key).is_none())
    {
        Some(spec) => Err(ValidationError::Required(spec.label)),
        None => Ok(()),
    }
}

/// Parse `key=value` entries separated by newlines. Blank lines are skipped.
///
/// # Errors
///
/// [`ValidationError::InvalidEntry`] for a line without `=` or with an empty key.
pub fn parse_pairs(field: &'static str, raw: &str) -> Result<Vec<(String, String)>, ValidationError> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| match line.split_once('=') {
            Some((key, value)) if !key.trim().is_empty() => Ok((key.trim().to_owned(), value.trim().to_owned())),
            _ => Err(ValidationError::InvalidEntry { field, entry: line.to_owned() }),
        })
        .collect()
}

pub fn format_pairs<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, String)>,
{
    pairs.into_iter().map(|(k, v)| format!("{k}={v}")).collect::<Vec<_>>().join("\n")
}
