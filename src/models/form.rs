use std::collections::BTreeMap;
use std::fmt;

/// Field-level validation messages, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .flat_map(|(f, msgs)| msgs.iter().map(move |m| (f.as_str(), m.as_str())))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.iter().map(|(k, m)| format!("{k}: {m}")).collect();
        f.write_str(&parts.join("; "))
    }
}

/// Result of submitting a form-like input.
///
/// `Rejected` hands the caller's input back untouched so it can be shown
/// again together with the errors; nothing was persisted.
#[derive(Debug, Clone, PartialEq)]
pub enum FormOutcome<T, I> {
    Accepted(T),
    Rejected { input: I, errors: FieldErrors },
}

impl<T, I> FormOutcome<T, I> {
    pub fn accepted(self) -> Option<T> {
        match self {
            FormOutcome::Accepted(v) => Some(v),
            FormOutcome::Rejected { .. } => None,
        }
    }
}
