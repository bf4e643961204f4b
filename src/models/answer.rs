//! Answer values and the in-progress answer map.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::field::Field;

/// The value held for one field. Serializes to the bare JSON shape the
/// backend stores: a string, an array of strings, or a boolean.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Flag(bool),
    Text(String),
    Choices(Vec<String>),
}

impl AnswerValue {
    /// Whether a required field holding this value is unmet.
    ///
    /// Only empty text is missing. A choice list counts as answered even
    /// when empty, and an unchecked box is the explicit answer `false`.
    pub fn is_missing(&self) -> bool {
        match self {
            AnswerValue::Text(text) => text.is_empty(),
            AnswerValue::Flag(_) | AnswerValue::Choices(_) => false,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AnswerValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            AnswerValue::Flag(flag) => Some(*flag),
            _ => None,
        }
    }

    pub fn contains_choice(&self, option: &str) -> bool {
        match self {
            AnswerValue::Choices(choices) => choices.iter().any(|c| c == option),
            _ => false,
        }
    }

    /// Value after checking or unchecking `option` in a multi-choice answer.
    ///
    /// Checking appends (if absent); unchecking removes every occurrence and
    /// keeps the order of what remains. A non-list value is treated as empty.
    pub fn with_choice(&self, option: &str, checked: bool) -> AnswerValue {
        let mut choices = match self {
            AnswerValue::Choices(choices) => choices.clone(),
            _ => Vec::new(),
        };
        if checked {
            if !choices.iter().any(|c| c == option) {
                choices.push(option.to_string());
            }
        } else {
            choices.retain(|c| c != option);
        }
        AnswerValue::Choices(choices)
    }
}

/// Answers keyed by field label.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerState {
    values: BTreeMap<String, AnswerValue>,
}

impl AnswerState {
    /// Default answers for a freshly loaded form.
    pub fn initial_for(fields: &[Field]) -> Self {
        let values = fields
            .iter()
            .map(|field| (field.label.clone(), field.kind.initial_answer()))
            .collect();
        Self { values }
    }

    pub fn get(&self, label: &str) -> Option<&AnswerValue> {
        self.values.get(label)
    }

    /// A copy of this state with `label` set to `value`. `self` is untouched.
    #[must_use]
    pub fn with_answer(&self, label: &str, value: AnswerValue) -> AnswerState {
        let mut values = self.values.clone();
        values.insert(label.to_string(), value);
        AnswerState { values }
    }

    /// An absent label counts as missing.
    pub fn is_missing(&self, label: &str) -> bool {
        self.values.get(label).map_or(true, AnswerValue::is_missing)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &AnswerValue)> {
        self.values.iter()
    }
}

/// Body of `POST /form-responses/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormSubmission {
    pub form: String,
    pub data: AnswerState,
}
