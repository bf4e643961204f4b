//! Form definitions as served by `GET /forms/{id}/`.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::borrow::Cow;

use super::field::Field;
use super::theme::Theme;
use super::{
    deserialize_blank_as_none, deserialize_id, deserialize_nullable_string,
    deserialize_optional_id,
};

pub const DEFAULT_SUCCESS_MESSAGE: &str =
    "Your response has been integrated. Session terminates now.";
pub const DEFAULT_LINK_LABEL: &str = "Continue";

/// A wizard page. `id == None` is the implicit section used when a form
/// defines none.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Section {
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub description: String,
}

impl Section {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            title: title.into(),
            description: String::new(),
        }
    }

    /// The single page synthesized for a form without sections.
    pub fn implicit() -> Self {
        Self {
            id: None,
            title: "Form".to_string(),
            description: String::new(),
        }
    }
}

/// Why a loaded form no longer accepts responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClosedReason {
    /// `closes_at` has passed.
    Deadline(DateTime<Utc>),
    /// The author switched the form off.
    Inactive,
}

/// Immutable snapshot of a form, fetched once per session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FormDefinition {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub description: String,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub closes_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_blank_as_none")]
    pub success_message: Option<String>,
    #[serde(default, deserialize_with = "deserialize_blank_as_none")]
    pub success_link: Option<String>,
    #[serde(default, deserialize_with = "deserialize_blank_as_none")]
    pub success_link_label: Option<String>,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub fields: Vec<Field>,
}

fn default_active() -> bool {
    true
}

impl FormDefinition {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            theme: Theme::default(),
            is_active: true,
            closes_at: None,
            success_message: None,
            success_link: None,
            success_link_label: None,
            sections: Vec::new(),
            fields: Vec::new(),
        }
    }

    /// Wizard pages in order; never empty.
    pub fn pages(&self) -> Cow<'_, [Section]> {
        if self.sections.is_empty() {
            Cow::Owned(vec![Section::implicit()])
        } else {
            Cow::Borrowed(&self.sections)
        }
    }

    /// Fields owned by the section with `section_id`, in form order.
    pub fn fields_in<'a>(
        &'a self,
        section_id: Option<&'a str>,
    ) -> impl Iterator<Item = &'a Field> + 'a {
        self.fields
            .iter()
            .filter(move |field| field.section.as_deref() == section_id)
    }

    pub fn field_by_label(&self, label: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.label == label)
    }

    pub fn success_message(&self) -> &str {
        self.success_message
            .as_deref()
            .unwrap_or(DEFAULT_SUCCESS_MESSAGE)
    }

    pub fn success_link_label(&self) -> &str {
        self.success_link_label
            .as_deref()
            .unwrap_or(DEFAULT_LINK_LABEL)
    }

    /// `Some` when the form refuses responses at `now`.
    ///
    /// An elapsed deadline wins over the inactive flag so the message can
    /// name the closing time.
    pub fn closed_reason(&self, now: DateTime<Utc>) -> Option<ClosedReason> {
        match self.closes_at {
            Some(closes_at) if closes_at < now => Some(ClosedReason::Deadline(closes_at)),
            _ if !self.is_active => Some(ClosedReason::Inactive),
            _ => None,
        }
    }

    /// Labels that appear on more than one field. Answers are keyed by
    /// label, so duplicates share one answer slot.
    pub fn duplicate_labels(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        let mut duplicates = Vec::new();
        for field in &self.fields {
            if !seen.insert(field.label.as_str()) && !duplicates.contains(&field.label.as_str()) {
                duplicates.push(field.label.as_str());
            }
        }
        duplicates
    }
}
