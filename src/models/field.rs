//! Form fields and the per-type input behavior attached to them.

use serde::Deserialize;

use super::answer::AnswerValue;
use super::{deserialize_id, deserialize_optional_id};

/// Input kind of a field. Options live only on the variants that use them.
///
/// A wire `checkbox` becomes [`FieldKind::Toggle`] when it has no options and
/// [`FieldKind::MultiChoice`] otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    ShortText,
    LongText,
    Number,
    Date,
    Select { options: Vec<String> },
    Radio { options: Vec<String> },
    MultiChoice { options: Vec<String> },
    Toggle,
}

impl FieldKind {
    /// Build a kind from the backend's `field_type` and `options`.
    ///
    /// Returns `None` for a type key this client does not know.
    pub fn from_wire(field_type: &str, options: Vec<String>) -> Option<FieldKind> {
        let kind = match field_type {
            "text" => FieldKind::ShortText,
            "textarea" => FieldKind::LongText,
            "number" => FieldKind::Number,
            "date" => FieldKind::Date,
            "select" => FieldKind::Select { options },
            "radio" => FieldKind::Radio { options },
            "checkbox" if options.is_empty() => FieldKind::Toggle,
            "checkbox" => FieldKind::MultiChoice { options },
            _ => return None,
        };
        Some(kind)
    }

    pub fn wire_key(&self) -> &'static str {
        match self {
            FieldKind::ShortText => "text",
            FieldKind::LongText => "textarea",
            FieldKind::Number => "number",
            FieldKind::Date => "date",
            FieldKind::Select { .. } => "select",
            FieldKind::Radio { .. } => "radio",
            FieldKind::MultiChoice { .. } | FieldKind::Toggle => "checkbox",
        }
    }

    pub fn options(&self) -> &[String] {
        match self {
            FieldKind::Select { options }
            | FieldKind::Radio { options }
            | FieldKind::MultiChoice { options } => options,
            FieldKind::ShortText
            | FieldKind::LongText
            | FieldKind::Number
            | FieldKind::Date
            | FieldKind::Toggle => &[],
        }
    }

    /// Answer a freshly loaded form starts with.
    pub fn initial_answer(&self) -> AnswerValue {
        match self {
            FieldKind::MultiChoice { .. } => AnswerValue::Choices(Vec::new()),
            FieldKind::Toggle => AnswerValue::Flag(false),
            FieldKind::ShortText
            | FieldKind::LongText
            | FieldKind::Number
            | FieldKind::Date
            | FieldKind::Select { .. }
            | FieldKind::Radio { .. } => AnswerValue::Text(String::new()),
        }
    }

    /// Whether the field is edited by typing characters.
    pub fn is_typed(&self) -> bool {
        matches!(
            self,
            FieldKind::ShortText | FieldKind::LongText | FieldKind::Number | FieldKind::Date
        )
    }

    /// Character filter for typed inputs.
    pub fn accepts_char(&self, c: char) -> bool {
        match self {
            FieldKind::ShortText => !c.is_control(),
            FieldKind::LongText => !c.is_control() || c == '\n',
            FieldKind::Number => c.is_ascii_digit() || c == '-' || c == '.',
            FieldKind::Date => c.is_ascii_digit() || c == '-',
            FieldKind::Select { .. }
            | FieldKind::Radio { .. }
            | FieldKind::MultiChoice { .. }
            | FieldKind::Toggle => false,
        }
    }

    /// Select and radio with no options cannot be answered.
    pub fn lacks_options(&self) -> bool {
        matches!(
            self,
            FieldKind::Select { options } | FieldKind::Radio { options } if options.is_empty()
        )
    }
}

/// A single question in a form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "FieldRecord")]
pub struct Field {
    pub id: String,
    /// Unique within a form; doubles as the answer key.
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    /// Owning section, `None` for the implicit section.
    pub section: Option<String>,
}

impl Field {
    pub fn new(id: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind,
            required: false,
            section: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn in_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }
}

/// Shape of a field as the backend serializes it.
#[derive(Debug, Deserialize)]
struct FieldRecord {
    #[serde(deserialize_with = "deserialize_id")]
    id: String,
    label: String,
    #[serde(default = "default_field_type")]
    field_type: String,
    #[serde(default)]
    required: bool,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    section: Option<String>,
    #[serde(default)]
    options: Option<Vec<String>>,
}

fn default_field_type() -> String {
    "text".to_string()
}

impl From<FieldRecord> for Field {
    fn from(record: FieldRecord) -> Self {
        let options = record.options.unwrap_or_default();
        let kind = FieldKind::from_wire(&record.field_type, options).unwrap_or_else(|| {
            tracing::warn!(
                "Unknown field_type '{}' on field '{}', treating as short text",
                record.field_type,
                record.label
            );
            FieldKind::ShortText
        });

        Field {
            id: record.id,
            label: record.label,
            kind,
            required: record.required,
            section: record.section,
        }
    }
}
