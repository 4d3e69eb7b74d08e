use crate::requests::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kinds of document the generator knows how to ask for.
///
/// The serialized form is the snake_case tag sent by the browser in the
/// `docType` field of a `GenerateRequest` (e.g. `"cover_letter"`). Parsing an
/// unrecognized tag is an error; there is no fallback type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    #[default]
    CoverLetter,
    Letter,
    Cv,
    Invoice,
    Custom,
}

/// How a structured field is entered in the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Date,
}

/// A single named input of a document type's structured field set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Key used on the wire and in the form state (e.g. `"your_name"`).
    pub name: &'static str,
    /// Human readable label, also used when the field is written into the prompt.
    pub label: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    const fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Text,
        }
    }

    const fn date(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Date,
        }
    }
}

const COVER_LETTER_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("your_name", "Your Name"),
    FieldSpec::text("your_email", "Your Email"),
    FieldSpec::text("recipient_name", "Recipient Name"),
    FieldSpec::text("recipient_company", "Recipient Company"),
    FieldSpec::text("subject_or_role", "Role / Subject"),
    FieldSpec::text("location", "Location"),
    FieldSpec::date("date", "Date"),
];

const LETTER_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("your_name", "Your Name"),
    FieldSpec::text("recipient_name", "Recipient Name"),
    FieldSpec::text("subject_or_role", "Subject"),
    FieldSpec::date("date", "Date"),
];

const CV_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("your_name", "Your Name"),
    FieldSpec::text("title", "Title"),
    FieldSpec::text("skills_csv", "Skills (comma separated)"),
    FieldSpec::text("links_csv", "Links (comma separated)"),
];

const INVOICE_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("seller", "Your / Company Name"),
    FieldSpec::text("client", "Client"),
    FieldSpec::text("invoice_number", "Invoice Number"),
    FieldSpec::date("date", "Date"),
];

impl DocumentType {
    /// Every type, in the order the form lists them.
    pub const ALL: [DocumentType; 5] = [
        DocumentType::CoverLetter,
        DocumentType::Letter,
        DocumentType::Cv,
        DocumentType::Invoice,
        DocumentType::Custom,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            DocumentType::CoverLetter => "cover_letter",
            DocumentType::Letter => "letter",
            DocumentType::Cv => "cv",
            DocumentType::Invoice => "invoice",
            DocumentType::Custom => "custom",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DocumentType::CoverLetter => "Cover Letter",
            DocumentType::Letter => "Letter",
            DocumentType::Cv => "CV",
            DocumentType::Invoice => "Invoice",
            DocumentType::Custom => "Custom",
        }
    }

    /// The structured fields that belong to this type, in display order.
    ///
    /// `Custom` documents have no structured fields; everything comes from the
    /// free text.
    pub fn fields(self) -> &'static [FieldSpec] {
        match self {
            DocumentType::CoverLetter => COVER_LETTER_FIELDS,
            DocumentType::Letter => LETTER_FIELDS,
            DocumentType::Cv => CV_FIELDS,
            DocumentType::Invoice => INVOICE_FIELDS,
            DocumentType::Custom => &[],
        }
    }

    pub fn field(self, name: &str) -> Option<&'static FieldSpec> {
        self.fields().iter().find(|spec| spec.name == name)
    }

    /// Only invoices own an ordered list of line items.
    pub fn has_line_items(self) -> bool {
        matches!(self, DocumentType::Invoice)
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for DocumentType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocumentType::ALL
            .into_iter()
            .find(|doc_type| doc_type.tag() == s)
            .ok_or_else(|| ValidationError::UnknownDocumentType(s.to_string()))
    }
}
