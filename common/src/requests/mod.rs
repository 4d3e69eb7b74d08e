use crate::model::document::DocumentType;
use crate::model::fields::StructuredFields;
use crate::model::invoice::is_valid_amount;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Request payload for `POST /api/generate`.
///
/// `doc_type` stays a plain string on the wire so that an unknown tag can be
/// reported as a validation error by the backend instead of a generic JSON
/// decoding failure. Use [`GenerateRequest::validate`] to obtain the typed
/// [`DocumentRequest`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub doc_type: String,
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub fields: StructuredFields,
}

/// A generation request whose document type and structured fields were checked.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentRequest {
    pub document_type: DocumentType,
    pub free_text: String,
    pub fields: StructuredFields,
}

/// Reasons a request is rejected before any outbound call is made.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("unknown document type {0:?}")]
    UnknownDocumentType(String),

    #[error("field '{field}' does not belong to document type '{document_type}'")]
    UnexpectedField {
        document_type: DocumentType,
        field: String,
    },

    #[error("line items are only accepted for invoices, not '{0}'")]
    UnexpectedLineItems(DocumentType),

    #[error("line item {index} has an invalid {field}: must be a number between 0 and 1000000000")]
    InvalidLineItem { index: usize, field: &'static str },

    #[error("malformed request body: {0}")]
    MalformedBody(String),
}

impl GenerateRequest {
    pub fn new(document_type: DocumentType, prompt: impl Into<String>, fields: StructuredFields) -> Self {
        Self {
            doc_type: document_type.tag().to_string(),
            prompt: prompt.into(),
            fields,
        }
    }

    /// Checks the tag and the structured fields against the tag's field set.
    pub fn validate(self) -> Result<DocumentRequest, ValidationError> {
        let document_type: DocumentType = self.doc_type.trim().parse()?;

        if let Some(field) = self
            .fields
            .values
            .keys()
            .find(|name| document_type.field(name).is_none())
        {
            return Err(ValidationError::UnexpectedField {
                document_type,
                field: field.clone(),
            });
        }

        if !self.fields.invoice_items.is_empty() && !document_type.has_line_items() {
            return Err(ValidationError::UnexpectedLineItems(document_type));
        }

        for (index, item) in self.fields.invoice_items.iter().enumerate() {
            if !is_valid_amount(item.quantity) {
                return Err(ValidationError::InvalidLineItem { index, field: "qty" });
            }
            if !is_valid_amount(item.unit_price) {
                return Err(ValidationError::InvalidLineItem { index, field: "price" });
            }
        }

        Ok(DocumentRequest {
            document_type,
            free_text: self.prompt,
            fields: self.fields,
        })
    }
}
