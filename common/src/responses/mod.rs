use crate::model::document::{DocumentType, FieldKind};
use crate::transport::{self, TransportError};
use serde::{Deserialize, Serialize};

/// Success payload of `POST /api/generate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// The LaTeX source returned by the generation service.
    pub latex: String,
    /// The compiled PDF, standard base64.
    pub pdf: String,
}

impl GenerateResponse {
    pub fn new(latex: impl Into<String>, document: &[u8]) -> Self {
        Self {
            latex: latex.into(),
            pdf: transport::encode_document(document),
        }
    }

    /// Decodes `pdf` and checks it really is a PDF.
    pub fn document(&self) -> Result<Vec<u8>, TransportError> {
        transport::decode_pdf(&self.pdf)
    }
}

/// Machine readable failure category carried by every error response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    InvalidRequest,
    UpstreamAuth,
    GenerationEmpty,
    CompileFailed,
    UpstreamError,
    NetworkFailure,
    Timeout,
}

/// Body of every non-2xx response from the backend API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: ErrorCode,
    pub status: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldInfo {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
}

/// Catalogue entry returned by `GET /api/document-types`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentTypeInfo {
    pub tag: String,
    pub label: String,
    pub fields: Vec<FieldInfo>,
    pub line_items: bool,
}

impl From<DocumentType> for DocumentTypeInfo {
    fn from(doc_type: DocumentType) -> Self {
        Self {
            tag: doc_type.tag().to_string(),
            label: doc_type.label().to_string(),
            fields: doc_type
                .fields()
                .iter()
                .map(|spec| FieldInfo {
                    name: spec.name.to_string(),
                    label: spec.label.to_string(),
                    kind: spec.kind,
                })
                .collect(),
            line_items: doc_type.has_line_items(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn error_code_wire_names() {
        let body = ErrorResponse {
            error: "boom".into(),
            code: ErrorCode::GenerationEmpty,
            status: 502,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"error": "boom", "code": "GENERATION_EMPTY", "status": 502})
        );
    }

    #[test]
    fn invoice_catalogue_entry() {
        let info = DocumentTypeInfo::from(DocumentType::Invoice);
        assert_eq!(info.tag, "invoice");
        assert!(info.line_items);
        let names: Vec<_> = info.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["seller", "client", "invoice_number", "date"]);
        assert_eq!(info.fields[3].kind, FieldKind::Date);
    }
}
