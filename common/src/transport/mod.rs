//! Transport encoding of the compiled document.
//!
//! The backend ships the PDF inside a JSON body as standard (padded) base64.
//! Encoding followed by decoding must reproduce the compile service's bytes
//! exactly; nothing here trims, normalizes or re-encodes the document itself.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use thiserror::Error;

/// Every PDF file starts with this header.
pub const PDF_MAGIC: &[u8] = b"%PDF-";

/// MIME type used for the preview blob.
pub const PDF_MIME: &str = "application/pdf";

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("payload is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("payload is not a PDF document")]
    NotPdf,
}

pub fn is_pdf(bytes: &[u8]) -> bool {
    bytes.starts_with(PDF_MAGIC)
}

pub fn encode_document(bytes: &[u8]) -> String {
    BASE64.encode(bytes)
}

pub fn decode_document(encoded: &str) -> Result<Vec<u8>, TransportError> {
    Ok(BASE64.decode(encoded.trim())?)
}

/// Like [`decode_document`] but also rejects anything without a PDF header.
pub fn decode_pdf(encoded: &str) -> Result<Vec<u8>, TransportError> {
    let bytes = decode_document(encoded)?;
    if !is_pdf(&bytes) {
        return Err(TransportError::NotPdf);
    }
    Ok(bytes)
}
