//! Types shared by the PDF Wizard frontend and backend.
//!
//! - `model`: document types, their structured fields and invoice line items.
//! - `requests`: the body of `POST /api/generate` and its validation.
//! - `responses`: success, error, health and catalogue payloads.
//! - `transport`: the base64 contract used to ship the compiled PDF.

pub mod model;
pub mod requests;
pub mod responses;
pub mod transport;
