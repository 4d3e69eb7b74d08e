//! # Generate Service Module
//!
//! The single endpoint that turns a form submission into a LaTeX source and a
//! compiled PDF.
//!
//! ## Sub-modules:
//! - `process`: validates the body and runs the generation pipeline.

mod process;

use actix_web::web::{post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/generate";

/// Configures and returns the Actix `Scope` for document generation.
///
/// # Registered Routes:
///
/// *   **`POST /api/generate`**:
///     - **Handler**: `process::process`
///     - **Description**: Expects a JSON `GenerateRequest` (`docType`, `prompt`,
///       optional `fields`). Answers `200 { latex, pdf }` where `pdf` is the
///       base64 encoded document, or an `ErrorResponse` with a 4xx/5xx status.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", post().to(process::process))
}
