//! Read-only endpoints: liveness and the document type catalogue.

use actix_web::web::{get, scope};
use actix_web::{HttpResponse, Scope};
use common::model::document::DocumentType;
use common::responses::{DocumentTypeInfo, HealthResponse};

const API_PATH: &str = "/api";

/// *   **`GET /api/health`**: `{ status, service, version }`.
/// *   **`GET /api/document-types`**: every document type with its label,
///     structured fields and whether it takes line items.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/health", get().to(health))
        .route("/document-types", get().to(document_types))
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn document_types() -> HttpResponse {
    let catalogue: Vec<DocumentTypeInfo> = DocumentType::ALL
        .into_iter()
        .map(DocumentTypeInfo::from)
        .collect();
    HttpResponse::Ok().json(catalogue)
}
