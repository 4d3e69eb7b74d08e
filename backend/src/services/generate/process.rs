use crate::error::GenerateError;
use crate::pipeline::Orchestrator;
use actix_web::{web, HttpResponse};
use common::requests::GenerateRequest;
use common::responses::GenerateResponse;
use log::{error, info, warn};
use uuid::Uuid;

/// Handles `POST /api/generate`.
///
/// Validation runs before any outbound call. If the client goes away the
/// future is dropped and the in-flight upstream call with it.
pub async fn process(
    orchestrator: web::Data<Orchestrator>,
    body: web::Json<GenerateRequest>,
) -> Result<HttpResponse, GenerateError> {
    let request_id = Uuid::new_v4();

    let request = body.into_inner().validate().map_err(|e| {
        warn!("[{}] rejected: {}", request_id, e);
        GenerateError::from(e)
    })?;
    info!(
        "[{}] generating {} ({} chars of free text, {} line items)",
        request_id,
        request.document_type,
        request.free_text.chars().count(),
        request.fields.invoice_items.len()
    );

    match orchestrator.run(&request, request_id).await {
        Ok(result) => Ok(HttpResponse::Ok().json(GenerateResponse::new(
            result.markup_source,
            &result.document_binary,
        ))),
        Err(e) => {
            error!("[{}] generation failed: {}", request_id, e);
            Err(e)
        }
    }
}
