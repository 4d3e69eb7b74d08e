//! Endpoint tests for the generation API.
//!
//! The outbound services are replaced by the stubs in `pipeline::stubs` or by
//! a loopback server, so these run without network access.

use crate::error::GenerateError;
use crate::pipeline::generator::ChatCompletionClient;
use crate::pipeline::retry::RetryPolicy;
use crate::pipeline::stubs::{answering_server, StubCompiler, StubGenerator, TINY_PDF};
use crate::pipeline::Orchestrator;
use crate::services;
use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use common::responses::{DocumentTypeInfo, ErrorCode, ErrorResponse, GenerateResponse, HealthResponse};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

macro_rules! test_app {
    ($orchestrator:expr) => {
        test::init_service(
            App::new()
                .app_data(services::json_config(16 * 1024))
                .app_data(web::Data::new($orchestrator))
                .service(services::generate::configure_routes())
                .service(services::meta::configure_routes()),
        )
        .await
    };
}

fn orchestrator(generator: &Arc<StubGenerator>, compiler: &Arc<StubCompiler>) -> Orchestrator {
    Orchestrator::new(
        generator.clone(),
        compiler.clone(),
        RetryPolicy::NONE,
        Duration::from_secs(5),
    )
}

fn generate(body: serde_json::Value) -> actix_web::test::TestRequest {
    test::TestRequest::post().uri("/api/generate").set_json(body)
}

#[actix_web::test]
async fn generate_returns_markup_and_base64_pdf() {
    let generator = Arc::new(StubGenerator::answering(Ok("X".into())));
    let compiler = Arc::new(StubCompiler::pdf());
    let app = test_app!(orchestrator(&generator, &compiler));

    let resp = test::call_service(
        &app,
        generate(json!({"docType": "letter", "prompt": "thank the team"})).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: GenerateResponse = test::read_body_json(resp).await;
    assert_eq!(body.latex, "X");
    assert_eq!(body.document().unwrap(), TINY_PDF);
    assert_eq!(generator.calls(), 1);
    assert_eq!(compiler.calls(), 1);
}

#[actix_web::test]
async fn invoice_fields_reach_the_prompt() {
    let generator = Arc::new(StubGenerator::answering(Ok("X".into())));
    let compiler = Arc::new(StubCompiler::pdf());
    let app = test_app!(orchestrator(&generator, &compiler));

    let resp = test::call_service(
        &app,
        generate(json!({
            "docType": "invoice",
            "prompt": "",
            "fields": {
                "seller": "ACME",
                "invoice_items": [
                    {"desc": "Design", "qty": 2, "price": 10},
                    {"desc": "Hosting", "qty": 1, "price": 5}
                ]
            }
        }))
        .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let prompt = generator.last_prompt.lock().unwrap().clone().unwrap();
    assert!(prompt.user.contains("- Your / Company Name: ACME\n"));
    assert!(prompt.user.contains("Total: 25.00\n"));
}

#[actix_web::test]
async fn non_pdf_compile_output_is_rejected() {
    let generator = Arc::new(StubGenerator::answering(Ok("X".into())));
    let compiler = Arc::new(StubCompiler::answering(vec![Ok(b"Fatal error".to_vec())]));
    let app = test_app!(orchestrator(&generator, &compiler));

    let resp = test::call_service(&app, generate(json!({"docType": "cv"})).to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.code, ErrorCode::CompileFailed);
    assert_eq!(body.status, 502);
}

#[actix_web::test]
async fn empty_generation_never_compiles() {
    let generator = Arc::new(StubGenerator::answering(Err(GenerateError::GenerationEmpty)));
    let compiler = Arc::new(StubCompiler::pdf());
    let app = test_app!(orchestrator(&generator, &compiler));

    let resp = test::call_service(&app, generate(json!({"docType": "custom"})).to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.code, ErrorCode::GenerationEmpty);
    assert_eq!(compiler.calls(), 0);
}

#[actix_web::test]
async fn rejected_credentials_are_reported() {
    let (url, server) = answering_server(401, b"{\"error\":\"invalid api key\"}");
    let generator =
        ChatCompletionClient::new(url, "wrong-key", "test-model", Duration::from_secs(5)).unwrap();
    let compiler = Arc::new(StubCompiler::pdf());
    let app = test_app!(Orchestrator::new(
        Arc::new(generator),
        compiler.clone(),
        RetryPolicy::NONE,
        Duration::from_secs(5),
    ));

    let resp = test::call_service(&app, generate(json!({"docType": "letter"})).to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.code, ErrorCode::UpstreamAuth);
    assert_eq!(compiler.calls(), 0);
    server.stop(true).await;
}

#[actix_web::test]
async fn invalid_requests_make_no_outbound_call() {
    let bodies = [
        json!({"docType": "memo", "prompt": "x"}),
        json!({"docType": "cv", "fields": {"seller": "ACME"}}),
        json!({"docType": "letter", "fields": {"invoice_items": [{"desc": "a", "qty": 1, "price": 1}]}}),
        json!({"docType": "invoice", "fields": {"invoice_items": [{"desc": "a", "qty": -1, "price": 1}]}}),
        json!({"prompt": "no type"}),
        json!({"docType": "cv", "fields": {"title": 7}}),
    ];

    for body in bodies {
        let generator = Arc::new(StubGenerator::answering(Ok("X".into())));
        let compiler = Arc::new(StubCompiler::pdf());
        let app = test_app!(orchestrator(&generator, &compiler));

        let resp = test::call_service(&app, generate(body.clone()).to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{body}");

        let error: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(error.code, ErrorCode::InvalidRequest, "{body}");
        assert_eq!(generator.calls(), 0, "{body}");
    }
}

#[actix_web::test]
async fn malformed_json_gets_the_error_body() {
    let generator = Arc::new(StubGenerator::answering(Ok("X".into())));
    let compiler = Arc::new(StubCompiler::pdf());
    let app = test_app!(orchestrator(&generator, &compiler));

    let req = test::TestRequest::post()
        .uri("/api/generate")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"docType\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let error: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(error.code, ErrorCode::InvalidRequest);
}

#[actix_web::test]
async fn slow_upstream_hits_the_deadline() {
    let generator = Arc::new(
        StubGenerator::answering(Ok("X".into())).slow(Duration::from_millis(500)),
    );
    let compiler = Arc::new(StubCompiler::pdf());
    let app = test_app!(Orchestrator::new(
        generator.clone(),
        compiler.clone(),
        RetryPolicy::NONE,
        Duration::from_millis(20),
    ));

    let resp = test::call_service(&app, generate(json!({"docType": "letter"})).to_request()).await;
    assert_eq!(resp.status(), StatusCode::GATEWAY_TIMEOUT);

    let error: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(error.code, ErrorCode::Timeout);
}

#[actix_web::test]
async fn health_reports_service_and_version() {
    let generator = Arc::new(StubGenerator::answering(Ok("X".into())));
    let compiler = Arc::new(StubCompiler::pdf());
    let app = test_app!(orchestrator(&generator, &compiler));

    let resp = test::call_service(&app, test::TestRequest::get().uri("/api/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let health: HealthResponse = test::read_body_json(resp).await;
    assert_eq!(health.status, "ok");
    assert_eq!(health.service, "pdfwizard-backend");
    assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
}

#[actix_web::test]
async fn catalogue_lists_every_document_type() {
    let generator = Arc::new(StubGenerator::answering(Ok("X".into())));
    let compiler = Arc::new(StubCompiler::pdf());
    let app = test_app!(orchestrator(&generator, &compiler));

    let req = test::TestRequest::get().uri("/api/document-types").to_request();
    let catalogue: Vec<DocumentTypeInfo> = test::call_and_read_body_json(&app, req).await;

    let tags: Vec<_> = catalogue.iter().map(|t| t.tag.as_str()).collect();
    assert_eq!(tags, vec!["cover_letter", "letter", "cv", "invoice", "custom"]);
    let with_items: Vec<_> = catalogue
        .iter()
        .filter(|t| t.line_items)
        .map(|t| t.tag.as_str())
        .collect();
    assert_eq!(with_items, vec!["invoice"]);
}
