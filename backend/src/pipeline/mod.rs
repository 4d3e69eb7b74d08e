//! # Generation pipeline
//!
//! One request runs two strictly sequential outbound calls:
//!
//! 1. [`generator`]: the prompt built by [`prompt`] goes to a chat-completion
//!    service, which answers with LaTeX source.
//! 2. [`compiler`]: the source goes to a remote LaTeX compiler, which answers
//!    with the PDF bytes. Transient compile failures are retried per [`retry`].
//!
//! The [`Orchestrator`] holds no per-request state; it is shared by all actix
//! workers behind `web::Data`.

pub mod compiler;
pub mod generator;
pub mod prompt;
pub mod retry;

use crate::config::ServerConfig;
use crate::error::GenerateError;
use crate::pipeline::compiler::{DocumentCompiler, RemoteCompiler};
use crate::pipeline::generator::{ChatCompletionClient, MarkupGenerator};
use crate::pipeline::retry::RetryPolicy;
use common::requests::DocumentRequest;
use common::transport::is_pdf;
use log::{debug, info, warn};
use std::sync::Arc;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Output of one successful run. Built per request and never cached.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationResult {
    pub markup_source: String,
    pub document_binary: Vec<u8>,
}

#[derive(Clone)]
pub struct Orchestrator {
    generator: Arc<dyn MarkupGenerator>,
    compiler: Arc<dyn DocumentCompiler>,
    retry: RetryPolicy,
    deadline: Duration,
}

impl Orchestrator {
    pub fn new(
        generator: Arc<dyn MarkupGenerator>,
        compiler: Arc<dyn DocumentCompiler>,
        retry: RetryPolicy,
        deadline: Duration,
    ) -> Self {
        Self {
            generator,
            compiler,
            retry,
            deadline,
        }
    }

    pub fn from_config(config: &ServerConfig) -> Result<Self, reqwest::Error> {
        let generator = ChatCompletionClient::new(
            config.generation_url.as_str(),
            config.api_key.as_str(),
            config.model.as_str(),
            config.generation_timeout(),
        )?
        .with_sampling(config.temperature, config.max_tokens);
        let compiler = RemoteCompiler::new(
            config.compile_url.as_str(),
            config.compiler.as_str(),
            config.compile_timeout(),
        )?;

        Ok(Self::new(
            Arc::new(generator),
            Arc::new(compiler),
            RetryPolicy::new(config.compile_retries, config.retry_backoff()),
            config.request_timeout(),
        ))
    }

    /// Generates and compiles one document under the overall deadline.
    pub async fn run(
        &self,
        request: &DocumentRequest,
        request_id: Uuid,
    ) -> Result<GenerationResult, GenerateError> {
        match tokio::time::timeout(self.deadline, self.chain(request, request_id)).await {
            Ok(result) => result,
            Err(_) => {
                warn!("[{}] deadline of {:?} elapsed", request_id, self.deadline);
                Err(GenerateError::Timeout(self.deadline))
            }
        }
    }

    async fn chain(
        &self,
        request: &DocumentRequest,
        request_id: Uuid,
    ) -> Result<GenerationResult, GenerateError> {
        let prompt = prompt::build(request);
        debug!("[{}] prompt is {} bytes", request_id, prompt.len());

        let started = Instant::now();
        let markup_source = self.generator.generate(&prompt).await?;
        info!(
            "[{}] generated {} bytes of LaTeX in {:?}",
            request_id,
            markup_source.len(),
            started.elapsed()
        );

        let started = Instant::now();
        let document_binary = self
            .retry
            .run("compile", || self.compiler.compile(&markup_source))
            .await?;

        if !is_pdf(&document_binary) {
            warn!(
                "[{}] compile returned {} bytes without a PDF header",
                request_id,
                document_binary.len()
            );
            return Err(GenerateError::CompileFailed {
                status: None,
                reason: "compile service did not return a PDF".to_string(),
            });
        }
        info!(
            "[{}] compiled {} byte PDF in {:?}",
            request_id,
            document_binary.len(),
            started.elapsed()
        );

        Ok(GenerationResult {
            markup_source,
            document_binary,
        })
    }
}
