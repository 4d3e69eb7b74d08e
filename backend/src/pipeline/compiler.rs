//! Step two: compile the markup on a remote LaTeX service.

use crate::error::GenerateError;
use async_trait::async_trait;
use log::warn;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

#[async_trait]
pub trait DocumentCompiler: Send + Sync {
    /// Returns the raw response body of a successful compile.
    async fn compile(&self, markup: &str) -> Result<Vec<u8>, GenerateError>;
}

#[derive(Serialize)]
struct CompileRequest<'a> {
    text: &'a str,
    compiler: &'a str,
}

#[derive(Debug, Clone)]
pub struct RemoteCompiler {
    client: Client,
    url: String,
    compiler: String,
}

impl RemoteCompiler {
    pub fn new(
        url: impl Into<String>,
        compiler: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            url: url.into(),
            compiler: compiler.into(),
        })
    }
}

#[async_trait]
impl DocumentCompiler for RemoteCompiler {
    async fn compile(&self, markup: &str) -> Result<Vec<u8>, GenerateError> {
        let response = self
            .client
            .post(&self.url)
            .json(&CompileRequest {
                text: markup,
                compiler: &self.compiler,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // The service answers with the LaTeX log on errors.
            let log_tail = response.text().await.unwrap_or_default();
            warn!(
                "compile service answered {}: {}",
                status,
                tail(&log_tail, 20)
            );
            return Err(GenerateError::CompileFailed {
                status: Some(status.as_u16()),
                reason: format!("compile service answered HTTP {}", status.as_u16()),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}

/// Last `lines` lines of a log.
fn tail(log: &str, lines: usize) -> String {
    let all: Vec<&str> = log.lines().collect();
    all[all.len().saturating_sub(lines)..].join("\n")
}
