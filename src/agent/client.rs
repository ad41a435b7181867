use std::path::Path;
use std::time::Duration;

use reqwest::multipart;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::models::model_profile::{ModelCatalog, ModelCatalogResponse};
use crate::models::task::{TaskCatalog, TaskCatalogResponse};
use crate::session::Submission;

/// Catalog reads are quick; the agent leg can sit behind a slow model call.
const CATALOG_TIMEOUT: Duration = Duration::from_secs(15);
const SUBMIT_TIMEOUT: Duration = Duration::from_secs(300);

/// HTTP client for the remote PR Agent service.
#[derive(Debug, Clone)]
pub struct AgentClient {
    http: reqwest::Client,
}

impl AgentClient {
    pub fn new() -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::Internal(format!("HTTP client error: {e}")))?;
        Ok(Self { http })
    }

    pub async fn fetch_tasks(&self, base_url: &str) -> AppResult<TaskCatalog> {
        let url = endpoint(base_url, "/api/pr-tasks");
        let resp = self
            .http
            .get(&url)
            .timeout(CATALOG_TIMEOUT)
            .send()
            .await
            .map_err(|e| AppError::Transport(format!("HTTP request error: {e}")))?;

        if !resp.status().is_success() {
            return Err(AppError::Transport(format!("HTTP {}", resp.status())));
        }

        let body: TaskCatalogResponse = resp
            .json()
            .await
            .map_err(|e| AppError::Agent(format!("JSON parse error: {e}")))?;
        Ok(body.tasks)
    }

    pub async fn fetch_models(&self, base_url: &str) -> AppResult<ModelCatalog> {
        let url = endpoint(base_url, "/api/models");
        let resp = self
            .http
            .get(&url)
            .timeout(CATALOG_TIMEOUT)
            .send()
            .await
            .map_err(|e| AppError::Transport(format!("HTTP request error: {e}")))?;

        if !resp.status().is_success() {
            return Err(AppError::Transport(format!("HTTP {}", resp.status())));
        }

        let body: ModelCatalogResponse = resp
            .json()
            .await
            .map_err(|e| AppError::Agent(format!("JSON parse error: {e}")))?;
        Ok(body.models)
    }

    /// Dispatch one submission as a multipart POST and return the parsed
    /// JSON body. There is no retry and no way to abort once sent.
    pub async fn submit(&self, base_url: &str, submission: &Submission) -> AppResult<Value> {
        let url = endpoint(base_url, "/api/pr-agent");

        let mut form = multipart::Form::new()
            .text("query", submission.query.clone())
            .text("task_type", submission.task_type.clone());

        if let Some(path) = submission.file.as_deref() {
            form = form.part("file", file_part(path).await?);
        }

        let resp = self
            .http
            .post(&url)
            .multipart(form)
            .timeout(SUBMIT_TIMEOUT)
            .send()
            .await
            .map_err(|e| AppError::Transport(format!("HTTP request error: {e}")))?;

        if !resp.status().is_success() {
            return Err(AppError::Agent(format!(
                "Failed to get response from AI agent (HTTP {})",
                resp.status()
            )));
        }

        resp.json::<Value>()
            .await
            .map_err(|e| AppError::Agent(format!("JSON parse error: {e}")))
    }
}

async fn file_part(path: &Path) -> AppResult<multipart::Part> {
    let bytes = tokio::fs::read(path).await?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("attachment")
        .to_string();
    Ok(multipart::Part::bytes(bytes).file_name(file_name))
}

fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}
