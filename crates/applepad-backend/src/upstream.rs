//! Where the pixels come from: a hosted inference endpoint, or a file on disk.

use crate::error::{AppError, AppResult};
use applepad_core::protocol::{InferenceParameters, InferenceRequest};
use reqwest::Client;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Upstream {
    pub url: String,
    pub token: Option<String>,
}

impl Upstream {
    /// Posts `prompt` and returns the raw image bytes of a 200 answer.
    pub async fn render(&self, http: &Client, prompt: &str) -> AppResult<Vec<u8>> {
        let body = InferenceRequest {
            inputs: prompt.to_string(),
            parameters: InferenceParameters::default(),
        };

        let mut request = http.post(&self.url).json(&body);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AppError::Upstream(text));
        }
        let bytes = response.bytes().await?;
        debug!("Upstream returned {} bytes", bytes.len());
        Ok(bytes.to_vec())
    }
}

#[derive(Debug, Clone)]
pub enum ImageSource {
    Inference(Upstream),
    Placeholder(PathBuf),
}

impl ImageSource {
    pub fn new(upstream: Option<Upstream>, placeholder: &Path) -> Self {
        match upstream {
            Some(u) => ImageSource::Inference(u),
            None => ImageSource::Placeholder(placeholder.to_path_buf()),
        }
    }

    pub async fn produce(&self, http: &Client, prompt: &str) -> AppResult<Vec<u8>> {
        match self {
            ImageSource::Inference(upstream) => upstream.render(http, prompt).await,
            ImageSource::Placeholder(path) => {
                tokio::fs::read(path).await.map_err(AppError::Placeholder)
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ImageSource::Inference(_) => "inference",
            ImageSource::Placeholder(_) => "placeholder",
        }
    }
}
