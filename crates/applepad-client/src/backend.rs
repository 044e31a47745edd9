use crate::error::{ClientError, ClientResult};
use applepad_core::config::EndpointConfig;
use applepad_core::outcome::{GenerationOutcome, RefinementOutcome};
use applepad_core::protocol::{GenerateRequest, GenerateResponse, RefineRequest, RefineResponse};
use applepad_core::style::{LibraryState, StyleLibrary};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, warn};

/// Talks to the image generation backend.
///
/// Every request is bounded by the configured timeout. The public calls never
/// fail: transport errors, bad statuses and `error` bodies come back as
/// [`GenerationOutcome::Failed`].
#[derive(Clone)]
pub struct BackendClient {
    http: Client,
    generate_url: String,
    refine_url: String,
    library_url: String,
}

impl BackendClient {
    pub fn new(endpoints: &EndpointConfig) -> ClientResult<Self> {
        let http = Client::builder()
            .timeout(endpoints.request_timeout())
            .build()?;
        Ok(Self {
            http,
            generate_url: endpoints.generate_url(),
            refine_url: endpoints.refine_url(),
            library_url: endpoints.library_url(),
        })
    }

    pub async fn generate(&self, request: &GenerateRequest) -> GenerationOutcome {
        info!(
            "Requesting image for style {}",
            request.style.as_deref().unwrap_or("<prompt only>")
        );
        match self.try_generate(request).await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!("Image generation failed: {}", e);
                GenerationOutcome::Failed(e.to_string())
            }
        }
    }

    async fn try_generate(&self, request: &GenerateRequest) -> ClientResult<GenerationOutcome> {
        let resp = self.http.post(&self.generate_url).json(request).send().await?;
        let body: GenerateResponse = read_json(resp).await?;
        interpret_generation(body)
    }

    pub async fn refine(&self, request: &RefineRequest) -> RefinementOutcome {
        info!(
            "Requesting {} refinement of {}",
            request.refinement_type, request.style
        );
        match self.try_refine(request).await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!("Refinement failed: {}", e);
                RefinementOutcome::failed(e.to_string())
            }
        }
    }

    async fn try_refine(&self, request: &RefineRequest) -> ClientResult<RefinementOutcome> {
        let resp = self.http.post(&self.refine_url).json(request).send().await?;
        let body: RefineResponse = read_json(resp).await?;
        if let Some(err) = body.error {
            return Err(ClientError::Backend(err));
        }

        let outcome = match body.image_base64.filter(|s| !s.is_empty()) {
            Some(b64) => GenerationOutcome::Image {
                bytes: STANDARD.decode(b64)?,
                prompt: body.refinement_prompt.clone(),
            },
            None => GenerationOutcome::Empty,
        };
        Ok(RefinementOutcome {
            outcome,
            refinement_prompt: body.refinement_prompt,
            delta: body.delta,
        })
    }

    /// Fetches the style library once. Failure leaves the session on the
    /// generic prompt fallback.
    pub async fn fetch_style_library(&self) -> LibraryState {
        let result = async {
            let resp = self.http.get(&self.library_url).send().await?;
            read_json::<StyleLibrary>(resp).await
        }
        .await;

        match result {
            Ok(library) => {
                info!(
                    "Style library loaded from {} ({} styles)",
                    self.library_url,
                    library.len()
                );
                LibraryState::Loaded(library)
            }
            Err(e) => {
                warn!("Style library unavailable, prompts will use the fallback: {}", e);
                LibraryState::Failed(e.to_string())
            }
        }
    }
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> ClientResult<T> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ClientError::Status {
            status: status.as_u16(),
            body,
        });
    }
    Ok(resp.json().await?)
}

/// Reads a generation response body the way the result screen does: an
/// inline image wins over a URL, which wins over plain text.
pub fn interpret_generation(body: GenerateResponse) -> ClientResult<GenerationOutcome> {
    if let Some(err) = body.error {
        return Err(ClientError::Backend(err));
    }
    if let Some(b64) = body.image_base64.filter(|s| !s.is_empty()) {
        let bytes = STANDARD.decode(b64)?;
        debug!("Decoded {} image bytes", bytes.len());
        return Ok(GenerationOutcome::Image {
            bytes,
            prompt: body.prompt,
        });
    }
    if let Some(url) = body.image_url.filter(|s| !s.is_empty()) {
        return Ok(GenerationOutcome::ImageUrl(url));
    }
    Ok(match body.result {
        Some(text) => GenerationOutcome::Text(text),
        None => GenerationOutcome::Empty,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_image_wins() {
        let body = GenerateResponse {
            image_base64: Some("AQID".to_string()),
            image_url: Some("http://x/img.png".to_string()),
            prompt: Some("p".to_string()),
            ..Default::default()
        };
        assert_eq!(
            interpret_generation(body).unwrap(),
            GenerationOutcome::Image {
                bytes: vec![1, 2, 3],
                prompt: Some("p".to_string())
            }
        );
    }

    #[test]
    fn error_field_fails_even_with_image() {
        let body = GenerateResponse {
            image_base64: Some("AQID".to_string()),
            error: Some("quota".to_string()),
            ..Default::default()
        };
        assert!(matches!(interpret_generation(body), Err(ClientError::Backend(_))));
    }

    #[test]
    fn text_and_empty_bodies() {
        let text = GenerateResponse {
            result: Some("no picture today".to_string()),
            ..Default::default()
        };
        assert_eq!(
            interpret_generation(text).unwrap(),
            GenerationOutcome::Text("no picture today".to_string())
        );
        assert_eq!(
            interpret_generation(GenerateResponse::default()).unwrap(),
            GenerationOutcome::Empty
        );
    }

    #[test]
    fn bad_base64_is_an_error() {
        let body = GenerateResponse {
            image_base64: Some("***".to_string()),
            ..Default::default()
        };
        assert!(matches!(interpret_generation(body), Err(ClientError::Decode(_))));
    }
}
