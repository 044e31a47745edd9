use crate::error::{AppError, AppResult};
use crate::state::AppState;
use applepad_core::prompt::PromptBuilder;
use applepad_core::protocol::{GenerateRequest, GenerateResponse};
use axum::{body::Bytes, extract::State, Json};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

/// The prompt to render, and a description of how it was obtained.
fn resolve_prompt(state: &AppState, req: &GenerateRequest) -> AppResult<(String, serde_json::Value)> {
    let scene = req.scene.as_deref().unwrap_or(&state.scene);

    if let Some(prompt) = req.prompt.as_deref().map(str::trim).filter(|p| !p.is_empty()) {
        let resolved = json!({ "source": "request", "style": req.style, "scene": scene });
        return Ok((prompt.to_string(), resolved));
    }

    match (&req.style, &req.params) {
        (Some(style), Some(params)) => {
            let library = state.library.get();
            let prompt = PromptBuilder::new(scene).build(style, params, library);
            let source = match library {
                Some(lib) if lib.contains_style(style) => "library",
                _ => "generic",
            };
            let resolved = json!({ "source": source, "style": style, "scene": scene });
            Ok((prompt, resolved))
        }
        _ => Err(AppError::Validation("Missing 'prompt'".to_string())),
    }
}

/// `POST /generate-image`. Unparsable bodies are treated as empty.
pub async fn generate_image(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> AppResult<Json<GenerateResponse>> {
    let req: GenerateRequest = serde_json::from_slice(&body).unwrap_or_default();
    let (prompt, resolved) = resolve_prompt(&state, &req)?;
    info!("Received prompt ({}): {}", state.images.label(), prompt);

    let image = state.images.produce(&state.http, &prompt).await?;

    Ok(Json(GenerateResponse {
        prompt: Some(prompt),
        image_base64: Some(STANDARD.encode(image)),
        resolved: Some(resolved),
        ..Default::default()
    }))
}
