use crate::error::AppResult;
use crate::state::AppState;
use applepad_core::protocol::{RefineRequest, RefineResponse};
use applepad_core::refine::{compute_deltas, delta_map, refinement_prompt};
use axum::{body::Bytes, extract::State, Json};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::sync::Arc;
use tracing::info;

/// `POST /refine`. The prompt names only the surfaced changes; `delta`
/// carries every key. Malformed bodies answer 400 with a JSON error.
pub async fn refine(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> AppResult<Json<RefineResponse>> {
    let req: RefineRequest = serde_json::from_slice(&body)?;
    let deltas = compute_deltas(&req.p_0, &req.p_1);
    let prompt = refinement_prompt(
        &req.style,
        req.refinement_type,
        &deltas,
        state.delta_threshold,
    );
    info!(
        "Refining {} on {} ({} bytes of prior image)",
        req.style,
        req.refinement_type,
        req.img_0.len()
    );

    let image = state.images.produce(&state.http, &prompt).await?;

    Ok(Json(RefineResponse {
        image_base64: Some(STANDARD.encode(image)),
        refinement_prompt: Some(prompt),
        delta: delta_map(&deltas),
        error: None,
    }))
}
