use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const MSG_SUCCESS: &str =
    "Thank you! Your responses have been recorded. Here is the living room design that fits your taste...";
pub const MSG_ERROR: &str =
    "Thank you! Your responses have been recorded, but there was an error generating the image.";
pub const MSG_NO_IMAGE: &str =
    "Thank you! Your responses have been recorded, but no image was returned from the design server.";

/// What the image backend gave back for one request.
///
/// Transport problems, bad statuses and `error` bodies all end up as
/// `Failed`; nothing here is fatal to the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GenerationOutcome {
    Image {
        bytes: Vec<u8>,
        prompt: Option<String>,
    },
    ImageUrl(String),
    Text(String),
    Empty,
    Failed(String),
}

impl GenerationOutcome {
    pub fn has_image(&self) -> bool {
        matches!(
            self,
            GenerationOutcome::Image { .. } | GenerationOutcome::ImageUrl(_)
        )
    }

    pub fn image_bytes(&self) -> Option<&[u8]> {
        match self {
            GenerationOutcome::Image { bytes, .. } => Some(bytes),
            _ => None,
        }
    }

    /// Message shown to the participant.
    pub fn user_message(&self) -> &'static str {
        match self {
            GenerationOutcome::Image { .. } | GenerationOutcome::ImageUrl(_) => MSG_SUCCESS,
            GenerationOutcome::Text(_) | GenerationOutcome::Empty => MSG_NO_IMAGE,
            GenerationOutcome::Failed(_) => MSG_ERROR,
        }
    }

    /// Text worth keeping in the trial record.
    pub fn result_text(&self) -> Option<String> {
        match self {
            GenerationOutcome::Image { prompt, .. } => prompt.clone(),
            GenerationOutcome::ImageUrl(url) => Some(url.clone()),
            GenerationOutcome::Text(text) => Some(text.clone()),
            GenerationOutcome::Empty => None,
            GenerationOutcome::Failed(reason) => Some(format!("error: {}", reason)),
        }
    }
}

/// Result of a refinement round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefinementOutcome {
    pub outcome: GenerationOutcome,
    pub refinement_prompt: Option<String>,
    pub delta: BTreeMap<String, f64>,
}

impl RefinementOutcome {
    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            outcome: GenerationOutcome::Failed(reason.into()),
            refinement_prompt: None,
            delta: BTreeMap::new(),
        }
    }
}
