use crate::params::{NormalizedParams, ParamGroup};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Body of `POST /generate-image`.
///
/// Callers either send a finished `prompt`, or a `style` plus `params` and let
/// the backend assemble the prompt itself.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct GenerateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<NormalizedParams>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scene: Option<String>,
}

/// Every field is optional; an `error` field signals failure even on a 2xx.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct GenerateResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_base64: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Body of `POST /refine`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RefineRequest {
    pub style: String,
    pub p_0: NormalizedParams,
    pub p_1: NormalizedParams,
    /// Base64 of the image being refined.
    pub img_0: String,
    pub refinement_type: ParamGroup,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct RefineResponse {
    #[serde(default)]
    pub image_base64: Option<String>,
    #[serde(default)]
    pub refinement_prompt: Option<String>,
    #[serde(default)]
    pub delta: BTreeMap<String, f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HealthResponse {
    pub status: String,
}

/// Body sent to a hosted text-to-image inference endpoint.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct InferenceRequest {
    pub inputs: String,
    pub parameters: InferenceParameters,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct InferenceParameters {
    pub num_inference_steps: u32,
    pub guidance_scale: f32,
}

impl Default for InferenceParameters {
    fn default() -> Self {
        Self {
            num_inference_steps: 30,
            guidance_scale: 7.5,
        }
    }
}
