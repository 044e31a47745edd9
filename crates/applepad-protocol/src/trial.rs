use crate::params::{NormalizedParams, ParamGroup, RawSliderParams};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantInfo {
    pub age_range: String,
    pub gender: String,
    pub edu_background: String,
    pub started_at: DateTime<Utc>,
}

/// Where in the session a trial payload was sent from.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LogCheckpoint {
    PostGeneration,
    PostEvaluation,
}

/// Participant ratings of the generated image, one score per axis.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Evaluation {
    pub scores: BTreeMap<String, u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub submitted_at: Option<DateTime<Utc>>,
}

/// One targeted refinement pass and what came back from it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RefinementIteration {
    pub refinement_type: ParamGroup,
    pub raw_params: RawSliderParams,
    pub p_0: NormalizedParams,
    pub p_1: NormalizedParams,
    #[serde(default)]
    pub delta: BTreeMap<String, f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refinement_prompt: Option<String>,
    pub image_success: bool,
    pub timestamp: DateTime<Utc>,
}

/// Everything recorded for one participant session.
///
/// Filled in step by step and shipped whole to the logging endpoint.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TrialRecord {
    pub session_id: Uuid,
    #[serde(rename = "participantInfo")]
    pub participant_info: Option<ParticipantInfo>,
    pub parameters: Option<RawSliderParams>,
    pub normalized: Option<NormalizedParams>,
    #[serde(rename = "S_score")]
    pub s_score: Option<f64>,
    #[serde(default)]
    pub style_candidates: Vec<String>,
    pub style: Option<String>,
    pub prompt: Option<String>,
    pub result_text: Option<String>,
    #[serde(default)]
    pub image_success: bool,
    pub evaluation: Option<Evaluation>,
    #[serde(default)]
    pub iterations: Vec<RefinementIteration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checkpoint: Option<LogCheckpoint>,
    pub timestamp: DateTime<Utc>,
}

impl TrialRecord {
    pub fn new() -> Self {
        Self {
            session_id: Uuid::new_v4(),
            participant_info: None,
            parameters: None,
            normalized: None,
            s_score: None,
            style_candidates: Vec::new(),
            style: None,
            prompt: None,
            result_text: None,
            image_success: false,
            evaluation: None,
            iterations: Vec::new(),
            checkpoint: None,
            timestamp: Utc::now(),
        }
    }

    /// A copy stamped for sending at `checkpoint`.
    pub fn snapshot(&self, checkpoint: LogCheckpoint) -> Self {
        let mut copy = self.clone();
        copy.checkpoint = Some(checkpoint);
        copy.timestamp = Utc::now();
        copy
    }
}

impl Default for TrialRecord {
    fn default() -> Self {
        Self::new()
    }
}
