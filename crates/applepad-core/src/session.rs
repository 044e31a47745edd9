//! Explicit state for one participant session.
//!
//! Every UI event maps to one method here. Methods called in the wrong step
//! return a validation error and leave the session untouched.

use crate::api::{derive, Derivation};
use crate::config::StudyConfig;
use crate::error::{PadError, PadResult};
use crate::outcome::{GenerationOutcome, RefinementOutcome};
use crate::params::{NormalizedParams, ParamGroup, RawSliderParams};
use crate::prompt::PromptBuilder;
use crate::protocol::{GenerateRequest, RefineRequest};
use crate::refine::{significant_deltas, ParamDelta, RefinementPass};
use crate::scorer::{InteriorStyle, StylePair};
use crate::style::StyleLibrary;
use crate::trial::{Evaluation, LogCheckpoint, ParticipantInfo, RefinementIteration, TrialRecord};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::Display;
use tracing::{debug, info};

/// The five questions asked about every generated image.
pub const EVALUATION_AXES: [&str; 5] = [
    "style_match",
    "materials",
    "layout",
    "color",
    "overall",
];

pub const MSG_INCOMPLETE_FORM: &str = "Please complete all fields before starting.";
pub const MSG_INCOMPLETE_EVALUATION: &str =
    "Please answer all evaluation questions before submitting.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum Step {
    Demographics,
    /// Slider step 1: stroke character.
    Stroke,
    /// Slider step 2: apple geometry.
    Geometry,
    /// Slider step 3: color palette.
    Color,
    StyleChoice,
    Generating,
    Result,
    Refining,
}

impl Step {
    /// Position among the three slider steps, if this is one of them.
    pub fn slider_index(self) -> Option<u8> {
        match self {
            Step::Stroke => Some(1),
            Step::Geometry => Some(2),
            Step::Color => Some(3),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    step: Step,
    record: TrialRecord,
    study: StudyConfig,
    derivation: Option<Derivation>,
    committed: Option<NormalizedParams>,
    image: Option<Vec<u8>>,
    refinement: Option<RefinementPass>,
}

impl Session {
    pub fn new(study: &StudyConfig) -> Self {
        Self {
            step: Step::Demographics,
            record: TrialRecord::new(),
            study: study.clone(),
            derivation: None,
            committed: None,
            image: None,
            refinement: None,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn record(&self) -> &TrialRecord {
        &self.record
    }

    pub fn derivation(&self) -> Option<&Derivation> {
        self.derivation.as_ref()
    }

    /// Parameters behind the image currently on screen.
    pub fn committed(&self) -> Option<&NormalizedParams> {
        self.committed.as_ref()
    }

    pub fn image(&self) -> Option<&[u8]> {
        self.image.as_deref()
    }

    pub fn refinement(&self) -> Option<&RefinementPass> {
        self.refinement.as_ref()
    }

    fn expect_step(&self, expected: Step) -> PadResult<()> {
        if self.step == expected {
            Ok(())
        } else {
            Err(PadError::Validation(format!(
                "Cannot do this during {} (expected {})",
                self.step, expected
            )))
        }
    }

    /// Submits the participant form and moves to the first slider step.
    pub fn start(&mut self, age_range: &str, gender: &str, edu_background: &str) -> PadResult<()> {
        self.expect_step(Step::Demographics)?;
        let fields = [age_range.trim(), gender.trim(), edu_background.trim()];
        if fields.iter().any(|f| f.is_empty()) {
            return Err(PadError::Validation(MSG_INCOMPLETE_FORM.to_string()));
        }

        self.record.participant_info = Some(ParticipantInfo {
            age_range: fields[0].to_string(),
            gender: fields[1].to_string(),
            edu_background: fields[2].to_string(),
            started_at: Utc::now(),
        });
        self.step = Step::Stroke;
        info!("Session {} started", self.record.session_id);
        Ok(())
    }

    /// Advances one slider step. The last slider step only moves on via
    /// [`Session::finish`]; anywhere else this is a no-op.
    pub fn next(&mut self) -> Step {
        self.step = match self.step {
            Step::Stroke => Step::Geometry,
            Step::Geometry => Step::Color,
            other => other,
        };
        self.step
    }

    pub fn back(&mut self) -> Step {
        self.step = match self.step {
            Step::Geometry => Step::Stroke,
            Step::Color => Step::Geometry,
            other => other,
        };
        self.step
    }

    /// Commits the slider state and returns the two styles to choose from.
    pub fn finish(&mut self, raw: &RawSliderParams) -> PadResult<StylePair> {
        self.expect_step(Step::Color)?;
        let derivation = derive(raw);

        self.record.parameters = Some(derivation.raw.clone());
        self.record.normalized = Some(derivation.normalized);
        self.record.s_score = Some(derivation.score);
        self.record.style_candidates = derivation
            .candidates
            .as_array()
            .iter()
            .map(|s| s.name().to_string())
            .collect();
        debug!(
            "Score {:.3} falls in {}, offering {:?}",
            derivation.score, derivation.band, derivation.candidates
        );

        let pair = derivation.candidates;
        self.derivation = Some(derivation);
        self.step = Step::StyleChoice;
        Ok(pair)
    }

    /// Settles the style and builds the generation request for it.
    pub fn choose_style(
        &mut self,
        style: InteriorStyle,
        library: Option<&StyleLibrary>,
    ) -> PadResult<GenerateRequest> {
        self.expect_step(Step::StyleChoice)?;
        let derivation = self
            .derivation
            .as_ref()
            .ok_or_else(|| PadError::Validation("No parameters committed".to_string()))?;
        if !derivation.candidates.contains(style) {
            return Err(PadError::Validation(format!(
                "{} is not one of the offered styles",
                style
            )));
        }

        let builder = PromptBuilder::new(&self.study.scene);
        let prompt = derivation.prompt_for(style, &builder, library);
        let request = GenerateRequest {
            prompt: Some(prompt.clone()),
            style: Some(style.name().to_string()),
            params: Some(derivation.normalized),
            scene: Some(self.study.scene.clone()),
        };

        self.record.style = Some(style.name().to_string());
        self.record.prompt = Some(prompt);
        self.step = Step::Generating;
        Ok(request)
    }

    /// Stores what the backend returned and returns the message to show.
    ///
    /// Failures still move the session to the result screen.
    pub fn record_generation(&mut self, outcome: GenerationOutcome) -> PadResult<&'static str> {
        self.expect_step(Step::Generating)?;
        let message = outcome.user_message();

        self.record.image_success = outcome.has_image();
        self.record.result_text = outcome.result_text();
        self.committed = self.derivation.as_ref().map(|d| d.normalized);
        self.image = outcome.image_bytes().map(<[u8]>::to_vec);
        self.step = Step::Result;
        Ok(message)
    }

    /// Records the participant's ratings. Every axis needs a score in
    /// `1..=evaluation_scale`.
    pub fn submit_evaluation(
        &mut self,
        scores: BTreeMap<String, u8>,
        comment: Option<String>,
    ) -> PadResult<()> {
        self.expect_step(Step::Result)?;
        let max = self.study.evaluation_scale;
        let complete = EVALUATION_AXES
            .iter()
            .all(|axis| scores.get(*axis).is_some_and(|s| (1..=max).contains(s)));
        if !complete {
            return Err(PadError::Validation(MSG_INCOMPLETE_EVALUATION.to_string()));
        }

        self.record.evaluation = Some(Evaluation {
            scores,
            comment: comment.filter(|c| !c.trim().is_empty()),
            submitted_at: Some(Utc::now()),
        });
        Ok(())
    }

    /// Opens a refinement pass on `axis`, freezing the other two groups at
    /// the committed values.
    pub fn begin_refinement(&mut self, axis: ParamGroup) -> PadResult<&RefinementPass> {
        self.expect_step(Step::Result)?;
        let (style, committed) = match (&self.record.style, self.committed) {
            (Some(style), Some(committed)) => (style.clone(), committed),
            _ => {
                return Err(PadError::Validation(
                    "Nothing has been generated yet".to_string(),
                ))
            }
        };
        if self.image.is_none() {
            return Err(PadError::Validation(
                "There is no image to refine".to_string(),
            ));
        }

        self.step = Step::Refining;
        Ok(self.refinement.insert(RefinementPass::new(axis, &style, committed)))
    }

    /// Leaves a refinement pass without sending anything.
    pub fn cancel_refinement(&mut self) {
        if self.step == Step::Refining {
            self.refinement = None;
            self.step = Step::Result;
        }
    }

    pub fn refinement_request(&self, raw: &RawSliderParams) -> PadResult<RefineRequest> {
        self.expect_step(Step::Refining)?;
        let (pass, image) = match (&self.refinement, &self.image) {
            (Some(pass), Some(image)) => (pass, image),
            _ => return Err(PadError::Validation("No refinement in progress".to_string())),
        };
        Ok(pass.request(pass.read(raw), STANDARD.encode(image)))
    }

    /// Appends the pass to the trial and returns the deltas worth showing.
    ///
    /// Only a pass that brought back an image moves the committed state
    /// forward, so the next pass compares against what is on screen. The
    /// stored bytes always belong to the committed state.
    pub fn complete_refinement(
        &mut self,
        raw: &RawSliderParams,
        result: RefinementOutcome,
    ) -> PadResult<Vec<ParamDelta>> {
        self.expect_step(Step::Refining)?;
        let pass = self
            .refinement
            .take()
            .ok_or_else(|| PadError::Validation("No refinement in progress".to_string()))?;

        let p_1 = pass.read(raw);
        let deltas = pass.deltas(&p_1);
        let image_success = result.outcome.has_image();

        self.record.iterations.push(RefinementIteration {
            refinement_type: pass.axis,
            raw_params: raw.clone(),
            p_0: pass.p_0,
            p_1,
            delta: crate::refine::delta_map(&deltas),
            refinement_prompt: result.refinement_prompt.clone(),
            image_success,
            timestamp: Utc::now(),
        });

        // A URL-only image leaves no bytes to send with the next pass.
        if image_success {
            self.image = result.outcome.image_bytes().map(<[u8]>::to_vec);
            self.committed = Some(p_1);
        }
        self.step = Step::Result;
        info!(
            "Refinement {} of {} recorded (image: {})",
            self.record.iterations.len(),
            pass.axis,
            image_success
        );

        Ok(significant_deltas(&deltas, self.study.delta_threshold))
    }

    /// The full record, stamped for the logging endpoint.
    pub fn log_payload(&self, checkpoint: LogCheckpoint) -> TrialRecord {
        self.record.snapshot(checkpoint)
    }
}
