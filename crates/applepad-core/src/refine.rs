//! Before/after tracking for targeted refinement passes.

use crate::normalize::normalize;
use crate::params::{NormalizedParams, ParamGroup, ParamKey, RawSliderParams};
use crate::protocol::RefineRequest;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// Absorbs float noise such as 0.35 - 0.3 = 0.04999...
const DELTA_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParamDelta {
    pub key: ParamKey,
    pub before: f64,
    pub after: f64,
    pub delta: f64,
}

impl ParamDelta {
    pub fn is_significant(&self, threshold: f64) -> bool {
        self.delta.abs() + DELTA_EPSILON >= threshold
    }

    fn describe(&self) -> String {
        let direction = if self.delta >= 0.0 { "increased" } else { "decreased" };
        format!("{} {} by {:.2}", self.key, direction, self.delta.abs())
    }
}

/// `p_1[k] - p_0[k]` for every key, in key order.
pub fn compute_deltas(p_0: &NormalizedParams, p_1: &NormalizedParams) -> Vec<ParamDelta> {
    p_0.iter()
        .map(|(key, before)| {
            let after = p_1.get(key);
            ParamDelta {
                key,
                before,
                after,
                delta: after - before,
            }
        })
        .collect()
}

/// The deltas worth showing: magnitude at least `threshold`.
pub fn significant_deltas(deltas: &[ParamDelta], threshold: f64) -> Vec<ParamDelta> {
    deltas
        .iter()
        .filter(|d| d.is_significant(threshold))
        .copied()
        .collect()
}

pub fn delta_map(deltas: &[ParamDelta]) -> BTreeMap<String, f64> {
    deltas
        .iter()
        .map(|d| (d.key.to_string(), d.delta))
        .collect()
}

/// Text sent upstream to regenerate an image from its predecessor. Only
/// deltas of at least `threshold` are named, matching what the participant saw.
pub fn refinement_prompt(
    style: &str,
    axis: ParamGroup,
    deltas: &[ParamDelta],
    threshold: f64,
) -> String {
    let changes = significant_deltas(deltas, threshold);
    let body = if changes.is_empty() {
        "no noticeable change was requested.".to_string()
    } else {
        format!("{}.", changes.iter().map(ParamDelta::describe).join(", "))
    };

    format!(
        "Refine the previous {} interior image. Keep everything else unchanged and adjust \
         only the {} characteristics: {}",
        style, axis, body
    )
}

/// A second editing pass where only one parameter group may change.
///
/// `p_0` is the committed state behind the current image; every reading
/// taken during the pass keeps the frozen groups at their `p_0` values.
#[derive(Debug, Clone, PartialEq)]
pub struct RefinementPass {
    pub axis: ParamGroup,
    pub style: String,
    pub p_0: NormalizedParams,
}

impl RefinementPass {
    pub fn new(axis: ParamGroup, style: &str, committed: NormalizedParams) -> Self {
        Self {
            axis,
            style: style.to_string(),
            p_0: committed,
        }
    }

    pub fn is_editable(&self, key: ParamKey) -> bool {
        self.axis.contains(key)
    }

    /// `reading` with every key outside the refined group reset to `p_0`.
    pub fn restrict(&self, reading: &NormalizedParams) -> NormalizedParams {
        NormalizedParams::from_fn(|key| {
            if self.is_editable(key) {
                reading.get(key)
            } else {
                self.p_0.get(key)
            }
        })
    }

    /// Normalizes the slider state and applies [`Self::restrict`].
    pub fn read(&self, raw: &RawSliderParams) -> NormalizedParams {
        self.restrict(&normalize(raw))
    }

    pub fn deltas(&self, p_1: &NormalizedParams) -> Vec<ParamDelta> {
        compute_deltas(&self.p_0, p_1)
    }

    pub fn request(&self, p_1: NormalizedParams, img_0_base64: String) -> RefineRequest {
        RefineRequest {
            style: self.style.clone(),
            p_0: self.p_0,
            p_1,
            img_0: img_0_base64,
            refinement_type: self.axis,
        }
    }
}
