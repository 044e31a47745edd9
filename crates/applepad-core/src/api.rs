use crate::config::StyleChoiceMode;
use crate::normalize::normalize;
use crate::params::{NormalizedParams, RawSliderParams};
use crate::prompt::PromptBuilder;
use crate::scorer::{compute_score, select_style, InteriorStyle, StyleBand, StylePair};
use crate::style::StyleLibrary;
use fastrand::Rng;
use serde::{Deserialize, Serialize};

/// Everything that follows deterministically from one slider reading.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Derivation {
    pub raw: RawSliderParams,
    pub normalized: NormalizedParams,
    #[serde(rename = "S_score")]
    pub score: f64,
    pub band: StyleBand,
    pub candidates: StylePair,
}

impl Derivation {
    pub fn prompt_for(
        &self,
        style: InteriorStyle,
        builder: &PromptBuilder,
        library: Option<&StyleLibrary>,
    ) -> String {
        builder.build(style.name(), &self.normalized, library)
    }

    /// Settles on a single style without asking anyone: the first candidate
    /// in pair mode, a coin flip in the legacy mode.
    pub fn pick_style(&self, mode: StyleChoiceMode, rng: &mut Rng) -> InteriorStyle {
        match mode {
            StyleChoiceMode::Pair => self.candidates.first,
            StyleChoiceMode::CoinFlip => select_style(self.score, rng),
        }
    }
}

pub fn derive(raw: &RawSliderParams) -> Derivation {
    let normalized = normalize(raw);
    let score = compute_score(&normalized);
    let band = StyleBand::from_score(score);
    Derivation {
        raw: raw.clone(),
        normalized,
        score,
        band,
        candidates: band.styles(),
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PromptInfo {
    pub normalized_params: NormalizedParams,
    #[serde(rename = "S_score")]
    pub s_score: f64,
    pub style_name: String,
    pub prompt_text: String,
}

/// Raw sliders straight to a finished prompt, settling the style per `mode`.
pub fn generate_prompt_from_raw(
    raw: &RawSliderParams,
    library: Option<&StyleLibrary>,
    builder: &PromptBuilder,
    mode: StyleChoiceMode,
    rng: &mut Rng,
) -> PromptInfo {
    let derivation = derive(raw);
    let style = derivation.pick_style(mode, rng);
    PromptInfo {
        normalized_params: derivation.normalized,
        s_score: derivation.score,
        style_name: style.name().to_string(),
        prompt_text: derivation.prompt_for(style, builder, library),
    }
}
