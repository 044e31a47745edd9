use crate::params::{NormalizedParams, ParamGroup, ParamKey};
use crate::style::{RangeLabel, StyleLibrary};
use itertools::Itertools;
use tracing::warn;

pub const DEFAULT_SCENE: &str = "living room";

/// Builds generation prompts for one scene (a living room unless told otherwise).
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    scene: String,
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_SCENE)
    }
}

impl PromptBuilder {
    pub fn new(scene: &str) -> Self {
        Self {
            scene: scene.to_string(),
        }
    }

    pub fn scene(&self) -> &str {
        &self.scene
    }

    /// Composes the prompt for `style`.
    ///
    /// Without a library, or without an entry for `style`, this falls back to
    /// a generic sentence. Individual missing fragments are replaced by a
    /// synthesized one, so the result is never empty.
    pub fn build(
        &self,
        style: &str,
        params: &NormalizedParams,
        library: Option<&StyleLibrary>,
    ) -> String {
        let library = match library {
            Some(lib) if lib.contains_style(style) => lib,
            _ => {
                warn!(
                    "Style library not ready or style not found, using generic prompt: {}",
                    style
                );
                return self.generic(style);
            }
        };

        let block = |group: ParamGroup| {
            params
                .iter()
                .filter(|(key, _)| group.contains(*key))
                .map(|(key, value)| fragment(library, style, key, value))
                .join(" ")
        };

        format!(
            "Generate an interior {scene} in the {style} style. \
             Materials: {materials} \
             Spatial organization and décor: {layout} \
             Color palette and atmosphere: {color} \
             Make sure the design clearly reflects these material, layout, and color \
             characteristics and stays coherent and livable.",
            scene = self.scene,
            style = style,
            materials = block(ParamGroup::Material),
            layout = block(ParamGroup::Spatial),
            color = block(ParamGroup::Color),
        )
    }

    pub fn generic(&self, style: &str) -> String {
        format!(
            "Generate an interior {} in the {} style. Use materials, spatial organization, \
             and colors that match the user's preferences in texture, structure, and color mood. \
             The design should be cohesive and clearly express the inferred style.",
            self.scene, style
        )
    }
}

fn fragment(library: &StyleLibrary, style: &str, key: ParamKey, value: f64) -> String {
    let range = RangeLabel::from_value(value);
    match library.describe(style, key, range) {
        Some(text) => text.to_string(),
        None => format!(
            "In {} style, the parameter '{}' is interpreted in range {}.",
            style, key, range
        ),
    }
}

/// [`PromptBuilder::build`] for the default living-room scene.
pub fn build_prompt(
    style: &str,
    params: &NormalizedParams,
    library: Option<&StyleLibrary>,
) -> String {
    PromptBuilder::default().build(style, params, library)
}
