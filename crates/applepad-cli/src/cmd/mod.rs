pub mod batch;
pub mod derive;
pub mod generate;
pub mod refine;
pub mod render;

use applepad_core::error::{PadError, PadResult};
use applepad_core::params::RawSliderParams;
use applepad_core::scorer::InteriorStyle;
use applepad_core::style::{LibraryState, StyleLibrary};
use std::fs;
use std::path::Path;

/// Reads a JSON object of raw slider values (`strokeThickness`, `appleMorph`, ...).
pub fn load_raw<P: AsRef<Path>>(path: P) -> PadResult<RawSliderParams> {
    let content = fs::read_to_string(&path).map_err(|e| {
        PadError::Config(format!(
            "Failed to read slider file {}: {}",
            path.as_ref().display(),
            e
        ))
    })?;
    Ok(serde_json::from_str(&content)?)
}

/// A local style library, if one was given. Load failures degrade to the
/// generic prompt rather than aborting.
pub fn local_library(path: Option<&str>) -> LibraryState {
    match path {
        Some(p) => LibraryState::from_result(StyleLibrary::load_from_file(p)),
        None => LibraryState::Pending,
    }
}

pub fn parse_style(name: &str) -> PadResult<InteriorStyle> {
    name.parse()
        .map_err(|_| PadError::Validation(format!("Unknown style '{}'", name)))
}
