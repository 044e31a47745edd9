use super::range::RangeLabel;
use crate::error::{PadError, PadResult};
use crate::params::ParamKey;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

type RangeTexts = HashMap<String, String>;
type ParamTexts = HashMap<String, RangeTexts>;

/// Descriptive prose per style, parameter and value range:
/// `style name -> param key -> range label -> fragment`.
///
/// Reference data only; any level may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleLibrary {
    styles: HashMap<String, ParamTexts>,
}

impl StyleLibrary {
    pub fn from_json_str(content: &str) -> PadResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> PadResult<Self> {
        let content = fs::read_to_string(&path).map_err(|e| {
            PadError::Config(format!(
                "Failed to read style library {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        let library = Self::from_json_str(&content)?;
        info!(
            "Style library loaded from {} ({} styles)",
            path.as_ref().display(),
            library.len()
        );
        Ok(library)
    }

    pub fn contains_style(&self, style: &str) -> bool {
        self.styles.contains_key(style)
    }

    pub fn describe(&self, style: &str, key: ParamKey, range: RangeLabel) -> Option<&str> {
        self.styles
            .get(style)?
            .get(key.as_str())?
            .get(range.as_str())
            .map(String::as_str)
            .filter(|s| !s.trim().is_empty())
    }

    pub fn insert(&mut self, style: &str, key: ParamKey, range: RangeLabel, text: &str) {
        self.styles
            .entry(style.to_string())
            .or_default()
            .entry(key.as_str().to_string())
            .or_default()
            .insert(range.as_str().to_string(), text.to_string());
    }

    pub fn style_names(&self) -> impl Iterator<Item = &str> {
        self.styles.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

/// Load status of the library, which is fetched once and may never arrive.
#[derive(Debug, Clone, Default)]
pub enum LibraryState {
    #[default]
    Pending,
    Loaded(StyleLibrary),
    Failed(String),
}

impl LibraryState {
    pub fn from_result(result: PadResult<StyleLibrary>) -> Self {
        match result {
            Ok(lib) => LibraryState::Loaded(lib),
            Err(e) => {
                warn!("Error loading style library: {}", e);
                LibraryState::Failed(e.to_string())
            }
        }
    }

    /// The library, once it has loaded.
    pub fn get(&self) -> Option<&StyleLibrary> {
        match self {
            LibraryState::Loaded(lib) => Some(lib),
            _ => None,
        }
    }
}
