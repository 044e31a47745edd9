use crate::consts::{RANGE_LOW_MAX, RANGE_MID_MAX};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Coarse bucket of a normalized value, as keyed in the style library.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
pub enum RangeLabel {
    #[strum(serialize = "0-0.3")]
    #[serde(rename = "0-0.3")]
    Low,
    #[strum(serialize = "0.4-0.7")]
    #[serde(rename = "0.4-0.7")]
    Mid,
    #[strum(serialize = "0.8-1")]
    #[serde(rename = "0.8-1")]
    High,
}

impl RangeLabel {
    /// `<= 0.3` is low, `<= 0.7` is mid, anything else is high.
    pub fn from_value(value: f64) -> Self {
        if value <= RANGE_LOW_MAX {
            RangeLabel::Low
        } else if value <= RANGE_MID_MAX {
            RangeLabel::Mid
        } else {
            RangeLabel::High
        }
    }

    pub fn as_str(self) -> &'static str {
        self.into()
    }
}
