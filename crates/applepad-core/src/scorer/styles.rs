use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// The ten interior styles the score can land on, two per band.
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
pub enum InteriorStyle {
    #[strum(serialize = "Ultra Minimal")]
    #[serde(rename = "Ultra Minimal")]
    UltraMinimal,
    #[strum(serialize = "Scandinavian")]
    Scandinavian,
    #[strum(serialize = "Japandi")]
    Japandi,
    #[strum(serialize = "Contemporary Soft-Neutral")]
    #[serde(rename = "Contemporary Soft-Neutral")]
    ContemporarySoftNeutral,
    #[strum(serialize = "Mid-Century Modern")]
    #[serde(rename = "Mid-Century Modern")]
    MidCenturyModern,
    #[strum(serialize = "Modern Farmhouse")]
    #[serde(rename = "Modern Farmhouse")]
    ModernFarmhouse,
    #[strum(serialize = "Industrial Loft")]
    #[serde(rename = "Industrial Loft")]
    IndustrialLoft,
    #[strum(serialize = "Rustic Cabin")]
    #[serde(rename = "Rustic Cabin")]
    RusticCabin,
    #[strum(serialize = "Eclectic Boho")]
    #[serde(rename = "Eclectic Boho")]
    EclecticBoho,
    #[strum(serialize = "Art Deco Luxury")]
    #[serde(rename = "Art Deco Luxury")]
    ArtDecoLuxury,
}

impl InteriorStyle {
    /// Display name, also the key into the style library.
    pub fn name(self) -> &'static str {
        self.into()
    }
}
