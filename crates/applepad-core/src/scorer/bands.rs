use super::styles::InteriorStyle;
use crate::consts::BAND_THRESHOLDS;
use fastrand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

const BAND_STYLES: [(InteriorStyle, InteriorStyle); 5] = [
    (InteriorStyle::UltraMinimal, InteriorStyle::Scandinavian),
    (InteriorStyle::Japandi, InteriorStyle::ContemporarySoftNeutral),
    (InteriorStyle::MidCenturyModern, InteriorStyle::ModernFarmhouse),
    (InteriorStyle::IndustrialLoft, InteriorStyle::RusticCabin),
    (InteriorStyle::EclecticBoho, InteriorStyle::ArtDecoLuxury),
];

/// One of five half-open score intervals `[0, .2) [.2, .4) [.4, .6) [.6, .8) [.8, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StyleBand(u8);

impl StyleBand {
    pub const COUNT: usize = BAND_STYLES.len();

    /// Scores below 0 fall in the first band, scores of 1 and above in the
    /// last. A NaN score reads as the middle band.
    pub fn from_score(score: f64) -> Self {
        if score.is_nan() {
            return StyleBand(2);
        }
        let index = BAND_THRESHOLDS.iter().take_while(|&&t| score >= t).count();
        StyleBand(index as u8)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Lower bound (inclusive) and upper bound (exclusive, except the last band).
    pub fn bounds(self) -> (f64, f64) {
        let i = self.index();
        let lo = if i == 0 { 0.0 } else { BAND_THRESHOLDS[i - 1] };
        let hi = BAND_THRESHOLDS.get(i).copied().unwrap_or(1.0);
        (lo, hi)
    }

    pub fn styles(self) -> StylePair {
        let (first, second) = BAND_STYLES[self.index()];
        StylePair { first, second }
    }
}

impl fmt::Display for StyleBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (lo, hi) = self.bounds();
        let close = if self.index() + 1 == Self::COUNT { ']' } else { ')' };
        write!(f, "band {} [{:.1}, {:.1}{}", self.0, lo, hi, close)
    }
}

/// The two candidate styles of a band, in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StylePair {
    pub first: InteriorStyle,
    pub second: InteriorStyle,
}

impl StylePair {
    pub fn contains(&self, style: InteriorStyle) -> bool {
        self.first == style || self.second == style
    }

    pub fn as_array(&self) -> [InteriorStyle; 2] {
        [self.first, self.second]
    }
}

/// Both candidates of the score's band, for the participant to choose from.
pub fn select_style_pair(score: f64) -> StylePair {
    StyleBand::from_score(score).styles()
}

/// Legacy single pick: an unweighted coin flip between the band's two styles.
///
/// The flip does not depend on the score, so identical scores may yield
/// different styles. Superseded by [`select_style_pair`].
pub fn select_style(score: f64, rng: &mut Rng) -> InteriorStyle {
    let pair = select_style_pair(score);
    if rng.f64() < 0.5 {
        pair.first
    } else {
        pair.second
    }
}
