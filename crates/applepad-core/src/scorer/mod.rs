pub mod bands;
pub mod styles;

pub use self::bands::{select_style, select_style_pair, StyleBand, StylePair};
pub use self::styles::InteriorStyle;

use crate::consts::NEUTRAL_SCORE;
use crate::params::NormalizedParams;

/// The S-score: arithmetic mean of the ten normalized parameters.
pub fn compute_score(params: &NormalizedParams) -> f64 {
    mean_score(params.iter().map(|(_, v)| v))
}

/// Mean of the finite values in `values`, or 0.5 when there are none.
pub fn mean_score<I: IntoIterator<Item = f64>>(values: I) -> f64 {
    let (sum, count) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((0.0, 0usize), |(s, c), v| (s + v, c + 1));

    if count == 0 {
        NEUTRAL_SCORE
    } else {
        sum / count as f64
    }
}
