use crate::geometry::lerp;
use crate::params::NormalizedParams;
use serde::{Deserialize, Serialize};

pub const STRIP_COUNT: usize = 5;

/// Hue in degrees, saturation and brightness in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsb {
    pub hue: f64,
    pub saturation: f64,
    pub brightness: f64,
}

impl Hsb {
    pub fn to_rgb(self) -> [u8; 3] {
        let s = (self.saturation / 100.0).clamp(0.0, 1.0);
        let v = (self.brightness / 100.0).clamp(0.0, 1.0);
        let h = self.hue.rem_euclid(360.0) / 60.0;

        let c = v * s;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let m = v - c;

        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        let byte = |f: f64| ((f + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        [byte(r), byte(g), byte(b)]
    }

    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_rgb();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

/// Five horizontal color strips filling the apple in the color step.
///
/// Tone slides the base hue from red (0) to blue (220); variation fans the
/// strips out in hue and brightness around the middle strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StripePalette {
    pub strips: [Hsb; STRIP_COUNT],
}

impl StripePalette {
    pub fn from_params(params: &NormalizedParams) -> Self {
        let base_hue = lerp(0.0, 220.0, params.tone);
        let base_sat = lerp(10.0, 100.0, params.saturation);
        let base_bri = lerp(20.0, 100.0, params.brightness);

        let hue_spread = params.uniform * 80.0;
        let bri_spread = params.uniform * 25.0;
        let half = (STRIP_COUNT - 1) as f64 / 2.0;

        let strips = std::array::from_fn(|s| {
            let offset = (s as f64 - half) / half;
            Hsb {
                hue: (base_hue + offset * hue_spread).rem_euclid(360.0),
                saturation: base_sat,
                brightness: (base_bri - offset * bri_spread).clamp(0.0, 100.0),
            }
        });

        Self { strips }
    }

    /// `(y0, y1, color)` for each strip, splitting `[min_y, max_y]` evenly.
    pub fn bands(&self, min_y: f64, max_y: f64) -> impl Iterator<Item = (f64, f64, Hsb)> + '_ {
        let height = max_y - min_y;
        self.strips.iter().enumerate().map(move |(s, &color)| {
            let y0 = min_y + s as f64 / STRIP_COUNT as f64 * height;
            let y1 = min_y + (s + 1) as f64 / STRIP_COUNT as f64 * height;
            (y0, y1, color)
        })
    }
}
