use applepad_core::api::{derive, Derivation};
use applepad_core::config::Config;
use applepad_core::error::{PadError, PadResult};
use applepad_core::params::RawSliderParams;
use clap::Args;
use rayon::prelude::*;
use serde::Serialize;
use std::collections::HashMap;
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    #[command(flatten)]
    pub config: Config,

    /// CSV with a header row of raw slider names (`strokeThickness`, ...).
    pub input: String,

    #[arg(short, long, default_value = "derived.csv")]
    pub output: String,
}

#[derive(Serialize)]
struct BatchRow {
    row: usize,
    thickness: f64,
    coarseness: f64,
    wiggleness: f64,
    bumpiness: f64,
    rigidity: f64,
    symmetry: f64,
    tone: f64,
    saturation: f64,
    brightness: f64,
    uniform: f64,
    s_score: f64,
    band: usize,
    style_a: &'static str,
    style_b: &'static str,
}

impl BatchRow {
    fn new(row: usize, d: &Derivation) -> Self {
        let p = &d.normalized;
        Self {
            row,
            thickness: p.thickness,
            coarseness: p.coarseness,
            wiggleness: p.wiggleness,
            bumpiness: p.bumpiness,
            rigidity: p.rigidity,
            symmetry: p.symmetry,
            tone: p.tone,
            saturation: p.saturation,
            brightness: p.brightness,
            uniform: p.uniform,
            s_score: d.score,
            band: d.band.index(),
            style_a: d.candidates.first.name(),
            style_b: d.candidates.second.name(),
        }
    }
}

/// One row of the input. Unknown columns are ignored, unparsable cells read
/// as missing.
fn parse_row(columns: &HashMap<String, usize>, record: &csv::StringRecord) -> RawSliderParams {
    let cell = |name: &str| {
        columns
            .get(name)
            .and_then(|&i| record.get(i))
            .and_then(|s| s.trim().parse::<f64>().ok())
    };
    RawSliderParams {
        stroke_thickness: cell("strokeThickness"),
        stroke_coarseness: cell("strokeCoarseness"),
        stroke_wiggle: cell("strokeWiggle"),
        apple_morph: cell("appleMorph"),
        apple_rigidity: cell("appleRigidity"),
        apple_symmetry: cell("appleSymmetry"),
        color_tone: cell("colorTone"),
        color_saturation: cell("colorSaturation"),
        color_variation: cell("colorVariation"),
        color_brightness: cell("colorBrightness"),
    }
}

pub fn run(args: BatchArgs) -> PadResult<()> {
    let csv_err = |e: csv::Error| PadError::Config(format!("CSV error: {}", e));

    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .from_path(&args.input)
        .map_err(csv_err)?;

    let columns: HashMap<String, usize> = rdr
        .headers()
        .map_err(csv_err)?
        .iter()
        .enumerate()
        .map(|(i, h)| (h.trim().to_string(), i))
        .collect();

    // Row numbers follow the input file, so skipped records leave a gap.
    let mut raws: Vec<(usize, RawSliderParams)> = Vec::new();
    for (i, record) in rdr.records().enumerate() {
        match record {
            Ok(record) => raws.push((i + 1, parse_row(&columns, &record))),
            Err(e) => warn!("Skipping unreadable row {}: {}", i + 1, e),
        }
    }

    let rows: Vec<BatchRow> = raws
        .par_iter()
        .map(|(row, raw)| BatchRow::new(*row, &derive(raw)))
        .collect();

    let mut wtr = csv::Writer::from_path(&args.output).map_err(csv_err)?;
    for row in &rows {
        wtr.serialize(row).map_err(csv_err)?;
    }
    wtr.flush()?;

    info!("Derived {} rows into {}", rows.len(), args.output);
    Ok(())
}
