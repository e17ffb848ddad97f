use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::de::DeserializeOwned;

use super::model::SpectralData;
use crate::distribution::SpectralDistribution;
use crate::sample::Sample;
use crate::shape::Shape;

/// Allowed deviation of a CSV wavelength from its grid position, in intervals.
const GRID_SLACK: f64 = 1e-6;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a reference table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.json` – a [`SpectralData`] record
/// * `.csv`  – header row, then `wavelength, value[, value…]` rows on an
///   evenly spaced grid
pub fn load_file<T>(path: &Path) -> Result<SpectralDistribution<T>>
where
    T: Sample + DeserializeOwned,
{
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let reader = BufReader::new(file);
    let distribution = match ext.as_str() {
        "json" => read_json(reader),
        "csv" => read_csv(reader),
        other => bail!("Unsupported file extension: .{other}"),
    }
    .with_context(|| format!("loading {}", path.display()))?;

    log::info!(
        "Loaded {} samples on {} from {}",
        distribution.len(),
        distribution.shape(),
        path.display()
    );
    Ok(distribution)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Read a [`SpectralData`] record and build its distribution.
pub fn read_json<T, R>(reader: R) -> Result<SpectralDistribution<T>>
where
    T: Sample + DeserializeOwned,
    R: Read,
{
    let data: SpectralData<T> = serde_json::from_reader(reader).context("parsing JSON")?;
    SpectralDistribution::try_from(data).context("building distribution from JSON table")
}

/// [`read_json`] for an in-memory string.
pub fn from_json_str<T>(text: &str) -> Result<SpectralDistribution<T>>
where
    T: Sample + DeserializeOwned,
{
    read_json(text.as_bytes())
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: a header row, then one row per wavelength:
///   `wavelength,x,y,z`
///   `380,0.001368,0.000039,0.006450`
/// The first column is the wavelength, every further column a channel.
/// Scalar distributions take exactly one value column.
pub fn read_csv<T, R>(reader: R) -> Result<SpectralDistribution<T>>
where
    T: Sample,
    R: Read,
{
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut wavelengths = Vec::new();
    let mut samples = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        let values = parse_floats(&record, row_no)?;

        let (wavelength, channels) = match values.split_first() {
            Some((w, rest)) if !rest.is_empty() => (*w, rest),
            _ => bail!("CSV row {row_no}: expected a wavelength and at least one value"),
        };

        let sample = T::from_channels(channels).with_context(|| format!("CSV row {row_no}"))?;
        wavelengths.push(wavelength);
        samples.push(sample);
    }

    let shape = infer_shape(&wavelengths)?;
    SpectralDistribution::new(shape, samples).context("building distribution from CSV table")
}

fn parse_floats(record: &csv::StringRecord, row: usize) -> Result<Vec<f64>> {
    record
        .iter()
        .enumerate()
        .map(|(col, tok)| {
            tok.parse::<f64>()
                .with_context(|| format!("Row {row}, column {col}: '{tok}' is not a number"))
        })
        .collect()
}

/// Shape of an ascending, evenly spaced wavelength column.
fn infer_shape(wavelengths: &[f64]) -> Result<Shape> {
    let (start, end) = match wavelengths {
        [start, .., end] => (*start, *end),
        _ => bail!(
            "need at least two rows to infer the sampling interval, got {}",
            wavelengths.len()
        ),
    };
    let interval = wavelengths[1] - start;
    let shape = Shape::new(start, end, interval)
        .with_context(|| format!("wavelengths {start}..{end} step {interval}"))?;

    if shape.count() != wavelengths.len() {
        bail!(
            "{} rows do not fill shape {shape} ({} samples)",
            wavelengths.len(),
            shape.count()
        );
    }
    for (i, &w) in wavelengths.iter().enumerate() {
        let expected = shape.wavelength_at(i);
        if (w - expected).abs() > GRID_SLACK * interval {
            bail!("wavelength {w} in row {i} is off the grid of {shape} (expected {expected})");
        }
    }
    Ok(shape)
}
