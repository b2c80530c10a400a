use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use arrow::array::{Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use clap::Parser;
use parquet::arrow::ArrowWriter;
use serde::Serialize;

/// Write a synthetic earthquake table for trying out the explorer.
#[derive(Parser)]
#[command(name = "generate_sample", about = "Write a synthetic earthquake table")]
struct Args {
    /// Output file; `.csv` or `.parquet`
    #[arg(default_value = "earthquake.csv")]
    output: PathBuf,

    /// Events per year
    #[arg(long, default_value_t = 90)]
    per_year: usize,

    #[arg(long, default_value_t = 42)]
    seed: u64,
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5)).rotate_left(7).wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.next_f64()
    }

    /// Exponential tail above `floor`, roughly Gutenberg–Richter shaped.
    fn magnitude(&mut self, floor: f64, cap: f64) -> f64 {
        let u = self.next_f64().max(1e-15);
        let m = floor - u.ln() / 2.3;
        (m.min(cap) * 10.0).round() / 10.0
    }
}

/// Seismic zones: (place, latitude, longitude, chance of a tsunami).
const ZONES: [(&str, f64, f64, f64); 10] = [
    ("Honshu, Japan", 38.0, 142.5, 0.45),
    ("Sumatra, Indonesia", 1.0, 97.5, 0.40),
    ("Central Chile", -33.0, -72.0, 0.35),
    ("Aleutian Islands, Alaska", 52.0, -172.0, 0.30),
    ("Kermadec Islands, New Zealand", -30.0, -177.5, 0.25),
    ("Papua New Guinea", -5.5, 151.0, 0.20),
    ("Hindu Kush, Afghanistan", 36.5, 70.8, 0.0),
    ("Southern Peru", -15.5, -74.5, 0.15),
    ("Fiji region", -18.0, -178.5, 0.10),
    ("Eastern Turkey", 38.5, 39.5, 0.0),
];

#[derive(Serialize)]
struct Row {
    magnitude: f64,
    depth: Option<f64>,
    #[serde(rename = "Year")]
    year: i64,
    latitude: f64,
    longitude: f64,
    tsunami: i64,
    place: String,
}

fn generate(args: &Args) -> Vec<Row> {
    let mut rng = SimpleRng::new(args.seed);
    let mut rows = Vec::with_capacity(8 * args.per_year);
    for year in 2015..=2022 {
        for _ in 0..args.per_year {
            let zone = ZONES[(rng.next_u64() % ZONES.len() as u64) as usize];
            let (place, lat, lon, tsunami_chance) = zone;
            let magnitude = rng.magnitude(6.5, 9.1);
            let depth = (rng.next_f64().powi(3) * 600.0 + 5.0).round();
            rows.push(Row {
                magnitude,
                // Roughly one row in fifty lacks a depth.
                depth: (rng.next_f64() > 0.02).then_some(depth),
                year,
                latitude: lat + rng.uniform(-2.0, 2.0),
                longitude: lon + rng.uniform(-2.0, 2.0),
                tsunami: i64::from(depth < 70.0 && rng.next_f64() < tsunami_chance),
                place: format!("{:.0} km of {place}", rng.uniform(5.0, 250.0)),
            });
        }
    }
    rows
}

fn write_csv(path: &Path, rows: &[Row]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).context("creating CSV file")?;
    for row in rows {
        writer.serialize(row).context("writing CSV row")?;
    }
    writer.flush().context("flushing CSV file")?;
    Ok(())
}

fn write_parquet(path: &Path, rows: &[Row]) -> Result<()> {
    let schema = Arc::new(Schema::new(vec![
        Field::new("magnitude", DataType::Float64, false),
        Field::new("depth", DataType::Float64, true),
        Field::new("Year", DataType::Int64, false),
        Field::new("latitude", DataType::Float64, false),
        Field::new("longitude", DataType::Float64, false),
        Field::new("tsunami", DataType::Int64, false),
        Field::new("place", DataType::Utf8, true),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(Float64Array::from_iter_values(rows.iter().map(|r| r.magnitude))),
            Arc::new(Float64Array::from(rows.iter().map(|r| r.depth).collect::<Vec<_>>())),
            Arc::new(Int64Array::from_iter_values(rows.iter().map(|r| r.year))),
            Arc::new(Float64Array::from_iter_values(rows.iter().map(|r| r.latitude))),
            Arc::new(Float64Array::from_iter_values(rows.iter().map(|r| r.longitude))),
            Arc::new(Int64Array::from_iter_values(rows.iter().map(|r| r.tsunami))),
            Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.place.as_str()))),
        ],
    )
    .context("building record batch")?;

    let file = File::create(path).context("creating parquet file")?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating parquet writer")?;
    writer.write(&batch).context("writing record batch")?;
    writer.close().context("closing parquet writer")?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let rows = generate(&args);

    let ext = args
        .output
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    match ext.as_str() {
        "csv" => write_csv(&args.output, &rows)?,
        "parquet" | "pq" => write_parquet(&args.output, &rows)?,
        other => bail!("Unsupported output extension: .{other}"),
    }

    log::info!("Wrote {} events to {}", rows.len(), args.output.display());
    println!("Wrote {} events (2015–2022) to {}", rows.len(), args.output.display());
    Ok(())
}
