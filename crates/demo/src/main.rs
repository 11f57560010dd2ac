// File: crates/demo/src/main.rs
// Summary: Demo loads an x/y/z CSV (series,x,y,z) and prints one tooltip per item.

use anyhow::{Context, Result};
use chart_labels::{
    DateFormat, DefaultXyzDataset, NumberFormat, StandardXyzToolTipGenerator, ValueFormat, XyDataset,
    DEFAULT_TOOL_TIP_FORMAT,
};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "labels-demo")]
#[command(about = "Print chart tooltips for every item of an x/y/z CSV", long_about = None)]
struct Args {
    /// CSV with a header row and `series`, `x`, `y`, `z` columns
    file: PathBuf,

    /// Tooltip template: {0} series, {1} x, {2} y, {3} z
    #[arg(long, default_value = DEFAULT_TOOL_TIP_FORMAT)]
    template: String,

    /// Render x as a date (epoch milliseconds) with this strftime pattern
    #[arg(long)]
    x_date: Option<String>,

    /// Render y as a date (epoch milliseconds) with this strftime pattern
    #[arg(long)]
    y_date: Option<String>,

    /// Render z as a date (epoch milliseconds) with this strftime pattern
    #[arg(long)]
    z_date: Option<String>,

    /// Maximum fraction digits for numeric values
    #[arg(long, default_value_t = 3)]
    fraction_digits: usize,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(log_path) = &args.log {
        let file = std::fs::File::create(log_path)
            .with_context(|| format!("creating log file {}", log_path.display()))?;
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::TRACE)
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting labels-demo");
    }

    let generator = build_generator(&args)?;
    let dataset = load_xyz_csv(&args.file)
        .with_context(|| format!("failed to load CSV '{}'", args.file.display()))?;

    if dataset.series_count() == 0 {
        anyhow::bail!("no rows loaded; check headers/delimiter.");
    }

    for s in 0..dataset.series_count() {
        for i in 0..dataset.item_count(s) {
            println!("{}", generator.generate(&dataset, s, i)?);
        }
    }

    tracing::info!(series = dataset.series_count(), "labels-demo finished");
    Ok(())
}

fn axis_format(date_pattern: Option<&str>, number: &NumberFormat) -> Result<ValueFormat> {
    Ok(match date_pattern {
        Some(p) => DateFormat::new(p)?.into(),
        None => number.clone().into(),
    })
}

fn build_generator(args: &Args) -> Result<StandardXyzToolTipGenerator> {
    let number = NumberFormat::number().with_fraction_digits(0, args.fraction_digits)?;
    let generator = StandardXyzToolTipGenerator::builder()
        .template(args.template.as_str())
        .x(axis_format(args.x_date.as_deref(), &number)?)
        .y(axis_format(args.y_date.as_deref(), &number)?)
        .z(axis_format(args.z_date.as_deref(), &number)?)
        .build()
        .context("invalid tooltip configuration")?;
    Ok(generator)
}

/// Load `series,x,y,z` rows; rows sharing a series key are grouped in file order.
fn load_xyz_csv(path: &Path) -> Result<DefaultXyzDataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    tracing::debug!(?headers, "read CSV headers");

    let idx = |names: &[&str]| -> Option<usize> { headers.iter().position(|h| names.contains(&h.as_str())) };
    let i_series = idx(&["series", "key", "name"]).context("missing series column")?;
    let i_x = idx(&["x", "time", "timestamp"]).context("missing x column")?;
    let i_y = idx(&["y", "value"]).context("missing y column")?;
    let i_z = idx(&["z", "size", "weight"]).context("missing z column")?;

    let mut keys: Vec<String> = Vec::new();
    let mut columns: Vec<(Vec<f64>, Vec<f64>, Vec<f64>)> = Vec::new();

    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let parse = |i: usize| -> Option<f64> { rec.get(i).and_then(|s| s.parse::<f64>().ok()) };
        let (Some(key), Some(x), Some(y), Some(z)) = (rec.get(i_series), parse(i_x), parse(i_y), parse(i_z)) else {
            tracing::warn!(row, "skipping row with missing or non-numeric values");
            continue;
        };
        let slot = match keys.iter().position(|k| k == key) {
            Some(slot) => slot,
            None => {
                keys.push(key.to_string());
                columns.push((Vec::new(), Vec::new(), Vec::new()));
                keys.len() - 1
            }
        };
        let (xs, ys, zs) = &mut columns[slot];
        xs.push(x);
        ys.push(y);
        zs.push(z);
    }

    let mut dataset = DefaultXyzDataset::new();
    for (key, (xs, ys, zs)) in keys.into_iter().zip(columns) {
        dataset.add_series(key, xs, ys, zs)?;
    }
    Ok(dataset)
}
