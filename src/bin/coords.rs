//! Coordinate Editing Tool
//!
//! Builds a coordinate vector from a JSON configuration and/or command line
//! flags, applies the requested edits and steps in order, and prints the
//! resulting coordinates.
//!
//! Usage:
//!   cargo run --bin coords -- --coordinates "1, 2, 3" --min 0 --max 10 --step 0.5 --step-up 0

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use ctk_coordinates::{CoordinateVector, CoordinatesConfig, DecimalsOption};

/// Type alias for the error type used throughout this module
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Coordinate Editing Tool
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Applies edits and steps to a bounded coordinate vector",
    long_about = None
)]
struct Args {
    /// JSON configuration to start from
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of coordinates (inferred from --coordinates when omitted)
    #[arg(short, long)]
    dimension: Option<usize>,

    /// Comma-separated coordinates, e.g. "1.5, -2, 0.333"
    #[arg(short, long, allow_hyphen_values = true)]
    coordinates: Option<String>,

    /// Lower bound of every coordinate
    #[arg(long, allow_hyphen_values = true)]
    min: Option<f64>,

    /// Upper bound of every coordinate
    #[arg(long, allow_hyphen_values = true)]
    max: Option<f64>,

    /// Single step size
    #[arg(short, long)]
    step: Option<f64>,

    /// Display decimals
    #[arg(long)]
    decimals: Option<usize>,

    /// Derive display decimals from the values
    #[arg(long, action = ArgAction::SetTrue)]
    decimals_by_value: bool,

    /// Swap step directions
    #[arg(long, action = ArgAction::SetTrue)]
    inverted: bool,

    /// Normalize to unit length after all edits
    #[arg(short, long, action = ArgAction::SetTrue)]
    normalize: bool,

    /// Indices to step up (repeatable)
    #[arg(long = "step-up")]
    step_up: Vec<usize>,

    /// Indices to step down (repeatable)
    #[arg(long = "step-down")]
    step_down: Vec<usize>,

    /// Print the resulting configuration as JSON
    #[arg(long, action = ArgAction::SetTrue)]
    json: bool,
}

/// Builds the starting vector from the configuration file and flags
fn build_vector(args: &Args) -> Result<CoordinateVector> {
    let mut config = match &args.config {
        Some(path) => CoordinatesConfig::from_file(path)?,
        None => CoordinatesConfig::default(),
    };

    let parsed = match &args.coordinates {
        Some(text) => Some(ctk_coordinates::coordinates::text::parse_coordinates(text)?),
        None => None,
    };

    if let Some(dimension) = args.dimension {
        config.dimension = dimension;
    } else if let Some(values) = &parsed {
        config.dimension = values.len();
    }
    if config
        .coordinates
        .as_ref()
        .map_or(false, |values| values.len() != config.dimension)
    {
        config.coordinates = None;
    }

    if let Some(min) = args.min {
        config.minimum = min;
    }
    if let Some(max) = args.max {
        config.maximum = max;
    }
    if let Some(step) = args.step {
        config.single_step = step;
    }
    if let Some(decimals) = args.decimals {
        config.decimals = decimals;
    }
    if args.decimals_by_value {
        config.decimals_option = DecimalsOption::ByValue;
    }
    if args.inverted {
        config.inverted_controls = true;
    }

    let mut vector = config.build()?;
    if let Some(values) = parsed {
        vector.set_coordinates(&values)?;
    }
    Ok(vector)
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut vector = build_vector(&args)?;

    for &index in &args.step_up {
        vector.step_up(index)?;
    }
    for &index in &args.step_down {
        vector.step_down(index)?;
    }

    if args.normalize {
        let previous = vector.normalize();
        println!("Previous norm: {}", previous);
    }

    if args.json {
        println!("{}", vector.to_config().to_json_string()?);
        return Ok(());
    }

    let decimals = vector.effective_decimals();
    let display = vector
        .coordinates()
        .iter()
        .map(|value| format!("{:.*}", decimals, value))
        .collect::<Vec<_>>()
        .join(", ");

    println!("Coordinates: {}", vector.coordinates_as_string());
    println!("Displayed:   {}", display);
    println!("Norm:        {}", vector.norm());
    println!("Range:       [{}, {}]", vector.minimum(), vector.maximum());
    println!("Decimals:    {}", decimals);
    Ok(())
}
