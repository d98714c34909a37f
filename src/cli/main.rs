//! Command line front end for the geoloc library.
//!
//! Every subcommand prints a single result to stdout; logs go to stderr and
//! follow `RUST_LOG` (default `info`).

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use geoloc::codec;
use geoloc::distance;
use geoloc::geojson;
use geoloc::models::{LocationEntry, Polygon};
use geoloc::{Config, LocationMatcher};

#[derive(Parser, Debug)]
#[command(name = "geoloc")]
#[command(about = "Coordinate parsing, distance and point-in-polygon tools")]
struct Args {
    /// Optional TOML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse "lat,lon" or "lat;lon" text
    Parse {
        text: String,
        /// Print the canonical text instead of fixed-point output
        #[arg(long)]
        canonical: bool,
    },

    /// Render a coordinate with fixed fraction digits
    Format {
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        #[arg(allow_negative_numbers = true)]
        lon: f64,
        /// Fraction digits (defaults to [format] decimals)
        #[arg(short, long)]
        decimals: Option<usize>,
    },

    /// Strict "lat,lon" pattern check
    Check { text: String },

    /// Great-circle distance in meters
    Distance {
        #[arg(allow_negative_numbers = true)]
        lat1: f64,
        #[arg(allow_negative_numbers = true)]
        lon1: f64,
        #[arg(allow_negative_numbers = true)]
        lat2: f64,
        #[arg(allow_negative_numbers = true)]
        lon2: f64,
    },

    /// Summarize a GeoJSON polygon
    Describe {
        /// Polygon JSON text
        polygon: String,
    },

    /// Test whether a point lies inside a GeoJSON polygon
    Contains {
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        #[arg(allow_negative_numbers = true)]
        lon: f64,
        /// Polygon JSON text
        polygon: String,
    },

    /// Match a point against a JSON list of reference locations
    Match {
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        #[arg(allow_negative_numbers = true)]
        lon: f64,
        /// JSON file holding an array of null, "lat,lon" strings, Points or Polygons
        #[arg(short, long)]
        locations: PathBuf,
        /// Fraction digits compared (defaults to [matcher] precision)
        #[arg(short, long)]
        precision: Option<usize>,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            info!("Loading config from {}", path.display());
            Config::load_from_file(path)?
        }
        None => Config::default(),
    };

    let output = run(args.command, &config)?;
    println!("{}", output);
    Ok(())
}

fn run(command: Command, config: &Config) -> Result<String> {
    let decimals = config.format.decimals;

    let output = match command {
        Command::Parse { text, canonical } => {
            let coordinate = codec::try_parse(&text)
                .with_context(|| format!("Not a valid coordinate: {:?}", text))?;
            if canonical {
                coordinate.to_string()
            } else {
                codec::format_coordinate(&coordinate, decimals)
            }
        }
        Command::Format { lat, lon, decimals: d } => codec::format(lat, lon, d.unwrap_or(decimals)),
        Command::Check { text } => codec::check(&text).to_string(),
        Command::Distance {
            lat1,
            lon1,
            lat2,
            lon2,
        } => codec::to_fixed(distance::haversine(lat1, lon1, lat2, lon2), decimals),
        Command::Describe { polygon } => {
            let description = geojson::describe_polygon_str(&polygon);
            serde_json::to_string(&description)?
        }
        Command::Contains { lat, lon, polygon } => {
            let polygon = Polygon::from_json(&polygon).context("Failed to parse polygon")?;
            geoloc::pip::point_in_polygon(lon, lat, &polygon).to_string()
        }
        Command::Match {
            lat,
            lon,
            locations,
            precision,
        } => {
            let content = fs::read_to_string(&locations)
                .with_context(|| format!("Failed to read {}", locations.display()))?;
            let entries: Vec<LocationEntry> =
                serde_json::from_str(&content).context("Failed to parse locations")?;
            info!(
                "Matching against {} locations from {}",
                entries.len(),
                locations.display()
            );

            let matcher = precision
                .map(LocationMatcher::new)
                .unwrap_or_else(|| LocationMatcher::from(&config.matcher));
            match matcher.find(lat, lon, &entries) {
                Some(index) => format!("true ({})", index),
                None => "false".to_string(),
            }
        }
    };

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(argv: &[&str]) -> Result<String> {
        let args = Args::try_parse_from(argv)?;
        run(args.command, &Config::default())
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(
            run_args(&["geoloc", "parse", "48.8566, 2.3522"]).unwrap(),
            "48.856600,2.352200"
        );
        assert_eq!(
            run_args(&["geoloc", "parse", "--canonical", "48.8566; 2.3522"]).unwrap(),
            "48.8566,2.3522"
        );
        assert!(run_args(&["geoloc", "parse", "invalid"]).is_err());
    }

    #[test]
    fn test_negative_arguments() {
        assert_eq!(
            run_args(&["geoloc", "format", "-33.5", "-70.25", "-d", "1"]).unwrap(),
            "-33.5,-70.3"
        );
    }

    #[test]
    fn test_check_and_contains() {
        assert_eq!(run_args(&["geoloc", "check", "91,180"]).unwrap(), "false");
        let polygon =
            r#"{"type":"Polygon","coordinates":[[[2.3,48.8],[2.4,48.8],[2.4,48.9],[2.3,48.9],[2.3,48.8]]]}"#;
        assert_eq!(
            run_args(&["geoloc", "contains", "48.85", "2.35", polygon]).unwrap(),
            "true"
        );
    }

    #[test]
    fn test_match_command() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[null, "10,20", {{"type":"Point","coordinates":[2.35,48.85]}}]"#).unwrap();
        let path = file.path().to_str().unwrap();

        assert_eq!(
            run_args(&["geoloc", "match", "48.85", "2.35", "-l", path]).unwrap(),
            "true (2)"
        );
        assert_eq!(
            run_args(&["geoloc", "match", "1", "1", "-l", path]).unwrap(),
            "false"
        );
    }
}
