use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use celestial_core::Location;
use celestial_skyfinder::orientation::parse_components;
use celestial_skyfinder::{OrientationSample, SkyPipeline, SkySolution, SkyfinderConfig};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "skyfinder")]
#[command(about = "Resolve device orientation readings to sky coordinates and Messier objects")]
struct Cli {
    /// Config file (default: <config_dir>/celestial-skyfinder/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print solutions as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(flatten)]
    site: SiteArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct SiteArgs {
    /// Observer latitude in degrees (north positive)
    #[arg(long, global = true, allow_negative_numbers = true)]
    lat: Option<f64>,
    /// Observer longitude in degrees (east positive)
    #[arg(long, global = true, allow_negative_numbers = true)]
    lon: Option<f64>,
    /// Observer altitude in meters
    #[arg(long, global = true, allow_negative_numbers = true)]
    alt: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a single orientation reading
    Solve {
        /// Rotation vector components x,y,z[,w]
        #[arg(long, allow_hyphen_values = true)]
        rv: String,
        /// Capture time: Unix milliseconds or RFC 3339 (default: now)
        #[arg(long)]
        time: Option<String>,
    },
    /// Solve `timestamp x y z [w]` lines read from stdin
    Stream,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = SkyfinderConfig::load(cli.config.as_deref()).context("loading config")?;
    init_logging(&config.logging.filter);

    if let Some(lat) = cli.site.lat {
        config.site.latitude_deg = lat;
    }
    if let Some(lon) = cli.site.lon {
        config.site.longitude_deg = lon;
    }
    if let Some(alt) = cli.site.alt {
        config.site.altitude_m = alt;
    }

    let location = config.to_location().context("invalid observer site")?;
    let pipeline = config.build_pipeline();
    tracing::debug!(?pipeline, %location, "ready");

    match cli.command {
        Commands::Solve { rv, time } => {
            let components = parse_components(&rv)?;
            let timestamp_ms = match time {
                Some(text) => celestial_time::parse_timestamp(&text)?,
                None => celestial_time::unix_millis_now(),
            };
            let sample = OrientationSample::from_components(&components, timestamp_ms);
            let solution = pipeline.solve(&sample, &location);
            emit(&mut io::stdout().lock(), &solution, cli.json)?;
        }
        Commands::Stream => stream(&pipeline, &location, cli.json)?,
    }

    Ok(())
}

fn init_logging(fallback: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn stream(pipeline: &SkyPipeline, location: &Location, json: bool) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut out = io::stdout().lock();

    for (index, line) in stdin.lock().lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        match trimmed.parse::<OrientationSample>() {
            Ok(sample) => emit(&mut out, &pipeline.solve(&sample, location), json)?,
            Err(e) => tracing::warn!(line = index + 1, error = %e, "skipping sample"),
        }
    }

    Ok(())
}

fn emit(out: &mut impl Write, solution: &SkySolution, json: bool) -> anyhow::Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string(solution)?)?;
    } else {
        writeln!(out, "{solution}\n")?;
    }
    out.flush()?;
    Ok(())
}
