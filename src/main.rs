use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use polyquery::config::{FileConfig, MAX_PRECISION};
use polyquery::output::{DEFAULT_PRECISION, ReplyWriter};
use polyquery::session::{load_polygons, run_commands};

/// Load polygon records from a file and answer queries read from stdin
///
/// Records are one per line: `<count> (x;y) (x;y) ...`
///
/// Commands:
///   AREA <EVEN|ODD|MEAN|N>       sum (or mean) of areas
///   MAX|MIN <AREA|VERTEXES>      extreme area or vertex count
///   COUNT <EVEN|ODD|N>           number of matching polygons
///   RECTS                        number of rectangles
///   INFRAME <polygon>            whether the polygon fits the bounding frame
///   LESSAREA <polygon>           number of polygons with a smaller area
///   MAXSEQ <polygon>             longest run of polygons equal to the given one
#[derive(Parser, Debug)]
#[command(name = "polyquery")]
#[command(version, about, long_about = None)]
struct Args {
    /// Polygon record file
    file: PathBuf,

    /// Path to config file (optional, auto-searches polyquery.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Digits after the decimal point for area results
    #[arg(short = 'p', long, value_parser = clap::value_parser!(u8).range(0..=MAX_PRECISION as i64))]
    precision: Option<u8>,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let file_config = match args.config {
        Some(ref config_path) => Some(FileConfig::from_path(config_path)?),
        None => FileConfig::load(),
    };

    let verbose = args.verbose || file_config.as_ref().map(|c| c.verbose).unwrap_or(false);
    let precision = args
        .precision
        .or_else(|| file_config.as_ref().map(|c| c.precision))
        .map(usize::from)
        .unwrap_or(DEFAULT_PRECISION);

    init_logging(verbose);

    let file = File::open(&args.file)
        .context(format!("Failed to open polygon file: {}", args.file.display()))?;
    let report = load_polygons(BufReader::new(file))?;
    if !report.skipped.is_empty() {
        log::debug!("Skipped lines: {:?}", report.skipped);
    }

    let stdin = io::stdin();
    let mut writer = ReplyWriter::new(io::stdout().lock(), precision);
    run_commands(&report.polygons, stdin.lock(), &mut writer)
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}
