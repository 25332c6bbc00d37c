use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use log::LevelFilter;

use crate::utilities::constants::{DEFAULT_OUTPUT_PATH, RIFTBOUND_URL};

/// Fetch Riftbound card data from the official website
#[derive(Debug, Parser)]
#[command(name = "riftbound_card_fetcher", version)]
pub struct Args {
    /// Output JSON file path
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Save full card data instead of the simplified version
    #[arg(long)]
    pub full: bool,

    /// Download card images to this directory
    #[arg(long, value_name = "DIR")]
    pub images: Option<PathBuf>,

    /// Limit number of images to download
    #[arg(long)]
    pub limit: Option<usize>,

    /// Site to fetch the card gallery from
    #[arg(long, default_value = RIFTBOUND_URL)]
    pub base_url: String,

    /// Per request timeout in seconds (no timeout when omitted)
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub output_path: PathBuf,
    pub simplify: bool,
    pub image_dir: Option<PathBuf>,
    pub image_limit: Option<usize>,
    pub base_url: String,
    pub timeout: Option<Duration>,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            simplify: true,
            image_dir: None,
            image_limit: None,
            base_url: RIFTBOUND_URL.to_string(),
            timeout: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Config::from(Args::parse())
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            output_path: args.output,
            simplify: !args.full,
            image_dir: args.images,
            image_limit: args.limit,
            base_url: args.base_url.trim_end_matches('/').to_string(),
            timeout: args.timeout_secs.map(Duration::from_secs),
            log_level: if args.verbose {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
        }
    }
}
