mod card_fetcher;
mod cards;
mod errors;
mod riftbound_scraper;
#[cfg(test)]
mod test;
mod utilities;

use std::process::ExitCode;

use log::{error, info};

use crate::card_fetcher::run;
use crate::utilities::config::Config;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let config = Config::new();
    env_logger::Builder::new()
        .filter_level(config.log_level)
        .parse_default_env()
        .init();

    let rule = "=".repeat(80);
    println!("{}\nRiftbound Card Fetcher\n{}\n", rule, rule);

    match run(&config).await {
        Ok(report) => {
            report.print_summary();
            if let Some(images) = &report.images {
                info!("{}/{} images available", images.downloaded, images.selected);
            }
            println!("\n✓ Done!");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{:?}", e);
            println!("\n✗ Error: {}", e);
            ExitCode::from(1)
        }
    }
}
