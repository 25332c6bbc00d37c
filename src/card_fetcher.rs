use std::io::Write;
use std::path::Path;

use log::{info, warn};

use crate::cards::card_collection::CardCollection;
use crate::cards::card_summary::CardSummary;
use crate::errors::FetchError;
use crate::riftbound_scraper::{extract_cards, RiftboundScraper};
use crate::utilities::config::Config;
use crate::utilities::constants::IMAGE_EXTENSION;
use crate::utilities::string_manipulators::date_time_as_string;

#[derive(Debug, Default, PartialEq)]
pub struct ImageReport {
    pub selected: usize,
    pub downloaded: usize,
}

#[derive(Debug)]
pub struct RunReport {
    pub cards: CardCollection,
    pub images: Option<ImageReport>,
    pub summary: Option<CardSummary>,
}

impl RunReport {
    pub fn print_summary(&self) {
        let rule = "=".repeat(80);
        println!("\n{}\nSummary\n{}", rule, rule);
        match &self.summary {
            Some(summary) => print!("{}", summary),
            None => println!("Total cards: {}", self.cards.len()),
        }
    }
}

pub async fn fetch_cards(
    scraper: &RiftboundScraper,
    simplify: bool,
) -> Result<CardCollection, FetchError> {
    println!("Fetching build ID from HTML...");
    let build_id = scraper.resolve_build_id().await?;
    println!("✓ Found build ID: {}", build_id);

    println!("Fetching card data...");
    let payload = scraper.fetch_card_data(&build_id).await?;
    println!("✓ Successfully fetched card data");

    let raw_cards = extract_cards(payload)?;
    println!("✓ Extracted {} cards", raw_cards.len());

    if simplify {
        println!("Simplifying card data...");
    }
    let cards = CardCollection::new(raw_cards, simplify);
    if simplify {
        println!("✓ Card data simplified");
    }
    Ok(cards)
}

/// Downloads images for the first `limit` cards (all when `None`), one at a time.
pub async fn download_images(
    scraper: &RiftboundScraper,
    cards: &CardCollection,
    image_dir: &Path,
    limit: Option<usize>,
) -> ImageReport {
    let targets = cards.image_targets();
    let selected = limit.map_or(targets.len(), |limit| limit.min(targets.len()));
    let mut report = ImageReport {
        selected,
        downloaded: 0,
    };

    for (i, target) in targets.iter().take(selected).enumerate() {
        let Some(image_url) = target.image_url.as_deref() else {
            continue;
        };
        let Some(id) = target.id.as_deref() else {
            warn!("Skipping image {}: card has no id", image_url);
            continue;
        };

        let filename = format!("{}{}", id, IMAGE_EXTENSION);
        print!(
            "[{}/{}] Downloading {}... ",
            i + 1,
            selected,
            target.name.as_deref().unwrap_or(id)
        );
        let _ = std::io::stdout().flush();

        if scraper.download_image(image_url, image_dir, &filename).await {
            println!("✓");
            report.downloaded += 1;
        } else {
            println!("✗");
        }
    }

    println!(
        "\n✓ Downloaded {}/{} images",
        report.downloaded, report.selected
    );
    report
}

/// Runs the whole fetch. Anything written before an error stays on disk; the summary is
/// left to the caller so it is printed once the cards are saved.
pub async fn run(config: &Config) -> Result<RunReport, FetchError> {
    let start_time = chrono::prelude::Local::now();
    info!(
        "Starting at {}",
        date_time_as_string(Some(start_time), Some("%Y-%m-%d %H:%M:%S"))
    );

    let client = RiftboundScraper::build_client(config.timeout)?;
    let scraper = RiftboundScraper::new(Some(&config.base_url), client);

    let cards = fetch_cards(&scraper, config.simplify).await?;

    println!("\nSaving card data to {}...", config.output_path.display());
    cards.save(&config.output_path)?;
    println!(
        "✓ Saved {} cards to {}",
        cards.len(),
        config.output_path.display()
    );

    let images = match &config.image_dir {
        Some(image_dir) => {
            println!("\nDownloading card images to {}...", image_dir.display());
            Some(download_images(&scraper, &cards, image_dir, config.image_limit).await)
        }
        None => None,
    };

    let summary = match &cards {
        CardCollection::Simplified(simplified) => Some(CardSummary::from_cards(simplified)),
        CardCollection::Full(_) => None,
    };

    let end_time = chrono::prelude::Local::now();
    info!(
        "Fetch started at: {}. Finished at: {}. Took: {} seconds and with {} cards in: {}",
        start_time,
        end_time,
        (end_time - start_time).num_seconds(),
        cards.len(),
        config.output_path.display()
    );

    Ok(RunReport {
        cards,
        images,
        summary,
    })
}
