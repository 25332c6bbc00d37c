use std::path::Path;
use std::time::Duration;

use lazy_static::lazy_static;
use log::{debug, error, info};
use regex::Regex;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use serde_json::Value;
use tokio::io::AsyncWriteExt;

use crate::errors::FetchError;
use crate::utilities::constants::{
    BUILD_MANIFEST_PATTERN, CARD_DATA_FILE, GALLERY_PATH, RIFTBOUND_URL, USER_AGENT as BROWSER_UA,
};

lazy_static! {
    static ref BUILD_ID_REGEX: Regex = Regex::new(BUILD_MANIFEST_PATTERN).unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathStep {
    Key(&'static str),
    Index(usize),
}

/// Where the gallery page keeps its cards: `pageProps.page.blades[2].cards.items`.
pub const CARD_LIST_PATH: &[PathStep] = &[
    PathStep::Key("pageProps"),
    PathStep::Key("page"),
    PathStep::Key("blades"),
    PathStep::Index(2),
    PathStep::Key("cards"),
    PathStep::Key("items"),
];

pub struct RiftboundScraper {
    client: reqwest::Client,
    base_url: String,
}

impl RiftboundScraper {
    pub fn new(base_url: Option<&str>, client: reqwest::Client) -> Self {
        RiftboundScraper {
            client,
            base_url: base_url
                .unwrap_or(RIFTBOUND_URL)
                .trim_end_matches('/')
                .to_string(),
        }
    }

    /// One client per run. `timeout` of `None` keeps reqwest's default of no timeout.
    pub fn build_client(timeout: Option<Duration>) -> Result<reqwest::Client, FetchError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        builder
            .build()
            .map_err(|e| FetchError::transport(RIFTBOUND_URL, e))
    }

    fn setup_http_headers() -> HeaderMap {
        let mut header_map = HeaderMap::new();
        header_map.insert(ACCEPT, HeaderValue::from_static("*/*"));
        header_map.insert(USER_AGENT, HeaderValue::from_static(BROWSER_UA));
        header_map
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response, FetchError> {
        self.client
            .get(url)
            .headers(Self::setup_http_headers())
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| FetchError::transport(url, e))
    }

    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        self.get(url)
            .await?
            .text()
            .await
            .map_err(|e| FetchError::transport(url, e))
    }

    /// Reads the Next.js build id out of the card gallery page.
    pub async fn resolve_build_id(&self) -> Result<String, FetchError> {
        let url = format!("{}{}", self.base_url, GALLERY_PATH);
        info!("Fetching build id from {}", url);

        let html = self.get_text(&url).await?;
        let build_id = find_build_id(&html).ok_or(FetchError::Resolution { url })?;

        info!("Found build id: {}", build_id);
        Ok(build_id)
    }

    pub async fn fetch_card_data(&self, build_id: &str) -> Result<Value, FetchError> {
        let url = card_data_url(&self.base_url, build_id);
        info!("Fetching card data from {}", url);

        let body = self.get_text(&url).await?;
        serde_json::from_str(&body).map_err(|source| FetchError::Parse { url, source })
    }

    /// Downloads `url` to `output_dir/filename` unless that file is already there.
    /// Failures are logged and reported as `false`.
    pub async fn download_image(&self, url: &str, output_dir: &Path, filename: &str) -> bool {
        match self.try_download_image(url, output_dir, filename).await {
            Ok(()) => true,
            Err(e) => {
                error!("Failed to download {}: {}", filename, e);
                false
            }
        }
    }

    async fn try_download_image(
        &self,
        url: &str,
        output_dir: &Path,
        filename: &str,
    ) -> Result<(), FetchError> {
        tokio::fs::create_dir_all(output_dir).await?;
        let path = output_dir.join(filename);

        if tokio::fs::try_exists(&path).await? {
            debug!("{} already exists, skipping", path.display());
            return Ok(());
        }

        let mut response = self.get(url).await?;
        let mut file = tokio::fs::File::create(&path).await?;

        let written = async {
            while let Some(chunk) = response
                .chunk()
                .await
                .map_err(|e| FetchError::transport(url, e))?
            {
                file.write_all(&chunk).await?;
            }
            file.flush().await?;
            Ok::<(), FetchError>(())
        }
        .await;

        if let Err(e) = written {
            drop(file);
            // A half written image would otherwise count as downloaded next run.
            let _ = tokio::fs::remove_file(&path).await;
            return Err(e);
        }

        debug!("Saved {}", path.display());
        Ok(())
    }
}

pub fn find_build_id(html: &str) -> Option<String> {
    BUILD_ID_REGEX
        .captures(html)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().to_string())
}

pub fn card_data_url(base_url: &str, build_id: &str) -> String {
    format!("{}/_next/data/{}/{}", base_url, build_id, CARD_DATA_FILE)
}

/// Walks `CARD_LIST_PATH` and hands back the card list in gallery order.
pub fn extract_cards(payload: Value) -> Result<Vec<Value>, FetchError> {
    let mut current = payload;
    for step in CARD_LIST_PATH {
        current = match (step, current) {
            (PathStep::Key(key), Value::Object(mut map)) => map
                .remove(*key)
                .ok_or_else(|| FetchError::Structure(format!("missing key '{}'", key)))?,
            (PathStep::Index(index), Value::Array(mut items)) => {
                if *index >= items.len() {
                    return Err(FetchError::Structure(format!(
                        "index {} out of range for list of {}",
                        index,
                        items.len()
                    )));
                }
                items.swap_remove(*index)
            }
            (step, other) => {
                return Err(FetchError::Structure(format!(
                    "cannot look up {:?} in {}",
                    step,
                    json_type(&other)
                )))
            }
        };
    }

    match current {
        Value::Array(cards) => {
            info!("Extracted {} cards", cards.len());
            Ok(cards)
        }
        other => Err(FetchError::Structure(format!(
            "expected a list of cards, found {}",
            json_type(&other)
        ))),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
