use chrono::{DateTime, Local};

use crate::utilities::constants::IMAGE_EXTENSION;

pub fn date_time_as_string(dt: Option<DateTime<Local>>, format: Option<&str>) -> String {
    dt.unwrap_or(Local::now())
        .format(format.unwrap_or("%d_%m_%Y-%H-%M"))
        .to_string()
}

/// Picks the asset hash out of a card image URL.
///
/// The gallery has no hash field, so the first path segment that contains a `-` and an `x`
/// and ends in `.png` (e.g. `abcd1234-744x1039.png`) is taken and everything before its first
/// `-` is returned. No such segment means no hash.
pub fn image_hash_from_url(url: &str) -> Option<String> {
    url.split('/')
        .find(|part| part.contains('-') && part.contains('x') && part.ends_with(IMAGE_EXTENSION))
        .and_then(|part| part.split('-').next())
        .map(|hash| hash.to_string())
}
