pub const RIFTBOUND_URL: &str = "https://riftbound.leagueoflegends.com";
pub const GALLERY_PATH: &str = "/en-us/card-gallery/";
pub const CARD_DATA_FILE: &str = "en-us/card-gallery.json";

pub const BUILD_MANIFEST_PATTERN: &str = r"/_next/static/([^/]+)/_buildManifest\.js";

pub const USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36";

pub const DEFAULT_OUTPUT_PATH: &str = "cards.json";
pub const IMAGE_EXTENSION: &str = ".png";

pub const UNKNOWN_GROUP: &str = "Unknown";
