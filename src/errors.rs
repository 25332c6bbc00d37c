use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("could not find build id in {url}")]
    Resolution { url: String },
    #[error("card data from {url} is not valid JSON: {source}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("could not extract cards from data structure: {0}")]
    Structure(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl FetchError {
    pub fn transport(url: &str, source: reqwest::Error) -> Self {
        FetchError::Transport {
            url: url.to_string(),
            source,
        }
    }
}
