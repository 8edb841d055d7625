//! Fetching the schedule document from disk or over HTTP.
use crate::error::{LoadError, Result};
use crate::itinerary::Itinerary;
use std::fmt;
use std::path::PathBuf;

/// Where the schedule document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    File(PathBuf),
    Url(String),
}

impl DocumentSource {
    /// `http://` and `https://` inputs (any case) are URLs, anything else is a path.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        let has_scheme = |scheme: &str| {
            trimmed
                .get(..scheme.len())
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
        };
        if has_scheme("http://") || has_scheme("https://") {
            DocumentSource::Url(trimmed.to_string())
        } else {
            DocumentSource::File(PathBuf::from(trimmed))
        }
    }
}

impl From<&str> for DocumentSource {
    fn from(input: &str) -> Self {
        Self::parse(input)
    }
}

impl fmt::Display for DocumentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentSource::File(path) => write!(f, "{}", path.display()),
            DocumentSource::Url(url) => f.write_str(url),
        }
    }
}

/// Reads the raw document text. A single read, no retries.
pub async fn fetch_document(source: &DocumentSource) -> Result<String> {
    tracing::debug!(%source, "fetching schedule document");
    let text = match source {
        DocumentSource::File(path) => {
            tokio::fs::read_to_string(path)
                .await
                .map_err(|err| LoadError::Read {
                    path: path.clone(),
                    source: err,
                })?
        }
        DocumentSource::Url(url) => fetch_url(url).await?,
    };
    tracing::debug!(%source, bytes = text.len(), "fetched schedule document");
    Ok(text)
}

async fn fetch_url(url: &str) -> Result<String> {
    let request_error = |source: reqwest::Error| LoadError::Request {
        url: url.to_string(),
        source,
    };
    let response = reqwest::get(url).await.map_err(request_error)?;
    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    response.text().await.map_err(request_error)
}

/// Fetches and parses the document into an [`Itinerary`].
pub async fn load_itinerary(source: &DocumentSource, formats: &[&str]) -> Result<Itinerary> {
    let text = fetch_document(source).await?;
    let itinerary = Itinerary::from_json(&text, formats)?;
    tracing::info!(%source, title = %itinerary.title, "loaded itinerary");
    Ok(itinerary)
}
