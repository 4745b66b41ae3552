use std::fmt;

/// Scraper error types
#[derive(Debug)]
pub enum ScrapeError {
    /// Network or protocol failure while fetching the pricing page
    Fetch(reqwest::Error),
    /// Pricing page answered with a non-success status
    HttpStatus(reqwest::StatusCode),
    /// No pricing rows were found anywhere in the page
    NoData,
    /// Rows were extracted but none survived normalization
    NoParsedData,
    /// Failed to write the output file
    Io(std::io::Error),
    /// Failed to serialize the dataset
    Json(serde_json::Error),
}

impl fmt::Display for ScrapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetch(err) => write!(f, "Error fetching page: {}", err),
            Self::HttpStatus(status) => write!(f, "Error fetching page: HTTP {}", status),
            Self::NoData => write!(f, "No pricing data found in the page"),
            Self::NoParsedData => write!(f, "Failed to parse any instance type pricing"),
            Self::Io(err) => write!(f, "Error writing output: {}", err),
            Self::Json(err) => write!(f, "Error serializing pricing data: {}", err),
        }
    }
}

impl std::error::Error for ScrapeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Fetch(err) => Some(err),
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            _ => None,
        }
    }
}

// Implement conversions from common error types
impl From<reqwest::Error> for ScrapeError {
    fn from(err: reqwest::Error) -> Self {
        Self::Fetch(err)
    }
}

impl From<std::io::Error> for ScrapeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for ScrapeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}
