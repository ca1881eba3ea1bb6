//! Error handling module for the Nexus image audit tool

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AuditError>;

#[derive(Error, Debug)]
pub enum AuditError {
    /// Search endpoint returned something other than a decodable 2xx page.
    #[error("search request to {url} failed: {detail}")]
    Search { url: String, detail: String },
    /// Delete endpoint returned anything but 204 No Content.
    #[error("delete request to {url} returned {status}")]
    Delete {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("invalid version pattern: {0}")]
    Pattern(#[from] regex::Error),
    #[error("configuration error: {0}")]
    Config(String),
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_error_reports_failing_url() {
        let err = AuditError::Search {
            url: "https://nexus.example.org/service/siesta/rest/beta/search?repository=docker"
                .to_string(),
            detail: "500 Internal Server Error".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("search?repository=docker"));
        assert!(message.contains("500"));
    }

    #[test]
    fn delete_error_reports_url_and_status() {
        let err = AuditError::Delete {
            url: "https://nexus.example.org/service/siesta/rest/beta/components/abc123"
                .to_string(),
            status: reqwest::StatusCode::NOT_FOUND,
        };
        let message = err.to_string();
        assert!(message.contains("components/abc123"));
        assert!(message.contains("404"));
    }
}
