use thiserror::Error;

/// Error types for the CLI-facing operations (enrichment I/O, registry
/// fetch). Vendor lookups themselves never produce errors; they degrade to
/// the "Unknown" sentinel instead.
#[derive(Error, Debug)]
pub enum MacTableError {
    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("no column matching {0:?} in the input header")]
    MissingMacColumn(String),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP Error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Fetch Error: {0}")]
    Fetch(String),
}
