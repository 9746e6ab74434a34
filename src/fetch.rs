//! Bootstrap download of the IEEE OUI registry.
//!
//! Fetches the registry CSV, sanity-checks that it parses, and installs it
//! gzip-compressed at the primary-source path. This is an explicit operator
//! step; a running database is never affected by a failed fetch.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use std::time::Duration;

use flate2::Compression;
use flate2::write::GzEncoder;

use crate::errors::MacTableError;
use crate::oui::parse_vendor_csv;

// 50MB cap; the registry is ~3MB today.
const MAX_BODY_BYTES: u64 = 50_000_000;

/// Download the registry from `url` and write it gzip-compressed to
/// `output`. Returns the number of usable vendor entries found.
pub fn fetch_database(
    url: &str,
    timeout: Duration,
    output: &Path,
) -> Result<usize, MacTableError> {
    tracing::info!("downloading OUI registry from {url}");

    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()?;
    let response = client.get(url).send()?;
    if !response.status().is_success() {
        return Err(MacTableError::Fetch(format!(
            "HTTP {} from {url}",
            response.status()
        )));
    }

    let mut body = String::new();
    response.take(MAX_BODY_BYTES).read_to_string(&mut body)?;

    // Refuse to install a body that does not parse as an OUI CSV.
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(body.as_bytes());
    let entries = parse_vendor_csv(&mut reader)
        .map_err(|reason| MacTableError::Fetch(format!("registry did not parse: {reason}")))?
        .len();

    let file = File::create(output)?;
    let mut encoder = GzEncoder::new(file, Compression::best());
    encoder.write_all(body.as_bytes())?;
    encoder.finish()?;

    tracing::info!(entries, path = %output.display(), "installed OUI registry");
    Ok(entries)
}
