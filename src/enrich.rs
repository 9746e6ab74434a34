//! CSV table enrichment: append a resolved vendor column to a table of MAC
//! addresses. The input may be plain CSV or gzip-compressed CSV.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use csv::StringRecord;
use flate2::read::GzDecoder;

use crate::errors::MacTableError;
use crate::mac::MacResolver;
use crate::oui::UNKNOWN_VENDOR;

/// Header of the appended column.
pub const VENDOR_COLUMN: &str = "Vendor";

/// Header names recognized as the MAC column when none is requested.
const MAC_HEADER_CANDIDATES: &[&str] = &["mac", "mac address", "mac_address", "macaddress"];

/// Per-run aggregates, reported after enrichment.
#[derive(Debug, Default)]
pub struct EnrichSummary {
    pub rows: u64,
    pub unknown: u64,
    counts: HashMap<String, u64>,
}

impl EnrichSummary {
    /// Vendor frequencies, most common first. Ties break by name so the
    /// ordering is stable.
    pub fn top_vendors(&self, limit: usize) -> Vec<(String, u64)> {
        let mut ranked: Vec<(String, u64)> = self
            .counts
            .iter()
            .map(|(vendor, count)| (vendor.clone(), *count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(limit);
        ranked
    }
}

/// Open a CSV table, transparently decompressing `.gz` inputs.
pub fn open_table(path: &Path) -> Result<csv::Reader<Box<dyn Read>>, MacTableError> {
    let file = File::open(path)?;
    let raw: Box<dyn Read> = if path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
    {
        Box::new(GzDecoder::new(BufReader::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };
    Ok(csv::ReaderBuilder::new().flexible(true).from_reader(raw))
}

/// Copy `reader` to `out` with a [`VENDOR_COLUMN`] appended to every row.
///
/// The MAC column is located case-insensitively, either by the requested
/// name or from the common candidates. Rows with malformed or unknown
/// addresses get the "Unknown" sentinel; a bad row never aborts the batch.
/// Column order and row order are preserved.
pub fn enrich_table<R: Read, W: Write>(
    reader: &mut csv::Reader<R>,
    out: W,
    resolver: &MacResolver,
    mac_column: Option<&str>,
) -> Result<EnrichSummary, MacTableError> {
    let headers = reader.headers()?.clone();
    let mac_idx = find_mac_column(&headers, mac_column)?;

    let mut writer = csv::WriterBuilder::new().flexible(true).from_writer(out);
    let mut out_headers = headers.clone();
    out_headers.push_field(VENDOR_COLUMN);
    writer.write_record(&out_headers)?;

    let mut summary = EnrichSummary::default();
    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!("skipping unreadable row: {e}");
                continue;
            }
        };

        let vendor = resolver.resolve(record.get(mac_idx).unwrap_or_default());
        summary.rows += 1;
        if vendor == UNKNOWN_VENDOR {
            summary.unknown += 1;
        }
        *summary.counts.entry(vendor.to_string()).or_insert(0) += 1;

        let mut enriched = record;
        enriched.push_field(vendor);
        writer.write_record(&enriched)?;
    }
    writer.flush()?;

    Ok(summary)
}

/// Locate the MAC column in the header row, case-insensitively.
pub fn find_mac_column(
    headers: &StringRecord,
    requested: Option<&str>,
) -> Result<usize, MacTableError> {
    match requested {
        Some(name) => headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(name))
            .ok_or_else(|| MacTableError::MissingMacColumn(name.to_string())),
        None => headers
            .iter()
            .position(|h| MAC_HEADER_CANDIDATES.contains(&h.trim().to_ascii_lowercase().as_str()))
            .ok_or_else(|| MacTableError::MissingMacColumn("mac".to_string())),
    }
}
