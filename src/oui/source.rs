//! Source loading for the vendor database.
//!
//! Each source load returns an explicit [`LoadOutcome`] instead of raising:
//! the orchestration in [`super::VendorDatabase::from_sources`] tries sources
//! in priority order and a failed load only means "try the next one".

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use flate2::read::GzDecoder;

use super::{DbOrigin, VendorSource, builtin};

/// Result of trying one vendor source.
#[derive(Debug)]
pub enum LoadOutcome {
    Loaded {
        vendors: HashMap<String, String>,
        origin: DbOrigin,
    },
    Unavailable {
        reason: String,
    },
}

pub(super) fn load(source: &VendorSource) -> LoadOutcome {
    match source {
        VendorSource::GzipCsv(path) => load_gzip_csv(path),
        VendorSource::Bundled => LoadOutcome::Loaded {
            vendors: builtin::bundled_map(),
            origin: DbOrigin::Bundled,
        },
        VendorSource::Fallback => LoadOutcome::Loaded {
            vendors: builtin::fallback_map(),
            origin: DbOrigin::Fallback,
        },
    }
}

fn load_gzip_csv(path: &Path) -> LoadOutcome {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            return LoadOutcome::Unavailable {
                reason: format!("{}: {e}", path.display()),
            };
        }
    };

    let decoder = GzDecoder::new(BufReader::new(file));
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(decoder);

    match parse_vendor_csv(&mut reader) {
        Ok(vendors) => LoadOutcome::Loaded {
            vendors,
            origin: DbOrigin::PrimaryFile,
        },
        Err(reason) => LoadOutcome::Unavailable {
            reason: format!("{}: {reason}", path.display()),
        },
    }
}

/// Parse an IEEE-style OUI CSV into a prefix-to-vendor map.
///
/// Columns are matched case-insensitively as `Assignment` (6 hex characters
/// once internal separators are stripped) and `Organization Name`. Rows with
/// a malformed assignment or an empty name are skipped; duplicate prefixes
/// keep the last row seen. A stream-level error (for example a corrupt gzip
/// member) discards the whole source.
pub(crate) fn parse_vendor_csv<R: Read>(
    reader: &mut csv::Reader<R>,
) -> Result<HashMap<String, String>, String> {
    let headers = reader
        .headers()
        .map_err(|e| format!("unreadable header: {e}"))?;

    let assignment_idx = find_column(headers, "assignment")
        .ok_or_else(|| "no Assignment column".to_string())?;
    let org_idx = find_column(headers, "organization name")
        .ok_or_else(|| "no Organization Name column".to_string())?;

    let mut vendors = HashMap::new();
    for result in reader.records() {
        let record = result.map_err(|e| format!("parse error: {e}"))?;

        let Some(prefix) = record.get(assignment_idx).and_then(normalize_assignment) else {
            continue;
        };
        let org = record.get(org_idx).map(str::trim).unwrap_or_default();
        if org.is_empty() {
            continue;
        }

        // Last write wins on duplicate prefixes.
        vendors.insert(prefix, org.to_string());
    }

    if vendors.is_empty() {
        return Err("no usable rows".to_string());
    }
    Ok(vendors)
}

fn find_column(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(name))
}

/// Strip non-hex characters (some encodings carry internal dashes) and
/// require exactly 6 hex digits, uppercased.
fn normalize_assignment(raw: &str) -> Option<String> {
    let prefix: String = raw
        .chars()
        .filter(|c| c.is_ascii_hexdigit())
        .map(|c| c.to_ascii_uppercase())
        .collect();
    (prefix.len() == 6).then_some(prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(csv_content: &str) -> Result<HashMap<String, String>, String> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(csv_content.as_bytes());
        parse_vendor_csv(&mut reader)
    }

    #[test]
    fn parses_ieee_shaped_csv() {
        let csv = "Registry,Assignment,Organization Name,Organization Address\n\
                   MA-L,286FB9,Juniper Networks,\"1133 Innovation Way Sunnyvale CA US 94089\"\n\
                   MA-L,28CFE9,\"Apple, Inc.\",\"1 Apple Park Way Cupertino CA US 95014\"\n";

        let vendors = parse(csv).unwrap();
        assert_eq!(vendors.get("286FB9").unwrap(), "Juniper Networks");
        assert_eq!(vendors.get("28CFE9").unwrap(), "Apple, Inc.");
    }

    #[test]
    fn headers_match_case_insensitively() {
        let csv = "assignment,ORGANIZATION NAME\nB827EB,Raspberry Pi Foundation\n";
        let vendors = parse(csv).unwrap();
        assert_eq!(vendors.get("B827EB").unwrap(), "Raspberry Pi Foundation");
    }

    #[test]
    fn strips_separators_and_uppercases_assignments() {
        let csv = "Assignment,Organization Name\nb8-27-eb,Raspberry Pi Foundation\n";
        let vendors = parse(csv).unwrap();
        assert_eq!(vendors.get("B827EB").unwrap(), "Raspberry Pi Foundation");
    }

    #[test]
    fn skips_unusable_rows() {
        let csv = "Assignment,Organization Name\n\
                   28CFE9,\n\
                   TOOSHORT,Nobody\n\
                   286FB9,Juniper Networks\n";
        let vendors = parse(csv).unwrap();
        assert_eq!(vendors.len(), 1);
        assert_eq!(vendors.get("286FB9").unwrap(), "Juniper Networks");
    }

    #[test]
    fn duplicate_prefixes_keep_last_row() {
        let csv = "Assignment,Organization Name\n\
                   286FB9,First Corp\n\
                   286FB9,Second Corp\n";
        let vendors = parse(csv).unwrap();
        assert_eq!(vendors.get("286FB9").unwrap(), "Second Corp");
    }

    #[test]
    fn all_rows_unusable_is_unavailable() {
        let csv = "Assignment,Organization Name\nXYZ,Nobody\n";
        assert!(parse(csv).is_err());
    }

    #[test]
    fn missing_columns_is_unavailable() {
        let csv = "Prefix,Vendor\n286FB9,Juniper Networks\n";
        assert!(parse(csv).is_err());
    }
}
