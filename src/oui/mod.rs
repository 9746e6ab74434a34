//! OUI vendor database: an immutable-after-load mapping from 24-bit MAC
//! prefixes to organization names, built once from the best available source.

mod builtin;
mod source;

pub use source::LoadOutcome;
pub(crate) use source::parse_vendor_csv;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Sentinel returned for any address or prefix that cannot be resolved.
/// Callers get this instead of an error; bulk processing never aborts on a
/// bad row.
pub const UNKNOWN_VENDOR: &str = "Unknown";

/// A candidate source for the vendor mapping. Sources are tried in order;
/// the first one that yields a non-empty mapping wins.
#[derive(Debug, Clone)]
pub enum VendorSource {
    /// Gzip-compressed IEEE-style CSV with `Assignment` and
    /// `Organization Name` columns
    GzipCsv(PathBuf),
    /// Table of well-known prefixes compiled into the binary
    Bundled,
    /// Tiny hardcoded table, always available
    Fallback,
}

/// Which source the active mapping was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbOrigin {
    PrimaryFile,
    Bundled,
    Fallback,
}

/// Prefix-to-vendor mapping. Constructed once, read-only afterwards, so it
/// can be shared across threads behind an `Arc` without locking.
#[derive(Debug)]
pub struct VendorDatabase {
    vendors: HashMap<String, String>,
    origin: DbOrigin,
}

impl VendorDatabase {
    /// Build the database with the default source chain: the on-disk gzip
    /// CSV at `primary`, then the bundled table, then the hardcoded
    /// fallback. Never fails; the fallback guarantees a non-empty mapping.
    pub fn load(primary: &Path) -> Self {
        Self::from_sources(&[
            VendorSource::GzipCsv(primary.to_path_buf()),
            VendorSource::Bundled,
            VendorSource::Fallback,
        ])
    }

    /// Build the database from an explicit source chain. Unavailable
    /// sources are logged and skipped. An empty or exhausted chain still
    /// produces a usable database: the hardcoded fallback is applied last.
    pub fn from_sources(sources: &[VendorSource]) -> Self {
        for candidate in sources {
            match source::load(candidate) {
                LoadOutcome::Loaded { vendors, origin } => {
                    tracing::info!(?origin, entries = vendors.len(), "loaded vendor database");
                    return Self { vendors, origin };
                }
                LoadOutcome::Unavailable { reason } => {
                    tracing::warn!("vendor source unavailable: {reason}");
                }
            }
        }
        tracing::warn!("no vendor source available, using hardcoded fallback");
        Self {
            vendors: builtin::fallback_map(),
            origin: DbOrigin::Fallback,
        }
    }

    /// Look up a 6-hex-digit OUI prefix. Case-insensitive; separators are
    /// not accepted here (see [`crate::mac::normalize_prefix`]).
    pub fn lookup(&self, prefix: &str) -> Option<&str> {
        if prefix.bytes().any(|b| b.is_ascii_lowercase()) {
            self.vendors
                .get(&prefix.to_ascii_uppercase())
                .map(String::as_str)
        } else {
            self.vendors.get(prefix).map(String::as_str)
        }
    }

    /// Resolve a raw MAC address string to a display-ready vendor name.
    /// Never fails: malformed input and unknown prefixes both yield
    /// [`UNKNOWN_VENDOR`].
    pub fn lookup_vendor(&self, mac: &str) -> &str {
        crate::mac::normalize_prefix(mac)
            .and_then(|prefix| self.lookup(&prefix))
            .unwrap_or(UNKNOWN_VENDOR)
    }

    pub fn origin(&self) -> DbOrigin {
        self.origin
    }

    pub fn len(&self) -> usize {
        self.vendors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vendors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_primary_falls_through_to_bundled() {
        let db = VendorDatabase::from_sources(&[
            VendorSource::GzipCsv(PathBuf::from("/nonexistent/oui.csv.gz")),
            VendorSource::Bundled,
            VendorSource::Fallback,
        ]);
        assert_eq!(db.origin(), DbOrigin::Bundled);
        assert_eq!(db.lookup("B827EB"), Some("Raspberry Pi Foundation"));
    }

    #[test]
    fn fallback_only_chain_answers_known_prefixes() {
        let db = VendorDatabase::from_sources(&[VendorSource::Fallback]);
        assert_eq!(db.origin(), DbOrigin::Fallback);
        assert_eq!(db.lookup("B827EB"), Some("Raspberry Pi Foundation"));
        assert_eq!(db.lookup("FFFFFF"), None);
        assert!(!db.is_empty());
    }

    #[test]
    fn empty_chain_still_yields_fallback() {
        let db = VendorDatabase::from_sources(&[]);
        assert_eq!(db.origin(), DbOrigin::Fallback);
        assert_eq!(db.lookup("000000"), Some("Xerox Corporation"));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let db = VendorDatabase::from_sources(&[VendorSource::Fallback]);
        assert_eq!(db.lookup("b827eb"), db.lookup("B827EB"));
    }

    #[test]
    fn lookup_vendor_handles_raw_macs() {
        let db = VendorDatabase::from_sources(&[VendorSource::Fallback]);
        assert_eq!(db.lookup_vendor("B8:27:EB:12:34:56"), "Raspberry Pi Foundation");
        assert_eq!(db.lookup_vendor("not a mac"), UNKNOWN_VENDOR);
    }
}
