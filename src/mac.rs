//! MAC address normalization and vendor resolution.

use std::sync::Arc;

use crate::oui::{UNKNOWN_VENDOR, VendorDatabase};

/// Extract the canonical OUI prefix from a raw MAC address string.
///
/// Separators (`:`, `-`, `.`) are stripped and the remainder uppercased; the
/// input must then start with at least 6 hex digits. Anything else - too
/// short, non-hex, empty - yields `None`. Characters past the prefix are
/// ignored, so a full address and a bare prefix both work.
pub fn normalize_prefix(raw: &str) -> Option<String> {
    let mut prefix = String::with_capacity(6);
    for c in raw.chars() {
        if matches!(c, ':' | '-' | '.') {
            continue;
        }
        if !c.is_ascii_hexdigit() {
            return None;
        }
        prefix.push(c.to_ascii_uppercase());
        if prefix.len() == 6 {
            return Some(prefix);
        }
    }
    None
}

/// Resolves raw MAC strings to vendor names against a shared, read-only
/// vendor database. Stateless between calls; safe to use from many threads
/// at once.
#[derive(Debug, Clone)]
pub struct MacResolver {
    db: Arc<VendorDatabase>,
}

impl MacResolver {
    pub fn new(db: Arc<VendorDatabase>) -> Self {
        Self { db }
    }

    /// Resolve a raw MAC address to a display-ready vendor name.
    ///
    /// Malformed input and unknown prefixes both return the
    /// [`UNKNOWN_VENDOR`] sentinel; this never fails, so one bad row cannot
    /// abort a batch.
    pub fn resolve(&self, raw: &str) -> &str {
        match normalize_prefix(raw) {
            Some(prefix) => self.db.lookup(&prefix).unwrap_or(UNKNOWN_VENDOR),
            None => UNKNOWN_VENDOR,
        }
    }

    pub fn database(&self) -> &VendorDatabase {
        &self.db
    }
}
