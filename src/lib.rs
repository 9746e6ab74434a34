//! mactable - MAC address vendor resolution and table enrichment
//!
//! This library provides:
//! - OUI (Organizationally Unique Identifier) vendor database loading with
//!   layered sources: an on-disk gzip CSV, a bundled table, and a small
//!   hardcoded fallback
//! - MAC address normalization and vendor resolution
//! - CSV table enrichment with a resolved vendor column

pub mod config;
pub mod enrich;
pub mod errors;
pub mod fetch;
pub mod mac;
pub mod oui;

// Re-export commonly used types for convenience
pub use config::Config;
pub use enrich::EnrichSummary;
pub use errors::MacTableError;
pub use mac::{MacResolver, normalize_prefix};
pub use oui::{DbOrigin, UNKNOWN_VENDOR, VendorDatabase, VendorSource};
