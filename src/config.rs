use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// IEEE MA-L registry in CSV form, the upstream of the primary source.
pub const IEEE_OUI_CSV_URL: &str = "https://standards-oui.ieee.org/oui/oui.csv";

/// File name of the compressed vendor database, expected next to the binary.
pub const DB_FILE_NAME: &str = "oui.csv.gz";

/// Settings for database location and registry download.
#[derive(Debug, Clone)]
pub struct Config {
    /// Location of the gzip-compressed OUI CSV (the primary vendor source)
    pub db_path: PathBuf,

    /// URL the `fetch` bootstrap downloads the registry from
    pub fetch_url: String,

    /// Bound on the whole download request
    pub fetch_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            fetch_url: IEEE_OUI_CSV_URL.to_string(),
            fetch_timeout: Duration::from_secs(30),
        }
    }
}

/// Resolve the default database path.
///
/// Precedence: the `MACTABLE_OUI_DB` environment variable, then `oui.csv.gz`
/// next to the executable if such a file exists, then `oui.csv.gz` in the
/// working directory.
pub fn default_db_path() -> PathBuf {
    if let Ok(path) = env::var("MACTABLE_OUI_DB") {
        return PathBuf::from(path);
    }

    let exe_local = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(DB_FILE_NAME)));
    match exe_local {
        Some(path) if path.is_file() => path,
        _ => PathBuf::from(DB_FILE_NAME),
    }
}
