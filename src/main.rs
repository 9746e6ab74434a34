use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use mactable::{Config, MacResolver, MacTableError, VendorDatabase, enrich, fetch, normalize_prefix};

#[derive(Parser)]
#[command(name = "mactable")]
#[command(about = "Resolve MAC address vendors via OUI prefixes and enrich CSV tables")]
struct Cli {
    /// Path to the gzip-compressed OUI CSV database
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve one or more MAC addresses
    Lookup {
        #[arg(required = true)]
        macs: Vec<String>,

        /// Emit results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Append a Vendor column to a CSV table of MAC addresses
    Enrich {
        /// Input table, plain CSV or gzip-compressed CSV
        #[arg(long)]
        input: PathBuf,

        /// Output CSV path; stdout when omitted
        #[arg(long)]
        output: Option<PathBuf>,

        /// Header of the column holding MAC addresses
        #[arg(long)]
        mac_column: Option<String>,

        /// Print vendor frequencies to stderr after enriching
        #[arg(long)]
        summary: bool,
    },
    /// Download the IEEE OUI registry and install it as the local database
    Fetch {
        /// Registry URL
        #[arg(long)]
        url: Option<String>,

        /// Request timeout in seconds
        #[arg(long, default_value = "30")]
        timeout_secs: u64,
    },
}

#[derive(Serialize)]
struct LookupResult<'a> {
    mac: &'a str,
    prefix: Option<String>,
    vendor: &'a str,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), MacTableError> {
    let mut config = Config::default();
    if let Some(db) = cli.db {
        config.db_path = db;
    }

    match cli.command {
        Command::Lookup { macs, json } => {
            let db = Arc::new(VendorDatabase::load(&config.db_path));
            let resolver = MacResolver::new(db);

            if json {
                let results: Vec<LookupResult> = macs
                    .iter()
                    .map(|mac| LookupResult {
                        mac,
                        prefix: normalize_prefix(mac),
                        vendor: resolver.resolve(mac),
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                for mac in &macs {
                    println!("{mac}\t{}", resolver.resolve(mac));
                }
            }
            Ok(())
        }
        Command::Enrich {
            input,
            output,
            mac_column,
            summary,
        } => {
            let db = Arc::new(VendorDatabase::load(&config.db_path));
            let resolver = MacResolver::new(db);

            let mut reader = enrich::open_table(&input)?;
            let run_summary = match &output {
                Some(path) => {
                    let out = BufWriter::new(File::create(path)?);
                    enrich::enrich_table(&mut reader, out, &resolver, mac_column.as_deref())?
                }
                None => {
                    let stdout = io::stdout();
                    enrich::enrich_table(&mut reader, stdout.lock(), &resolver, mac_column.as_deref())?
                }
            };

            if summary {
                let mut stderr = io::stderr().lock();
                writeln!(
                    stderr,
                    "{} rows enriched, {} unknown",
                    run_summary.rows, run_summary.unknown
                )?;
                for (vendor, count) in run_summary.top_vendors(10) {
                    writeln!(stderr, "{count:>8}  {vendor}")?;
                }
            }
            Ok(())
        }
        Command::Fetch { url, timeout_secs } => {
            let url = url.unwrap_or(config.fetch_url);
            let entries =
                fetch::fetch_database(&url, Duration::from_secs(timeout_secs), &config.db_path)?;
            println!(
                "installed {} vendor entries at {}",
                entries,
                config.db_path.display()
            );
            Ok(())
        }
    }
}
