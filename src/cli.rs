// src/cli.rs
use std::io::Write;
use std::path::PathBuf;

use clap::Parser;

use crate::config::consts::{DEFAULT_SAMPLE_COUNT, DEFAULT_TIMEOUT_SECS};
use crate::config::options::{AppOptions, Escaping, OutputTarget, Source};
use crate::error::{Error, Result};
use crate::log::{self, LogOptions};
use crate::progress::Progress;

/// Sample SCP item records and write Name/Class/Containment/Description as CSV.
#[derive(Debug, Parser)]
#[command(name = "scp_csv", version, about)]
pub struct Args {
    /// Number of records to sample (all records if larger than the set)
    #[arg(short = 'n', long, default_value_t = DEFAULT_SAMPLE_COUNT)]
    pub count: usize,

    /// Record document URL (defaults to the SCP series-1 dump)
    #[arg(short, long, env = "SCP_CSV_URL", conflicts_with = "input")]
    pub url: Option<String>,

    /// Read the record document from a local JSON file instead
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output file, or directory to receive data.csv
    #[arg(short, long, conflicts_with = "stdout")]
    pub out: Option<PathBuf>,

    /// Print the CSV instead of writing a file
    #[arg(long)]
    pub stdout: bool,

    /// Seed the sampler for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Quote fields containing commas, quotes or newlines (RFC 4180)
    #[arg(long)]
    pub escape: bool,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Mirror log output to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn into_options(self) -> AppOptions {
        let mut opts = AppOptions::default();

        if let Some(path) = self.input {
            opts.fetch.source = Source::File(path);
        } else if let Some(url) = self.url {
            opts.fetch.source = Source::Url(url);
        }
        opts.fetch.timeout_secs = self.timeout;

        opts.sample.count = self.count;
        opts.sample.seed = self.seed;

        if self.stdout {
            opts.export.target = OutputTarget::Stdout;
        } else if let Some(out) = self.out {
            opts.export.target = OutputTarget::File(out);
        }
        if self.escape {
            opts.export.escaping = Escaping::Rfc4180;
        }
        opts
    }
}

/// Status lines on stderr so stdout stays clean for `--stdout`.
struct CliProgress {
    done: usize,
    total: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        eprintln!("Extracting {total} record(s)…");
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, id: &str) {
        self.done += 1;
        logd!("Extracted {id} ({}/{})", self.done, self.total);
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    log::init(LogOptions { emit_stderr: args.verbose, ..LogOptions::default() })?;

    let opts = args.into_options();
    logf!("CLI: {:?}", opts);

    let mut progress = CliProgress { done: 0, total: 0 };
    let summary = crate::runner::run(&opts, Some(&mut progress))?;

    match summary.path {
        Some(path) => eprintln!(
            "Wrote {} of {} record(s) to {}",
            summary.document.row_count(),
            summary.available,
            path.display()
        ),
        None => {
            let mut out = std::io::stdout().lock();
            writeln!(out, "{}", summary.csv).map_err(|e| Error::io("<stdout>", e))?;
        }
    }
    Ok(())
}
