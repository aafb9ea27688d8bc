// src/runner.rs
use std::path::PathBuf;

use rand::{RngCore, SeedableRng, rngs::StdRng};

use crate::{
    config::options::{AppOptions, OutputTarget, SampleOptions},
    csv::{self, CsvDocument},
    error::Result,
    file,
    progress::{NullProgress, Progress},
    record::RecordSet,
    sample::sample,
};

/// What a run produced.
pub struct RunSummary {
    /// Where the CSV was written; `None` when the target is stdout.
    pub path: Option<PathBuf>,
    /// Number of records in the source document.
    pub available: usize,
    pub document: CsvDocument,
    /// Rendered CSV, exactly as written.
    pub csv: String,
}

/// Top-level runner: load records, sample, extract, render, save.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(
    opts: &AppOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    opts.validate()?;

    let mut null = NullProgress;
    let sink: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };

    sink.log(&format!("Fetching records from {}…", opts.fetch.source.describe()));
    let records = match RecordSet::load(&opts.fetch) {
        Ok(r) => r,
        Err(e) => {
            loge!("Run: load failed: {e}");
            sink.finish();
            return Err(e);
        }
    };

    let document = generate(&records, &opts.sample, sink);
    let csv = document.render(opts.export.escaping);

    let path = match &opts.export.target {
        OutputTarget::File(user_path) => {
            let written = file::write_export(user_path, &csv);
            sink.finish();
            let written = written?;
            logf!("Run: wrote {} row(s) → {}", document.row_count(), written.display());
            Some(written)
        }
        OutputTarget::Stdout => {
            sink.finish();
            None
        }
    };

    Ok(RunSummary { path, available: records.len(), document, csv })
}

/// Sample and extract an already-loaded record set.
pub fn generate(
    records: &RecordSet,
    opts: &SampleOptions,
    progress: &mut dyn Progress,
) -> CsvDocument {
    let mut rng = rng_for(opts.seed);
    let ids = sample(&records.ids(), opts.count, &mut *rng);

    logf!(
        "Run: sampled {} of {} record(s) (requested {}, seed {:?})",
        ids.len(), records.len(), opts.count, opts.seed
    );
    progress.begin(ids.len());

    csv::build_document_with(records, &ids, |id| progress.item_done(id))
}

/// Seeded → reproducible `StdRng`; unseeded → thread RNG.
pub fn rng_for(seed: Option<u64>) -> Box<dyn RngCore> {
    match seed {
        Some(s) => Box::new(StdRng::seed_from_u64(s)),
        None => Box::new(rand::thread_rng()),
    }
}
