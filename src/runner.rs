// src/runner.rs
//
// Top-level pipeline: validate → configure provider → collect → export.

use crate::{
    config::options::{AppOptions, QueryOptions},
    core::{sanitize::normalize_identifier, EscavadorClient},
    error::Result,
    file::{self, Written},
    progress::Progress,
    provider::RecordProvider,
    scrape::{self, Collected},
};

/// Summary of what was produced.
#[derive(Debug)]
pub struct RunSummary {
    pub identifier: String,
    pub rows: usize,
    pub columns: usize,
    pub pages: usize,
    /// `None` when nothing matched (no file is written then)
    pub written: Option<Written>,
}

impl RunSummary {
    pub fn is_empty(&self) -> bool { self.rows == 0 }
}

/// Search the configured provider and return every flattened row.
pub fn fetch_dataset(
    query: &QueryOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<Collected> {
    let mut client = EscavadorClient::new(query)?;
    let identifier = normalize_identifier(&query.identifier)?;
    logf!("Searching {} at {}", identifier, client.base_url());
    scrape::collect_rows(&mut client, &identifier, progress)
}

/// Full run: fetch, then export when there is something to export.
pub fn run(opts: &AppOptions, progress: Option<&mut dyn Progress>) -> Result<RunSummary> {
    let collected = fetch_dataset(&opts.query, progress)?;
    finish(opts, collected)
}

/// Full run against any provider.
pub fn run_with<P: RecordProvider + ?Sized>(
    provider: &mut P,
    opts: &AppOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let identifier = normalize_identifier(&opts.query.identifier)?;
    let collected = scrape::collect_rows(provider, &identifier, progress)?;
    finish(opts, collected)
}

fn finish(opts: &AppOptions, collected: Collected) -> Result<RunSummary> {
    let Collected { identifier, data, pages } = collected;

    let written = file::write_export(&opts.export, &data)?;
    match &written {
        Some(Written::File(p)) => logf!("Export: wrote {} rows to {}", data.len(), p.display()),
        Some(Written::Stdout) => logf!("Export: wrote {} rows to stdout", data.len()),
        None => logw!("Export: nothing to export (no cases found)"),
    }

    Ok(RunSummary {
        identifier,
        rows: data.len(),
        columns: data.headers().len(),
        pages,
        written,
    })
}
