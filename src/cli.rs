// src/cli.rs
use std::io::{self, Write};

use clap::Parser;

use crate::config::consts::{API_BASE_URL, REQUEST_TIMEOUT_SECS, TOKEN_ENV};
use crate::config::options::AppOptions;
use crate::csv::Delim;
use crate::file::{self, Written};
use crate::progress::Progress;
use crate::runner::{self, RunSummary};

/// Export Escavador lawsuits for a CPF/CNPJ to CSV.
#[derive(Debug, Parser)]
#[command(name = "escavador_export", version, about)]
pub struct Args {
    /// CPF or CNPJ of the party (digits, mask allowed)
    #[arg(long = "cpf-cnpj", value_name = "ID")]
    pub identifier: String,

    /// Escavador API token
    #[arg(long, env = TOKEN_ENV, hide_env_values = true)]
    pub token: Option<String>,

    /// Output file or directory (extension follows --format)
    #[arg(short, long, value_name = "PATH")]
    pub out: Option<String>,

    /// csv | tsv
    #[arg(long, default_value = "csv")]
    pub format: Delim,

    /// Write the export to stdout instead of a file
    #[arg(long, conflicts_with = "out")]
    pub stdout: bool,

    #[arg(long, default_value = API_BASE_URL, hide = true)]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = REQUEST_TIMEOUT_SECS)]
    pub timeout: u64,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn into_options(self) -> AppOptions {
        let mut opts = AppOptions::default();
        opts.query.identifier = self.identifier;
        opts.query.token = self.token;
        opts.query.base_url = self.base_url;
        opts.query.timeout_secs = self.timeout;

        opts.export.format = self.format;
        opts.export.to_stdout = self.stdout;
        if let Some(o) = &self.out {
            file::apply_out_arg(&mut opts.export, o);
        }
        opts
    }
}

/// Status lines on stderr so stdout stays clean for `--stdout`.
struct StderrProgress;

impl Progress for StderrProgress {
    fn begin(&mut self, identifier: &str) {
        eprintln!("Searching cases for {identifier}…");
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn page_done(&mut self, page: usize, rows: usize) {
        eprintln!("  page {page}: {rows} rows so far");
    }
}

pub fn run() -> crate::Result<RunSummary> {
    let args = Args::parse();
    crate::log::init(args.verbose);

    let opts = args.into_options();
    let summary = runner::run(&opts, Some(&mut StderrProgress))?;
    report(&summary);
    Ok(summary)
}

fn report(summary: &RunSummary) {
    let mut err = io::stderr().lock();
    if summary.is_empty() {
        let _ = writeln!(err, "No cases found for {}.", summary.identifier);
        return;
    }
    let _ = writeln!(
        err,
        "{} records found ({} columns, {} pages).",
        summary.rows, summary.columns, summary.pages
    );
    if let Some(Written::File(p)) = &summary.written {
        let _ = writeln!(err, "Wrote {}", p.display());
    }
}
