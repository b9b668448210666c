// tests/export_e2e.rs
//
// Whole pipeline through `runner::run_with` with a scripted provider.
mod common;

use std::fs;

use common::*;
use escavador_export::config::options::AppOptions;
use escavador_export::csv::{self, Delim};
use escavador_export::file::Written;
use escavador_export::flatten::COVER_COLUMNS;
use escavador_export::runner;
use escavador_export::Error;

fn opts_in(dir: &std::path::Path, identifier: &str) -> AppOptions {
    let mut opts = AppOptions::default();
    opts.query.identifier = identifier.into();
    opts.export.set_path(&dir.join("processos.csv").to_string_lossy());
    opts
}

fn cell_of<'a>(header: &[String], row: &'a [String], name: &str) -> &'a str {
    let i = header.iter().position(|h| h == name).unwrap_or_else(|| panic!("missing {name}"));
    &row[i]
}

#[test]
fn one_case_one_source_two_parties_no_cover() {
    let tmp = tempfile::tempdir().unwrap();
    let mut src = source("TJSP");
    src.parties = vec![party("Ana Souza"), party("Banco Exemplo S.A.")];
    src.searched_party_types = vec![searched("Autor", "ATIVO")];
    let mut p = ScriptedProvider::pages(vec![vec![case("0000001-02.2021.8.26.0100", vec![src])]]);

    let summary = runner::run_with(&mut p, &opts_in(tmp.path(), "12345678901"), None).unwrap();
    assert_eq!(p.searches, vec!["12345678901"]);
    assert_eq!(summary.rows, 1);
    assert_eq!(summary.pages, 1);

    let path = match summary.written {
        Some(Written::File(p)) => p,
        other => panic!("expected a file, got {other:?}"),
    };
    let text = fs::read_to_string(path).unwrap();
    let parsed = csv::parse_rows(&text, Delim::Csv);
    assert_eq!(parsed.len(), 2);

    let header = &parsed[0];
    let row = &parsed[1];
    let cell = |name: &str| cell_of(header, row, name);

    assert_eq!(cell("numero"), "0000001-02.2021.8.26.0100");
    assert_eq!(cell("data_inicio"), "2021-03-04");
    assert_eq!(cell("titulo_polo_ativo"), "Autor");
    assert_eq!(cell("tribunal"), "Tribunal de Justiça TJSP");
    assert_eq!(cell("tipo_99_normalizado"), "Autor");
    for col in COVER_COLUMNS {
        assert_eq!(cell(col), "", "{col}");
    }
    assert_eq!(cell("envolvido1_nome"), "Ana Souza");
    assert_eq!(cell("envolvido2_nome"), "Banco Exemplo S.A.");
    assert_eq!(cell("envolvido2_tipo"), "REQUERENTE");
    assert!(!header.iter().any(|h| h.starts_with("envolvido3_")));
}

#[test]
fn masked_identifier_reaches_provider_as_digits() {
    let tmp = tempfile::tempdir().unwrap();
    let mut p = ScriptedProvider::pages(vec![vec![case("1", vec![source("TJSP")])]]);
    let summary = runner::run_with(&mut p, &opts_in(tmp.path(), "123.456.789-01"), None).unwrap();
    assert_eq!(p.searches, vec!["12345678901"]);
    assert_eq!(summary.identifier, "12345678901");
}

#[test]
fn no_matches_is_not_an_error_and_writes_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    let mut p = ScriptedProvider::new(vec![Ok(None)]);
    let summary = runner::run_with(&mut p, &opts_in(tmp.path(), "12345678901"), None).unwrap();
    assert!(summary.is_empty());
    assert!(summary.written.is_none());
    assert!(!tmp.path().join("processos.csv").exists());
}

#[test]
fn bad_identifier_fails_before_any_search() {
    let tmp = tempfile::tempdir().unwrap();
    let mut p = ScriptedProvider::pages(vec![]);
    let err = runner::run_with(&mut p, &opts_in(tmp.path(), "  "), None).unwrap_err();
    assert!(matches!(err, Error::InvalidIdentifier(_)));
    assert!(p.searches.is_empty());
}

#[test]
fn run_without_token_is_a_configuration_error() {
    let tmp = tempfile::tempdir().unwrap();
    let mut opts = opts_in(tmp.path(), "12345678901");
    opts.query.token = None;
    let err = runner::run(&opts, None).unwrap_err();
    assert!(matches!(err, Error::Config(_)), "{err:?}");
    assert!(err.to_string().contains("missing access token"));
}
