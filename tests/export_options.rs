// tests/export_options.rs
//
// Tests for ExportOptions path/extension logic.
//
use std::path::{Path, PathBuf};

use escavador_export::config::options::ExportOptions;
use escavador_export::csv::Delim;
use escavador_export::file::apply_out_arg;

fn norm(p: &Path) -> PathBuf { p.components().collect() }

#[test]
fn default_path_is_out_processos_csv() {
    let opts = ExportOptions::default();
    assert_eq!(norm(&opts.out_path()), norm(Path::new("out/processos.csv")));
}

#[test]
fn extension_follows_format() {
    let mut opts = ExportOptions::default();
    opts.set_path("reports/acme.csv");
    opts.format = Delim::Tsv;
    assert_eq!(norm(&opts.out_path()), norm(Path::new("reports/acme.tsv")));
}

#[test]
fn typed_extension_is_ignored() {
    let mut opts = ExportOptions::default();
    opts.set_path("reports/acme.data");
    assert!(opts.out_path().to_string_lossy().ends_with("acme.csv"));
}

#[test]
fn bare_file_name_lands_in_cwd() {
    let mut opts = ExportOptions::default();
    opts.set_path("acme.csv");
    assert_eq!(opts.out_path(), PathBuf::from("acme.csv"));
}

#[test]
fn out_arg_directory_keeps_default_stem() {
    let tmp = tempfile::tempdir().unwrap();

    // Existing directory
    let mut opts = ExportOptions::default();
    apply_out_arg(&mut opts, &tmp.path().to_string_lossy());
    assert_eq!(opts.out_path(), tmp.path().join("processos.csv"));

    // Trailing separator, directory does not exist yet
    let mut opts = ExportOptions::default();
    apply_out_arg(&mut opts, "exports/");
    assert_eq!(norm(&opts.out_path()), norm(Path::new("exports/processos.csv")));

    // Plain file path
    let mut opts = ExportOptions::default();
    apply_out_arg(&mut opts, "exports/cliente.csv");
    assert_eq!(norm(&opts.out_path()), norm(Path::new("exports/cliente.csv")));

    // Blank leaves the default alone
    let mut opts = ExportOptions::default();
    apply_out_arg(&mut opts, "  ");
    assert_eq!(opts, ExportOptions::default());
}
