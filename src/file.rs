// src/file.rs

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use crate::config::consts::DEFAULT_FILE;
use crate::config::options::ExportOptions;
use crate::csv::to_export_bytes;
use crate::store::DataSet;

/// Where an export ended up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Written {
    File(PathBuf),
    Stdout,
}

/// Export `ds` per `export` (file or stdout). `Ok(None)` when there are no rows.
pub fn write_export(export: &ExportOptions, ds: &DataSet) -> io::Result<Option<Written>> {
    let Some(bytes) = to_export_bytes(ds, export.format) else {
        return Ok(None);
    };

    if export.to_stdout {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        out.write_all(&bytes)?;
        out.flush()?;
        return Ok(Some(Written::Stdout));
    }

    let path = export.out_path();
    write_bytes(&path, &bytes)?;
    Ok(Some(Written::File(path)))
}

/// Ensure the parent dir exists, then create/truncate `path` with `bytes`.
pub fn write_bytes(path: &Path, bytes: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, bytes)
}

/// Apply a user-supplied `-o` value. A directory (existing, or ending in a
/// separator) keeps the default file stem inside it.
pub fn apply_out_arg(export: &mut ExportOptions, user_o: &str) {
    let user_o = user_o.trim();
    if user_o.is_empty() { return; }

    let p = PathBuf::from(normalize_separators(user_o));
    if looks_like_dir_hint(&p) || p.is_dir() {
        export.set_path(&p.join(DEFAULT_FILE).to_string_lossy());
    } else {
        export.set_path(&p.to_string_lossy());
    }
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c=='/'||c=='\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::other(format!(
            "Path exists but is not a directory: {}", dir.display()
        )));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
