// src/config/options.rs
use std::ffi::OsString;
use std::path::{ Path, PathBuf };

use super::consts::*;
use crate::csv::Delim;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub query: QueryOptions,
    pub export: ExportOptions,
}

/// Everything the provider needs for one search.
#[derive(Clone, PartialEq, Eq)]
pub struct QueryOptions {
    /// CPF/CNPJ as typed by the user (mask allowed)
    pub identifier: String,
    /// Opaque access credential; never logged
    pub token: Option<String>,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            identifier: s!(),
            token: None,
            base_url: s!(API_BASE_URL),
            timeout_secs: REQUEST_TIMEOUT_SECS,
        }
    }
}

// Hand-written so the token never ends up in a log line.
impl std::fmt::Debug for QueryOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryOptions")
            .field("identifier", &self.identifier)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: Delim,
    out_path: OutputPath,
    /// Write the export to stdout instead of `out_path()`
    pub to_stdout: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: Delim::Csv,
            out_path: OutputPath::default(),
            to_stdout: false,
        }
    }
}

impl ExportOptions {
    /// `<dir>/<stem>.<ext>`; the extension always follows `format`.
    pub fn out_path(&self) -> PathBuf {
        let mut path = self.out_path.dir.clone();
        let stem = self.out_path.file_stem.to_string_lossy();
        path.push(join!(&*stem, ".", self.format.ext()));
        path
    }

    /// Parse user text into dir + stem. Ignores a typed extension; format controls it.
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());
        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_token() {
        let q = QueryOptions { token: Some(s!("sekrit")), ..QueryOptions::default() };
        let shown = format!("{q:?}");
        assert!(!shown.contains("sekrit"));
        assert!(shown.contains("<redacted>"));
    }
}
