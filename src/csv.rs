// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

use crate::store::DataSet;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Delim {
    #[default]
    Csv,
    Tsv,
}

impl Delim {
    pub fn sep(self) -> char {
        match self { Delim::Csv => ',', Delim::Tsv => '\t' }
    }
    pub fn ext(self) -> &'static str {
        match self { Delim::Csv => "csv", Delim::Tsv => "tsv" }
    }
}

impl std::str::FromStr for Delim {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(Delim::Csv),
            "tsv" => Ok(Delim::Tsv),
            other => Err(format!("Unknown format: {}", other)),
        }
    }
}

/* ---------------- Parsing ---------------- */

/// Minimal CSV/TSV parser (quotes + CRLF tolerant).
pub fn parse_rows(text: &str, delim: Delim) -> Vec<Vec<String>> {
    let sep = delim.sep();
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    // Anything (even a bare `""`) seen on the current line.
    let mut touched = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                touched = true;
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // double-quote escape
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            c if c == sep && !in_quotes => {
                row.push(take(&mut field));
                touched = true;
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                row.push(take(&mut field));
                flush_row(&mut rows, &mut row, take(&mut touched));
            }
            _ => {
                field.push(ch);
                touched = true;
            }
        }
    }

    // Trailing row without a final newline (also if quotes were unterminated).
    row.push(field);
    flush_row(&mut rows, &mut row, touched);

    rows
}

// An untouched line is blank, not a row. A quoted `""` line is a row.
fn flush_row(rows: &mut Vec<Vec<String>>, row: &mut Vec<String>, touched: bool) {
    if !touched {
        row.clear();
    } else if !row.is_empty() {
        rows.push(take(row));
    }
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], delim: Delim) -> io::Result<()> {
    let sep = delim.sep();
    // A lone empty cell would otherwise be a blank line.
    if let [only] = row {
        if only.as_ref().is_empty() {
            return writeln!(w, "\"\"");
        }
    }
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Stream a data set (header union first, then one line per row) into `w`.
pub fn write_dataset<W: Write>(mut w: W, ds: &DataSet, delim: Delim) -> io::Result<()> {
    write_row(&mut w, ds.headers(), delim)?;
    for i in 0..ds.len() {
        if let Some(cells) = ds.row_cells(i) {
            write_row(&mut w, &cells, delim)?;
        }
    }
    Ok(())
}

/// Export bytes for download/write. `None` when there is nothing to export.
pub fn to_export_bytes(ds: &DataSet, delim: Delim) -> Option<Vec<u8>> {
    if ds.is_empty() {
        return None;
    }
    let mut buf: Vec<u8> = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_dataset(&mut buf, ds, delim);
    Some(buf)
}

/// Stringify plain rows as-is (header first when given).
pub fn rows_to_string<S: AsRef<str>>(headers: Option<&[S]>, rows: &[Vec<S>], delim: Delim) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if let Some(h) = headers {
        let _ = write_row(&mut buf, h, delim);
    }
    for r in rows {
        let _ = write_row(&mut buf, r, delim);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
