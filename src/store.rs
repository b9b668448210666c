// src/store.rs
//
// In-memory row accumulation for one query.
//
// - FlatRow: one (case × source) row, column name → cell text, insertion ordered.
// - DataSet: every row of a query plus the ordered union of all columns seen.
//            Rows may differ in width; the union grows as wider rows arrive.

use std::collections::HashSet;

/// One flattened row. Keeps the order columns were written in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlatRow {
    cells: Vec<(String, String)>,
}

impl FlatRow {
    pub fn new() -> Self { Self::default() }

    pub fn with_capacity(n: usize) -> Self {
        Self { cells: Vec::with_capacity(n) }
    }

    /// Set `column`. Overwrites in place if the column already exists.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        let column = column.into();
        let value = value.into();
        match self.cells.iter_mut().find(|(c, _)| *c == column) {
            Some((_, v)) => *v = value,
            None => self.cells.push((column, value)),
        }
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells.iter().find(|(c, _)| c == column).map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, column: &str) -> bool { self.get(column).is_some() }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(c, _)| c.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cells.iter().map(|(c, v)| (c.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize { self.cells.len() }
    pub fn is_empty(&self) -> bool { self.cells.is_empty() }
}

/// Rows of one query plus the union of their columns, first-seen order.
#[derive(Clone, Debug, Default)]
pub struct DataSet {
    headers: Vec<String>,
    seen: HashSet<String>,
    rows: Vec<FlatRow>,
}

impl DataSet {
    pub fn new() -> Self { Self::default() }

    pub fn push(&mut self, row: FlatRow) {
        for col in row.columns() {
            if !self.seen.contains(col) {
                self.seen.insert(s!(col));
                self.headers.push(s!(col));
            }
        }
        self.rows.push(row);
    }

    pub fn headers(&self) -> &[String] { &self.headers }
    pub fn rows(&self) -> &[FlatRow] { &self.rows }
    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Project row `i` onto the header union; missing cells come back empty.
    pub fn row_cells(&self, i: usize) -> Option<Vec<String>> {
        let row = self.rows.get(i)?;
        Some(
            self.headers
                .iter()
                .map(|h| row.get(h).map(str::to_owned).unwrap_or_default())
                .collect(),
        )
    }
}

impl Extend<FlatRow> for DataSet {
    fn extend<I: IntoIterator<Item = FlatRow>>(&mut self, iter: I) {
        for row in iter { self.push(row); }
    }
}

impl FromIterator<FlatRow> for DataSet {
    fn from_iter<I: IntoIterator<Item = FlatRow>>(iter: I) -> Self {
        let mut ds = DataSet::new();
        ds.extend(iter);
        ds
    }
}
