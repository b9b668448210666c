// src/progress.rs
/// Lightweight progress reporting for a running query.
/// Frontends (CLI, tests) implement this to surface status to users.
pub trait Progress {
    /// Called once before the first request.
    fn begin(&mut self, _identifier: &str) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called after page `page` (1-based) was flattened; `rows` is the running total.
    fn page_done(&mut self, _page: usize, _rows: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
