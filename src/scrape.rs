// src/scrape.rs
//
// Pagination driver: walk a provider's result set page by page and flatten
// every (case, source) pair into one DataSet.
//
// Failure policy:
// - initial search fails      → Error::InitialQuery, nothing returned
// - any later page fails      → stop quietly, keep what we have
// - provider has no more data → normal end

use crate::{
    error::{Error, Result},
    flatten,
    progress::Progress,
    provider::{self, Continuation, RecordProvider},
    store::DataSet,
};

/// What one query produced.
#[derive(Debug, Default)]
pub struct Collected {
    /// Identifier the provider was queried with
    pub identifier: String,
    pub data: DataSet,
    /// Non-empty pages consumed
    pub pages: usize,
}

/// Run the full search for `identifier` and collect all rows, in
/// page → case → source order.
pub fn collect_rows<P: RecordProvider + ?Sized>(
    provider: &mut P,
    identifier: &str,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Collected> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(identifier);
    }

    let mut page = match provider.search(identifier) {
        Ok(page) => page,
        Err(e) => {
            loge!("Initial search failed: {e}");
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!("Initial query failed: {e}"));
                p.finish();
            }
            return Err(Error::InitialQuery(e));
        }
    };

    if let Some(found) = &page.searched {
        logf!(
            "Provider matched {:?} ({:?}), {} cases reported",
            found.name.as_deref().unwrap_or(""),
            found.person_kind.as_deref().unwrap_or(""),
            found.case_count.as_ref().map(ToString::to_string).unwrap_or_else(|| s!("?"))
        );
    }

    let mut out = Collected { identifier: s!(identifier), ..Collected::default() };

    while !page.is_empty() {
        out.pages += 1;
        flatten::flatten_into(&mut out.data, &page.cases);

        logd!(
            "Page {}: {} cases, {} rows so far",
            out.pages,
            page.cases.len(),
            out.data.len()
        );
        if let Some(p) = progress.as_deref_mut() {
            p.page_done(out.pages, out.data.len());
        }

        match provider::next_page(&mut *provider, &page) {
            Continuation::NextPage(next) => page = next,
            Continuation::EndOfResults => break,
        }
    }

    logf!(
        "Search done: {} rows, {} columns, {} pages",
        out.data.len(),
        out.data.headers().len(),
        out.pages
    );
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    Ok(out)
}
