// src/provider.rs
//! The seam between the pipeline and whoever serves the records.
//!
//! A provider runs the initial search and knows how to continue it from the
//! page it handed out. The HTTP implementation lives in `core::net`; tests
//! plug in scripted providers.

use crate::error::ProviderError;
use crate::specs::{Case, SearchResponse, SearchedParty};

/// One page of results plus the opaque handle to the next one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Page {
    pub cases: Vec<Case>,
    /// Continuation handle; `None` means this is the last page
    pub next: Option<String>,
    /// Who the identifier matched, when the provider says so
    pub searched: Option<SearchedParty>,
}

impl Page {
    pub fn new(cases: Vec<Case>, next: Option<String>) -> Self {
        Self { cases, next, searched: None }
    }

    /// An empty page ends the search.
    pub fn is_empty(&self) -> bool { self.cases.is_empty() }

    pub fn has_next(&self) -> bool { self.next.is_some() }
}

impl From<SearchResponse> for Page {
    fn from(r: SearchResponse) -> Self {
        Self {
            cases: r.items,
            next: r.links.and_then(|l| l.next).filter(|n| !n.is_empty()),
            searched: r.searched,
        }
    }
}

/// Paginated record search.
pub trait RecordProvider {
    /// First page for `identifier`. Errors here are fatal to the query.
    fn search(&mut self, identifier: &str) -> Result<Page, ProviderError>;

    /// Page after `page`, or `Ok(None)` when there is none.
    fn continue_search(&mut self, page: &Page) -> Result<Option<Page>, ProviderError>;
}

/// Outcome of asking for the next page. There is no error arm: once the
/// first page is in, any failure to continue is end of results.
#[derive(Debug)]
pub enum Continuation {
    NextPage(Page),
    EndOfResults,
}

/// Ask `provider` for the page after `page`, narrowing every failure to
/// [`Continuation::EndOfResults`].
pub fn next_page<P: RecordProvider + ?Sized>(provider: &mut P, page: &Page) -> Continuation {
    match provider.continue_search(page) {
        Ok(Some(next)) if !next.is_empty() => Continuation::NextPage(next),
        Ok(_) => Continuation::EndOfResults,
        Err(e) => {
            logw!("Continuation failed, keeping results so far: {e}");
            Continuation::EndOfResults
        }
    }
}
