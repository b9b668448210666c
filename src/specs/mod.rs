// src/specs/mod.rs
//! # Provider record "specs"
//!
//! Typed shapes of what the Escavador API sends back for a search by
//! CPF/CNPJ. These types only describe the payload; they know nothing about
//! rows, columns or export.
//!
//! ## Conventions & invariants
//! - Every scalar the API may leave out is an `Option`; every list may be
//!   missing or `null` and then deserializes as empty.
//! - Unknown fields are ignored so new API fields do not break decoding.
//! - Flattening into rows lives in `crate::flatten`, not here.
//!
//! ## Typical call chain
//! ```text
//! core::net (JSON) → specs::processo::SearchResponse → provider::Page
//!                                               ↘ flatten::flatten(case, source)
//! ```
pub mod processo;

pub use processo::*;

use serde::{Deserialize, Deserializer};

/// `null` and missing both become `T::default()`.
pub(crate) fn null_as_default<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(de)?.unwrap_or_default())
}
