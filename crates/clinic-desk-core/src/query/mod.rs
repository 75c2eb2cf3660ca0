//! Pure query logic: filter predicates and the pagination engine.
//!
//! The listing cycle for every entity is Filter -> Paginate -> Render:
//! a named filter narrows the full collection, the pagination engine takes
//! a 1-based page of fixed size, and the render adapter (out of scope)
//! consumes the page. A fresh filter always starts at page 1; after an
//! in-place mutation the current page is re-clamped.

mod filters;
mod page;

pub use filters::*;
pub use page::*;

use thiserror::Error;

/// Filter vocabulary errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FilterError {
    #[error("Unknown filter: {0}")]
    Unknown(String),
}

pub type FilterResult<T> = Result<T, FilterError>;
