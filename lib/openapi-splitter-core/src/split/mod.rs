//! OpenAPI document splitting.
//!
//! This module decomposes a single OpenAPI document tree into a main document
//! plus a set of fragments, each destined for its own file:
//!
//! - every entry of the top-level `paths` mapping becomes
//!   `paths<path>/index.yaml`;
//! - every named component (`schemas`, `parameters`, `securitySchemes`,
//!   `headers`) becomes `components/<section>/<name>.yaml`;
//! - extracted entries are replaced in the main document by a `$ref` to the
//!   fragment file, and local references (`#/components/...`) inside the
//!   output documents are rewritten to relative paths between files.
//!
//! # Example
//!
//! ```rust,no_run
//! use openapi_splitter_core::split::{DocumentSplitExt, SplitByEntry};
//! use openapi_splitter_core::{read_document, write_split_result};
//!
//! # fn main() -> Result<(), openapi_splitter_core::SplitError> {
//! let document = read_document("openapi.yaml")?;
//! let result = document.split_with(SplitByEntry::new());
//! write_split_result(&result, "out")?;
//! # Ok(())
//! # }
//! ```

mod fragment;
mod refs;
mod splitter;
mod strategies;

pub use fragment::{Fragment, SplitResult};
pub use splitter::{DocumentSplitExt, DocumentSplitter};
pub use strategies::SplitByEntry;

/// Relative file name of the main document produced by a split.
pub const MAIN_DOCUMENT: &str = "main.yaml";
