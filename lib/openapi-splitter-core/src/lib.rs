//! # OpenAPI Splitter Core
//!
//! Split a single OpenAPI YAML document into multiple linked files: one file
//! per path item, one file per named component, plus a main document that
//! references them via `$ref`. Local references (`#/components/...`) inside
//! extracted content are rewritten to relative file references between the
//! output documents.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use openapi_splitter_core::split::{DocumentSplitExt, SplitByEntry};
//! use openapi_splitter_core::{
//!     read_document, validate_input_file, validate_output_dir, write_split_result,
//! };
//!
//! # fn main() -> Result<(), openapi_splitter_core::SplitError> {
//! validate_input_file("openapi.yaml")?;
//! validate_output_dir("out")?;
//!
//! let document = read_document("openapi.yaml")?;
//! let result = document.split_with(SplitByEntry::new());
//! write_split_result(&result, "out")?;
//! # Ok(())
//! # }
//! ```
//!
//! The pipeline is single-threaded and synchronous throughout; every file is
//! opened, used, and closed within the call that touches it.

mod error;
mod io;
pub mod split;
mod validate;
mod yaml;

pub use error::SplitError;
pub use io::{read_document, write_document, write_split_result};
pub use validate::{validate_input_file, validate_output_dir};
pub use yaml::ToYaml;
