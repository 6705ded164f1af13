//! Fragment types for split OpenAPI documents.

use std::path::PathBuf;

use serde_yaml::Value;

/// An output document extracted from the input specification.
///
/// Pairs the relative path where the document should be written with the YAML
/// tree to serialize there. The path is relative to the main document; the
/// main document refers to it with a `$ref`.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    /// Relative path where this fragment should be written.
    pub path: PathBuf,

    /// The YAML tree to serialize into the fragment file.
    pub content: Value,
}

impl Fragment {
    /// Creates a new fragment with the given path and content.
    pub fn new(path: impl Into<PathBuf>, content: Value) -> Self {
        Self {
            path: path.into(),
            content,
        }
    }
}

/// The result of splitting an OpenAPI document.
///
/// Contains the main document (with `$ref` references to the extracted
/// files) and the fragments to be written alongside it.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitResult {
    /// The main document, referencing extracted fragments via `$ref`.
    pub main: Value,

    /// Extracted fragments to be written to separate files.
    pub fragments: Vec<Fragment>,
}

impl SplitResult {
    /// Creates a new split result with no fragments.
    pub fn new(main: Value) -> Self {
        Self {
            main,
            fragments: Vec::new(),
        }
    }

    /// Adds a fragment to the result.
    pub fn add_fragment(&mut self, fragment: Fragment) {
        self.fragments.push(fragment);
    }

    /// Returns `true` if there are no fragments (no splitting occurred).
    #[must_use]
    pub fn is_unsplit(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Returns the number of fragments.
    #[must_use]
    pub fn fragment_count(&self) -> usize {
        self.fragments.len()
    }
}
