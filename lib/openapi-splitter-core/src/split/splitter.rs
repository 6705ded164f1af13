//! The `DocumentSplitter` trait for splitting OpenAPI documents.

use serde_yaml::Value;

use super::SplitResult;

/// Trait for splitting an OpenAPI document into multiple output documents.
///
/// Implementations define how entries of the input tree are organized into
/// separate files. The method consumes the input document and returns a
/// modified main document (with `$ref` pointing to external files) together
/// with the extracted fragments.
pub trait DocumentSplitter {
    /// Splits the document into a main document and fragments.
    fn split(&self, document: Value) -> SplitResult;
}

/// Extension trait for convenient splitting of parsed documents.
pub trait DocumentSplitExt {
    /// Splits this document using the provided splitter.
    ///
    /// This is a convenience method that calls `splitter.split(self)`.
    fn split_with<S: DocumentSplitter>(self, splitter: S) -> SplitResult;
}

impl DocumentSplitExt for Value {
    fn split_with<S: DocumentSplitter>(self, splitter: S) -> SplitResult {
        splitter.split(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoOpSplitter;

    impl DocumentSplitter for NoOpSplitter {
        fn split(&self, document: Value) -> SplitResult {
            SplitResult::new(document)
        }
    }

    #[test]
    fn should_implement_split_ext() {
        let document: Value = serde_yaml::from_str("openapi: 3.0.0\n").expect("valid YAML");

        let result = document.split_with(NoOpSplitter);

        assert!(result.is_unsplit());
    }
}
