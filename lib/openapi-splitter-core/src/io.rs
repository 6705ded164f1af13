//! Reading input documents and writing split results.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_yaml::Value;
use tracing::info;

use crate::SplitError;
use crate::split::{MAIN_DOCUMENT, SplitResult};
use crate::yaml::ToYaml;

/// Reads and parses the YAML document at `path` into a full in-memory tree.
///
/// # Errors
///
/// Returns [`SplitError::Io`] if the file cannot be read, or
/// [`SplitError::InvalidDocument`] if its content is not valid YAML.
pub fn read_document(path: impl AsRef<Path>) -> Result<Value, SplitError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let document =
        serde_yaml::from_str(&contents).map_err(|error| SplitError::InvalidDocument {
            path: path.to_path_buf(),
            error,
        })?;
    Ok(document)
}

/// Writes the main document and every fragment of `result` under
/// `output_dir`.
///
/// The main document is written as [`MAIN_DOCUMENT`]. Fragment paths may
/// contain subdirectories; those are created as needed. The output directory
/// itself must already exist.
///
/// # Errors
///
/// Returns [`SplitError::OutputDirMissing`] when `output_dir` is not an
/// existing directory, and propagates serialization and write failures from
/// [`write_document`].
pub fn write_split_result(
    result: &SplitResult,
    output_dir: impl AsRef<Path>,
) -> Result<(), SplitError> {
    let output_dir = output_dir.as_ref();
    if !output_dir.is_dir() {
        return Err(SplitError::OutputDirMissing {
            path: output_dir.to_path_buf(),
        });
    }

    write_document(&result.main, &output_dir.join(MAIN_DOCUMENT))?;
    for fragment in &result.fragments {
        write_document(&fragment.content, &output_dir.join(&fragment.path))?;
    }
    Ok(())
}

/// Serializes `document` to YAML and writes it to `path`, creating parent
/// directories as needed.
///
/// # Errors
///
/// Returns [`SplitError::SerializeDocument`] if serialization fails, or
/// [`SplitError::Io`] if the file cannot be written.
pub fn write_document<T: Serialize>(document: &T, path: &Path) -> Result<(), SplitError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let contents = document
        .to_yaml()
        .map_err(|error| SplitError::SerializeDocument {
            path: path.to_path_buf(),
            error,
        })?;

    info!(path = %path.display(), "writing output document");
    fs::write(path, contents)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::split::Fragment;

    static UNIQUE: AtomicUsize = AtomicUsize::new(0);

    fn temp_path(label: &str) -> PathBuf {
        let unique = UNIQUE.fetch_add(1, Ordering::Relaxed);
        std::env::temp_dir().join(format!(
            "openapi_splitter_io_{label}_{}_{unique}",
            std::process::id()
        ))
    }

    #[test]
    fn should_read_well_formed_document() {
        let file = temp_path("read_ok");
        fs::write(&file, "openapi: 3.0.0\ninfo:\n  title: Pets\n").expect("should create file");

        let document = read_document(&file).expect("should read document");

        assert!(document.is_mapping());
        assert_eq!(
            document.get("openapi").and_then(Value::as_str),
            Some("3.0.0")
        );
        fs::remove_file(&file).expect("cleanup");
    }

    #[test]
    fn should_fail_reading_nonexistent_file() {
        let result = read_document("nonexistent.yaml");

        assert!(matches!(result, Err(SplitError::Io(_))));
    }

    #[test]
    fn should_fail_reading_malformed_yaml() {
        let file = temp_path("read_malformed");
        fs::write(&file, "key: [unclosed\n").expect("should create file");

        let result = read_document(&file);

        assert!(matches!(result, Err(SplitError::InvalidDocument { .. })));
        fs::remove_file(&file).expect("cleanup");
    }

    #[test]
    fn should_write_split_result_into_directory() {
        let dir = temp_path("write_ok");
        fs::create_dir(&dir).expect("should create dir");

        let main: Value = serde_yaml::from_str("openapi: 3.0.0\n").expect("valid YAML");
        let content: Value = serde_yaml::from_str("type: object\n").expect("valid YAML");
        let mut result = SplitResult::new(main);
        result.add_fragment(Fragment::new("components/schemas/Pet.yaml", content));

        write_split_result(&result, &dir).expect("should write split result");

        let main_contents =
            fs::read_to_string(dir.join(MAIN_DOCUMENT)).expect("main document should exist");
        assert!(!main_contents.is_empty());

        let fragment_contents = fs::read_to_string(dir.join("components/schemas/Pet.yaml"))
            .expect("fragment should exist");
        assert!(!fragment_contents.is_empty());

        fs::remove_dir_all(&dir).expect("cleanup");
    }

    #[test]
    fn should_fail_writing_into_missing_directory() {
        let main: Value = serde_yaml::from_str("openapi: 3.0.0\n").expect("valid YAML");
        let result = SplitResult::new(main);

        let outcome = write_split_result(&result, temp_path("write_missing"));

        assert!(matches!(outcome, Err(SplitError::OutputDirMissing { .. })));
    }
}
