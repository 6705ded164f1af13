use std::path::PathBuf;

/// Errors that can occur while validating paths, reading the input document,
/// or writing output documents.
///
/// Every failing precondition has its own variant so callers can report
/// exactly which check failed. Errors are never retried; all of them are
/// terminal for the current invocation.
#[derive(Debug, derive_more::Error, derive_more::Display, derive_more::From)]
pub enum SplitError {
    /// Underlying filesystem operation failed.
    #[display("I/O error: {_0}")]
    Io(std::io::Error),

    /// The input file could not be parsed as YAML.
    #[display("failed to parse YAML document {}: {error}", path.display())]
    #[from(skip)]
    InvalidDocument {
        /// The input file that failed to parse.
        path: PathBuf,
        /// The underlying YAML parse error.
        error: serde_yaml::Error,
    },

    /// An output document could not be serialized to YAML.
    #[display("failed to serialize output document {}: {error}", path.display())]
    #[from(skip)]
    SerializeDocument {
        /// The output file that was being written.
        path: PathBuf,
        /// The underlying YAML serialization error.
        error: serde_yaml::Error,
    },

    /// The input file does not exist.
    #[display("input file {} does not exist", path.display())]
    #[from(skip)]
    InputFileMissing {
        /// The missing input path.
        path: PathBuf,
    },

    /// The input path exists but is not a regular file.
    #[display("input file {} is not a file", path.display())]
    #[from(skip)]
    InputNotAFile {
        /// The offending input path.
        path: PathBuf,
    },

    /// The input file exists but is not readable.
    #[display("input file {} is not readable", path.display())]
    #[from(skip)]
    InputNotReadable {
        /// The unreadable input path.
        path: PathBuf,
    },

    /// The output directory does not exist.
    #[display("output directory {} does not exist", path.display())]
    #[from(skip)]
    OutputDirMissing {
        /// The missing output path.
        path: PathBuf,
    },

    /// The output path exists but is not a directory.
    #[display("output directory {} is not a directory", path.display())]
    #[from(skip)]
    OutputNotADirectory {
        /// The offending output path.
        path: PathBuf,
    },

    /// The output directory exists but is not writable.
    #[display("output directory {} is not writable", path.display())]
    #[from(skip)]
    OutputDirNotWritable {
        /// The unwritable output path.
        path: PathBuf,
    },

    /// The output directory exists but already contains entries.
    #[display("output directory {} is not empty", path.display())]
    #[from(skip)]
    OutputDirNotEmpty {
        /// The non-empty output path.
        path: PathBuf,
    },
}
