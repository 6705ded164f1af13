//! Local reference registry and cross-file reference rewriting.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde_yaml::Value;

/// Registry of local references (`#/components/...`) mapped to the fragment
/// files that now hold their content.
///
/// After extraction, every output document is walked and each registered
/// `$ref` is rewritten to a relative path from the referencing file to the
/// target fragment. Unregistered local references and references that are
/// already external are left untouched.
#[derive(Debug, Default)]
pub(crate) struct RefRegistry {
    targets: BTreeMap<String, PathBuf>,
}

impl RefRegistry {
    /// Registers the fragment file holding the content of `local_ref`.
    /// The first registration wins.
    pub(crate) fn register(&mut self, local_ref: impl Into<String>, file: impl Into<PathBuf>) {
        self.targets.entry(local_ref.into()).or_insert_with(|| file.into());
    }

    /// Rewrites every registered local `$ref` in `document` into a relative
    /// path from `source_file` to the fragment holding the target.
    pub(crate) fn rewrite_local_refs(&self, document: &mut Value, source_file: &Path) {
        match document {
            Value::Mapping(mapping) => {
                for (key, value) in mapping.iter_mut() {
                    if key.as_str() == Some("$ref") {
                        if let Some(rewritten) = self.rewrite_target(value, source_file) {
                            *value = Value::String(rewritten);
                        }
                    } else {
                        self.rewrite_local_refs(value, source_file);
                    }
                }
            }
            Value::Sequence(items) => {
                for item in items {
                    self.rewrite_local_refs(item, source_file);
                }
            }
            _ => {}
        }
    }

    fn rewrite_target(&self, value: &Value, source_file: &Path) -> Option<String> {
        let target = value.as_str()?;
        if !target.starts_with('#') {
            return None;
        }
        let file = self.targets.get(target)?;
        Some(relative_path(source_file, file))
    }
}

/// Computes the relative path from the directory of `from` to `to`, rendered
/// with `/` separators and a `./` prefix.
pub(crate) fn relative_path(from: &Path, to: &Path) -> String {
    let from_dir: Vec<_> = from
        .parent()
        .map(|dir| dir.components().collect())
        .unwrap_or_default();
    let to_parts: Vec<_> = to.components().collect();

    let common = from_dir
        .iter()
        .zip(&to_parts)
        .take_while(|(left, right)| left == right)
        .count();

    let mut parts = vec![String::from(".")];
    parts.extend(from_dir.iter().skip(common).map(|_| String::from("..")));
    parts.extend(
        to_parts
            .iter()
            .skip(common)
            .map(|component| component.as_os_str().to_string_lossy().into_owned()),
    );
    parts.join("/")
}
