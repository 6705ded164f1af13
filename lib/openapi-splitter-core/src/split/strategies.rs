//! Built-in splitting strategies for OpenAPI documents.

use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};

use super::refs::RefRegistry;
use super::{DocumentSplitter, Fragment, MAIN_DOCUMENT, SplitResult};

/// Component sections whose named entries are extracted into dedicated files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ComponentSection {
    Schemas,
    Parameters,
    SecuritySchemes,
    Headers,
}

impl ComponentSection {
    const ALL: [Self; 4] = [
        Self::Schemas,
        Self::Parameters,
        Self::SecuritySchemes,
        Self::Headers,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::Schemas => "schemas",
            Self::Parameters => "parameters",
            Self::SecuritySchemes => "securitySchemes",
            Self::Headers => "headers",
        }
    }
}

/// Splits every path item and every named component into its own file.
///
/// Each entry of the top-level `paths` mapping becomes
/// `paths<path>/index.yaml` with `{` and `}` in the path replaced by `__`,
/// and each named entry of the `schemas`, `parameters`, `securitySchemes`,
/// and `headers` component sections becomes
/// `components/<section>/<name>.yaml`. Extracted entries are replaced in the
/// main document by `$ref: ./<file>`, and local references
/// (`#/components/...`) to extracted components are rewritten to relative
/// paths between the output files.
///
/// # Example
///
/// Splitting a petstore document produces a layout like:
///
/// ```text
/// main.yaml
/// paths/pets/index.yaml
/// paths/pets/__petId__/index.yaml
/// components/schemas/Pet.yaml
/// components/schemas/Error.yaml
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SplitByEntry;

impl SplitByEntry {
    /// Creates the splitter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl DocumentSplitter for SplitByEntry {
    fn split(&self, document: Value) -> SplitResult {
        let mut result = SplitResult::new(document);
        let mut refs = RefRegistry::default();

        if let Value::Mapping(root) = &mut result.main {
            extract_path_items(root, &mut result.fragments);
            extract_components(root, &mut result.fragments, &mut refs);
        }

        refs.rewrite_local_refs(&mut result.main, Path::new(MAIN_DOCUMENT));
        for fragment in &mut result.fragments {
            refs.rewrite_local_refs(&mut fragment.content, &fragment.path);
        }

        result
    }
}

fn extract_path_items(root: &mut Mapping, fragments: &mut Vec<Fragment>) {
    let Some(Value::Mapping(paths)) = root.get_mut("paths") else {
        return;
    };
    for (path, item) in paths.iter_mut() {
        let Some(path_str) = path.as_str() else {
            continue;
        };
        let file = path_item_file(path_str);
        let content = std::mem::replace(item, file_ref(&file));
        fragments.push(Fragment::new(file, content));
    }
}

fn extract_components(root: &mut Mapping, fragments: &mut Vec<Fragment>, refs: &mut RefRegistry) {
    let Some(Value::Mapping(components)) = root.get_mut("components") else {
        return;
    };
    for section in ComponentSection::ALL {
        let Some(Value::Mapping(entries)) = components.get_mut(section.key()) else {
            continue;
        };
        for (name, entry) in entries.iter_mut() {
            let Some(name_str) = name.as_str() else {
                continue;
            };
            let local_ref = format!("#/components/{}/{name_str}", section.key());
            let file = PathBuf::from(format!("components/{}/{name_str}.yaml", section.key()));
            refs.register(local_ref, file.clone());
            let content = std::mem::replace(entry, file_ref(&file));
            fragments.push(Fragment::new(file, content));
        }
    }
}

/// Fragment file for a path item, e.g. `/pets/{petId}` becomes
/// `paths/pets/__petId__/index.yaml`.
fn path_item_file(path: &str) -> PathBuf {
    let sanitized = path.replace('{', "__").replace('}', "__");
    PathBuf::from(format!("paths{sanitized}/index.yaml"))
}

/// A `$ref` mapping pointing at an output file.
fn file_ref(file: &Path) -> Value {
    let mut mapping = Mapping::new();
    mapping.insert(
        Value::from("$ref"),
        Value::from(format!("./{}", file.display())),
    );
    Value::Mapping(mapping)
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;

    use crate::ToYaml;
    use crate::split::DocumentSplitExt;

    use super::*;

    const PETSTORE: &str = r#"
openapi: 3.0.3
info:
  title: Petstore
  version: 1.0.0
paths:
  /pets:
    get:
      responses:
        '200':
          content:
            application/json:
              schema:
                $ref: '#/components/schemas/Pet'
  /pets/{petId}:
    get:
      responses:
        '404':
          content:
            application/json:
              schema:
                $ref: '#/components/schemas/Error'
components:
  schemas:
    Pet:
      type: object
      properties:
        error:
          $ref: '#/components/schemas/Error'
    Error:
      type: object
"#;

    fn parse(yaml: &str) -> Value {
        serde_yaml::from_str(yaml).expect("valid YAML")
    }

    #[test]
    fn should_extract_one_fragment_per_path_and_component() {
        let result = parse(PETSTORE).split_with(SplitByEntry::new());

        let files: Vec<_> = result
            .fragments
            .iter()
            .map(|fragment| fragment.path.display().to_string())
            .collect();
        assert_eq!(
            files,
            vec![
                "paths/pets/index.yaml",
                "paths/pets/__petId__/index.yaml",
                "components/schemas/Pet.yaml",
                "components/schemas/Error.yaml",
            ]
        );
    }

    #[test]
    fn should_replace_extracted_entries_with_file_refs() {
        let result = parse(PETSTORE).split_with(SplitByEntry::new());

        let path_ref = result
            .main
            .get("paths")
            .and_then(|paths| paths.get("/pets/{petId}"))
            .and_then(|item| item.get("$ref"))
            .and_then(Value::as_str);
        assert_eq!(path_ref, Some("./paths/pets/__petId__/index.yaml"));

        let schema_ref = result
            .main
            .get("components")
            .and_then(|components| components.get("schemas"))
            .and_then(|schemas| schemas.get("Pet"))
            .and_then(|schema| schema.get("$ref"))
            .and_then(Value::as_str);
        assert_eq!(schema_ref, Some("./components/schemas/Pet.yaml"));
    }

    #[test]
    fn should_rewrite_local_refs_in_fragments() {
        let result = parse(PETSTORE).split_with(SplitByEntry::new());

        let pets_item = result
            .fragments
            .iter()
            .find(|fragment| fragment.path == Path::new("paths/pets/index.yaml"))
            .expect("pets fragment");
        let schema_ref = pets_item
            .content
            .get("get")
            .and_then(|op| op.get("responses"))
            .and_then(|responses| responses.get("200"))
            .and_then(|response| response.get("content"))
            .and_then(|content| content.get("application/json"))
            .and_then(|media| media.get("schema"))
            .and_then(|schema| schema.get("$ref"))
            .and_then(Value::as_str);
        assert_eq!(schema_ref, Some("./../../components/schemas/Pet.yaml"));

        let pet_schema = result
            .fragments
            .iter()
            .find(|fragment| fragment.path == Path::new("components/schemas/Pet.yaml"))
            .expect("Pet fragment");
        let sibling_ref = pet_schema
            .content
            .get("properties")
            .and_then(|properties| properties.get("error"))
            .and_then(|property| property.get("$ref"))
            .and_then(Value::as_str);
        assert_eq!(sibling_ref, Some("./Error.yaml"));
    }

    #[test]
    fn should_serialize_main_document_with_file_refs() {
        let document = parse(
            "openapi: 3.0.3\n\
             info:\n  title: Petstore\n  version: 1.0.0\n\
             paths:\n  /pets:\n    get: {}\n\
             components:\n  schemas:\n    Pet:\n      type: object\n",
        );

        let result = document.split_with(SplitByEntry::new());
        let yaml = result.main.to_yaml().expect("should serialize");

        assert_snapshot!(yaml, @r"
        openapi: 3.0.3
        info:
          title: Petstore
          version: 1.0.0
        paths:
          /pets:
            $ref: ./paths/pets/index.yaml
        components:
          schemas:
            Pet:
              $ref: ./components/schemas/Pet.yaml
        ");
    }

    #[test]
    fn should_not_split_document_without_paths_or_components() {
        let document = parse("openapi: 3.0.3\ninfo:\n  title: Empty\n");

        let result = document.clone().split_with(SplitByEntry::new());

        assert!(result.is_unsplit());
        assert_eq!(result.main, document);
    }

    #[test]
    fn should_not_split_scalar_document() {
        let result = Value::String("not a spec".into()).split_with(SplitByEntry::new());

        assert!(result.is_unsplit());
    }
}
