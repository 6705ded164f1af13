//! YAML serialization support.
//!
//! Output documents are untyped [`serde_yaml::Value`] trees, but anything
//! implementing [`Serialize`] can be written through the same trait.

use serde::Serialize;

/// Extension trait for serializing types to YAML.
///
/// This trait is implemented for all types that implement [`Serialize`].
/// It provides a convenient `to_yaml()` method for generating YAML strings.
pub trait ToYaml: Serialize + Sized {
    /// Serializes this value to a YAML string.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_yaml::Error`] if serialization fails.
    fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}

impl<T: Serialize + Sized> ToYaml for T {}
