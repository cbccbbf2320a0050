//! Field descriptor for the generated class.

use classforge_core::{generic_argument, is_container_type};
use serde::{Deserialize, Serialize};

/// Element type used when a container type carries no generic argument
/// (e.g., a bare `List`).
pub const FALLBACK_ELEMENT_TYPE: &str = "Object";

/// One field of the class to generate.
///
/// The order of a field list is significant: every generated chunk
/// preserves it verbatim. Duplicate names are not deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Type name text, e.g. `String` or `List<String>`.
    #[serde(rename = "type")]
    pub ty: String,
    /// Identifier for the field and its setter (plural form for containers).
    pub name: String,
    /// Identifier for the per-element `add` method of a container field.
    /// Falls back to `name` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub singular: Option<String>,
}

impl FieldSpec {
    /// Create a field whose singular name equals its name.
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
            singular: None,
        }
    }

    /// Create a container field with distinct plural and singular names
    /// (e.g., `List<String> hobbies` with `addHobby`).
    pub fn with_singular(
        ty: impl Into<String>,
        name: impl Into<String>,
        singular: impl Into<String>,
    ) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
            singular: Some(singular.into()),
        }
    }

    /// The identifier used for the per-element `add` method.
    pub fn singular_name(&self) -> &str {
        self.singular.as_deref().unwrap_or(&self.name)
    }

    /// Whether this field's type denotes a growable ordered sequence.
    pub fn is_container(&self) -> bool {
        is_container_type(&self.ty)
    }

    /// The generic element type of a container field, `Object` when the
    /// type text carries no usable `<...>` argument.
    pub fn element_type(&self) -> &str {
        generic_argument(&self.ty, FALLBACK_ELEMENT_TYPE)
    }

    /// Whether this field participates in the null guard of `build()`.
    ///
    /// Object types start with an upper-case letter in Java naming
    /// convention; primitives like `int` and `boolean` cannot be null
    /// and are excluded.
    pub fn is_nullable(&self) -> bool {
        self.ty.chars().next().is_some_and(char::is_uppercase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singular_name_defaults_to_name() {
        let field = FieldSpec::new("List<String>", "hobbies");
        assert_eq!(field.singular_name(), "hobbies");

        let field = FieldSpec::with_singular("List<String>", "hobbies", "hobby");
        assert_eq!(field.singular_name(), "hobby");
    }

    #[test]
    fn test_element_type() {
        assert_eq!(FieldSpec::new("List<String>", "xs").element_type(), "String");
        assert_eq!(FieldSpec::new("List", "xs").element_type(), "Object");
    }

    #[test]
    fn test_is_container() {
        assert!(FieldSpec::new("List<String>", "xs").is_container());
        assert!(FieldSpec::new("List", "xs").is_container());
        assert!(!FieldSpec::new("String", "x").is_container());
    }

    #[test]
    fn test_is_nullable() {
        assert!(FieldSpec::new("String", "name").is_nullable());
        assert!(FieldSpec::new("List<String>", "xs").is_nullable());
        assert!(!FieldSpec::new("int", "age").is_nullable());
        assert!(!FieldSpec::new("boolean", "active").is_nullable());
    }
}
