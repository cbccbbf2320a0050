//! The generation request and its configuration builder.

use std::path::{Path, PathBuf};

use classforge_core::{FileRules, GeneratedFile, WriteResult};
use serde::{Deserialize, Serialize};

use crate::{
    FieldSpec, Style,
    error::{Error, Result},
    generator::UNSUPPORTED_STYLE_MESSAGE,
};

/// A validated request to generate one builder-pattern class.
///
/// Built once through [`BuilderClass::builder`], immutable afterwards.
/// Rendering is deterministic: the same request produces byte-identical
/// output on every call.
///
/// # Example
///
/// ```
/// use classforge_java::{BuilderClass, FieldSpec};
///
/// let source = BuilderClass::builder()
///     .package_name("com.example")
///     .class_name("Person")
///     .field(FieldSpec::new("String", "name"))
///     .field(FieldSpec::new("String", "address"))
///     .field(FieldSpec::with_singular("List<String>", "hobbies", "hobby"))
///     .build()
///     .unwrap()
///     .render();
///
/// assert!(source.contains("public class Person {"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuilderClass {
    #[serde(default = "default_package_name")]
    package_name: String,
    #[serde(default = "default_class_name")]
    class_name: String,
    #[serde(default = "default_style")]
    style: String,
    #[serde(default)]
    fields: Vec<FieldSpec>,
}

fn default_package_name() -> String {
    "com.example".to_string()
}

fn default_class_name() -> String {
    "Example".to_string()
}

fn default_style() -> String {
    Style::EffectiveJava.tag().to_string()
}

impl BuilderClass {
    /// Start configuring a request with the default package
    /// (`com.example`), class name (`Example`) and style
    /// (`EffectiveJava`).
    pub fn builder() -> BuilderClassBuilder {
        BuilderClassBuilder::default()
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// The requested style tag, recognized or not.
    pub fn style_tag(&self) -> &str {
        &self.style
    }

    /// The ordered field list, verbatim as supplied.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Render the class source.
    ///
    /// An unrecognized style tag is not an error: the result is the
    /// fixed [`UNSUPPORTED_STYLE_MESSAGE`] sentinel, regardless of the
    /// field list.
    pub fn render(&self) -> String {
        match Style::from_tag(&self.style) {
            Some(style) => style.generate(self),
            None => UNSUPPORTED_STYLE_MESSAGE.to_string(),
        }
    }

    /// Write the rendered source to `<dir>/<class_name>.<ext>`, creating
    /// `dir` when it does not already exist. I/O failures are reported
    /// through the result, never panicked.
    pub fn save(&self, dir: &Path) -> eyre::Result<WriteResult> {
        JavaClassFile { class: self }.write(dir)
    }
}

struct JavaClassFile<'a> {
    class: &'a BuilderClass,
}

impl GeneratedFile for JavaClassFile<'_> {
    fn path(&self, dir: &Path) -> PathBuf {
        let extension =
            Style::from_tag(&self.class.style).map_or("java", Style::file_extension);
        dir.join(format!("{}.{}", self.class.class_name, extension))
    }

    fn rules(&self) -> FileRules {
        FileRules::always_overwrite()
    }

    fn render(&self) -> String {
        self.class.render()
    }
}

/// Fluent configuration builder for [`BuilderClass`].
#[derive(Debug, Clone)]
pub struct BuilderClassBuilder {
    package_name: String,
    class_name: String,
    style: String,
    fields: Vec<FieldSpec>,
}

impl Default for BuilderClassBuilder {
    fn default() -> Self {
        Self {
            package_name: default_package_name(),
            class_name: default_class_name(),
            style: default_style(),
            fields: Vec::new(),
        }
    }
}

impl BuilderClassBuilder {
    pub fn package_name(mut self, package_name: impl Into<String>) -> Self {
        self.package_name = package_name.into();
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    /// Set the style tag. Unrecognized tags are accepted here and
    /// resolved at render time.
    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    /// Replace the field list.
    pub fn fields(mut self, fields: Vec<FieldSpec>) -> Self {
        self.fields = fields;
        self
    }

    /// Append one field, preserving insertion order.
    pub fn field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    /// Validate the configuration and freeze it.
    ///
    /// Fails fast, before any generation, when the class or package
    /// name is empty or any field violates the non-empty invariants.
    pub fn build(self) -> Result<BuilderClass> {
        if self.package_name.is_empty() {
            return Err(Error::invalid_config("package name must not be empty"));
        }
        if self.class_name.is_empty() {
            return Err(Error::invalid_config("class name must not be empty"));
        }
        for field in &self.fields {
            if field.ty.is_empty() {
                return Err(Error::invalid_config(format!(
                    "field '{}' has an empty type",
                    field.name
                )));
            }
            if field.name.is_empty() {
                return Err(Error::invalid_config("field with an empty name"));
            }
            if field.singular.as_deref() == Some("") {
                return Err(Error::invalid_config(format!(
                    "field '{}' has an empty singular name",
                    field.name
                )));
            }
        }

        Ok(BuilderClass {
            package_name: self.package_name,
            class_name: self.class_name,
            style: self.style,
            fields: self.fields,
        })
    }
}
