//! Style selection and render orchestration.

use crate::{
    BuilderClass, fragments,
    template::{Placeholder, Template},
};

/// Message returned when a request carries an unrecognized style tag.
pub const UNSUPPORTED_STYLE_MESSAGE: &str = "Only `EffectiveJava` type is supported now.";

/// Implemented generation styles.
///
/// Style tags arrive as strings at the API boundary; adding a style
/// means adding a variant here, and the render dispatch is checked at
/// compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// The "Effective Java" builder idiom: immutable class, nested
    /// fluent builder, null guard in `build()`.
    EffectiveJava,
}

impl Style {
    /// Resolve a style tag; `None` for unrecognized tags.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "EffectiveJava" => Some(Style::EffectiveJava),
            _ => None,
        }
    }

    /// The tag recognized for this style.
    pub fn tag(self) -> &'static str {
        match self {
            Style::EffectiveJava => "EffectiveJava",
        }
    }

    /// Extension of generated source files.
    pub fn file_extension(self) -> &'static str {
        match self {
            Style::EffectiveJava => "java",
        }
    }

    /// Render the class for this style.
    pub(crate) fn generate(self, class: &BuilderClass) -> String {
        match self {
            Style::EffectiveJava => effective_java(class),
        }
    }
}

/// Substitute the "Effective Java" template with fragments computed
/// from the field list. Indentation per placeholder follows the
/// template's nesting depth (tabs, as in the emitted Java).
fn effective_java(class: &BuilderClass) -> String {
    let fields = class.fields();
    Template::effective_java().render(|placeholder| match placeholder {
        Placeholder::Imports => fragments::imports(fields),
        Placeholder::PackageName => class.package_name().to_string(),
        Placeholder::ClassName => class.class_name().to_string(),
        Placeholder::ClassFields => fragments::class_fields(fields, "\t"),
        Placeholder::BuilderFields => fragments::builder_fields(fields, "\t\t"),
        Placeholder::BuilderConstructor => fragments::builder_constructor(fields, ""),
        Placeholder::BuilderInitializers => fragments::builder_initializers(fields, "\t\t\t"),
        Placeholder::BuilderSetters => fragments::builder_setters(fields, "\t\t"),
        Placeholder::NullFieldChecker => fragments::null_checker(fields),
        Placeholder::ClassInitializers => fragments::class_initializers(fields, "\t\t"),
    })
}
