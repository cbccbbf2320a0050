//! Placeholder-based class template.
//!
//! The template is static text carrying placeholder tokens; rendering
//! replaces every occurrence of each token with the fragment produced
//! for it. Pairing placeholders with fragments goes through the
//! [`Placeholder`] enum, so a template missing a token is rejected when
//! it is parsed instead of silently rendering a partial class.

use crate::error::{Error, Result};

/// Text of the built-in "Effective Java" class template.
const EFFECTIVE_JAVA: &str = include_str!("../templates/effective_java.java.tpl");

/// The placeholder tokens a class template must contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    Imports,
    PackageName,
    ClassName,
    ClassFields,
    BuilderFields,
    BuilderConstructor,
    BuilderInitializers,
    BuilderSetters,
    NullFieldChecker,
    ClassInitializers,
}

impl Placeholder {
    /// All placeholders, in template order.
    pub const ALL: [Placeholder; 10] = [
        Placeholder::Imports,
        Placeholder::PackageName,
        Placeholder::ClassName,
        Placeholder::ClassFields,
        Placeholder::BuilderFields,
        Placeholder::BuilderConstructor,
        Placeholder::BuilderInitializers,
        Placeholder::BuilderSetters,
        Placeholder::NullFieldChecker,
        Placeholder::ClassInitializers,
    ];

    /// The literal token marking this placeholder in template text.
    pub fn token(self) -> &'static str {
        match self {
            Placeholder::Imports => "//IMPORTS//",
            Placeholder::PackageName => "//PACKAGE_NAME//",
            Placeholder::ClassName => "//CLASS_NAME//",
            Placeholder::ClassFields => "//CLASS_FIELDS//",
            Placeholder::BuilderFields => "//BUILDER_FIELDS//",
            Placeholder::BuilderConstructor => "//BUILDER_CONSTRUCTOR//",
            Placeholder::BuilderInitializers => "//BUILDER_INITIALIZERS//",
            Placeholder::BuilderSetters => "//BUILDER_SETTERS//",
            Placeholder::NullFieldChecker => "//NULL_FIELD_CHECKER//",
            Placeholder::ClassInitializers => "//CLASS_INITIALIZERS//",
        }
    }
}

/// A validated class template.
#[derive(Debug, Clone)]
pub struct Template {
    text: String,
}

impl Template {
    /// Validate arbitrary template text.
    ///
    /// Every placeholder token must be present. Tokens may occur more
    /// than once (the class name does, in the class header and both
    /// constructors); substitution replaces all occurrences.
    pub fn parse(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        for placeholder in Placeholder::ALL {
            if !text.contains(placeholder.token()) {
                return Err(Error::MissingPlaceholder {
                    token: placeholder.token(),
                });
            }
        }
        Ok(Self { text })
    }

    /// The built-in "Effective Java" builder-pattern template.
    pub fn effective_java() -> Self {
        // The asset is embedded at compile time, so a missing token can
        // only come from editing the template file itself.
        Self::parse(EFFECTIVE_JAVA).expect("built-in template carries every placeholder")
    }

    /// Substitute every placeholder with the text produced by `fill`.
    ///
    /// Literal replacement, order-independent: tokens are distinct and
    /// non-overlapping.
    pub fn render(&self, mut fill: impl FnMut(Placeholder) -> String) -> String {
        let mut out = self.text.clone();
        for placeholder in Placeholder::ALL {
            out = out.replace(placeholder.token(), &fill(placeholder));
        }
        out
    }
}
