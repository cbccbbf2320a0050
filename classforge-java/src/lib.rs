//! Java builder-pattern source generator.
//!
//! Given a package name, a class name and an ordered list of typed
//! fields, renders a Java class implementing the "Effective Java"
//! builder idiom: an immutable class with a nested fluent builder,
//! per-element `add` methods for `List` fields and a null guard in
//! `build()`.
//!
//! # Example
//!
//! ```
//! use classforge_java::{BuilderClass, FieldSpec};
//!
//! let person = BuilderClass::builder()
//!     .package_name("com.example")
//!     .class_name("Person")
//!     .field(FieldSpec::new("String", "name"))
//!     .field(FieldSpec::new("String", "address"))
//!     .field(FieldSpec::with_singular("List<String>", "hobbies", "hobby"))
//!     .build()?;
//!
//! let source = person.render();
//! assert!(source.contains("private List<String> hobbies = new ArrayList<String>();"));
//! assert!(source.contains("public Builder addHobby(String hobby){"));
//! # Ok::<(), classforge_java::Error>(())
//! ```
//!
//! Rendered text can also be persisted with [`BuilderClass::save`],
//! which writes `<ClassName>.java` into a target directory.

mod error;
mod field;
mod generator;
mod request;
mod template;

pub mod fragments;

pub use error::{Error, Result};
pub use field::{FALLBACK_ELEMENT_TYPE, FieldSpec};
pub use generator::{Style, UNSUPPORTED_STYLE_MESSAGE};
pub use request::{BuilderClass, BuilderClassBuilder};
pub use template::{Placeholder, Template};
