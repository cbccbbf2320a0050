//! Text fragments substituted into the class template.
//!
//! Each function is a pure function of the ordered field list (and an
//! indentation string where the fragment is indented). Separator-joined
//! fragments are built with an explicit join over per-element strings,
//! so an empty field list yields an empty fragment instead of panicking
//! or corrupting output.
//!
//! Whitespace is byte-compatible with the reference output, including
//! the trailing space after the `;` of initializer statements.

use crate::FieldSpec;
use classforge_core::capitalize_first;

/// Import lines required by the generated class: the dynamic-array
/// implementation and its interface when any field is a container,
/// nothing otherwise.
pub fn imports(fields: &[FieldSpec]) -> String {
    if fields.iter().any(FieldSpec::is_container) {
        "import java.util.ArrayList;\nimport java.util.List;\n".to_string()
    } else {
        String::new()
    }
}

/// Field declarations of the immutable target class, one
/// `private <type> <name>;` line per field.
pub fn class_fields(fields: &[FieldSpec], indent: &str) -> String {
    fields
        .iter()
        .map(|f| format!("{indent}private {} {};\n", f.ty, f.name))
        .collect()
}

/// Field declarations of the nested builder. Container fields are
/// initialized inline to an empty `ArrayList` of the element type.
pub fn builder_fields(fields: &[FieldSpec], indent: &str) -> String {
    fields
        .iter()
        .map(|f| {
            if f.is_container() {
                format!(
                    "{indent}private {} {} = new ArrayList<{}>();\n",
                    f.ty,
                    f.name,
                    f.element_type()
                )
            } else {
                format!("{indent}private {} {};\n", f.ty, f.name)
            }
        })
        .collect()
}

/// Parameter list of the builder's internal all-fields constructor:
/// comma-separated `<type> <name>` pairs, empty for an empty field list.
pub fn builder_constructor(fields: &[FieldSpec], indent: &str) -> String {
    fields
        .iter()
        .map(|f| format!("{indent}{} {}", f.ty, f.name))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Body of the builder's internal constructor: one
/// `this.<name> = <name>;` statement per field.
pub fn builder_initializers(fields: &[FieldSpec], indent: &str) -> String {
    fields
        .iter()
        .map(|f| format!("{indent}this.{n} = {n}; ", n = f.name))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Fluent setter methods of the builder, separated by blank lines.
///
/// A container field gets a second `add<Singular>` method that appends
/// a single element to the underlying list.
pub fn builder_setters(fields: &[FieldSpec], indent: &str) -> String {
    let mut methods = Vec::new();

    for f in fields {
        methods.push(format!(
            "{indent}public Builder {n}({ty} {n}){{\n\
             {indent}\tthis.{n} = {n};\n\
             {indent}\treturn Builder.this;\n\
             {indent}}}",
            n = f.name,
            ty = f.ty,
        ));

        if f.is_container() {
            methods.push(format!(
                "{indent}public Builder add{method}({elem} {single}){{\n\
                 {indent}\tthis.{n}.add({single});\n\
                 {indent}\treturn Builder.this;\n\
                 {indent}}}",
                method = capitalize_first(f.singular_name()),
                elem = f.element_type(),
                single = f.singular_name(),
                n = f.name,
            ));
        }
    }

    if methods.is_empty() {
        String::new()
    } else {
        format!("{}\n", methods.join("\n\n"))
    }
}

/// OR-chained null guard over the fields that can actually be null.
///
/// Only fields whose type name starts with an upper-case letter are
/// included, which excludes Java primitives. Empty when no field
/// qualifies.
pub fn null_checker(fields: &[FieldSpec]) -> String {
    fields
        .iter()
        .filter(|f| f.is_nullable())
        .map(|f| format!("{} == null", f.name))
        .collect::<Vec<_>>()
        .join(" || ")
}

/// Body of the target class's from-builder constructor: one
/// `this.<name> = builder.<name>;` statement per field.
pub fn class_initializers(fields: &[FieldSpec], indent: &str) -> String {
    fields
        .iter()
        .map(|f| format!("{indent}this.{n} = builder.{n}; ", n = f.name))
        .collect::<Vec<_>>()
        .join("\n")
}
