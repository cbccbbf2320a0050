//! Persistence and manifest-driven request tests.

use std::fs;

use classforge_core::WriteResult;
use classforge_java::{BuilderClass, FieldSpec, UNSUPPORTED_STYLE_MESSAGE};
use tempfile::TempDir;

fn person() -> BuilderClass {
    BuilderClass::builder()
        .class_name("Person")
        .field(FieldSpec::new("String", "name"))
        .field(FieldSpec::with_singular("List<String>", "hobbies", "hobby"))
        .build()
        .expect("valid request")
}

#[test]
fn test_save_writes_class_file() {
    let temp = TempDir::new().unwrap();
    let class = person();

    let result = class.save(temp.path()).unwrap();

    assert_eq!(result, WriteResult::Written);
    let written = fs::read_to_string(temp.path().join("Person.java")).unwrap();
    assert_eq!(written, class.render());
}

#[test]
fn test_save_creates_missing_directory() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("generated").join("java");

    person().save(&out).unwrap();

    assert!(out.join("Person.java").exists());
}

#[test]
fn test_save_reports_failure_when_directory_is_a_file() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("out");
    fs::write(&blocker, "not a directory").unwrap();

    assert!(person().save(&blocker).is_err());
}

#[test]
fn test_save_unsupported_style_writes_sentinel() {
    let temp = TempDir::new().unwrap();
    let class = BuilderClass::builder()
        .class_name("Person")
        .style("GoF")
        .build()
        .unwrap();

    class.save(temp.path()).unwrap();

    let written = fs::read_to_string(temp.path().join("Person.java")).unwrap();
    assert_eq!(written, UNSUPPORTED_STYLE_MESSAGE);
}

#[test]
fn test_request_from_toml_manifest() {
    let class: BuilderClass = toml::from_str(
        r#"
        package_name = "com.example"
        class_name = "Person"

        [[fields]]
        type = "String"
        name = "name"

        [[fields]]
        type = "List<String>"
        name = "hobbies"
        singular = "hobby"
        "#,
    )
    .expect("valid manifest");

    // Omitted style falls back to the recognized tag
    assert_eq!(class.style_tag(), "EffectiveJava");

    let source = class.render();
    assert!(source.contains("public class Person {"));
    assert!(source.contains("public Builder addHobby(String hobby){"));
}

#[test]
fn test_request_toml_round_trip() {
    let class = person();
    let encoded = toml::to_string(&class).unwrap();
    let decoded: BuilderClass = toml::from_str(&encoded).unwrap();
    assert_eq!(decoded, class);
}
