use std::path::{Path, PathBuf};

use eyre::Result;

/// Trait for types that represent a generated source file
pub trait GeneratedFile {
    /// Get the file path relative to the output directory
    fn path(&self, dir: &Path) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file into the output directory, creating it when absent
    fn write(&self, dir: &Path) -> Result<WriteResult> {
        let path = self.path(dir);

        match self.rules().overwrite {
            Overwrite::Always => {
                write_file(&path, &self.render())?;
                Ok(WriteResult::Written)
            }
            Overwrite::IfMissing => {
                if path.exists() {
                    Ok(WriteResult::Skipped)
                } else {
                    write_file(&path, &self.render())?;
                    Ok(WriteResult::Written)
                }
            }
        }
    }
}

/// Write `content` to `path`, creating the parent directory when it does
/// not already exist. A parent that exists as a regular file is left
/// untouched; the write itself reports the failure.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was skipped (already exists)
    Skipped,
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone, Copy, Default)]
pub struct FileRules {
    pub overwrite: Overwrite,
}

impl FileRules {
    /// Always replace the file on disk (generated code).
    pub fn always_overwrite() -> Self {
        Self {
            overwrite: Overwrite::Always,
        }
    }

    /// Only create the file when it does not exist yet (stubs).
    pub fn if_missing() -> Self {
        Self {
            overwrite: Overwrite::IfMissing,
        }
    }
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overwrite {
    /// Always overwrite (generated code)
    #[default]
    Always,
    /// Only create if file doesn't exist (stubs)
    IfMissing,
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    struct Fixture {
        name: String,
        content: String,
        rules: FileRules,
    }

    impl GeneratedFile for Fixture {
        fn path(&self, dir: &Path) -> PathBuf {
            dir.join(&self.name)
        }

        fn rules(&self) -> FileRules {
            self.rules
        }

        fn render(&self) -> String {
            self.content.clone()
        }
    }

    #[test]
    fn test_write_file_creates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Example.java");

        write_file(&path, "class Example {}").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "class Example {}");
    }

    #[test]
    fn test_write_file_creates_missing_dir() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out").join("gen").join("Example.java");

        write_file(&path, "class Example {}").unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_write_file_reports_unwritable_parent() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("out");
        fs::write(&blocker, "not a directory").unwrap();

        let result = write_file(&blocker.join("Example.java"), "class Example {}");

        assert!(result.is_err());
    }

    #[test]
    fn test_generated_file_always_overwrites() {
        let temp = TempDir::new().unwrap();
        let file = Fixture {
            name: "Example.java".to_string(),
            content: "updated".to_string(),
            rules: FileRules::always_overwrite(),
        };
        fs::write(temp.path().join("Example.java"), "original").unwrap();

        let result = file.write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(
            fs::read_to_string(temp.path().join("Example.java")).unwrap(),
            "updated"
        );
    }

    #[test]
    fn test_generated_file_if_missing_skips_existing() {
        let temp = TempDir::new().unwrap();
        let file = Fixture {
            name: "Example.java".to_string(),
            content: "should not write".to_string(),
            rules: FileRules::if_missing(),
        };
        fs::write(temp.path().join("Example.java"), "original").unwrap();

        let result = file.write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Skipped);
        assert_eq!(
            fs::read_to_string(temp.path().join("Example.java")).unwrap(),
            "original"
        );
    }
}
