// builder for creating changelog directory fixtures

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// builder for temporary changelog directories used in tests
pub struct ChangelogDirBuilder {
    files: Vec<(String, String)>, // filename -> content
    subdirs: Vec<String>,
}

impl ChangelogDirBuilder {
    pub fn new() -> Self {
        Self {
            files: Vec::new(),
            subdirs: Vec::new(),
        }
    }

    /// add a changelog file with placeholder sql content
    pub fn file(self, name: impl Into<String>) -> Self {
        let name = name.into();
        let content = format!("-- liquibase formatted sql\n-- changeset test:{}\n", name);
        self.file_with_content(name, content)
    }

    /// add a file with explicit content
    pub fn file_with_content(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.files.push((name.into(), content.into()));
        self
    }

    /// add an empty subdirectory
    pub fn subdir(mut self, name: impl Into<String>) -> Self {
        self.subdirs.push(name.into());
        self
    }

    /// create the directory and all of its entries
    pub fn build(self) -> Result<ChangelogDir, Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().to_path_buf();

        for name in &self.subdirs {
            fs::create_dir_all(path.join(name))?;
        }
        for (name, content) in &self.files {
            fs::write(path.join(name), content)?;
        }

        Ok(ChangelogDir {
            path,
            _temp_dir: temp_dir,
        })
    }
}

impl Default for ChangelogDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// a built changelog directory, removed when dropped
pub struct ChangelogDir {
    path: PathBuf,
    _temp_dir: TempDir,
}

impl ChangelogDir {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// add a file after the fixture was built
    pub fn add_file(&self, name: &str, content: &str) -> Result<(), Box<dyn std::error::Error>> {
        fs::write(self.path.join(name), content)?;
        Ok(())
    }

    /// delete a file from the fixture
    pub fn remove_file(&self, name: &str) -> Result<(), Box<dyn std::error::Error>> {
        fs::remove_file(self.path.join(name))?;
        Ok(())
    }
}
