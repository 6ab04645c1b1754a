use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// main configuration for liquigen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiquigenConfig {
    /// directory scanned for changelog files, also receives the output
    #[serde(default = "default_changelog_dir")]
    pub changelog_dir: PathBuf,

    /// changelog flavor tag substituted into the output name and header
    #[serde(default = "default_changelog_format")]
    pub changelog_format: String,

    /// liquibase version substituted into the header schema reference
    #[serde(default = "default_liquibase_version")]
    pub liquibase_version: String,

    /// pattern a filename must fully match to be picked up
    #[serde(default)]
    pub file_pattern: Option<String>,

    /// semicolon-delimited patterns defining the priority ordering
    #[serde(default)]
    pub custom_sort: Option<String>,

    /// semicolon-delimited filenames to drop from the master changelog
    #[serde(default)]
    pub files_to_ignore: Option<String>,

    /// semicolon-delimited filenames to force into the master changelog
    #[serde(default)]
    pub files_to_insert: Option<String>,
}

fn default_changelog_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_changelog_format() -> String {
    "sql".to_string()
}

fn default_liquibase_version() -> String {
    "latest".to_string()
}

impl Default for LiquigenConfig {
    fn default() -> Self {
        Self {
            changelog_dir: default_changelog_dir(),
            changelog_format: default_changelog_format(),
            liquibase_version: default_liquibase_version(),
            file_pattern: None,
            custom_sort: None,
            files_to_ignore: None,
            files_to_insert: None,
        }
    }
}

impl LiquigenConfig {
    pub fn new() -> Self {
        Self::default()
    }

    // builder setters used by the cli merge and by tests

    pub fn changelog_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.changelog_dir = dir.into();
        self
    }

    pub fn changelog_format(mut self, format: impl Into<String>) -> Self {
        self.changelog_format = format.into();
        self
    }

    pub fn liquibase_version(mut self, version: impl Into<String>) -> Self {
        self.liquibase_version = version.into();
        self
    }

    pub fn file_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.file_pattern = Some(pattern.into());
        self
    }

    pub fn custom_sort(mut self, spec: impl Into<String>) -> Self {
        self.custom_sort = Some(spec.into());
        self
    }

    pub fn files_to_ignore(mut self, list: impl Into<String>) -> Self {
        self.files_to_ignore = Some(list.into());
        self
    }

    pub fn files_to_insert(mut self, list: impl Into<String>) -> Self {
        self.files_to_insert = Some(list.into());
        self
    }

    /// load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents =
            std::fs::read_to_string(path).map_err(|e| crate::error::Error::FileReadError {
                path: path.to_path_buf(),
                source: e,
            })?;

        let config: LiquigenConfig =
            toml::from_str(&contents).map_err(|e| crate::error::Error::TomlParseError {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(config)
    }

    /// find and load configuration in the changelog directory
    ///
    /// looks for `liquigen.toml` in the changelog directory
    /// returns default config if file is not found
    pub fn load_or_default<P: AsRef<Path>>(dir: P) -> Self {
        match Self::find_config_file(&dir) {
            Some(config_path) => {
                // if config exists but can't be parsed, use default
                // (errors will be reported separately)
                Self::load_from_file(&config_path).unwrap_or_default()
            }
            None => Self::default(),
        }
    }

    /// find configuration file in the changelog directory
    ///
    /// looks for `liquigen.toml` in the changelog directory
    pub fn find_config_file<P: AsRef<Path>>(dir: P) -> Option<PathBuf> {
        let dir = dir.as_ref();
        let config_path = dir.join("liquigen.toml");

        if config_path.exists() && config_path.is_file() {
            Some(config_path)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = LiquigenConfig::default();
        assert_eq!(config.changelog_dir, PathBuf::from("."));
        assert_eq!(config.changelog_format, "sql");
        assert_eq!(config.liquibase_version, "latest");
        assert!(config.file_pattern.is_none());
        assert!(config.custom_sort.is_none());
        assert!(config.files_to_ignore.is_none());
        assert!(config.files_to_insert.is_none());
    }

    #[test]
    fn test_builder_setters() {
        let config = LiquigenConfig::new()
            .changelog_dir("/db/changelog")
            .changelog_format("postgres")
            .liquibase_version("4.27")
            .file_pattern(r".*\.sql")
            .custom_sort("^[0-9].*")
            .files_to_ignore("a.sql")
            .files_to_insert("z.sql");

        assert_eq!(config.changelog_dir, PathBuf::from("/db/changelog"));
        assert_eq!(config.changelog_format, "postgres");
        assert_eq!(config.liquibase_version, "4.27");
        assert_eq!(config.file_pattern.as_deref(), Some(r".*\.sql"));
        assert_eq!(config.custom_sort.as_deref(), Some("^[0-9].*"));
        assert_eq!(config.files_to_ignore.as_deref(), Some("a.sql"));
        assert_eq!(config.files_to_insert.as_deref(), Some("z.sql"));
    }

    #[test]
    fn test_load_from_file_fills_missing_fields_with_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("liquigen.toml");
        fs::write(
            &config_path,
            "changelog_format = \"oracle\"\nfile_pattern = \".*\\\\.sql\"\n",
        )
        .unwrap();

        let config = LiquigenConfig::load_from_file(&config_path).unwrap();
        assert_eq!(config.changelog_format, "oracle");
        assert_eq!(config.file_pattern.as_deref(), Some(r".*\.sql"));
        assert_eq!(config.liquibase_version, "latest");
        assert!(config.custom_sort.is_none());
    }

    #[test]
    fn test_load_from_file_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = LiquigenConfig::load_from_file(temp_dir.path().join("nope.toml"));
        assert!(matches!(result, Err(Error::FileReadError { .. })));
    }

    #[test]
    fn test_load_from_file_bad_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("liquigen.toml");
        fs::write(&config_path, "changelog_format = [not toml").unwrap();

        let result = LiquigenConfig::load_from_file(&config_path);
        assert!(matches!(result, Err(Error::TomlParseError { .. })));
    }

    #[test]
    fn test_find_config_file() {
        let temp_dir = TempDir::new().unwrap();
        assert!(LiquigenConfig::find_config_file(temp_dir.path()).is_none());

        let config_path = temp_dir.path().join("liquigen.toml");
        fs::write(&config_path, "changelog_format = \"sql\"\n").unwrap();
        assert_eq!(
            LiquigenConfig::find_config_file(temp_dir.path()),
            Some(config_path)
        );
    }

    #[test]
    fn test_load_or_default_falls_back_on_parse_errors() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("liquigen.toml"), "not = [valid").unwrap();

        let config = LiquigenConfig::load_or_default(temp_dir.path());
        assert_eq!(config.changelog_format, "sql");
    }

    #[test]
    fn test_load_or_default_reads_an_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("liquigen.toml"),
            "custom_sort = \"^[0-9].*;.*hotfix.*\"\n",
        )
        .unwrap();

        let config = LiquigenConfig::load_or_default(temp_dir.path());
        assert_eq!(config.custom_sort.as_deref(), Some("^[0-9].*;.*hotfix.*"));
    }
}
