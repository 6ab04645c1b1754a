// master changelog emission

use super::types::OrderedFileSet;
use crate::error::{Error, Result};
use crate::utils::config::LiquigenConfig;
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// naming template for the generated file
const MASTER_CHANGELOG_TEMPLATE: &str = "db.changelog-master-${sqlType}.xml";

/// opening block of the master changelog, with format and version markers
const XML_START: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!-- master changelog for ${sqlType} changelogs, generated file, do not edit -->
<databaseChangeLog
    xmlns="http://www.liquibase.org/xml/ns/dbchangelog"
    xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
    xsi:schemaLocation="http://www.liquibase.org/xml/ns/dbchangelog
        http://www.liquibase.org/xml/ns/dbchangelog/dbchangelog-${liquibaseVersion}.xsd">
"#;

/// closing block of the master changelog
const XML_END: &str = "</databaseChangeLog>\n";

/// serializes an ordered changelog set into the master changelog document
///
/// the output is a pure function of the inputs: nothing run-dependent goes
/// into the document and line endings are always `\n`
pub struct MasterChangelogWriter;

impl MasterChangelogWriter {
    /// filename of the master changelog for the configured format tag
    pub fn master_changelog_name(config: &LiquigenConfig) -> String {
        MASTER_CHANGELOG_TEMPLATE.replace("${sqlType}", &config.changelog_format)
    }

    /// full output path of the master changelog
    pub fn master_changelog_path(config: &LiquigenConfig) -> PathBuf {
        config
            .changelog_dir
            .join(Self::master_changelog_name(config))
    }

    /// render the whole document as a string
    pub fn render(config: &LiquigenConfig, files: &OrderedFileSet) -> String {
        let mut document = String::new();
        document.push_str(
            &XML_START
                .replace("${sqlType}", &config.changelog_format)
                .replace("${liquibaseVersion}", &config.liquibase_version),
        );
        for file in files.iter() {
            document.push_str(&format!(
                "  <include file=\"{}\" relativeToChangelogFile=\"true\"/>\n",
                file.name()
            ));
        }
        document.push_str(XML_END);
        document
    }

    /// write the master changelog into the changelog directory, replacing
    /// any previous run's output in one whole-file write
    pub fn write(config: &LiquigenConfig, files: &OrderedFileSet) -> Result<PathBuf> {
        let path = Self::master_changelog_path(config);
        let document = Self::render(config, files);
        fs::write(&path, document).map_err(|e| Error::OutputWriteError {
            path: path.clone(),
            source: e,
        })?;
        info!(
            "wrote master changelog {} referencing {} files",
            path.display(),
            files.len()
        );
        Ok(path)
    }
}
