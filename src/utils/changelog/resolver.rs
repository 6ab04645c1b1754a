// changelog discovery and override resolution

use super::filter::NameFilter;
use super::ordering::SortPolicy;
use super::types::{ChangelogFile, OrderedFileSet};
use crate::error::{Error, Result};
use crate::utils::config::LiquigenConfig;
use std::fs;
use std::path::Path;
use tracing::debug;

/// resolves the ordered set of changelog files for one run
///
/// the generated master changelog lives in the scanned directory, so a
/// previous run's output is picked up like any other file unless the
/// filter pattern or the ignore list excludes it
pub struct ChangelogResolver;

impl ChangelogResolver {
    /// discover, filter, order, then apply the configured overrides
    pub fn resolve(config: &LiquigenConfig) -> Result<OrderedFileSet> {
        // pattern problems are reported before the directory is touched
        let filter = NameFilter::from_pattern(config.file_pattern.as_deref())?;
        let policy = SortPolicy::from_spec(config.custom_sort.as_deref())?;

        let dir = config.changelog_dir.as_path();
        if !dir.is_dir() {
            return Err(Error::DirectoryNotFound {
                path: dir.to_path_buf(),
            });
        }

        let mut files = OrderedFileSet::new(policy);
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            if !entry.path().is_file() {
                continue;
            }
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                debug!("skipping non-utf8 filename: {:?}", name);
                continue;
            };
            if filter.accepts(name) {
                files.insert(ChangelogFile::new(dir, name));
            }
        }
        debug!(
            "discovered {} changelog files in {}",
            files.len(),
            dir.display()
        );

        Self::apply_ignore_list(config.files_to_ignore.as_deref(), dir, &mut files);
        Self::apply_insert_list(config.files_to_insert.as_deref(), dir, &mut files);

        Ok(files)
    }

    // overrides are best effort: a listed name whose file is not on disk
    // is skipped without failing the run
    fn apply_ignore_list(list: Option<&str>, dir: &Path, files: &mut OrderedFileSet) {
        for name in split_list(list) {
            let candidate = ChangelogFile::new(dir, name);
            if candidate.exists() {
                files.remove(name);
            } else {
                debug!(
                    "ignore override {} not on disk, skipped",
                    candidate.path().display()
                );
            }
        }
    }

    fn apply_insert_list(list: Option<&str>, dir: &Path, files: &mut OrderedFileSet) {
        for name in split_list(list) {
            let candidate = ChangelogFile::new(dir, name);
            if candidate.exists() {
                files.insert(candidate);
            } else {
                debug!(
                    "insert override {} not on disk, skipped",
                    candidate.path().display()
                );
            }
        }
    }
}

/// non-empty segments of a semicolon-delimited list
fn split_list(list: Option<&str>) -> impl Iterator<Item = &str> {
    list.unwrap_or_default()
        .split(';')
        .filter(|segment| !segment.is_empty())
}
