// changelog file set data structures

use super::ordering::SortPolicy;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// one candidate changelog file inside the changelog directory
#[derive(Debug, Clone)]
pub struct ChangelogFile {
    name: String,
    path: PathBuf,
}

impl ChangelogFile {
    pub fn new(dir: &Path, name: impl Into<String>) -> Self {
        let name = name.into();
        let path = dir.join(&name);
        Self { name, path }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// whether the file is currently present on disk as a regular file
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }
}

// the directory is fixed for one run, so the name alone identifies a file
impl PartialEq for ChangelogFile {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for ChangelogFile {}

/// set entry tagged with the bucket index its policy assigned
#[derive(Debug, Clone)]
struct RankedFile {
    rank: usize,
    file: ChangelogFile,
}

// entries compare equal only when the names are equal (same name always
// gets the same rank), so the set never collapses two distinct files
impl Ord for RankedFile {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank
            .cmp(&other.rank)
            .then_with(|| self.file.name().cmp(other.file.name()))
    }
}

impl PartialOrd for RankedFile {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for RankedFile {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for RankedFile {}

/// ordered, duplicate-free collection of changelog files
///
/// iteration follows the sort policy the set was built with and does not
/// depend on insertion order; inserting a name twice keeps one entry
#[derive(Debug, Clone)]
pub struct OrderedFileSet {
    policy: SortPolicy,
    entries: BTreeSet<RankedFile>,
}

impl OrderedFileSet {
    pub fn new(policy: SortPolicy) -> Self {
        Self {
            policy,
            entries: BTreeSet::new(),
        }
    }

    /// insert a file at the position the policy assigns it
    ///
    /// false if a file with the same name is already present
    pub fn insert(&mut self, file: ChangelogFile) -> bool {
        let rank = self.policy.rank(file.name());
        self.entries.insert(RankedFile { rank, file })
    }

    /// remove a file by name, false if it was not in the set
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.file.name() != name);
        self.entries.len() != before
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|entry| entry.file.name() == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// files in policy order
    pub fn iter(&self) -> impl Iterator<Item = &ChangelogFile> {
        self.entries.iter().map(|entry| &entry.file)
    }

    /// filenames in policy order
    pub fn names(&self) -> Vec<&str> {
        self.iter().map(|file| file.name()).collect()
    }
}
