// testing utilities for generating changelog directory fixtures

pub mod changelog_dir;

pub use changelog_dir::{ChangelogDir, ChangelogDirBuilder};
