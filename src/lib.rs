pub mod error;
pub mod utils;

pub use error::*;
pub use utils::changelog::{
    ChangelogFile, ChangelogResolver, MasterChangelogWriter, NameFilter, OrderedFileSet,
    SortPolicy,
};
pub use utils::config::LiquigenConfig;
