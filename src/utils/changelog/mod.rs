// changelog aggregation module

pub mod filter;
pub mod ordering;
pub mod resolver;
pub mod types;
pub mod writer;

pub use filter::NameFilter;
pub use ordering::SortPolicy;
pub use resolver::ChangelogResolver;
pub use types::{ChangelogFile, OrderedFileSet};
pub use writer::MasterChangelogWriter;
