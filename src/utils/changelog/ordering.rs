// changelog ordering policy

use super::filter::full_match;
use crate::error::{Error, Result};
use regex::Regex;
use std::cmp::Ordering;

/// total order over changelog filenames
///
/// without a custom sort spec the order is plain lexicographic. a spec is a
/// semicolon-delimited pattern list: each filename is ranked by the first
/// pattern it fully matches, files matching no pattern rank after every
/// bucket, and lexicographic filename order breaks ties within a rank
#[derive(Debug, Clone)]
pub struct SortPolicy {
    buckets: Vec<Regex>,
}

impl SortPolicy {
    /// plain lexicographic order, used when no custom spec is given
    pub fn lexicographic() -> Self {
        Self {
            buckets: Vec::new(),
        }
    }

    /// build a policy from an optional semicolon-delimited pattern spec
    ///
    /// empty segments are skipped; an invalid pattern fails here, before
    /// any directory is read
    pub fn from_spec(spec: Option<&str>) -> Result<Self> {
        let mut buckets = Vec::new();
        if let Some(spec) = spec {
            for pattern in spec.split(';') {
                if pattern.is_empty() {
                    continue;
                }
                let regex = full_match(pattern).map_err(|e| Error::InvalidSortPattern {
                    pattern: pattern.to_string(),
                    source: e,
                })?;
                buckets.push(regex);
            }
        }
        Ok(Self { buckets })
    }

    /// bucket index for a filename
    ///
    /// the first matching pattern wins; one past the last bucket when
    /// nothing matches
    pub fn rank(&self, name: &str) -> usize {
        self.buckets
            .iter()
            .position(|bucket| bucket.is_match(name))
            .unwrap_or(self.buckets.len())
    }

    /// compare two filenames, bucket index first, then the name itself
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.rank(a).cmp(&self.rank(b)).then_with(|| a.cmp(b))
    }
}

impl Default for SortPolicy {
    fn default() -> Self {
        Self::lexicographic()
    }
}
