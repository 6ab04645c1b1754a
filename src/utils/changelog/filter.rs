// filename filtering

use crate::error::{Error, Result};
use regex::Regex;

/// decides whether a directory entry is a candidate changelog file
///
/// an absent or empty pattern accepts every filename; otherwise the whole
/// filename must match the pattern, a substring hit is not enough
#[derive(Debug, Clone)]
pub struct NameFilter {
    pattern: Option<Regex>,
}

impl NameFilter {
    /// compile a filter from an optional pattern
    ///
    /// an invalid pattern fails here, before any directory is read
    pub fn from_pattern(pattern: Option<&str>) -> Result<Self> {
        match pattern {
            Some(p) if !p.is_empty() => {
                let regex = full_match(p).map_err(|e| Error::InvalidFilterPattern {
                    pattern: p.to_string(),
                    source: e,
                })?;
                Ok(Self {
                    pattern: Some(regex),
                })
            }
            _ => Ok(Self { pattern: None }),
        }
    }

    pub fn accepts(&self, name: &str) -> bool {
        match &self.pattern {
            Some(regex) => regex.is_match(name),
            None => true,
        }
    }
}

/// compile a pattern anchored to the whole string
pub(super) fn full_match(pattern: &str) -> std::result::Result<Regex, regex::Error> {
    Regex::new(&format!(r"\A(?:{})\z", pattern))
}
