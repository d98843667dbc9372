//! Per-screen filter composition.
//!
//! Screens describe their filters as a list of predicates; a record is kept
//! only when every predicate accepts it. Filtering never reorders records.

use std::fmt;
use std::str::FromStr;

use crate::error::CliError;

/// Case-insensitive substring test
pub fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    needle_lower.is_empty() || haystack.to_lowercase().contains(needle_lower)
}

/// Free-text search across a fixed set of record fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextSearch {
    term_lower: String,
}

impl TextSearch {
    /// Surrounding whitespace in `term` is ignored
    pub fn new(term: &str) -> Self {
        Self {
            term_lower: term.trim().to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.term_lower.is_empty()
    }

    /// An empty term matches every record
    pub fn matches_any<'a>(&self, fields: impl IntoIterator<Item = &'a str>) -> bool {
        self.is_empty()
            || fields
                .into_iter()
                .any(|field| contains_ignore_case(field, &self.term_lower))
    }
}

/// A boolean test over one record
pub trait Predicate<T> {
    fn test(&self, record: &T) -> bool;
}

impl<T, F> Predicate<T> for F
where
    F: Fn(&T) -> bool,
{
    fn test(&self, record: &T) -> bool {
        self(record)
    }
}

/// AND-composition of predicates
pub struct FilterSet<'a, T> {
    predicates: Vec<Box<dyn Predicate<T> + 'a>>,
}

impl<T> Default for FilterSet<'_, T> {
    fn default() -> Self {
        Self {
            predicates: Vec::new(),
        }
    }
}

impl<'a, T> FilterSet<'a, T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a predicate
    pub fn with(mut self, predicate: impl Predicate<T> + 'a) -> Self {
        self.predicates.push(Box::new(predicate));
        self
    }

    /// Add a predicate only when `condition` is present
    pub fn with_optional<C: 'a>(
        self,
        condition: Option<C>,
        predicate: impl Fn(&C, &T) -> bool + 'a,
    ) -> Self {
        match condition {
            Some(value) => self.with(move |record: &T| predicate(&value, record)),
            None => self,
        }
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn matches(&self, record: &T) -> bool {
        self.predicates.iter().all(|p| p.test(record))
    }

    /// Records passing every predicate, in source order
    pub fn apply(&self, records: &[T]) -> Vec<T>
    where
        T: Clone,
    {
        records
            .iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect()
    }
}

/// Inventory stock classification filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StockFilter {
    #[default]
    All,
    Critical,
    Normal,
}

impl StockFilter {
    pub fn accepts(&self, is_critical: bool) -> bool {
        match self {
            StockFilter::All => true,
            StockFilter::Critical => is_critical,
            StockFilter::Normal => !is_critical,
        }
    }
}

impl FromStr for StockFilter {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(StockFilter::All),
            "critical" => Ok(StockFilter::Critical),
            "normal" => Ok(StockFilter::Normal),
            other => Err(CliError::InvalidArguments(format!(
                "Unknown stock filter '{}': expected all, critical or normal",
                other
            ))),
        }
    }
}

impl fmt::Display for StockFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StockFilter::All => "all",
            StockFilter::Critical => "critical",
            StockFilter::Normal => "normal",
        })
    }
}
