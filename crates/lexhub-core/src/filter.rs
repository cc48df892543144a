//! Search and filtering over the corpus.
//!
//! The global filter combines three independent predicates conjunctively:
//! case-insensitive substring match on title or author, jurisdiction
//! equality, and category equality. Results keep corpus order.
//!
//! The jurisdiction detail view has its own narrower predicate
//! ([`JurisdictionFilter`]) whose jurisdiction is fixed rather than chosen.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::entry::{Category, Jurisdiction, KnowledgeEntry, ParseLabelError};

/// A filter choice: either everything, or one value of an enumerated set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self::All
    }
}

impl<T: PartialEq> Selection<T> {
    /// True if `value` passes this selection.
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == value,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Only(v) => v.fmt(f),
        }
    }
}

impl<T: FromStr<Err = ParseLabelError>> FromStr for Selection<T> {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

/// The three user-controlled criteria of the overview search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FilterCriteria {
    pub search: String,
    pub jurisdiction: Selection<Jurisdiction>,
    pub category: Selection<Category>,
}

impl FilterCriteria {
    pub fn new(
        search: impl Into<String>,
        jurisdiction: Selection<Jurisdiction>,
        category: Selection<Category>,
    ) -> Self {
        Self {
            search: search.into(),
            jurisdiction,
            category,
        }
    }

    /// True if `entry` satisfies all three predicates.
    pub fn matches(&self, entry: &KnowledgeEntry) -> bool {
        self.matches_text(entry)
            && self.jurisdiction.admits(&entry.jurisdiction)
            && self.category.admits(&entry.category)
    }

    fn matches_text(&self, entry: &KnowledgeEntry) -> bool {
        let needle = self.search.trim();
        if needle.is_empty() {
            return true;
        }
        let needle = needle.to_lowercase();
        entry.title.to_lowercase().contains(&needle)
            || entry.author.to_lowercase().contains(&needle)
    }
}

/// Entries satisfying `criteria`, in corpus order.
pub fn filter_entries<'c>(
    entries: &'c [KnowledgeEntry],
    criteria: &FilterCriteria,
) -> Vec<&'c KnowledgeEntry> {
    entries.iter().filter(|e| criteria.matches(e)).collect()
}

/// Category filter scoped to a single jurisdiction's detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JurisdictionFilter {
    pub jurisdiction: Jurisdiction,
    pub category: Selection<Category>,
}

impl JurisdictionFilter {
    pub fn new(jurisdiction: Jurisdiction) -> Self {
        Self {
            jurisdiction,
            category: Selection::All,
        }
    }

    pub fn matches(&self, entry: &KnowledgeEntry) -> bool {
        entry.jurisdiction == self.jurisdiction && self.category.admits(&entry.category)
    }

    pub fn apply<'c>(&self, entries: &'c [KnowledgeEntry]) -> Vec<&'c KnowledgeEntry> {
        entries.iter().filter(|e| self.matches(e)).collect()
    }
}

/// Memoised filter result keyed on the full [`FilterCriteria`].
///
/// The cached list is recomputed only when the criteria passed to
/// [`get`](Self::get) differ from the ones it was computed for.
pub struct FilterMemo<'c> {
    entries: &'c [KnowledgeEntry],
    key: Option<FilterCriteria>,
    results: Vec<&'c KnowledgeEntry>,
    recomputations: usize,
}

impl<'c> FilterMemo<'c> {
    pub fn new(entries: &'c [KnowledgeEntry]) -> Self {
        Self {
            entries,
            key: None,
            results: Vec::new(),
            recomputations: 0,
        }
    }

    pub fn get(&mut self, criteria: &FilterCriteria) -> &[&'c KnowledgeEntry] {
        if self.key.as_ref() != Some(criteria) {
            self.results = filter_entries(self.entries, criteria);
            self.key = Some(criteria.clone());
            self.recomputations += 1;
            debug!(
                search = %criteria.search,
                jurisdiction = %criteria.jurisdiction,
                category = %criteria.category,
                matched = self.results.len(),
                "recomputed filtered entries"
            );
        }
        &self.results
    }

    /// How many times the list has been derived from scratch.
    pub fn recomputations(&self) -> usize {
        self.recomputations
    }
}
