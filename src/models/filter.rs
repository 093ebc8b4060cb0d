//! Filter configuration types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Literal used by hosts for the wildcard selection.
const ALL: &str = "all";

/// A categorical selection: either every value or one exact value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Selection {
    /// Keep every record.
    #[default]
    All,
    /// Keep records whose field equals this value exactly.
    Only(String),
}

impl Selection {
    /// Parses a selection; only the exact literal `all` is the wildcard.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        if s == ALL {
            Self::All
        } else {
            Self::Only(s.to_string())
        }
    }

    /// Returns true for the wildcard.
    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Returns true if a field value passes this selection.
    #[must_use]
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == value,
        }
    }

    /// Returns the selected value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Only(v) => Some(v),
        }
    }
}

impl From<String> for Selection {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<&str> for Selection {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<Selection> for String {
    fn from(selection: Selection) -> Self {
        match selection {
            Selection::All => ALL.to_string(),
            Selection::Only(v) => v,
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "{ALL}"),
            Self::Only(v) => write!(f, "{v}"),
        }
    }
}

/// Sort order for the visible subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Most recent date first (default).
    #[default]
    Newest,
    /// Oldest date first.
    Oldest,
    /// Title, A to Z.
    #[serde(alias = "alpha-az")]
    AlphaAsc,
    /// Title, Z to A.
    #[serde(alias = "alpha-za")]
    AlphaDesc,
}

impl SortOrder {
    /// Returns all sort orders.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Newest, Self::Oldest, Self::AlphaAsc, Self::AlphaDesc]
    }

    /// Returns the order as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::AlphaAsc => "alpha-asc",
            Self::AlphaDesc => "alpha-desc",
        }
    }

    /// Parses a sort order, accepting the `alpha-az`/`alpha-za` aliases.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "newest" => Some(Self::Newest),
            "oldest" => Some(Self::Oldest),
            "alpha-asc" | "alpha-az" => Some(Self::AlphaAsc),
            "alpha-desc" | "alpha-za" => Some(Self::AlphaDesc),
            _ => None,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| crate::Error::InvalidInput(format!("unknown sort order: {s}")))
    }
}

/// The active filter and sort choices.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Collection selection.
    pub collection: Selection,
    /// Blockchain selection.
    pub blockchain: Selection,
    /// Required tags (AND logic), in the order they were activated.
    pub tags: Vec<String>,
    /// Case-insensitive search term; empty matches everything.
    pub search: String,
    /// Sort order.
    pub sort: SortOrder,
}

impl FilterConfig {
    /// Creates the default configuration (matches all, newest first).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the collection selection.
    #[must_use]
    pub fn with_collection(mut self, collection: impl Into<Selection>) -> Self {
        self.collection = collection.into();
        self
    }

    /// Sets the blockchain selection.
    #[must_use]
    pub fn with_blockchain(mut self, blockchain: impl Into<Selection>) -> Self {
        self.blockchain = blockchain.into();
        self
    }

    /// Adds a required tag.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
        self
    }

    /// Sets the search term.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Sets the sort order.
    #[must_use]
    pub const fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// Activates a tag if inactive, deactivates it otherwise.
    ///
    /// Returns true if the tag is active afterwards.
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        if let Some(idx) = self.tags.iter().position(|t| t == tag) {
            self.tags.remove(idx);
            false
        } else {
            self.tags.push(tag.to_string());
            true
        }
    }

    /// Returns true if the tag is currently required.
    #[must_use]
    pub fn is_tag_active(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Returns true if any filter can remove records.
    ///
    /// The sort order is not a filter.
    #[must_use]
    pub fn has_active_filters(&self) -> bool {
        !self.collection.is_all()
            || !self.blockchain.is_all()
            || !self.tags.is_empty()
            || !self.search.is_empty()
    }

    /// Returns true if this is exactly the default configuration.
    #[must_use]
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}
