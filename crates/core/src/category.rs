//! Content categories and the configured closed set they are drawn from.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_CATEGORIES;
use crate::error::CoreError;

/// A validated category identifier.
///
/// Only obtainable through [`CategorySet::resolve`], so holding one means the
/// name belongs to the configured set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Category {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The closed set of categories sequence days are tracked under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct CategorySet {
    categories: Vec<Category>,
}

impl CategorySet {
    /// Build a set from names. Names are trimmed; repeats are dropped keeping
    /// the first occurrence.
    ///
    /// # Errors
    /// Returns `CoreError::InvalidConfig` if a name is blank or no names are given.
    pub fn new<I, S>(names: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut categories: Vec<Category> = Vec::new();
        for name in names {
            let trimmed = name.as_ref().trim();
            if trimmed.is_empty() {
                return Err(CoreError::InvalidConfig("category names cannot be blank".to_owned()));
            }
            if !categories.iter().any(|c| c.as_str() == trimmed) {
                categories.push(Category(trimmed.to_owned()));
            }
        }
        if categories.is_empty() {
            return Err(CoreError::InvalidConfig("at least one category is required".to_owned()));
        }
        Ok(Self { categories })
    }

    /// Parse a comma-separated list such as `MMO,AI/Tech,Faceless`.
    ///
    /// # Errors
    /// Returns `CoreError::InvalidConfig` if the list holds no usable names.
    pub fn parse_list(raw: &str) -> Result<Self, CoreError> {
        Self::new(raw.split(',').map(str::trim).filter(|name| !name.is_empty()))
    }

    /// Resolve a raw identifier to a member of the set.
    ///
    /// # Errors
    /// Returns `CoreError::InvalidInput` if `raw` is blank or not in the set.
    pub fn resolve(&self, raw: &str) -> Result<Category, CoreError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CoreError::InvalidInput("category cannot be empty".to_owned()));
        }
        self.categories.iter().find(|c| c.as_str() == trimmed).cloned().ok_or_else(|| {
            CoreError::InvalidInput(format!(
                "unknown category '{trimmed}' (expected one of: {})",
                self.names().join(", ")
            ))
        })
    }

    #[must_use]
    pub fn contains(&self, raw: &str) -> bool {
        self.resolve(raw).is_ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.categories.iter().map(Category::as_str).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Default for CategorySet {
    fn default() -> Self {
        Self {
            categories: DEFAULT_CATEGORIES.iter().map(|name| Category((*name).to_owned())).collect(),
        }
    }
}

impl TryFrom<Vec<String>> for CategorySet {
    type Error = CoreError;

    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(names)
    }
}

impl From<CategorySet> for Vec<String> {
    fn from(set: CategorySet) -> Self {
        set.categories.into_iter().map(|c| c.0).collect()
    }
}
