use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::entities::Category;

/// Phrases for tags, grouped by category.
///
/// Keys are stored in lower case. Both levels are ordered
/// so that serializing the same dictionary twice yields
/// identical output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dictionary(BTreeMap<Category, BTreeMap<String, String>>);

impl Dictionary {
    /// Case insensitive lookup.
    pub fn get(&self, category: Category, tag: &str) -> Option<&str> {
        self.0
            .get(&category)
            .and_then(|phrases| phrases.get(&tag.to_lowercase()))
            .map(String::as_str)
    }

    pub fn contains(&self, category: Category, tag: &str) -> bool {
        self.get(category, tag).is_some()
    }

    /// Inserts or overwrites a phrase and returns the previous one.
    pub fn insert(&mut self, category: Category, tag: &str, phrase: String) -> Option<String> {
        self.0
            .entry(category)
            .or_default()
            .insert(tag.to_lowercase(), phrase)
    }

    /// All tags and phrases of a category, ordered by tag.
    pub fn phrases(&self, category: Category) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .get(&category)
            .into_iter()
            .flat_map(|phrases| phrases.iter())
            .map(|(t, p)| (t.as_str(), p.as_str()))
    }

    /// Finds the first category other than `except` that knows `tag`.
    ///
    /// Categories are scanned in enumeration order.
    pub fn home_of(&self, tag: &str, except: Category) -> Option<Category> {
        Category::with_dictionary()
            .filter(|c| *c != except)
            .find(|c| self.contains(*c, tag))
    }

    pub fn len(&self) -> usize {
        self.0.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
