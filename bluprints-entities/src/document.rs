use std::collections::BTreeMap;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{
    category::Category,
    tag::{join_tags, split_tags},
};

/// The editable tag document describing a single media post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TagDocument {
    pub style: String,
    pub title: String,
    pub category: CategoryInfo,
    pub taglist: Taglist,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
    #[serde(default)]
    pub collages: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graph: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    #[serde(default)]
    pub screens: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInfo {
    #[serde(rename = "Emp")]
    pub emp: String,
    #[serde(rename = "Ent")]
    pub ent: String,
    #[serde(rename = "PBay")]
    pub pbay: String,
}

/// Raw tag strings keyed by category.
///
/// Every value is a space separated list of tags,
/// except for [`Category::Comment`] which holds free text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Taglist(BTreeMap<Category, String>);

impl Taglist {
    pub fn raw(&self, category: Category) -> &str {
        self.0.get(&category).map(String::as_str).unwrap_or_default()
    }

    pub fn set_raw(&mut self, category: Category, value: String) {
        self.0.insert(category, value);
    }

    pub fn comment(&self) -> &str {
        self.raw(Category::Comment)
    }

    /// The deduplicated and sorted tags of a category.
    ///
    /// The comment is free text and never yields tags.
    pub fn tags(&self, category: Category) -> Vec<String> {
        if category == Category::Comment {
            return vec![];
        }
        split_tags(self.raw(category))
    }

    /// Removes every literal occurrence of `tag`, keeping the order of the rest.
    ///
    /// Returns `true` if something was removed.
    pub fn remove_tag(&mut self, category: Category, tag: &str) -> bool {
        let before: Vec<&str> = self.raw(category).split_whitespace().collect();
        let after: Vec<&str> = before.iter().copied().filter(|t| *t != tag).collect();
        if before.len() == after.len() {
            return false;
        }
        let joined = join_tags(&after);
        self.set_raw(category, joined);
        true
    }

    /// Substitutes `old` with `new`, then deduplicates and sorts the category.
    pub fn replace_tag(&mut self, category: Category, old: &str, new: &str) {
        let mut tags: Vec<&str> = self
            .raw(category)
            .split_whitespace()
            .filter(|t| *t != old)
            .collect();
        tags.push(new);
        tags.sort_unstable();
        tags.dedup();
        let joined = join_tags(&tags);
        self.set_raw(category, joined);
    }

    /// Appends tags to a category, then deduplicates and sorts it.
    pub fn add_tags<S: AsRef<str>>(&mut self, category: Category, new_tags: &[S]) {
        let mut tags: Vec<&str> = self.raw(category).split_whitespace().collect();
        tags.extend(new_tags.iter().map(AsRef::as_ref));
        tags.sort_unstable();
        tags.dedup();
        let joined = join_tags(&tags);
        self.set_raw(category, joined);
    }

    /// All tags of all categories merged into a single string.
    ///
    /// The tags are sorted as written and lower cased afterwards,
    /// so upper case tags keep their place in front of lower case ones.
    /// Tags that only differ in case are merged into their first occurrence.
    pub fn merged(&self) -> String {
        let merged: Vec<String> = Category::with_tags()
            .flat_map(|c| self.tags(c))
            .sorted()
            .map(|t| t.to_lowercase())
            .unique()
            .collect();
        join_tags(&merged)
    }
}
