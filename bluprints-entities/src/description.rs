use std::collections::BTreeMap;

use serde::Serialize;

use crate::{category::Category, document::CategoryInfo};

/// The human readable description derived from a [`TagDocument`](crate::document::TagDocument).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Description {
    /// Rendered prose per category.
    ///
    /// The comment is stored verbatim in its alphabetical slot,
    /// see [`Description::set_comment`].
    #[serde(flatten)]
    sections: BTreeMap<Category, String>,
    pub title: String,
    pub style: String,
    pub category: CategoryInfo,
    pub taglist: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collages: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graph: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screens: Option<String>,
    /// The comment substituted into its template.
    #[serde(skip)]
    pub rendered_comment: Option<String>,
}

impl Description {
    pub fn section(&self, category: Category) -> Option<&str> {
        self.sections.get(&category).map(String::as_str)
    }

    pub fn sections(&self) -> impl Iterator<Item = (Category, &str)> {
        self.sections.iter().map(|(c, s)| (*c, s.as_str()))
    }

    /// Stores rendered prose.
    ///
    /// A rendered comment goes to [`Description::rendered_comment`]
    /// and never replaces the raw one.
    pub fn set_section(&mut self, category: Category, text: String) {
        if category == Category::Comment {
            self.rendered_comment = Some(text);
            return;
        }
        self.sections.insert(category, text);
    }

    pub fn comment(&self) -> &str {
        self.section(Category::Comment).unwrap_or_default()
    }

    pub fn set_comment(&mut self, comment: String) {
        self.sections.insert(Category::Comment, comment);
    }
}

/// Combines media references into a single field.
///
/// No items yield nothing, a single item is returned bare
/// and multiple items are wrapped into a spoiler named `label`.
pub fn wrap_media(label: &str, items: &[String]) -> Option<String> {
    match items {
        [] => None,
        [single] => Some(single.clone()),
        _ => Some(format!("[spoiler={label}]{}[/spoiler]", items.concat())),
    }
}
