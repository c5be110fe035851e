use std::collections::BTreeMap;

use rand::{seq::SliceRandom, Rng};
use serde::{Deserialize, Serialize};

use crate::entities::Category;

/// One or more templates of a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Templates {
    Single(String),
    Multiple(Vec<String>),
}

impl Templates {
    fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        match self {
            Self::Single(template) => Some(template.as_str()),
            Self::Multiple(templates) => templates.choose(rng).map(String::as_str),
        }
    }

    fn iter(&self) -> impl Iterator<Item = &String> {
        match self {
            Self::Single(template) => std::slice::from_ref(template).iter(),
            Self::Multiple(templates) => templates.iter(),
        }
    }
}

/// Sentence templates keyed by category.
///
/// Each template contains the placeholder of its category,
/// e.g. `{Action}`, which is substituted by the rendered tags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Samples {
    #[serde(rename = "Table", default)]
    pub table: Option<BTreeMap<String, String>>,
    #[serde(rename = "Taglist", default)]
    pub taglist: Option<String>,
    #[serde(flatten)]
    templates: BTreeMap<Category, Option<Templates>>,
}

impl Samples {
    pub fn set_templates(&mut self, category: Category, templates: Templates) {
        self.templates.insert(category, Some(templates));
    }

    /// Substitutes `text` into a randomly chosen template of `category`.
    ///
    /// Returns `None` if the category has no template.
    pub fn render<R: Rng + ?Sized>(
        &self,
        category: Category,
        text: &str,
        rng: &mut R,
    ) -> Option<String> {
        let template = self.templates.get(&category)?.as_ref()?.choose(rng)?;
        Some(template.replace(&category.placeholder(), text))
    }

    /// Templates that lack the placeholder of their category.
    pub fn without_placeholder(&self) -> Vec<(Category, &str)> {
        self.templates
            .iter()
            .filter_map(|(c, t)| t.as_ref().map(|t| (*c, t)))
            .flat_map(|(c, t)| t.iter().map(move |t| (c, t.as_str())))
            .filter(|(c, t)| !t.contains(&c.placeholder()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    const SAMPLES: &str = r#"{
        "Action": ["It shows {Action}."],
        "Comment": "Note: {Comment}",
        "Date": ["Recorded {Date}.", "Shot on {Date}."],
        "Plot": null,
        "Table": null,
        "Taglist": null
    }"#;

    fn samples() -> Samples {
        serde_json::from_str(SAMPLES).unwrap()
    }

    #[test]
    fn deserialize_mixed_template_shapes() {
        let samples = samples();
        assert!(samples.table.is_none());
        assert!(samples.taglist.is_none());
        assert_eq!(
            samples.templates.get(&Category::Comment),
            Some(&Some(Templates::Single("Note: {Comment}".into())))
        );
    }

    #[test]
    fn render_single_template() {
        let mut rng = StdRng::seed_from_u64(1);
        let samples = samples();
        assert_eq!(
            samples.render(Category::Comment, "great scene", &mut rng).as_deref(),
            Some("Note: great scene")
        );
        assert_eq!(
            samples.render(Category::Action, "running", &mut rng).as_deref(),
            Some("It shows running.")
        );
    }

    #[test]
    fn render_one_of_many_templates() {
        let mut rng = StdRng::seed_from_u64(7);
        let samples = samples();
        for _ in 0..10 {
            let text = samples.render(Category::Date, "2020/01/01", &mut rng).unwrap();
            assert!(text == "Recorded 2020/01/01." || text == "Shot on 2020/01/01.");
        }
    }

    #[test]
    fn missing_template() {
        let mut rng = StdRng::seed_from_u64(1);
        let samples = samples();
        assert!(samples.render(Category::Plot, "x", &mut rng).is_none());
        assert!(samples.render(Category::Body, "x", &mut rng).is_none());
    }

    #[test]
    fn detect_templates_without_placeholder() {
        let mut samples = samples();
        assert!(samples.without_placeholder().is_empty());
        samples.set_templates(
            Category::Body,
            Templates::Multiple(vec!["{Body} fits".into(), "{Action} fits".into()]),
        );
        assert_eq!(
            samples.without_placeholder(),
            vec![(Category::Body, "{Action} fits")]
        );
    }
}
