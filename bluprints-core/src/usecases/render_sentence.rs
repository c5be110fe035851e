use rand::{seq::SliceRandom, Rng};

use super::prelude::*;
use crate::tag::is_resolution;

const SEPARATOR: &str = ", ";
const DATE_RANGE: &str = " up to ";
const CONNECTORS: [&str; 4] = [" and ", " along with ", " as well as ", " together with "];

/// Renders a single tag into a text fragment.
///
/// Dates and raw text categories keep the tag text, all other
/// categories are replaced by their dictionary phrase.
/// The suffix depends on the position of the tag:
/// a separator within the list, a connector before
/// the last tag and nothing after the last one.
pub fn render_fragment<R>(
    dictionary: &Dictionary,
    category: Category,
    tag: &str,
    position: Position,
    rng: &mut R,
) -> Result<String>
where
    R: Rng + ?Sized,
{
    if category == Category::Date {
        let text = tag.replace('.', "/");
        let suffix = match position {
            Position::FirstOrMiddle => SEPARATOR,
            Position::SecondLast => DATE_RANGE,
            Position::Last => "",
        };
        return Ok(text + suffix);
    }
    let text = if category.rules().raw_text || is_resolution(tag) {
        tag.replace('.', " ")
    } else {
        dictionary
            .get(category, tag)
            .map(ToString::to_string)
            .ok_or_else(|| Error::UnresolvedTag {
                category,
                tag: tag.to_string(),
            })?
    };
    let suffix = match position {
        Position::FirstOrMiddle => SEPARATOR,
        Position::SecondLast => CONNECTORS.choose(rng).copied().unwrap_or(CONNECTORS[0]),
        Position::Last => "",
    };
    Ok(text + suffix)
}

/// Renders all tags of a category into a single fragment.
pub fn render_sentence<R>(
    dictionary: &Dictionary,
    category: Category,
    tags: &[String],
    rng: &mut R,
) -> Result<String>
where
    R: Rng + ?Sized,
{
    let mut sentence = String::new();
    for (index, tag) in tags.iter().enumerate() {
        let position = Position::of(index, tags.len());
        sentence += &render_fragment(dictionary, category, tag, position, rng)?;
    }
    Ok(sentence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn dictionary() -> Dictionary {
        let mut dict = Dictionary::default();
        dict.insert(Category::Action, "run", "running".into());
        dict.insert(Category::Action, "jump", "jumping".into());
        dict.insert(Category::Action, "swim", "swimming".into());
        dict
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn strings(tags: &[&str]) -> Vec<String> {
        tags.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn render_dates_as_range() {
        let dict = Dictionary::default();
        let tags = strings(&["2020.01.01", "2020.02.01"]);
        let sentence = render_sentence(&dict, Category::Date, &tags, &mut rng()).unwrap();
        assert_eq!(sentence, "2020/01/01 up to 2020/02/01");
    }

    #[test]
    fn render_dates_within_list() {
        let dict = Dictionary::default();
        let text = render_fragment(
            &dict,
            Category::Date,
            "2020.01.01",
            Position::FirstOrMiddle,
            &mut rng(),
        )
        .unwrap();
        assert_eq!(text, "2020/01/01, ");
    }

    #[test]
    fn render_performers_as_raw_text() {
        let dict = Dictionary::default();
        let tags = strings(&["jane.doe", "john.doe"]);
        let sentence = render_sentence(&dict, Category::Performer, &tags, &mut rng()).unwrap();
        assert!(sentence.starts_with("jane doe "));
        assert!(sentence.ends_with(" john doe"));
        assert!(CONNECTORS
            .iter()
            .any(|c| sentence == format!("jane doe{c}john doe")));
    }

    #[test]
    fn render_resolution_regardless_of_dictionary() {
        let mut dict = Dictionary::default();
        dict.insert(Category::Resolution, "1080p", "full hd".into());
        let text = render_fragment(
            &dict,
            Category::Resolution,
            "1080p",
            Position::Last,
            &mut rng(),
        )
        .unwrap();
        assert_eq!(text, "1080p");
    }

    #[test]
    fn upper_case_resolution_needs_a_phrase() {
        let mut dict = Dictionary::default();
        dict.insert(Category::Resolution, "720P", "hd ready".into());
        let text = render_fragment(&dict, Category::Resolution, "720P", Position::Last, &mut rng())
            .unwrap();
        assert_eq!(text, "hd ready");
    }

    #[test]
    fn render_dictionary_phrases() {
        let dict = dictionary();
        let tags = strings(&["jump", "run", "swim"]);
        let sentence = render_sentence(&dict, Category::Action, &tags, &mut rng()).unwrap();
        assert!(sentence.starts_with("jumping, running "));
        assert!(sentence.ends_with(" swimming"));
    }

    #[test]
    fn single_tag_has_no_suffix() {
        let dict = dictionary();
        let tags = strings(&["RUN"]);
        let sentence = render_sentence(&dict, Category::Action, &tags, &mut rng()).unwrap();
        assert_eq!(sentence, "running");
    }

    #[test]
    fn same_seed_same_sentence() {
        let dict = dictionary();
        let tags = strings(&["jump", "run", "swim"]);
        let a = render_sentence(&dict, Category::Action, &tags, &mut rng()).unwrap();
        let b = render_sentence(&dict, Category::Action, &tags, &mut rng()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn fail_on_unresolved_tag() {
        let dict = dictionary();
        let err = render_fragment(&dict, Category::Action, "fly", Position::Last, &mut rng())
            .unwrap_err();
        assert!(matches!(
            err,
            Error::UnresolvedTag { category: Category::Action, ref tag } if tag == "fly"
        ));
    }
}
