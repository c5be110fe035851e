use rand::Rng;
use strum::IntoEnumIterator;

use super::{prelude::*, render_sentence, validate_tags};
use crate::{gateways::prompt::Prompt, tag::split_text_into_tags};

/// Turns the tag document into a description.
///
/// Validation may rewrite the document and the dictionary,
/// therefore the merged tag list is computed from the
/// document as it is stored after all categories are done.
pub fn build_description<R, P, G>(
    repo: &R,
    prompt: &P,
    rng: &mut G,
    dictionary: &mut Dictionary,
    samples: &Samples,
) -> Result<Description>
where
    R: DictionaryRepo + TagDocumentRepo,
    P: Prompt,
    G: Rng + ?Sized,
{
    let doc = repo.load_document()?;
    let mut desc = Description::default();

    for category in Category::iter() {
        let text = match category {
            Category::Comment => render(samples, category, doc.taglist.comment(), rng)?,
            // Group tags only end up in the merged tag list.
            Category::Group => None,
            _ => {
                let mut tags = doc.taglist.tags(category);
                if tags.is_empty() {
                    if !category.is_mandatory() {
                        continue;
                    }
                    tags = ask_for_missing_tags(repo, prompt, category)?;
                }
                let tags = validate_tags(repo, prompt, dictionary, category, tags)?;
                let sentence = render_sentence(dictionary, category, &tags, rng)?;
                if sentence.is_empty() {
                    None
                } else {
                    render(samples, category, &sentence, rng)?
                }
            }
        };
        if let Some(text) = text {
            desc.set_section(category, text);
        }
    }

    let updated = repo.load_document()?;
    desc.taglist = updated.taglist.merged();

    let TagDocument {
        style,
        title,
        category,
        taglist,
        table,
        cover,
        collages,
        graph,
        poster,
        screens,
    } = doc;
    desc.title = title;
    desc.style = style;
    desc.category = category;
    desc.set_comment(taglist.comment().to_string());
    desc.table = table;
    desc.cover = cover;
    desc.collages = wrap_media("Collages", &collages);
    desc.graph = graph;
    desc.poster = poster;
    desc.screens = wrap_media("Screens", &screens);
    Ok(desc)
}

fn render<G: Rng + ?Sized>(
    samples: &Samples,
    category: Category,
    text: &str,
    rng: &mut G,
) -> Result<Option<String>> {
    let text = samples
        .render(category, text, rng)
        .ok_or(Error::MissingTemplate(category))?;
    Ok(Some(text).filter(|t| !t.is_empty()))
}

// The supplied tags are stored in the document so that
// later corrections and the merged tag list include them.
fn ask_for_missing_tags<R, P>(repo: &R, prompt: &P, category: Category) -> Result<Vec<String>>
where
    R: TagDocumentRepo,
    P: Prompt,
{
    let question = format!("Please input missing tag(s) for [{}]", category.label());
    let tags = loop {
        let input = prompt.read_line(&question)?;
        let tags = split_text_into_tags(&input);
        if !tags.is_empty() {
            break tags;
        }
    };
    let mut doc = repo.load_document()?;
    doc.taglist.add_tags(category, &tags);
    repo.save_document(&doc)?;
    Ok(doc.taglist.tags(category))
}
