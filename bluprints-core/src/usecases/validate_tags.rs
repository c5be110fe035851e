use super::{prelude::*, update_dictionary};
use crate::{gateways::prompt::Prompt, tag::is_resolution};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Correction {
    Correct,
    UpdateDictionary,
    Dismiss,
}

/// Resolves every tag of a category against the dictionary.
///
/// Tags that are known, free-form or resolutions are kept as they are.
/// A tag that is filed under another category is removed from the document.
/// Every other tag is corrected, added to the dictionary or dismissed
/// interactively. The document is rewritten after each change.
///
/// The input is expected to be deduplicated. Removing a tag from the
/// document removes all of its literal occurrences.
pub fn validate_tags<R, P>(
    repo: &R,
    prompt: &P,
    dictionary: &mut Dictionary,
    category: Category,
    tags: Vec<String>,
) -> Result<Vec<String>>
where
    R: DictionaryRepo + TagDocumentRepo,
    P: Prompt,
{
    if category.is_free_form() {
        return Ok(tags);
    }
    let mut doc = repo.load_document()?;
    let mut resolved = Vec::with_capacity(tags.len());

    for tag in tags {
        if is_resolution(&tag) || dictionary.contains(category, &tag) {
            push_unique(&mut resolved, tag);
            continue;
        }

        if let Some(home) = dictionary.home_of(&tag, category) {
            doc.taglist.remove_tag(category, &tag);
            repo.save_document(&doc)?;
            log::warn!(
                "The tag [{}] already exists for the following category: [{}]",
                tag.to_lowercase(),
                home.label()
            );
            log::warn!("Removed it from taglist category [{}]", category.label());
            prompt.acknowledge("Press Enter to continue")?;
            continue;
        }

        log::warn!(
            "The following tag does not exist in the dictionary: [{}]",
            tag.to_lowercase()
        );
        match ask_for_correction(prompt, category)? {
            Correction::Correct => {
                let replacement = ask_for_replacement(prompt, dictionary, category)?;
                doc.taglist.replace_tag(category, &tag, &replacement);
                repo.save_document(&doc)?;
                log::info!("The taglist was corrected");
                push_unique(&mut resolved, replacement);
            }
            Correction::UpdateDictionary => {
                let phrase = ask_for_phrase(prompt)?;
                update_dictionary(repo, dictionary, category, &tag, phrase)?;
                log::warn!("The dictionary was updated");
                push_unique(&mut resolved, tag);
            }
            Correction::Dismiss => {
                doc.taglist.remove_tag(category, &tag);
                repo.save_document(&doc)?;
                log::warn!("The tag [{tag}] was dismissed and not added to the dictionary");
            }
        }
    }
    Ok(resolved)
}

// A correction may turn a tag into one that is already in the list.
fn push_unique(tags: &mut Vec<String>, tag: String) {
    if !tags.contains(&tag) {
        tags.push(tag);
    }
}

fn ask_for_correction<P: Prompt>(prompt: &P, category: Category) -> Result<Correction> {
    let question = format!(
        "Would you like to correct it (1), update the [{}] category (2) or dismiss it (3)?",
        category.label()
    );
    loop {
        let answer = prompt.read_line(&question)?;
        match answer.trim().parse::<u8>() {
            Ok(1) => return Ok(Correction::Correct),
            Ok(2) => return Ok(Correction::UpdateDictionary),
            Ok(3) => return Ok(Correction::Dismiss),
            Ok(n) => log::error!("Invalid selection {n}. Please enter 1, 2 or 3."),
            Err(_) => log::error!("Invalid input. Please enter a valid integer."),
        }
    }
}

fn ask_for_replacement<P: Prompt>(
    prompt: &P,
    dictionary: &Dictionary,
    category: Category,
) -> Result<String> {
    loop {
        let replacement = prompt.read_line("Please enter valid replacement")?;
        let replacement = replacement.trim();
        if replacement.is_empty() {
            continue;
        }
        match dictionary.get(category, replacement) {
            Some(phrase) => {
                log::info!("Replacement value: {phrase}");
                return Ok(replacement.to_string());
            }
            None => {
                log::info!("Replacement: {replacement} does not exist in dictionary.");
            }
        }
    }
}

fn ask_for_phrase<P: Prompt>(prompt: &P) -> Result<String> {
    loop {
        let phrase = prompt.read_line("Please enter word group value related to the tag")?;
        let phrase = phrase.trim();
        if !phrase.is_empty() {
            return Ok(phrase.to_string());
        }
    }
}
