use super::prelude::*;

/// Adds or replaces a phrase and persists the whole dictionary.
///
/// The in-memory dictionary is reloaded afterwards so that it
/// reflects exactly what has been stored.
pub fn update_dictionary<R>(
    repo: &R,
    dictionary: &mut Dictionary,
    category: Category,
    tag: &str,
    phrase: String,
) -> Result<()>
where
    R: DictionaryRepo,
{
    dictionary.insert(category, tag, phrase);
    repo.save_dictionary(dictionary)?;
    *dictionary = repo.load_dictionary()?;
    Ok(())
}
