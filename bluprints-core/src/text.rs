fn is_tag_separator(c: char) -> bool {
    c.is_whitespace() || c == ','
}

/// Splits user input into tags.
///
/// Dots are part of a tag (e.g. dates or names),
/// only whitespace and commas separate tags.
pub fn split_text_into_tags(text: &str) -> Vec<&str> {
    text.split(is_tag_separator)
        .filter(|s| !s.is_empty())
        .collect()
}
