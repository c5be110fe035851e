use lazy_static::lazy_static;
use regex::Regex;

use crate::text;

lazy_static! {
    static ref RESOLUTION_REGEX: Regex = Regex::new(r"^\d{1,4}p$").unwrap();
}

/// Resolution tags like `1080p` are valid by themselves.
pub fn is_resolution(tag: &str) -> bool {
    RESOLUTION_REGEX.is_match(tag)
}

pub fn split_text_into_tags(text: &str) -> Vec<String> {
    text::split_text_into_tags(text)
        .into_iter()
        .map(ToString::to_string)
        .collect()
}
