use itertools::Itertools;

/// Splits a space separated tag string into
/// a deduplicated and lexicographically sorted list.
pub fn split_tags(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(ToString::to_string)
        .sorted()
        .dedup()
        .collect()
}

pub fn join_tags<S: AsRef<str>>(tags: &[S]) -> String {
    tags.iter().map(AsRef::as_ref).join(" ")
}

/// Where a tag sits within the list it is rendered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    FirstOrMiddle,
    SecondLast,
    Last,
}

impl Position {
    /// Classifies `index` within a list of `len` tags.
    ///
    /// A single element list is `Last`.
    pub fn of(index: usize, len: usize) -> Self {
        debug_assert!(index < len);
        if index + 1 >= len {
            Self::Last
        } else if index + 2 == len {
            Self::SecondLast
        } else {
            Self::FirstOrMiddle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_dedup_and_sort() {
        assert_eq!(
            split_tags("  outdoor beach  beach Sunset "),
            vec!["Sunset", "beach", "outdoor"]
        );
        assert!(split_tags("   ").is_empty());
    }

    #[test]
    fn join_with_single_space() {
        assert_eq!(join_tags(&["a", "b", "c"]), "a b c");
        assert_eq!(join_tags::<&str>(&[]), "");
    }

    #[test]
    fn classify_positions() {
        assert_eq!(Position::of(0, 1), Position::Last);
        assert_eq!(Position::of(0, 2), Position::SecondLast);
        assert_eq!(Position::of(1, 2), Position::Last);
        let positions: Vec<_> = (0..4).map(|i| Position::of(i, 4)).collect();
        assert_eq!(
            positions,
            vec![
                Position::FirstOrMiddle,
                Position::FirstOrMiddle,
                Position::SecondLast,
                Position::Last
            ]
        );
    }
}
