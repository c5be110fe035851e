use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumCount, EnumIter, EnumString, IntoEnumIterator};

/// A metadata class a tag can belong to.
///
/// The variants are declared in alphabetical order and
/// this order is the canonical enumeration order.
#[rustfmt::skip]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
    Serialize, Deserialize, AsRefStr, Display, EnumCount, EnumIter, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Category {
    Action,
    Body,
    Comment,
    Costume,
    Date,
    Ethnic,
    File,
    Group,
    Location,
    Nation,
    Performer,
    Plot,
    Position,
    Qualifier,
    Resolution,
    Studio,
}

/// Category specific behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    /// Tags are never looked up in the dictionary
    /// and never trigger the correction workflow.
    pub free_form: bool,
    /// Tags are rendered from their raw text.
    pub raw_text: bool,
    /// The category owns a section in the dictionary.
    pub dictionary: bool,
    /// An empty tag list must be completed interactively.
    pub mandatory: bool,
}

impl Category {
    #[rustfmt::skip]
    pub const fn rules(self) -> Rules {
        use Category as C;
        let (free_form, raw_text, dictionary, mandatory) = match self {
            C::Action     => (false, false, true,  true ),
            C::Body       => (false, false, true,  false),
            C::Comment    => (true,  false, false, false),
            C::Costume    => (false, false, true,  false),
            C::Date       => (true,  false, false, true ),
            C::Ethnic     => (false, false, true,  false),
            C::File       => (false, false, true,  true ),
            C::Group      => (true,  false, false, false),
            C::Location   => (false, false, true,  false),
            C::Nation     => (false, false, true,  false),
            C::Performer  => (true,  true,  false, true ),
            C::Plot       => (false, false, true,  false),
            C::Position   => (false, false, true,  false),
            C::Qualifier  => (false, false, true,  false),
            C::Resolution => (false, false, true,  true ),
            C::Studio     => (true,  true,  false, true ),
        };
        Rules {
            free_form,
            raw_text,
            dictionary,
            mandatory,
        }
    }

    pub const fn is_free_form(self) -> bool {
        self.rules().free_form
    }

    pub const fn has_dictionary(self) -> bool {
        self.rules().dictionary
    }

    pub const fn is_mandatory(self) -> bool {
        self.rules().mandatory
    }

    /// Categories that own a dictionary section, in enumeration order.
    pub fn with_dictionary() -> impl Iterator<Item = Self> {
        Self::iter().filter(|c| c.has_dictionary())
    }

    /// Categories that contribute to the merged tag list.
    pub fn with_tags() -> impl Iterator<Item = Self> {
        Self::iter().filter(|c| *c != Self::Comment)
    }

    /// The placeholder token of this category within a template.
    pub fn placeholder(self) -> String {
        format!("{{{}}}", self.as_ref())
    }

    /// Upper case name used in console messages.
    pub fn label(self) -> String {
        self.as_ref().to_uppercase()
    }
}
