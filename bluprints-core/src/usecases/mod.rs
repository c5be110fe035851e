mod build_description;
mod error;
mod render_sentence;
mod update_dictionary;
mod validate_tags;

#[cfg(test)]
pub mod tests;

pub type Result<T> = std::result::Result<T, Error>;

pub use self::{
    build_description::*, error::Error, render_sentence::*, update_dictionary::*,
    validate_tags::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        dictionary::Dictionary,
        entities::*,
        repositories::{DictionaryRepo, TagDocumentRepo},
        samples::Samples,
    };
}
