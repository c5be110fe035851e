// Persistence traits.
// Each repository owns a single file and always
// persists it as a whole. There are no transactions
// spanning multiple repositories.

use crate::{dictionary::Dictionary, entities::*};
use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The file '{}' could not be found", path.display())]
    NotFound { path: PathBuf },
    #[error("The example file '{}' is missing or malformed", path.display())]
    ConfigMissing { path: PathBuf },
    #[error("The file '{}' could not be parsed: {reason}", path.display())]
    Parse { path: PathBuf, reason: String },
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

pub trait DictionaryRepo {
    fn load_dictionary(&self) -> Result<Dictionary>;
    // Rewrites the whole dictionary.
    fn save_dictionary(&self, dictionary: &Dictionary) -> Result<()>;
}

pub trait TagDocumentRepo {
    fn load_document(&self) -> Result<TagDocument>;
    // Rewrites the whole document.
    fn save_document(&self, document: &TagDocument) -> Result<()>;
}
