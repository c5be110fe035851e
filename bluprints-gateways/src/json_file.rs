use bluprints_core::{
    dictionary::Dictionary,
    entities::TagDocument,
    repositories::{DictionaryRepo, Error, Result, TagDocumentRepo},
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::ser::{PrettyFormatter, Serializer};
use std::{
    fs,
    io::{self, ErrorKind},
    path::{Path, PathBuf},
};

const INDENT: &[u8] = b"    ";

/// Repositories backed by the dictionary file and a single tag document.
#[derive(Debug, Clone)]
pub struct JsonFiles {
    dictionary_file: PathBuf,
    document_file: PathBuf,
}

impl JsonFiles {
    pub fn new<D, T>(dictionary_file: D, document_file: T) -> Self
    where
        D: Into<PathBuf>,
        T: Into<PathBuf>,
    {
        Self {
            dictionary_file: dictionary_file.into(),
            document_file: document_file.into(),
        }
    }

    pub fn document_file(&self) -> &Path {
        &self.document_file
    }
}

impl DictionaryRepo for JsonFiles {
    fn load_dictionary(&self) -> Result<Dictionary> {
        read_json(&self.dictionary_file)
    }

    fn save_dictionary(&self, dictionary: &Dictionary) -> Result<()> {
        write_json(&self.dictionary_file, dictionary)
    }
}

impl TagDocumentRepo for JsonFiles {
    fn load_document(&self) -> Result<TagDocument> {
        read_json(&self.document_file)
    }

    fn save_document(&self, document: &TagDocument) -> Result<()> {
        log::debug!("Rewriting {}", self.document_file.display());
        write_json(&self.document_file, document)
    }
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let bytes = fs::read(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => Error::NotFound {
            path: path.to_path_buf(),
        },
        _ => Error::Io(err),
    })?;
    parse_json(path, &bytes)
}

pub(crate) fn parse_json<T: DeserializeOwned>(path: &Path, bytes: &[u8]) -> Result<T> {
    serde_json::from_slice(bytes).map_err(|err| Error::Parse {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })
}

/// Serializes `value` with an indentation of four spaces.
pub fn to_json_bytes<T: Serialize>(value: &T) -> io::Result<Vec<u8>> {
    let mut bytes = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut bytes, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut serializer)?;
    Ok(bytes)
}

pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let bytes = to_json_bytes(value)?;
    fs::write(path, bytes)?;
    Ok(())
}
