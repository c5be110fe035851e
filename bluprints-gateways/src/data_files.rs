use bluprints_core::{
    dictionary::Dictionary,
    repositories::{Error, Result},
    samples::Samples,
};
use std::{fs, path::PathBuf};

use crate::json_file::{parse_json, read_json, write_json};

pub const DICTIONARY_FILE_NAME: &str = "bluprints_dict.json";
pub const SAMPLE_FILE_NAME: &str = "bluprints_sample.json";

const BUNDLED_DICTIONARY: &str = include_str!("../data/bluprints_dict.json");
const BUNDLED_SAMPLE: &str = include_str!("../data/bluprints_sample.json");

/// Where the example data files are taken from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExampleSource {
    /// Compiled into the binary.
    Bundled,
    /// A directory containing both example files.
    Directory(PathBuf),
}

impl ExampleSource {
    fn read(&self, file_name: &str) -> Result<(PathBuf, Vec<u8>)> {
        match self {
            Self::Bundled => {
                let content = match file_name {
                    DICTIONARY_FILE_NAME => BUNDLED_DICTIONARY,
                    SAMPLE_FILE_NAME => BUNDLED_SAMPLE,
                    _ => {
                        return Err(Error::ConfigMissing {
                            path: PathBuf::from(file_name),
                        })
                    }
                };
                Ok((PathBuf::from(file_name), content.as_bytes().to_vec()))
            }
            Self::Directory(dir) => {
                let path = dir.join(file_name);
                let bytes = fs::read(&path).map_err(|err| {
                    log::debug!("Unable to read {}: {err}", path.display());
                    Error::ConfigMissing { path: path.clone() }
                })?;
                Ok((path, bytes))
            }
        }
    }
}

/// The active dictionary and samples of a configuration directory.
#[derive(Debug, Clone)]
pub struct DataFiles {
    dir: PathBuf,
}

impl DataFiles {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dictionary_file(&self) -> PathBuf {
        self.dir.join(DICTIONARY_FILE_NAME)
    }

    pub fn sample_file(&self) -> PathBuf {
        self.dir.join(SAMPLE_FILE_NAME)
    }

    /// Creates missing data files from the examples and loads them.
    ///
    /// Fails with [`Error::ConfigMissing`] if an example
    /// is needed but unreadable or malformed.
    pub fn ensure(&self, examples: &ExampleSource) -> Result<(Dictionary, Samples)> {
        fs::create_dir_all(&self.dir)?;

        let dictionary_file = self.dictionary_file();
        if !dictionary_file.exists() {
            let dictionary: Dictionary = load_example(examples, DICTIONARY_FILE_NAME)?.1;
            log::info!("Creating {}", dictionary_file.display());
            write_json(&dictionary_file, &dictionary)?;
        }

        let sample_file = self.sample_file();
        if !sample_file.exists() {
            let (bytes, _): (_, Samples) = load_example(examples, SAMPLE_FILE_NAME)?;
            log::info!("Creating {}", sample_file.display());
            fs::write(&sample_file, bytes)?;
        }

        let dictionary = read_json(&dictionary_file)?;
        let samples: Samples = read_json(&sample_file)?;
        for (category, template) in samples.without_placeholder() {
            log::warn!("The template '{template}' of [{category}] has no placeholder");
        }
        Ok((dictionary, samples))
    }
}

fn load_example<T>(examples: &ExampleSource, file_name: &str) -> Result<(Vec<u8>, T)>
where
    T: serde::de::DeserializeOwned,
{
    let (path, bytes) = examples.read(file_name)?;
    let value = parse_json(&path, &bytes).map_err(|err| {
        log::error!("{err}");
        Error::ConfigMissing { path }
    })?;
    Ok((bytes, value))
}
