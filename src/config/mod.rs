use anyhow::{anyhow, Context as _, Result};
use bluprints_gateways::data_files::ExampleSource;
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "bluprints.toml";
const DATA_DIR_NAME: &str = "bluprints";

const ENV_NAME_DATA_DIR: &str = "BLUPRINTS_DATA_DIR";
const ENV_NAME_SEED: &str = "BLUPRINTS_SEED";

pub struct Config {
    pub data: Data,
    pub render: Render,
    pub output: Output,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::debug!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)
                .with_context(|| format!("Invalid configuration file {}", file_path.display()))?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::debug!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(dir) = env::var(ENV_NAME_DATA_DIR) {
            cfg.data.dir = dir.into();
        }
        if let Ok(seed) = env::var(ENV_NAME_SEED) {
            let seed = seed
                .parse()
                .with_context(|| format!("Invalid {ENV_NAME_SEED} '{seed}'"))?;
            cfg.render.seed = Some(seed);
        }
        Ok(cfg)
    }
}

pub struct Data {
    /// Directory of the active dictionary and sample files.
    pub dir: PathBuf,
    pub examples: ExampleSource,
}

pub struct Render {
    /// Seed for reproducible output.
    pub seed: Option<u64>,
}

pub struct Output {
    pub pretty: bool,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            data,
            render,
            output,
        } = from;

        let raw::Data { dir, example_dir } = data.unwrap_or_default();
        let dir = match dir {
            Some(dir) => dir,
            None => default_data_dir()?,
        };
        let examples = match example_dir {
            Some(dir) => {
                log::debug!("Use example files from {}", dir.display());
                ExampleSource::Directory(dir)
            }
            None => ExampleSource::Bundled,
        };
        let data = Data { dir, examples };

        let raw::Render { seed } = render.unwrap_or_default();
        let render = Render { seed };

        let raw::Output { pretty } = output.unwrap_or_default();
        let output = Output { pretty };

        Ok(Self {
            data,
            render,
            output,
        })
    }
}

fn default_data_dir() -> Result<PathBuf> {
    let config_home = env::var_os("XDG_CONFIG_HOME")
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| env::var_os("HOME").map(|home| Path::new(&home).join(".config")))
        .ok_or_else(|| anyhow!("Unable to determine the configuration directory"))?;
    Ok(config_home.join(DATA_DIR_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_default_config() {
        let file: Option<&Path> = None;
        let cfg = Config::try_load_from_file_or_default(file).unwrap();
        assert!(cfg.output.pretty);
    }

    #[test]
    fn load_config_from_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("bluprints.toml");
        fs::write(
            &file,
            r#"
            [data]
            dir = "/srv/bluprints"
            example-dir = "/usr/share/bluprints"
            [output]
            pretty = false
            "#,
        )
        .unwrap();
        let cfg: Config = Config::try_load_from_file_or_default(Some(&file)).unwrap();
        assert_eq!(
            cfg.data.examples,
            ExampleSource::Directory("/usr/share/bluprints".into())
        );
        assert!(!cfg.output.pretty);
    }

    #[test]
    fn reject_malformed_config_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("bluprints.toml");
        fs::write(&file, "[output]\npretty = \"maybe\"\n").unwrap();
        let err = Config::try_load_from_file_or_default(Some(&file))
            .err()
            .unwrap();
        assert!(format!("{err:#}").contains("bluprints.toml"));
    }
}
