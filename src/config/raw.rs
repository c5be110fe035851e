use serde::Deserialize;
use std::path::PathBuf;

const DEFAULT_CONFIG_FILE: &str = include_str!("bluprints.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub data: Option<Data>,
    pub render: Option<Render>,
    pub output: Option<Output>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Data {
    pub dir: Option<PathBuf>,
    pub example_dir: Option<PathBuf>,
}

impl Default for Data {
    fn default() -> Self {
        Config::default().data.expect("Data configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Render {
    pub seed: Option<u64>,
}

impl Default for Render {
    fn default() -> Self {
        Config::default().render.expect("Render configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Output {
    pub pretty: bool,
}

impl Default for Output {
    fn default() -> Self {
        Config::default().output.expect("Output configuration")
    }
}
