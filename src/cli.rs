use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};

use bluprints_core::{gateways::prompt::Prompt, usecases};
use bluprints_gateways::{console::Console, data_files::DataFiles, json_file::JsonFiles};

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Tag document to describe
    filepath: PathBuf,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

pub fn run() -> Result<()> {
    let args = Args::parse();

    if let Ok(path) = dotenvy::dotenv() {
        log::debug!("Loaded environment from {}", path.display());
    }
    let cfg = Config::try_load_from_file_or_default(args.config.as_ref())?;

    let console = Console;
    let document_file = provide_path(&console, "tag_file", args.filepath)?;

    let data_files = DataFiles::new(&cfg.data.dir);
    let (mut dictionary, samples) = data_files
        .ensure(&cfg.data.examples)
        .with_context(|| format!("Unable to prepare {}", cfg.data.dir.display()))?;
    log::debug!(
        "Loaded {} dictionary categories from {}",
        dictionary.len(),
        data_files.dictionary_file().display()
    );

    let repo = JsonFiles::new(data_files.dictionary_file(), &document_file);
    let mut rng = match cfg.render.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let description =
        usecases::build_description(&repo, &console, &mut rng, &mut dictionary, &samples)
            .with_context(|| format!("Unable to describe {}", document_file.display()))?;

    let json = if cfg.output.pretty {
        serde_json::to_string_pretty(&description)?
    } else {
        serde_json::to_string(&description)?
    };
    println!("{json}");
    Ok(())
}

/// Asks for another path until the file exists.
fn provide_path<P: Prompt>(prompt: &P, kind: &str, mut path: PathBuf) -> Result<PathBuf> {
    while !is_file(&path) {
        let answer = prompt.read_line(&format!("{kind} not found please provide path:"))?;
        path = PathBuf::from(answer.trim());
    }
    Ok(path)
}

fn is_file(path: &Path) -> bool {
    !path.as_os_str().is_empty() && path.is_file()
}
