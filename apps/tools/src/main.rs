use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::Result;
use clap::{Parser, Subcommand};
use render::{paths::scale_asset_catalog, DuetPage, ScalePage, ScaleSelection};
use shared::domain::{DuetKey, Key, Octave, Pitch, ScaleType};
use tracing::{info, warn};

#[derive(Parser, Debug)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the variables the scale page would render for a selection.
    Scale {
        #[arg(long, default_value = "Scale")]
        scale_type: ScaleType,
        #[arg(long, default_value = "Major")]
        pitch: Pitch,
        #[arg(long, default_value = "A")]
        key: Key,
        #[arg(long, default_value = "1")]
        octave: Octave,
        #[arg(long)]
        json: bool,
    },
    /// Print the duet bundle for a key.
    Duet {
        #[arg(long, default_value = "G")]
        key: DuetKey,
        #[arg(long)]
        json: bool,
    },
    /// List every asset the pages can link to, optionally checking a static root.
    Assets {
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Scale {
            scale_type,
            pitch,
            key,
            octave,
            json,
        } => {
            let page = ScalePage::from_selection(ScaleSelection {
                scale_type,
                pitch,
                key,
                octave,
            });
            if json {
                println!("{}", serde_json::to_string_pretty(&page)?);
            } else {
                println!("key={}", page.key);
                println!("image={}", page.image_path);
                println!("audio={}  ({})", page.audio_path, page.left_label);
                println!("audio2={}  ({})", page.audio_path2, page.right_label);
            }
        }
        Command::Duet { key, json } => {
            let page = DuetPage::for_key(key);
            if json {
                println!("{}", serde_json::to_string_pretty(&page)?);
            } else {
                for path in page.asset_paths() {
                    println!("{path}");
                }
            }
        }
        Command::Assets { static_dir } => {
            let catalog = asset_catalog();
            let Some(root) = static_dir else {
                for path in &catalog {
                    println!("{path}");
                }
                return Ok(ExitCode::SUCCESS);
            };

            let missing = missing_assets(&root, &catalog);
            for path in &missing {
                println!("missing {path}");
            }
            if !missing.is_empty() {
                warn!(
                    root = %root.display(),
                    missing = missing.len(),
                    total = catalog.len(),
                    "static assets incomplete"
                );
                return Ok(ExitCode::FAILURE);
            }
            info!(root = %root.display(), total = catalog.len(), "all static assets present");
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn asset_catalog() -> BTreeSet<String> {
    let mut catalog = scale_asset_catalog();
    for &key in DuetKey::ALL {
        let page = DuetPage::for_key(key);
        catalog.extend(page.asset_paths().iter().map(|path| path.to_string()));
    }
    catalog
}

fn missing_assets<'a>(root: &Path, catalog: &'a BTreeSet<String>) -> Vec<&'a str> {
    catalog
        .iter()
        .map(String::as_str)
        .filter(|path| !root.join(path).is_file())
        .collect()
}
