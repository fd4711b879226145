use serde::Serialize;
use shared::domain::DuetKey;

use crate::options::{options_for, FormOption};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuetPage {
    pub title: &'static str,
    #[serde(skip)]
    pub key: DuetKey,
    pub image_path: String,
    pub audio_both: String,
    pub audio_part1: String,
    pub audio_part2: String,
    pub options: Vec<FormOption>,
}

impl DuetPage {
    pub const TITLE: &'static str = "Practice Duets";

    pub fn for_key(key: DuetKey) -> Self {
        let stem = key.file_stem();
        Self {
            title: Self::TITLE,
            key,
            image_path: format!("img/duet/{stem}major.png"),
            audio_both: format!("mp3/duet/{stem}majorduetboth.mp3"),
            audio_part1: format!("mp3/duet/{stem}majorduetpt1.mp3"),
            audio_part2: format!("mp3/duet/{stem}majorduetpt2.mp3"),
            options: options_for(key),
        }
    }

    pub fn asset_paths(&self) -> [&str; 4] {
        [
            self.image_path.as_str(),
            self.audio_both.as_str(),
            self.audio_part1.as_str(),
            self.audio_part2.as_str(),
        ]
    }
}

impl Default for DuetPage {
    fn default() -> Self {
        Self::for_key(DuetKey::default())
    }
}

/// Resolves the submitted duet choice; anything absent or unrecognised
/// falls back to G major.
pub fn select_duet(input: Option<&str>) -> DuetPage {
    let key = input
        .and_then(|raw| raw.parse::<DuetKey>().ok())
        .unwrap_or_default();
    DuetPage::for_key(key)
}
