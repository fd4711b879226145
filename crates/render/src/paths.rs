use std::collections::BTreeSet;

use serde::Serialize;
use shared::domain::{Key, Octave, Pitch, ScaleType};

use crate::key::spell_key;

const MELODIC_MINOR_PREFIX: &str = "mp3/scale/minor/";

/// Static files backing one scale page. All paths are relative to the static
/// root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetPaths {
    pub image: String,
    pub audio: String,
    /// Melodic minor recording for minor scales, a drone otherwise.
    pub audio_secondary: String,
}

/// File-name form of a spelled key: lower-cased, with a trailing sharp
/// written as `s` (`"C#"` becomes `"cs"`).
pub fn key_segment(key: &str) -> String {
    let mut segment = key.to_lowercase();
    if segment.contains('#') {
        segment.pop();
        segment.push('s');
    }
    segment
}

pub fn compose_paths(
    scale_type: ScaleType,
    pitch: Pitch,
    normalized_key: &str,
    octave: Octave,
) -> AssetPaths {
    let family = match scale_type {
        ScaleType::Scale => "scale",
        ScaleType::Arpeggio => "arps",
    };
    let tonality = match pitch {
        Pitch::Major => "major",
        Pitch::Minor => "minor",
    };
    let key = key_segment(normalized_key);
    let digit = octave.digit();

    let stem = format!("{family}/{tonality}/{key}{digit}");
    let audio_stem = format!("mp3/{stem}");
    let audio_secondary = if audio_stem.starts_with(MELODIC_MINOR_PREFIX) {
        format!("{audio_stem}m.mp3")
    } else {
        format!("mp3/drone/{key}{digit}.mp3")
    };

    AssetPaths {
        image: format!("img/{stem}.png"),
        audio: format!("{audio_stem}.mp3"),
        audio_secondary,
    }
}

/// Every distinct path the scale page can link to, across all selections.
pub fn scale_asset_catalog() -> BTreeSet<String> {
    let mut catalog = BTreeSet::new();
    for &scale_type in ScaleType::ALL {
        for &pitch in Pitch::ALL {
            for &key in Key::ALL {
                for &octave in Octave::ALL {
                    let paths = compose_paths(scale_type, pitch, spell_key(pitch, key), octave);
                    catalog.insert(paths.image);
                    catalog.insert(paths.audio);
                    catalog.insert(paths.audio_secondary);
                }
            }
        }
    }
    catalog
}

#[cfg(test)]
#[path = "tests/paths_tests.rs"]
mod tests;
