use std::str::FromStr;

use serde::{Deserialize, Serialize};
use shared::{
    domain::{Key, Octave, Pitch, ScaleType},
    error::ValidationError,
};

use crate::{
    key::spell_key,
    labels::compose_labels,
    options::{options_for, FormOption},
    paths::compose_paths,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomePage {
    pub title: &'static str,
}

impl Default for HomePage {
    fn default() -> Self {
        Self {
            title: "Violin Practice",
        }
    }
}

/// Raw fields posted by the scale page form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScaleForm {
    #[serde(rename = "Scale", alias = "Scalearp", default)]
    pub scale: Option<String>,
    #[serde(rename = "Pitch", default)]
    pub pitch: Option<String>,
    #[serde(rename = "Key", default)]
    pub key: Option<String>,
    #[serde(rename = "Octave", default)]
    pub octave: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DuetForm {
    #[serde(rename = "Duet", default)]
    pub duet: Option<String>,
}

/// Complete form state of the scale page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleSelection {
    pub scale_type: ScaleType,
    pub pitch: Pitch,
    pub key: Key,
    pub octave: Octave,
}

impl ScaleSelection {
    /// Missing or blank fields take their default; anything else must be a
    /// recognised value.
    pub fn from_form(form: &ScaleForm) -> Result<Self, ValidationError> {
        Ok(Self {
            scale_type: field(form.scale.as_deref())?,
            pitch: field(form.pitch.as_deref())?,
            key: field(form.key.as_deref())?,
            octave: field(form.octave.as_deref())?,
        })
    }
}

fn field<T>(raw: Option<&str>) -> Result<T, ValidationError>
where
    T: FromStr<Err = ValidationError> + Default,
{
    match raw.map(str::trim).filter(|value| !value.is_empty()) {
        Some(value) => value.parse(),
        None => Ok(T::default()),
    }
}

/// Template variables for the scale page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScalePage {
    pub title: &'static str,
    #[serde(skip)]
    pub selection: ScaleSelection,
    /// Key as spelled for the selected pitch, e.g. `Db` for C#/Db major.
    pub key: &'static str,
    pub left_label: &'static str,
    pub right_label: &'static str,
    pub image_path: String,
    pub audio_path: String,
    pub audio_path2: String,
    pub scale_options: Vec<FormOption>,
    pub pitch_options: Vec<FormOption>,
    pub key_options: Vec<FormOption>,
    pub octave_options: Vec<FormOption>,
}

impl ScalePage {
    pub const TITLE: &'static str = "Practice Scales and Arpeggios";

    pub fn from_selection(selection: ScaleSelection) -> Self {
        let ScaleSelection {
            scale_type,
            pitch,
            key,
            octave,
        } = selection;

        let spelled = spell_key(pitch, key);
        let labels = compose_labels(pitch, scale_type);
        let assets = compose_paths(scale_type, pitch, spelled, octave);

        Self {
            title: Self::TITLE,
            selection,
            key: spelled,
            left_label: labels.left,
            right_label: labels.right,
            image_path: assets.image,
            audio_path: assets.audio,
            audio_path2: assets.audio_secondary,
            scale_options: options_for(scale_type),
            pitch_options: options_for(pitch),
            key_options: options_for(key),
            octave_options: options_for(octave),
        }
    }

    pub fn from_form(form: &ScaleForm) -> Result<Self, ValidationError> {
        ScaleSelection::from_form(form).map(Self::from_selection)
    }
}

impl Default for ScalePage {
    fn default() -> Self {
        Self::from_selection(ScaleSelection::default())
    }
}

#[cfg(test)]
#[path = "tests/page_tests.rs"]
mod tests;
