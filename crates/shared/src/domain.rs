use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Declares a closed set of form choices. Each variant carries the value
/// posted by the page and the text shown next to its control; the first
/// variant listed is the default.
macro_rules! form_enum {
    (
        $(#[$meta:meta])*
        $name:ident, field = $field:literal {
            $($variant:ident => $value:literal, $label:literal;)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl $name {
            /// Name of the form field carrying this choice.
            pub const FIELD: &'static str = $field;
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $value,)+
                }
            }

            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::ALL[0]
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                let value = raw.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|choice| choice.as_str() == value || choice.label() == value)
                    .ok_or_else(|| ValidationError::UnknownValue {
                        field: $field,
                        value: raw.to_string(),
                    })
            }
        }
    };
}

form_enum! {
    /// Whether the exercise is a scale or an arpeggio.
    ScaleType, field = "Scale" {
        Scale => "Scale", "Scales";
        Arpeggio => "Arpeggio", "Arpeggios";
    }
}

form_enum! {
    Pitch, field = "Pitch" {
        Major => "Major", "Major";
        Minor => "Minor", "Minor";
    }
}

form_enum! {
    /// The twelve selectable keys in page order. Three carry both enharmonic
    /// spellings; the pitch decides which one is used.
    Key, field = "Key" {
        A => "A", "A";
        BFlat => "Bb", "Bb";
        B => "B", "B";
        C => "C", "C";
        CSharpDFlat => "C#/Db", "C#/Db";
        D => "D", "D";
        EFlat => "Eb", "Eb";
        E => "E", "E";
        F => "F", "F";
        FSharpGFlat => "F#/Gb", "F#/Gb";
        G => "G", "G";
        GSharpAFlat => "G#/Ab", "G#/Ab";
    }
}

form_enum! {
    Octave, field = "Octave" {
        One => "1", "1 Octave";
        Two => "2", "2 Octave";
    }
}

form_enum! {
    /// Duets are only recorded in three major keys.
    DuetKey, field = "Duet" {
        G => "G", "G Major";
        D => "D", "D Major";
        A => "A", "A Major";
    }
}

impl Key {
    pub fn is_enharmonic(self) -> bool {
        self.as_str().contains('/')
    }
}

impl Octave {
    pub fn digit(self) -> char {
        match self {
            Octave::One => '1',
            Octave::Two => '2',
        }
    }
}

impl DuetKey {
    /// Lower-case letter used in duet asset file names.
    pub fn file_stem(self) -> &'static str {
        match self {
            DuetKey::G => "g",
            DuetKey::D => "d",
            DuetKey::A => "a",
        }
    }
}
