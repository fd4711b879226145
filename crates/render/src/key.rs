use shared::domain::{Key, Pitch};

/// Resolves a dual-spelled key label such as `"C#/Db"` to the spelling used
/// for `pitch`: major keeps everything after the slash (`"Db"`), minor keeps
/// the first two characters (`"C#"`). Labels without a slash are returned
/// unchanged.
pub fn normalize_key(pitch: Pitch, key: &str) -> &str {
    if !key.contains('/') {
        return key;
    }
    let spelled = match pitch {
        Pitch::Major => key.get(3..),
        Pitch::Minor => key.get(..2),
    };
    spelled.filter(|s| !s.is_empty()).unwrap_or(key)
}

pub fn spell_key(pitch: Pitch, key: Key) -> &'static str {
    normalize_key(pitch, key.as_str())
}
