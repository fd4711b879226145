use super::*;

#[test]
fn major_scale_uses_drone() {
    assert_eq!(
        compose_paths(ScaleType::Scale, Pitch::Major, "A", Octave::One),
        AssetPaths {
            image: "img/scale/major/a1.png".to_string(),
            audio: "mp3/scale/major/a1.mp3".to_string(),
            audio_secondary: "mp3/drone/a1.mp3".to_string(),
        }
    );
}

#[test]
fn minor_scale_sharp_key_gets_melodic_companion() {
    let paths = compose_paths(ScaleType::Scale, Pitch::Minor, "C#", Octave::Two);
    assert_eq!(paths.image, "img/scale/minor/cs2.png");
    assert_eq!(paths.audio, "mp3/scale/minor/cs2.mp3");
    assert_eq!(paths.audio_secondary, "mp3/scale/minor/cs2m.mp3");
    assert_eq!(
        paths.audio_secondary,
        paths.audio.replace(".mp3", "m.mp3")
    );
}

#[test]
fn arpeggios_use_arps_folder_and_drone() {
    let paths = compose_paths(ScaleType::Arpeggio, Pitch::Minor, "F#", Octave::One);
    assert_eq!(paths.image, "img/arps/minor/fs1.png");
    assert_eq!(paths.audio, "mp3/arps/minor/fs1.mp3");
    assert_eq!(paths.audio_secondary, "mp3/drone/fs1.mp3");
}

#[test]
fn flat_keys_keep_their_letter() {
    let paths = compose_paths(ScaleType::Scale, Pitch::Major, "Db", Octave::Two);
    assert_eq!(paths.audio, "mp3/scale/major/db2.mp3");
    assert_eq!(paths.audio_secondary, "mp3/drone/db2.mp3");
}

#[test]
fn sharp_substitution_only_touches_key() {
    assert_eq!(key_segment("G#"), "gs");
    assert_eq!(key_segment("Bb"), "bb");
    assert_eq!(key_segment(""), "");
}

#[test]
fn composing_twice_is_identical() {
    let first = compose_paths(ScaleType::Scale, Pitch::Minor, "G#", Octave::One);
    let second = compose_paths(ScaleType::Scale, Pitch::Minor, "G#", Octave::One);
    assert_eq!(first, second);
}

#[test]
fn catalog_covers_every_selection() {
    let catalog = scale_asset_catalog();
    assert!(catalog.contains("img/scale/major/ab2.png"));
    assert!(catalog.contains("mp3/scale/minor/gs1m.mp3"));
    assert!(catalog.contains("mp3/drone/gb1.mp3"));
    assert!(catalog.iter().all(|path| !path.contains('#')));
    // 2 scale types x 2 pitches x 12 keys x 2 octaves, one image and one audio each.
    let images = catalog.iter().filter(|path| path.ends_with(".png")).count();
    assert_eq!(images, 96);
}
