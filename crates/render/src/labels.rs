use serde::Serialize;
use shared::domain::{Pitch, ScaleType};

/// Captions for the two audio players on the scale page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlayerLabels {
    pub left: &'static str,
    pub right: &'static str,
}

pub fn compose_labels(pitch: Pitch, scale_type: ScaleType) -> PlayerLabels {
    let (left, right) = match (pitch, scale_type) {
        (Pitch::Major, ScaleType::Scale) => ("Listen to Major Scale", "Listen to Drone"),
        (Pitch::Major, ScaleType::Arpeggio) => ("Listen to Major Arpeggio", "Listen to Drone"),
        // Minor scales have no drone; the second player holds the melodic form.
        (Pitch::Minor, ScaleType::Scale) => (
            "Listen to Harmonic Minor Scale",
            "Listen to Melodic Minor Scale",
        ),
        (Pitch::Minor, ScaleType::Arpeggio) => ("Listen to Minor Arpeggio", "Listen to Drone"),
    };
    PlayerLabels { left, right }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn major_scale_pairs_with_drone() {
        assert_eq!(
            compose_labels(Pitch::Major, ScaleType::Scale),
            PlayerLabels {
                left: "Listen to Major Scale",
                right: "Listen to Drone",
            }
        );
    }

    #[test]
    fn minor_scale_pairs_harmonic_with_melodic() {
        let labels = compose_labels(Pitch::Minor, ScaleType::Scale);
        assert_eq!(labels.left, "Listen to Harmonic Minor Scale");
        assert_eq!(labels.right, "Listen to Melodic Minor Scale");
    }

    #[test]
    fn arpeggios_always_pair_with_drone() {
        assert_eq!(
            compose_labels(Pitch::Major, ScaleType::Arpeggio).left,
            "Listen to Major Arpeggio"
        );
        assert_eq!(
            compose_labels(Pitch::Minor, ScaleType::Arpeggio).left,
            "Listen to Minor Arpeggio"
        );
        for pitch in Pitch::ALL {
            assert_eq!(
                compose_labels(*pitch, ScaleType::Arpeggio).right,
                "Listen to Drone"
            );
        }
    }
}
