//! Derivation of everything the practice pages show from the user's form
//! choices: which options are checked, the spelled key, the player labels and
//! the image and audio paths. Every function here is pure.

pub mod duet;
pub mod key;
pub mod labels;
pub mod options;
pub mod page;
pub mod paths;

pub use duet::{select_duet, DuetPage};
pub use key::normalize_key;
pub use labels::{compose_labels, PlayerLabels};
pub use options::{build_options, options_for, Choice, FormOption};
pub use page::{DuetForm, HomePage, ScaleForm, ScalePage, ScaleSelection};
pub use paths::{compose_paths, AssetPaths};
