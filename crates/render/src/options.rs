use serde::Serialize;
use shared::domain::{DuetKey, Key, Octave, Pitch, ScaleType};

/// One selectable control on a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormOption {
    pub category: &'static str,
    pub value: &'static str,
    pub disabled: bool,
    pub selected: bool,
    pub label: &'static str,
}

/// A closed set of form choices that can be rendered as an option list.
pub trait Choice: Copy + PartialEq + 'static {
    const CATEGORY: &'static str;

    fn all() -> &'static [Self];
    fn value(self) -> &'static str;
    fn label(self) -> &'static str;
}

macro_rules! impl_choice {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Choice for $ty {
                const CATEGORY: &'static str = <$ty>::FIELD;

                fn all() -> &'static [Self] {
                    <$ty>::ALL
                }

                fn value(self) -> &'static str {
                    self.as_str()
                }

                fn label(self) -> &'static str {
                    <$ty>::label(self)
                }
            }
        )+
    };
}

impl_choice!(ScaleType, Pitch, Key, Octave, DuetKey);

/// Builds the option list for `category` from `(value, label)` pairs, marking
/// every entry whose value equals `selected`. A value outside `choices` leaves
/// the list with nothing selected.
pub fn build_options(
    category: &'static str,
    choices: &[(&'static str, &'static str)],
    selected: &str,
) -> Vec<FormOption> {
    choices
        .iter()
        .map(|&(value, label)| FormOption {
            category,
            value,
            disabled: false,
            selected: value == selected,
            label,
        })
        .collect()
}

/// Typed variant of [`build_options`]; exactly one entry is selected.
pub fn options_for<T: Choice>(selected: T) -> Vec<FormOption> {
    T::all()
        .iter()
        .map(|&choice| FormOption {
            category: T::CATEGORY,
            value: choice.value(),
            disabled: false,
            selected: choice == selected,
            label: choice.label(),
        })
        .collect()
}

/// `(value, label)` pairs for a choice type, in page order.
pub fn choice_table<T: Choice>() -> Vec<(&'static str, &'static str)> {
    T::all()
        .iter()
        .map(|&choice| (choice.value(), choice.label()))
        .collect()
}

#[cfg(test)]
#[path = "tests/options_tests.rs"]
mod tests;
