//! Fixed rename and weight tables for the WebCM family.

use std::fmt;

use crate::Warning;

/// Vendor prefix every renamed family starts with.
pub const VENDOR_PREFIX: &str = "WebCM";

/// Prefixes replaced by [`VENDOR_PREFIX`] when a family is not in [`FAMILY_RENAMES`].
///
/// Applied in order.
pub const OLD_VENDOR_PREFIXES: &[&str] = &["NewComputerModern", "NewCM", "NewComputerRoman"];

/// Known source family names and their WebCM replacements.
pub const FAMILY_RENAMES: &[(&str, &str)] = &[
    // Serif
    ("NewComputerModern08", "WebCM Serif 08"),
    ("NewComputerModern10", "WebCM Serif 10"),
    // Sans
    ("NewComputerModernSans08", "WebCM Sans 08"),
    ("NewComputerModernSans10", "WebCM Sans 10"),
    // Mono
    ("NewComputerModernMono10", "WebCM Mono 10"),
    // Devanagari
    ("NewCM08Devanagari", "WebCM Devanagari 08"),
    ("NewComputerModern 10 Devanagari", "WebCM Devanagari 10"),
    // Uncial
    ("NewCMUncial08", "WebCM Uncial 08"),
    ("NewComputerModernUncial10", "WebCM Uncial 08"),
    ("NewCMUncial10", "WebCM Uncial 10"),
    // Math
    ("NewComputerModernSansMath", "WebCM Math Sans"),
    ("NewComputerModernMath", "WebCM Math Serif"),
];

/// OS/2 weight class (`usWeightClass`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeightClass(pub u16);

impl WeightClass {
    pub const REGULAR: Self = Self(400);
    pub const BOOK: Self = Self(500);
    pub const BOLD: Self = Self(700);
}

impl fmt::Display for WeightClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<u16> for WeightClass {
    fn eq(&self, other: &u16) -> bool {
        self.0 == *other
    }
}

/// Subfamily labels with a known weight class.
pub const EXPECTED_WEIGHTS: &[(&str, WeightClass)] = &[
    // Bold
    ("Bold", WeightClass::BOLD),
    ("BoldOblique", WeightClass::BOLD),
    ("BoldItalic", WeightClass::BOLD),
    // Book
    ("Book", WeightClass::BOOK),
    ("BookOblique", WeightClass::BOOK),
    ("BookItalic", WeightClass::BOOK),
    // Regular
    ("Regular", WeightClass::REGULAR),
    ("Oblique", WeightClass::REGULAR),
    ("Italic", WeightClass::REGULAR),
];

/// Look up a family name in [`FAMILY_RENAMES`].
pub fn renamed_family(old: &str) -> Option<&'static str> {
    FAMILY_RENAMES.iter().find(|(from, _)| *from == old).map(|(_, to)| *to)
}

/// Replace every old vendor prefix in `old` with [`VENDOR_PREFIX`].
pub fn approximate_family_name(old: &str) -> String {
    OLD_VENDOR_PREFIXES
        .iter()
        .fold(old.to_string(), |name, prefix| name.replace(prefix, VENDOR_PREFIX))
}

/// Map a source family name to its WebCM name.
///
/// Names missing from [`FAMILY_RENAMES`] fall back to
/// [`approximate_family_name`] and come with a warning describing the guess.
pub fn normalize_family_name(old: &str) -> (String, Option<Warning>) {
    if let Some(new) = renamed_family(old) {
        return (new.to_string(), None);
    }

    let new = approximate_family_name(old);
    let warning = Warning::ApproximatedFamily { old: old.to_string(), new: new.clone() };
    (new, Some(warning))
}

/// Look up a subfamily label in [`EXPECTED_WEIGHTS`].
pub fn expected_weight(subfamily: &str) -> Option<WeightClass> {
    EXPECTED_WEIGHTS.iter().find(|(label, _)| *label == subfamily).map(|(_, weight)| *weight)
}
