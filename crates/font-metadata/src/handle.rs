//! The font capabilities normalization relies on.

use std::{fmt, path::Path};

use read_fonts::types::NameId;
use webcm_font_ops::LANGUAGE_WINDOWS_ENGLISH_US;

use crate::Result;

/// Locale of a name record, as a Windows language ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Locale(pub u16);

impl Locale {
    pub const ENGLISH_US: Self = Self(LANGUAGE_WINDOWS_ENGLISH_US);
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Locale::ENGLISH_US => f.write_str("English (US)"),
            Locale(id) => write!(f, "0x{id:04X}"),
        }
    }
}

/// A localized name record: (locale, kind, value).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SfntName {
    pub locale: Locale,
    pub kind: NameId,
    pub value: String,
}

impl SfntName {
    pub fn new(locale: Locale, kind: NameId, value: impl Into<String>) -> Self {
        Self { locale, kind, value: value.into() }
    }
}

/// An open, editable font.
///
/// Normalization only talks to fonts through this trait, so it can run against
/// [`OpenTypeFont`](crate::OpenTypeFont) or an in-memory fake.
pub trait FontHandle {
    fn family_name(&self) -> &str;
    fn set_family_name(&mut self, name: String);

    fn full_name(&self) -> &str;
    fn set_full_name(&mut self, name: String);

    /// `OS/2.usWeightClass`.
    fn os2_weight(&self) -> u16;
    fn set_os2_weight(&mut self, weight: u16);

    /// Localized name records, in font order.
    fn sfnt_names(&self) -> Vec<SfntName>;

    /// Add a name record. An existing record with the same locale and kind is
    /// overwritten instead of duplicated.
    fn append_sfnt_name(&mut self, locale: Locale, kind: NameId, value: String);

    /// Write the font, compressed as WOFF2, to `path`.
    fn generate(&self, path: &Path) -> Result<()>;

    /// Value of the first record matching `locale` and `kind`.
    fn find_sfnt_name(&self, locale: Locale, kind: NameId) -> Option<String> {
        self.sfnt_names()
            .into_iter()
            .find(|name| name.locale == locale && name.kind == kind)
            .map(|name| name.value)
    }
}
