//! Generic font table manipulation utilities.

use anyhow::{Context, Result};
use read_fonts::{FontRef, TableProvider, types::NameId};
use write_fonts::{
    FontBuilder,
    from_obj::ToOwnedTable,
    tables::{
        name::{Name, NameRecord},
        os2::Os2,
    },
};

/// Macintosh platform.
pub const PLATFORM_MAC: u16 = 1;
/// Windows platform.
pub const PLATFORM_WINDOWS: u16 = 3;

/// Windows Unicode BMP encoding.
pub const ENCODING_WINDOWS_UNICODE_BMP: u16 = 1;
/// Macintosh Roman encoding.
pub const ENCODING_MAC_ROMAN: u16 = 0;

/// Windows language ID for English (United States).
pub const LANGUAGE_WINDOWS_ENGLISH_US: u16 = 0x0409;
/// Macintosh language ID for English.
pub const LANGUAGE_MAC_ENGLISH: u16 = 0;

/// Rewrite font data by applying a transformation function.
///
/// Copies all tables from the source font, then calls `f` to replace or add
/// tables. Tables the closure does not touch are carried over byte-for-byte.
pub fn rewrite_font(
    data: &[u8],
    f: impl FnOnce(&FontRef, &mut FontBuilder) -> Result<()>,
) -> Result<Vec<u8>> {
    let font = FontRef::new(data).context("Failed to parse font")?;
    let mut builder = FontBuilder::new();

    for record in font.table_directory.table_records() {
        let tag = record.tag();
        if let Some(table_data) = font.table_data(tag) {
            builder.add_raw(tag, table_data);
        }
    }

    f(&font, &mut builder)?;
    Ok(builder.build())
}

/// A decoded `name` table record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameEntry {
    pub platform_id: u16,
    pub encoding_id: u16,
    pub language_id: u16,
    pub name_id: NameId,
    pub value: String,
}

impl NameEntry {
    /// A Windows Unicode BMP record.
    pub fn windows(language_id: u16, name_id: NameId, value: impl Into<String>) -> Self {
        Self {
            platform_id: PLATFORM_WINDOWS,
            encoding_id: ENCODING_WINDOWS_UNICODE_BMP,
            language_id,
            name_id,
            value: value.into(),
        }
    }

    /// A Macintosh Roman English record.
    pub fn mac_english(name_id: NameId, value: impl Into<String>) -> Self {
        Self {
            platform_id: PLATFORM_MAC,
            encoding_id: ENCODING_MAC_ROMAN,
            language_id: LANGUAGE_MAC_ENGLISH,
            name_id,
            value: value.into(),
        }
    }

    pub fn is_windows(&self) -> bool {
        self.platform_id == PLATFORM_WINDOWS
    }

    pub fn is_mac_english(&self) -> bool {
        self.platform_id == PLATFORM_MAC
            && self.encoding_id == ENCODING_MAC_ROMAN
            && self.language_id == LANGUAGE_MAC_ENGLISH
    }

    fn key(&self) -> (u16, u16, u16, NameId) {
        (self.platform_id, self.encoding_id, self.language_id, self.name_id)
    }
}

/// Decode every `name` record of a font.
///
/// Records whose string cannot be decoded are skipped. A font without a
/// `name` table yields an empty list.
pub fn read_name_entries(font: &FontRef) -> Result<Vec<NameEntry>> {
    let Ok(name) = font.name() else {
        return Ok(Vec::new());
    };

    let entries = name
        .name_record()
        .iter()
        .filter_map(|record| {
            let value = record.string(name.string_data()).ok()?.chars().collect::<String>();
            Some(NameEntry {
                platform_id: record.platform_id(),
                encoding_id: record.encoding_id(),
                language_id: record.language_id(),
                name_id: record.name_id(),
                value,
            })
        })
        .collect();

    Ok(entries)
}

/// Build a `name` table from decoded entries.
///
/// Records are sorted by (platformID, encodingID, languageID, nameID). When two
/// entries share a key, the later one wins.
pub fn compile_name_table(entries: &[NameEntry]) -> Name {
    let mut sorted: Vec<&NameEntry> = Vec::with_capacity(entries.len());
    for entry in entries {
        match sorted.iter().position(|e| e.key() == entry.key()) {
            Some(idx) => sorted[idx] = entry,
            None => sorted.push(entry),
        }
    }
    sorted.sort_by_key(|e| e.key());

    let records = sorted
        .into_iter()
        .map(|e| {
            NameRecord::new(
                e.platform_id,
                e.encoding_id,
                e.language_id,
                e.name_id,
                e.value.clone().into(),
            )
        })
        .collect();

    Name::new(records)
}

/// Read `OS/2.usWeightClass`, if the font has an OS/2 table.
pub fn weight_class(font: &FontRef) -> Option<u16> {
    font.os2().ok().map(|os2| os2.us_weight_class())
}

/// Replace `OS/2.usWeightClass` in the builder.
///
/// Returns `false` without touching the builder when the font has no OS/2 table.
pub fn set_weight_class(font: &FontRef, builder: &mut FontBuilder, weight: u16) -> Result<bool> {
    let Ok(os2) = font.os2() else {
        return Ok(false);
    };

    let mut new_os2: Os2 = os2.to_owned_table();
    new_os2.us_weight_class = weight;
    builder.add_table(&new_os2)?;
    Ok(true)
}
