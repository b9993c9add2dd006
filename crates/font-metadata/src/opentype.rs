//! [`FontHandle`] backed by an OpenType binary.

use std::{
    fs::{read, write},
    path::Path,
};

use log::{debug, warn};
use read_fonts::{FontRef, types::NameId};
use webcm_font_ops::{
    NameEntry, compile_name_table, read_name_entries, rewrite_font, set_weight_class,
    weight_class,
};
use webcm_font_woff2::compress;

use crate::{Error, FontHandle, Locale, Result, SfntName};

/// Name IDs copied onto Macintosh English records when the font has them.
const MAC_MIRRORED_NAME_IDS: &[NameId] = &[
    NameId::FAMILY_NAME,
    NameId::FULL_NAME,
    NameId::POSTSCRIPT_NAME,
    NameId::TYPOGRAPHIC_FAMILY_NAME,
];

/// An OTF/TTF font held in memory with pending metadata edits.
///
/// Edits are applied to a copy of the original tables when the font is
/// serialized; everything but `name` and `OS/2` is written back untouched.
#[derive(Debug, Clone)]
pub struct OpenTypeFont {
    data: Vec<u8>,
    names: Vec<NameEntry>,
    family_name: String,
    full_name: String,
    weight: u16,
}

impl OpenTypeFont {
    /// Read and parse the font at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data =
            read(path).map_err(|source| Error::Read { path: path.to_path_buf(), source })?;
        debug!("Read {} ({} bytes)", path.display(), data.len());
        Self::from_data(data)
    }

    /// Parse font data already in memory.
    pub fn from_data(data: Vec<u8>) -> Result<Self> {
        let (names, weight) = {
            let font = FontRef::new(&data)?;
            (read_name_entries(&font)?, weight_class(&font).unwrap_or_default())
        };

        let english = |name_id: NameId| {
            names
                .iter()
                .find(|e| {
                    e.is_windows() && e.language_id == Locale::ENGLISH_US.0 && e.name_id == name_id
                })
                .map(|e| e.value.clone())
        };
        let family_name = english(NameId::TYPOGRAPHIC_FAMILY_NAME)
            .or_else(|| english(NameId::FAMILY_NAME))
            .unwrap_or_default();
        let full_name = english(NameId::FULL_NAME).unwrap_or_default();

        Ok(Self { data, names, family_name, full_name, weight })
    }

    /// Serialize the font with all pending edits applied, uncompressed.
    pub fn to_sfnt(&self) -> Result<Vec<u8>> {
        let entries = self.edited_names();
        let weight = self.weight;

        let data = rewrite_font(&self.data, |font, builder| {
            builder.add_table(&compile_name_table(&entries))?;
            if !set_weight_class(font, builder, weight)? {
                warn!("Font has no OS/2 table; weight class {weight} was not written");
            }
            Ok(())
        })?;
        Ok(data)
    }

    fn edited_names(&self) -> Vec<NameEntry> {
        let mut entries = self.names.clone();

        if !self.family_name.is_empty() {
            // ID 1 gets the bare family even when ID 16 exists, so a style kept
            // in ID 1 (e.g. "NewComputerModern10 Book") is dropped with it.
            upsert_windows(&mut entries, Locale::ENGLISH_US, NameId::FAMILY_NAME, &self.family_name);
            if find_windows(&entries, Locale::ENGLISH_US, NameId::TYPOGRAPHIC_FAMILY_NAME).is_some()
            {
                upsert_windows(
                    &mut entries,
                    Locale::ENGLISH_US,
                    NameId::TYPOGRAPHIC_FAMILY_NAME,
                    &self.family_name,
                );
            }
        }
        if !self.full_name.is_empty() {
            upsert_windows(&mut entries, Locale::ENGLISH_US, NameId::FULL_NAME, &self.full_name);
        }

        for &name_id in MAC_MIRRORED_NAME_IDS {
            let Some(idx) = find_windows(&entries, Locale::ENGLISH_US, name_id) else {
                continue;
            };
            let value = entries[idx].value.clone();
            for entry in entries.iter_mut().filter(|e| e.is_mac_english() && e.name_id == name_id) {
                entry.value.clone_from(&value);
            }
        }

        entries
    }
}

fn find_windows(entries: &[NameEntry], locale: Locale, name_id: NameId) -> Option<usize> {
    entries
        .iter()
        .position(|e| e.is_windows() && e.language_id == locale.0 && e.name_id == name_id)
}

fn upsert_windows(entries: &mut Vec<NameEntry>, locale: Locale, name_id: NameId, value: &str) {
    match find_windows(entries, locale, name_id) {
        Some(idx) => entries[idx].value = value.to_string(),
        None => entries.push(NameEntry::windows(locale.0, name_id, value)),
    }
}

impl FontHandle for OpenTypeFont {
    fn family_name(&self) -> &str {
        &self.family_name
    }

    fn set_family_name(&mut self, name: String) {
        self.family_name = name;
    }

    fn full_name(&self) -> &str {
        &self.full_name
    }

    fn set_full_name(&mut self, name: String) {
        self.full_name = name;
    }

    fn os2_weight(&self) -> u16 {
        self.weight
    }

    fn set_os2_weight(&mut self, weight: u16) {
        self.weight = weight;
    }

    fn sfnt_names(&self) -> Vec<SfntName> {
        self.names
            .iter()
            .filter(|e| e.is_windows())
            .map(|e| SfntName::new(Locale(e.language_id), e.name_id, e.value.clone()))
            .collect()
    }

    fn append_sfnt_name(&mut self, locale: Locale, kind: NameId, value: String) {
        upsert_windows(&mut self.names, locale, kind, &value);
    }

    fn generate(&self, path: &Path) -> Result<()> {
        let woff2 = compress(&self.to_sfnt()?)?;
        write(path, &woff2).map_err(|source| Error::Write { path: path.to_path_buf(), source })?;
        debug!("Wrote {} ({} bytes)", path.display(), woff2.len());
        Ok(())
    }
}
