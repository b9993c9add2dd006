//! Fixture fonts built with write-fonts.

#![allow(dead_code)]

use std::{env::temp_dir, fs, path::PathBuf, process};

use read_fonts::{FontRef, types::{NameId, Tag}};
use webcm_font_ops::{NameEntry, compile_name_table, rewrite_font};
use write_fonts::{
    FontBuilder,
    tables::os2::{Os2, SelectionFlags},
};

pub const EN_US: u16 = 0x0409;

pub fn make_os2(weight: u16) -> Os2 {
    Os2 {
        x_avg_char_width: 500,
        us_weight_class: weight,
        us_width_class: 5,
        fs_type: 0,
        y_subscript_x_size: 650,
        y_subscript_y_size: 600,
        y_subscript_x_offset: 0,
        y_subscript_y_offset: 75,
        y_superscript_x_size: 650,
        y_superscript_y_size: 600,
        y_superscript_x_offset: 0,
        y_superscript_y_offset: 350,
        y_strikeout_size: 50,
        y_strikeout_position: 300,
        s_family_class: 0,
        panose_10: [0; 10],
        ul_unicode_range_1: 0,
        ul_unicode_range_2: 0,
        ul_unicode_range_3: 0,
        ul_unicode_range_4: 0,
        ach_vend_id: read_fonts::types::Tag::new(b"NONE"),
        fs_selection: SelectionFlags::REGULAR,
        us_first_char_index: 0x20,
        us_last_char_index: 0x7E,
        s_typo_ascender: 700,
        s_typo_descender: -200,
        s_typo_line_gap: 0,
        us_win_ascent: 900,
        us_win_descent: 200,
        ul_code_page_range_1: Some(0),
        ul_code_page_range_2: Some(0),
        sx_height: Some(500),
        s_cap_height: Some(700),
        us_default_char: Some(0),
        us_break_char: Some(0x20),
        us_max_context: Some(0),
        us_lower_optical_point_size: None,
        us_upper_optical_point_size: None,
    }
}

/// A font with Mac and Windows names for `family`/`subfamily` and an OS/2 table.
pub fn make_font(family: &str, subfamily: Option<&str>, weight: u16) -> Vec<u8> {
    let full = format!("{family} {}", subfamily.unwrap_or("Regular"));
    let ps = full.replace(' ', "-");

    let mut entries = vec![
        NameEntry::mac_english(NameId::FAMILY_NAME, family),
        NameEntry::mac_english(NameId::FULL_NAME, full.as_str()),
        NameEntry::mac_english(NameId::POSTSCRIPT_NAME, ps.as_str()),
        NameEntry::windows(EN_US, NameId::FAMILY_NAME, family),
        NameEntry::windows(EN_US, NameId::FULL_NAME, full.as_str()),
        NameEntry::windows(EN_US, NameId::POSTSCRIPT_NAME, ps.as_str()),
    ];
    if let Some(subfamily) = subfamily {
        entries.push(NameEntry::mac_english(NameId::SUBFAMILY_NAME, subfamily));
        entries.push(NameEntry::windows(EN_US, NameId::SUBFAMILY_NAME, subfamily));
    }

    let mut builder = FontBuilder::new();
    builder.add_table(&compile_name_table(&entries)).unwrap();
    builder.add_table(&make_os2(weight)).unwrap();
    builder.build()
}

/// [`make_font`]'s `name` and `OS/2` tables over a font that has outlines.
pub fn make_outline_font(family: &str, subfamily: Option<&str>, weight: u16) -> Vec<u8> {
    let names = make_font(family, subfamily, weight);
    let names = FontRef::new(&names).unwrap();
    rewrite_font(font_test_data::CMAP12_FONT1, |_, builder| {
        for tag in [Tag::new(b"name"), Tag::new(b"OS/2")] {
            builder.add_raw(tag, names.table_data(tag).unwrap().as_bytes().to_vec());
        }
        Ok(())
    })
    .unwrap()
}

pub fn temp_font(name: &str, data: &[u8]) -> PathBuf {
    let path = temp_dir().join(format!("webcm-{}-{name}.otf", process::id()));
    fs::write(&path, data).unwrap();
    path
}
