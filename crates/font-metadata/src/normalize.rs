//! Family name and weight normalization.

use std::path::{Path, PathBuf};

use log::{debug, info};
use read_fonts::types::NameId;

use crate::{
    Diagnostic, DiagnosticSink, Error, FontHandle, Locale, OpenTypeFont, Result, WeightFix,
    Warning, expected_weight, normalize_family_name,
};

/// Directory, relative to the working directory, that receives WOFF2 output.
pub const OUTPUT_DIR: &str = "woff2";

/// Extension of the exported files.
pub const WOFF2_EXTENSION: &str = "woff2";

/// What normalization did to a font.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalization {
    pub family_name: String,
    pub full_name: String,
    pub postscript_name: String,
    pub subfamily: String,
    /// Weight class after any correction.
    pub weight: u16,
    /// Where [`export`] writes the font.
    pub output: PathBuf,
    /// Diagnostics in emission order, always ending with [`Diagnostic::Done`].
    pub diagnostics: Vec<Diagnostic>,
}

/// Output path for a font with the given full name: `woff2/{full_name}.woff2`.
pub fn output_path(full_name: &str) -> PathBuf {
    PathBuf::from(format!("{OUTPUT_DIR}/{full_name}.{WOFF2_EXTENSION}"))
}

/// PostScript name for a full name: every space becomes a hyphen.
pub fn postscript_name(full_name: &str) -> String {
    full_name.replace(' ', "-")
}

/// The English (US) SubFamily name of the font.
pub fn find_subfamily<F: FontHandle + ?Sized>(font: &F) -> Result<String> {
    font.find_sfnt_name(Locale::ENGLISH_US, NameId::SUBFAMILY_NAME)
        .ok_or(Error::MissingSubfamily { locale: Locale::ENGLISH_US })
}

/// Rename the font and fix its weight class.
///
/// Sets the family name, full name (`"{family} {subfamily}"`) and English (US)
/// PostScript name, and corrects `usWeightClass` when the subfamily has a
/// known weight. Nothing is written to disk.
pub fn normalize<F: FontHandle + ?Sized>(font: &mut F) -> Result<Normalization> {
    let subfamily = find_subfamily(font)?;
    let mut diagnostics = Vec::new();

    let (family_name, warning) = normalize_family_name(font.family_name());
    if let Some(warning) = warning {
        diagnostics.push(Diagnostic::Warn(warning));
    }

    let full_name = format!("{family_name} {subfamily}");
    let postscript_name = postscript_name(&full_name);
    debug!("Renaming to '{full_name}' ({postscript_name})");

    font.set_family_name(family_name.clone());
    font.set_full_name(full_name.clone());
    font.append_sfnt_name(Locale::ENGLISH_US, NameId::POSTSCRIPT_NAME, postscript_name.clone());

    let actual = font.os2_weight();
    match expected_weight(&subfamily) {
        None => {
            diagnostics.push(Diagnostic::Warn(Warning::NoExpectedWeight {
                full_name: full_name.clone(),
                weight: actual,
            }));
        }
        Some(expected) if expected != actual => {
            diagnostics.push(Diagnostic::Warn(Warning::WeightMismatch {
                full_name: full_name.clone(),
                expected,
                actual,
            }));
            diagnostics.push(Diagnostic::Fix(WeightFix {
                full_name: full_name.clone(),
                from: actual,
                to: expected,
            }));
            font.set_os2_weight(expected.0);
        }
        Some(_) => {}
    }

    let output = output_path(&full_name);
    diagnostics.push(Diagnostic::Done { file: output.clone() });

    Ok(Normalization {
        family_name,
        full_name,
        postscript_name,
        subfamily,
        weight: font.os2_weight(),
        output,
        diagnostics,
    })
}

/// Write the normalized font to its output path.
pub fn export<F: FontHandle + ?Sized>(font: &F, normalization: &Normalization) -> Result<()> {
    info!("Exporting {}", normalization.output.display());
    font.generate(&normalization.output)
}

/// Open the font at `path`, normalize it, emit its diagnostics, then export it.
///
/// Every diagnostic, including `done`, reaches the sink before the export
/// starts.
pub fn normalize_and_export(
    path: impl AsRef<Path>,
    sink: &mut impl DiagnosticSink,
) -> Result<Normalization> {
    let mut font = OpenTypeFont::open(path)?;
    let normalization = normalize(&mut font)?;

    for diagnostic in &normalization.diagnostics {
        sink.emit(diagnostic)?;
    }

    export(&font, &normalization)?;
    Ok(normalization)
}
