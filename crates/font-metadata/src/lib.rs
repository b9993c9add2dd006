//! Font metadata normalization for Web Computer Modern.
//!
//! Renames New Computer Modern fonts to their WebCM names, derives the full
//! and PostScript names from the family and subfamily, corrects the OS/2
//! weight class against the subfamily, and exports the result as WOFF2.
//!
//! ## Example
//!
//! ```no_run
//! use webcm_font_metadata::{Diagnostic, normalize_and_export};
//!
//! let mut diagnostics: Vec<Diagnostic> = Vec::new();
//! let result = normalize_and_export("otf/NewCM10-Bold.otf", &mut diagnostics).unwrap();
//! assert_eq!(result.output.to_str(), Some("woff2/WebCM Serif 10 Bold.woff2"));
//! ```

mod diagnostic;
mod error;
mod handle;
mod normalize;
mod opentype;
mod tables;

pub use diagnostic::{Diagnostic, DiagnosticSink, Warning, WeightFix};
pub use error::{Error, Result};
pub use handle::{FontHandle, Locale, SfntName};
pub use normalize::{
    Normalization, OUTPUT_DIR, WOFF2_EXTENSION, export, find_subfamily, normalize,
    normalize_and_export, output_path, postscript_name,
};
pub use opentype::OpenTypeFont;
pub use tables::{
    EXPECTED_WEIGHTS, FAMILY_RENAMES, OLD_VENDOR_PREFIXES, VENDOR_PREFIX, WeightClass,
    approximate_family_name, expected_weight, normalize_family_name, renamed_family,
};
