//! WOFF2 compression for sfnt (TrueType and CFF-flavored OpenType) fonts.
//!
//! # Example
//!
//! ```no_run
//! use webcm_font_woff2::compress;
//!
//! let otf_data = std::fs::read("NewCM10-Bold.otf").unwrap();
//! let woff2_data = compress(&otf_data).unwrap();
//! std::fs::write("woff2/WebCM Serif 10 Bold.woff2", woff2_data).unwrap();
//! ```

use anyhow::{Context, Result, anyhow};
use log::debug;
use read_fonts::FontRef;
use ttf2woff2::{BrotliQuality, encode};

/// Magic number at the start of every WOFF2 file.
pub const WOFF2_SIGNATURE: &[u8; 4] = b"wOF2";

/// Compresses sfnt font data into WOFF2 using the default Brotli quality.
///
/// The input is parsed first so that garbage data is rejected with a parse
/// error instead of an opaque encoder failure.
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    FontRef::new(data).context("Failed to parse font")?;

    let woff2 = encode(data, BrotliQuality::default())
        .map_err(|e| anyhow!("WOFF2 encoding failed: {e:?}"))?;

    debug!("Compressed {} bytes into {} bytes of WOFF2", data.len(), woff2.len());
    Ok(woff2)
}

/// Returns true if `data` starts with the WOFF2 signature.
pub fn is_woff2(data: &[u8]) -> bool {
    data.starts_with(WOFF2_SIGNATURE)
}
