//! CLI definition and dispatch.

use std::{io::stdout, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use webcm_font_metadata::normalize_and_export;

use crate::report::JsonLines;

#[derive(Debug, Parser)]
#[command(name = "webcm-woff2", version)]
#[command(about = "Rename a New Computer Modern font to WebCM and export it as WOFF2")]
#[command(long_about = "Rename a New Computer Modern font to WebCM and export it to \
    woff2/<full name>.woff2. The woff2/ directory must already exist. Diagnostics are \
    printed to stdout as one JSON object per line.")]
pub struct Cli {
    /// Input OTF/TTF file
    pub input: PathBuf,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let mut sink = JsonLines::new(stdout().lock());
        let normalization = normalize_and_export(&self.input, &mut sink)
            .with_context(|| format!("Failed to convert {}", self.input.display()))?;

        info!("{} -> {}", self.input.display(), normalization.output.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_positional_argument() {
        let cli = Cli::try_parse_from(["webcm-woff2", "otf/NewCM10-Bold.otf"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("otf/NewCM10-Bold.otf"));
    }

    #[test]
    fn test_input_is_required() {
        assert!(Cli::try_parse_from(["webcm-woff2"]).is_err());
    }

    #[test]
    fn test_rejects_extra_arguments() {
        assert!(Cli::try_parse_from(["webcm-woff2", "a.otf", "b.otf"]).is_err());
        assert!(Cli::try_parse_from(["webcm-woff2", "--output", "x", "a.otf"]).is_err());
    }
}
