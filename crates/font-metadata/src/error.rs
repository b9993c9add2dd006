//! Error types for font metadata normalization.

use std::{io, path::PathBuf, result};

use read_fonts::ReadError;

use crate::Locale;

/// Errors that abort normalization or export.
///
/// Naming and weight irregularities are not errors; they are reported as
/// [`Diagnostic`](crate::Diagnostic)s.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to parse font: {0}")]
    Parse(#[from] ReadError),

    #[error("no {locale} SubFamily name record in font")]
    MissingSubfamily { locale: Locale },

    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to emit diagnostic: {0}")]
    Emit(#[from] io::Error),

    #[error(transparent)]
    Font(#[from] anyhow::Error),
}

pub type Result<T> = result::Result<T, Error>;
