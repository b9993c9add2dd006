//! Diagnostics produced while normalizing a font.
//!
//! Normalization returns diagnostics as values. Writing them anywhere is the
//! job of a [`DiagnosticSink`].

use std::{borrow::Cow, fmt, io, path::PathBuf};

use serde::{Serialize, Serializer};

use crate::WeightClass;

/// A recoverable irregularity found in the font.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// The family name was not in the rename table and was guessed by prefix replacement.
    ApproximatedFamily { old: String, new: String },
    /// The subfamily has no entry in the weight table.
    NoExpectedWeight { full_name: String, weight: u16 },
    /// The font's weight class disagrees with the weight table.
    WeightMismatch { full_name: String, expected: WeightClass, actual: u16 },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::ApproximatedFamily { old, new } => {
                write!(f, "{old} -> {new} by approximation.")
            }
            Warning::NoExpectedWeight { full_name, weight } => {
                write!(f, "There is no expected weight for {full_name} (got weight={weight})")
            }
            Warning::WeightMismatch { full_name, expected, actual } => {
                write!(f, "Expected weight={expected} for {full_name} but got weight={actual}")
            }
        }
    }
}

/// A weight class correction applied to the font.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightFix {
    pub full_name: String,
    pub from: u16,
    pub to: WeightClass,
}

impl fmt::Display for WeightFix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: change font weight from {} to {}", self.full_name, self.from, self.to)
    }
}

/// One diagnostic record.
///
/// Serializes as `{"type":"warn","msg":..}`, `{"type":"fix","msg":..}` or
/// `{"type":"done","file":..}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    Warn(Warning),
    Fix(WeightFix),
    /// The output path the export is about to write. Emitted before the export
    /// runs, so it does not prove the file exists.
    Done { file: PathBuf },
}

impl Diagnostic {
    /// The `type` tag of the serialized record.
    pub fn kind(&self) -> &'static str {
        match self {
            Diagnostic::Warn(_) => "warn",
            Diagnostic::Fix(_) => "fix",
            Diagnostic::Done { .. } => "done",
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::Warn(warning) => write!(f, "warn: {warning}"),
            Diagnostic::Fix(fix) => write!(f, "fix: {fix}"),
            Diagnostic::Done { file } => write!(f, "done: {}", file.display()),
        }
    }
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum Record<'a> {
    Warn { msg: String },
    Fix { msg: String },
    Done { file: Cow<'a, str> },
}

impl<'a> From<&'a Diagnostic> for Record<'a> {
    fn from(diagnostic: &'a Diagnostic) -> Self {
        match diagnostic {
            Diagnostic::Warn(warning) => Record::Warn { msg: warning.to_string() },
            Diagnostic::Fix(fix) => Record::Fix { msg: fix.to_string() },
            Diagnostic::Done { file } => Record::Done { file: file.to_string_lossy() },
        }
    }
}

impl Serialize for Diagnostic {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Record::from(self).serialize(serializer)
    }
}

/// Receives diagnostics in the order they were produced.
pub trait DiagnosticSink {
    fn emit(&mut self, diagnostic: &Diagnostic) -> io::Result<()>;
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn emit(&mut self, diagnostic: &Diagnostic) -> io::Result<()> {
        self.push(diagnostic.clone());
        Ok(())
    }
}
