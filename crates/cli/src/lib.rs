//! WebCM WOFF2 CLI library.

pub mod cli;
pub mod report;

pub use report::JsonLines;
