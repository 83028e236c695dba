//! cvflex: Terminal résumé builder
//!
//! This library owns the canonical résumé document schema, the lenient
//! normalizer applied at every untrusted boundary (startup load, file
//! import), per-key JSON persistence, and the themed terminal renderers.

pub mod ansi;
pub mod document;
pub mod export;
pub mod store;
pub mod theme;

/// Export format options
#[derive(clap::ValueEnum, Clone, Debug, PartialEq)]
pub enum ExportFormat {
    Json,
    Markdown,
    Text,
    Ansi,
}

/// Color depth options for ANSI output
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum ColorDepth {
    /// Auto-detect terminal color capabilities
    Auto,
    /// Monochrome (no colors)
    #[value(name = "1")]
    Monochrome,
    /// 16 colors
    #[value(name = "4")]
    Standard,
    /// 256 colors
    #[value(name = "8")]
    Extended,
    /// 24-bit true color
    #[value(name = "24")]
    TrueColor,
}

// Re-export commonly used types
pub use document::{Resume, Section, normalize};
pub use store::Store;
pub use theme::{FontId, Palette, ThemeId};
