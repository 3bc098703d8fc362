//! gongwen: Chinese official-document drafting toolkit
//!
//! This library parses generated official-document text (公文) into a
//! hierarchical structure, renders it with the conventional typography, and
//! exports it as a .docx file. It also assembles generation prompts for the
//! supported document types and calls a chat-completions service.

pub mod catalog;
pub mod config;
pub mod document;
pub mod export;
pub mod generate;
pub mod profile;
pub mod prompt;
pub mod reference;
pub mod render;
pub mod viewer;
pub mod widgets;

/// Preview output options
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PreviewFormat {
    /// Styled text for the terminal
    #[default]
    Ansi,
    /// Standalone HTML page
    Html,
    /// Interactive full-screen viewer
    Tui,
}

/// Color depth options for ANSI output
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
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
pub use catalog::{DOCUMENT_TYPES, DocumentCategory, DocumentType, find_document_type};
pub use config::AppConfig;
pub use document::{DocumentStructure, StyledParagraph, parse_document};
pub use export::{ExportMode, ExportedDocument, export_document};
pub use generate::{GenerationError, GenerationRequest, TextGenerator, generate_document};
pub use profile::{UNIT_PROFILES, UnitProfile, find_profile};
pub use prompt::{DocumentContext, StylePreference, format_prompt};
pub use reference::{ReferenceText, extract_reference};
pub use render::render_document;
