//! Markdown conversion and output sinks for scraped course pages

// Module declarations
mod clipboard;
pub mod markdown_converter;
mod markdown_saver;

// Re-export public API from clipboard module
pub use clipboard::{Clipboard, SystemClipboard};

// Re-export public API from markdown_converter module
pub use markdown_converter::{
    ConversionOptions, MarkdownConverter, convert_html_to_markdown, convert_html_to_markdown_sync,
};

// Re-export public API from markdown_saver module
pub use markdown_saver::save_readme;
