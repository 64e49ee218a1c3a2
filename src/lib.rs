mod config;
mod directive;
mod error;
mod highlight;
mod languages;
mod logger;
mod markdown_fence;
mod preprocess;
mod registry;
mod renderers;
mod themes;

pub mod escape;
pub mod tree;

#[cfg(test)]
mod test_utils;

pub use config::Config;
pub use directive::{HighlightDirective, parse_highlight_directive, parse_line_spec};
pub use error::Error;
pub use highlight::{DEFAULT_WRAPPER_CLASS, HighlightEngine, HighlightRequest, Highlighter};
pub use languages::Language;
pub use logger::{LogLogger, Logger};
pub use markdown_fence::{FenceFamily, FencedBlock, parse_fenced_block};
pub use preprocess::{Preprocessor, ProcessedDocument, document_slug};
pub use registry::GialloEngine;
pub use renderers::{RenderOptions, decorate, html::to_html};
pub use themes::{DEFAULT_CSS_VARIABLE_PREFIX, ThemePair};
