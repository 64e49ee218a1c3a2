use std::fmt;
use std::sync::Arc;

use onig::Regex;

use crate::error::{Error, FenceResult};
use crate::highlight::Highlighter;
use crate::logger::Logger;
use crate::markdown_fence::{FenceFamily, parse_fenced_block};

/// One full scan of the document for a single fence family
struct Pass {
    family: FenceFamily,
    opener: Regex,
}

impl Pass {
    fn new(family: FenceFamily) -> FenceResult<Self> {
        Ok(Self {
            family,
            opener: Regex::new(&family.opener_pattern())?,
        })
    }
}

type IncludeFn = dyn Fn(&str) -> bool + Send + Sync;

/// What happened to a document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessedDocument {
    pub content: String,
    /// Blocks encountered, whether they rendered or not
    pub blocks: usize,
    /// Blocks removed from the output because they could not be rendered
    pub skipped: usize,
    /// Set when an unterminated block stopped the scan
    pub aborted_at: Option<usize>,
}

/// Replaces every fenced code block of a document with highlighted HTML.
///
/// Fence families are handled one after the other: every block of the first family
/// is rendered before the document is scanned for the second. After each block the
/// document is spliced and scanned again from the start.
///
/// This is a plain text scan, not a markdown parser. A fence-like sequence inside a
/// string or comment is a fence as far as the scan is concerned; code that needs one
/// has to be written with the placeholders from [`crate::escape`].
pub struct Preprocessor {
    highlighter: Highlighter,
    passes: Vec<Pass>,
    include: Option<Box<IncludeFn>>,
    logger: Option<Arc<dyn Logger>>,
}

impl fmt::Debug for Preprocessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Preprocessor")
            .field("themes", self.highlighter.themes())
            .field(
                "passes",
                &self.passes.iter().map(|p| p.family).collect::<Vec<_>>(),
            )
            .field("include", &self.include.is_some())
            .field("logger", &self.logger.is_some())
            .finish()
    }
}

impl Preprocessor {
    /// Backtick fences first, then tilde fences, no filter and no logger.
    pub fn new(highlighter: Highlighter) -> FenceResult<Self> {
        Ok(Self {
            highlighter,
            passes: FenceFamily::DEFAULT_PASSES
                .into_iter()
                .map(Pass::new)
                .collect::<FenceResult<_>>()?,
            include: None,
            logger: None,
        })
    }

    /// Sets the fence families to scan for, in order.
    pub fn with_passes(mut self, families: &[FenceFamily]) -> FenceResult<Self> {
        self.passes = families
            .iter()
            .copied()
            .map(Pass::new)
            .collect::<FenceResult<_>>()?;
        Ok(self)
    }

    /// Only documents for which `include` returns `true` are processed.
    pub fn with_include(mut self, include: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
        self.include = Some(Box::new(include));
        self
    }

    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn highlighter(&self) -> &Highlighter {
        &self.highlighter
    }

    /// Whether the include filter lets this document through
    pub fn includes(&self, document_id: &str) -> bool {
        self.include
            .as_ref()
            .is_none_or(|include| include(document_id))
    }

    /// Returns `None` for documents the include filter rejects, which build tools take as
    /// "leave this file alone".
    pub fn markup(&self, content: &str, document_id: &str) -> Option<String> {
        if !self.includes(document_id) {
            return None;
        }
        Some(self.process_document(content, document_id).content)
    }

    /// Never fails: blocks that can't be rendered are dropped, and an unterminated block
    /// leaves the rest of the document as it is.
    pub fn process(&self, content: &str, document_id: &str) -> String {
        self.markup(content, document_id)
            .unwrap_or_else(|| content.to_string())
    }

    /// Like [`Preprocessor::process`] but also says what happened. The include filter
    /// is not consulted.
    pub fn process_document(&self, content: &str, document_id: &str) -> ProcessedDocument {
        let slug = document_slug(document_id);
        let mut doc = ProcessedDocument {
            content: content.to_string(),
            ..Default::default()
        };

        for pass in &self.passes {
            let fence = pass.family.token();

            while let Some((start, opener_end)) = pass.opener.find(&doc.content) {
                doc.blocks += 1;

                let Some(close) = doc.content[opener_end..].find(fence) else {
                    let err = Error::UnterminatedBlock {
                        start,
                        count: doc.blocks,
                    };
                    self.log_error(&format!(
                        "[PREPROCESS] | {slug} | Codeblock | Error | {err}. Aborting."
                    ));
                    doc.aborted_at = Some(start);
                    return doc;
                };
                let end = opener_end + close + fence.len();

                let replacement = match self.render_block(&doc.content[start..end], pass.family)
                {
                    Ok(html) => html,
                    Err(err) => {
                        self.log_warn(&format!(
                            "[PREPROCESS] | {slug} | Codeblock | Warning | Unable to process at start {start} count {}: {err}. Skipping.",
                            doc.blocks
                        ));
                        doc.skipped += 1;
                        String::new()
                    }
                };
                doc.content.replace_range(start..end, &replacement);
            }
        }

        self.log_debug(&format!(
            "[PREPROCESS] | {slug} | Codeblock | Success | {{ count: {} }}",
            doc.blocks
        ));
        doc
    }

    fn render_block(&self, raw: &str, family: FenceFamily) -> FenceResult<String> {
        let block = parse_fenced_block(raw, family)?;
        self.highlighter
            .code_block_to_html(&block.code, block.language)
    }

    fn log_error(&self, message: &str) {
        if let Some(logger) = &self.logger {
            logger.error(message);
        }
    }

    fn log_warn(&self, message: &str) {
        if let Some(logger) = &self.logger {
            logger.warn(message);
        }
    }

    fn log_debug(&self, message: &str) {
        if let Some(logger) = &self.logger {
            logger.debug(message);
        }
    }
}

/// The folder a document lives in, eg `intro` for `articles/intro/+page.md`.
/// Falls back to the whole id.
pub fn document_slug(document_id: &str) -> &str {
    document_id.rsplit('/').nth(1).unwrap_or(document_id)
}
