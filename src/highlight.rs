use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use crate::directive::parse_highlight_directive;
use crate::error::{Error, FenceResult};
use crate::escape::{escape_template_chars, restore_placeholders};
use crate::languages::Language;
use crate::renderers::html::{HtmlEscaped, to_html};
use crate::renderers::{RenderOptions, decorate};
use crate::themes::{DEFAULT_CSS_VARIABLE_PREFIX, ThemePair};
use crate::tree::Element;

/// Class of the element wrapping every rendered block
pub const DEFAULT_WRAPPER_CLASS: &str = "code-wrapper";

/// What a highlighting engine is asked to do for one block
#[derive(Debug, Clone, Copy)]
pub struct HighlightRequest<'a> {
    pub code: &'a str,
    pub language: Language,
    pub themes: &'a ThemePair,
    /// Prefix of the CSS custom properties, eg `--h-`
    pub css_variable_prefix: &'a str,
}

/// Something that can turn code into a themed tree.
///
/// The returned tree is expected to be a block element (`pre`) carrying `class` and
/// `tabindex`, containing one element with class `line` per source line. Colors for
/// both themes are given as CSS variables so no theme is baked in.
///
/// Implementations are shared between documents and must not rely on mutable state.
pub trait HighlightEngine: Send + Sync {
    fn highlight(&self, request: &HighlightRequest<'_>) -> FenceResult<Element>;
}

/// Wraps a highlighting engine and produces the final fragment for a single block.
#[derive(Clone)]
pub struct Highlighter {
    engine: Arc<dyn HighlightEngine>,
    themes: ThemePair,
    css_variable_prefix: String,
    wrapper_class: String,
}

impl Highlighter {
    pub fn new(engine: Arc<dyn HighlightEngine>) -> Self {
        Self {
            engine,
            themes: ThemePair::default(),
            css_variable_prefix: DEFAULT_CSS_VARIABLE_PREFIX.to_string(),
            wrapper_class: DEFAULT_WRAPPER_CLASS.to_string(),
        }
    }

    pub fn with_themes(mut self, themes: ThemePair) -> Self {
        self.themes = themes;
        self
    }

    pub fn with_css_variable_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.css_variable_prefix = prefix.into();
        self
    }

    pub fn with_wrapper_class(mut self, class: impl Into<String>) -> Self {
        self.wrapper_class = class.into();
        self
    }

    pub fn themes(&self) -> &ThemePair {
        &self.themes
    }

    /// Asks the engine for a themed tree and decorates its lines.
    ///
    /// A panicking engine is reported like any other engine failure.
    pub fn highlight_tree(
        &self,
        code: &str,
        language: Language,
        options: &RenderOptions,
    ) -> FenceResult<Element> {
        let request = HighlightRequest {
            code,
            language,
            themes: &self.themes,
            css_variable_prefix: &self.css_variable_prefix,
        };
        let mut tree = panic::catch_unwind(AssertUnwindSafe(|| self.engine.highlight(&request)))
            .map_err(|payload| {
                let message = payload
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "Unable to highlight".to_string());
                Error::HighlightEngine(message)
            })??;
        decorate(&mut tree, options);
        Ok(tree)
    }

    /// Renders the body of a block whose boundaries are already known.
    ///
    /// Runs the highlight directive parser, restores placeholders, highlights and
    /// escapes the result for templates. The fragment is wrapped in a single `div`.
    pub fn code_block_to_html(&self, raw_code: &str, language: Language) -> FenceResult<String> {
        let directive = parse_highlight_directive(raw_code);
        let code = restore_placeholders(&directive.code);
        let options = RenderOptions {
            highlight_lines: directive.lines,
        };
        let tree = self.highlight_tree(code.trim(), language, &options)?;
        let html = escape_template_chars(&to_html(&tree));

        Ok(format!(
            r#"<div class="{}">{html}</div>"#,
            HtmlEscaped(&self.wrapper_class)
        ))
    }
}
