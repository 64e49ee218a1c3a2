use giallo::{FontStyle, HighlightOptions, Registry, Style, ThemeVariant};

use crate::error::{Error, FenceResult};
use crate::highlight::{HighlightEngine, HighlightRequest};
use crate::renderers::LINE_CLASS;
use crate::tree::{Element, Node};

/// Highlighting engine backed by giallo's grammars and themes.
///
/// Loading the registry is the expensive part so this should be created once and
/// shared between every document.
#[derive(Debug)]
pub struct GialloEngine {
    registry: Registry,
}

impl GialloEngine {
    /// Loads the builtin registry containing all grammars and themes shipped with giallo
    pub fn builtin() -> FenceResult<Self> {
        let mut registry = Registry::builtin()?;
        registry.link_grammars();
        Ok(Self { registry })
    }

    /// Uses an existing registry. `link_grammars` must already have been called on it.
    pub fn from_registry(registry: Registry) -> Self {
        Self { registry }
    }
}

/// Writes the CSS variables of both themes for one kind of value
struct CssVars<'a> {
    prefix: &'a str,
    dark: &'a str,
    light: &'a str,
}

impl CssVars<'_> {
    fn colors(&self, out: &mut Vec<String>, suffix: &str, dark: String, light: String) {
        out.push(format!("{}{}{suffix}:{dark}", self.prefix, self.dark));
        out.push(format!("{}{}{suffix}:{light}", self.prefix, self.light));
    }

    fn font_style(&self, out: &mut Vec<String>, theme: &str, font_style: FontStyle) {
        if font_style.is_empty() {
            return;
        }
        let prefix = self.prefix;
        if font_style.contains(FontStyle::ITALIC) {
            out.push(format!("{prefix}{theme}-font-style:italic"));
        }
        if font_style.contains(FontStyle::BOLD) {
            out.push(format!("{prefix}{theme}-font-weight:bold"));
        }
        if font_style.contains(FontStyle::UNDERLINE) {
            out.push(format!("{prefix}{theme}-text-decoration:underline"));
        }
    }

    fn token(&self, dark: &Style, light: &Style) -> String {
        let mut out = Vec::with_capacity(4);
        self.colors(
            &mut out,
            "",
            dark.foreground.as_hex(),
            light.foreground.as_hex(),
        );
        self.font_style(&mut out, self.dark, dark.font_style);
        self.font_style(&mut out, self.light, light.font_style);
        out.join(";")
    }
}

impl HighlightEngine for GialloEngine {
    fn highlight(&self, request: &HighlightRequest<'_>) -> FenceResult<Element> {
        let options = HighlightOptions::new(
            request.language.grammar_name(),
            ThemeVariant::Dual {
                light: request.themes.light.as_str(),
                dark: request.themes.dark.as_str(),
            },
        );
        let highlighted = self.registry.highlight(request.code, &options)?;
        let ThemeVariant::Dual { light, dark } = highlighted.theme else {
            return Err(Error::HighlightEngine(
                "expected both a light and a dark theme".to_string(),
            ));
        };

        let vars = CssVars {
            prefix: request.css_variable_prefix,
            dark: &request.themes.dark,
            light: &request.themes.light,
        };

        let mut pre_style = Vec::with_capacity(4);
        vars.colors(
            &mut pre_style,
            "",
            dark.default_style.foreground.as_hex(),
            light.default_style.foreground.as_hex(),
        );
        vars.colors(
            &mut pre_style,
            "-bg",
            dark.default_style.background.as_hex(),
            light.default_style.background.as_hex(),
        );

        let mut code = Element::new("code");
        for (idx, line_tokens) in highlighted.tokens.iter().enumerate() {
            if idx > 0 {
                code.children.push(Node::Text("\n".to_string()));
            }
            let mut line = Element::new("span").with_property("class", LINE_CLASS);
            for tok in line_tokens {
                let style = match &tok.style {
                    ThemeVariant::Dual { light, dark } => vars.token(dark, light),
                    ThemeVariant::Single(style) => vars.token(style, style),
                };
                line.children.push(Node::Element(
                    Element::new("span")
                        .with_property("style", style)
                        .with_child(Node::Text(tok.text.clone())),
                ));
            }
            code.children.push(Node::Element(line));
        }

        Ok(Element::new("pre")
            .with_property("class", "giallo")
            .with_property("style", pre_style.join(";"))
            .with_property("tabindex", "0")
            .with_child(Node::Element(code)))
    }
}
