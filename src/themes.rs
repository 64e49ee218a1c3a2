use std::fmt::Write;

use serde::{Deserialize, Serialize};

/// Default prefix of the CSS custom properties carrying theme colors
pub const DEFAULT_CSS_VARIABLE_PREFIX: &str = "--h-";

/// The two themes rendered together into every fragment.
///
/// Names must match themes known to the highlighting engine. They are also used
/// as the suffix of the CSS variables, eg `--h-vitesse-black`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemePair {
    pub dark: String,
    pub light: String,
}

impl Default for ThemePair {
    fn default() -> Self {
        Self {
            dark: "vitesse-black".to_string(),
            light: "rose-pine-dawn".to_string(),
        }
    }
}

impl ThemePair {
    pub fn new(dark: impl Into<String>, light: impl Into<String>) -> Self {
        Self {
            dark: dark.into(),
            light: light.into(),
        }
    }

    /// Dark first, the order variables are written in.
    pub fn names(&self) -> [&str; 2] {
        [&self.dark, &self.light]
    }

    /// Generates the CSS that makes the page honour one theme's variables.
    ///
    /// `dark_selector` and `light_selector` are prepended to the `pre` selectors, eg
    /// `html.dark` / `html.light`, so switching themes is only a matter of toggling
    /// a class on the page.
    pub fn stylesheet(&self, prefix: &str, dark_selector: &str, light_selector: &str) -> String {
        let mut css = String::new();
        for (selector, theme) in [(dark_selector, &self.dark), (light_selector, &self.light)] {
            let var = format!("{prefix}{theme}");
            // infallible on String
            let _ = write!(
                css,
                "{selector} pre {{\n  color: var({var});\n  background-color: var({var}-bg);\n}}\n\
                 {selector} pre span {{\n  color: var({var});\n  font-style: var({var}-font-style);\n  font-weight: var({var}-font-weight);\n  text-decoration: var({var}-text-decoration);\n}}\n"
            );
        }
        css
    }
}
