use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::FenceResult;
use crate::highlight::{DEFAULT_WRAPPER_CLASS, HighlightEngine, Highlighter};
use crate::markdown_fence::FenceFamily;
use crate::preprocess::Preprocessor;
use crate::registry::GialloEngine;
use crate::themes::{DEFAULT_CSS_VARIABLE_PREFIX, ThemePair};

/// Everything that can be set from a config file. Missing fields keep their default.
///
/// ```json
/// {
///   "themes": { "dark": "vitesse-black", "light": "rose-pine-dawn" },
///   "css_variable_prefix": "--h-",
///   "wrapper_class": "code-wrapper",
///   "passes": ["backtick", "tilde"]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub themes: ThemePair,
    pub css_variable_prefix: String,
    pub wrapper_class: String,
    /// Fence families to scan for, in order
    pub passes: Vec<FenceFamily>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            themes: ThemePair::default(),
            css_variable_prefix: DEFAULT_CSS_VARIABLE_PREFIX.to_string(),
            wrapper_class: DEFAULT_WRAPPER_CLASS.to_string(),
            passes: FenceFamily::DEFAULT_PASSES.to_vec(),
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> FenceResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> FenceResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn highlighter(&self, engine: Arc<dyn HighlightEngine>) -> Highlighter {
        Highlighter::new(engine)
            .with_themes(self.themes.clone())
            .with_css_variable_prefix(&self.css_variable_prefix)
            .with_wrapper_class(&self.wrapper_class)
    }

    /// Builds a preprocessor around an engine that was already created.
    pub fn preprocessor(&self, engine: Arc<dyn HighlightEngine>) -> FenceResult<Preprocessor> {
        Preprocessor::new(self.highlighter(engine))?.with_passes(&self.passes)
    }

    /// Loads giallo's builtin grammars and themes once and builds a preprocessor on top.
    pub fn build_preprocessor(&self) -> FenceResult<Preprocessor> {
        let engine = Arc::new(GialloEngine::builtin()?);
        self.preprocessor(engine)
    }
}
