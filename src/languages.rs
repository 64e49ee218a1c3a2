use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The closed set of languages a fenced block can be tagged with.
///
/// The set is fixed when the highlighter is created; anything else in a fence
/// is rejected rather than highlighted as plain text.
#[derive(Eq, PartialEq, Hash, Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Json,
    Sh,
    Html,
    Css,
    Md,
    Js,
    Ts,
    Svelte,
    Diff,
}

impl Language {
    /// Every supported language, in the order they appear in fence opener patterns.
    pub const ALL: [Language; 9] = [
        Language::Json,
        Language::Sh,
        Language::Html,
        Language::Css,
        Language::Md,
        Language::Js,
        Language::Ts,
        Language::Svelte,
        Language::Diff,
    ];

    /// The tag written after the fence, eg `ts` in "```ts"
    pub const fn tag(&self) -> &'static str {
        match self {
            Language::Json => "json",
            Language::Sh => "sh",
            Language::Html => "html",
            Language::Css => "css",
            Language::Md => "md",
            Language::Js => "js",
            Language::Ts => "ts",
            Language::Svelte => "svelte",
            Language::Diff => "diff",
        }
    }

    /// The grammar name giallo knows this language by.
    pub const fn grammar_name(&self) -> &'static str {
        match self {
            Language::Sh => "shellscript",
            Language::Md => "markdown",
            Language::Js => "javascript",
            Language::Ts => "typescript",
            other => other.tag(),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.tag() == s)
            .ok_or_else(|| Error::UnknownLanguage(s.to_string()))
    }
}
