use serde::{Deserialize, Serialize};

use crate::error::{Error, FenceResult};
use crate::languages::Language;

/// The two kinds of fences a code block can be delimited with.
#[derive(Eq, PartialEq, Hash, Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FenceFamily {
    /// "```"
    Backtick,
    /// "~~~"
    Tilde,
}

impl FenceFamily {
    /// The order the document passes run in unless configured otherwise.
    pub const DEFAULT_PASSES: [FenceFamily; 2] = [FenceFamily::Backtick, FenceFamily::Tilde];

    /// The token opening and closing a block of this family.
    pub const fn token(&self) -> &'static str {
        match self {
            FenceFamily::Backtick => "```",
            FenceFamily::Tilde => "~~~",
        }
    }

    /// Regex source for "fence immediately followed by one supported language tag".
    pub fn opener_pattern(&self) -> String {
        let tags: Vec<&str> = Language::ALL.iter().map(Language::tag).collect();
        // neither ` nor ~ is a regex metacharacter
        format!("{}({})", self.token(), tags.join("|"))
    }
}

/// A fenced block with its fences removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FencedBlock {
    pub language: Language,
    pub code: String,
}

/// Validates one raw fenced span, both fences included, and splits it into language and
/// code body.
///
/// The closing fence and any blank lines before it are dropped. Nothing is rejected
/// based on what the code itself contains.
pub fn parse_fenced_block(raw: &str, family: FenceFamily) -> FenceResult<FencedBlock> {
    let raw = raw.trim();
    let mut lines: Vec<&str> = raw.split('\n').collect();
    let first_line = lines.first().copied().unwrap_or("");
    if first_line.is_empty() {
        return Err(Error::EmptyInput);
    }

    let fence = family.token();
    let tag = first_line
        .strip_prefix(fence)
        .ok_or(Error::NotAFence)?
        .trim();
    let language = tag.parse::<Language>()?;
    lines.remove(0);

    while let Some(last) = lines.last() {
        let last = last.trim();
        if last.is_empty() || last == fence {
            lines.pop();
        } else {
            break;
        }
    }

    Ok(FencedBlock {
        language,
        code: lines.join("\n"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backtick_block() {
        let block = parse_fenced_block("```ts\nconsole.log(1);\n```", FenceFamily::Backtick).unwrap();
        assert_eq!(block.language, Language::Ts);
        assert_eq!(block.code, "console.log(1);");
    }

    #[test]
    fn test_tilde_block_with_surrounding_blank_lines() {
        let raw = "\n  ~~~css  \n\nbody {}\n\n  \n~~~\n";
        let block = parse_fenced_block(raw, FenceFamily::Tilde).unwrap();
        assert_eq!(block.language, Language::Css);
        assert_eq!(block.code, "\nbody {}");
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(
            parse_fenced_block("  \n\t", FenceFamily::Backtick),
            Err(Error::EmptyInput)
        ));
    }

    #[test]
    fn test_wrong_family_is_not_a_fence() {
        assert!(matches!(
            parse_fenced_block("~~~ts\na\n~~~", FenceFamily::Backtick),
            Err(Error::NotAFence)
        ));
        assert!(matches!(
            parse_fenced_block("ts\na", FenceFamily::Tilde),
            Err(Error::NotAFence)
        ));
    }

    #[test]
    fn test_unknown_language() {
        match parse_fenced_block("```python\ncode\n```", FenceFamily::Backtick) {
            Err(Error::UnknownLanguage(lang)) => assert_eq!(lang, "python"),
            other => panic!("expected unknown language, got {other:?}"),
        }
        match parse_fenced_block("```\ncode\n```", FenceFamily::Backtick) {
            Err(Error::UnknownLanguage(lang)) => assert_eq!(lang, ""),
            other => panic!("expected unknown language, got {other:?}"),
        }
    }

    #[test]
    fn test_only_trailing_fences_are_stripped() {
        let raw = "```md\n```\ninner\n```\n\n```";
        let block = parse_fenced_block(raw, FenceFamily::Backtick).unwrap();
        assert_eq!(block.code, "```\ninner");
    }

    #[test]
    fn test_opener_patterns() {
        assert_eq!(
            FenceFamily::Backtick.opener_pattern(),
            "```(json|sh|html|css|md|js|ts|svelte|diff)"
        );
        assert!(FenceFamily::Tilde.opener_pattern().starts_with("~~~("));
    }
}
