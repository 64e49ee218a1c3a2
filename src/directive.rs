use std::ops::RangeInclusive;

const DIRECTIVE_MARKER: &str = "///";
const DIRECTIVE_KEY: &str = "highlight:";

/// A code body with its optional `///highlight:` line taken out.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HighlightDirective {
    /// The code left once the directive line is removed, tabs expanded and trimmed.
    pub code: String,
    /// 1-indexed line ranges to flag as highlighted.
    pub lines: Vec<RangeInclusive<usize>>,
}

fn parse_range(s: &str) -> Option<RangeInclusive<usize>> {
    match s.find('-') {
        Some(dash) => {
            let from = s[..dash].parse().ok()?;
            let to = s[dash + 1..].split('-').next()?.parse().ok()?;
            Some(from..=to)
        }
        None => {
            let val = s.parse().ok()?;
            Some(val..=val)
        }
    }
}

/// Parses the part after `highlight:`, eg `2,4-5`.
///
/// Anything that isn't a digit or a hyphen is dropped from each comma-separated
/// token. Tokens that still don't make a line number or a `start-end` range are
/// skipped, as are reversed ranges. Ranges are kept as ranges, never expanded.
pub fn parse_line_spec(spec: &str) -> Vec<RangeInclusive<usize>> {
    let mut lines = Vec::new();

    for token in spec.split(',') {
        let token: String = token
            .trim()
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '-')
            .collect();
        if token.is_empty() {
            continue;
        }
        if let Some(range) = parse_range(&token).filter(|r| !r.is_empty()) {
            lines.push(range);
        }
    }

    lines
}

/// Expands tabs to two spaces, trims the body and pulls out a leading
/// `///highlight:<spec>` line if there is one.
///
/// Only the first line is looked at, so a second directive further down is
/// left in the code.
pub fn parse_highlight_directive(raw_code: &str) -> HighlightDirective {
    let normalized = raw_code.replace('\t', "  ");
    let trimmed = normalized.trim();

    if let Some((first_line, rest)) = trimmed.split_once('\n') {
        let spec = first_line
            .strip_prefix(DIRECTIVE_MARKER)
            .map(str::trim_start)
            .and_then(|s| s.strip_prefix(DIRECTIVE_KEY));
        if let Some(spec) = spec {
            return HighlightDirective {
                code: rest.to_string(),
                lines: parse_line_spec(spec),
            };
        }
    }

    HighlightDirective {
        code: trimmed.to_string(),
        lines: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_directive() {
        let result = parse_highlight_directive("let a = 1;\nlet b = 2;");
        assert_eq!(result.code, "let a = 1;\nlet b = 2;");
        assert!(result.lines.is_empty());
    }

    #[test]
    fn test_single_and_range() {
        let result = parse_highlight_directive("///highlight:2,4-5\na\nb\nc\nd\ne\nf");
        assert_eq!(result.code, "a\nb\nc\nd\ne\nf");
        assert_eq!(result.lines, vec![2..=2, 4..=5]);
    }

    #[test]
    fn test_range_only() {
        let result = parse_highlight_directive("///highlight:1-3\na\nb\nc");
        assert_eq!(result.lines, vec![1..=3]);
    }

    #[test]
    fn test_dangling_hyphen_is_skipped() {
        assert_eq!(parse_line_spec("1,3-"), vec![1..=1]);
        assert!(parse_line_spec("-4").is_empty());
        assert!(parse_line_spec("-").is_empty());
    }

    #[test]
    fn test_noise_is_stripped_from_tokens() {
        assert_eq!(
            parse_line_spec(" 2 , line 7 ,a4-b6 "),
            vec![2..=2, 7..=7, 4..=6]
        );
        assert!(parse_line_spec("x,,").is_empty());
    }

    #[test]
    fn test_reversed_range_contributes_nothing() {
        assert_eq!(parse_line_spec("5-3,1"), vec![1..=1]);
    }

    #[test]
    fn test_whitespace_after_marker() {
        let result = parse_highlight_directive("/// highlight: 2\na\nb");
        assert_eq!(result.code, "a\nb");
        assert_eq!(result.lines, vec![2..=2]);
    }

    #[test]
    fn test_marker_is_case_sensitive() {
        let result = parse_highlight_directive("///Highlight:2\na\nb");
        assert_eq!(result.code, "///Highlight:2\na\nb");
        assert!(result.lines.is_empty());
    }

    #[test]
    fn test_only_first_line_is_a_directive() {
        let result = parse_highlight_directive("///highlight:1\na\n///highlight:2\nb");
        assert_eq!(result.code, "a\n///highlight:2\nb");
        assert_eq!(result.lines, vec![1..=1]);

        let result = parse_highlight_directive("a\n///highlight:2\nb");
        assert_eq!(result.code, "a\n///highlight:2\nb");
        assert!(result.lines.is_empty());
    }

    #[test]
    fn test_directive_is_found_after_surrounding_blank_lines() {
        let result = parse_highlight_directive("\n\n///highlight:1\nfoo()\n\n");
        assert_eq!(result.code, "foo()");
        assert_eq!(result.lines, vec![1..=1]);
    }

    #[test]
    fn test_tabs_are_expanded() {
        let result = parse_highlight_directive("if (a) {\n\treturn;\n}");
        assert_eq!(result.code, "if (a) {\n  return;\n}");
    }

    #[test]
    fn test_huge_range_is_not_expanded() {
        let result = parse_highlight_directive("///highlight:1-4000000000,3\na\nb");
        assert_eq!(result.code, "a\nb");
        assert_eq!(result.lines, vec![1..=4_000_000_000, 3..=3]);
    }
}
