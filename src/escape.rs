//! The two escaping stages around the highlighter.
//!
//! Placeholders are restored after the block boundaries are known and before
//! highlighting, so example code can contain fence-like text without closing
//! the block early. Template-sensitive characters are escaped on the finished
//! fragment, after highlighting.

/// Written in source instead of a literal "```"
pub const BACKTICK_FENCE_PLACEHOLDER: &str = "&tripgrave;";
/// Written in source instead of a literal "///"
pub const TRIPLE_SLASH_PLACEHOLDER: &str = "&tripslash;";
/// Written in source instead of a literal "~~~"
pub const TILDE_FENCE_PLACEHOLDER: &str = "&triptilde;";

const PLACEHOLDERS: [(&str, &str); 3] = [
    (BACKTICK_FENCE_PLACEHOLDER, "```"),
    (TRIPLE_SLASH_PLACEHOLDER, "///"),
    (TILDE_FENCE_PLACEHOLDER, "~~~"),
];

/// Replaces the fence placeholders in a code body with the sequences they stand for.
pub fn restore_placeholders(code: &str) -> String {
    let mut out = String::with_capacity(code.len());
    let mut rest = code;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];
        match PLACEHOLDERS
            .iter()
            .find(|(placeholder, _)| rest.starts_with(placeholder))
        {
            Some((placeholder, literal)) => {
                out.push_str(literal);
                rest = &rest[placeholder.len()..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Escapes `{`, `}` and `` ` `` as named entities so the fragment can be embedded in a
/// template language that treats them as syntax.
pub fn escape_template_chars(html: &str) -> String {
    let mut out = String::with_capacity(html.len() + html.len() / 8);
    for ch in html.chars() {
        match ch {
            '{' => out.push_str("&lbrace;"),
            '}' => out.push_str("&rbrace;"),
            '`' => out.push_str("&grave;"),
            _ => out.push(ch),
        }
    }
    out
}
