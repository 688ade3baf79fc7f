//! Slug and humanize helpers.
//!
//! Generated page filenames and navigation links are built from these, so
//! their output must stay stable across runs.

use std::borrow::Cow;

/// Symbols spelled out as words before slugging.
const SYMBOL_WORDS: &[(char, &str)] = &[
    ('&', "and"),
    ('|', "or"),
    ('<', "less"),
    ('>', "greater"),
    ('$', "dollar"),
    ('%', "percent"),
];

/// Turn free text into a filename-safe slug.
///
/// A few symbols are spelled out (`&` becomes `and`, `|` becomes `or`) and
/// other non-ASCII characters are transliterated (`é` becomes `e`). ASCII
/// alphanumerics, `_` and `~` are kept; runs of whitespace and `-` collapse
/// to a single `-`; everything else is dropped. Leading and trailing dashes
/// are trimmed. Case is preserved.
#[must_use]
pub fn slugify(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending_dash = false;

    for ch in input.chars() {
        for ch in expand_char(ch).chars() {
            if ch.is_whitespace() || ch == '-' {
                pending_dash = !out.is_empty();
            } else if ch.is_ascii_alphanumeric() || matches!(ch, '_' | '~') {
                if pending_dash {
                    out.push('-');
                    pending_dash = false;
                }
                out.push(ch);
            }
        }
    }
    out
}

fn expand_char(ch: char) -> Cow<'static, str> {
    if let Some((_, word)) = SYMBOL_WORDS.iter().find(|(symbol, _)| *symbol == ch) {
        return Cow::Borrowed(*word);
    }
    if ch.is_ascii() {
        return Cow::Owned(ch.to_string());
    }
    Cow::Borrowed(deunicode::deunicode_char(ch).unwrap_or(""))
}

/// Filename of a static page's navigation link: `page-<slug>.html`,
/// lower-cased.
#[must_use]
pub fn page_link(title: &str) -> String {
    format!("page-{}.html", slugify(title)).to_lowercase()
}

/// Humanize a file stem into a group name: `button-groups` and
/// `buttonGroups` both become `Button groups`.
#[must_use]
pub fn humanize(input: &str) -> String {
    let underscored = underscore(input.trim());
    let stripped = underscored.strip_suffix("_id").unwrap_or(&underscored);
    let spaced = stripped.replace('_', " ");
    capitalize(spaced.trim())
}

/// `camelCase`, `kebab-case` and spaced words to `snake_case`. A leading
/// upper-case letter yields a leading underscore.
fn underscore(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len() + 4);

    if chars.first().is_some_and(|c| c.is_uppercase()) {
        out.push('_');
    }

    let mut in_separator = false;
    for (i, &ch) in chars.iter().enumerate() {
        if ch == '-' || ch.is_whitespace() {
            if !in_separator {
                out.push('_');
                in_separator = true;
            }
            continue;
        }
        in_separator = false;

        if ch.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|c| c.is_lowercase());
            let lower_to_upper = prev.is_lowercase() || prev.is_ascii_digit();
            let acronym_end = prev.is_uppercase() && next_is_lower;
            if lower_to_upper || acronym_end {
                out.push('_');
            }
        }
        out.extend(ch.to_lowercase());
    }
    out
}

/// Upper-case the first character and lower-case the rest.
fn capitalize(input: &str) -> String {
    let mut chars = input.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect()
    })
}

/// Upper-case only the first character, leaving the rest untouched.
#[must_use]
pub fn upper_first(input: &str) -> String {
    let mut chars = input.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
