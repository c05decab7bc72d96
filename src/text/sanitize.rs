//! Escaping for text embedded in a `-filter_complex` graph.
//!
//! A drawtext `text` value is unescaped three times by ffmpeg, outermost first:
//!
//! 1. the filtergraph parser splits filters on unescaped `[ ] , ;` and unescapes the arguments,
//! 2. the option parser splits `key=value` pairs on unescaped `:` and unescapes each value,
//! 3. drawtext text expansion treats `%` as a function prefix and `\` as an escape.
//!
//! Both token parsers also drop unescaped leading/trailing whitespace and treat `'` as a quote.
//! We escape with backslashes only (never quotes), innermost level first, so the encoder
//! recovers the original text exactly.

/// Characters drawtext text expansion interprets.
pub const EXPANSION_SPECIALS: &[char] = &['\\', '%'];
/// Characters the filter option parser interprets inside a value.
pub const OPTION_SPECIALS: &[char] = &['\\', '\'', ':'];
/// Characters the filtergraph parser interprets inside filter arguments.
pub const GRAPH_SPECIALS: &[char] = &['\\', '\'', '[', ']', ',', ';'];

const TOKEN_WHITESPACE: &[char] = &[' ', '\n', '\t', '\r'];

/// Punctuation replaced (not escaped) in typewriter mode.
pub const TYPEWRITER_REPLACEMENTS: &[(char, &str)] = &[
    ('\'', "\u{2019}"),
    ('"', "\u{201D}"),
    (':', "\u{2236}"),
    ('%', "\u{FF05}"),
    ('\\', ""),
];

/// Escape literal text for use as a drawtext `text=` value.
pub fn escape_drawtext_text(text: &str) -> String {
    let normalized = normalize_text(text);
    escape_filter_value(&escape_level(&normalized, EXPANSION_SPECIALS))
}

/// Typewriter-mode sanitizing: quote-like punctuation is swapped for typographic
/// lookalikes before the regular escape pass.
pub fn sanitize_typewriter_text(text: &str) -> String {
    let mut replaced = String::with_capacity(text.len());
    for c in text.chars() {
        match TYPEWRITER_REPLACEMENTS.iter().find(|(from, _)| *from == c) {
            Some((_, to)) => replaced.push_str(to),
            None => replaced.push(c),
        }
    }
    escape_drawtext_text(&replaced)
}

/// Escape a plain option value (font name, font file path) for the option and graph levels.
pub fn escape_filter_value(value: &str) -> String {
    escape_level(&escape_level(value, OPTION_SPECIALS), GRAPH_SPECIALS)
}

/// Backslash-escape every character of `specials` plus whitespace at either end of `s`.
pub fn escape_level(s: &str, specials: &[char]) -> String {
    let chars: Vec<char> = s.chars().collect();
    let first_inner = chars
        .iter()
        .position(|c| !TOKEN_WHITESPACE.contains(c))
        .unwrap_or(chars.len());
    let last_inner = chars
        .iter()
        .rposition(|c| !TOKEN_WHITESPACE.contains(c))
        .map_or(0, |i| i + 1);

    let mut out = String::with_capacity(s.len() + 8);
    for (i, &c) in chars.iter().enumerate() {
        let edge_ws = (i < first_inner || i >= last_inner) && TOKEN_WHITESPACE.contains(&c);
        if specials.contains(&c) || edge_ws {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// `\r\n` and lone `\r` become `\n`; other control characters except tab are dropped.
fn normalize_text(text: &str) -> String {
    let unified = text.replace("\r\n", "\n").replace('\r', "\n");
    unified
        .chars()
        .filter(|&c| c == '\n' || c == '\t' || !c.is_control())
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/text/sanitize.rs"]
mod tests;
