use super::*;

/// Mirror of ffmpeg's `av_get_token`: unescape one level, stop at an unescaped terminator,
/// drop unescaped leading/trailing whitespace. Returns the token and the unconsumed rest.
fn get_token<'a>(s: &'a str, term: &[char]) -> (String, &'a str) {
    let mut out = String::new();
    let mut end = 0usize;
    let mut chars = s.char_indices().skip_while(|(_, c)| TOKEN_WHITESPACE.contains(c));
    let mut rest = "";
    while let Some((i, c)) = chars.next() {
        if term.contains(&c) {
            rest = &s[i..];
            break;
        }
        match c {
            '\\' => {
                let (_, next) = chars.next().expect("dangling escape");
                out.push(next);
                end = out.len();
            }
            '\'' => {
                for (_, q) in chars.by_ref() {
                    if q == '\'' {
                        break;
                    }
                    out.push(q);
                }
                end = out.len();
            }
            other => out.push(other),
        }
    }
    while out.len() > end && out.ends_with(TOKEN_WHITESPACE) {
        out.pop();
    }
    (out, rest)
}

/// Mirror of drawtext text expansion for text without `%{..}` functions.
fn expand(s: &str) -> String {
    let mut out = String::new();
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push(chars.next().expect("dangling escape")),
            '%' => panic!("unescaped % would start a text expansion function"),
            other => out.push(other),
        }
    }
    out
}

fn encoder_view(escaped: &str) -> String {
    let (graph_level, rest) = get_token(escaped, &['[', ']', ',', ';']);
    assert!(rest.is_empty(), "graph parser stopped early at {rest:?}");
    let (option_level, rest) = get_token(&graph_level, &[':']);
    assert!(rest.is_empty(), "option parser stopped early at {rest:?}");
    expand(&option_level)
}

#[test]
fn round_trips_every_special_character_once() {
    let original = "a\\b%c'd:e[f]g,h;i";
    let escaped = escape_drawtext_text(original);
    assert_eq!(encoder_view(&escaped), original);
}

#[test]
fn round_trips_representative_inputs() {
    for original in [
        "Hello, world!",
        "50% off: today only",
        "It's [really] great; isn't it?",
        "  padded both sides  ",
        "C:\\path\\to\\file",
        "multi\nline\ttext",
        "unicode \u{00e9}\u{4e2d}\u{1f600}",
        "{step_key} stays literal",
        "=equals=",
        "",
    ] {
        let escaped = escape_drawtext_text(original);
        assert_eq!(encoder_view(&escaped), original, "escaped form {escaped:?}");
    }
}

#[test]
fn carriage_returns_and_control_chars_are_normalized() {
    let escaped = escape_drawtext_text("a\r\nb\rc\u{0007}d");
    assert_eq!(encoder_view(&escaped), "a\nb\ncd");
}

#[test]
fn escaped_text_has_no_bare_graph_separators() {
    let escaped = escape_drawtext_text("x;y,z[0]:w'");
    let mut prev_backslashes = 0usize;
    for c in escaped.chars() {
        if [';', ',', '[', ']', '\''].contains(&c) {
            assert!(prev_backslashes % 2 == 1, "bare {c:?} in {escaped:?}");
        }
        if c == '\\' {
            prev_backslashes += 1;
        } else {
            prev_backslashes = 0;
        }
    }
}

#[test]
fn typewriter_replaces_punctuation_instead_of_escaping() {
    let escaped = sanitize_typewriter_text("It's 100%: \"done\" \\o/");
    let seen = encoder_view(&escaped);
    assert_eq!(seen, "It\u{2019}s 100\u{FF05}\u{2236} \u{201D}done\u{201D} o/");
    assert!(!seen.contains('\''));
    assert!(!seen.contains(':'));
    assert!(!seen.contains('%'));
}

#[test]
fn filter_values_skip_the_expansion_level() {
    let escaped = escape_filter_value("/fonts/My Font: Bold.ttf");
    let (graph_level, _) = get_token(&escaped, &['[', ']', ',', ';']);
    let (option_level, _) = get_token(&graph_level, &[':']);
    assert_eq!(option_level, "/fonts/My Font: Bold.ttf");
}
