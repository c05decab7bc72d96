/// Format a number for the filter-graph language.
///
/// Fixed six-decimal rounding with trailing zeros trimmed, so equal inputs always produce the
/// same text and integral values print without a fraction (`1280`, not `1280.0`). Negative zero
/// and non-finite values print as `0`.
pub fn fmt_num(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_owned();
    }
    let s = format!("{v:.6}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" || s.is_empty() {
        "0".to_owned()
    } else {
        s.to_owned()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/format.rs"]
mod tests;
