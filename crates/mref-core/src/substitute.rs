//! Variable substitution: letters become indexed-array accesses.

/// Characters copied to the output unchanged.
pub const PASSTHROUGH: [char; 9] = ['+', '-', '*', '/', '(', ')', ',', '{', '}'];

/// Returns `true` if `c` is copied through substitution unchanged.
pub fn is_passthrough(c: char) -> bool {
    PASSTHROUGH.contains(&c)
}

/// Zero-based position of `c` relative to `'a'`.
///
/// Anything other than a lowercase letter gives an index outside `0..26`,
/// possibly negative (`'A'` -> -32).
pub fn array_index(c: char) -> i64 {
    i64::from(u32::from(c)) - i64::from(u32::from('a'))
}

/// Rewrite a single character: pass-through characters are returned as-is,
/// anything else becomes `<array>[<index>]`.
pub fn convert_char(c: char, array: &str) -> String {
    let mut out = String::new();
    push_converted(&mut out, c, array);
    out
}

fn push_converted(out: &mut String, c: char, array: &str) {
    if is_passthrough(c) {
        out.push(c);
    } else {
        out.push_str(&format!("{}[{}]", array, array_index(c)));
    }
}

/// Rewrite every character of an already normalized formula.
pub fn substitute(normalized: &str, array: &str) -> String {
    let mut out = String::with_capacity(normalized.len() * (array.len() + 4));
    for c in normalized.chars() {
        push_converted(&mut out, c, array);
    }
    out
}
