//! Whitespace removal and implicit multiplication.

/// Characters that separate operands. No `*` is inserted next to them.
pub const OPERATORS: [char; 6] = ['+', '-', '*', '/', '(', ')'];

/// Returns `true` if `c` is an operator or parenthesis.
pub fn is_operator(c: char) -> bool {
    OPERATORS.contains(&c)
}

/// Remove every whitespace character (spaces, tabs, newlines, ...),
/// preserving the order of the rest.
pub fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Strip whitespace and insert `*` between every pair of adjacent operand
/// characters.
///
/// A letter next to an operator or parenthesis is left alone, so
/// `"ab-c"` becomes `"a*b-c"` and `"(ab)"` becomes `"(a*b)"`.
pub fn normalize(text: &str) -> String {
    let stripped = strip_whitespace(text);
    let mut result = String::with_capacity(stripped.len() * 2);
    let mut prev: Option<char> = None;
    for c in stripped.chars() {
        if let Some(p) = prev {
            if !is_operator(p) && !is_operator(c) {
                result.push('*');
            }
        }
        result.push(c);
        prev = Some(c);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn strip_removes_all_whitespace_kinds() {
        assert_eq!(strip_whitespace(" a\tb\nc \r\n"), "abc");
        assert_eq!(strip_whitespace("\n j n r v \n"), "jnrv");
        assert_eq!(strip_whitespace(""), "");
    }

    #[test]
    fn adjacent_letters_get_multiplied() {
        assert_eq!(normalize("ab"), "a*b");
        assert_eq!(normalize("abc"), "a*b*c");
        assert_eq!(normalize("j n r v"), "j*n*r*v");
    }

    #[test]
    fn operators_suppress_insertion() {
        assert_eq!(normalize("a-b"), "a-b");
        assert_eq!(normalize("a + b"), "a+b");
        assert_eq!(normalize("a/b"), "a/b");
        assert_eq!(normalize("(a"), "(a");
        assert_eq!(normalize("a)"), "a)");
    }

    #[test]
    fn commas_and_braces_count_as_operands() {
        assert_eq!(normalize("a,b"), "a*,*b");
        assert_eq!(normalize("{a}"), "{*a*}");
        assert_eq!(normalize("(a,b)"), "(a*,*b)");
    }

    #[test]
    fn explicit_multiplication_is_not_doubled() {
        assert_eq!(normalize("a*b"), "a*b");
        assert_eq!(normalize("a * b c"), "a*b*c");
    }

    #[test]
    fn parenthesized_groups() {
        assert_eq!(normalize("(ab)(cd)"), "(a*b)(c*d)");
        assert_eq!(normalize("a(b - c)d"), "a(b-c)d");
    }

    #[test]
    fn single_and_empty_input() {
        assert_eq!(normalize("a"), "a");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn term_pairs() {
        assert_eq!(normalize("j n r v - i o r v"), "j*n*r*v-i*o*r*v");
        assert_eq!(normalize("j m s v + h o s v"), "j*m*s*v+h*o*s*v");
    }
}
