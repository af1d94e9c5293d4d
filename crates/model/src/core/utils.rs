/// Joins `items` with `sep`, wrapping every item in `brackets[0]` and
/// `brackets[1]`.
///
/// `join_bracketed(&["abc", "def"], "|", ["(", ")"])` yields `(abc)|(def)`.
pub fn join_bracketed<S: AsRef<str>>(items: &[S], sep: &str, brackets: [&str; 2]) -> String {
    let [open, close] = brackets;
    let mut out = String::new();

    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(sep);
        }
        out.push_str(open);
        out.push_str(item.as_ref());
        out.push_str(close);
    }

    out
}

/// Doubles embedded single quotes so `value` can sit inside a `'...'`
/// SQL string literal.
pub fn escape_sql_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        if ch == '\'' {
            out.push('\''); // double the quote
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_bracketed() {
        assert_eq!(join_bracketed(&["abc", "def"], "|", ["(", ")"]), "(abc)|(def)");
        assert_eq!(join_bracketed(&["1", "2", "3"], ",", ["'", "'"]), "'1','2','3'");
        assert_eq!(join_bracketed(&["a", "b"], " AND ", ["", ""]), "a AND b");
    }

    #[test]
    fn test_join_bracketed_edges() {
        let empty: [&str; 0] = [];
        assert_eq!(join_bracketed(&empty, ",", ["'", "'"]), "");
        assert_eq!(join_bracketed(&[String::from("x")], ",", ["[", "]"]), "[x]");
    }

    #[test]
    fn test_escape_sql_string() {
        assert_eq!(escape_sql_string("bob"), "bob");
        assert_eq!(escape_sql_string("o'brien"), "o''brien");
        assert_eq!(escape_sql_string("''"), "''''");
    }
}
