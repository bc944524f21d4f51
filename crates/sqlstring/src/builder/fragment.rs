//! Raw SQL fragment accumulator.
//!
//! [`SqlString`] is the rendering primitive every statement builder writes
//! through. It can also be used directly to hand-assemble statements the
//! typed builders do not cover.

use std::fmt;

use crate::dialect::QuoteStyle;

/// An append-only SQL text buffer.
///
/// Every `push_*` method takes a trailing `comma` flag; when set, a `,` is
/// written directly after the content with no space.
///
/// # Example
///
/// ```rust
/// use sqlstring::{QuoteStyle, SqlString};
///
/// let mut sql = SqlString::new(QuoteStyle::Single);
/// sql.push_str("SELECT c1 FROM t2 WHERE c2 = ", false);
/// sql.push_quoted("ID2", false);
///
/// assert_eq!(sql.as_str(), "SELECT c1 FROM t2 WHERE c2 = 'ID2'");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SqlString {
    buf: String,
    quote: QuoteStyle,
}

impl SqlString {
    /// Creates an empty buffer using the given quote style.
    #[must_use]
    pub const fn new(quote: QuoteStyle) -> Self {
        Self {
            buf: String::new(),
            quote,
        }
    }

    /// Returns the quote style literals are wrapped in.
    #[must_use]
    pub const fn quote_style(&self) -> QuoteStyle {
        self.quote
    }

    /// Appends raw text.
    pub fn push_str(&mut self, s: &str, comma: bool) {
        self.buf.push_str(s);
        self.finish(comma);
    }

    /// Appends text wrapped in the quote character.
    pub fn push_quoted(&mut self, s: &str, comma: bool) {
        let q = self.quote.as_char();
        self.buf.reserve(s.len() + 2);
        self.buf.push(q);
        self.buf.push_str(s);
        self.buf.push(q);
        self.finish(comma);
    }

    /// Appends `items` joined by `sep`.
    pub fn push_joined<S: AsRef<str>>(&mut self, items: &[S], sep: &str, comma: bool) {
        self.write_joined(items, sep);
        self.finish(comma);
    }

    /// Appends `items` as one quoted run: every item is quoted and the
    /// separator sits between the closing and opening quotes.
    ///
    /// An empty slice renders as an empty quoted literal.
    pub fn push_joined_quoted<S: AsRef<str>>(&mut self, items: &[S], sep: &str, comma: bool) {
        let q = self.quote.as_str();
        let quoted_sep = format!("{q}{sep}{q}");
        let text: usize = items.iter().map(|s| s.as_ref().len()).sum();
        self.buf.reserve(
            text + items.len().saturating_sub(1) * quoted_sep.len() + 2 * q.len() + 1,
        );
        self.buf.push_str(q);
        self.write_joined(items, &quoted_sep);
        self.buf.push_str(q);
        self.finish(comma);
    }

    /// Appends `items` joined by `sep` inside parentheses.
    pub fn push_joined_parens<S: AsRef<str>>(&mut self, items: &[S], sep: &str, comma: bool) {
        self.buf.push('(');
        self.write_joined(items, sep);
        self.buf.push(')');
        self.finish(comma);
    }

    /// Appends `s` inside parentheses.
    pub fn push_parens(&mut self, s: &str, comma: bool) {
        self.buf.push('(');
        self.buf.push_str(s);
        self.buf.push(')');
        self.finish(comma);
    }

    /// Appends a signed integer in base 10.
    pub fn push_int(&mut self, n: i64, comma: bool) {
        self.buf.push_str(&n.to_string());
        self.finish(comma);
    }

    /// Appends an unsigned integer in base 10.
    pub fn push_uint(&mut self, n: u64, comma: bool) {
        self.buf.push_str(&n.to_string());
        self.finish(comma);
    }

    /// Clears the buffer. The quote style is kept.
    pub fn reset(&mut self) {
        self.buf.clear();
    }

    /// Returns the accumulated text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Returns the length of the accumulated text in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if nothing has been appended since the last reset.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Consumes the buffer, returning the accumulated text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.buf
    }

    fn write_joined<S: AsRef<str>>(&mut self, items: &[S], sep: &str) {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.buf.push_str(sep);
            }
            self.buf.push_str(item.as_ref());
        }
    }

    fn finish(&mut self, comma: bool) {
        if comma {
            self.buf.push(',');
        }
    }
}

impl fmt::Display for SqlString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buf)
    }
}

impl From<SqlString> for String {
    fn from(sql: SqlString) -> Self {
        sql.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_update() {
        let mut sql = SqlString::new(QuoteStyle::Double);
        sql.push_str("UPDATE t1 SET name = ", false);
        sql.push_quoted("Bruce", false);
        sql.push_str(" WHERE position = ", false);
        sql.push_quoted("engineer", false);

        assert_eq!(
            sql.as_str(),
            "UPDATE t1 SET name = \"Bruce\" WHERE position = \"engineer\""
        );
    }

    #[test]
    fn test_trailing_comma() {
        let mut sql = SqlString::default();
        sql.push_str("a", true);
        sql.push_quoted("b", true);
        sql.push_int(-3, true);
        sql.push_uint(4, false);

        assert_eq!(sql.as_str(), "a,'b',-3,4");
    }

    #[test]
    fn test_joined() {
        let mut sql = SqlString::default();
        sql.push_joined(&["c1", "c2", "c3"], ", ", false);
        assert_eq!(sql.as_str(), "c1, c2, c3");

        sql.reset();
        sql.push_joined::<&str>(&[], ", ", true);
        assert_eq!(sql.as_str(), ",");
    }

    #[test]
    fn test_joined_quoted() {
        let mut sql = SqlString::default();
        sql.push_joined_quoted(&["a", "bb", "c"], ", ", false);
        assert_eq!(sql.as_str(), "'a', 'bb', 'c'");

        let mut sql = SqlString::new(QuoteStyle::Double);
        sql.push_joined_quoted(&[String::from("x")], ",", true);
        assert_eq!(sql.as_str(), "\"x\",");
    }

    #[test]
    fn test_joined_quoted_empty_does_not_panic() {
        let mut sql = SqlString::default();
        sql.push_joined_quoted::<&str>(&[], ", ", false);
        assert_eq!(sql.as_str(), "''");
    }

    #[test]
    fn test_joined_quoted_reserves_for_uneven_items() {
        let mut items = vec!["x".repeat(4096)];
        items.resize(10_001, String::new());

        let mut sql = SqlString::default();
        sql.push_joined_quoted(&items, ",", false);
        let out = sql.into_string();

        assert_eq!(out.len(), 4096 + 2 + 10_000 * 3);
        assert!(out.starts_with(&format!("'{}'", "x".repeat(4096))));
        assert!(out.ends_with("','',''"));
        assert!(out.capacity() < 2 * out.len());
    }

    #[test]
    fn test_parens() {
        let mut sql = SqlString::default();
        sql.push_joined_parens(&["name", "salary"], ",", false);
        sql.push_str(" ", false);
        sql.push_parens("1 + 2", true);

        assert_eq!(sql.as_str(), "(name,salary) (1 + 2),");
    }

    #[test]
    fn test_reset_keeps_quote_style() {
        let mut sql = SqlString::new(QuoteStyle::Double);
        sql.push_str("junk", false);
        sql.reset();

        assert!(sql.is_empty());
        assert_eq!(sql.len(), 0);
        assert_eq!(sql.quote_style(), QuoteStyle::Double);
        sql.push_quoted("v", false);
        assert_eq!(sql.to_string(), "\"v\"");
    }

    #[test]
    fn test_integer_extremes() {
        let mut sql = SqlString::default();
        sql.push_int(i64::MIN, true);
        sql.push_uint(u64::MAX, false);

        assert_eq!(sql.into_string(), "-9223372036854775808,18446744073709551615");
    }
}
