/// A byte cursor over the whole source with absolute position tracking.
///
/// Every pattern the tokenizer looks for is ASCII, so positions where the
/// cursor stops after matching a pattern are always char boundaries.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The full source being tokenized.
    pub s: &'a str,
    /// Current byte offset into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor positioned at byte offset `i`.
    pub fn at(s: &'a str, i: usize) -> Self {
        Self { s, i }
    }

    /// Returns the current byte offset.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Returns true if at end of source.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Peeks `n` bytes ahead without advancing.
    pub fn peek_nth(&self, n: usize) -> Option<u8> {
        self.s.as_bytes().get(self.i + n).copied()
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s.as_bytes().get(self.i..).is_some_and(|rest| rest.starts_with(pat))
    }

    /// Consumes `pat` if the remaining input starts with it.
    pub fn eat(&mut self, pat: &[u8]) -> bool {
        if self.starts_with(pat) {
            self.i += pat.len();
            true
        } else {
            false
        }
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Advances while `pred` holds for the current byte.
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.i += 1;
        }
    }

    /// Skips ASCII whitespace.
    pub fn eat_whitespace(&mut self) {
        self.eat_while(|b| b.is_ascii_whitespace());
    }

    /// Absolute offset of the next occurrence of `pat` at or after the cursor.
    pub fn find(&self, pat: &str) -> Option<usize> {
        self.s.get(self.i..)?.find(pat).map(|at| self.i + at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_basics() {
        let mut cur = Cursor::at("hello", 0);
        assert_eq!(cur.pos(), 0);
        assert!(!cur.eof());
        assert_eq!(cur.peek(), Some(b'h'));
        assert_eq!(cur.bump(), Some(b'h'));
        assert_eq!(cur.pos(), 1);
        assert_eq!(cur.peek_nth(1), Some(b'l'));
    }

    #[test]
    fn cursor_starts_with_and_eat() {
        let mut cur = Cursor::at("<!-- wp:", 0);
        assert!(cur.starts_with(b"<!--"));
        assert!(!cur.eat(b"-->"));
        assert!(cur.eat(b"<!--"));
        assert_eq!(cur.pos(), 4);
        cur.eat_whitespace();
        assert!(cur.starts_with(b"wp:"));
    }

    #[test]
    fn empty_string_input() {
        let cur = Cursor::at("", 0);
        assert!(cur.eof());
        assert_eq!(cur.peek(), None);
        assert!(cur.starts_with(b""));
        assert!(!cur.starts_with(b"<"));
    }

    #[test]
    fn bump_at_eof_returns_none() {
        let mut cur = Cursor::at("x", 0);
        assert_eq!(cur.bump(), Some(b'x'));
        assert_eq!(cur.bump(), None);
        assert_eq!(cur.bump(), None);
    }

    #[test]
    fn eat_while_stops_at_predicate() {
        let mut cur = Cursor::at("abc123", 0);
        cur.eat_while(|b| b.is_ascii_alphabetic());
        assert_eq!(cur.pos(), 3);
    }

    #[test]
    fn find_is_absolute() {
        let cur = Cursor::at("a --> b -->", 3);
        assert_eq!(cur.find("-->"), Some(8));
        let past = Cursor::at("abc", 3);
        assert_eq!(past.find("-->"), None);
    }
}
