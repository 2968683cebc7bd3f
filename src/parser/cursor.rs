//! A small text cursor shared by the declaration matchers.
//!
//! The matchers are hand-written recursive-descent recognizers over one
//! statement-line each; the cursor gives them the few primitives they need.
//! Identifiers are `[A-Za-z_][A-Za-z0-9_]*`.

pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Self {
        Cursor { input, pos: 0 }
    }

    /// Remaining unconsumed text
    pub fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    pub fn skip_ws(&mut self) {
        let rest = self.rest();
        let trimmed = rest.trim_start();
        self.pos += rest.len() - trimmed.len();
    }

    /// Consume an exact literal, no identifier-boundary check
    pub fn eat_exact(&mut self, literal: &str) -> bool {
        if self.rest().starts_with(literal) {
            self.pos += literal.len();
            true
        } else {
            false
        }
    }

    /// Consume a keyword; fails if the match continues into a longer
    /// identifier (`pubx` does not contain keyword `pub`)
    pub fn eat_keyword(&mut self, keyword: &str) -> bool {
        let rest = self.rest();
        if !rest.starts_with(keyword) {
            return false;
        }
        if rest[keyword.len()..]
            .chars()
            .next()
            .is_some_and(is_ident_char)
        {
            return false;
        }
        self.pos += keyword.len();
        true
    }

    pub fn eat_char(&mut self, c: char) -> bool {
        if self.rest().starts_with(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    /// Consume an identifier, returning it
    pub fn eat_ident(&mut self) -> Option<&'a str> {
        let rest = self.rest();
        let mut chars = rest.chars();
        match chars.next() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
            _ => return None,
        }

        let len = rest
            .find(|c: char| !is_ident_char(c))
            .unwrap_or(rest.len());
        self.pos += len;
        Some(&rest[..len])
    }

    /// Consume up to (and including) the next occurrence of `c`, returning
    /// the text before it. Fails if `c` is absent.
    pub fn take_until(&mut self, c: char) -> Option<&'a str> {
        let rest = self.rest();
        let idx = rest.find(c)?;
        self.pos += idx + c.len_utf8();
        Some(&rest[..idx])
    }

    /// True once only whitespace remains
    pub fn at_end(&mut self) -> bool {
        self.skip_ws();
        self.rest().is_empty()
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
