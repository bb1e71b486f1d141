//! Character cursor over a single input line
//!
//! Behaves like an input stream with a sticky failure state:
//! - every read first passes [`Cursor::sentry`], which refuses to touch a failed cursor
//! - a mismatched read sets the failure state instead of returning an error
//! - [`Cursor::mark`] / [`Cursor::reset`] rewind after a speculative read

/// Saved cursor position, see [`Cursor::mark`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark(usize);

#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    text: &'a str,
    pos: usize,
    failed: bool,
}

impl<'a> Cursor<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            pos: 0,
            failed: false,
        }
    }

    /// Entry guard for every read
    ///
    /// Skips leading whitespace and reports whether reading may proceed.
    pub fn sentry(&mut self) -> bool {
        if self.failed {
            return false;
        }
        self.skip_whitespace();
        true
    }

    pub fn is_failed(&self) -> bool {
        self.failed
    }

    pub fn fail(&mut self) {
        self.failed = true;
    }

    pub fn mark(&self) -> Mark {
        Mark(self.pos)
    }

    /// Rewind to `mark` and clear the failure state
    pub fn reset(&mut self, mark: Mark) {
        self.pos = mark.0;
        self.failed = false;
    }

    /// Unread input, including leading whitespace
    pub fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    /// Only whitespace remains
    pub fn is_at_end(&self) -> bool {
        self.rest().trim().is_empty()
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start().len();
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consume exactly `expected` after optional whitespace
    pub fn expect(&mut self, expected: char) -> bool {
        if !self.sentry() {
            return false;
        }
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            self.fail();
            false
        }
    }

    /// Next whitespace-delimited word
    pub fn read_token(&mut self) -> Option<&'a str> {
        if !self.sentry() {
            return None;
        }
        let rest = self.rest();
        let len = rest.find(char::is_whitespace).unwrap_or(rest.len());
        if len == 0 {
            self.fail();
            return None;
        }
        self.pos += len;
        Some(&rest[..len])
    }

    /// Unsigned decimal integer, no sign accepted
    pub fn read_u64(&mut self) -> Option<u64> {
        if !self.sentry() {
            return None;
        }
        let digits = self.digit_run(0);
        self.take_number(digits)
    }

    /// Signed decimal integer with an optional leading `+` or `-`
    pub fn read_i32(&mut self) -> Option<i32> {
        if !self.sentry() {
            return None;
        }
        let sign = match self.peek() {
            Some('+') | Some('-') => 1,
            _ => 0,
        };
        let digits = self.digit_run(sign);
        if digits == 0 {
            self.fail();
            return None;
        }
        self.take_number(sign + digits)
    }

    fn digit_run(&self, skip: usize) -> usize {
        self.rest()[skip..]
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count()
    }

    fn take_number<T: std::str::FromStr>(&mut self, len: usize) -> Option<T> {
        let parsed = self.rest()[..len].parse().ok();
        match parsed {
            Some(value) => {
                self.pos += len;
                Some(value)
            }
            None => {
                self.fail();
                None
            }
        }
    }
}
