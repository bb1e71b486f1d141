//! Formatting and writing of command results

use std::io::{self, Write};

pub const TRUE_TAG: &str = "<TRUE>";
pub const FALSE_TAG: &str = "<FALSE>";
pub const INVALID_COMMAND: &str = "<INVALID COMMAND>";

/// Default number of digits after the decimal point for real results
pub const DEFAULT_PRECISION: usize = 1;

/// Result of a single command
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reply {
    /// Area-valued result, printed in fixed notation
    Real(f64),
    /// Counts and vertex numbers
    Count(usize),
    /// Containment checks
    Flag(bool),
}

impl Reply {
    pub fn render(&self, precision: usize) -> String {
        match self {
            Reply::Real(value) => format!("{:.*}", precision, value),
            Reply::Count(n) => n.to_string(),
            Reply::Flag(true) => TRUE_TAG.to_string(),
            Reply::Flag(false) => FALSE_TAG.to_string(),
        }
    }
}

/// Writes one line per reply
///
/// The precision belongs to the writer and is applied per reply, so no
/// formatting state leaks from one command to the next. Each line is built
/// in full before it reaches the sink.
pub struct ReplyWriter<W: Write> {
    out: W,
    precision: usize,
}

impl<W: Write> ReplyWriter<W> {
    pub fn new(out: W, precision: usize) -> Self {
        Self { out, precision }
    }

    pub fn reply(&mut self, reply: &Reply) -> io::Result<()> {
        let line = format!("{}\n", reply.render(self.precision));
        self.commit(&line)
    }

    pub fn invalid(&mut self) -> io::Result<()> {
        self.commit(&format!("{}\n", INVALID_COMMAND))
    }

    fn commit(&mut self, line: &str) -> io::Result<()> {
        self.out.write_all(line.as_bytes())?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
