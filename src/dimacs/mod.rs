// Copyright (c) 2015-2022 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

//! Reading files in DIMACS format.
//!
//! DIMACS files are line based. Empty lines and comment lines starting
//! with `c` are skipped, every other line starts with a one-letter
//! descriptor followed by whitespace separated fields.

pub mod sp;

use std::error;
use std::fmt;
use std::io::{self, BufRead, BufReader, Read};
use std::str::{FromStr, SplitWhitespace};

/// Error when reading a file in DIMACS format.
#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    Format { line: usize, msg: String },
    Data { line: usize, msg: String },
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> std::result::Result<(), fmt::Error> {
        use self::Error::*;
        match self {
            Io(err) => err.fmt(fmt),
            Format { line, msg } => write!(fmt, "Format error on line {}: {}", line, msg),
            Data { line, msg } => write!(fmt, "Data error on line {}: {}", line, msg),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Iterator over the significant lines of a DIMACS file.
///
/// Yields each non-empty, non-comment line together with its (1-based)
/// line number.
pub struct Lines<R: Read> {
    lines: io::Lines<BufReader<R>>,
    line_number: usize,
}

impl<R: Read> Lines<R> {
    pub fn new(reader: R) -> Self {
        Lines {
            lines: BufReader::new(reader).lines(),
            line_number: 0,
        }
    }

    /// Return the number of the last line read.
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

impl<R: Read> Iterator for Lines<R> {
    type Item = Result<(usize, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        for line in &mut self.lines {
            self.line_number += 1;
            let line = match line {
                Ok(line) => line,
                Err(err) => return Some(Err(err.into())),
            };
            match line.trim_start().chars().next() {
                None | Some('c') => continue,
                Some(_) => return Some(Ok((self.line_number, line))),
            }
        }
        None
    }
}

/// The fields of a single line.
pub struct Tokens<'a> {
    it: SplitWhitespace<'a>,
    pub line: usize,
}

impl<'a> Tokens<'a> {
    pub fn new(text: &'a str, line: usize) -> Self {
        Tokens {
            it: text.split_whitespace(),
            line,
        }
    }

    fn error(&self, msg: String) -> Error {
        Error::Format { line: self.line, msg }
    }

    /// Return an error if the next token is not `tok`.
    pub fn expect(&mut self, tok: &str) -> Result<()> {
        match self.it.next() {
            Some(t) if t == tok => Ok(()),
            Some(t) => Err(self.error(format!("expected '{}', got '{}'", tok, t))),
            None => Err(self.error(format!("expected '{}', got end of line", tok))),
        }
    }

    /// Parse the next token.
    pub fn number<T>(&mut self) -> Result<T>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        match self.it.next() {
            Some(t) => t.parse().map_err(|e| self.error(format!("invalid number '{}': {}", t, e))),
            None => Err(self.error("expected number".to_string())),
        }
    }

    /// Ensure that there is no further token.
    pub fn end(&mut self) -> Result<()> {
        match self.it.next() {
            Some(t) => Err(self.error(format!("unexpected token at end of line: {}", t))),
            None => Ok(()),
        }
    }
}
