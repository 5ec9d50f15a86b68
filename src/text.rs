use crate::{Error, Result};

/// The line terminator of every line written in the textual formats.
pub(crate) const CRLF: &str = "\r\n";

/// A reader of the lines of a textual format.
///
/// Blank lines and everything following a `//` in a line are ignored; fields are separated by
/// any amount of whitespace.
pub(crate) struct Lines<'a> {
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
    /// The one-based number of the latest line read.
    line: usize,
}

impl<'a> Lines<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().enumerate(),
            line: 0,
        }
    }

    /// Reads the next line holding exactly `N` integer fields, returning them together with the
    /// number of the line they were read from.
    pub(crate) fn integers<const N: usize>(
        &mut self,
        expected: &'static str,
    ) -> Result<(usize, [i64; N])> {
        let Some((line, content)) = self.next_content() else {
            return Err(Error::UnexpectedEnd {
                line: self.line + 1,
                expected,
            });
        };

        let malformed = || Error::Malformed {
            line,
            expected,
            found: content.to_string(),
        };

        let mut fields = content.split_whitespace();
        let mut values = [0; N];
        for value in &mut values {
            *value = fields
                .next()
                .and_then(|field| field.parse().ok())
                .ok_or_else(malformed)?;
        }

        if fields.next().is_some() {
            return Err(malformed());
        }

        Ok((line, values))
    }

    /// Succeeds if, and only if, there is nothing left to read.
    pub(crate) fn finish(mut self) -> Result<()> {
        match self.next_content() {
            Some((line, content)) => Err(Error::TrailingContent {
                line,
                found: content.to_string(),
            }),
            None => Ok(()),
        }
    }

    fn next_content(&mut self) -> Option<(usize, &'a str)> {
        let (line, content) = self.lines.by_ref().find_map(|(index, line)| {
            let content = line.split("//").next().unwrap_or_default().trim();
            (!content.is_empty()).then_some((index + 1, content))
        })?;

        self.line = line;
        Some((line, content))
    }
}
