//! PostgreSQL array literal parser.
//!
//! Handles the text output of `array_out`: `{1,2,NULL}`, quoted elements with
//! backslash escapes, nested arrays and an optional `[1:3]=` bounds prefix.
//! Element text is handed to a caller-supplied function; unquoted `NULL` is
//! [`ParsedValue::Null`] and never reaches it.
//!
//! Whitespace is ASCII only, matching the server's `array_isspace`.

use crate::{ArrayError, ParseError, ParsedValue};

/// Server limit on array dimensions (`MAXDIM`).
const MAX_DIMENSIONS: usize = 6;

fn is_array_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

/// Parses an array literal, decoding each element with `element`.
///
/// Examples:
/// - `"{}" -> []`
/// - `"{1,NULL}" -> [element("1"), Null]`
/// - `"{{1},{2}}" -> [[element("1")], [element("2")]]`
pub fn parse_array<F>(text: &str, element: F) -> Result<Vec<ParsedValue>, ParseError>
where
    F: FnMut(&str) -> Result<ParsedValue, ParseError>,
{
    ArrayParser {
        text,
        pos: 0,
        element,
    }
    .parse()
}

struct ArrayParser<'a, F> {
    text: &'a str,
    pos: usize,
    element: F,
}

impl<F> ArrayParser<'_, F>
where
    F: FnMut(&str) -> Result<ParsedValue, ParseError>,
{
    fn parse(mut self) -> Result<Vec<ParsedValue>, ParseError> {
        self.ws();
        self.dimensions()?;
        self.ws();
        let items = self.array(0)?;
        self.ws();
        if self.pos < self.text.len() {
            return Err(ArrayError::UnexpectedCharacter(self.pos).into());
        }
        Ok(items)
    }

    fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }

    fn ws(&mut self) {
        while self.peek().is_some_and(|b| is_array_space(b as char)) {
            self.pos += 1;
        }
    }

    /// Skips a `[lower:upper]...=` bounds decoration. Each group is
    /// `[upper]` or `[lower:upper]` with optionally signed integers.
    fn dimensions(&mut self) -> Result<(), ArrayError> {
        if self.peek() != Some(b'[') {
            return Ok(());
        }
        while self.peek() == Some(b'[') {
            self.pos += 1;
            self.ws();
            self.bound()?;
            self.ws();
            if self.peek() == Some(b':') {
                self.pos += 1;
                self.ws();
                self.bound()?;
                self.ws();
            }
            if self.peek() != Some(b']') {
                return Err(ArrayError::InvalidDimensions(self.pos));
            }
            self.pos += 1;
            self.ws();
        }
        if self.peek() != Some(b'=') {
            return Err(ArrayError::MissingDimensionsAssignment);
        }
        self.pos += 1;
        Ok(())
    }

    fn bound(&mut self) -> Result<(), ArrayError> {
        if matches!(self.peek(), Some(b'+' | b'-')) {
            self.pos += 1;
        }
        let start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }
        if self.pos == start {
            return Err(ArrayError::InvalidDimensions(self.pos));
        }
        Ok(())
    }

    /// Parses one `{...}` level; `depth` counts the enclosing levels.
    fn array(&mut self, depth: usize) -> Result<Vec<ParsedValue>, ParseError> {
        if self.peek() != Some(b'{') {
            return Err(ArrayError::ExpectedOpenBrace(self.pos).into());
        }
        if depth >= MAX_DIMENSIONS {
            return Err(ArrayError::TooDeep(self.pos).into());
        }
        self.pos += 1;
        let mut items = Vec::new();
        self.ws();
        if self.peek() == Some(b'}') {
            self.pos += 1;
            return Ok(items);
        }
        loop {
            self.ws();
            let item = match self.peek() {
                Some(b'{') => ParsedValue::Array(self.array(depth + 1)?),
                Some(b'"') => {
                    let text = self.quoted()?;
                    (self.element)(text.as_str())?
                }
                Some(_) => {
                    let (text, escaped) = self.unquoted()?;
                    if !escaped && text.eq_ignore_ascii_case("NULL") {
                        ParsedValue::Null
                    } else {
                        (self.element)(text.as_str())?
                    }
                }
                None => return Err(ArrayError::UnexpectedEnd.into()),
            };
            items.push(item);
            self.ws();
            match self.peek() {
                Some(b',') => self.pos += 1,
                Some(b'}') => {
                    self.pos += 1;
                    return Ok(items);
                }
                Some(_) => return Err(ArrayError::UnexpectedCharacter(self.pos).into()),
                None => return Err(ArrayError::UnexpectedEnd.into()),
            }
        }
    }

    fn quoted(&mut self) -> Result<String, ArrayError> {
        let start = self.pos;
        self.pos += 1;
        let mut out = String::new();
        let mut chars = self.text[self.pos..].chars();
        while let Some(c) = chars.next() {
            self.pos += c.len_utf8();
            match c {
                '"' => return Ok(out),
                '\\' => match chars.next() {
                    Some(escaped) => {
                        self.pos += escaped.len_utf8();
                        out.push(escaped);
                    }
                    None => break,
                },
                _ => out.push(c),
            }
        }
        Err(ArrayError::UnterminatedQuote(start))
    }

    /// Reads an unquoted element up to the next delimiter. Returns the
    /// unescaped text and whether it contained escapes.
    fn unquoted(&mut self) -> Result<(String, bool), ArrayError> {
        let start = self.pos;
        let mut out = String::new();
        let mut escaped = false;
        let mut chars = self.text[self.pos..].chars();
        while let Some(c) = chars.next() {
            match c {
                ',' | '}' | '{' | '"' => break,
                '\\' => {
                    let next = chars.next().ok_or(ArrayError::UnexpectedEnd)?;
                    self.pos += c.len_utf8() + next.len_utf8();
                    out.push(next);
                    escaped = true;
                }
                _ => {
                    self.pos += c.len_utf8();
                    out.push(c);
                }
            }
        }
        let trimmed_len = out.trim_end_matches(is_array_space).len();
        out.truncate(trimmed_len);
        if out.is_empty() {
            return Err(ArrayError::EmptyElement(start));
        }
        Ok((out, escaped))
    }
}
