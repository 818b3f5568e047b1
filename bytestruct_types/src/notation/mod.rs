//! A textual notation for [`Schema`]s.
//!
//! ```text
//! schema  := field (';' field)* ';'?
//! field   := name ':' type
//! name    := [A-Za-z0-9_]+
//! type    := scalar | 'char' | 'cstr' | '[' type ';' count ']'
//! scalar  := 'i8' | 'u8' | 'i16' | 'u16' | 'i32' | 'u32' | 'i64' | 'u64' | 'f32' | 'f64'
//! ```
//!
//! `[char; N]` denotes [`Descriptor::FixedChars`] of length `N`,
//! not an array of `N` one-byte texts. A lone `char` is `[char; 1]`.
//!
//! For example
//!
//! ```text
//! id: u32; name: [char; 12]; grid: [[i16; 3]; 2]; note: cstr
//! ```

use crate::types::{is_name_byte, Descriptor, ScalarKind, Schema, SchemaError};
use itertools::Itertools;
use std::fmt;
use std::str::FromStr;


const CHAR: &str = "char";
const CSTR: &str = "cstr";

impl FromStr for Schema {
    type Err = SchemaError;
    fn from_str(s: &str) -> Result<Self, SchemaError> {
        Parser { src: s, pos: 0 }.schema()
    }
}

impl FromStr for Descriptor {
    type Err = SchemaError;
    fn from_str(s: &str) -> Result<Self, SchemaError> {
        let mut parser = Parser { src: s, pos: 0 };
        let desc = parser.desc()?;
        parser.skip_ws();
        if !parser.at_end() {
            return Err(parser.syntax("Trailing characters after type"));
        }
        Ok(desc)
    }
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn schema(&mut self) -> Result<Schema, SchemaError> {
        let mut schema = Schema::new();
        loop {
            self.skip_ws();
            if self.at_end() {
                break;
            }

            /* name */
            let name = self.word();
            if name.is_empty() {
                return Err(self.syntax("Expected a field name"));
            }
            self.expect(b':')?;

            /* type */
            let desc = self.desc()?;
            schema.push(name, desc)?;

            self.skip_ws();
            if self.at_end() {
                break;
            }
            self.expect(b';')?;
        }
        Ok(schema)
    }

    fn desc(&mut self) -> Result<Descriptor, SchemaError> {
        self.skip_ws();
        if self.peek() == Some(b'[') {
            self.pos += 1;
            return self.array_body();
        }

        match self.word() {
            "" => Err(self.syntax("Expected a type")),
            CHAR => Ok(Descriptor::char()),
            CSTR => Ok(Descriptor::CString),
            word => Ok(Descriptor::Scalar(ScalarKind::from_str(word)?)),
        }
    }

    /// Everything after the opening `[`.
    fn array_body(&mut self) -> Result<Descriptor, SchemaError> {
        self.skip_ws();
        let is_chars = {
            let rest = &self.src[self.pos..];
            rest.starts_with(CHAR)
                && !rest[CHAR.len()..].bytes().next().is_some_and(is_name_byte)
        };

        let elem = if is_chars {
            self.pos += CHAR.len();
            None
        } else {
            Some(self.desc()?)
        };

        self.expect(b';')?;
        let count = self.count()?;
        self.expect(b']')?;

        let desc = match elem {
            None => Descriptor::FixedChars(count),
            Some(elem) => Descriptor::array(elem, count),
        };
        Ok(desc)
    }

    fn count(&mut self) -> Result<usize, SchemaError> {
        self.skip_ws();
        let start = self.pos;
        while matches!(self.peek(), Some(b) if b.is_ascii_digit()) {
            self.pos += 1;
        }
        let digits = &self.src[start..self.pos];
        if digits.is_empty() {
            return Err(self.syntax("Expected a count"));
        }
        digits.parse::<usize>().map_err(|e| SchemaError::Syntax {
            pos: start,
            msg: format!("Invalid count {digits}. {e}"),
        })
    }

    fn word(&mut self) -> &'a str {
        self.skip_ws();
        let start = self.pos;
        while matches!(self.peek(), Some(b) if is_name_byte(b)) {
            self.pos += 1;
        }
        &self.src[start..self.pos]
    }

    fn expect(&mut self, byte: u8) -> Result<(), SchemaError> {
        self.skip_ws();
        if self.peek() == Some(byte) {
            self.pos += 1;
            return Ok(());
        }
        Err(self.syntax(&format!("Expected {:?}", byte as char)))
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(b) if b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    fn peek(&self) -> Option<u8> {
        self.src.as_bytes().get(self.pos).copied()
    }

    fn at_end(&self) -> bool {
        self.pos >= self.src.len()
    }

    fn syntax(&self, msg: &str) -> SchemaError {
        SchemaError::Syntax {
            pos: self.pos,
            msg: String::from(msg),
        }
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(kind) => write!(f, "{kind}"),
            Self::FixedChars(1) => f.write_str(CHAR),
            Self::FixedChars(len) => write!(f, "[{CHAR}; {len}]"),
            Self::CString => f.write_str(CSTR),
            // A bare `char` element would read back as a text block.
            Self::FixedArray(elem, count) => match &**elem {
                Self::FixedChars(len) => write!(f, "[[{CHAR}; {len}]; {count}]"),
                elem => write!(f, "[{elem}; {count}]"),
            },
        }
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = self
            .fields()
            .iter()
            .format_with("; ", |field, f| {
                f(&format_args!("{}: {}", field.name, field.desc))
            });
        write!(f, "{fields}")
    }
}
