use super::{Parser, Source};
use crate::error::{Error, Result};
use crate::object::PdfString;
use crate::trivia::{hex_value, is_eol_character, is_white_space_character};
use smallvec::SmallVec;

impl<S: Source> Parser<S> {
    /// Parse a literal or hexadecimal string.
    pub fn parse_string(&mut self) -> Result<PdfString> {
        match self.source.read()? {
            Some(b'(') => self.parse_literal_string(),
            Some(b'<') => self.parse_hex_string(),
            Some(_) => Err(Error::syntax(
                self.offset().saturating_sub(1),
                "expected '(' or '<'",
            )),
            None => Err(self.unexpected_eof()),
        }
    }

    fn unexpected_eof(&self) -> Error {
        Error::UnexpectedEof {
            offset: self.offset(),
        }
    }

    fn parse_literal_string(&mut self) -> Result<PdfString> {
        let mut out = Vec::new();
        let mut braces: usize = 1;

        while braces > 0 {
            let Some(c) = self.source.read()? else {
                return Err(self.unexpected_eof());
            };

            match c {
                b')' => {
                    braces -= 1;
                    braces = self.check_for_missing_close_paren(braces)?;

                    if braces != 0 {
                        out.push(c);
                    }
                }
                b'(' => {
                    braces += 1;
                    out.push(c);
                }
                b'\\' => {
                    let Some(next) = self.source.read()? else {
                        return Err(self.unexpected_eof());
                    };

                    match next {
                        b'n' => out.push(b'\n'),
                        b'r' => out.push(b'\r'),
                        b't' => out.push(b'\t'),
                        b'b' => out.push(0x08),
                        b'f' => out.push(0x0c),
                        b')' => {
                            braces = self.check_for_missing_close_paren(braces)?;

                            if braces != 0 {
                                out.push(b')');
                            } else {
                                out.push(b'\\');
                            }
                        }
                        b'\r' | b'\n' => {
                            // Line continuation.
                            while let Some(c) = self.source.peek()? {
                                if !is_eol_character(c) {
                                    break;
                                }

                                self.source.read()?;
                            }
                        }
                        b'0'..=b'7' => {
                            let mut value = (next - b'0') as u32;

                            for _ in 0..2 {
                                match self.source.peek()? {
                                    Some(d @ b'0'..=b'7') => {
                                        self.source.read()?;
                                        value = value * 8 + (d - b'0') as u32;
                                    }
                                    _ => break,
                                }
                            }

                            // High-order overflow is ignored.
                            out.push(value as u8);
                        }
                        _ => out.push(next),
                    }
                }
                _ => out.push(c),
            }
        }

        Ok(PdfString::from(out))
    }

    /// Writers sometimes forget to escape a closing parenthesis. If what
    /// follows looks like the start of the next dictionary key, the string
    /// is closed right here.
    fn check_for_missing_close_paren(&mut self, braces: usize) -> Result<usize> {
        let mut next = SmallVec::<[u8; 3]>::new();

        for _ in 0..3 {
            match self.source.read()? {
                Some(c) => next.push(c),
                None => break,
            }
        }

        let closed = next.len() == 3 && (next[..] == *b"\r\n/" || next[..2] == *b"\r/");
        self.source.unread_bytes(&next)?;

        Ok(if closed { 0 } else { braces })
    }

    fn parse_hex_string(&mut self) -> Result<PdfString> {
        let mut nibbles = Vec::new();

        loop {
            let Some(c) = self.source.read()? else {
                return Err(self.unexpected_eof());
            };

            if let Some(nibble) = hex_value(c) {
                nibbles.push(nibble);
            } else if c == b'>' {
                break;
            } else if is_white_space_character(c) || c == 0x08 {
                continue;
            } else {
                lwarn!("invalid character in hex string at offset {}", self.offset());

                // Keep what was read so far and skip to the end.
                loop {
                    match self.source.read()? {
                        Some(b'>') => break,
                        Some(_) => {}
                        None => return Err(self.unexpected_eof()),
                    }
                }

                break;
            }
        }

        if nibbles.len() % 2 != 0 {
            ldebug!("dropping odd trailing digit of hex string");
            nibbles.pop();
        }

        let bytes = nibbles
            .chunks_exact(2)
            .map(|pair| (pair[0] << 4) | pair[1])
            .collect::<Vec<_>>();

        Ok(PdfString::from(bytes))
    }
}
