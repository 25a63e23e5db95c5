use crate::error::{Error, Result};
use crate::filter::Codec;
use crate::object::Dict;
use crate::trivia::is_white_space_character;

pub(crate) struct Ascii85;

pub(crate) static ASCII_85: Ascii85 = Ascii85;

const LINE_LENGTH: usize = 72;

impl Codec for Ascii85 {
    fn name(&self) -> &'static str {
        "ASCII85Decode"
    }

    fn decode(&self, encoded: &[u8], _: &Dict, _: usize) -> Result<Vec<u8>> {
        let invalid = || Error::codec(self.name(), "invalid ASCII-85 data");
        let mut decoded = vec![];

        // Leading `<~` is not part of the PDF syntax, but shows up anyway.
        let encoded = encoded.strip_prefix(b"<~").unwrap_or(encoded);

        let mut symbols = encoded
            .iter()
            .copied()
            .filter(|&b| !is_white_space_character(b))
            .take_while(|&b| b != b'~');

        let (tail_len, tail) = loop {
            match symbols.next() {
                Some(b'z') => decoded.extend_from_slice(&[0; 4]),
                Some(a) => {
                    let (b, c, d, e) = match (
                        symbols.next(),
                        symbols.next(),
                        symbols.next(),
                        symbols.next(),
                    ) {
                        (Some(b), Some(c), Some(d), Some(e)) => (b, c, d, e),
                        (None, _, _, _) => break (1, [a, b'u', b'u', b'u', b'u']),
                        (Some(b), None, _, _) => break (2, [a, b, b'u', b'u', b'u']),
                        (Some(b), Some(c), None, _) => break (3, [a, b, c, b'u', b'u']),
                        (Some(b), Some(c), Some(d), None) => break (4, [a, b, c, d, b'u']),
                    };
                    decoded.extend_from_slice(&word_85([a, b, c, d, e]).ok_or_else(invalid)?);
                }
                None => break (0, [b'u'; 5]),
            }
        };

        // A single leftover character carries no data.
        if tail_len > 1 {
            let last = word_85(tail).ok_or_else(invalid)?;
            decoded.extend_from_slice(&last[..tail_len - 1]);
        }

        Ok(decoded)
    }

    fn encode(&self, raw: &[u8], _: &Dict, _: usize) -> Result<Vec<u8>> {
        let mut encoded = Vec::with_capacity(raw.len() * 5 / 4 + 4);
        let mut line = 0;

        let mut push = |symbols: &[u8], encoded: &mut Vec<u8>| {
            for &s in symbols {
                if line == LINE_LENGTH {
                    encoded.push(b'\n');
                    line = 0;
                }

                encoded.push(s);
                line += 1;
            }
        };

        for chunk in raw.chunks(4) {
            let mut word = [0; 4];
            word[..chunk.len()].copy_from_slice(chunk);
            let value = u32::from_be_bytes(word);

            if value == 0 && chunk.len() == 4 {
                push(b"z", &mut encoded);
                continue;
            }

            let mut symbols = [0; 5];
            let mut rest = value;

            for s in symbols.iter_mut().rev() {
                *s = (rest % 85) as u8 + b'!';
                rest /= 85;
            }

            push(&symbols[..chunk.len() + 1], &mut encoded);
        }

        encoded.extend_from_slice(b"~>");

        Ok(encoded)
    }
}

fn sym_85(byte: u8) -> Option<u8> {
    match byte {
        b @ 0x21..=0x75 => Some(b - 0x21),
        _ => None,
    }
}

fn word_85([a, b, c, d, e]: [u8; 5]) -> Option<[u8; 4]> {
    fn s(b: u8) -> Option<u64> {
        sym_85(b).map(|n| n as u64)
    }
    let (a, b, c, d, e) = (s(a)?, s(b)?, s(c)?, s(d)?, s(e)?);
    let q = (((a * 85 + b) * 85 + c) * 85 + d) * 85 + e;
    // 85^5 > 256^4, the result might not fit in an u32.
    let r = u32::try_from(q).ok()?;
    Some(r.to_be_bytes())
}
