use crate::error::Result;
use crate::filter::Codec;
use crate::object::Dict;

pub(crate) struct RunLength;

pub(crate) static RUN_LENGTH: RunLength = RunLength;

const EOD: u8 = 128;
const MAX_RUN: usize = 128;

impl Codec for RunLength {
    fn name(&self) -> &'static str {
        "RunLengthDecode"
    }

    fn decode(&self, encoded: &[u8], _: &Dict, _: usize) -> Result<Vec<u8>> {
        let mut decoded = vec![];

        if decode_inner(encoded, &mut decoded).is_none() {
            lwarn!("run-length decode stream ended prematurely");
        }

        Ok(decoded)
    }

    fn encode(&self, raw: &[u8], _: &Dict, _: usize) -> Result<Vec<u8>> {
        let mut encoded = Vec::with_capacity(raw.len() + raw.len() / MAX_RUN + 2);
        let mut literal_start = 0;
        let mut i = 0;

        while i < raw.len() {
            let run = raw[i..]
                .iter()
                .take(MAX_RUN)
                .take_while(|b| **b == raw[i])
                .count();

            if run >= 2 {
                flush_literal(&raw[literal_start..i], &mut encoded);
                encoded.push((257 - run) as u8);
                encoded.push(raw[i]);
                i += run;
                literal_start = i;
            } else {
                i += 1;

                if i - literal_start == MAX_RUN {
                    flush_literal(&raw[literal_start..i], &mut encoded);
                    literal_start = i;
                }
            }
        }

        flush_literal(&raw[literal_start..], &mut encoded);
        encoded.push(EOD);

        Ok(encoded)
    }
}

fn flush_literal(literal: &[u8], out: &mut Vec<u8>) {
    if !literal.is_empty() {
        out.push((literal.len() - 1) as u8);
        out.extend_from_slice(literal);
    }
}

fn decode_inner(mut data: &[u8], decoded: &mut Vec<u8>) -> Option<()> {
    loop {
        let (&length, rest) = data.split_first()?;
        data = rest;

        match length {
            EOD => return Some(()),
            0..=127 => {
                let count = length as usize + 1;
                decoded.extend_from_slice(data.get(..count)?);
                data = &data[count..];
            }
            _ => {
                let (&byte, rest) = data.split_first()?;
                data = rest;
                decoded.extend(std::iter::repeat_n(byte, 257 - length as usize));
            }
        }
    }
}
