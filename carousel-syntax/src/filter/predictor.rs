//! PNG and TIFF predictors for the Flate and LZW filters.

use crate::error::{Error, Result};
use crate::object::Dict;
use crate::object::keys::{BITS_PER_COMPONENT, COLORS, COLUMNS, PREDICTOR};

pub(crate) struct PredictorParams {
    predictor: i64,
    colors: usize,
    bits_per_component: usize,
    columns: usize,
}

impl PredictorParams {
    pub(crate) fn from_params(dict: &Dict) -> Self {
        let bits_per_component = match dict.get_int(BITS_PER_COMPONENT, 8) {
            bpc @ (1 | 2 | 4 | 8 | 16) => bpc as usize,
            _bpc => {
                lwarn!("invalid predictor bits per component {}, using 8", _bpc);

                8
            }
        };

        Self {
            predictor: dict.get_int(PREDICTOR, 1),
            colors: dict.get_int(COLORS, 1).clamp(1, 32) as usize,
            bits_per_component,
            columns: dict.get_int(COLUMNS, 1).max(1) as usize,
        }
    }

    fn bits_per_pixel(&self) -> usize {
        self.colors * self.bits_per_component
    }

    fn bytes_per_pixel(&self) -> usize {
        self.bits_per_pixel().div_ceil(8)
    }

    /// The number of bytes in a row, capped at `data_len`.
    ///
    /// A row longer than the whole data can only be a partial one, and
    /// decoding it is the same as decoding a row of `data_len` bytes.
    fn row_length(&self, data_len: usize) -> Result<usize> {
        let bits = self.columns.checked_mul(self.bits_per_pixel()).ok_or_else(|| {
            Error::codec(
                "Predictor",
                format!("row of {} columns is too long", self.columns),
            )
        })?;

        Ok(bits.div_ceil(8).min(data_len))
    }
}

/// Undo the prediction described by `params`.
pub(crate) fn apply(data: Vec<u8>, params: &PredictorParams) -> Result<Vec<u8>> {
    if data.is_empty() {
        return Ok(data);
    }

    match params.predictor {
        1 => Ok(data),
        2 => tiff(data, params),
        10..=15 => png(&data, params),
        _other => {
            lwarn!("unknown predictor {}, leaving data unchanged", _other);

            Ok(data)
        }
    }
}

/// Apply the prediction described by `params`, so that [`apply`] restores
/// `data`.
///
/// PNG predictors 10 to 14 tag every row with their own filter type, 15
/// (which lets the encoder choose per row) uses the up filter.
pub(crate) fn predict(data: Vec<u8>, params: &PredictorParams) -> Result<Vec<u8>> {
    if data.is_empty() {
        return Ok(data);
    }

    match params.predictor {
        1 => Ok(data),
        2 => tiff_predict(data, params),
        10..=15 => png_predict(&data, params),
        _other => {
            lwarn!("unknown predictor {}, leaving data unchanged", _other);

            Ok(data)
        }
    }
}

fn png_predict(data: &[u8], params: &PredictorParams) -> Result<Vec<u8>> {
    let row_length = params.row_length(data.len())?;
    let bpp = params.bytes_per_pixel();
    let tag = match params.predictor {
        10 => 0,
        11 => 1,
        13 => 3,
        14 => 4,
        _ => 2,
    };

    let mut out = Vec::with_capacity(data.len() + data.len() / row_length + 1);
    let mut prev = vec![0; row_length];
    let mut cur = vec![0; row_length];

    for row in data.chunks(row_length) {
        cur[..row.len()].copy_from_slice(row);
        cur[row.len()..].fill(0);

        out.push(tag);

        for i in 0..row.len() {
            let left = if i >= bpp { cur[i - bpp] } else { 0 };
            let upper_left = if i >= bpp { prev[i - bpp] } else { 0 };

            let prediction = match tag {
                0 => 0,
                1 => left,
                2 => prev[i],
                3 => ((left as u16 + prev[i] as u16) / 2) as u8,
                _ => paeth(left, prev[i], upper_left),
            };

            out.push(cur[i].wrapping_sub(prediction));
        }

        std::mem::swap(&mut prev, &mut cur);
    }

    Ok(out)
}

fn png(data: &[u8], params: &PredictorParams) -> Result<Vec<u8>> {
    let row_length = params.row_length(data.len())?;
    let bpp = params.bytes_per_pixel();

    let mut out = Vec::with_capacity(data.len());
    let mut prev = vec![0; row_length];
    let mut cur = vec![0; row_length];

    // Each row is prefixed with the PNG filter type that was used for it.
    for chunk in data.chunks(row_length + 1) {
        let (tag, row) = (chunk[0], &chunk[1..]);
        cur[..row.len()].copy_from_slice(row);
        cur[row.len()..].fill(0);

        match tag {
            0 => {}
            1 => {
                for i in bpp..row_length {
                    cur[i] = cur[i].wrapping_add(cur[i - bpp]);
                }
            }
            2 => {
                for i in 0..row_length {
                    cur[i] = cur[i].wrapping_add(prev[i]);
                }
            }
            3 => {
                for i in 0..row_length {
                    let left = if i >= bpp { cur[i - bpp] } else { 0 };
                    let average = (left as u16 + prev[i] as u16) / 2;
                    cur[i] = cur[i].wrapping_add(average as u8);
                }
            }
            4 => {
                for i in 0..row_length {
                    let (left, upper_left) = if i >= bpp {
                        (cur[i - bpp], prev[i - bpp])
                    } else {
                        (0, 0)
                    };
                    cur[i] = cur[i].wrapping_add(paeth(left, prev[i], upper_left));
                }
            }
            _tag => {
                lwarn!("invalid PNG filter type {}, treating row as unfiltered", _tag);
            }
        }

        out.extend_from_slice(&cur[..row.len()]);
        std::mem::swap(&mut prev, &mut cur);
    }

    Ok(out)
}

fn paeth(a: u8, b: u8, c: u8) -> u8 {
    let p = a as i16 + b as i16 - c as i16;
    let pa = (p - a as i16).abs();
    let pb = (p - b as i16).abs();
    let pc = (p - c as i16).abs();

    if pa <= pb && pa <= pc {
        a
    } else if pb <= pc {
        b
    } else {
        c
    }
}

fn tiff(mut data: Vec<u8>, params: &PredictorParams) -> Result<Vec<u8>> {
    let row_length = params.row_length(data.len())?;
    let colors = params.colors;

    for row in data.chunks_mut(row_length) {
        match params.bits_per_component {
            8 => {
                for i in colors..row.len() {
                    row[i] = row[i].wrapping_add(row[i - colors]);
                }
            }
            16 => {
                let step = 2 * colors;
                let mut i = step;

                while i + 1 < row.len() {
                    let left = u16::from_be_bytes([row[i - step], row[i - step + 1]]);
                    let value = u16::from_be_bytes([row[i], row[i + 1]]).wrapping_add(left);
                    row[i..i + 2].copy_from_slice(&value.to_be_bytes());
                    i += 2;
                }
            }
            bpc => {
                let samples = (row.len() * 8 / bpc).min(params.columns.saturating_mul(colors));
                let mask = (1u16 << bpc) - 1;

                for s in colors..samples {
                    let left = sample(row, s - colors, bpc);
                    let value = (sample(row, s, bpc) as u16 + left as u16) & mask;
                    set_sample(row, s, bpc, value as u8);
                }
            }
        }
    }

    Ok(data)
}

fn tiff_predict(mut data: Vec<u8>, params: &PredictorParams) -> Result<Vec<u8>> {
    let row_length = params.row_length(data.len())?;
    let colors = params.colors;

    // Rows are differenced back to front, so every left neighbour is still
    // the original sample.
    for row in data.chunks_mut(row_length) {
        match params.bits_per_component {
            8 => {
                for i in (colors..row.len()).rev() {
                    row[i] = row[i].wrapping_sub(row[i - colors]);
                }
            }
            16 => {
                let step = 2 * colors;
                let mut i = step;
                while i + 1 < row.len() {
                    i += 2;
                }

                while i >= step + 2 {
                    i -= 2;
                    let left = u16::from_be_bytes([row[i - step], row[i - step + 1]]);
                    let value = u16::from_be_bytes([row[i], row[i + 1]]).wrapping_sub(left);
                    row[i..i + 2].copy_from_slice(&value.to_be_bytes());
                }
            }
            bpc => {
                let samples = (row.len() * 8 / bpc).min(params.columns.saturating_mul(colors));
                let mask = (1u16 << bpc) - 1;

                for s in (colors..samples).rev() {
                    let left = sample(row, s - colors, bpc);
                    let value = (sample(row, s, bpc) as u16).wrapping_sub(left as u16) & mask;
                    set_sample(row, s, bpc, value as u8);
                }
            }
        }
    }

    Ok(data)
}

fn sample(row: &[u8], index: usize, bpc: usize) -> u8 {
    let bit = index * bpc;
    let shift = 8 - bpc - bit % 8;

    (row[bit / 8] >> shift) & ((1u16 << bpc) - 1) as u8
}

fn set_sample(row: &mut [u8], index: usize, bpc: usize, value: u8) {
    let bit = index * bpc;
    let shift = 8 - bpc - bit % 8;
    let mask = (((1u16 << bpc) - 1) as u8) << shift;

    row[bit / 8] = (row[bit / 8] & !mask) | ((value << shift) & mask);
}

#[cfg(test)]
mod tests {
    use super::{PredictorParams, apply, predict};
    use crate::error::Error;
    use crate::object::Dict;
    use crate::object::keys::{BITS_PER_COMPONENT, COLORS, COLUMNS, PREDICTOR};

    fn params(predictor: i64, colors: i64, bpc: i64, columns: i64) -> PredictorParams {
        let mut dict = Dict::new();
        dict.set_int(PREDICTOR, predictor);
        dict.set_int(COLORS, colors);
        dict.set_int(BITS_PER_COMPONENT, bpc);
        dict.set_int(COLUMNS, columns);

        PredictorParams::from_params(&dict)
    }

    #[test]
    fn no_predictor() {
        let data = vec![1, 2, 3];
        assert_eq!(apply(data.clone(), &params(1, 1, 8, 1)).unwrap(), data);
    }

    #[test]
    fn png_up() {
        let data = vec![2, 1, 2, 3, 2, 1, 1, 1, 2, 0, 0, 0];
        assert_eq!(
            apply(data, &params(12, 1, 8, 3)).unwrap(),
            vec![1, 2, 3, 2, 3, 4, 2, 3, 4]
        );
    }

    #[test]
    fn png_sub_and_none() {
        let data = vec![1, 5, 1, 1, 0, 7, 8, 9];
        assert_eq!(apply(data, &params(11, 1, 8, 3)).unwrap(), vec![5, 6, 7, 7, 8, 9]);
    }

    #[test]
    fn png_average() {
        let data = vec![0, 10, 20, 3, 1, 1];
        // Second row: 1 + (0 + 10) / 2 = 6, 1 + (6 + 20) / 2 = 14.
        assert_eq!(apply(data, &params(13, 1, 8, 2)).unwrap(), vec![10, 20, 6, 14]);
    }

    #[test]
    fn png_paeth() {
        let data = vec![0, 10, 20, 4, 1, 1];
        // Upper left is zero for the first byte, so the prediction is up.
        // For the second byte, p = 11 + 20 - 10 = 21, closest is up (20).
        assert_eq!(apply(data, &params(15, 1, 8, 2)).unwrap(), vec![10, 20, 11, 21]);
    }

    #[test]
    fn png_partial_last_row() {
        let data = vec![0, 1, 2, 3, 2, 1];
        assert_eq!(apply(data, &params(10, 1, 8, 3)).unwrap(), vec![1, 2, 3, 2]);
    }

    #[test]
    fn png_multiple_colors() {
        let data = vec![1, 10, 20, 1, 1];
        assert_eq!(apply(data, &params(11, 2, 8, 2)).unwrap(), vec![10, 20, 11, 21]);
    }

    #[test]
    fn tiff_8_bit() {
        let data = vec![1, 1, 1, 5, 5, 5];
        assert_eq!(apply(data, &params(2, 1, 8, 3)).unwrap(), vec![1, 2, 3, 5, 10, 15]);
    }

    #[test]
    fn tiff_16_bit() {
        let data = vec![0x01, 0x00, 0x00, 0x01];
        assert_eq!(apply(data, &params(2, 1, 16, 2)).unwrap(), vec![0x01, 0x00, 0x01, 0x01]);
    }

    #[test]
    fn tiff_4_bit() {
        let data = vec![0x11, 0x11];
        assert_eq!(apply(data, &params(2, 1, 4, 4)).unwrap(), vec![0x12, 0x34]);
    }

    #[test]
    fn overlong_row() {
        let data = vec![2, 1, 2, 3];
        assert!(matches!(
            apply(data, &params(12, 1, 8, i64::MAX)),
            Err(Error::Codec { .. })
        ));
    }

    #[test]
    fn row_longer_than_data() {
        let data = vec![1, 1, 1, 1];
        assert_eq!(apply(data.clone(), &params(11, 1, 8, 1 << 40)).unwrap(), vec![1, 2, 3]);
        assert_eq!(apply(data, &params(2, 1, 8, 1 << 40)).unwrap(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn empty_data() {
        assert!(apply(vec![], &params(12, 3, 8, 100)).unwrap().is_empty());
        assert!(apply(vec![], &params(2, 3, 8, 100)).unwrap().is_empty());
    }

    #[test]
    fn png_prediction_is_undone() {
        let data: Vec<u8> = (0..23_u8).map(|i| i.wrapping_mul(37)).collect();

        for predictor in 10..=15 {
            let params = params(predictor, 3, 8, 2);
            let predicted = predict(data.clone(), &params).unwrap();
            assert_eq!(apply(predicted, &params).unwrap(), data, "predictor {predictor}");
        }
    }

    #[test]
    fn png_prediction_tags_rows() {
        let predicted = predict(vec![1, 2, 3, 2, 3, 4], &params(12, 1, 8, 3)).unwrap();
        assert_eq!(predicted, vec![2, 1, 2, 3, 2, 1, 1, 1]);
    }

    #[test]
    fn tiff_prediction_is_undone() {
        let data: Vec<u8> = (0..13_u8).map(|i| i.wrapping_mul(91)).collect();

        for bpc in [1, 2, 4, 8, 16] {
            let params = params(2, 2, bpc, 3);
            let predicted = predict(data.clone(), &params).unwrap();
            assert_eq!(apply(predicted, &params).unwrap(), data, "{bpc} bits");
        }
    }

    #[test]
    fn unknown_predictor() {
        let data = vec![9, 9];
        assert_eq!(apply(data.clone(), &params(7, 1, 8, 1)).unwrap(), data);
    }
}
