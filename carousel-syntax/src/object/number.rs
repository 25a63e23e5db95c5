//! Integer and real numbers.

use std::fmt;

/// A PDF number.
///
/// Integers and reals are kept apart, since writers must reproduce integers
/// without a fractional part.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// An integer.
    Integer(i64),
    /// A real number.
    Real(f64),
}

impl Number {
    /// Interpret a number token.
    ///
    /// The conversion is lenient: a lone sign or decimal point yields zero,
    /// exponents are accepted, misplaced minus signs are repaired and
    /// integers that don't fit into 64 bits are clamped.
    pub fn from_token(token: &[u8]) -> Self {
        if token.len() == 1 {
            return match token[0] {
                b @ b'0'..=b'9' => Self::Integer((b - b'0') as i64),
                _ => Self::Integer(0),
            };
        }

        let text = String::from_utf8_lossy(token);

        if text.contains(['.', 'e', 'E']) {
            return Self::Real(parse_real(&text));
        }

        match text.parse::<i64>() {
            Ok(value) => Self::Integer(value),
            Err(_) => {
                let digits = text.trim_start_matches(['+', '-']);

                if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
                    let clamped = if text.starts_with('-') {
                        i64::MIN
                    } else {
                        i64::MAX
                    };

                    lwarn!("integer {} is out of range, clamping to {}", text, clamped);

                    Self::Integer(clamped)
                } else {
                    lwarn!("invalid number {}, using real interpretation", text);

                    Self::Real(parse_real(&text))
                }
            }
        }
    }

    /// The value as an integer, truncating reals.
    pub fn as_i64(&self) -> i64 {
        match *self {
            Self::Integer(i) => i,
            Self::Real(r) => r as i64,
        }
    }

    /// The value as a float.
    pub fn as_f64(&self) -> f64 {
        match *self {
            Self::Integer(i) => i as f64,
            Self::Real(r) => r,
        }
    }

    /// The value as a single-precision float.
    pub fn as_f32(&self) -> f32 {
        self.as_f64() as f32
    }

    /// Whether this number is an integer.
    pub fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(_))
    }

    /// Append the PDF representation of the number to `out`.
    ///
    /// Reals are written without an exponent and always with a decimal
    /// point.
    pub fn write_pdf(&self, out: &mut Vec<u8>) {
        match *self {
            Self::Integer(i) => out.extend_from_slice(i.to_string().as_bytes()),
            Self::Real(r) => {
                let r = if r.is_finite() { r } else { 0.0 };
                let text = format!("{r}");
                out.extend_from_slice(text.as_bytes());

                if !text.contains('.') {
                    out.extend_from_slice(b".0");
                }
            }
        }
    }
}

fn parse_real(text: &str) -> f64 {
    let value = text.parse::<f64>().or_else(|_| {
        // Some producers emit things like `0.-5` or `--3.2`.
        let negative = text.contains('-');
        let repaired: String = text.chars().filter(|c| *c != '-').collect();

        repaired
            .parse::<f64>()
            .map(|v| if negative { -v } else { v })
    });

    match value {
        Ok(v) if v == f64::INFINITY => f64::MAX,
        Ok(v) if v == f64::NEG_INFINITY => f64::MIN,
        Ok(v) if v.is_nan() => 0.0,
        Ok(v) => v,
        Err(_) => {
            lwarn!("failed to parse real number {}", text);

            0.0
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Self::Integer(value as i64)
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Self::Integer(value as i64)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Self::Real(value as f64)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = vec![];
        self.write_pdf(&mut out);
        f.write_str(&String::from_utf8_lossy(&out))
    }
}

#[cfg(test)]
mod tests {
    use super::Number;

    #[test]
    fn integers() {
        assert_eq!(Number::from_token(b"0"), Number::Integer(0));
        assert_eq!(Number::from_token(b"7"), Number::Integer(7));
        assert_eq!(Number::from_token(b"+17"), Number::Integer(17));
        assert_eq!(Number::from_token(b"-98"), Number::Integer(-98));
        assert_eq!(Number::from_token(b"00043"), Number::Integer(43));
    }

    #[test]
    fn reals() {
        assert_eq!(Number::from_token(b"34.5"), Number::Real(34.5));
        assert_eq!(Number::from_token(b"-3.62"), Number::Real(-3.62));
        assert_eq!(Number::from_token(b"+123.6"), Number::Real(123.6));
        assert_eq!(Number::from_token(b"4."), Number::Real(4.0));
        assert_eq!(Number::from_token(b"-.002"), Number::Real(-0.002));
        assert_eq!(Number::from_token(b"1e3"), Number::Real(1000.0));
        assert_eq!(Number::from_token(b"2.5E-1"), Number::Real(0.25));
    }

    #[test]
    fn lone_sign_or_dot() {
        assert_eq!(Number::from_token(b"-"), Number::Integer(0));
        assert_eq!(Number::from_token(b"."), Number::Integer(0));
        assert_eq!(Number::from_token(b"+"), Number::Integer(0));
    }

    #[test]
    fn misplaced_minus() {
        assert_eq!(Number::from_token(b"0.-5"), Number::Real(-0.5));
        assert_eq!(Number::from_token(b"--3.2"), Number::Real(-3.2));
    }

    #[test]
    fn clamped() {
        assert_eq!(
            Number::from_token(b"99999999999999999999999"),
            Number::Integer(i64::MAX)
        );
        assert_eq!(
            Number::from_token(b"-99999999999999999999999"),
            Number::Integer(i64::MIN)
        );
    }

    #[test]
    fn coercions() {
        assert_eq!(Number::Real(3.9).as_i64(), 3);
        assert_eq!(Number::Integer(-4).as_f64(), -4.0);
        assert!(Number::Integer(1).is_integer());
        assert!(!Number::Real(1.0).is_integer());
    }

    #[test]
    fn write() {
        assert_eq!(Number::Integer(-12).to_string(), "-12");
        assert_eq!(Number::Real(1.0).to_string(), "1.0");
        assert_eq!(Number::Real(0.25).to_string(), "0.25");
        assert_eq!(Number::Real(1e20).to_string(), "100000000000000000000.0");
        assert_eq!(Number::Real(1e-7).to_string(), "0.0000001");
    }

    #[test]
    fn text_roundtrip() {
        for i in [0, 1, -1, 42, i64::MAX, i64::MIN, 1 << 40] {
            let n = Number::Integer(i);
            assert_eq!(Number::from_token(n.to_string().as_bytes()).as_i64(), i);
        }

        for r in [0.5, -0.125, 3.25, 1234.5678, 1e-5, 7.0] {
            let n = Number::Real(r);
            assert_eq!(Number::from_token(n.to_string().as_bytes()).as_f64(), r);
        }
    }
}
