//! Character classes of the PDF lexer.

/// Whether `char` is one of the six PDF white-space characters.
#[inline(always)]
pub fn is_white_space_character(char: u8) -> bool {
    matches!(char, 0x00 | 0x09 | 0x0a | 0x0c | 0x0d | 0x20)
}

/// Whether `char` is a delimiter character.
#[inline(always)]
pub fn is_delimiter_character(char: u8) -> bool {
    matches!(
        char,
        b'(' | b')' | b'<' | b'>' | b'[' | b']' | b'{' | b'}' | b'/' | b'%'
    )
}

/// Whether `char` is neither white space nor a delimiter.
#[inline(always)]
pub fn is_regular_character(char: u8) -> bool {
    !is_white_space_character(char) && !is_delimiter_character(char)
}

#[inline(always)]
pub(crate) fn is_eol_character(char: u8) -> bool {
    matches!(char, 0x0a | 0x0d)
}

/// Whether `char` terminates a name or a bare keyword.
#[inline(always)]
pub(crate) fn is_end_of_name(char: u8) -> bool {
    is_white_space_character(char)
        || matches!(char, b'(' | b')' | b'<' | b'>' | b'[' | b']' | b'/')
}

/// Whether `char` may start a number.
#[inline(always)]
pub(crate) fn is_number_start(char: u8) -> bool {
    char.is_ascii_digit() || matches!(char, b'+' | b'-' | b'.')
}

/// Whether `char` may be part of a number.
#[inline(always)]
pub(crate) fn is_number_character(char: u8) -> bool {
    is_number_start(char) || matches!(char, b'e' | b'E')
}

/// The value of a hexadecimal digit.
#[inline(always)]
pub(crate) fn hex_value(char: u8) -> Option<u8> {
    match char {
        b'0'..=b'9' => Some(char - b'0'),
        b'A'..=b'F' => Some(char - b'A' + 10),
        b'a'..=b'f' => Some(char - b'a' + 10),
        _ => None,
    }
}
