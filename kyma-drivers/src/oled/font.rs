//! 8x16 ASCII glyph table
//!
//! 95 printable characters (space through tilde), 16 bytes each: the first
//! 8 bytes are the upper page's column bitmaps, the next 8 the lower
//! page's, left to right, LSB at the top of each 8-pixel band.

/// Bytes per glyph (8 columns x 2 pages)
pub const GLYPH_BYTES: usize = 16;
/// First character in the table
pub const FIRST_CHAR: u8 = b' ';
/// Number of glyphs in the table
pub const GLYPH_COUNT: usize = 95;

/// Look up a character's glyph, indexed by `code - b' '`.
///
/// Characters outside the printable ASCII range render as the blank glyph
/// rather than indexing out of bounds.
pub fn glyph(ch: char) -> &'static [u8; GLYPH_BYTES] {
    let index = (ch as u32).wrapping_sub(FIRST_CHAR as u32) as usize;
    if index < GLYPH_COUNT {
        &FONT_8X16[index]
    } else {
        &FONT_8X16[0]
    }
}

/// Fixed font bitmap asset
pub static FONT_8X16: [[u8; GLYPH_BYTES]; GLYPH_COUNT] = [
    // ' '
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '!'
    [0x00, 0x00, 0x00, 0xFE, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x67, 0x00, 0x00, 0x00, 0x00],
    // '"'
    [0x00, 0x00, 0x7E, 0x00, 0x7E, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '#'
    [0x00, 0x60, 0xFE, 0x60, 0xFE, 0x60, 0x00, 0x00, 0x00, 0x06, 0x7F, 0x06, 0x7F, 0x06, 0x00, 0x00],
    // '$'
    [0x00, 0x60, 0x98, 0xFE, 0x98, 0x18, 0x00, 0x00, 0x00, 0x18, 0x19, 0x7F, 0x19, 0x06, 0x00, 0x00],
    // '%'
    [0x00, 0x1E, 0x1E, 0x80, 0x60, 0x18, 0x00, 0x00, 0x00, 0x18, 0x06, 0x01, 0x78, 0x78, 0x00, 0x00],
    // '&'
    [0x00, 0x78, 0x86, 0x66, 0x18, 0x00, 0x00, 0x00, 0x00, 0x1E, 0x61, 0x66, 0x18, 0x66, 0x00, 0x00],
    // '\''
    [0x00, 0x00, 0x66, 0x1E, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '('
    [0x00, 0x00, 0xE0, 0x18, 0x06, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07, 0x18, 0x60, 0x00, 0x00, 0x00],
    // ')'
    [0x00, 0x00, 0x06, 0x18, 0xE0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x60, 0x18, 0x07, 0x00, 0x00, 0x00],
    // '*'
    [0x00, 0x60, 0x80, 0xF8, 0x80, 0x60, 0x00, 0x00, 0x00, 0x06, 0x01, 0x1F, 0x01, 0x06, 0x00, 0x00],
    // '+'
    [0x00, 0x80, 0x80, 0xF8, 0x80, 0x80, 0x00, 0x00, 0x00, 0x01, 0x01, 0x1F, 0x01, 0x01, 0x00, 0x00],
    // ','
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x66, 0x1E, 0x00, 0x00, 0x00, 0x00],
    // '-'
    [0x00, 0x80, 0x80, 0x80, 0x80, 0x80, 0x00, 0x00, 0x00, 0x01, 0x01, 0x01, 0x01, 0x01, 0x00, 0x00],
    // '.'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x78, 0x78, 0x00, 0x00, 0x00, 0x00],
    // '/'
    [0x00, 0x00, 0x00, 0x80, 0x60, 0x18, 0x00, 0x00, 0x00, 0x18, 0x06, 0x01, 0x00, 0x00, 0x00, 0x00],
    // '0'
    [0x00, 0xF8, 0x06, 0x86, 0x66, 0xF8, 0x00, 0x00, 0x00, 0x1F, 0x66, 0x61, 0x60, 0x1F, 0x00, 0x00],
    // '1'
    [0x00, 0x00, 0x18, 0xFE, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x60, 0x7F, 0x60, 0x00, 0x00, 0x00],
    // '2'
    [0x00, 0x18, 0x06, 0x06, 0x86, 0x78, 0x00, 0x00, 0x00, 0x60, 0x78, 0x66, 0x61, 0x60, 0x00, 0x00],
    // '3'
    [0x00, 0x06, 0x06, 0x66, 0x9E, 0x06, 0x00, 0x00, 0x00, 0x18, 0x60, 0x60, 0x61, 0x1E, 0x00, 0x00],
    // '4'
    [0x00, 0x80, 0x60, 0x18, 0xFE, 0x00, 0x00, 0x00, 0x00, 0x07, 0x06, 0x06, 0x7F, 0x06, 0x00, 0x00],
    // '5'
    [0x00, 0x7E, 0x66, 0x66, 0x66, 0x86, 0x00, 0x00, 0x00, 0x18, 0x60, 0x60, 0x60, 0x1F, 0x00, 0x00],
    // '6'
    [0x00, 0xE0, 0x98, 0x86, 0x86, 0x00, 0x00, 0x00, 0x00, 0x1F, 0x61, 0x61, 0x61, 0x1E, 0x00, 0x00],
    // '7'
    [0x00, 0x06, 0x06, 0x86, 0x66, 0x1E, 0x00, 0x00, 0x00, 0x00, 0x7E, 0x01, 0x00, 0x00, 0x00, 0x00],
    // '8'
    [0x00, 0x78, 0x86, 0x86, 0x86, 0x78, 0x00, 0x00, 0x00, 0x1E, 0x61, 0x61, 0x61, 0x1E, 0x00, 0x00],
    // '9'
    [0x00, 0x78, 0x86, 0x86, 0x86, 0xF8, 0x00, 0x00, 0x00, 0x00, 0x61, 0x61, 0x19, 0x07, 0x00, 0x00],
    // ':'
    [0x00, 0x00, 0x78, 0x78, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1E, 0x1E, 0x00, 0x00, 0x00, 0x00],
    // ';'
    [0x00, 0x00, 0x78, 0x78, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x66, 0x1E, 0x00, 0x00, 0x00, 0x00],
    // '<'
    [0x00, 0x80, 0x60, 0x18, 0x06, 0x00, 0x00, 0x00, 0x00, 0x01, 0x06, 0x18, 0x60, 0x00, 0x00, 0x00],
    // '='
    [0x00, 0x60, 0x60, 0x60, 0x60, 0x60, 0x00, 0x00, 0x00, 0x06, 0x06, 0x06, 0x06, 0x06, 0x00, 0x00],
    // '>'
    [0x00, 0x00, 0x06, 0x18, 0x60, 0x80, 0x00, 0x00, 0x00, 0x00, 0x60, 0x18, 0x06, 0x01, 0x00, 0x00],
    // '?'
    [0x00, 0x18, 0x06, 0x06, 0x86, 0x78, 0x00, 0x00, 0x00, 0x00, 0x00, 0x66, 0x01, 0x00, 0x00, 0x00],
    // '@'
    [0x00, 0x18, 0x86, 0x86, 0x06, 0xF8, 0x00, 0x00, 0x00, 0x1E, 0x61, 0x7F, 0x60, 0x1F, 0x00, 0x00],
    // 'A'
    [0x00, 0xF8, 0x06, 0x06, 0x06, 0xF8, 0x00, 0x00, 0x00, 0x7F, 0x06, 0x06, 0x06, 0x7F, 0x00, 0x00],
    // 'B'
    [0x00, 0xFE, 0x86, 0x86, 0x86, 0x78, 0x00, 0x00, 0x00, 0x7F, 0x61, 0x61, 0x61, 0x1E, 0x00, 0x00],
    // 'C'
    [0x00, 0xF8, 0x06, 0x06, 0x06, 0x18, 0x00, 0x00, 0x00, 0x1F, 0x60, 0x60, 0x60, 0x18, 0x00, 0x00],
    // 'D'
    [0x00, 0xFE, 0x06, 0x06, 0x18, 0xE0, 0x00, 0x00, 0x00, 0x7F, 0x60, 0x60, 0x18, 0x07, 0x00, 0x00],
    // 'E'
    [0x00, 0xFE, 0x86, 0x86, 0x86, 0x06, 0x00, 0x00, 0x00, 0x7F, 0x61, 0x61, 0x61, 0x60, 0x00, 0x00],
    // 'F'
    [0x00, 0xFE, 0x86, 0x86, 0x86, 0x06, 0x00, 0x00, 0x00, 0x7F, 0x01, 0x01, 0x01, 0x00, 0x00, 0x00],
    // 'G'
    [0x00, 0xF8, 0x06, 0x86, 0x86, 0x98, 0x00, 0x00, 0x00, 0x1F, 0x60, 0x61, 0x61, 0x7F, 0x00, 0x00],
    // 'H'
    [0x00, 0xFE, 0x80, 0x80, 0x80, 0xFE, 0x00, 0x00, 0x00, 0x7F, 0x01, 0x01, 0x01, 0x7F, 0x00, 0x00],
    // 'I'
    [0x00, 0x00, 0x06, 0xFE, 0x06, 0x00, 0x00, 0x00, 0x00, 0x00, 0x60, 0x7F, 0x60, 0x00, 0x00, 0x00],
    // 'J'
    [0x00, 0x00, 0x00, 0x06, 0xFE, 0x06, 0x00, 0x00, 0x00, 0x18, 0x60, 0x60, 0x1F, 0x00, 0x00, 0x00],
    // 'K'
    [0x00, 0xFE, 0x80, 0x60, 0x18, 0x06, 0x00, 0x00, 0x00, 0x7F, 0x01, 0x06, 0x18, 0x60, 0x00, 0x00],
    // 'L'
    [0x00, 0xFE, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x7F, 0x60, 0x60, 0x60, 0x60, 0x00, 0x00],
    // 'M'
    [0x00, 0xFE, 0x18, 0xE0, 0x18, 0xFE, 0x00, 0x00, 0x00, 0x7F, 0x00, 0x01, 0x00, 0x7F, 0x00, 0x00],
    // 'N'
    [0x00, 0xFE, 0x60, 0x80, 0x00, 0xFE, 0x00, 0x00, 0x00, 0x7F, 0x00, 0x01, 0x06, 0x7F, 0x00, 0x00],
    // 'O'
    [0x00, 0xF8, 0x06, 0x06, 0x06, 0xF8, 0x00, 0x00, 0x00, 0x1F, 0x60, 0x60, 0x60, 0x1F, 0x00, 0x00],
    // 'P'
    [0x00, 0xFE, 0x86, 0x86, 0x86, 0x78, 0x00, 0x00, 0x00, 0x7F, 0x01, 0x01, 0x01, 0x00, 0x00, 0x00],
    // 'Q'
    [0x00, 0xF8, 0x06, 0x06, 0x06, 0xF8, 0x00, 0x00, 0x00, 0x1F, 0x60, 0x66, 0x18, 0x67, 0x00, 0x00],
    // 'R'
    [0x00, 0xFE, 0x86, 0x86, 0x86, 0x78, 0x00, 0x00, 0x00, 0x7F, 0x01, 0x07, 0x19, 0x60, 0x00, 0x00],
    // 'S'
    [0x00, 0x78, 0x86, 0x86, 0x86, 0x06, 0x00, 0x00, 0x00, 0x60, 0x61, 0x61, 0x61, 0x1E, 0x00, 0x00],
    // 'T'
    [0x00, 0x06, 0x06, 0xFE, 0x06, 0x06, 0x00, 0x00, 0x00, 0x00, 0x00, 0x7F, 0x00, 0x00, 0x00, 0x00],
    // 'U'
    [0x00, 0xFE, 0x00, 0x00, 0x00, 0xFE, 0x00, 0x00, 0x00, 0x1F, 0x60, 0x60, 0x60, 0x1F, 0x00, 0x00],
    // 'V'
    [0x00, 0xFE, 0x00, 0x00, 0x00, 0xFE, 0x00, 0x00, 0x00, 0x07, 0x18, 0x60, 0x18, 0x07, 0x00, 0x00],
    // 'W'
    [0x00, 0xFE, 0x00, 0x80, 0x00, 0xFE, 0x00, 0x00, 0x00, 0x1F, 0x60, 0x1F, 0x60, 0x1F, 0x00, 0x00],
    // 'X'
    [0x00, 0x1E, 0x60, 0x80, 0x60, 0x1E, 0x00, 0x00, 0x00, 0x78, 0x06, 0x01, 0x06, 0x78, 0x00, 0x00],
    // 'Y'
    [0x00, 0x7E, 0x80, 0x00, 0x80, 0x7E, 0x00, 0x00, 0x00, 0x00, 0x01, 0x7E, 0x01, 0x00, 0x00, 0x00],
    // 'Z'
    [0x00, 0x06, 0x06, 0x86, 0x66, 0x1E, 0x00, 0x00, 0x00, 0x78, 0x66, 0x61, 0x60, 0x60, 0x00, 0x00],
    // '['
    [0x00, 0x00, 0xFE, 0x06, 0x06, 0x00, 0x00, 0x00, 0x00, 0x00, 0x7F, 0x60, 0x60, 0x00, 0x00, 0x00],
    // '\\'
    [0x00, 0x18, 0x60, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x06, 0x18, 0x00, 0x00],
    // ']'
    [0x00, 0x00, 0x06, 0x06, 0xFE, 0x00, 0x00, 0x00, 0x00, 0x00, 0x60, 0x60, 0x7F, 0x00, 0x00, 0x00],
    // '^'
    [0x00, 0x60, 0x18, 0x06, 0x18, 0x60, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '_'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x60, 0x60, 0x60, 0x60, 0x60, 0x00, 0x00],
    // '`'
    [0x00, 0x00, 0x06, 0x18, 0x60, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // 'a'
    [0x00, 0x00, 0x60, 0x60, 0x60, 0x80, 0x00, 0x00, 0x00, 0x18, 0x66, 0x66, 0x66, 0x7F, 0x00, 0x00],
    // 'b'
    [0x00, 0xFE, 0x80, 0x60, 0x60, 0x80, 0x00, 0x00, 0x00, 0x7F, 0x61, 0x60, 0x60, 0x1F, 0x00, 0x00],
    // 'c'
    [0x00, 0x80, 0x60, 0x60, 0x60, 0x00, 0x00, 0x00, 0x00, 0x1F, 0x60, 0x60, 0x60, 0x18, 0x00, 0x00],
    // 'd'
    [0x00, 0x80, 0x60, 0x60, 0x80, 0xFE, 0x00, 0x00, 0x00, 0x1F, 0x60, 0x60, 0x61, 0x7F, 0x00, 0x00],
    // 'e'
    [0x00, 0x80, 0x60, 0x60, 0x60, 0x80, 0x00, 0x00, 0x00, 0x1F, 0x66, 0x66, 0x66, 0x07, 0x00, 0x00],
    // 'f'
    [0x00, 0x80, 0xF8, 0x86, 0x06, 0x18, 0x00, 0x00, 0x00, 0x01, 0x7F, 0x01, 0x00, 0x00, 0x00, 0x00],
    // 'g'
    [0x00, 0xE0, 0x18, 0x18, 0x18, 0xF8, 0x00, 0x00, 0x00, 0x01, 0x66, 0x66, 0x66, 0x1F, 0x00, 0x00],
    // 'h'
    [0x00, 0xFE, 0x80, 0x60, 0x60, 0x80, 0x00, 0x00, 0x00, 0x7F, 0x01, 0x00, 0x00, 0x7F, 0x00, 0x00],
    // 'i'
    [0x00, 0x00, 0x60, 0xE6, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x60, 0x7F, 0x60, 0x00, 0x00, 0x00],
    // 'j'
    [0x00, 0x00, 0x00, 0x60, 0xE6, 0x00, 0x00, 0x00, 0x00, 0x18, 0x60, 0x60, 0x1F, 0x00, 0x00, 0x00],
    // 'k'
    [0x00, 0xFE, 0x00, 0x80, 0x60, 0x00, 0x00, 0x00, 0x00, 0x7F, 0x06, 0x19, 0x60, 0x00, 0x00, 0x00],
    // 'l'
    [0x00, 0x00, 0x06, 0xFE, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x60, 0x7F, 0x60, 0x00, 0x00, 0x00],
    // 'm'
    [0x00, 0xE0, 0x60, 0x80, 0x60, 0x80, 0x00, 0x00, 0x00, 0x7F, 0x00, 0x07, 0x00, 0x7F, 0x00, 0x00],
    // 'n'
    [0x00, 0xE0, 0x80, 0x60, 0x60, 0x80, 0x00, 0x00, 0x00, 0x7F, 0x01, 0x00, 0x00, 0x7F, 0x00, 0x00],
    // 'o'
    [0x00, 0x80, 0x60, 0x60, 0x60, 0x80, 0x00, 0x00, 0x00, 0x1F, 0x60, 0x60, 0x60, 0x1F, 0x00, 0x00],
    // 'p'
    [0x00, 0xE0, 0x60, 0x60, 0x60, 0x80, 0x00, 0x00, 0x00, 0x7F, 0x06, 0x06, 0x06, 0x01, 0x00, 0x00],
    // 'q'
    [0x00, 0x80, 0x60, 0x60, 0x80, 0xE0, 0x00, 0x00, 0x00, 0x01, 0x06, 0x06, 0x07, 0x7F, 0x00, 0x00],
    // 'r'
    [0x00, 0xE0, 0x80, 0x60, 0x60, 0x80, 0x00, 0x00, 0x00, 0x7F, 0x01, 0x00, 0x00, 0x01, 0x00, 0x00],
    // 's'
    [0x00, 0x80, 0x60, 0x60, 0x60, 0x00, 0x00, 0x00, 0x00, 0x61, 0x66, 0x66, 0x66, 0x18, 0x00, 0x00],
    // 't'
    [0x00, 0x60, 0xFE, 0x60, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F, 0x60, 0x60, 0x18, 0x00, 0x00],
    // 'u'
    [0x00, 0xE0, 0x00, 0x00, 0x00, 0xE0, 0x00, 0x00, 0x00, 0x1F, 0x60, 0x60, 0x18, 0x7F, 0x00, 0x00],
    // 'v'
    [0x00, 0xE0, 0x00, 0x00, 0x00, 0xE0, 0x00, 0x00, 0x00, 0x07, 0x18, 0x60, 0x18, 0x07, 0x00, 0x00],
    // 'w'
    [0x00, 0xE0, 0x00, 0x00, 0x00, 0xE0, 0x00, 0x00, 0x00, 0x1F, 0x60, 0x1E, 0x60, 0x1F, 0x00, 0x00],
    // 'x'
    [0x00, 0x60, 0x80, 0x00, 0x80, 0x60, 0x00, 0x00, 0x00, 0x60, 0x19, 0x06, 0x19, 0x60, 0x00, 0x00],
    // 'y'
    [0x00, 0xE0, 0x00, 0x00, 0x00, 0xE0, 0x00, 0x00, 0x00, 0x01, 0x66, 0x66, 0x66, 0x1F, 0x00, 0x00],
    // 'z'
    [0x00, 0x60, 0x60, 0x60, 0xE0, 0x60, 0x00, 0x00, 0x00, 0x60, 0x78, 0x66, 0x61, 0x60, 0x00, 0x00],
    // '{'
    [0x00, 0x00, 0x80, 0x78, 0x06, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x1E, 0x60, 0x00, 0x00, 0x00],
    // '|'
    [0x00, 0x00, 0x00, 0xFE, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x7F, 0x00, 0x00, 0x00, 0x00],
    // '}'
    [0x00, 0x00, 0x06, 0x78, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x60, 0x1E, 0x01, 0x00, 0x00, 0x00],
    // '~'
    [0x00, 0x80, 0x60, 0x80, 0x00, 0x80, 0x00, 0x00, 0x00, 0x01, 0x00, 0x01, 0x06, 0x01, 0x00, 0x00],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn printable_ascii_maps_onto_the_table() {
        assert_eq!(glyph(' '), &FONT_8X16[0]);
        assert_eq!(glyph('0'), &FONT_8X16[(b'0' - b' ') as usize]);
        assert_eq!(glyph('~'), &FONT_8X16[GLYPH_COUNT - 1]);
    }

    #[test]
    fn out_of_range_characters_render_blank() {
        assert_eq!(glyph('\n'), &FONT_8X16[0]);
        assert_eq!(glyph('\u{7f}'), &FONT_8X16[0]);
        assert_eq!(glyph('λ'), &FONT_8X16[0]);
    }

    #[test]
    fn space_is_blank_and_digits_are_not() {
        assert!(glyph(' ').iter().all(|&b| b == 0));
        for ch in '0'..='9' {
            assert!(glyph(ch).iter().any(|&b| b != 0));
        }
    }
}
