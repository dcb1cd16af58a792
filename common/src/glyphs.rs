//! 8x16 monochrome glyph bitmaps.
//!
//! Each glyph is 16 rows of one byte, most significant bit leftmost. Digits
//! and letters follow the classic VGA 8x16 text font and only store rows
//! 2..=13 (the rest are empty). Two-glyph sprites are stored as 16 rows of
//! `u16`; the high byte is the left glyph, the low byte the right one.
//!
//! Any index without a bitmap renders blank, [`BLANK`] included.

use crate::sprites::{
    BIRD_FLY_1, BIRD_FLY_2, BLANK, CACTUS_LARGE, CACTUS_SMALL, GROUND_BUMP, GROUND_DIP, GROUND_LINE, GROUND_PEBBLES,
    LETTER_A, PLAYER_CROUCH_1, PLAYER_CROUCH_2, PLAYER_DEAD, PLAYER_HIT, PLAYER_RUN_1, PLAYER_RUN_2, PLAYER_STAND,
};

/// Rows per glyph.
pub const GLYPH_HEIGHT: usize = 16;

const LETTER_Z: u8 = LETTER_A + 25;

// =============================================================================
// Text
// =============================================================================

/// First stored row of a text glyph.
const TEXT_TOP: usize = 2;

type TextBitmap = [u8; 12];

#[rustfmt::skip]
const DIGITS: [TextBitmap; 10] = [
    [0x7c, 0xc6, 0xc6, 0xce, 0xde, 0xf6, 0xe6, 0xc6, 0xc6, 0x7c, 0x00, 0x00], // 0
    [0x18, 0x38, 0x78, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x7e, 0x00, 0x00], // 1
    [0x7c, 0xc6, 0x06, 0x0c, 0x18, 0x30, 0x60, 0xc0, 0xc6, 0xfe, 0x00, 0x00], // 2
    [0x7c, 0xc6, 0x06, 0x06, 0x3c, 0x06, 0x06, 0x06, 0xc6, 0x7c, 0x00, 0x00], // 3
    [0x0c, 0x1c, 0x3c, 0x6c, 0xcc, 0xfe, 0x0c, 0x0c, 0x0c, 0x1e, 0x00, 0x00], // 4
    [0xfe, 0xc0, 0xc0, 0xc0, 0xfc, 0x06, 0x06, 0x06, 0xc6, 0x7c, 0x00, 0x00], // 5
    [0x38, 0x60, 0xc0, 0xc0, 0xfc, 0xc6, 0xc6, 0xc6, 0xc6, 0x7c, 0x00, 0x00], // 6
    [0xfe, 0xc6, 0x06, 0x06, 0x0c, 0x18, 0x30, 0x30, 0x30, 0x30, 0x00, 0x00], // 7
    [0x7c, 0xc6, 0xc6, 0xc6, 0x7c, 0xc6, 0xc6, 0xc6, 0xc6, 0x7c, 0x00, 0x00], // 8
    [0x7c, 0xc6, 0xc6, 0xc6, 0x7e, 0x06, 0x06, 0x06, 0x0c, 0x78, 0x00, 0x00], // 9
];

#[rustfmt::skip]
const LETTERS: [TextBitmap; 26] = [
    [0x10, 0x38, 0x6c, 0xc6, 0xc6, 0xfe, 0xc6, 0xc6, 0xc6, 0xc6, 0x00, 0x00], // A
    [0xfc, 0x66, 0x66, 0x66, 0x7c, 0x66, 0x66, 0x66, 0x66, 0xfc, 0x00, 0x00], // B
    [0x3c, 0x66, 0xc2, 0xc0, 0xc0, 0xc0, 0xc0, 0xc2, 0x66, 0x3c, 0x00, 0x00], // C
    [0xf8, 0x6c, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x6c, 0xf8, 0x00, 0x00], // D
    [0xfe, 0x66, 0x62, 0x68, 0x78, 0x68, 0x60, 0x62, 0x66, 0xfe, 0x00, 0x00], // E
    [0xfe, 0x66, 0x62, 0x68, 0x78, 0x68, 0x60, 0x60, 0x60, 0xf0, 0x00, 0x00], // F
    [0x3c, 0x66, 0xc2, 0xc0, 0xc0, 0xde, 0xc6, 0xc6, 0x66, 0x3a, 0x00, 0x00], // G
    [0xc6, 0xc6, 0xc6, 0xc6, 0xfe, 0xc6, 0xc6, 0xc6, 0xc6, 0xc6, 0x00, 0x00], // H
    [0x3c, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x3c, 0x00, 0x00], // I
    [0x1e, 0x0c, 0x0c, 0x0c, 0x0c, 0x0c, 0xcc, 0xcc, 0xcc, 0x78, 0x00, 0x00], // J
    [0xe6, 0x66, 0x66, 0x6c, 0x78, 0x78, 0x6c, 0x66, 0x66, 0xe6, 0x00, 0x00], // K
    [0xf0, 0x60, 0x60, 0x60, 0x60, 0x60, 0x60, 0x62, 0x66, 0xfe, 0x00, 0x00], // L
    [0xc6, 0xee, 0xfe, 0xfe, 0xd6, 0xc6, 0xc6, 0xc6, 0xc6, 0xc6, 0x00, 0x00], // M
    [0xc6, 0xe6, 0xf6, 0xfe, 0xde, 0xce, 0xc6, 0xc6, 0xc6, 0xc6, 0x00, 0x00], // N
    [0x7c, 0xc6, 0xc6, 0xc6, 0xc6, 0xc6, 0xc6, 0xc6, 0xc6, 0x7c, 0x00, 0x00], // O
    [0xfc, 0x66, 0x66, 0x66, 0x7c, 0x60, 0x60, 0x60, 0x60, 0xf0, 0x00, 0x00], // P
    [0x7c, 0xc6, 0xc6, 0xc6, 0xc6, 0xc6, 0xc6, 0xd6, 0xde, 0x7c, 0x0c, 0x0e], // Q
    [0xfc, 0x66, 0x66, 0x66, 0x7c, 0x6c, 0x66, 0x66, 0x66, 0xe6, 0x00, 0x00], // R
    [0x7c, 0xc6, 0xc6, 0x60, 0x38, 0x0c, 0x06, 0xc6, 0xc6, 0x7c, 0x00, 0x00], // S
    [0x7e, 0x7e, 0x5a, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x3c, 0x00, 0x00], // T
    [0xc6, 0xc6, 0xc6, 0xc6, 0xc6, 0xc6, 0xc6, 0xc6, 0xc6, 0x7c, 0x00, 0x00], // U
    [0xc6, 0xc6, 0xc6, 0xc6, 0xc6, 0xc6, 0xc6, 0x6c, 0x38, 0x10, 0x00, 0x00], // V
    [0xc6, 0xc6, 0xc6, 0xc6, 0xd6, 0xd6, 0xd6, 0xfe, 0xee, 0x6c, 0x00, 0x00], // W
    [0xc6, 0xc6, 0x6c, 0x7c, 0x38, 0x38, 0x7c, 0x6c, 0xc6, 0xc6, 0x00, 0x00], // X
    [0x66, 0x66, 0x66, 0x66, 0x3c, 0x18, 0x18, 0x18, 0x18, 0x3c, 0x00, 0x00], // Y
    [0xfe, 0xc6, 0x86, 0x0c, 0x18, 0x30, 0x60, 0xc2, 0xc6, 0xfe, 0x00, 0x00], // Z
];

fn text_row(
    bitmap: &TextBitmap,
    row: usize,
) -> u8 {
    row.checked_sub(TEXT_TOP).and_then(|i| bitmap.get(i)).copied().unwrap_or(0)
}

// =============================================================================
// Sprites
// =============================================================================

/// Single-glyph sprites: (index, rows).
#[rustfmt::skip]
const NARROW: [(u8, [u8; GLYPH_HEIGHT]); 5] = [
    (CACTUS_SMALL, [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x18,
        0x5a, 0x5a, 0x5a, 0x7e, 0x3c, 0x18, 0x18, 0x18,
    ]),
    // Ground tiles keep the upper half empty; the line sits on the first row of the lower half
    (GROUND_LINE, [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0xff, 0x00, 0x00, 0x08, 0x00, 0x00, 0x00, 0x00,
    ]),
    (GROUND_DIP, [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0xc3, 0x3c, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ]),
    (GROUND_BUMP, [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3c,
        0xc3, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ]),
    (GROUND_PEBBLES, [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0xff, 0x00, 0x24, 0x00, 0x81, 0x00, 0x00, 0x00,
    ]),
];

/// Two-glyph sprites: (index of the left glyph, rows).
#[rustfmt::skip]
const WIDE: [(u8, [u16; GLYPH_HEIGHT]); 10] = [
    (CACTUS_LARGE, [
        0x0180, 0x03c0, 0x03c0, 0x03c0, 0x33c0, 0x7bc0, 0x7bcc, 0x7bde,
        0x7fde, 0x3fde, 0x0ffe, 0x03fc, 0x03f0, 0x03c0, 0x03c0, 0x03c0,
    ]),
    (PLAYER_STAND, [
        0x00fe, 0x01bf, 0x01ff, 0x01f0, 0x01fc, 0x83c0, 0x8ff0, 0xdfd0,
        0xffc0, 0x7fc0, 0x3f80, 0x1f00, 0x0f00, 0x0d80, 0x0880, 0x0cc0,
    ]),
    (PLAYER_RUN_1, [
        0x00fe, 0x01bf, 0x01ff, 0x01f0, 0x01fc, 0x83c0, 0x8ff0, 0xdfd0,
        0xffc0, 0x7fc0, 0x3f80, 0x1f00, 0x0f00, 0x0d80, 0x0c00, 0x0e00,
    ]),
    (PLAYER_RUN_2, [
        0x00fe, 0x01bf, 0x01ff, 0x01f0, 0x01fc, 0x83c0, 0x8ff0, 0xdfd0,
        0xffc0, 0x7fc0, 0x3f80, 0x1f00, 0x0f00, 0x0d80, 0x0180, 0x01c0,
    ]),
    (PLAYER_DEAD, [
        0x00fe, 0x01af, 0x01df, 0x01af, 0x01fc, 0x83f8, 0x8fc0, 0xdfd0,
        0xffc0, 0x7fc0, 0x3f80, 0x1f00, 0x0f00, 0x0d80, 0x0880, 0x0cc0,
    ]),
    (BIRD_FLY_1, [
        0x0000, 0x0000, 0x0300, 0x0380, 0x03c0, 0x1be0, 0x3ffc, 0x7ffe,
        0x07f8, 0x03e0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    ]),
    (BIRD_FLY_2, [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1800, 0x3ffc, 0x7ffe,
        0x07f8, 0x03e0, 0x03c0, 0x0380, 0x0300, 0x0000, 0x0000, 0x0000,
    ]),
    (PLAYER_HIT, [
        0x48fe, 0x31bf, 0x49ff, 0x01e0, 0x01f8, 0x83c0, 0x8ff0, 0xdfd0,
        0xffc0, 0x7fc0, 0x3f80, 0x1f00, 0x0f00, 0x0d80, 0x0880, 0x0cc0,
    ]),
    (PLAYER_CROUCH_1, [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x80fe, 0xffdf, 0x7fff, 0x3ff8, 0x1ffe, 0x1900, 0x1980,
    ]),
    (PLAYER_CROUCH_2, [
        0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
        0x0000, 0x80fe, 0xffdf, 0x7fff, 0x3ff8, 0x1ffe, 0x0d00, 0x0180,
    ]),
];

fn narrow_row(
    index: u8,
    row: usize,
) -> Option<u8> {
    NARROW.iter().find(|(first, _)| *first == index).map(|(_, bitmap)| bitmap[row])
}

fn wide_row(
    index: u8,
    row: usize,
) -> Option<u8> {
    WIDE.iter().find_map(|(first, bitmap)| {
        let [left, right] = bitmap[row].to_be_bytes();
        if *first == index {
            Some(left)
        } else if first + 1 == index {
            Some(right)
        } else {
            None
        }
    })
}

// =============================================================================
// Lookup
// =============================================================================

/// Pixel row `row` (`0..16`) of glyph `index`.
pub fn glyph_row(
    index: u8,
    row: usize,
) -> u8 {
    if row >= GLYPH_HEIGHT || index == BLANK {
        return 0;
    }
    match index {
        0..=9 => text_row(&DIGITS[index as usize], row),
        LETTER_A..=LETTER_Z => text_row(&LETTERS[(index - LETTER_A) as usize], row),
        _ => narrow_row(index, row).or_else(|| wide_row(index, row)).unwrap_or(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sprites;

    fn is_blank(index: u8) -> bool { (0..GLYPH_HEIGHT).all(|row| glyph_row(index, row) == 0) }

    #[test]
    fn test_blank_is_empty() {
        assert!(is_blank(BLANK));
        assert!(is_blank(200));
        assert_eq!(glyph_row(0, GLYPH_HEIGHT), 0);
    }

    #[test]
    fn test_text_glyphs_present() {
        for digit in 0..10 {
            assert!(!is_blank(digit), "digit {digit}");
        }
        for letter in sprites::START_TEXT.iter().chain(sprites::END_TEXT.iter()) {
            assert!(!is_blank(*letter), "letter {letter}");
        }
        assert_eq!(glyph_row(1, 2), 0x18);
        assert_eq!(glyph_row(1, 0), 0);
    }

    #[test]
    fn test_every_sprite_glyph_drawn() {
        use crate::obstacles::ObstacleKind;
        use crate::player::Posture;

        let mut all = heapless::Vec::<sprites::Sprite, 32>::new();
        for phase in [0, 4] {
            for posture in [Posture::Running, Posture::Jumping, Posture::Crouching] {
                all.push(sprites::player(posture, phase)).unwrap();
            }
            for kind in ObstacleKind::ALL {
                all.push(sprites::obstacle(kind, phase)).unwrap();
            }
        }
        all.push(sprites::PLAYER_HIT_SPRITE).unwrap();
        all.push(sprites::PLAYER_DEAD_SPRITE).unwrap();

        for sprite in &all {
            for glyph in sprite.glyphs() {
                assert!(!is_blank(*glyph), "glyph {glyph}");
            }
        }
        for glyph in sprites::GROUND_PATTERN {
            assert!(!is_blank(glyph));
        }
    }

    #[test]
    fn test_wide_sprite_halves() {
        assert_eq!(glyph_row(PLAYER_STAND, 0), 0x00);
        assert_eq!(glyph_row(PLAYER_STAND + 1, 0), 0xfe);
        assert_eq!(glyph_row(CACTUS_LARGE, 0), 0x01);
        assert_eq!(glyph_row(CACTUS_LARGE + 1, 0), 0x80);
    }

    #[test]
    fn test_ground_line_in_lower_half() {
        for glyph in [GROUND_LINE, GROUND_PEBBLES, GROUND_DIP] {
            assert!((0..7).all(|row| glyph_row(glyph, row) == 0));
            assert_ne!(glyph_row(glyph, 8), 0);
        }
    }
}
