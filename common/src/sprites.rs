//! Sprite catalog: maps what is on screen to glyph indices.
//!
//! Every glyph is 8x16. Sprites that are 16 pixels wide use two consecutive
//! indices (left half, right half), e.g. the standing player is `125, 126`.
//! The catalog is a pure lookup; nothing here holds state.
//!
//! # Glyph Index Map
//!
//! | Index | Glyph |
//! |-------|-------|
//! | 0-9 | Digits |
//! | 22 | Blank |
//! | 56-81 | Letters `A`-`Z` |
//! | 120-121 | Large cactus |
//! | 122 | Small cactus |
//! | 125-126 | Player standing / jumping |
//! | 127-130 | Player running, two frames |
//! | 131-132 | Player dead |
//! | 135 | Ground, plain line |
//! | 138-141 | Bird, two frames |
//! | 142-143 | Player hit |
//! | 144-147 | Player crouching, two frames |
//! | 148-150 | Ground dip, bump, pebbles |

use crate::config::{COLUMN_STRIDE, GLYPH_COLUMNS};
use crate::obstacles::ObstacleKind;
use crate::player::Posture;

// =============================================================================
// Glyph Indices
// =============================================================================

/// Blank glyph, used to clear.
pub const BLANK: u8 = 22;

/// First letter glyph (`A`).
pub const LETTER_A: u8 = 56;

pub const CACTUS_LARGE: u8 = 120;
pub const CACTUS_SMALL: u8 = 122;
pub const PLAYER_STAND: u8 = 125;
pub const PLAYER_RUN_1: u8 = 127;
pub const PLAYER_RUN_2: u8 = 129;
pub const PLAYER_DEAD: u8 = 131;
pub const GROUND_LINE: u8 = 135;
pub const BIRD_FLY_1: u8 = 138;
pub const BIRD_FLY_2: u8 = 140;
pub const PLAYER_HIT: u8 = 142;
pub const PLAYER_CROUCH_1: u8 = 144;
pub const PLAYER_CROUCH_2: u8 = 146;
pub const GROUND_DIP: u8 = 148;
pub const GROUND_BUMP: u8 = 149;
pub const GROUND_PEBBLES: u8 = 150;

/// Glyph for a decimal digit (`0..=9`).
#[inline]
pub const fn digit(value: u8) -> u8 { value % 10 }

/// Glyph for an uppercase ASCII letter. Anything else maps to [`BLANK`].
pub const fn letter(c: u8) -> u8 {
    if c.is_ascii_uppercase() {
        LETTER_A + (c - b'A')
    } else {
        BLANK
    }
}

/// "START" banner.
pub const START_TEXT: [u8; 5] = [letter(b'S'), letter(b'T'), letter(b'A'), letter(b'R'), letter(b'T')];

/// "END" banner.
pub const END_TEXT: [u8; 3] = [letter(b'E'), letter(b'N'), letter(b'D')];

/// Repeating terrain: mostly plain line with the odd dip, bump and pebbles.
pub const GROUND_PATTERN: [u8; GLYPH_COLUMNS] = [
    GROUND_LINE,
    GROUND_LINE,
    GROUND_PEBBLES,
    GROUND_LINE,
    GROUND_DIP,
    GROUND_LINE,
    GROUND_LINE,
    GROUND_BUMP,
    GROUND_LINE,
    GROUND_PEBBLES,
    GROUND_LINE,
    GROUND_LINE,
    GROUND_BUMP,
    GROUND_LINE,
    GROUND_DIP,
    GROUND_LINE,
];

// =============================================================================
// Sprites
// =============================================================================

/// One or two adjacent glyphs drawn as a unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sprite {
    glyphs: [u8; 2],
    width: u8,
}

impl Sprite {
    /// An 8x16 sprite.
    pub const fn single(glyph: u8) -> Self {
        Self {
            glyphs: [glyph, BLANK],
            width: 1,
        }
    }

    /// A 16x16 sprite made of `first` and `first + 1`.
    pub const fn double(first: u8) -> Self {
        Self {
            glyphs: [first, first + 1],
            width: 2,
        }
    }

    /// Glyph indices, left to right.
    #[inline]
    pub fn glyphs(&self) -> &[u8] { &self.glyphs[..self.width as usize] }

    /// Width in glyph columns (1 or 2).
    #[inline]
    pub const fn width(&self) -> u8 { self.width }

    /// Width in pixels.
    #[inline]
    pub const fn width_px(&self) -> u8 { self.width * COLUMN_STRIDE }
}

/// Blank sprite of `width` glyph columns, used to erase.
pub const fn blank(width: u8) -> Sprite {
    if width > 1 {
        Sprite {
            glyphs: [BLANK, BLANK],
            width: 2,
        }
    } else {
        Sprite::single(BLANK)
    }
}

/// Which of the two animation frames a phase counter selects.
#[inline]
pub const fn first_frame(animation_phase: u8) -> bool { animation_phase % 8 < 4 }

/// Player sprite for a posture. Jumping always uses the standing pose.
pub const fn player(
    posture: Posture,
    animation_phase: u8,
) -> Sprite {
    match posture {
        Posture::Crouching if first_frame(animation_phase) => Sprite::double(PLAYER_CROUCH_1),
        Posture::Crouching => Sprite::double(PLAYER_CROUCH_2),
        Posture::Jumping => PLAYER_STAND_SPRITE,
        Posture::Running if first_frame(animation_phase) => Sprite::double(PLAYER_RUN_1),
        Posture::Running => Sprite::double(PLAYER_RUN_2),
    }
}

/// Player sprite on the start screen.
pub const PLAYER_STAND_SPRITE: Sprite = Sprite::double(PLAYER_STAND);

/// Player sprite while the hit flash is up.
pub const PLAYER_HIT_SPRITE: Sprite = Sprite::double(PLAYER_HIT);

/// Player sprite on the END screen.
pub const PLAYER_DEAD_SPRITE: Sprite = Sprite::double(PLAYER_DEAD);

/// Obstacle sprite. Only birds animate.
pub const fn obstacle(
    kind: ObstacleKind,
    animation_phase: u8,
) -> Sprite {
    match kind {
        ObstacleKind::CactusLarge => Sprite::double(CACTUS_LARGE),
        ObstacleKind::CactusSmall => Sprite::single(CACTUS_SMALL),
        ObstacleKind::BirdHigh | ObstacleKind::BirdLow if first_frame(animation_phase) => Sprite::double(BIRD_FLY_1),
        ObstacleKind::BirdHigh | ObstacleKind::BirdLow => Sprite::double(BIRD_FLY_2),
    }
}

// =============================================================================
// Footprints
// =============================================================================

/// Rectangle a sprite occupies: two pages tall starting at `row`, `width`
/// pixels wide starting at `col`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Footprint {
    pub row: u8,
    pub col: u8,
    pub width: u8,
}

impl Footprint {
    pub const fn new(
        row: u8,
        col: u8,
        width: u8,
    ) -> Self {
        Self { row, col, width }
    }

    /// Whether the horizontal extents intersect.
    pub const fn columns_overlap(
        &self,
        other: &Self,
    ) -> bool {
        let self_end = self.col as u16 + self.width as u16;
        let other_end = other.col as u16 + other.width as u16;
        (self.col as u16) < other_end && (other.col as u16) < self_end
    }

    /// First glyph column index.
    #[inline]
    pub const fn first_column(&self) -> usize { (self.col / COLUMN_STRIDE) as usize }

    /// Number of glyph columns spanned.
    #[inline]
    pub const fn glyph_width(&self) -> usize { self.width.div_ceil(COLUMN_STRIDE) as usize }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_banners() {
        assert_eq!(START_TEXT, [74, 75, 56, 73, 75]);
        assert_eq!(END_TEXT, [60, 69, 59]);
        assert_eq!(letter(b'a'), BLANK);
    }

    #[test]
    fn test_player_frames_alternate() {
        assert_eq!(player(Posture::Running, 0).glyphs(), &[PLAYER_RUN_1, PLAYER_RUN_1 + 1]);
        assert_eq!(player(Posture::Running, 4).glyphs(), &[PLAYER_RUN_2, PLAYER_RUN_2 + 1]);
        assert_eq!(player(Posture::Running, 8).glyphs(), &[PLAYER_RUN_1, PLAYER_RUN_1 + 1]);
        assert_eq!(player(Posture::Crouching, 5).glyphs(), &[PLAYER_CROUCH_2, PLAYER_CROUCH_2 + 1]);
    }

    #[test]
    fn test_jumping_ignores_phase() {
        assert_eq!(player(Posture::Jumping, 0), player(Posture::Jumping, 6));
        assert_eq!(player(Posture::Jumping, 0).glyphs(), &[PLAYER_STAND, PLAYER_STAND + 1]);
    }

    #[test]
    fn test_obstacle_widths() {
        assert_eq!(obstacle(ObstacleKind::CactusSmall, 0).width_px(), 8);
        assert_eq!(obstacle(ObstacleKind::CactusLarge, 0).width_px(), 16);
        assert_eq!(obstacle(ObstacleKind::BirdHigh, 0).width_px(), 16);
        assert_eq!(obstacle(ObstacleKind::BirdLow, 7).glyphs(), &[BIRD_FLY_2, BIRD_FLY_2 + 1]);
    }

    #[test]
    fn test_footprint_overlap() {
        let player = Footprint::new(5, 8, 16);
        assert!(player.columns_overlap(&Footprint::new(5, 16, 8)));
        assert!(player.columns_overlap(&Footprint::new(5, 0, 16)));
        assert!(!player.columns_overlap(&Footprint::new(5, 0, 8)));
        assert!(!player.columns_overlap(&Footprint::new(5, 24, 16)));
    }

    #[test]
    fn test_footprint_columns() {
        assert_eq!(Footprint::new(0, 120, 16).first_column(), 15);
        assert_eq!(Footprint::new(0, 120, 16).glyph_width(), 2);
    }
}
