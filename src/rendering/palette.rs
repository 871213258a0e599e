//! Ball color palette & helpers.
//! Single source of truth for ball materials and debug output.

use bevy::prelude::*;

/// Emissive ball colors, assigned round-robin by ball index. Update here only.
pub const BASE_COLORS: [Color; 4] = [
    Color::srgb(1.0, 0.0, 0.0), // red
    Color::srgb(0.0, 1.0, 0.0), // green
    Color::srgb(0.0, 0.0, 1.0), // blue
    Color::srgb(1.0, 1.0, 1.0), // white
];

pub const COLOR_NAMES: [&str; 4] = ["red", "green", "blue", "white"];

/// Palette slot for ball `i`, wrapping around the palette.
#[inline]
pub fn palette_slot(i: usize, palette_len: usize) -> usize {
    if palette_len == 0 {
        0
    } else {
        i % palette_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_behavior() {
        assert_eq!(palette_slot(0, 4), 0);
        assert_eq!(palette_slot(4, 4), 0); // wrap
        assert_eq!(palette_slot(7, 4), 3);
        assert_eq!(palette_slot(9, 4), 1);
        assert_eq!(palette_slot(3, 0), 0);
    }

    #[test]
    fn all_colors_distinct() {
        for (i, c1) in BASE_COLORS.iter().enumerate() {
            for (j, c2) in BASE_COLORS.iter().enumerate() {
                if i == j {
                    continue;
                }
                assert!(c1 != c2, "Palette contains duplicate colors at {i} and {j}");
            }
        }
        assert_eq!(COLOR_NAMES.len(), BASE_COLORS.len());
    }
}
