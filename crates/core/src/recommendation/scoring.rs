//! Compatibility heuristic

use rand::Rng;

use super::{BASE_SCORE, LIFESTYLE_STYLE_BONUS, MAX_JITTER, MAX_SCORE, THEME_ROOM_BONUS};
use crate::knowledge::{lookup, LIFESTYLE_STYLES, THEME_ROOMS};

/// Scores how well the choices complement each other, in `[70, 99]`.
///
/// Unknown lifestyles and themes simply earn no bonus. The random bonus makes
/// the result vary between calls unless `rng` is seeded.
pub fn compatibility_score<R: Rng + ?Sized>(
    room_type: &str,
    style: &str,
    color_theme: &str,
    lifestyle: &str,
    rng: &mut R,
) -> u8 {
    let mut score = BASE_SCORE;

    let style_suits_lifestyle = lookup(LIFESTYLE_STYLES, lifestyle)
        .is_some_and(|preference| preference.styles.iter().any(|preferred| *preferred == style));
    if style_suits_lifestyle {
        score += LIFESTYLE_STYLE_BONUS;
    }

    let theme_suits_room = lookup(THEME_ROOMS, color_theme)
        .is_some_and(|affinity| affinity.rooms.iter().any(|room| *room == room_type));
    if theme_suits_room {
        score += THEME_ROOM_BONUS;
    }

    let jitter = rng.gen_range(0..=MAX_JITTER);
    (score + jitter).min(MAX_SCORE)
}
