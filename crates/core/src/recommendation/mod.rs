//! Rule-based interior design recommendations.
//!
//! The engine resolves each categorical input against the static tables in
//! [`crate::knowledge`], scores how well the choices fit together, and merges
//! everything into a [`RecommendationBundle`]. Unrecognized inputs never fail;
//! they resolve to the table's fallback entry and are listed in
//! [`RecommendationBundle::fallbacks`].

mod advisors;
mod concepts;
mod engine;
mod scoring;
mod timeline;
mod types;

pub use advisors::{smart_home_suggestions, sustainability_tips};
pub use concepts::build_concepts;
pub use engine::{generate, RecommendationEngine};
pub use scoring::compatibility_score;
pub use timeline::estimate_completion_time;
pub use types::*;

/// Starting point of every compatibility score.
pub const BASE_SCORE: u8 = 70;

/// Added when the furniture style suits the lifestyle.
pub const LIFESTYLE_STYLE_BONUS: u8 = 15;

/// Added when the color theme suits the room.
pub const THEME_ROOM_BONUS: u8 = 10;

/// Upper bound (inclusive) of the random bonus.
pub const MAX_JITTER: u8 = 5;

pub const MAX_SCORE: u8 = 99;

/// Number of layout tips sampled from the room's table.
pub const LAYOUT_SAMPLE_SIZE: usize = 4;
