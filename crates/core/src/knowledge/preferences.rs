use super::{Keyed, BATHROOM, BEDROOM, DINING_ROOM, LIVING_ROOM, OFFICE};

/// Styles that suit a household's lifestyle.
#[derive(Debug, Clone, Copy)]
pub struct LifestylePreference {
    pub lifestyle: &'static str,
    pub styles: &'static [&'static str],
}

impl Keyed for LifestylePreference {
    fn key(&self) -> &'static str {
        self.lifestyle
    }
}

/// Rooms a color theme works especially well in.
#[derive(Debug, Clone, Copy)]
pub struct ThemeRoomAffinity {
    pub theme: &'static str,
    pub rooms: &'static [&'static str],
}

impl Keyed for ThemeRoomAffinity {
    fn key(&self) -> &'static str {
        self.theme
    }
}

pub const LIFESTYLE_STYLES: &[LifestylePreference] = &[
    LifestylePreference {
        lifestyle: "Family with Kids",
        styles: &["Rustic", "Scandinavian", "Classic"],
    },
    LifestylePreference {
        lifestyle: "Young Professional",
        styles: &["Modern", "Minimalist", "Industrial"],
    },
    LifestylePreference { lifestyle: "Couple", styles: &["Bohemian", "Modern", "Scandinavian"] },
    LifestylePreference {
        lifestyle: "Senior Living",
        styles: &["Classic", "Scandinavian", "Rustic"],
    },
    LifestylePreference {
        lifestyle: "Work From Home",
        styles: &["Minimalist", "Scandinavian", "Modern"],
    },
    LifestylePreference { lifestyle: "Entertainer", styles: &["Modern", "Bohemian", "Classic"] },
];

// Themes not listed here have no preferred rooms.
pub const THEME_ROOMS: &[ThemeRoomAffinity] = &[
    ThemeRoomAffinity { theme: "Cool & Calm", rooms: &[BEDROOM, BATHROOM, OFFICE] },
    ThemeRoomAffinity { theme: "Warm & Cosy", rooms: &[LIVING_ROOM, DINING_ROOM, BEDROOM] },
    ThemeRoomAffinity { theme: "Bold & Vibrant", rooms: &[LIVING_ROOM, DINING_ROOM] },
    ThemeRoomAffinity { theme: "Nature Inspired", rooms: &[BEDROOM, OFFICE, LIVING_ROOM] },
];
