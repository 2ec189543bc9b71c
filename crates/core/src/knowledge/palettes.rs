use super::{Keyed, KnowledgeTable};

/// Named four-color palette.
#[derive(Debug, Clone, Copy)]
pub struct PaletteSeed {
    pub name: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub wall: &'static str,
    pub description: &'static str,
}

impl Keyed for PaletteSeed {
    fn key(&self) -> &'static str {
        self.name
    }
}

/// Maps the color theme a user picks to the palette that realises it.
#[derive(Debug, Clone, Copy)]
pub struct ThemePalette {
    pub theme: &'static str,
    pub palette: &'static str,
}

impl Keyed for ThemePalette {
    fn key(&self) -> &'static str {
        self.theme
    }
}

const WARM_NEUTRALS: PaletteSeed = PaletteSeed {
    name: "Warm Neutrals",
    primary: "#C4A882",
    secondary: "#8B6F47",
    accent: "#E8DCC8",
    wall: "#F5ECD7",
    description: "Warm beige and tan tones create a cosy, inviting atmosphere.",
};

pub const PALETTES: KnowledgeTable<PaletteSeed> = KnowledgeTable {
    entries: &[
        WARM_NEUTRALS,
        PaletteSeed {
            name: "Cool Blues",
            primary: "#4A90D9",
            secondary: "#2C5F8A",
            accent: "#B8D4F0",
            wall: "#E8F1FA",
            description:
                "Calming blue palette inspired by ocean and sky, perfect for relaxation.",
        },
        PaletteSeed {
            name: "Earthy Greens",
            primary: "#5A8A5E",
            secondary: "#2D5C30",
            accent: "#A8C8A8",
            wall: "#E8F2E8",
            description: "Nature-inspired greens bring freshness and harmony indoors.",
        },
        PaletteSeed {
            name: "Monochrome Elegance",
            primary: "#2C2C2C",
            secondary: "#5A5A5A",
            accent: "#C0C0C0",
            wall: "#F5F5F5",
            description:
                "Timeless black and white with grey accents for a sophisticated look.",
        },
        PaletteSeed {
            name: "Vibrant Bold",
            primary: "#E84393",
            secondary: "#FF6B35",
            accent: "#FFD700",
            wall: "#FFF8E7",
            description: "Bold, energetic colours for a lively and expressive space.",
        },
        PaletteSeed {
            name: "Pastel Dream",
            primary: "#FFB3C6",
            secondary: "#B3D9FF",
            accent: "#B3FFD9",
            wall: "#FFF0F5",
            description: "Soft pastels create a dreamy, gentle, and airy environment.",
        },
        PaletteSeed {
            name: "Dark Luxury",
            primary: "#1A1A2E",
            secondary: "#16213E",
            accent: "#C9A84C",
            wall: "#0F3460",
            description:
                "Deep jewel tones with gold accents for opulent, dramatic interiors.",
        },
        PaletteSeed {
            name: "Terracotta Warmth",
            primary: "#C1440E",
            secondary: "#8B3A0F",
            accent: "#F4A460",
            wall: "#FFF0E6",
            description: "Earthy terracotta hues for a Mediterranean, sun-kissed ambiance.",
        },
    ],
    fallback: &WARM_NEUTRALS,
};

const WARM_AND_COSY: ThemePalette = ThemePalette { theme: "Warm & Cosy", palette: "Warm Neutrals" };

/// Unknown themes resolve to the "Warm & Cosy" mapping, i.e. the Warm Neutrals palette.
pub const THEME_PALETTES: KnowledgeTable<ThemePalette> = KnowledgeTable {
    entries: &[
        WARM_AND_COSY,
        ThemePalette { theme: "Cool & Calm", palette: "Cool Blues" },
        ThemePalette { theme: "Nature Inspired", palette: "Earthy Greens" },
        ThemePalette { theme: "Bold & Vibrant", palette: "Vibrant Bold" },
        ThemePalette { theme: "Neutral & Elegant", palette: "Monochrome Elegance" },
        ThemePalette { theme: "Soft Pastels", palette: "Pastel Dream" },
        ThemePalette { theme: "Dark & Luxurious", palette: "Dark Luxury" },
        ThemePalette { theme: "Mediterranean", palette: "Terracotta Warmth" },
    ],
    fallback: &WARM_AND_COSY,
};
