use super::Keyed;

#[derive(Debug, Clone, Copy)]
pub struct StyleDescription {
    pub style: &'static str,
    pub text: &'static str,
}

impl Keyed for StyleDescription {
    fn key(&self) -> &'static str {
        self.style
    }
}

#[derive(Debug, Clone, Copy)]
pub struct StyleSustainability {
    pub style: &'static str,
    pub tips: &'static [&'static str],
}

impl Keyed for StyleSustainability {
    fn key(&self) -> &'static str {
        self.style
    }
}

// No fallback entry: unknown styles get an empty description.
pub const STYLE_DESCRIPTIONS: &[StyleDescription] = &[
    StyleDescription {
        style: "Modern",
        text: "Clean lines, open spaces, and a 'less is more' philosophy define modern design. Neutral palettes with bold accents, innovative materials like glass and steel.",
    },
    StyleDescription {
        style: "Classic",
        text: "Timeless elegance with ornate details, rich woods, and traditional patterns. Symmetry, craftsmanship, and a sense of permanence.",
    },
    StyleDescription {
        style: "Minimalist",
        text: "Radical simplicity — only what is essential remains. Calm, uncluttered spaces that promote peace of mind and intentional living.",
    },
    StyleDescription {
        style: "Rustic",
        text: "Warmth and authenticity through natural materials like wood, stone, and leather. Imperfect beauty that celebrates nature's textures.",
    },
    StyleDescription {
        style: "Bohemian",
        text: "Fearless layering of colours, patterns, and global influences. A traveller's collection brought to life with plants, textiles, and art.",
    },
    StyleDescription {
        style: "Industrial",
        text: "Inspired by factories and urban lofts — exposed brick, metal, and raw materials combined with comfort and sophistication.",
    },
    StyleDescription {
        style: "Scandinavian",
        text: "Hygge philosophy: functional, beautiful, and cosy. Light woods, whites, and textures that celebrate simplicity and comfort.",
    },
];

pub const SUSTAINABILITY_TIPS: &[StyleSustainability] = &[
    StyleSustainability {
        style: "Modern",
        tips: &[
            "Choose FSC-certified wood furniture",
            "LED lighting throughout",
            "Low-VOC paints and finishes",
        ],
    },
    StyleSustainability {
        style: "Classic",
        tips: &[
            "Antique and vintage furniture is the ultimate sustainable choice",
            "Natural fabrics like silk, wool, linen",
            "Quality over quantity",
        ],
    },
    StyleSustainability {
        style: "Minimalist",
        tips: &[
            "Buy less, choose quality — reduces waste long-term",
            "Donate rather than discard old furniture",
            "Natural materials only",
        ],
    },
    StyleSustainability {
        style: "Rustic",
        tips: &[
            "Reclaimed wood is inherently sustainable",
            "Upcycle vintage finds",
            "Natural linseed or beeswax finishes",
        ],
    },
    StyleSustainability {
        style: "Bohemian",
        tips: &[
            "Shop vintage and second-hand for authentic bohemian pieces",
            "Support artisan makers",
            "Natural dye fabrics",
        ],
    },
    StyleSustainability {
        style: "Industrial",
        tips: &[
            "Repurpose industrial salvage for authentic pieces",
            "Metal is highly recyclable",
            "Energy-efficient Edison LED bulbs",
        ],
    },
    StyleSustainability {
        style: "Scandinavian",
        tips: &[
            "Invest in durable Scandinavian brands known for longevity",
            "Natural wool and linen textiles",
            "Energy-efficient lighting",
        ],
    },
];

/// Used for any style without curated sustainability advice.
pub const GENERIC_SUSTAINABILITY_TIPS: &[&str] = &[
    "Choose sustainable materials",
    "Support local makers",
    "Invest in quality over quantity",
];

#[cfg(test)]
mod tests {
    use super::{STYLE_DESCRIPTIONS, SUSTAINABILITY_TIPS};
    use crate::knowledge::{lookup, STYLES};

    #[test]
    fn every_style_is_described_and_has_three_tips() {
        for style in STYLES {
            let description = lookup(STYLE_DESCRIPTIONS, style).expect("style is described");
            assert!(!description.text.is_empty());
            let tips = lookup(SUSTAINABILITY_TIPS, style).expect("style has tips");
            assert_eq!(tips.tips.len(), 3, "{style}");
        }
    }
}
