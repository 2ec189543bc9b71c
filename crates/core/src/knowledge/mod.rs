//! Static design knowledge base.
//!
//! Every table is compile-time data and is never mutated. Tables that have a
//! designated fallback are wrapped in [`KnowledgeTable`], so the fallback entry
//! for each lookup is declared next to the data it belongs to.

use std::collections::HashSet;

use serde::Serialize;

use crate::domain::booking::{ServiceOffering, SERVICES, TIME_SLOTS};

mod budget;
mod furniture;
mod layout;
mod palettes;
mod preferences;
mod schedule;
mod smart_home;
mod styles;

pub use budget::{AllocationSeed, BudgetTierSeed, BUDGET_TIERS};
pub use furniture::{RoomFurniture, StyleFurniture, FURNITURE};
pub use layout::{RoomLayoutTips, LAYOUT_TIPS};
pub use palettes::{PaletteSeed, ThemePalette, PALETTES, THEME_PALETTES};
pub use preferences::{LifestylePreference, ThemeRoomAffinity, LIFESTYLE_STYLES, THEME_ROOMS};
pub use schedule::{BudgetDuration, SizeDuration, BUDGET_DURATIONS, SIZE_DURATIONS};
pub use smart_home::{RoomSmartHome, BASE_SMART_HOME, ROOM_SMART_HOME};
pub use styles::{
    StyleDescription, StyleSustainability, GENERIC_SUSTAINABILITY_TIPS, STYLE_DESCRIPTIONS,
    SUSTAINABILITY_TIPS,
};

pub const LIVING_ROOM: &str = "Living Room";
pub const BEDROOM: &str = "Bedroom";
pub const KITCHEN: &str = "Kitchen";
pub const BATHROOM: &str = "Bathroom";
pub const OFFICE: &str = "Office";
pub const DINING_ROOM: &str = "Dining Room";

/// Rooms the knowledge base has curated data for, in presentation order.
pub const ROOMS: &[&str] = &[LIVING_ROOM, BEDROOM, KITCHEN, BATHROOM, OFFICE, DINING_ROOM];

/// Furniture styles the knowledge base has curated data for, in presentation order.
pub const STYLES: &[&str] =
    &["Modern", "Classic", "Minimalist", "Rustic", "Bohemian", "Industrial", "Scandinavian"];

/// Table entry addressable by a categorical key.
pub trait Keyed {
    fn key(&self) -> &'static str;
}

/// Keyed entries plus the entry used when a caller's key is not recognized.
#[derive(Debug, Clone, Copy)]
pub struct KnowledgeTable<T: 'static> {
    pub entries: &'static [T],
    pub fallback: &'static T,
}

/// Outcome of a lookup with fallback. `fell_back` is set when the requested
/// key was not present and the table's fallback entry was used instead.
#[derive(Debug, Clone, Copy)]
pub struct Resolved<T: 'static> {
    pub entry: &'static T,
    pub fell_back: bool,
}

impl<T: Keyed> KnowledgeTable<T> {
    pub fn get(&self, key: &str) -> Option<&'static T> {
        lookup(self.entries, key)
    }

    pub fn default_key(&self) -> &'static str {
        self.fallback.key()
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(Keyed::key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Exact-match lookup over a keyed slice.
pub fn lookup<T: Keyed>(entries: &'static [T], key: &str) -> Option<&'static T> {
    entries.iter().find(|entry| entry.key() == key)
}

/// Exact-match lookup that resolves to the table's fallback entry on a miss.
pub fn lookup_or_default<T: Keyed>(table: &KnowledgeTable<T>, key: &str) -> Resolved<T> {
    match table.get(key) {
        Some(entry) => Resolved { entry, fell_back: false },
        None => Resolved { entry: table.fallback, fell_back: true },
    }
}

/// The choices a client can pick from, in presentation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DesignOptions {
    pub room_types: Vec<&'static str>,
    pub room_sizes: Vec<&'static str>,
    pub budgets: Vec<&'static str>,
    pub color_themes: Vec<&'static str>,
    pub furniture_styles: Vec<&'static str>,
    pub lifestyles: Vec<&'static str>,
}

pub fn design_options() -> DesignOptions {
    DesignOptions {
        room_types: ROOMS.to_vec(),
        room_sizes: SIZE_DURATIONS.keys().collect(),
        budgets: BUDGET_TIERS.keys().collect(),
        color_themes: THEME_PALETTES.keys().collect(),
        furniture_styles: STYLES.to_vec(),
        lifestyles: LIFESTYLE_STYLES.iter().map(Keyed::key).collect(),
    }
}

/// Everything a client can pick from when requesting a design or booking a designer.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    #[serde(flatten)]
    pub design: DesignOptions,
    pub services: &'static [ServiceOffering],
    pub time_slots: &'static [&'static str],
}

pub fn catalog() -> Catalog {
    Catalog { design: design_options(), services: SERVICES, time_slots: TIME_SLOTS }
}

/// Cross-table consistency problems, empty when the knowledge base is sound.
pub fn integrity_issues() -> Vec<String> {
    let mut issues = Vec::new();

    check_table("palettes", &PALETTES, &mut issues);
    check_table("theme palettes", &THEME_PALETTES, &mut issues);
    check_table("furniture", &FURNITURE, &mut issues);
    check_table("layout tips", &LAYOUT_TIPS, &mut issues);
    check_table("budget tiers", &BUDGET_TIERS, &mut issues);
    check_table("size durations", &SIZE_DURATIONS, &mut issues);
    check_table("budget durations", &BUDGET_DURATIONS, &mut issues);

    for theme in THEME_PALETTES.entries {
        if PALETTES.get(theme.palette).is_none() {
            issues.push(format!(
                "theme `{}` maps to unknown palette `{}`",
                theme.theme, theme.palette
            ));
        }
    }
    for style in FURNITURE.entries {
        check_table(style.style, &style.rooms, &mut issues);
        for room in ROOMS {
            if style.rooms.get(room).is_none() {
                issues.push(format!("style `{}` has no furniture for `{room}`", style.style));
            }
        }
    }
    for tier in BUDGET_TIERS.entries {
        if tier.allocated_percent() != 100 {
            issues.push(format!(
                "budget tier `{}` allocates {}% instead of 100%",
                tier.label,
                tier.allocated_percent()
            ));
        }
        if BUDGET_DURATIONS.get(tier.range).is_none() {
            issues.push(format!("budget tier `{}` has no duration", tier.label));
        }
    }
    for style in STYLES {
        if lookup(STYLE_DESCRIPTIONS, style).is_none() {
            issues.push(format!("style `{style}` has no description"));
        }
    }

    issues
}

fn check_table<T: Keyed>(name: &str, table: &KnowledgeTable<T>, issues: &mut Vec<String>) {
    let mut seen = HashSet::new();
    for key in table.keys() {
        if !seen.insert(key) {
            issues.push(format!("{name} lists `{key}` more than once"));
        }
    }
    if table.get(table.default_key()).is_none() {
        issues.push(format!("{name} fallback `{}` is not a table entry", table.default_key()));
    }
}
