//! Request and result types for the recommendation engine

use serde::{Deserialize, Serialize};

use crate::knowledge::{AllocationSeed, BudgetTierSeed, PaletteSeed};

/// The seven categorical choices a client makes when asking for a design.
///
/// All fields are free-form strings. Values that do not match a knowledge
/// table key are tolerated and resolved to that table's fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignRequest {
    pub room_type: String,
    pub room_size: String,
    pub budget: String,
    pub color_theme: String,
    pub furniture_style: String,
    pub lifestyle: String,
    /// Stored and displayed alongside the request; never read by the engine.
    #[serde(default)]
    pub special_notes: String,
}

impl DesignRequest {
    pub fn new(
        room_type: impl Into<String>,
        room_size: impl Into<String>,
        budget: impl Into<String>,
        color_theme: impl Into<String>,
        furniture_style: impl Into<String>,
        lifestyle: impl Into<String>,
    ) -> Self {
        Self {
            room_type: room_type.into(),
            room_size: room_size.into(),
            budget: budget.into(),
            color_theme: color_theme.into(),
            furniture_style: furniture_style.into(),
            lifestyle: lifestyle.into(),
            special_notes: String::new(),
        }
    }

    pub fn with_special_notes(mut self, notes: impl Into<String>) -> Self {
        self.special_notes = notes.into();
        self
    }
}

/// Four coordinated colors plus a short description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub wall: String,
    pub description: String,
}

impl From<&PaletteSeed> for Palette {
    fn from(seed: &PaletteSeed) -> Self {
        Self {
            primary: seed.primary.to_string(),
            secondary: seed.secondary.to_string(),
            accent: seed.accent.to_string(),
            wall: seed.wall.to_string(),
            description: seed.description.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationShare {
    pub category: String,
    pub percent: u8,
}

impl From<&AllocationSeed> for AllocationShare {
    fn from(seed: &AllocationSeed) -> Self {
        Self { category: seed.category.to_string(), percent: seed.percent }
    }
}

/// Tier name, spending tips and the suggested split of the budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetInfo {
    pub label: String,
    pub tips: Vec<String>,
    pub allocation: Vec<AllocationShare>,
}

impl From<&BudgetTierSeed> for BudgetInfo {
    fn from(seed: &BudgetTierSeed) -> Self {
        Self {
            label: seed.label.to_string(),
            tips: seed.tips.iter().map(|tip| tip.to_string()).collect(),
            allocation: seed.allocation.iter().map(AllocationShare::from).collect(),
        }
    }
}

/// One narrative framing of the chosen style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptEntry {
    pub name: String,
    pub description: String,
    pub highlights: Vec<String>,
    pub mood: String,
}

/// Knowledge lookup that can resolve to a fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KnowledgeLookup {
    ColorTheme,
    FurnitureStyle,
    FurnitureRoom,
    LayoutRoom,
    BudgetTier,
    StyleDescription,
    SustainabilityTips,
    SmartHomeRoom,
    RoomSize,
    BudgetDuration,
}

impl KnowledgeLookup {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ColorTheme => "color_theme",
            Self::FurnitureStyle => "furniture_style",
            Self::FurnitureRoom => "furniture_room",
            Self::LayoutRoom => "layout_room",
            Self::BudgetTier => "budget_tier",
            Self::StyleDescription => "style_description",
            Self::SustainabilityTips => "sustainability_tips",
            Self::SmartHomeRoom => "smart_home_room",
            Self::RoomSize => "room_size",
            Self::BudgetDuration => "budget_duration",
        }
    }
}

/// Records that a lookup did not recognize its key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fallback {
    pub lookup: KnowledgeLookup,
    /// Key supplied by the caller.
    pub requested: String,
    /// Key of the entry used instead, if the table has one. Colour themes
    /// report the palette they resolved to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub used: Option<String>,
}

/// Everything the engine recommends for one [`DesignRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationBundle {
    pub palette: Palette,
    pub palette_name: String,
    pub furniture: Vec<String>,
    /// Random sample of the room's layout tips, in random order.
    pub layout_tips: Vec<String>,
    pub budget_info: BudgetInfo,
    /// Empty when the requested style is not described.
    pub style_description: String,
    pub compatibility_score: u8,
    pub concepts: Vec<ConceptEntry>,
    pub estimated_time: String,
    pub sustainability_tips: Vec<String>,
    pub smart_home: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fallbacks: Vec<Fallback>,
}

impl RecommendationBundle {
    pub fn fell_back(&self, lookup: KnowledgeLookup) -> bool {
        self.fallbacks.iter().any(|fallback| fallback.lookup == lookup)
    }
}

#[cfg(test)]
mod tests {
    use super::DesignRequest;

    #[test]
    fn special_notes_default_to_empty_when_absent() {
        let request: DesignRequest = serde_json::from_str(
            r#"{"room_type":"Office","room_size":"Small (< 100 sq ft)",
               "budget":"Under ₹50,000 / $600","color_theme":"Cool & Calm",
               "furniture_style":"Minimalist","lifestyle":"Work From Home"}"#,
        )
        .expect("request parses");
        assert_eq!(request.special_notes, "");
        assert_eq!(request.room_type, "Office");
    }
}
