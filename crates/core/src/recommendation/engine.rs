//! Recommendation orchestrator

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::advisors::{smart_home_from, sustainability_from};
use super::concepts::build_concepts;
use super::scoring::compatibility_score;
use super::timeline::week_range;
use super::types::*;
use super::LAYOUT_SAMPLE_SIZE;
use crate::knowledge::{
    lookup, lookup_or_default, Keyed, KnowledgeTable, BUDGET_DURATIONS, BUDGET_TIERS, FURNITURE,
    LAYOUT_TIPS, PALETTES, ROOM_SMART_HOME, SIZE_DURATIONS, STYLE_DESCRIPTIONS,
    SUSTAINABILITY_TIPS, THEME_PALETTES,
};

/// Collects the fallbacks taken while resolving one request.
#[derive(Debug, Default)]
struct Selection {
    fallbacks: Vec<Fallback>,
}

impl Selection {
    fn resolve<T: Keyed>(
        &mut self,
        kind: KnowledgeLookup,
        table: &KnowledgeTable<T>,
        key: &str,
    ) -> &'static T {
        let resolved = lookup_or_default(table, key);
        if resolved.fell_back {
            self.record(kind, key, Some(resolved.entry.key()));
        }
        resolved.entry
    }

    fn find<T: Keyed>(
        &mut self,
        kind: KnowledgeLookup,
        entries: &'static [T],
        key: &str,
    ) -> Option<&'static T> {
        let found = lookup(entries, key);
        if found.is_none() {
            self.record(kind, key, None);
        }
        found
    }

    fn record(&mut self, kind: KnowledgeLookup, requested: &str, used: Option<&'static str>) {
        debug!(
            event_name = "recommendation.fallback",
            lookup = kind.as_str(),
            requested,
            used = used.unwrap_or(""),
            "knowledge lookup fell back"
        );
        self.fallbacks.push(Fallback {
            lookup: kind,
            requested: requested.to_string(),
            used: used.map(str::to_string),
        });
    }
}

/// Generates a recommendation bundle, drawing randomness from `rng`.
///
/// Every field is always populated. `special_notes` is never read.
pub fn generate<R: Rng + ?Sized>(request: &DesignRequest, rng: &mut R) -> RecommendationBundle {
    let mut selection = Selection::default();

    // Every theme maps to a defined palette.
    let theme = lookup_or_default(&THEME_PALETTES, &request.color_theme);
    let palette = PALETTES.get(theme.entry.palette).unwrap_or(PALETTES.fallback);
    if theme.fell_back {
        selection.record(KnowledgeLookup::ColorTheme, &request.color_theme, Some(palette.name));
    }

    let style =
        selection.resolve(KnowledgeLookup::FurnitureStyle, &FURNITURE, &request.furniture_style);
    let furniture =
        selection.resolve(KnowledgeLookup::FurnitureRoom, &style.rooms, &request.room_type);

    let layout = selection.resolve(KnowledgeLookup::LayoutRoom, &LAYOUT_TIPS, &request.room_type);
    let layout_tips = layout
        .tips
        .choose_multiple(rng, LAYOUT_SAMPLE_SIZE.min(layout.tips.len()))
        .map(|tip| tip.to_string())
        .collect();

    let budget = selection.resolve(KnowledgeLookup::BudgetTier, &BUDGET_TIERS, &request.budget);

    // Description and sustainability advice follow the raw style, not the resolved one.
    let style_description = selection
        .find(KnowledgeLookup::StyleDescription, STYLE_DESCRIPTIONS, &request.furniture_style)
        .map(|description| description.text.to_string())
        .unwrap_or_default();
    let sustainability_tips = sustainability_from(selection.find(
        KnowledgeLookup::SustainabilityTips,
        SUSTAINABILITY_TIPS,
        &request.furniture_style,
    ));
    let smart_home = smart_home_from(selection.find(
        KnowledgeLookup::SmartHomeRoom,
        ROOM_SMART_HOME,
        &request.room_type,
    ));

    let size_weeks =
        selection.resolve(KnowledgeLookup::RoomSize, &SIZE_DURATIONS, &request.room_size);
    let budget_weeks =
        selection.resolve(KnowledgeLookup::BudgetDuration, &BUDGET_DURATIONS, &request.budget);

    let compatibility_score = compatibility_score(
        &request.room_type,
        &request.furniture_style,
        &request.color_theme,
        &request.lifestyle,
        rng,
    );

    let concepts =
        build_concepts(&request.room_type, style.style, palette.name, &request.room_size).into();

    RecommendationBundle {
        palette: Palette::from(palette),
        palette_name: palette.name.to_string(),
        furniture: furniture.items.iter().map(|item| item.to_string()).collect(),
        layout_tips,
        budget_info: BudgetInfo::from(budget),
        style_description,
        compatibility_score,
        concepts,
        estimated_time: week_range(size_weeks, budget_weeks),
        sustainability_tips,
        smart_home,
        fallbacks: selection.fallbacks,
    }
}

/// Entry point used by the CLI and HTTP API.
///
/// Without a seed every call draws fresh randomness. With a seed every call
/// replays the same generator, so equal requests give equal bundles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecommendationEngine {
    seed: Option<u64>,
}

impl RecommendationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    pub fn from_seed(seed: Option<u64>) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn recommend(&self, request: &DesignRequest) -> RecommendationBundle {
        let bundle = match self.seed {
            Some(seed) => generate(request, &mut StdRng::seed_from_u64(seed)),
            None => generate(request, &mut rand::thread_rng()),
        };
        debug!(
            event_name = "recommendation.generated",
            room_type = %request.room_type,
            furniture_style = %request.furniture_style,
            palette = %bundle.palette_name,
            score = bundle.compatibility_score,
            fallbacks = bundle.fallbacks.len(),
            "recommendation generated"
        );
        bundle
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::knowledge::{ROOMS, STYLES};

    fn request(room: &str, style: &str) -> DesignRequest {
        DesignRequest::new(
            room,
            "Medium (100–250 sq ft)",
            "₹50,000–₹1,50,000 / $600–$1,800",
            "Warm & Cosy",
            style,
            "Couple",
        )
    }

    fn run(request: &DesignRequest, seed: u64) -> RecommendationBundle {
        generate(request, &mut StdRng::seed_from_u64(seed))
    }

    #[test]
    fn known_style_and_room_return_the_curated_furniture() {
        for style in STYLES {
            for room in ROOMS {
                let bundle = run(&request(room, style), 7);
                let expected = FURNITURE
                    .get(style)
                    .and_then(|table| table.rooms.get(room))
                    .expect("combination is curated");
                assert_eq!(bundle.furniture, expected.items, "{style}/{room}");
                assert!(bundle.fallbacks.is_empty(), "{style}/{room}: {:?}", bundle.fallbacks);
            }
        }
    }

    #[test]
    fn unknown_style_falls_back_independently() {
        let bundle = run(&request("Bedroom", "Baroque"), 1);

        let modern_bedroom = FURNITURE.fallback.rooms.get("Bedroom").expect("modern bedroom");
        assert_eq!(bundle.furniture, modern_bedroom.items);
        assert_eq!(bundle.style_description, "");
        assert_eq!(
            bundle.sustainability_tips,
            [
                "Choose sustainable materials",
                "Support local makers",
                "Invest in quality over quantity"
            ]
        );
        assert_eq!(bundle.concepts[0].name, "Signature Modern");
        assert!(bundle.fell_back(KnowledgeLookup::FurnitureStyle));
        assert!(bundle.fell_back(KnowledgeLookup::StyleDescription));
        assert!(!bundle.fell_back(KnowledgeLookup::FurnitureRoom));
    }

    #[test]
    fn unknown_room_falls_back_to_living_room() {
        let bundle = run(&request("Attic", "Rustic"), 3);

        let rustic_living = FURNITURE
            .get("Rustic")
            .and_then(|table| table.rooms.get("Living Room"))
            .expect("rustic living room");
        assert_eq!(bundle.furniture, rustic_living.items);
        assert_eq!(bundle.smart_home.len(), 2);
        let living_tips = LAYOUT_TIPS.get("Living Room").expect("living room tips").tips;
        assert!(bundle.layout_tips.iter().all(|tip| living_tips.contains(&tip.as_str())));
        assert!(bundle.fell_back(KnowledgeLookup::FurnitureRoom));
        assert!(bundle.fell_back(KnowledgeLookup::LayoutRoom));
        assert!(bundle.fell_back(KnowledgeLookup::SmartHomeRoom));
        assert!(!bundle.fell_back(KnowledgeLookup::FurnitureStyle));
    }

    #[test]
    fn style_and_room_fallbacks_can_trigger_together() {
        let bundle = run(&request("Attic", "Baroque"), 3);
        let modern_living = FURNITURE.fallback.rooms.fallback;
        assert_eq!(bundle.furniture, modern_living.items);
        assert!(bundle.fell_back(KnowledgeLookup::FurnitureStyle));
        assert!(bundle.fell_back(KnowledgeLookup::FurnitureRoom));
    }

    #[test]
    fn unknown_theme_uses_warm_neutrals() {
        let mut req = request("Kitchen", "Modern");
        req.color_theme = "Neon Dreams".to_string();
        let bundle = run(&req, 5);
        assert_eq!(bundle.palette_name, "Warm Neutrals");
        assert_eq!(bundle.palette.primary, "#C4A882");
        let fallback = bundle
            .fallbacks
            .iter()
            .find(|f| f.lookup == KnowledgeLookup::ColorTheme)
            .expect("theme fallback recorded");
        assert_eq!(fallback.requested, "Neon Dreams");
        assert_eq!(fallback.used.as_deref(), Some(bundle.palette_name.as_str()));
    }

    #[test]
    fn unknown_budget_uses_the_mid_range_tier() {
        let mut req = request("Office", "Minimalist");
        req.budget = "Whatever it takes".to_string();
        let bundle = run(&req, 5);
        assert_eq!(bundle.budget_info.label, "Mid-Range");
        assert_eq!(bundle.estimated_time, "5–7 weeks");
        assert!(bundle.fell_back(KnowledgeLookup::BudgetTier));
        assert!(bundle.fell_back(KnowledgeLookup::BudgetDuration));
    }

    #[test]
    fn layout_tips_are_a_distinct_sample_of_the_room_table() {
        let room_tips = LAYOUT_TIPS.get("Kitchen").expect("kitchen tips").tips;
        for seed in 0..64 {
            let bundle = run(&request("Kitchen", "Modern"), seed);
            assert_eq!(bundle.layout_tips.len(), 4);
            let unique: HashSet<_> = bundle.layout_tips.iter().collect();
            assert_eq!(unique.len(), 4, "duplicate tip under seed {seed}");
            assert!(bundle.layout_tips.iter().all(|tip| room_tips.contains(&tip.as_str())));
        }
    }

    #[test]
    fn score_lands_in_the_top_band_when_both_bonuses_apply() {
        // Couple prefers Modern; Warm & Cosy suits the living room.
        for seed in 0..64 {
            let bundle = run(&request("Living Room", "Modern"), seed);
            assert!((95..=99).contains(&bundle.compatibility_score));
        }
    }

    #[test]
    fn score_always_within_bounds() {
        let req = DesignRequest::new("Garage", "?", "?", "?", "?", "?");
        for seed in 0..64 {
            let score = run(&req, seed).compatibility_score;
            assert!((70..=99).contains(&score), "{score}");
        }
    }

    #[test]
    fn same_seed_gives_identical_bundles() {
        let req = request("Dining Room", "Bohemian");
        assert_eq!(run(&req, 42), run(&req, 42));
    }

    #[test]
    fn special_notes_have_no_effect() {
        let plain = request("Bathroom", "Classic");
        let noted =
            plain.clone().with_special_notes("Wheelchair accessible, loves teal, no carpets");
        assert_eq!(run(&plain, 9), run(&noted, 9));
    }

    #[test]
    fn bundle_always_carries_three_concepts() {
        let bundle = run(&request("Bedroom", "Scandinavian"), 11);
        assert_eq!(bundle.concepts.len(), 3);
        assert_eq!(bundle.concepts[0].name, "Signature Scandinavian");
        assert_eq!(bundle.estimated_time, "5–7 weeks");
    }

    #[test]
    fn seeded_engine_is_repeatable() {
        let engine = RecommendationEngine::with_seed(2024);
        let req = request("Office", "Industrial");
        assert_eq!(engine.recommend(&req), engine.recommend(&req));
        assert_eq!(engine.seed(), Some(2024));
    }

    #[test]
    fn unseeded_engine_stays_within_contract() {
        let engine = RecommendationEngine::new();
        let bundle = engine.recommend(&request("Office", "Industrial"));
        assert!((70..=99).contains(&bundle.compatibility_score));
        assert_eq!(bundle.layout_tips.len(), 4);
    }

    #[test]
    fn fallbacks_are_omitted_from_json_when_empty() {
        let bundle = run(&request("Office", "Industrial"), 1);
        let json = serde_json::to_value(&bundle).expect("bundle serializes");
        assert!(json.get("fallbacks").is_none());
        assert_eq!(json["palette_name"], "Warm Neutrals");
    }
}
