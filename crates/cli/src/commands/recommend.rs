use atelier_core::config::ConfigOverrides;
use atelier_core::recommendation::{DesignRequest, RecommendationEngine};
use clap::Args;

use crate::commands::{load_config, CommandResult};

#[derive(Debug, Clone, Args)]
pub struct RecommendArgs {
    #[arg(long, help = "Room to design, e.g. \"Living Room\"")]
    pub room_type: String,
    #[arg(long, help = "Room size bracket, e.g. \"Medium (100–250 sq ft)\"")]
    pub room_size: String,
    #[arg(long, help = "Budget bracket, e.g. \"₹50,000–₹1,50,000 / $600–$1,800\"")]
    pub budget: String,
    #[arg(long, help = "Color theme, e.g. \"Cool & Calm\"")]
    pub color_theme: String,
    #[arg(long, help = "Furniture style, e.g. \"Scandinavian\"")]
    pub furniture_style: String,
    #[arg(long, help = "Household lifestyle, e.g. \"Work From Home\"")]
    pub lifestyle: String,
    #[arg(long, default_value = "", help = "Free-form notes kept with the request")]
    pub special_notes: String,
    #[arg(long, help = "Seed for reproducible output (overrides recommendation.seed)")]
    pub seed: Option<u64>,
}

impl RecommendArgs {
    fn to_request(&self) -> DesignRequest {
        DesignRequest::new(
            &self.room_type,
            &self.room_size,
            &self.budget,
            &self.color_theme,
            &self.furniture_style,
            &self.lifestyle,
        )
        .with_special_notes(&self.special_notes)
    }
}

/// Prints the full recommendation bundle as pretty JSON.
pub fn run(args: &RecommendArgs) -> CommandResult {
    let overrides =
        ConfigOverrides { recommendation_seed: args.seed, ..ConfigOverrides::default() };
    let config = match load_config("recommend", overrides) {
        Ok(config) => config,
        Err(result) => return result,
    };

    let engine = RecommendationEngine::from_seed(config.recommendation.seed);
    let bundle = engine.recommend(&args.to_request());

    match serde_json::to_string_pretty(&bundle) {
        Ok(output) => CommandResult { exit_code: 0, output },
        Err(error) => CommandResult::failure(
            "recommend",
            "serialization",
            format!("failed to serialize recommendation: {error}"),
            7,
        ),
    }
}
