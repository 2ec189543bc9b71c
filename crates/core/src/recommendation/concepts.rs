use super::ConceptEntry;

/// Builds the Signature, Contemporary Fusion and Luxe framings of `style`.
///
/// Only `style` shapes the output. `room_type`, `palette_name` and `room_size`
/// are accepted so callers can pass the full context, but are currently inert.
pub fn build_concepts(
    _room_type: &str,
    style: &str,
    _palette_name: &str,
    _room_size: &str,
) -> [ConceptEntry; 3] {
    let lowered = style.to_lowercase();
    [
        concept(
            format!("Signature {style}"),
            format!(
                "A pure expression of {lowered} design — staying true to the style's defining principles with carefully curated pieces."
            ),
            &["Statement focal point", "Cohesive colour story", "Thoughtful lighting layers"],
            "Timeless & Authentic",
        ),
        concept(
            "Contemporary Fusion".to_string(),
            format!(
                "A blend of {lowered} elements with modern comfort touches, creating a space that feels fresh yet familiar."
            ),
            &["Mixed textures", "Modern functionality", "Personalised accents"],
            "Fresh & Eclectic",
        ),
        concept(
            format!("Luxe {style}"),
            format!(
                "An elevated take on {lowered} design with premium materials, bespoke details, and a considered colour palette."
            ),
            &["Premium materials", "Curated art", "Architectural details"],
            "Sophisticated & Refined",
        ),
    ]
}

fn concept(name: String, description: String, highlights: &[&str], mood: &str) -> ConceptEntry {
    ConceptEntry {
        name,
        description,
        highlights: highlights.iter().map(|item| item.to_string()).collect(),
        mood: mood.to_string(),
    }
}
