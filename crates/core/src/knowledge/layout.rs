use super::{Keyed, KnowledgeTable, BATHROOM, BEDROOM, DINING_ROOM, KITCHEN, LIVING_ROOM, OFFICE};

#[derive(Debug, Clone, Copy)]
pub struct RoomLayoutTips {
    pub room: &'static str,
    pub tips: &'static [&'static str],
}

impl Keyed for RoomLayoutTips {
    fn key(&self) -> &'static str {
        self.room
    }
}

const LIVING_ROOM_TIPS: RoomLayoutTips = RoomLayoutTips {
    room: LIVING_ROOM,
    tips: &[
        "🛋️ Anchor the seating area with a large area rug to define the zone.",
        "💡 Layer lighting: overhead, floor lamps, and table lamps for ambiance.",
        "🪴 Place plants in corners to fill dead space and add life.",
        "📐 Leave 45–50 cm walkways between furniture for easy movement.",
        "🎨 Create a focal point (fireplace, TV unit, or statement wall).",
        "🪞 Use mirrors to visually expand a small room and reflect light.",
    ],
};

/// Placement advice per room. Unknown rooms get the living-room advice.
pub const LAYOUT_TIPS: KnowledgeTable<RoomLayoutTips> = KnowledgeTable {
    entries: &[
        LIVING_ROOM_TIPS,
        RoomLayoutTips {
            room: BEDROOM,
            tips: &[
                "🛏️ Center the bed on the main wall for balanced feng shui.",
                "💡 Use bedside lamps instead of ceiling-only lighting for warmth.",
                "🚪 Ensure 75 cm clearance on each side of the bed.",
                "🪟 Position the bed away from drafty windows for comfort.",
                "🪴 Calming plants like lavender or peace lily improve sleep quality.",
                "📦 Use under-bed storage to maximise space in small rooms.",
            ],
        },
        RoomLayoutTips {
            room: KITCHEN,
            tips: &[
                "🔺 Follow the work triangle: sink → stove → refrigerator for efficiency.",
                "💡 Install task lighting under cabinets for prep areas.",
                "🗄️ Keep frequently used items at arm level for easy access.",
                "🪴 A small herb garden on the windowsill adds freshness and function.",
                "🎨 Use a contrasting backsplash as a visual feature wall.",
                "📐 Leave 120 cm minimum between parallel counters for movement.",
            ],
        },
        RoomLayoutTips {
            room: BATHROOM,
            tips: &[
                "💡 Install vanity lighting at eye level to eliminate shadows.",
                "🪞 Large mirrors make a small bathroom feel more spacious.",
                "🌿 Humidity-loving plants like ferns add spa vibes.",
                "🛁 Place towel rails within reach of the shower and bath.",
                "📐 Ensure 75 cm clearance in front of toilet and vanity.",
                "🎨 Use large-format tiles to reduce grout lines and add spaciousness.",
            ],
        },
        RoomLayoutTips {
            room: OFFICE,
            tips: &[
                "💻 Position the desk facing the door but not directly in line with it.",
                "💡 Use natural light from the side to reduce screen glare.",
                "🪴 Plants boost productivity — try a snake plant or pothos.",
                "📚 Organise cables and wires to maintain a clear headspace.",
                "🎨 Choose calm, focus-boosting colours like green, blue, or grey.",
                "🔊 Add acoustic panels or bookshelves on walls to reduce echo.",
            ],
        },
        RoomLayoutTips {
            room: DINING_ROOM,
            tips: &[
                "🍽️ Hang the chandelier 75–90 cm above the dining table surface.",
                "📐 Choose a rug that extends 60 cm beyond all sides of the table.",
                "💡 Dimmers allow you to shift from bright dining to romantic ambiance.",
                "🪴 A centrepiece plant or floral arrangement adds elegance.",
                "🪞 A buffet or sideboard provides storage and display space.",
                "🎨 Bold wallpaper or a statement wall creates drama in dining rooms.",
            ],
        },
    ],
    fallback: &LIVING_ROOM_TIPS,
};

#[cfg(test)]
mod tests {
    use super::LAYOUT_TIPS;

    #[test]
    fn every_room_has_six_distinct_tips() {
        for room in LAYOUT_TIPS.entries {
            assert_eq!(room.tips.len(), 6, "{}", room.room);
            let mut tips = room.tips.to_vec();
            tips.sort_unstable();
            tips.dedup();
            assert_eq!(tips.len(), 6, "{} repeats a tip", room.room);
        }
    }
}
