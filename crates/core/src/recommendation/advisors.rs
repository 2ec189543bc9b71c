use crate::knowledge::{
    lookup, RoomSmartHome, StyleSustainability, BASE_SMART_HOME, GENERIC_SUSTAINABILITY_TIPS,
    ROOM_SMART_HOME, SUSTAINABILITY_TIPS,
};

/// Eco-friendly advice for a furniture style; generic advice for unknown styles.
pub fn sustainability_tips(style: &str) -> Vec<String> {
    sustainability_from(lookup(SUSTAINABILITY_TIPS, style))
}

/// Universal smart-home devices followed by the room's own suggestions.
pub fn smart_home_suggestions(room_type: &str) -> Vec<String> {
    smart_home_from(lookup(ROOM_SMART_HOME, room_type))
}

pub(crate) fn sustainability_from(entry: Option<&StyleSustainability>) -> Vec<String> {
    let tips = entry.map_or(GENERIC_SUSTAINABILITY_TIPS, |entry| entry.tips);
    tips.iter().map(|tip| tip.to_string()).collect()
}

pub(crate) fn smart_home_from(entry: Option<&RoomSmartHome>) -> Vec<String> {
    let room_specific = entry.map_or(&[][..], |entry| entry.devices);
    BASE_SMART_HOME.iter().chain(room_specific).map(|device| device.to_string()).collect()
}
