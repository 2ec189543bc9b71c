use super::{Keyed, BATHROOM, BEDROOM, DINING_ROOM, KITCHEN, LIVING_ROOM, OFFICE};

/// Suggested for every room, ahead of any room-specific devices.
pub const BASE_SMART_HOME: &[&str] =
    &["Smart LED colour-changing bulbs", "Voice assistant integration (Alexa/Google)"];

#[derive(Debug, Clone, Copy)]
pub struct RoomSmartHome {
    pub room: &'static str,
    pub devices: &'static [&'static str],
}

impl Keyed for RoomSmartHome {
    fn key(&self) -> &'static str {
        self.room
    }
}

pub const ROOM_SMART_HOME: &[RoomSmartHome] = &[
    RoomSmartHome {
        room: LIVING_ROOM,
        devices: &[
            "Smart TV with ambient screen mode",
            "Automated blinds/curtains",
            "Multi-room audio system",
        ],
    },
    RoomSmartHome {
        room: BEDROOM,
        devices: &[
            "Smart sleep tracker",
            "Automated blackout blinds",
            "Sunrise alarm clock lights",
        ],
    },
    RoomSmartHome {
        room: KITCHEN,
        devices: &["Smart refrigerator", "Touchless faucet", "Under-cabinet LED strips"],
    },
    RoomSmartHome {
        room: OFFICE,
        devices: &[
            "Smart monitor lighting",
            "Sit-stand desk with memory positions",
            "Noise-cancelling smart speakers",
        ],
    },
    RoomSmartHome {
        room: BATHROOM,
        devices: &[
            "Smart mirror with weather display",
            "Heated towel rail timer",
            "Smart shower controller",
        ],
    },
    RoomSmartHome {
        room: DINING_ROOM,
        devices: &[
            "Smart dimmable pendant lights",
            "Wireless charging table",
            "Smart speaker for ambiance",
        ],
    },
];
