use super::{Keyed, KnowledgeTable, BATHROOM, BEDROOM, DINING_ROOM, KITCHEN, LIVING_ROOM, OFFICE};

/// Curated furniture for one room, in presentation order.
#[derive(Debug, Clone, Copy)]
pub struct RoomFurniture {
    pub room: &'static str,
    pub items: &'static [&'static str],
}

impl Keyed for RoomFurniture {
    fn key(&self) -> &'static str {
        self.room
    }
}

/// Furniture table for one style. Unknown rooms resolve to the style's living room.
#[derive(Debug, Clone, Copy)]
pub struct StyleFurniture {
    pub style: &'static str,
    pub rooms: KnowledgeTable<RoomFurniture>,
}

impl Keyed for StyleFurniture {
    fn key(&self) -> &'static str {
        self.style
    }
}

const MODERN_LIVING_ROOM: RoomFurniture = RoomFurniture {
    room: LIVING_ROOM,
    items: &[
        "Sectional sofa with clean lines",
        "Glass coffee table",
        "LED floor lamp",
        "Minimalist TV unit",
        "Abstract wall art",
    ],
};

const MODERN: StyleFurniture = StyleFurniture {
    style: "Modern",
    rooms: KnowledgeTable {
        entries: &[
            MODERN_LIVING_ROOM,
            RoomFurniture {
                room: BEDROOM,
                items: &[
                    "Platform bed with upholstered headboard",
                    "Floating nightstands",
                    "Built-in wardrobe",
                    "Pendant bedside lights",
                    "Geometric rug",
                ],
            },
            RoomFurniture {
                room: KITCHEN,
                items: &[
                    "Handle-less cabinets",
                    "Quartz countertops",
                    "Island with bar stools",
                    "Integrated appliances",
                    "Pendant lights over island",
                ],
            },
            RoomFurniture {
                room: BATHROOM,
                items: &[
                    "Wall-mounted vanity",
                    "Frameless glass shower",
                    "Freestanding bathtub",
                    "Backlit mirror",
                    "Floating shelves",
                ],
            },
            RoomFurniture {
                room: OFFICE,
                items: &[
                    "Ergonomic desk",
                    "Gaming/office chair",
                    "Monitor arm",
                    "Cable management system",
                    "Acoustic panels",
                ],
            },
            RoomFurniture {
                room: DINING_ROOM,
                items: &[
                    "Extendable dining table",
                    "Upholstered chairs",
                    "Buffet sideboard",
                    "Chandelier",
                    "Abstract centerpiece",
                ],
            },
        ],
        fallback: &MODERN_LIVING_ROOM,
    },
};

const CLASSIC_LIVING_ROOM: RoomFurniture = RoomFurniture {
    room: LIVING_ROOM,
    items: &[
        "Chesterfield sofa",
        "Wooden coffee table",
        "Crystal chandelier",
        "Bookshelf with display",
        "Persian rug",
    ],
};

const CLASSIC: StyleFurniture = StyleFurniture {
    style: "Classic",
    rooms: KnowledgeTable {
        entries: &[
            CLASSIC_LIVING_ROOM,
            RoomFurniture {
                room: BEDROOM,
                items: &[
                    "Four-poster bed",
                    "Antique dresser",
                    "Armoire wardrobe",
                    "Bedside lamps with shades",
                    "Floral or damask rug",
                ],
            },
            RoomFurniture {
                room: KITCHEN,
                items: &[
                    "Shaker-style cabinets",
                    "Marble countertops",
                    "Butler's pantry",
                    "Farmhouse sink",
                    "Brass fixtures",
                ],
            },
            RoomFurniture {
                room: BATHROOM,
                items: &[
                    "Clawfoot bathtub",
                    "Pedestal sink",
                    "Wainscoting walls",
                    "Ornate mirror",
                    "Towel rail",
                ],
            },
            RoomFurniture {
                room: OFFICE,
                items: &[
                    "Roll-top desk",
                    "Leather executive chair",
                    "Bookcase with ladder",
                    "Brass desk lamp",
                    "Globe",
                ],
            },
            RoomFurniture {
                room: DINING_ROOM,
                items: &[
                    "Pedestal dining table",
                    "Wingback chairs",
                    "China cabinet",
                    "Wainscoting",
                    "Candelabra",
                ],
            },
        ],
        fallback: &CLASSIC_LIVING_ROOM,
    },
};

const MINIMALIST_LIVING_ROOM: RoomFurniture = RoomFurniture {
    room: LIVING_ROOM,
    items: &[
        "Low-profile sofa",
        "Slim coffee table",
        "Single floor lamp",
        "Floating media console",
        "One statement artwork",
    ],
};

const MINIMALIST: StyleFurniture = StyleFurniture {
    style: "Minimalist",
    rooms: KnowledgeTable {
        entries: &[
            MINIMALIST_LIVING_ROOM,
            RoomFurniture {
                room: BEDROOM,
                items: &[
                    "Simple platform bed",
                    "One small nightstand",
                    "Sliding wardrobe",
                    "Blackout curtains",
                    "Neutral area rug",
                ],
            },
            RoomFurniture {
                room: KITCHEN,
                items: &[
                    "Flat-panel cabinets",
                    "Concrete countertops",
                    "Hidden storage",
                    "Under-cabinet lighting",
                    "Clean open shelves",
                ],
            },
            RoomFurniture {
                room: BATHROOM,
                items: &[
                    "Wall-hung toilet",
                    "Vessel sink",
                    "Walk-in shower",
                    "Minimal accessories",
                    "Frameless mirror",
                ],
            },
            RoomFurniture {
                room: OFFICE,
                items: &[
                    "Simple desk",
                    "Task chair",
                    "Hidden storage ottoman",
                    "Minimal decor",
                    "Smart desk lamp",
                ],
            },
            RoomFurniture {
                room: DINING_ROOM,
                items: &[
                    "Simple rectangular table",
                    "Bentwood chairs",
                    "Pendant light",
                    "Single plant",
                    "Bare table",
                ],
            },
        ],
        fallback: &MINIMALIST_LIVING_ROOM,
    },
};

const RUSTIC_LIVING_ROOM: RoomFurniture = RoomFurniture {
    room: LIVING_ROOM,
    items: &[
        "Reclaimed wood sofa table",
        "Leather couch",
        "Stone fireplace",
        "Woven baskets",
        "Antler chandelier",
    ],
};

const RUSTIC: StyleFurniture = StyleFurniture {
    style: "Rustic",
    rooms: KnowledgeTable {
        entries: &[
            RUSTIC_LIVING_ROOM,
            RoomFurniture {
                room: BEDROOM,
                items: &[
                    "Log bed frame",
                    "Distressed wood dresser",
                    "Vintage quilt",
                    "Mason jar lights",
                    "Braided rug",
                ],
            },
            RoomFurniture {
                room: KITCHEN,
                items: &[
                    "Open wooden shelves",
                    "Butcher block counters",
                    "Farmhouse sink",
                    "Vintage stove",
                    "Herb garden window",
                ],
            },
            RoomFurniture {
                room: BATHROOM,
                items: &[
                    "Wooden vanity",
                    "Stone vessel sink",
                    "Rainfall shower",
                    "Rope accents",
                    "Vintage mirror",
                ],
            },
            RoomFurniture {
                room: OFFICE,
                items: &[
                    "Reclaimed wood desk",
                    "Leather chair",
                    "Industrial shelving",
                    "Vintage map art",
                    "Edison bulb lamp",
                ],
            },
            RoomFurniture {
                room: DINING_ROOM,
                items: &[
                    "Trestle dining table",
                    "Bench seating",
                    "Mason jar chandelier",
                    "Galvanized metal accents",
                    "Wildflower centerpiece",
                ],
            },
        ],
        fallback: &RUSTIC_LIVING_ROOM,
    },
};

const BOHEMIAN_LIVING_ROOM: RoomFurniture = RoomFurniture {
    room: LIVING_ROOM,
    items: &[
        "Macramé wall hanging",
        "Floor cushions",
        "Rattan chairs",
        "Layered colourful rugs",
        "Plants everywhere",
    ],
};

const BOHEMIAN: StyleFurniture = StyleFurniture {
    style: "Bohemian",
    rooms: KnowledgeTable {
        entries: &[
            BOHEMIAN_LIVING_ROOM,
            RoomFurniture {
                room: BEDROOM,
                items: &[
                    "Canopy bed with sheer drapes",
                    "Vintage dresser",
                    "Tapestry wall art",
                    "Mix of pillows",
                    "Jute rug",
                ],
            },
            RoomFurniture {
                room: KITCHEN,
                items: &[
                    "Open shelves with eclectic items",
                    "Colourful tiles",
                    "Hanging plants",
                    "Vintage accessories",
                    "Woven placemats",
                ],
            },
            RoomFurniture {
                room: BATHROOM,
                items: &[
                    "Moroccan tiles",
                    "Vintage mirror",
                    "Rattan storage",
                    "Hanging plants",
                    "Colourful towels",
                ],
            },
            RoomFurniture {
                room: OFFICE,
                items: &[
                    "Vintage desk",
                    "Colourful chair",
                    "Gallery wall",
                    "Trailing plants",
                    "Eclectic accessories",
                ],
            },
            RoomFurniture {
                room: DINING_ROOM,
                items: &[
                    "Mismatched chairs",
                    "Colourful tablecloth",
                    "Eclectic centrepiece",
                    "Lantern chandelier",
                    "Tribal rug",
                ],
            },
        ],
        fallback: &BOHEMIAN_LIVING_ROOM,
    },
};

const INDUSTRIAL_LIVING_ROOM: RoomFurniture = RoomFurniture {
    room: LIVING_ROOM,
    items: &[
        "Metal and wood sofa",
        "Steel coffee table",
        "Edison bulb lights",
        "Exposed brick wall",
        "Metal shelving",
    ],
};

const INDUSTRIAL: StyleFurniture = StyleFurniture {
    style: "Industrial",
    rooms: KnowledgeTable {
        entries: &[
            INDUSTRIAL_LIVING_ROOM,
            RoomFurniture {
                room: BEDROOM,
                items: &[
                    "Metal bed frame",
                    "Reclaimed wood dresser",
                    "Concrete lamp",
                    "Exposed pipes",
                    "Vintage locker",
                ],
            },
            RoomFurniture {
                room: KITCHEN,
                items: &[
                    "Stainless steel appliances",
                    "Butcher block",
                    "Metal bar stools",
                    "Open shelves",
                    "Edison pendant lights",
                ],
            },
            RoomFurniture {
                room: BATHROOM,
                items: &[
                    "Concrete sink",
                    "Black fixtures",
                    "Walk-in shower",
                    "Industrial mirror",
                    "Metal towel hooks",
                ],
            },
            RoomFurniture {
                room: OFFICE,
                items: &[
                    "Steel desk",
                    "Industrial chair",
                    "Metal shelving",
                    "Factory window art",
                    "Concrete accessories",
                ],
            },
            RoomFurniture {
                room: DINING_ROOM,
                items: &[
                    "Metal dining table",
                    "Industrial chairs",
                    "Pendant cage lights",
                    "Exposed brick",
                    "Metal wine rack",
                ],
            },
        ],
        fallback: &INDUSTRIAL_LIVING_ROOM,
    },
};

const SCANDINAVIAN_LIVING_ROOM: RoomFurniture = RoomFurniture {
    room: LIVING_ROOM,
    items: &[
        "Light wood sofa table",
        "White couch",
        "Sheepskin throws",
        "Geometric rug",
        "Simple potted plants",
    ],
};

const SCANDINAVIAN: StyleFurniture = StyleFurniture {
    style: "Scandinavian",
    rooms: KnowledgeTable {
        entries: &[
            SCANDINAVIAN_LIVING_ROOM,
            RoomFurniture {
                room: BEDROOM,
                items: &[
                    "White bed frame",
                    "Light wood dresser",
                    "Simple curtains",
                    "Hygge accessories",
                    "Wool blanket",
                ],
            },
            RoomFurniture {
                room: KITCHEN,
                items: &[
                    "White cabinets",
                    "Light wood countertops",
                    "Simple hardware",
                    "Open shelves",
                    "Potted herbs",
                ],
            },
            RoomFurniture {
                room: BATHROOM,
                items: &[
                    "White tiles",
                    "Wood accents",
                    "Simple mirror",
                    "Linen towels",
                    "Minimal accessories",
                ],
            },
            RoomFurniture {
                room: OFFICE,
                items: &[
                    "White desk",
                    "Ergonomic chair",
                    "Simple shelves",
                    "Few plants",
                    "Clean desk lamp",
                ],
            },
            RoomFurniture {
                room: DINING_ROOM,
                items: &[
                    "Light wood table",
                    "Tulip chairs",
                    "Simple pendant",
                    "Candles",
                    "Linen runner",
                ],
            },
        ],
        fallback: &SCANDINAVIAN_LIVING_ROOM,
    },
};

/// Furniture by style then room. Unknown styles resolve to Modern.
pub const FURNITURE: KnowledgeTable<StyleFurniture> = KnowledgeTable {
    entries: &[MODERN, CLASSIC, MINIMALIST, RUSTIC, BOHEMIAN, INDUSTRIAL, SCANDINAVIAN],
    fallback: &MODERN,
};
