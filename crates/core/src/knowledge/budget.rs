use super::{Keyed, KnowledgeTable};

/// Share of the budget suggested for one spending category.
#[derive(Debug, Clone, Copy)]
pub struct AllocationSeed {
    pub category: &'static str,
    pub percent: u8,
}

/// Spending bracket keyed by the range label shown to users.
#[derive(Debug, Clone, Copy)]
pub struct BudgetTierSeed {
    pub range: &'static str,
    pub label: &'static str,
    pub tips: &'static [&'static str],
    pub allocation: &'static [AllocationSeed],
}

impl Keyed for BudgetTierSeed {
    fn key(&self) -> &'static str {
        self.range
    }
}

impl BudgetTierSeed {
    pub fn allocated_percent(&self) -> u32 {
        self.allocation.iter().map(|share| u32::from(share.percent)).sum()
    }
}

pub const UNDER_600: &str = "Under ₹50,000 / $600";
pub const UP_TO_1800: &str = "₹50,000–₹1,50,000 / $600–$1,800";
pub const UP_TO_6000: &str = "₹1,50,000–₹5,00,000 / $1,800–$6,000";
pub const ABOVE_6000: &str = "Above ₹5,00,000 / $6,000+";

const MID_RANGE: BudgetTierSeed = BudgetTierSeed {
    range: UP_TO_1800,
    label: "Mid-Range",
    tips: &[
        "Mix mid-range and budget pieces strategically.",
        "Invest in the sofa and bed — you use them most.",
        "Consider flat-pack furniture with quality styling.",
        "Add personality through curated art and plants.",
    ],
    allocation: &[
        AllocationSeed { category: "Furniture", percent: 45 },
        AllocationSeed { category: "Paint & Walls", percent: 15 },
        AllocationSeed { category: "Lighting", percent: 15 },
        AllocationSeed { category: "Decor & Accessories", percent: 15 },
        AllocationSeed { category: "Plants & Greenery", percent: 10 },
    ],
};

/// Budget tiers in ascending order. Unknown ranges resolve to the second tier
/// (Mid-Range), not the first.
pub const BUDGET_TIERS: KnowledgeTable<BudgetTierSeed> = KnowledgeTable {
    entries: &[
        BudgetTierSeed {
            range: UNDER_600,
            label: "Budget-Friendly",
            tips: &[
                "Focus on paint and soft furnishings for maximum impact.",
                "Shop second-hand or thrift stores for unique pieces.",
                "DIY art and decor can personalise without big spend.",
                "Invest in 1–2 quality statement pieces, keep the rest minimal.",
            ],
            allocation: &[
                AllocationSeed { category: "Furniture", percent: 40 },
                AllocationSeed { category: "Paint & Walls", percent: 20 },
                AllocationSeed { category: "Lighting", percent: 15 },
                AllocationSeed { category: "Decor & Accessories", percent: 15 },
                AllocationSeed { category: "Plants", percent: 10 },
            ],
        },
        MID_RANGE,
        BudgetTierSeed {
            range: UP_TO_6000,
            label: "Premium",
            tips: &[
                "Prioritise quality materials that last — solid wood, real leather.",
                "Consider professional consultation for layout planning.",
                "Custom joinery adds value and perfect fit.",
                "Invest in smart home features like automated lighting.",
            ],
            allocation: &[
                AllocationSeed { category: "Furniture", percent: 40 },
                AllocationSeed { category: "Joinery & Built-ins", percent: 20 },
                AllocationSeed { category: "Lighting", percent: 15 },
                AllocationSeed { category: "Decor & Art", percent: 15 },
                AllocationSeed { category: "Plants & Styling", percent: 10 },
            ],
        },
        BudgetTierSeed {
            range: ABOVE_6000,
            label: "Luxury",
            tips: &[
                "Engage a full-service interior designer.",
                "Consider bespoke furniture and custom art commissions.",
                "Premium materials: marble, solid hardwood, designer lighting.",
                "Smart home automation is a worthwhile investment at this level.",
            ],
            allocation: &[
                AllocationSeed { category: "Custom Furniture", percent: 35 },
                AllocationSeed { category: "Built-ins & Joinery", percent: 25 },
                AllocationSeed { category: "Lighting & Smart Home", percent: 20 },
                AllocationSeed { category: "Art & Accessories", percent: 15 },
                AllocationSeed { category: "Plants & Styling", percent: 5 },
            ],
        },
    ],
    fallback: &MID_RANGE,
};
