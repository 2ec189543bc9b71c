use super::budget::{ABOVE_6000, UNDER_600, UP_TO_1800, UP_TO_6000};
use super::{Keyed, KnowledgeTable};

#[derive(Debug, Clone, Copy)]
pub struct SizeDuration {
    pub size: &'static str,
    pub weeks: u32,
}

impl Keyed for SizeDuration {
    fn key(&self) -> &'static str {
        self.size
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BudgetDuration {
    pub budget: &'static str,
    pub weeks: u32,
}

impl Keyed for BudgetDuration {
    fn key(&self) -> &'static str {
        self.budget
    }
}

const MEDIUM: SizeDuration = SizeDuration { size: "Medium (100–250 sq ft)", weeks: 3 };

pub const SIZE_DURATIONS: KnowledgeTable<SizeDuration> = KnowledgeTable {
    entries: &[
        SizeDuration { size: "Small (< 100 sq ft)", weeks: 2 },
        MEDIUM,
        SizeDuration { size: "Large (250–500 sq ft)", weeks: 5 },
        SizeDuration { size: "Very Large (500+ sq ft)", weeks: 8 },
    ],
    fallback: &MEDIUM,
};

const MID_RANGE_WEEKS: BudgetDuration = BudgetDuration { budget: UP_TO_1800, weeks: 2 };

pub const BUDGET_DURATIONS: KnowledgeTable<BudgetDuration> = KnowledgeTable {
    entries: &[
        BudgetDuration { budget: UNDER_600, weeks: 1 },
        MID_RANGE_WEEKS,
        BudgetDuration { budget: UP_TO_6000, weeks: 3 },
        BudgetDuration { budget: ABOVE_6000, weeks: 5 },
    ],
    fallback: &MID_RANGE_WEEKS,
};
