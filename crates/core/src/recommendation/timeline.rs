use crate::knowledge::{
    lookup_or_default, BudgetDuration, SizeDuration, BUDGET_DURATIONS, SIZE_DURATIONS,
};

/// Margin added to the base estimate to form the upper bound.
const RANGE_WEEKS: u32 = 2;

/// Estimated project duration, e.g. `"3–5 weeks"`.
///
/// Unknown sizes count as 3 weeks and unknown budgets as 2.
pub fn estimate_completion_time(room_size: &str, budget: &str) -> String {
    week_range(
        lookup_or_default(&SIZE_DURATIONS, room_size).entry,
        lookup_or_default(&BUDGET_DURATIONS, budget).entry,
    )
}

pub(crate) fn week_range(size: &SizeDuration, budget: &BudgetDuration) -> String {
    let base = size.weeks + budget.weeks;
    format!("{base}\u{2013}{} weeks", base + RANGE_WEEKS)
}
