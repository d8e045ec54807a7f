use crate::model::{Activity, Category};

/// Calorie totals derived from an activity list.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalorieSummary {
    pub consumed: u64,
    pub burned: u64,
    pub net: i64,
}

impl CalorieSummary {
    pub fn from_activities(activities: &[Activity]) -> Self {
        let total = |category: Category| -> u64 {
            activities
                .iter()
                .filter(|activity| activity.category == category)
                .map(|activity| u64::from(activity.calories))
                .sum()
        };

        let consumed = total(Category::Food);
        let burned = total(Category::Exercise);

        CalorieSummary {
            consumed,
            burned,
            net: consumed as i64 - burned as i64,
        }
    }
}
