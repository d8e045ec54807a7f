use crate::model::Category;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque activity identifier, unique within the activity list.
pub type ActivityId = String;

/// One entry of food consumed or exercise performed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Activity {
    pub id: ActivityId,
    pub category: Category,
    pub name: String,
    pub calories: u32,
}

impl Default for Activity {
    fn default() -> Self {
        Self::new()
    }
}

impl Activity {
    /// Blank activity with a freshly generated id.
    pub fn new() -> Self {
        Activity {
            id: Uuid::new_v4().to_string(),
            category: Category::Food,
            name: String::new(),
            calories: 0,
        }
    }

    pub fn with_id(mut self, id: impl Into<ActivityId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_calories(mut self, calories: u32) -> Self {
        self.calories = calories;
        self
    }

    /// A saveable activity has a non-blank name and a positive calorie count.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && self.calories > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_activity() {
        let activity = Activity::new();

        assert!(Uuid::parse_str(&activity.id).is_ok());
        assert_eq!(activity.category, Category::Food);
        assert_eq!(activity.name, "");
        assert_eq!(activity.calories, 0);
    }

    #[test]
    fn new_activities_get_distinct_ids() {
        assert_ne!(Activity::new().id, Activity::new().id);
    }

    #[test]
    fn validity_requires_name_and_calories() {
        let activity = Activity::new();
        assert!(!activity.is_valid());

        let activity = activity.with_name("   ").with_calories(100);
        assert!(!activity.is_valid());

        let activity = activity.with_name("Salad").with_calories(0);
        assert!(!activity.is_valid());

        let activity = activity.with_calories(300);
        assert!(activity.is_valid());
    }

    #[test]
    fn persisted_layout() {
        let activity = Activity::new()
            .with_id("a1")
            .with_category(Category::Exercise)
            .with_name("Run")
            .with_calories(200);

        let json = serde_json::to_value(&activity).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "a1",
                "category": 2,
                "name": "Run",
                "calories": 200
            })
        );
    }
}
