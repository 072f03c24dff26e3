// 🍱 MenuItem - One row of the menu table

use serde::Serialize;

/// MenuItem - Immutable after load
///
/// `id` and `category` serialize as `null` when absent, so the JSON shape
/// is always `{id, name, category, meal_times}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub id: Option<i64>,
    pub name: String,
    pub category: Option<String>,
    /// Canonical labels (아침/점심/저녁) or unrecognized labels kept verbatim
    pub meal_times: Vec<String>,
}

impl MenuItem {
    /// Create a MenuItem with only a name
    pub fn new(name: impl Into<String>) -> Self {
        MenuItem {
            id: None,
            name: name.into(),
            category: None,
            meal_times: Vec::new(),
        }
    }

    /// Builder pattern: add id
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Builder pattern: add category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Builder pattern: add meal-times (stored as given, not normalized)
    pub fn with_meal_times<I, S>(mut self, meal_times: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.meal_times = meal_times.into_iter().map(Into::into).collect();
        self
    }

    /// True if any stored meal-time equals `meal` after trimming the entry
    pub fn serves_at(&self, meal: &str) -> bool {
        self.meal_times.iter().any(|t| t.trim() == meal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_absent_fields_as_null() {
        let item = MenuItem::new("비빔밥");
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": null,
                "name": "비빔밥",
                "category": null,
                "meal_times": [],
            })
        );
    }

    #[test]
    fn test_serves_at_trims_stored_entries() {
        let item = MenuItem::new("김밥").with_meal_times([" 점심 ", "저녁"]);

        assert!(item.serves_at("점심"));
        assert!(item.serves_at("저녁"));
        assert!(!item.serves_at("아침"));
    }
}
