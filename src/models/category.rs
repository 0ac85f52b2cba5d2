use serde::Serialize;
use std::fmt;

/// Meal window a punch falls into.
///
/// Variant order is alphabetical on the label, which is the order rows
/// are emitted in for the same employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum MealCategory {
    Breakfast,
    Dinner,
    Lunch,
}

impl MealCategory {
    /// Categories in classification priority: the first matching window wins.
    pub const PRIORITY: [MealCategory; 3] = [
        MealCategory::Dinner,
        MealCategory::Lunch,
        MealCategory::Breakfast,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MealCategory::Breakfast => "Breakfast",
            MealCategory::Dinner => "Dinner",
            MealCategory::Lunch => "Lunch",
        }
    }

    /// Key used for this category in the configuration file.
    pub fn config_key(&self) -> &'static str {
        match self {
            MealCategory::Breakfast => "breakfast",
            MealCategory::Dinner => "dinner",
            MealCategory::Lunch => "lunch",
        }
    }
}

impl fmt::Display for MealCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
