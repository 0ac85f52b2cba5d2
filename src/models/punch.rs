use super::category::MealCategory;
use chrono::{NaiveDate, NaiveTime};

/// A single validated row of the input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PunchRecord {
    pub employee_id: String,
    pub display_name: String,
    pub department: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub line: u64, // 1-based line in the source file (header = line 1)
}

impl PunchRecord {
    pub fn time_str(&self) -> String {
        self.time.format("%H:%M:%S").to_string()
    }
}

/// A punch that matched one of the meal windows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorizedRecord {
    pub punch: PunchRecord,
    pub category: MealCategory,
}
