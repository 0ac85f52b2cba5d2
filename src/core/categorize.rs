//! Meal window definitions and punch classification.

use crate::errors::{AppError, AppResult};
use crate::models::category::MealCategory;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Inclusive time-of-day range `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl MealWindow {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, t: NaiveTime) -> bool {
        self.start <= t && t <= self.end
    }

    fn overlaps(&self, other: &MealWindow) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

impl fmt::Display for MealWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}",
            self.start.format("%H:%M:%S"),
            self.end.format("%H:%M:%S")
        )
    }
}

/// The three meal windows. Classification checks them in
/// [`MealCategory::PRIORITY`] order, so on overlap Dinner beats Lunch
/// and Lunch beats Breakfast.
///
/// When read from configuration any missing window or bound takes the
/// default value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "WindowsEntry")]
pub struct MealWindows {
    pub dinner: MealWindow,
    pub lunch: MealWindow,
    pub breakfast: MealWindow,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WindowsEntry {
    dinner: WindowEntry,
    lunch: WindowEntry,
    breakfast: WindowEntry,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WindowEntry {
    start: Option<NaiveTime>,
    end: Option<NaiveTime>,
}

impl WindowEntry {
    fn or(self, base: MealWindow) -> MealWindow {
        MealWindow {
            start: self.start.unwrap_or(base.start),
            end: self.end.unwrap_or(base.end),
        }
    }
}

impl From<WindowsEntry> for MealWindows {
    fn from(entry: WindowsEntry) -> Self {
        let base = MealWindows::default();
        Self {
            dinner: entry.dinner.or(base.dinner),
            lunch: entry.lunch.or(base.lunch),
            breakfast: entry.breakfast.or(base.breakfast),
        }
    }
}

impl Default for MealWindows {
    fn default() -> Self {
        Self::extended()
    }
}

fn hms(h: u32, m: u32, s: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, s).unwrap_or_default()
}

impl MealWindows {
    /// Canonical windows: Dinner 19:00:00-23:30:00, Lunch 12:00:00-15:30:00,
    /// Breakfast 05:30:00-09:50:00.
    pub fn extended() -> Self {
        Self {
            dinner: MealWindow::new(hms(19, 0, 0), hms(23, 30, 0)),
            lunch: MealWindow::new(hms(12, 0, 0), hms(15, 30, 0)),
            breakfast: MealWindow::new(hms(5, 30, 0), hms(9, 50, 0)),
        }
    }

    /// Narrow windows: Dinner 19:00-23:00, Lunch 12:00-15:00,
    /// Breakfast 06:00-09:00.
    pub fn narrow() -> Self {
        Self {
            dinner: MealWindow::new(hms(19, 0, 0), hms(23, 0, 0)),
            lunch: MealWindow::new(hms(12, 0, 0), hms(15, 0, 0)),
            breakfast: MealWindow::new(hms(6, 0, 0), hms(9, 0, 0)),
        }
    }

    pub fn get(&self, category: MealCategory) -> &MealWindow {
        match category {
            MealCategory::Dinner => &self.dinner,
            MealCategory::Lunch => &self.lunch,
            MealCategory::Breakfast => &self.breakfast,
        }
    }

    /// Windows in priority order.
    pub fn iter(&self) -> impl Iterator<Item = (MealCategory, &MealWindow)> {
        MealCategory::PRIORITY.into_iter().map(|c| (c, self.get(c)))
    }

    /// First window (in priority order) containing `t`.
    pub fn categorize(&self, t: NaiveTime) -> Option<MealCategory> {
        self.iter().find(|(_, w)| w.contains(t)).map(|(c, _)| c)
    }

    /// Every window must satisfy `start <= end`.
    pub fn validate(&self) -> AppResult<()> {
        for (cat, w) in self.iter() {
            if w.start > w.end {
                return Err(AppError::InvalidWindow {
                    name: cat.config_key().to_string(),
                    reason: format!("start {} is after end {}", w.start, w.end),
                });
            }
        }
        Ok(())
    }

    /// Pairs of windows that share at least one instant.
    pub fn overlapping_pairs(&self) -> Vec<(MealCategory, MealCategory)> {
        let windows: Vec<_> = self.iter().collect();
        let mut out = Vec::new();
        for (i, (a, wa)) in windows.iter().enumerate() {
            for (b, wb) in windows.iter().skip(i + 1) {
                if wa.overlaps(wb) {
                    out.push((*a, *b));
                }
            }
        }
        out
    }
}
