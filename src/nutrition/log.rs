//! Per-day nutrition log stored under `nutrition_<date>`.

use chrono::NaiveDate;

use super::types::{DailyNutrition, GoalProgress, MacroTotals, NutritionEntry, NutritionError};
use crate::storage::keys::nutrition_key;
use crate::storage::{Database, NutritionGoals};

/// Nutrition log over the key-value store.
pub struct NutritionLog<'a> {
    db: &'a Database,
}

impl<'a> NutritionLog<'a> {
    /// Create a nutrition log over a database.
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Add an entry to a day. Returns the number of entries that day.
    pub fn add_entry(
        &self,
        date: NaiveDate,
        entry: &NutritionEntry,
    ) -> Result<usize, NutritionError> {
        if entry.name.trim().is_empty() {
            return Err(NutritionError::InvalidEntry("name is empty".to_string()));
        }
        let macros = [entry.protein_g, entry.carbs_g, entry.fat_g];
        if macros.iter().any(|g| !g.is_finite() || *g < 0.0) {
            return Err(NutritionError::InvalidEntry(format!(
                "macros must be non-negative for '{}'",
                entry.name
            )));
        }

        let count = self.db.append_json(&nutrition_key(date), entry)?;
        tracing::debug!("Logged {} ({} kcal) on {}", entry.name, entry.calories, date);
        Ok(count)
    }

    /// Remove an entry by ID. Returns true if it existed.
    pub fn remove_entry(&self, date: NaiveDate, id: &str) -> Result<bool, NutritionError> {
        let key = nutrition_key(date);
        let mut entries: Vec<NutritionEntry> = self.db.get_list(&key)?;
        let before = entries.len();
        entries.retain(|e| e.id != id);

        if entries.len() == before {
            return Ok(false);
        }

        if entries.is_empty() {
            self.db.remove(&key)?;
        } else {
            self.db.set_json(&key, &entries)?;
        }
        Ok(true)
    }

    /// A day's entries and totals.
    pub fn day(&self, date: NaiveDate) -> Result<DailyNutrition, NutritionError> {
        let entries: Vec<NutritionEntry> = self.db.get_list(&nutrition_key(date))?;
        let totals = MacroTotals::from_entries(&entries);
        Ok(DailyNutrition {
            date,
            entries,
            totals,
        })
    }

    /// Fraction of each goal reached on a day.
    pub fn goal_progress(
        &self,
        date: NaiveDate,
        goals: &NutritionGoals,
    ) -> Result<GoalProgress, NutritionError> {
        let totals = self.day(date)?.totals;
        Ok(GoalProgress {
            calories: ratio(totals.calories as f64, goals.calories as f64),
            protein: ratio(totals.protein_g, goals.protein_g),
            carbs: ratio(totals.carbs_g, goals.carbs_g),
            fat: ratio(totals.fat_g, goals.fat_g),
        })
    }
}

fn ratio(value: f64, goal: f64) -> f64 {
    if goal <= 0.0 {
        0.0
    } else {
        value / goal
    }
}
