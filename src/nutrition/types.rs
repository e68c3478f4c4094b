//! Nutrition types.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::storage::DatabaseError;

/// Meal an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    #[default]
    Snack,
}

impl std::fmt::Display for MealType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MealType::Breakfast => write!(f, "Breakfast"),
            MealType::Lunch => write!(f, "Lunch"),
            MealType::Dinner => write!(f, "Dinner"),
            MealType::Snack => write!(f, "Snack"),
        }
    }
}

impl std::str::FromStr for MealType {
    type Err = NutritionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "breakfast" => Ok(MealType::Breakfast),
            "lunch" => Ok(MealType::Lunch),
            "dinner" => Ok(MealType::Dinner),
            "snack" => Ok(MealType::Snack),
            other => Err(NutritionError::InvalidEntry(format!("unknown meal '{}'", other))),
        }
    }
}

/// A logged food item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionEntry {
    /// Unique identifier
    pub id: String,
    /// Food name
    pub name: String,
    /// Meal
    #[serde(default)]
    pub meal: MealType,
    /// Energy (kcal)
    pub calories: u32,
    /// Protein in grams
    #[serde(default)]
    pub protein_g: f64,
    /// Carbohydrates in grams
    #[serde(default)]
    pub carbs_g: f64,
    /// Fat in grams
    #[serde(default)]
    pub fat_g: f64,
    /// When it was logged
    #[serde(default = "Utc::now")]
    pub logged_at: DateTime<Utc>,
}

impl NutritionEntry {
    /// Create an entry logged now.
    pub fn new(name: impl Into<String>, meal: MealType, calories: u32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            meal,
            calories,
            protein_g: 0.0,
            carbs_g: 0.0,
            fat_g: 0.0,
            logged_at: Utc::now(),
        }
    }

    /// Set macronutrients in grams.
    pub fn with_macros(mut self, protein_g: f64, carbs_g: f64, fat_g: f64) -> Self {
        self.protein_g = protein_g;
        self.carbs_g = carbs_g;
        self.fat_g = fat_g;
        self
    }
}

/// Summed intake.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroTotals {
    pub calories: u64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

impl MacroTotals {
    /// Sum a set of entries.
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a NutritionEntry>) -> Self {
        entries.into_iter().fold(Self::default(), |mut totals, e| {
            totals.calories += u64::from(e.calories);
            totals.protein_g += e.protein_g;
            totals.carbs_g += e.carbs_g;
            totals.fat_g += e.fat_g;
            totals
        })
    }
}

/// One day's log with totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyNutrition {
    pub date: NaiveDate,
    pub entries: Vec<NutritionEntry>,
    pub totals: MacroTotals,
}

impl DailyNutrition {
    /// Totals for a single meal.
    pub fn meal_totals(&self, meal: MealType) -> MacroTotals {
        MacroTotals::from_entries(self.entries.iter().filter(|e| e.meal == meal))
    }
}

/// Fraction of each daily goal reached (1.0 = goal met).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GoalProgress {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Nutrition log errors.
#[derive(Debug, Error)]
pub enum NutritionError {
    #[error("Invalid entry: {0}")]
    InvalidEntry(String),

    #[error("Storage error: {0}")]
    Storage(#[from] DatabaseError),
}
