//! Daily nutrition tracking.

pub mod log;
pub mod types;

pub use log::NutritionLog;
pub use types::{
    DailyNutrition, GoalProgress, MacroTotals, MealType, NutritionEntry, NutritionError,
};
