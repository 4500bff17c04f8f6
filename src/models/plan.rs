//! Nutrition plan model
//!
//! Daily calorie and macro targets produced by the calculator.

use serde::{Deserialize, Serialize};

use crate::nutrition::units::{
    round_half_up, KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN,
};

/// Fixed policy text for event and party days
pub const EVENT_GUIDELINE: &str = "80/20 rule: 80% on-plan choices, 20% enjoyment";

/// Calorie and macro targets for one kind of day
///
/// `calories` equals the calorie content of the three macros. For absurd
/// body weights the products saturate at the `i64` bounds instead of
/// overflowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayTargets {
    pub calories: i64,
    pub protein: i64, // grams
    pub carbs: i64,   // grams
    pub fat: i64,     // grams
}

impl DayTargets {
    /// Build targets from macro grams, deriving the calorie total
    pub fn from_grams(protein: i64, carbs: i64, fat: i64) -> Self {
        Self {
            calories: protein
                .saturating_mul(KCAL_PER_G_PROTEIN)
                .saturating_add(carbs.saturating_mul(KCAL_PER_G_CARBS))
                .saturating_add(fat.saturating_mul(KCAL_PER_G_FAT)),
            protein,
            carbs,
            fat,
        }
    }

    pub fn protein_calories(&self) -> i64 {
        self.protein.saturating_mul(KCAL_PER_G_PROTEIN)
    }

    pub fn carb_calories(&self) -> i64 {
        self.carbs.saturating_mul(KCAL_PER_G_CARBS)
    }

    pub fn fat_calories(&self) -> i64 {
        self.fat.saturating_mul(KCAL_PER_G_FAT)
    }

    /// Share of calories from each macro, rounded to whole percent
    ///
    /// Rounding means the three shares may sum to 99 or 101.
    pub fn percentages(&self) -> MacroPercentages {
        if self.calories <= 0 {
            return MacroPercentages::default();
        }
        let total = self.calories as f64;
        let share = |kcal: i64| round_half_up(kcal as f64 / total * 100.0);

        MacroPercentages {
            protein_percent: share(self.protein_calories()),
            carbs_percent: share(self.carb_calories()),
            fat_percent: share(self.fat_calories()),
        }
    }
}

/// Macronutrient percentage breakdown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroPercentages {
    pub protein_percent: i64,
    pub carbs_percent: i64,
    pub fat_percent: i64,
}

/// Target for event and party days
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventTarget {
    pub base_calories: i64,
    pub guideline: String,
}

/// The full plan returned for one completed questionnaire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionPlan {
    pub bmr: i64,
    pub training: DayTargets,
    pub rest: DayTargets,
    pub event: EventTarget,
    pub weekly_calories: i64,
}
