//! Nutrition plan calculation
//!
//! Maps an `AthleteProfile` to a `NutritionPlan`. Each step is its own
//! function so it can be checked in isolation; `compute` runs them in order.
//!
//! 1. Convert pounds and inches, substituting defaults for unusable answers
//! 2. BMR by Mifflin-St Jeor
//! 3. Day calorie estimates from the activity and rest multipliers
//! 4. Protein and carb grams from body weight
//! 5. Fat fills what is left, subject to a floor
//! 6. Day calories are re-derived from the rounded grams
//!
//! Rounding happens at every step listed, and later steps consume the
//! rounded grams, so the order of operations is part of the result.

use tracing::{debug, warn};

use crate::models::{
    AthleteProfile, DayTargets, EventTarget, Gender, NutritionPlan, EVENT_GUIDELINE,
};

use super::units::{
    inches_to_cm, lbs_to_kg, round_half_up, usable, DEFAULT_AGE, DEFAULT_HEIGHT_CM,
    DEFAULT_WEEKLY_HOURS, DEFAULT_WEIGHT_KG, KCAL_PER_G_CARBS, KCAL_PER_G_FAT,
    KCAL_PER_G_PROTEIN,
};

/// Multiplier on BMR for a rest day
pub const REST_DAY_MULTIPLIER: f64 = 1.3;
/// Rest-day carbohydrate in grams per kilogram
pub const REST_CARB_G_PER_KG: f64 = 3.5;
/// Minimum fat on a training day, grams
pub const TRAINING_FAT_FLOOR_G: f64 = 40.0;
/// Minimum fat on a rest day, grams
pub const REST_FAT_FLOOR_G: f64 = 45.0;

// ============================================================================
// Step 1: Inputs
// ============================================================================

/// Calculator inputs in metric units with defaults already applied
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyMetrics {
    pub gender: Gender,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age: i32,
    pub weekly_hours: f64,
}

impl BodyMetrics {
    /// Convert a profile, substituting defaults for missing, zero or NaN values
    ///
    /// Weight and height default after conversion: an unusable weight yields
    /// exactly 70 kg, not a pound value run back through the conversion.
    pub fn from_profile(profile: &AthleteProfile) -> Self {
        let weight_kg = profile
            .current_weight_lbs
            .map(lbs_to_kg)
            .and_then(usable)
            .unwrap_or_else(|| {
                warn!(
                    "Weight unusable ({:?}), using {} kg",
                    profile.current_weight_lbs, DEFAULT_WEIGHT_KG
                );
                DEFAULT_WEIGHT_KG
            });

        let height_cm = profile
            .height_inches
            .map(inches_to_cm)
            .and_then(usable)
            .unwrap_or_else(|| {
                warn!(
                    "Height unusable ({:?}), using {} cm",
                    profile.height_inches, DEFAULT_HEIGHT_CM
                );
                DEFAULT_HEIGHT_CM
            });

        let weekly_hours = profile
            .weekly_training_hours
            .and_then(usable)
            .unwrap_or_else(|| {
                warn!(
                    "Weekly hours unusable ({:?}), using {}",
                    profile.weekly_training_hours, DEFAULT_WEEKLY_HOURS
                );
                DEFAULT_WEEKLY_HOURS
            });

        let age = profile.age.filter(|a| *a != 0).unwrap_or_else(|| {
            warn!("Age unusable ({:?}), using {}", profile.age, DEFAULT_AGE);
            DEFAULT_AGE
        });

        Self {
            gender: profile.gender,
            weight_kg,
            height_cm,
            age,
            weekly_hours,
        }
    }
}

// ============================================================================
// Step 2: Basal Metabolic Rate
// ============================================================================

/// Mifflin-St Jeor BMR in kcal/day, unrounded
///
/// `10 x kg + 6.25 x cm - 5 x age`, then +5 for men or -161 for women.
pub fn basal_metabolic_rate(metrics: &BodyMetrics) -> f64 {
    let base = 10.0 * metrics.weight_kg + 6.25 * metrics.height_cm - 5.0 * metrics.age as f64;
    match metrics.gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

// ============================================================================
// Step 3: Activity Scaling
// ============================================================================

/// Training-day multiplier on BMR for a weekly training volume
///
/// Bands include their lower edge: 5 hours is already 1.65.
pub fn activity_multiplier(weekly_hours: f64) -> f64 {
    if weekly_hours < 5.0 {
        1.55
    } else if weekly_hours < 10.0 {
        1.65
    } else if weekly_hours < 15.0 {
        1.725
    } else {
        1.9
    }
}

/// Day calorie estimate before the macro split
pub fn day_calorie_estimate(bmr: f64, multiplier: f64) -> i64 {
    round_half_up(bmr * multiplier)
}

// ============================================================================
// Step 4: Protein and Carbohydrate
// ============================================================================

/// Protein in grams per kilogram of body weight
pub fn protein_multiplier(gender: Gender) -> f64 {
    match gender {
        Gender::Male => 2.2,
        Gender::Female => 2.0,
    }
}

/// Training-day carbohydrate in grams per kilogram
///
/// Edges go to the higher band: 8 hours is 6 g/kg, 12 hours is 7 g/kg.
pub fn training_carb_multiplier(weekly_hours: f64) -> f64 {
    if weekly_hours < 8.0 {
        5.0
    } else if weekly_hours < 12.0 {
        6.0
    } else {
        7.0
    }
}

pub fn grams_for_weight(weight_kg: f64, grams_per_kg: f64) -> i64 {
    round_half_up(weight_kg * grams_per_kg)
}

// ============================================================================
// Step 5-6: Fat and Final Day Totals
// ============================================================================

/// Fat grams filling the remainder of the day estimate
///
/// The remainder is not clamped: a negative budget simply loses to the floor.
/// Integer steps saturate so out-of-range weights cannot overflow.
pub fn fat_grams(day_estimate: i64, protein_g: i64, carb_g: i64, floor_g: f64) -> i64 {
    let fat_calories = day_estimate
        .saturating_sub(protein_g.saturating_mul(KCAL_PER_G_PROTEIN))
        .saturating_sub(carb_g.saturating_mul(KCAL_PER_G_CARBS));
    round_half_up((fat_calories as f64 / KCAL_PER_G_FAT as f64).max(floor_g))
}

/// Split one day into macros and re-derive its calories from the grams
pub fn partition_day(day_estimate: i64, protein_g: i64, carb_g: i64, floor_g: f64) -> DayTargets {
    let fat_g = fat_grams(day_estimate, protein_g, carb_g, floor_g);
    DayTargets::from_grams(protein_g, carb_g, fat_g)
}

// ============================================================================
// Event Day and Weekly Total
// ============================================================================

/// Event-day target: midpoint of the training and rest day totals
pub fn event_target(training_calories: i64, rest_calories: i64) -> EventTarget {
    EventTarget {
        base_calories: round_half_up((training_calories as f64 + rest_calories as f64) / 2.0),
        guideline: EVENT_GUIDELINE.to_string(),
    }
}

/// Calories across a week with `training_days` training days and the rest as rest days
pub fn weekly_calories(training_calories: i64, rest_calories: i64, training_days: u8) -> i64 {
    let training_days = i64::from(training_days.min(7));
    training_calories
        .saturating_mul(training_days)
        .saturating_add(rest_calories.saturating_mul(7 - training_days))
}

// ============================================================================
// Full Plan
// ============================================================================

/// Compute the nutrition plan for a completed profile
///
/// Total over its input: unusable numbers fall back to defaults, so this
/// never fails.
pub fn compute(profile: &AthleteProfile) -> NutritionPlan {
    let metrics = BodyMetrics::from_profile(profile);

    let bmr = basal_metabolic_rate(&metrics);
    let activity = activity_multiplier(metrics.weekly_hours);
    let training_estimate = day_calorie_estimate(bmr, activity);
    let rest_estimate = day_calorie_estimate(bmr, REST_DAY_MULTIPLIER);

    let protein_g = grams_for_weight(metrics.weight_kg, protein_multiplier(metrics.gender));
    let training_carb_g = grams_for_weight(
        metrics.weight_kg,
        training_carb_multiplier(metrics.weekly_hours),
    );
    let rest_carb_g = grams_for_weight(metrics.weight_kg, REST_CARB_G_PER_KG);

    debug!(
        bmr,
        activity,
        training_estimate,
        rest_estimate,
        protein_g,
        training_carb_g,
        rest_carb_g,
        "Nutrition intermediates"
    );

    let training = partition_day(training_estimate, protein_g, training_carb_g, TRAINING_FAT_FLOOR_G);
    let rest = partition_day(rest_estimate, protein_g, rest_carb_g, REST_FAT_FLOOR_G);

    let event = event_target(training.calories, rest.calories);
    let weekly = weekly_calories(
        training.calories,
        rest.calories,
        profile.training_days_per_week(),
    );

    NutritionPlan {
        bmr: round_half_up(bmr),
        training,
        rest,
        event,
        weekly_calories: weekly,
    }
}
