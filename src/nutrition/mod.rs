//! Nutrition calculation module
//!
//! Unit handling and the plan calculation itself.

pub mod calculator;
pub mod units;

pub use calculator::{
    activity_multiplier, basal_metabolic_rate, compute, day_calorie_estimate, event_target,
    fat_grams, grams_for_weight, partition_day, protein_multiplier, training_carb_multiplier,
    weekly_calories, BodyMetrics, REST_CARB_G_PER_KG, REST_DAY_MULTIPLIER, REST_FAT_FLOOR_G,
    TRAINING_FAT_FLOOR_G,
};
pub use units::{inches_to_cm, lbs_to_kg, parse_decimal, parse_integer, round_half_up};
