//! Endurance Fuel Planner Library
//!
//! Calorie and macronutrient targets for endurance athletes, computed from a
//! short staged questionnaire.

pub mod build_info;
pub mod guidance;
pub mod models;
pub mod nutrition;
pub mod questionnaire;
pub mod report;

pub use models::{AthleteProfile, NutritionPlan};
pub use nutrition::compute;
