//! Data models
//!
//! The athlete profile going into the calculator and the plan coming out.

mod athlete;
mod plan;

pub use athlete::{AthleteProfile, BodyStats, Gender, Goals, TrainingSchedule};
pub use plan::{DayTargets, EventTarget, MacroPercentages, NutritionPlan, EVENT_GUIDELINE};
