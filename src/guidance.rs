//! Plan guidance
//!
//! The written advice shown alongside the numbers: the event-day rule,
//! strategy notes that quote the plan's own targets, and considerations
//! specific to male and female athletes.

use serde::Serialize;

use crate::models::{AthleteProfile, Gender, NutritionPlan};
use crate::nutrition::protein_multiplier;

/// Explanation lines for the event-day 80/20 rule
pub const EVENT_DAY_LINES: [&str; 2] = [
    "80% of choices stay on-plan (protein priority, vegetable focus)",
    "20% for enjoyment (dessert, drinks, indulgences) - guilt-free",
];

/// A titled piece of advice
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrategyNote {
    pub title: &'static str,
    pub body: String,
}

/// Strategy notes for a plan, in display order
pub fn strategy_notes(profile: &AthleteProfile, plan: &NutritionPlan) -> Vec<StrategyNote> {
    vec![
        StrategyNote {
            title: "Protein priority",
            body: format!(
                "Hit {}g daily. {:.1}g/kg for {} athletes. Essential for muscle preservation.",
                plan.training.protein,
                protein_multiplier(profile.gender),
                profile.gender.as_str()
            ),
        },
        StrategyNote {
            title: "Carb cycling",
            body: format!(
                "Higher carbs ({}g) on training days. Reduce to {}g on rest days. Matches energy demands.",
                plan.training.carbs, plan.rest.carbs
            ),
        },
        StrategyNote {
            title: "Timing matters",
            body: "Pre-workout: simple carbs. Post-workout (30min): protein + carbs for recovery. \
                   Events: eat strategic meal before arriving."
                .to_string(),
        },
        StrategyNote {
            title: "Stay strong",
            body: "Maintain strength training 2x/week minimum. Weight room work = race speed. \
                   Critical during off-season."
                .to_string(),
        },
    ]
}

/// Considerations for the athlete's sex
pub fn gender_considerations(gender: Gender, plan: &NutritionPlan) -> Vec<String> {
    let protein = format!(
        "Protein: {}g/day ({:.1}g/kg)",
        plan.training.protein,
        protein_multiplier(gender)
    );

    match gender {
        Gender::Male => vec![
            "Higher calorie needs due to larger muscle mass and metabolic rate".to_string(),
            format!("{} maintains muscle during reduced training", protein),
            "Post-peak age testosterone decline makes nutrition timing even more critical"
                .to_string(),
            "Focus on zinc, magnesium, vitamin D for hormonal health".to_string(),
        ],
        Gender::Female => vec![
            "Moderate calorie approach optimized for female physiology".to_string(),
            format!("{} supports lean mass", protein),
            "Iron-rich foods critical - include lean red meat, spinach, legumes".to_string(),
            "Hormonal considerations - adjust carbs based on menstrual cycle if applicable"
                .to_string(),
            "Calcium and vitamin D priority for bone health".to_string(),
        ],
    }
}

/// "3 training days + 4 rest days"
pub fn weekly_split(profile: &AthleteProfile) -> String {
    format!(
        "{} training days + {} rest days",
        profile.training_days_per_week(),
        profile.rest_days_per_week()
    )
}
