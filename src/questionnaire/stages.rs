//! Questionnaire stages
//!
//! Each stage is a value. Submitting answers to a stage validates them and
//! returns the next stage, which owns everything collected so far. Nothing is
//! mutated in place: a rejected submission leaves the current stage usable.
//! Going back keeps every accepted value so the earlier stage can be shown
//! pre-filled; only `reset` clears them.
//!
//! ```text
//! BodyStage --submit--> TrainingStage --submit--> GoalStage --submit--> CompletedQuestionnaire
//!     ^                      |                        |                         |
//!     +------- back ---------+          <--- back ----+                         |
//!     +------------------------------- reset -----------------------------------+
//! ```

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{AthleteProfile, BodyStats, Gender, Goals, NutritionPlan, TrainingSchedule};
use crate::nutrition::{compute, parse_decimal, parse_integer};

use super::error::{QuestionnaireError, QuestionnaireResult};

const BODY_STAGE: &str = "Body stats";
const TRAINING_STAGE: &str = "Training schedule";
const GOAL_STAGE: &str = "Goals";

// ============================================================================
// Raw Answers
// ============================================================================

/// Stage 1 answers as typed into the form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyStatsAnswers {
    pub gender: String,
    pub age: String,
    pub sport: String,
    /// Pounds
    pub current_weight: String,
    /// Inches
    pub height: String,
}

/// Stage 2 answers as typed into the form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingAnswers {
    pub weekly_hours: String,
    /// Weekday labels such as "Monday" or "sat"
    pub training_days: Vec<String>,
    /// Holiday event band such as "3-5"
    pub holiday_events: String,
}

/// Stage 3 answers as typed into the form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GoalAnswers {
    pub goal: String,
    /// Pounds, optional
    pub target_weight: String,
}

/// A whole questionnaire's answers, as read from a file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Answers {
    #[serde(flatten)]
    pub body: BodyStatsAnswers,
    #[serde(flatten)]
    pub training: TrainingAnswers,
    #[serde(flatten)]
    pub goals: GoalAnswers,
}

impl Answers {
    /// Walk all three stages in order
    pub fn complete(&self) -> QuestionnaireResult<CompletedQuestionnaire> {
        BodyStage::new()
            .submit(&self.body)?
            .submit(&self.training)?
            .submit(&self.goals)
    }
}

/// Trimmed value of a required field
fn require<'a>(
    stage: &'static str,
    field: &'static str,
    value: &'a str,
) -> QuestionnaireResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(QuestionnaireError::MissingField { stage, field });
    }
    Ok(trimmed)
}

fn parse_weekday(label: &str) -> QuestionnaireResult<Weekday> {
    label
        .trim()
        .parse::<Weekday>()
        .map_err(|_| QuestionnaireError::InvalidChoice {
            stage: TRAINING_STAGE,
            field: "training day",
            value: label.to_string(),
        })
}

// ============================================================================
// Stages
// ============================================================================

/// First stage
///
/// Fresh from `new` or `reset` it holds nothing. Reached through `back` it
/// still carries the body stats and schedule accepted earlier.
#[derive(Debug, Clone, Default)]
pub struct BodyStage {
    body: Option<BodyStats>,
    schedule: Option<TrainingSchedule>,
}

impl BodyStage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Body stats accepted before going back, if any
    pub fn previous_body(&self) -> Option<&BodyStats> {
        self.body.as_ref()
    }

    /// Schedule accepted before going back, if any
    pub fn previous_schedule(&self) -> Option<&TrainingSchedule> {
        self.schedule.as_ref()
    }

    /// Requires gender, age, sport, current weight and height
    ///
    /// Numbers only need to be present; unparseable ones fall back to
    /// defaults when the plan is computed.
    pub fn submit(&self, answers: &BodyStatsAnswers) -> QuestionnaireResult<TrainingStage> {
        let gender_text = require(BODY_STAGE, "gender", &answers.gender)?;
        let age = require(BODY_STAGE, "age", &answers.age)?;
        let sport = require(BODY_STAGE, "sport", &answers.sport)?;
        let weight = require(BODY_STAGE, "current weight", &answers.current_weight)?;
        let height = require(BODY_STAGE, "height", &answers.height)?;

        let gender =
            Gender::from_str(gender_text).ok_or_else(|| QuestionnaireError::InvalidChoice {
                stage: BODY_STAGE,
                field: "gender",
                value: gender_text.to_string(),
            })?;

        let body = BodyStats {
            gender,
            age: parse_integer(age),
            current_weight_lbs: parse_decimal(weight),
            height_inches: parse_decimal(height),
            sport: sport.to_string(),
        };
        debug!(?body, "Body stats accepted");

        Ok(TrainingStage {
            body,
            schedule: self.schedule.clone(),
        })
    }
}

/// Second stage: body stats collected
#[derive(Debug, Clone)]
pub struct TrainingStage {
    body: BodyStats,
    /// Carried over from an earlier visit
    schedule: Option<TrainingSchedule>,
}

impl TrainingStage {
    pub fn body(&self) -> &BodyStats {
        &self.body
    }

    /// Schedule accepted before going back, if any
    pub fn previous_schedule(&self) -> Option<&TrainingSchedule> {
        self.schedule.as_ref()
    }

    /// Requires weekly hours, at least one training day and the holiday event band
    pub fn submit(&self, answers: &TrainingAnswers) -> QuestionnaireResult<GoalStage> {
        let hours = require(TRAINING_STAGE, "weekly hours", &answers.weekly_hours)?;

        let labels: Vec<&str> = answers
            .training_days
            .iter()
            .map(|d| d.trim())
            .filter(|d| !d.is_empty())
            .collect();
        if labels.is_empty() {
            return Err(QuestionnaireError::NoTrainingDays);
        }
        let days = labels
            .into_iter()
            .map(parse_weekday)
            .collect::<QuestionnaireResult<Vec<_>>>()?;

        let events = require(TRAINING_STAGE, "holiday events", &answers.holiday_events)?;

        let schedule = TrainingSchedule::new(parse_decimal(hours), &days, events);
        debug!(?schedule, "Training schedule accepted");

        Ok(GoalStage {
            body: self.body.clone(),
            schedule,
        })
    }

    pub fn back(self) -> BodyStage {
        BodyStage {
            body: Some(self.body),
            schedule: self.schedule,
        }
    }
}

/// Third stage: body stats and schedule collected
#[derive(Debug, Clone)]
pub struct GoalStage {
    body: BodyStats,
    schedule: TrainingSchedule,
}

impl GoalStage {
    pub fn body(&self) -> &BodyStats {
        &self.body
    }

    pub fn schedule(&self) -> &TrainingSchedule {
        &self.schedule
    }

    /// Requires a goal, assembles the profile and computes the plan
    pub fn submit(&self, answers: &GoalAnswers) -> QuestionnaireResult<CompletedQuestionnaire> {
        let goal = require(GOAL_STAGE, "goal", &answers.goal)?;

        let goals = Goals {
            goal: goal.to_string(),
            target_weight_lbs: answers.target_weight.trim().to_string(),
        };
        let profile = AthleteProfile::assemble(self.body.clone(), self.schedule.clone(), goals);
        let plan = compute(&profile);
        debug!(bmr = plan.bmr, weekly = plan.weekly_calories, "Plan computed");

        Ok(CompletedQuestionnaire { profile, plan })
    }

    pub fn back(self) -> TrainingStage {
        TrainingStage {
            body: self.body,
            schedule: Some(self.schedule),
        }
    }
}

/// Final state: the submitted profile and its plan
#[derive(Debug, Clone, PartialEq)]
pub struct CompletedQuestionnaire {
    profile: AthleteProfile,
    plan: NutritionPlan,
}

impl CompletedQuestionnaire {
    pub fn profile(&self) -> &AthleteProfile {
        &self.profile
    }

    pub fn plan(&self) -> &NutritionPlan {
        &self.plan
    }

    pub fn into_parts(self) -> (AthleteProfile, NutritionPlan) {
        (self.profile, self.plan)
    }

    /// Discard everything and start over
    pub fn reset(self) -> BodyStage {
        BodyStage::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_answers() -> BodyStatsAnswers {
        BodyStatsAnswers {
            gender: "male".to_string(),
            age: "45".to_string(),
            sport: "triathlon".to_string(),
            current_weight: "155".to_string(),
            height: "67".to_string(),
        }
    }

    fn training_answers() -> TrainingAnswers {
        TrainingAnswers {
            weekly_hours: "8".to_string(),
            training_days: vec!["Monday".to_string(), "Wednesday".to_string(), "Friday".to_string()],
            holiday_events: "3-5".to_string(),
        }
    }

    fn goal_answers() -> GoalAnswers {
        GoalAnswers {
            goal: "pr-race".to_string(),
            target_weight: String::new(),
        }
    }

    #[test]
    fn test_full_walk_computes_plan() {
        let done = BodyStage::new()
            .submit(&body_answers())
            .unwrap()
            .submit(&training_answers())
            .unwrap()
            .submit(&goal_answers())
            .unwrap();

        assert_eq!(done.profile().training_days_per_week(), 3);
        assert_eq!(done.profile().sport, "triathlon");
        assert_eq!(done.plan().bmr, 1547);
        assert_eq!(done.plan().training.calories, 2668);
        assert_eq!(done.plan().weekly_calories, 16040);
    }

    #[test]
    fn test_missing_body_field() {
        let mut answers = body_answers();
        answers.height = "  ".to_string();
        let err = BodyStage::new().submit(&answers).unwrap_err();
        assert_eq!(
            err,
            QuestionnaireError::MissingField {
                stage: "Body stats",
                field: "height"
            }
        );
        assert_eq!(err.to_string(), "Body stats: height is required");
    }

    #[test]
    fn test_invalid_gender() {
        let mut answers = body_answers();
        answers.gender = "robot".to_string();
        let err = BodyStage::new().submit(&answers).unwrap_err();
        assert!(matches!(err, QuestionnaireError::InvalidChoice { field: "gender", .. }));
    }

    #[test]
    fn test_gender_short_forms_rejected() {
        let mut answers = body_answers();
        answers.gender = "m".to_string();
        let err = BodyStage::new().submit(&answers).unwrap_err();
        assert!(matches!(err, QuestionnaireError::InvalidChoice { field: "gender", .. }));
    }

    #[test]
    fn test_out_of_range_weights_complete() {
        for weight in ["1e18", "1e400"] {
            let mut answers = body_answers();
            answers.current_weight = weight.to_string();
            let done = BodyStage::new()
                .submit(&answers)
                .unwrap()
                .submit(&training_answers())
                .unwrap()
                .submit(&goal_answers())
                .unwrap();
            assert!(done.plan().training.fat >= 40);
            assert!(done.plan().rest.fat >= 45);
        }
    }

    #[test]
    fn test_unparseable_numbers_pass_gating() {
        let mut answers = body_answers();
        answers.age = "unknown".to_string();
        answers.current_weight = "abc".to_string();
        let stage = BodyStage::new().submit(&answers).unwrap();
        assert_eq!(stage.body().age, None);
        assert_eq!(stage.body().current_weight_lbs, None);
        assert_eq!(stage.body().height_inches, Some(67.0));
    }

    #[test]
    fn test_no_training_days() {
        let stage = BodyStage::new().submit(&body_answers()).unwrap();
        let mut answers = training_answers();
        answers.training_days = vec![" ".to_string()];
        assert_eq!(stage.submit(&answers).unwrap_err(), QuestionnaireError::NoTrainingDays);
    }

    #[test]
    fn test_bad_weekday_label() {
        let stage = BodyStage::new().submit(&body_answers()).unwrap();
        let mut answers = training_answers();
        answers.training_days.push("Funday".to_string());
        let err = stage.submit(&answers).unwrap_err();
        assert_eq!(
            err,
            QuestionnaireError::InvalidChoice {
                stage: "Training schedule",
                field: "training day",
                value: "Funday".to_string(),
            }
        );
    }

    #[test]
    fn test_weekday_labels_any_case_and_repeats() {
        let stage = BodyStage::new().submit(&body_answers()).unwrap();
        let mut answers = training_answers();
        answers.training_days = vec![
            "saturday".to_string(),
            "SUN".to_string(),
            "Saturday".to_string(),
        ];
        let goals = stage.submit(&answers).unwrap();
        assert_eq!(goals.schedule().training_days, vec![Weekday::Sat, Weekday::Sun]);
    }

    #[test]
    fn test_missing_holiday_events() {
        let stage = BodyStage::new().submit(&body_answers()).unwrap();
        let mut answers = training_answers();
        answers.holiday_events.clear();
        let err = stage.submit(&answers).unwrap_err();
        assert!(matches!(err, QuestionnaireError::MissingField { field: "holiday events", .. }));
    }

    #[test]
    fn test_missing_goal() {
        let stage = BodyStage::new()
            .submit(&body_answers())
            .unwrap()
            .submit(&training_answers())
            .unwrap();
        let err = stage.submit(&GoalAnswers::default()).unwrap_err();
        assert_eq!(err.to_string(), "Goals: goal is required");
    }

    #[test]
    fn test_rejected_submit_keeps_stage() {
        let stage = BodyStage::new().submit(&body_answers()).unwrap();
        assert!(stage.submit(&TrainingAnswers::default()).is_err());
        assert!(stage.submit(&training_answers()).is_ok());
    }

    #[test]
    fn test_back_keeps_collected_values() {
        let goals = BodyStage::new()
            .submit(&body_answers())
            .unwrap()
            .submit(&training_answers())
            .unwrap();
        let training = goals.back();
        assert_eq!(training.body().current_weight_lbs, Some(155.0));
        let schedule = training.previous_schedule().unwrap();
        assert_eq!(
            schedule.training_days,
            vec![Weekday::Mon, Weekday::Wed, Weekday::Fri]
        );
        assert_eq!(schedule.holiday_events, "3-5");

        let body = training.back();
        assert_eq!(body.previous_body().unwrap().sport, "triathlon");
        assert_eq!(body.previous_body().unwrap().age, Some(45));
        assert_eq!(body.previous_schedule().unwrap().weekly_hours, Some(8.0));
    }

    #[test]
    fn test_resubmit_after_back_carries_schedule_forward() {
        let body = BodyStage::new()
            .submit(&body_answers())
            .unwrap()
            .submit(&training_answers())
            .unwrap()
            .back()
            .back();

        let mut answers = body_answers();
        answers.current_weight = "160".to_string();
        let training = body.submit(&answers).unwrap();

        assert_eq!(training.body().current_weight_lbs, Some(160.0));
        assert_eq!(training.previous_schedule().unwrap().days_per_week(), 3);
    }

    #[test]
    fn test_fresh_stage_has_nothing_collected() {
        let stage = BodyStage::new();
        assert!(stage.previous_body().is_none());
        assert!(stage.previous_schedule().is_none());

        let training = stage.submit(&body_answers()).unwrap();
        assert!(training.previous_schedule().is_none());
    }

    #[test]
    fn test_answers_from_json() {
        let json = r#"{
            "gender": "female",
            "age": "30",
            "sport": "running",
            "current_weight": "130",
            "height": "65",
            "weekly_hours": "3",
            "training_days": ["Tuesday", "Thursday", "Saturday", "Sunday"],
            "holiday_events": "1-2",
            "goal": "faster"
        }"#;
        let answers: Answers = serde_json::from_str(json).unwrap();
        let done = answers.complete().unwrap();

        assert_eq!(done.profile().gender, Gender::Female);
        assert_eq!(done.plan().training.protein, 118);
        assert_eq!(done.plan().rest.fat, 45);

        let (_, plan) = done.clone().into_parts();
        assert_eq!(&plan, done.plan());
        let restart = done.reset();
        assert!(restart.previous_body().is_none());
        assert!(restart.previous_schedule().is_none());
    }
}
