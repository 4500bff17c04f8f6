//! Athlete profile model
//!
//! The questionnaire fills the profile in three stages. Each stage produces
//! its own validated value; `AthleteProfile::assemble` joins them once all
//! three exist.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Sex used by the BMR equation and the protein target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

/// Stage 1: body statistics and sport
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyStats {
    pub gender: Gender,
    /// `None` when the answer had no leading integer
    pub age: Option<i32>,
    pub current_weight_lbs: Option<f64>,
    pub height_inches: Option<f64>,
    pub sport: String,
}

/// Stage 2: training volume and the holiday calendar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSchedule {
    pub weekly_hours: Option<f64>,
    /// Distinct weekdays, Monday first
    pub training_days: Vec<Weekday>,
    pub holiday_events: String,
}

impl TrainingSchedule {
    /// Build a schedule, dropping repeated weekdays
    pub fn new(weekly_hours: Option<f64>, days: &[Weekday], holiday_events: &str) -> Self {
        let mut training_days: Vec<Weekday> = Vec::with_capacity(7);
        for day in days {
            if !training_days.contains(day) {
                training_days.push(*day);
            }
        }
        training_days.sort_by_key(|d| d.num_days_from_monday());

        Self {
            weekly_hours,
            training_days,
            holiday_events: holiday_events.to_string(),
        }
    }

    pub fn days_per_week(&self) -> u8 {
        self.training_days.len() as u8
    }
}

/// Stage 3: goals, carried through for display
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Goals {
    pub goal: String,
    pub target_weight_lbs: String,
}

/// Complete questionnaire answers handed to the calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AthleteProfile {
    pub gender: Gender,
    pub age: Option<i32>,
    pub current_weight_lbs: Option<f64>,
    pub height_inches: Option<f64>,
    pub weekly_training_hours: Option<f64>,
    pub training_days: Vec<Weekday>,

    // Display only
    pub sport: String,
    pub goal: String,
    pub target_weight_lbs: String,
    pub holiday_events: String,
}

impl AthleteProfile {
    /// Join the three stage values into a full profile
    pub fn assemble(body: BodyStats, schedule: TrainingSchedule, goals: Goals) -> Self {
        Self {
            gender: body.gender,
            age: body.age,
            current_weight_lbs: body.current_weight_lbs,
            height_inches: body.height_inches,
            weekly_training_hours: schedule.weekly_hours,
            training_days: schedule.training_days,
            sport: body.sport,
            goal: goals.goal,
            target_weight_lbs: goals.target_weight_lbs,
            holiday_events: schedule.holiday_events,
        }
    }

    /// Profile with only the fields the calculator reads; display fields are empty
    pub fn for_calculation(
        gender: Gender,
        age: Option<i32>,
        current_weight_lbs: Option<f64>,
        height_inches: Option<f64>,
        weekly_training_hours: Option<f64>,
        training_days: &[Weekday],
    ) -> Self {
        let schedule = TrainingSchedule::new(weekly_training_hours, training_days, "");
        Self::assemble(
            BodyStats {
                gender,
                age,
                current_weight_lbs,
                height_inches,
                sport: String::new(),
            },
            schedule,
            Goals::default(),
        )
    }

    /// Number of distinct training days, 0 through 7
    pub fn training_days_per_week(&self) -> u8 {
        self.training_days.len().min(7) as u8
    }

    pub fn rest_days_per_week(&self) -> u8 {
        7 - self.training_days_per_week()
    }
}
