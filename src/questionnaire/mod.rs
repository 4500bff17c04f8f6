//! Staged questionnaire
//!
//! Collects the athlete profile one stage at a time and hands the finished
//! profile to the calculator.

mod error;
mod stages;

pub use error::{QuestionnaireError, QuestionnaireResult};
pub use stages::{
    Answers, BodyStage, BodyStatsAnswers, CompletedQuestionnaire, GoalAnswers, GoalStage,
    TrainingAnswers, TrainingStage,
};
