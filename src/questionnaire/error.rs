//! Questionnaire gating errors

use thiserror::Error;

/// Why a stage refused to advance
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestionnaireError {
    #[error("{stage}: {field} is required")]
    MissingField {
        stage: &'static str,
        field: &'static str,
    },

    #[error("{stage}: '{value}' is not a valid {field}")]
    InvalidChoice {
        stage: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Training schedule: select at least one training day")]
    NoTrainingDays,
}

/// Result type for stage transitions
pub type QuestionnaireResult<T> = Result<T, QuestionnaireError>;
