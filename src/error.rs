use std::path::PathBuf;
use thiserror::Error;

/// A questionnaire that cannot be scored against. Raised once at load time.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuestionnaireError {
    #[error("questionnaire declares no categories")]
    NoCategories,

    #[error("questionnaire has no questions")]
    NoQuestions,

    #[error("category name is empty")]
    EmptyCategoryName,

    #[error("category '{0}' is declared more than once")]
    DuplicateCategory(String),

    #[error("invalid value range {min}..={max}")]
    InvalidValueRange { min: u32, max: u32 },

    #[error("invalid question id '{0}': expected a lower-case kebab-case slug")]
    InvalidQuestionId(String),

    #[error("question '{0}' is declared more than once")]
    DuplicateQuestion(String),

    #[error("question '{0}' has no options")]
    NoOptions(String),

    #[error("question '{question}' has more than one option with value {value}")]
    DuplicateOptionValue { question: String, value: u32 },

    #[error("question '{question}': value {value} is outside {min}..={max}")]
    ValueOutOfRange { question: String, value: u32, min: u32, max: u32 },

    #[error("question '{question}': unknown category '{category}'")]
    UnknownCategory { question: String, category: String },

    #[error("question '{question}': category '{category}' listed twice in one option")]
    DuplicateAffiliation { question: String, category: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse questionnaire: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid questionnaire: {0}")]
    Invalid(#[from] QuestionnaireError),

    #[error("unknown result format '{0}' (expected 'text' or 'json')")]
    UnknownFormat(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("question '{question}' has no option with value {value}")]
    InvalidOption { question: String, value: u32 },

    #[error("the quiz is already finished")]
    Finished,
}
