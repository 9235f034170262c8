pub mod config;
pub mod error;
pub mod models;
pub mod questionnaire;
pub mod scoring;
pub mod session;

pub use error::{ConfigError, QuestionnaireError, SessionError};
pub use models::{
    AnswerOption, AnswerSet, Category, CategoryInfo, Question, Questionnaire, QuestionnaireDef, ValueRange,
};
pub use scoring::{score, CategoryScore, ScoreResult};
pub use session::{QuizSession, Step};
