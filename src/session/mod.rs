use crate::error::SessionError;
use crate::models::{AnswerSet, Question, Questionnaire};
use crate::scoring::{self, ScoreResult};
use chrono::{DateTime, Duration, Utc};
use log::info;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Next(usize), // Index of the question to show next
    Finished(ScoreResult),
}

/// One respondent walking through the questionnaire in order.
///
/// Answers live only as long as the session; nothing is persisted.
#[derive(Debug, Clone)]
pub struct QuizSession {
    pub id: String,
    pub started_at: DateTime<Utc>,
    questionnaire: Arc<Questionnaire>,
    answers: AnswerSet,
    current: usize,
    result: Option<ScoreResult>,
}

impl QuizSession {
    pub fn new(questionnaire: Arc<Questionnaire>) -> Self {
        let session = Self {
            id: Uuid::new_v4().to_string(),
            started_at: Utc::now(),
            questionnaire,
            answers: AnswerSet::new(),
            current: 0,
            result: None,
        };
        info!("Started quiz session {}", session.id);
        session
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> Option<&Question> {
        if self.result.is_some() {
            return None;
        }
        self.questionnaire.questions().get(self.current)
    }

    // Position of the current question as a share of the whole quiz
    pub fn progress(&self) -> u32 {
        let total = self.questionnaire.len();
        if total == 0 {
            return 0;
        }
        let position = if self.result.is_some() { total } else { self.current + 1 };
        (position * 100 / total) as u32
    }

    pub fn elapsed(&self) -> Duration {
        Utc::now() - self.started_at
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn result(&self) -> Option<&ScoreResult> {
        self.result.as_ref()
    }

    pub fn is_complete(&self) -> bool {
        self.result.is_some()
    }

    /// Record `value` for the current question and move on. Answering the
    /// last question scores the session.
    pub fn answer(&mut self, value: u32) -> Result<Step, SessionError> {
        if self.result.is_some() {
            return Err(SessionError::Finished);
        }
        let question = self
            .questionnaire
            .questions()
            .get(self.current)
            .ok_or(SessionError::Finished)?;

        if question.option_for(value).is_none() {
            return Err(SessionError::InvalidOption { question: question.id.clone(), value });
        }
        self.answers.record(question.id.clone(), value);

        if self.current + 1 < self.questionnaire.len() {
            self.current += 1;
            return Ok(Step::Next(self.current));
        }

        let result = self.score();
        info!(
            "Quiz session {} finished in {}s: {} answers, top match {}",
            self.id,
            self.elapsed().num_seconds(),
            result.answered,
            result.primary_match.as_ref().map_or("none", |category| category.as_str())
        );
        self.result = Some(result.clone());
        Ok(Step::Finished(result))
    }

    /// Step back one question. Earlier answers are kept until overwritten.
    pub fn previous(&mut self) -> bool {
        if self.result.is_some() || self.current == 0 {
            return false;
        }
        self.current -= 1;
        true
    }

    pub fn restart(&mut self) {
        self.answers.clear();
        self.current = 0;
        self.result = None;
        self.started_at = Utc::now();
        info!("Restarted quiz session {}", self.id);
    }

    // Scores whatever has been answered so far
    pub fn score(&self) -> ScoreResult {
        scoring::score(&self.questionnaire, &self.answers)
    }
}
