use crate::error::{ConfigError, QuestionnaireError};
use crate::models::{Questionnaire, QuestionnaireDef};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

lazy_static! {
    static ref QUESTION_ID: Regex = Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").unwrap();
}

impl Questionnaire {
    /// Parse a questionnaire from JSON and reject it unless it validates.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let def: QuestionnaireDef = serde_json::from_str(json)?;
        Ok(Questionnaire::new(def)?)
    }
}

impl QuestionnaireDef {
    /// Check the invariants scoring relies on: declared categories are unique,
    /// every option value sits in `value_range` and is unique within its
    /// question, and every affiliation names a declared category.
    pub fn validate(&self) -> Result<(), QuestionnaireError> {
        let range = self.value_range;
        if range.min == 0 || range.min > range.max {
            return Err(QuestionnaireError::InvalidValueRange { min: range.min, max: range.max });
        }

        if self.categories.is_empty() {
            return Err(QuestionnaireError::NoCategories);
        }
        let mut declared = HashSet::new();
        for info in &self.categories {
            let name = info.name.as_str();
            if name.trim().is_empty() {
                return Err(QuestionnaireError::EmptyCategoryName);
            }
            if !declared.insert(name) {
                return Err(QuestionnaireError::DuplicateCategory(name.to_string()));
            }
        }

        if self.questions.is_empty() {
            return Err(QuestionnaireError::NoQuestions);
        }
        let mut seen_ids = HashSet::new();
        for question in &self.questions {
            if !QUESTION_ID.is_match(&question.id) {
                return Err(QuestionnaireError::InvalidQuestionId(question.id.clone()));
            }
            if !seen_ids.insert(question.id.as_str()) {
                return Err(QuestionnaireError::DuplicateQuestion(question.id.clone()));
            }
            if question.options.is_empty() {
                return Err(QuestionnaireError::NoOptions(question.id.clone()));
            }

            let mut seen_values = HashSet::new();
            for option in &question.options {
                if !range.contains(option.value) {
                    return Err(QuestionnaireError::ValueOutOfRange {
                        question: question.id.clone(),
                        value: option.value,
                        min: range.min,
                        max: range.max,
                    });
                }
                if !seen_values.insert(option.value) {
                    return Err(QuestionnaireError::DuplicateOptionValue {
                        question: question.id.clone(),
                        value: option.value,
                    });
                }

                let mut affiliated = HashSet::new();
                for category in &option.affiliations {
                    if !declared.contains(category.as_str()) {
                        return Err(QuestionnaireError::UnknownCategory {
                            question: question.id.clone(),
                            category: category.to_string(),
                        });
                    }
                    // a repeated affiliation would count the same answer twice
                    if !affiliated.insert(category.as_str()) {
                        return Err(QuestionnaireError::DuplicateAffiliation {
                            question: question.id.clone(),
                            category: category.to_string(),
                        });
                    }
                }
            }
        }

        Ok(())
    }
}
