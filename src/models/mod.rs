use crate::error::QuestionnaireError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// Opaque identifier of something a respondent can align with (a party)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(pub String);

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Category {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub name: Category,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: u32,
    pub max: u32,
}

impl ValueRange {
    pub fn contains(&self, value: u32) -> bool {
        value >= self.min && value <= self.max
    }
}

impl Default for ValueRange {
    // Likert scale, Strongly Disagree (1) to Strongly Agree (5)
    fn default() -> Self {
        Self { min: 1, max: 5 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerOption {
    pub label: String,
    pub value: u32,
    #[serde(default)]
    pub affiliations: Vec<Category>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub options: Vec<AnswerOption>,
}

impl Question {
    pub fn option_for(&self, value: u32) -> Option<&AnswerOption> {
        self.options.iter().find(|option| option.value == value)
    }
}

/// Questionnaire as written in configuration, before any checks.
///
/// Turn it into a [`Questionnaire`] with [`Questionnaire::new`]; that is the
/// only way to get something the scorer accepts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionnaireDef {
    pub title: String,
    #[serde(default)]
    pub value_range: ValueRange,
    pub categories: Vec<CategoryInfo>,
    pub fallback_description: String,
    pub questions: Vec<Question>,
}

/// Validated quiz definition: the declared categories (in tie-break order)
/// and the questions whose options point at them.
///
/// Deserializing one runs the same checks as [`Questionnaire::new`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "QuestionnaireDef", into = "QuestionnaireDef")]
pub struct Questionnaire {
    def: QuestionnaireDef,
}

impl Questionnaire {
    pub fn new(def: QuestionnaireDef) -> Result<Self, QuestionnaireError> {
        def.validate()?;
        Ok(Self { def })
    }

    pub fn title(&self) -> &str {
        &self.def.title
    }

    pub fn value_range(&self) -> ValueRange {
        self.def.value_range
    }

    pub fn categories(&self) -> &[CategoryInfo] {
        &self.def.categories
    }

    pub fn fallback_description(&self) -> &str {
        &self.def.fallback_description
    }

    pub fn questions(&self) -> &[Question] {
        &self.def.questions
    }

    pub fn question(&self, id: &str) -> Option<&Question> {
        self.def.questions.iter().find(|question| question.id == id)
    }

    pub fn category(&self, name: &str) -> Option<&CategoryInfo> {
        self.def.categories.iter().find(|info| info.name.as_str() == name)
    }

    pub fn category_names(&self) -> impl Iterator<Item = &Category> {
        self.def.categories.iter().map(|info| &info.name)
    }

    pub fn description_for(&self, category: &Category) -> &str {
        self.category(category.as_str())
            .map(|info| info.description.as_str())
            .unwrap_or(self.def.fallback_description.as_str())
    }

    pub fn len(&self) -> usize {
        self.def.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.def.questions.is_empty()
    }
}

impl TryFrom<QuestionnaireDef> for Questionnaire {
    type Error = QuestionnaireError;

    fn try_from(def: QuestionnaireDef) -> Result<Self, Self::Error> {
        Questionnaire::new(def)
    }
}

impl From<Questionnaire> for QuestionnaireDef {
    fn from(questionnaire: Questionnaire) -> Self {
        questionnaire.def
    }
}

/// A respondent's chosen option value per question id.
///
/// Recording a question twice replaces the earlier value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    values: HashMap<String, u32>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, question_id: impl Into<String>, value: u32) -> Option<u32> {
        self.values.insert(question_id.into(), value)
    }

    pub fn remove(&mut self, question_id: &str) -> Option<u32> {
        self.values.remove(question_id)
    }

    pub fn get(&self, question_id: &str) -> Option<u32> {
        self.values.get(question_id).copied()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.values.iter().map(|(id, value)| (id.as_str(), *value))
    }
}

impl<K: Into<String>> FromIterator<(K, u32)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (K, u32)>>(iter: I) -> Self {
        let mut answers = AnswerSet::new();
        for (question_id, value) in iter {
            answers.record(question_id, value);
        }
        answers
    }
}
