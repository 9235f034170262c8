#![allow(dead_code)]

use vote_finder::{AnswerOption, AnswerSet, Category, CategoryInfo, Question, Questionnaire, QuestionnaireDef, ValueRange};

pub const PARTIES: [&str; 6] = ["Labour", "National", "Greens", "ACT", "NZ First", "Te Pati Maori"];

pub fn option(value: u32, affiliations: &[&str]) -> AnswerOption {
    AnswerOption {
        label: format!("Value {}", value),
        value,
        affiliations: affiliations.iter().map(|name| Category::from(*name)).collect(),
    }
}

pub fn question(id: &str, options: Vec<AnswerOption>) -> Question {
    Question {
        id: id.to_string(),
        prompt: format!("Prompt for {}", id),
        description: None,
        options,
    }
}

pub fn definition(categories: &[&str], questions: Vec<Question>) -> QuestionnaireDef {
    QuestionnaireDef {
        title: "Fixture".to_string(),
        value_range: ValueRange::default(),
        categories: categories
            .iter()
            .map(|name| CategoryInfo {
                name: Category::from(*name),
                description: format!("You align with {}.", name),
            })
            .collect(),
        fallback_description: "Your views align with multiple parties.".to_string(),
        questions,
    }
}

pub fn questionnaire_with(categories: &[&str], questions: Vec<Question>) -> Questionnaire {
    Questionnaire::new(definition(categories, questions)).expect("fixture questionnaire should validate")
}

pub fn questionnaire(questions: Vec<Question>) -> Questionnaire {
    questionnaire_with(&PARTIES, questions)
}

pub fn answers(entries: &[(&str, u32)]) -> AnswerSet {
    entries.iter().map(|(id, value)| (*id, *value)).collect()
}

pub fn category(name: &str) -> Category {
    Category::from(name)
}
