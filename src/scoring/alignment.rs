use crate::models::{AnswerSet, Category, Questionnaire};
use crate::scoring::{CategoryScore, ScoreResult};
use log::debug;
use std::collections::HashMap;

/// Score an answer set against a validated questionnaire.
///
/// Each answer adds its own value to every category its option is affiliated
/// with, so stronger answers weigh more. Percentages are taken against
/// `answered * value_range.max` and rounded half up. Entries naming an unknown
/// question or a value no option carries are skipped and do not count towards
/// the denominator. With nothing scored, every category sits at 0% and there
/// is no primary or secondary match.
pub fn score(questionnaire: &Questionnaire, answers: &AnswerSet) -> ScoreResult {
    let mut scores: HashMap<&Category, u64> = HashMap::new();
    for category in questionnaire.category_names() {
        scores.insert(category, 0);
    }

    let mut answered = 0usize;
    for (question_id, value) in answers.iter() {
        let Some(question) = questionnaire.question(question_id) else {
            debug!("Ignoring answer for unknown question '{}'", question_id);
            continue;
        };
        let Some(option) = question.option_for(value) else {
            debug!("Ignoring value {} for question '{}': no such option", value, question_id);
            continue;
        };

        answered += 1;
        for category in &option.affiliations {
            // validation guarantees the category is declared
            if let Some(total) = scores.get_mut(category) {
                *total += u64::from(value);
            }
        }
    }

    let max_possible = answered as u64 * u64::from(questionnaire.value_range().max);

    // Declaration order first, so the stable sort keeps it for ties
    let mut ranking: Vec<CategoryScore> = questionnaire
        .category_names()
        .map(|category| {
            let score = scores.get(category).copied().unwrap_or(0);
            CategoryScore {
                category: category.clone(),
                score,
                percentage: percentage_of(score, max_possible),
                rank: 0,
            }
        })
        .collect();
    ranking.sort_by(|a, b| b.percentage.cmp(&a.percentage));
    for (i, entry) in ranking.iter_mut().enumerate() {
        entry.rank = i + 1;
    }

    let percentages = ranking
        .iter()
        .map(|entry| (entry.category.clone(), entry.percentage))
        .collect();

    let (primary_match, secondary_match) = if answered == 0 {
        (None, None)
    } else {
        (
            ranking.first().map(|entry| entry.category.clone()),
            ranking.get(1).map(|entry| entry.category.clone()),
        )
    };

    let description = match &primary_match {
        Some(category) => questionnaire.description_for(category).to_string(),
        None => questionnaire.fallback_description().to_string(),
    };

    ScoreResult {
        percentages,
        ranking,
        primary_match,
        secondary_match,
        description,
        answered,
    }
}

// round(score / max_possible * 100), half up, without going through floats
fn percentage_of(score: u64, max_possible: u64) -> u32 {
    if max_possible == 0 {
        return 0;
    }
    let (score, max_possible) = (u128::from(score), u128::from(max_possible));
    let rounded = (200 * score + max_possible) / (2 * max_possible);
    rounded.min(100) as u32
}
