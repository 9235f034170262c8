pub mod alignment;

pub use alignment::score;

use crate::models::Category;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// Outcome of scoring one answer set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub percentages: BTreeMap<Category, u32>, // One entry per declared category
    pub ranking: Vec<CategoryScore>,        // Highest first, ties in declaration order
    pub primary_match: Option<Category>,
    pub secondary_match: Option<Category>,
    pub description: String,
    pub answered: usize, // Answers that matched a question and option
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: Category,
    pub score: u64,
    pub percentage: u32,
    pub rank: usize,
}

impl ScoreResult {
    pub fn percentage(&self, category: &Category) -> Option<u32> {
        self.percentages.get(category).copied()
    }

    pub fn primary_percentage(&self) -> Option<u32> {
        self.primary_match.as_ref().and_then(|category| self.percentage(category))
    }

    /// Multi-line report with the primary match in bold.
    pub fn summary(&self) -> String {
        let Some(primary) = &self.primary_match else {
            return format!("No answers were scored.\n{}", self.description);
        };

        let mut summary = String::new();
        summary.push_str(&format!("Top match: **{}**\n{}\n\n", primary, self.description));

        for entry in &self.ranking {
            let line = if &entry.category == primary {
                format!("**{}**: {}%", entry.category, entry.percentage)
            } else {
                format!("{}: {}%", entry.category, entry.percentage)
            };
            summary.push_str(&line);
            summary.push('\n');
        }

        if let Some(secondary) = &self.secondary_match {
            let percentage = self.percentage(secondary).unwrap_or(0);
            summary.push_str(&format!("\nAlso matches with {} ({}%).", secondary, percentage));
        }
        summary.push_str(&format!("\nBased on {} answers.", self.answered));
        summary
    }

    /// One-line text suitable for copying or sharing.
    pub fn share_text(&self) -> Option<String> {
        let primary = self.primary_match.as_ref()?;
        let percentage = self.primary_percentage().unwrap_or(0);
        Some(format!(
            "I matched with {} ({}%) on VoteFinder! Who will you vote for in 2026?",
            primary, percentage
        ))
    }
}
