use crate::error::ConfigError;
use crate::models::Questionnaire;
use log::info;
use std::env;
use std::fs;
use std::path::PathBuf;

// NZ 2026 values quiz shipped with the binary
const BUILTIN_QUESTIONNAIRE: &str = include_str!("../../data/questionnaire.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultFormat {
    #[default]
    Text,
    Json,
}

impl ResultFormat {
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" | "" => Ok(ResultFormat::Text),
            "json" => Ok(ResultFormat::Json),
            other => Err(ConfigError::UnknownFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub questionnaire_path: Option<PathBuf>,
    pub result_format: ResultFormat,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        let questionnaire_path = env::var("QUESTIONNAIRE_PATH")
            .ok()
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);
        let result_format = env::var("RESULT_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            questionnaire_path,
            result_format: ResultFormat::parse(&result_format)?,
        })
    }
}

pub fn builtin_questionnaire() -> Result<Questionnaire, ConfigError> {
    Questionnaire::from_json(BUILTIN_QUESTIONNAIRE)
}

/// Load and validate the questionnaire named by the settings, falling back to
/// the built-in one.
pub fn load_questionnaire(settings: &Settings) -> Result<Questionnaire, ConfigError> {
    let questionnaire = match &settings.questionnaire_path {
        Some(path) => {
            let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.clone(),
                source,
            })?;
            Questionnaire::from_json(&json)?
        }
        None => builtin_questionnaire()?,
    };

    info!(
        "Loaded questionnaire '{}' ({} questions, {} categories)",
        questionnaire.title(),
        questionnaire.len(),
        questionnaire.categories().len()
    );
    Ok(questionnaire)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_questionnaire_is_valid() {
        let questionnaire = builtin_questionnaire().unwrap();
        assert_eq!(questionnaire.len(), 25);
        let names: Vec<&str> = questionnaire.category_names().map(|c| c.as_str()).collect();
        assert_eq!(names, vec!["Labour", "National", "Greens", "ACT", "NZ First", "Te Pati Maori"]);
        assert!(questionnaire.question("housing-affordability").is_some());
    }

    #[test]
    fn parses_result_format() {
        assert_eq!(ResultFormat::parse("JSON").unwrap(), ResultFormat::Json);
        assert_eq!(ResultFormat::parse("text").unwrap(), ResultFormat::Text);
        assert!(matches!(ResultFormat::parse("yaml"), Err(ConfigError::UnknownFormat(_))));
    }

    #[test]
    fn missing_file_is_reported() {
        let settings = Settings {
            questionnaire_path: Some(PathBuf::from("/nonexistent/questionnaire.json")),
            ..Settings::default()
        };
        assert!(matches!(load_questionnaire(&settings), Err(ConfigError::Read { .. })));
    }
}
