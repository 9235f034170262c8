use log::{error, info, warn};
use std::env;
use std::fs;
use std::io::{self, Read};
use std::process;
use vote_finder::config::{self, ResultFormat, Settings};
use vote_finder::{score, AnswerSet, ScoreResult};

fn read_answers(path: Option<&str>) -> Result<AnswerSet, Box<dyn std::error::Error + Send + Sync>> {
    let json = match path {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    Ok(serde_json::from_str(&json)?)
}

fn render(result: &ScoreResult, format: ResultFormat) -> Result<String, serde_json::Error> {
    match format {
        ResultFormat::Json => serde_json::to_string_pretty(result),
        ResultFormat::Text => {
            let mut output = result.summary();
            if let Some(share) = result.share_text() {
                output.push_str("\n\n");
                output.push_str(&share);
            }
            Ok(output)
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = Settings::from_env()?;
    let questionnaire = config::load_questionnaire(&settings)?;

    // Answers come from the file given as the first argument, or stdin
    let path = env::args().nth(1);
    let answers = read_answers(path.as_deref())?;
    info!("Scoring {} answers", answers.len());

    let result = score(&questionnaire, &answers);
    if result.answered < answers.len() {
        warn!(
            "{} of {} answers did not match the questionnaire and were ignored",
            answers.len() - result.answered,
            answers.len()
        );
    }
    if result.answered < questionnaire.len() {
        info!("Partial quiz: {} of {} questions answered", result.answered, questionnaire.len());
    }

    println!("{}", render(&result, settings.result_format)?);
    Ok(())
}

fn main() {
    // Initialize logging
    dotenvy::dotenv().ok();
    env_logger::init();

    if let Err(e) = run() {
        error!("{}", e);
        process::exit(1);
    }
}
