use std::{env, fs};

use anyhow::Context;
use dotenv::dotenv;
use quizcraft::gemini::GeminiClient;
use quizcraft::quiz::{self, Quiz, DEFAULT_MAX_CHUNK_WORDS};

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

pub struct Config {
    pub content_path: String,
    pub max_chunk_words: usize,
}

impl Config {
    pub fn new(content_path: String, max_chunk_words: usize) -> Self {
        Self {
            content_path,
            max_chunk_words,
        }
    }
}

fn parse_config(mut args: impl Iterator<Item = String>) -> anyhow::Result<Config> {
    let content_path = args
        .next()
        .context("a path to the content file is required")?;
    let max_chunk_words = match args.next() {
        Some(raw) => raw
            .parse()
            .context("max_words_per_chunk must be a number")?,
        None => DEFAULT_MAX_CHUNK_WORDS,
    };

    if max_chunk_words == 0 {
        anyhow::bail!("max_words_per_chunk must be at least 1");
    }

    Ok(Config::new(content_path, max_chunk_words))
}

fn main() -> anyhow::Result<()> {
    dotenv().ok();
    pretty_env_logger::init();

    let config = match parse_config(env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Usage: quizcraft <content_file> [max_words_per_chunk]");
            return Err(e);
        }
    };

    let content = fs::read_to_string(&config.content_path)
        .context(format!("failed to read {}", config.content_path))?;

    let client = GeminiClient::from_env()
        .context("set GOOGLE_API_KEY in the environment or a .env file")?;

    let result = quiz::generate_quiz(Some(&client), &content, config.max_chunk_words)
        .context("could not generate a quiz from the provided content")?;

    for warning in &result.warnings {
        eprintln!("warning: chunk {}: {}", warning.chunk_index, warning.message);
    }

    print_questions(&result);
    print_answer_key(&result);

    println!(
        "generated {BOLD}{}{RESET} questions from {BOLD}{}{RESET}",
        result.questions.len(),
        &config.content_path
    );

    Ok(())
}

fn print_questions(quiz: &Quiz) {
    println!("{BOLD}Generated Questions{RESET}\n");

    for question in &quiz.questions {
        println!("{}. {}", question.question_number, question.question_text);
        for (choice, text) in &question.options {
            println!("   {}. {}", choice, text);
        }
        println!();
    }
}

fn print_answer_key(quiz: &Quiz) {
    println!("{BOLD}Answer Key{RESET}\n");

    for question in &quiz.questions {
        let answer_text = question
            .options
            .get(&question.answer)
            .map_or("N/A", |text| text.as_str());
        println!(
            "{}. {}. {}",
            question.question_number, question.answer, answer_text
        );
    }
    println!();
}
