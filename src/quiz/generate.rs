use thiserror::Error;

use crate::model::LanguageModel;

use super::{
    chunk::split_content,
    parse::parse_reply,
    prompt::build_prompt,
    question::{ChunkWarning, Question, Quiz},
};

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("No language model is configured")]
    ModelUnavailable,

    #[error("No valid questions could be generated from the provided content")]
    NoQuestionsGenerated,
}

/// Runs the whole pipeline: chunk the content, prompt the model once per
/// chunk, parse each reply, and collect the surviving questions into one
/// quiz with continuous 1-based numbering.
///
/// A chunk whose invocation or parse fails is skipped with a warning; the
/// quiz fails only when no model is given or no chunk yields a question.
pub fn generate_quiz(
    model: Option<&dyn LanguageModel>,
    content: &str,
    max_chunk_words: usize,
) -> Result<Quiz, GenerateError> {
    let model = model.ok_or(GenerateError::ModelUnavailable)?;

    let chunks = split_content(content, max_chunk_words);
    let total = chunks.len();

    let mut quiz = Quiz::default();

    for (index, chunk) in chunks.iter().enumerate() {
        let chunk_number = index + 1;
        log::info!("processing chunk {}/{}", chunk_number, total);

        let reply = match model.invoke(&build_prompt(chunk)) {
            Ok(reply) => reply,
            Err(e) => {
                warn_and_record(
                    &mut quiz.warnings,
                    chunk_number,
                    format!("model invocation failed: {}", e),
                );
                continue;
            }
        };

        match parse_reply(&reply) {
            Ok(parsed) => {
                for question in parsed {
                    quiz.questions.push(Question {
                        question_number: quiz.questions.len() + 1,
                        question_text: question.question_text,
                        options: question.options,
                        answer: question.answer,
                    });
                }
            }
            Err(e) => {
                log::debug!("chunk {} raw reply:\n{}", chunk_number, e.raw_reply());
                warn_and_record(
                    &mut quiz.warnings,
                    chunk_number,
                    format!("failed to parse reply: {}", e),
                );
            }
        }
    }

    if quiz.questions.is_empty() {
        return Err(GenerateError::NoQuestionsGenerated);
    }

    Ok(quiz)
}

fn warn_and_record(warnings: &mut Vec<ChunkWarning>, chunk_index: usize, message: String) {
    log::warn!("chunk {}: {}", chunk_index, message);
    warnings.push(ChunkWarning {
        chunk_index,
        message,
    });
}
