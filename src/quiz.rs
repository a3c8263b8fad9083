mod chunk;
mod generate;
mod parse;
mod prompt;
mod question;

pub use chunk::{split_content, DEFAULT_MAX_CHUNK_WORDS};
pub use generate::{generate_quiz, GenerateError};
pub use parse::{parse_reply, ParseError, ParsedQuestion};
pub use prompt::build_prompt;
pub use question::{Choice, ChunkWarning, Question, Quiz};
