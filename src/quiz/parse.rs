//! Turns a free-form model reply into structured questions.
//!
//! A reply is read line by line. A line starting with `1.` (any number)
//! opens a question, `A.` through `D.` lines attach options to it, and an
//! `Answer:` line records the correct choice. Anything else is ignored, and
//! a question that never accumulates four options and an answer is dropped
//! rather than failing the whole reply.

use std::collections::BTreeMap;

use regex::Regex;
use thiserror::Error;

use super::question::Choice;

/// A question extracted from one model reply, before the pipeline assigns
/// its number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuestion {
    pub question_text: String,
    pub options: BTreeMap<Choice, String>,
    pub answer: Choice,
}

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("The model reply is empty")]
    EmptyReply { raw: String },

    #[error("No valid questions were extracted from the model reply")]
    NoQuestions { raw: String },
}

impl ParseError {
    /// The unmodified reply text, kept for diagnostics.
    pub fn raw_reply(&self) -> &str {
        match self {
            ParseError::EmptyReply { raw } | ParseError::NoQuestions { raw } => raw,
        }
    }
}

/// What a single reply line means to the parser.
enum ReplyLine<'a> {
    Question(&'a str),
    Option(Choice, &'a str),
    Answer(Choice),
    Other,
}

struct LineClassifier {
    question: Regex,
    option: Regex,
    answer: Regex,
}

impl LineClassifier {
    fn new() -> LineClassifier {
        LineClassifier {
            question: Regex::new(r"^\d+\.\s*(.*)").unwrap(),
            option: Regex::new(r"^([A-D])\.\s*(.*)").unwrap(),
            answer: Regex::new(r"(?i)^Answer:\s*([A-D])").unwrap(),
        }
    }

    fn classify<'a>(&self, line: &'a str) -> ReplyLine<'a> {
        if let Some(caps) = self.question.captures(line) {
            return ReplyLine::Question(caps.get(1).map_or("", |m| m.as_str()));
        }

        if let Some(caps) = self.option.captures(line) {
            if let Some(choice) = caps[1].chars().next().and_then(Choice::from_letter) {
                return ReplyLine::Option(choice, caps.get(2).map_or("", |m| m.as_str()));
            }
        }

        if let Some(caps) = self.answer.captures(line) {
            if let Some(choice) = caps[1].chars().next().and_then(Choice::from_letter) {
                return ReplyLine::Answer(choice);
            }
        }

        ReplyLine::Other
    }
}

/// A question being assembled while its lines are still arriving.
#[derive(Debug)]
struct Candidate {
    question_text: String,
    options: BTreeMap<Choice, String>,
    answer: Option<Choice>,
}

impl Candidate {
    fn start(text: &str) -> Candidate {
        Candidate {
            question_text: text.trim().to_string(),
            options: BTreeMap::new(),
            answer: None,
        }
    }

    /// Yields the finished question, or nothing if options or answer are
    /// still missing.
    fn commit(self) -> Option<ParsedQuestion> {
        match self.answer {
            Some(answer) if self.options.len() == Choice::COUNT => Some(ParsedQuestion {
                question_text: self.question_text,
                options: self.options,
                answer,
            }),
            _ => None,
        }
    }
}

/// Extracts every complete question from a raw model reply, in reply order.
///
/// An answer line with all four options present finishes the question on the
/// spot; otherwise the question stays open, so options arriving after the
/// answer line still count. A new question line finishes whatever came
/// before it, complete or not.
pub fn parse_reply(reply: &str) -> Result<Vec<ParsedQuestion>, ParseError> {
    let trimmed = reply.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyReply {
            raw: reply.to_string(),
        });
    }

    let classifier = LineClassifier::new();
    let mut questions = Vec::new();
    let mut current: Option<Candidate> = None;

    for line in trimmed.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match classifier.classify(line) {
            ReplyLine::Question(text) => {
                if let Some(candidate) = current.take() {
                    questions.extend(candidate.commit());
                }
                current = Some(Candidate::start(text));
            }
            ReplyLine::Option(choice, text) => {
                if let Some(candidate) = current.as_mut() {
                    candidate.options.insert(choice, text.trim().to_string());
                }
            }
            ReplyLine::Answer(choice) => {
                if let Some(mut candidate) = current.take() {
                    candidate.answer = Some(choice);
                    if candidate.options.len() == Choice::COUNT {
                        questions.extend(candidate.commit());
                    } else {
                        current = Some(candidate);
                    }
                }
            }
            ReplyLine::Other => {}
        }
    }

    if let Some(candidate) = current.take() {
        questions.extend(candidate.commit());
    }

    if questions.is_empty() {
        return Err(ParseError::NoQuestions {
            raw: reply.to_string(),
        });
    }

    Ok(questions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_single_well_formed_question() {
        let reply = "\
1. What is Rust?
A. A systems programming language
B. A kind of fungus
C. A text editor
D. A database
Answer: A
";
        let questions = parse_reply(reply).unwrap();

        assert_eq!(questions.len(), 1);
        let q = &questions[0];
        assert_eq!(q.question_text, "What is Rust?");
        assert_eq!(q.options.len(), 4);
        assert_eq!(q.options[&Choice::A], "A systems programming language");
        assert_eq!(q.options[&Choice::D], "A database");
        assert_eq!(q.answer, Choice::A);
    }

    #[test]
    fn parses_multiple_questions_in_reply_order() {
        let reply = "\
1. First question?
A. a
B. b
C. c
D. d
Answer: B

2. Second question?
A. e
B. f
C. g
D. h
Answer: D
";
        let questions = parse_reply(reply).unwrap();

        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].question_text, "First question?");
        assert_eq!(questions[0].answer, Choice::B);
        assert_eq!(questions[1].question_text, "Second question?");
        assert_eq!(questions[1].answer, Choice::D);
    }

    #[test]
    fn empty_reply_is_an_error() {
        let err = parse_reply("").unwrap_err();
        assert!(matches!(err, ParseError::EmptyReply { .. }));

        let err = parse_reply("  \n\t  ").unwrap_err();
        assert!(matches!(err, ParseError::EmptyReply { .. }));
        assert_eq!(err.raw_reply(), "  \n\t  ");
    }

    #[test]
    fn reply_without_questions_is_an_error_carrying_the_raw_text() {
        let reply = "I'm sorry, I cannot generate questions for this content.";
        let err = parse_reply(reply).unwrap_err();

        assert!(matches!(err, ParseError::NoQuestions { .. }));
        assert_eq!(err.raw_reply(), reply);
    }

    #[test]
    fn drops_a_question_missing_an_option() {
        let reply = "\
1. Incomplete question?
A. a
B. b
C. c
Answer: A
2. Complete question?
A. e
B. f
C. g
D. h
Answer: C
";
        let questions = parse_reply(reply).unwrap();

        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].question_text, "Complete question?");
    }

    #[test]
    fn drops_a_question_missing_the_answer() {
        let reply = "\
1. Unanswered question?
A. a
B. b
C. c
D. d
2. Answered question?
A. e
B. f
C. g
D. h
Answer: A
";
        let questions = parse_reply(reply).unwrap();

        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].question_text, "Answered question?");
    }

    #[test]
    fn drops_an_unterminated_final_question() {
        let reply = "\
1. Finished question?
A. a
B. b
C. c
D. d
Answer: D
2. Trailing fragment without
";
        let questions = parse_reply(reply).unwrap();

        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].question_text, "Finished question?");
    }

    #[test]
    fn ignores_prose_around_and_between_questions() {
        let reply = "\
Here are your questions!

1. Only question?
A. a
Note that this option is tricky.
B. b
C. c
D. d
Answer: B

Hope these help!
";
        let questions = parse_reply(reply).unwrap();

        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].options.len(), 4);
    }

    #[test]
    fn options_before_any_question_are_ignored() {
        let reply = "\
A. stray option
1. Real question?
A. a
B. b
C. c
D. d
Answer: A
";
        let questions = parse_reply(reply).unwrap();

        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].options[&Choice::A], "a");
    }

    #[test]
    fn answer_line_matches_case_insensitively() {
        let reply = "\
1. Question?
A. a
B. b
C. c
D. d
answer: c
";
        let questions = parse_reply(reply).unwrap();

        assert_eq!(questions[0].answer, Choice::C);
    }

    #[test]
    fn duplicate_option_letters_keep_the_last_text() {
        let reply = "\
1. Question?
A. first
A. second
B. b
C. c
D. d
Answer: A
";
        let questions = parse_reply(reply).unwrap();

        assert_eq!(questions[0].options[&Choice::A], "second");
    }

    #[test]
    fn options_after_the_answer_line_still_count() {
        let reply = "\
1. Question?
A. a
B. b
Answer: A
C. c
D. d
";
        let questions = parse_reply(reply).unwrap();

        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].options.len(), 4);
        assert_eq!(questions[0].answer, Choice::A);
    }

    #[test]
    fn answer_outside_the_choices_is_ignored() {
        let reply = "\
1. Question?
A. a
B. b
C. c
D. d
Answer: E
";
        let err = parse_reply(reply).unwrap_err();
        assert!(matches!(err, ParseError::NoQuestions { .. }));
    }

    #[test]
    fn indented_lines_and_padded_values_are_trimmed() {
        let reply = "
   1.   What pads its lines?
   A.  alpha
   B.  beta
   C.  gamma
   D.  delta
   Answer: D
";
        let questions = parse_reply(reply).unwrap();

        assert_eq!(questions[0].question_text, "What pads its lines?");
        assert_eq!(questions[0].options[&Choice::B], "beta");
    }

    #[test]
    fn multi_digit_question_numbers_are_accepted() {
        let reply = "\
12. Question twelve?
A. a
B. b
C. c
D. d
Answer: B
";
        let questions = parse_reply(reply).unwrap();

        assert_eq!(questions[0].question_text, "Question twelve?");
    }

    #[test]
    fn lowercase_option_labels_are_not_options() {
        let reply = "\
1. Question?
a. not an option
A. a
B. b
C. c
D. d
Answer: A
";
        let questions = parse_reply(reply).unwrap();

        assert_eq!(questions[0].options.len(), 4);
        assert_eq!(questions[0].options[&Choice::A], "a");
    }
}
