/// Builds the instruction prompt for one chunk of source content.
///
/// The wording is load-bearing: it asks for numbered questions, options
/// labeled `A.` through `D.`, and a trailing `Answer:` line, which is the
/// exact shape [`parse_reply`](super::parse_reply) accepts. Change one only
/// together with the other.
pub fn build_prompt(chunk: &str) -> String {
    format!(
        r#"
Generate exactly 3 multiple-choice questions (MCQs) based on the following content.
Each MCQ should have:
1. A question in proper format, starting with a number (e.g., "1. What is...?").
2. Four distinct answer choices labeled as A, B, C, and D.
3. The correct answer labeled as "Answer: (X)" at the end, where X is A, B, C, or D.

Ensure proper formatting, and do NOT include any introductory or concluding remarks, or unnecessary text.
The output should only contain the questions, options, and answers, formatted as described.

Content:
{}

Example of desired format for one MCQ:
1. What is Machine Learning?
   A. A type of AI that learns from data
   B. A software tool for automation
   C. A manual process of decision-making
   D. A type of cloud computing
   Answer: A

Now generate 3 MCQs based on the provided content:
"#,
        chunk
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_the_chunk_verbatim() {
        let prompt = build_prompt("Rust has zero-cost abstractions.");
        assert!(prompt.contains("Content:\nRust has zero-cost abstractions.\n"));
    }

    #[test]
    fn embeds_the_chunk_exactly_once() {
        let marker = "polonium halide scintillator";
        let prompt = build_prompt(marker);
        assert_eq!(prompt.matches(marker).count(), 1);
    }

    #[test]
    fn states_the_count_and_format_contract() {
        let prompt = build_prompt("anything");
        assert!(prompt.contains("Generate exactly 3 multiple-choice questions"));
        assert!(prompt.contains("labeled as A, B, C, and D"));
        assert!(prompt.contains(r#"labeled as "Answer: (X)""#));
    }

    #[test]
    fn same_chunk_builds_the_same_prompt() {
        assert_eq!(build_prompt("same input"), build_prompt("same input"));
    }
}
