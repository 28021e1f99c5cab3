//! Test fixtures and factory functions for creating quiz input.

/// Header row of every generated table.
pub const HEADER_LINE: &str = "Question,Answer1,Answer2,Answer3,Answer4,Correct Answer";

/// Generate a valid quiz line.
pub fn quiz_line(question: &str, options: [&str; 4], correct: u8) -> String {
    format!(
        "答：{} _{}(1){}(2){}(3){}(4){}",
        correct, question, options[0], options[1], options[2], options[3]
    )
}

/// Generate sample quiz content with a specified number of valid lines.
///
/// # Arguments
/// * `num_questions` - Number of lines to generate
pub fn sample_quiz_content(num_questions: usize) -> String {
    (0..num_questions)
        .map(|i| {
            let correct = (i % 4) as u8 + 1;
            quiz_line(
                &format!("Question {}", i + 1),
                ["A", "B", "C", "D"],
                correct,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
