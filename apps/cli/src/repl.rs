//! Interactive search loop over a question bank.
//!
//! Every input line is a search query except the commands `add`, `remove`
//! and `exit`. End of input ends the session.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use colored::{Color, Colorize};
use quiz_core::{
    QuestionBank, QuestionMatches, QuizRecord, SearchMode, SearchResult, OPTION_COUNT,
};

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

/// Session settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    pub mode: SearchMode,
    /// Colour output and clear the screen on start. Leave off for
    /// non-terminal sinks.
    pub color: bool,
}

enum Flow {
    Continue,
    Quit,
}

/// Run the session until `exit` or end of input.
pub fn run<R: BufRead, W: Write>(
    bank: &mut QuestionBank,
    options: Options,
    input: R,
    out: &mut W,
) -> Result<()> {
    let mut session = Session {
        bank,
        options,
        input,
        out,
    };
    session.run()
}

struct Session<'s, R, W> {
    bank: &'s mut QuestionBank,
    options: Options,
    input: R,
    out: &'s mut W,
}

impl<R: BufRead, W: Write> Session<'_, R, W> {
    fn run(&mut self) -> Result<()> {
        if self.options.color {
            write!(self.out, "{CLEAR_SCREEN}")?;
        }
        self.print_banner()?;

        loop {
            let Some(query) = self.prompt("Search: ")? else {
                break;
            };

            let flow = match query.as_str() {
                "exit" => Flow::Quit,
                "add" => self.add_question()?,
                "remove" => self.remove_question()?,
                "" => Flow::Continue,
                query => {
                    self.print_search(query)?;
                    Flow::Continue
                }
            };

            if let Flow::Quit = flow {
                break;
            }
        }

        Ok(())
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.options.color {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn print_banner(&mut self) -> Result<()> {
        let count = self.paint(&self.bank.len().to_string(), Color::BrightYellow);
        let add = self.paint("add", Color::BrightGreen);
        let remove = self.paint("remove", Color::BrightRed);
        let exit = self.paint("exit", Color::BrightMagenta);

        writeln!(self.out, "Loaded {count} questions")?;
        writeln!(self.out, "Type {add} to add a new question")?;
        writeln!(self.out, "Type {remove} to remove a question")?;
        writeln!(self.out, "Type {exit} to quit\n")?;
        Ok(())
    }

    fn say(&mut self, text: &str, color: Color) -> Result<()> {
        let text = self.paint(text, color);
        writeln!(self.out, "{text}")?;
        Ok(())
    }

    /// Print `label`, read one line, and return it trimmed. `None` at end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        let label = self.paint(label, Color::BrightBlue);
        write!(self.out, "{label}")?;
        self.out.flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).context("reading input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn add_question(&mut self) -> Result<Flow> {
        writeln!(self.out)?;
        self.say("Add a new question", Color::BrightCyan)?;

        let Some(question) = self.prompt("Question: ")? else {
            return Ok(Flow::Quit);
        };

        let mut options: [String; OPTION_COUNT] = Default::default();
        for (idx, option) in options.iter_mut().enumerate() {
            let Some(answer) = self.prompt(&format!("Answer {}: ", idx + 1))? else {
                return Ok(Flow::Quit);
            };
            *option = answer;
        }

        let record = loop {
            let Some(answer) = self.prompt("Correct Answer (1-4): ")? else {
                return Ok(Flow::Quit);
            };
            let parsed = answer
                .parse::<u8>()
                .ok()
                .and_then(|correct| QuizRecord::new(question.clone(), options.clone(), correct));
            match parsed {
                Some(record) => break record,
                None => self.say("Enter a number between 1 and 4", Color::BrightRed)?,
            }
        };

        self.bank
            .add(record)
            .with_context(|| format!("appending to {}", self.bank.path().display()))?;
        tracing::info!("Added question to {}", self.bank.path().display());

        self.say("Question added\n", Color::BrightGreen)?;
        self.print_banner()?;
        Ok(Flow::Continue)
    }

    fn remove_question(&mut self) -> Result<Flow> {
        writeln!(self.out)?;
        self.say("Remove a question", Color::BrightCyan)?;

        let Some(query) = self.prompt("Question: ")? else {
            return Ok(Flow::Quit);
        };

        let matches: Vec<QuizRecord> = self
            .bank
            .find(&query, self.options.mode)
            .into_iter()
            .cloned()
            .collect();

        let target = match matches.len() {
            0 => {
                self.say("No matches found\n", Color::BrightRed)?;
                return Ok(Flow::Continue);
            }
            1 => matches[0].clone(),
            _ => {
                self.say("Multiple matches found\n", Color::BrightYellow)?;
                for (idx, record) in matches.iter().enumerate() {
                    let idx = self.paint(&idx.to_string(), Color::BrightBlue);
                    writeln!(self.out, "{idx}: {}", record.question)?;
                    self.print_record_details(record)?;
                }
                loop {
                    let Some(selection) = self.prompt("Select a question: ")? else {
                        return Ok(Flow::Quit);
                    };
                    match selection.parse::<usize>().ok().and_then(|idx| matches.get(idx)) {
                        Some(record) => break record.clone(),
                        None => self.say("Invalid selection", Color::BrightRed)?,
                    }
                }
            }
        };

        self.say("Are you sure you want to remove this question?", Color::BrightRed)?;
        writeln!(self.out, "{}", target.question)?;
        self.print_record_details(&target)?;

        let Some(confirm) = self.prompt("Confirm (y/n): ")? else {
            return Ok(Flow::Quit);
        };

        if confirm == "y" {
            let removed = self
                .bank
                .remove(&target)
                .with_context(|| format!("rewriting {}", self.bank.path().display()))?;
            tracing::info!(
                "Removed {} question(s) from {}",
                removed,
                self.bank.path().display()
            );
            self.say("Question removed\n", Color::BrightGreen)?;
        } else {
            self.say("Question not removed\n", Color::BrightYellow)?;
        }

        self.print_banner()?;
        Ok(Flow::Continue)
    }

    fn print_record_details(&mut self, record: &QuizRecord) -> Result<()> {
        writeln!(self.out, "Answers: {}", record.options.join(", "))?;
        writeln!(self.out, "Correct Answer: {}\n", record.correct)?;
        Ok(())
    }

    fn print_search(&mut self, query: &str) -> Result<()> {
        let result: SearchResult<'_> = self.bank.search(query, self.options.mode);
        let mut lines = Vec::new();

        match &result.questions {
            QuestionMatches::None => lines.push(self.paint("No matches found", Color::BrightRed)),
            QuestionMatches::Unanimous(answer) => lines.push(self.paint(answer, Color::BrightGreen)),
            QuestionMatches::SameQuestion(answers) => {
                for answer in answers {
                    lines.push(format!("{}\n", self.paint(answer, Color::BrightGreen)));
                }
            }
            QuestionMatches::Distinct(hits) => {
                for (answer, question) in hits {
                    let answer = self.paint(answer, Color::BrightGreen);
                    lines.push(format!("{answer}\nQ: {question}\n"));
                }
            }
        }

        if !result.answers.is_empty() {
            lines.push(format!("{}\n", self.paint("Answer Matches:", Color::BrightYellow)));
            for hit in &result.answers {
                let correct = self.paint(hit.correct, Color::BrightGreen);
                lines.push(format!("{correct}\nQ: {} | MA: {}\n", hit.question, hit.matched));
            }
        }

        for line in lines {
            writeln!(self.out, "{line}")?;
        }
        writeln!(self.out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::write_table;
    use std::path::PathBuf;
    use uuid::Uuid;

    /// Scratch table removed on drop.
    struct Scratch {
        dir: PathBuf,
        bank: QuestionBank,
    }

    impl Drop for Scratch {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.dir);
        }
    }

    fn record(question: &str, options: [&str; 4], correct: u8) -> QuizRecord {
        QuizRecord::new(question.to_string(), options.map(String::from), correct).unwrap()
    }

    fn scratch() -> Scratch {
        let dir = std::env::temp_dir().join(format!("quiz-tools-repl-{}", Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("q.csv");
        write_table(
            &path,
            &[
                record("Capital of France", ["Paris", "Rome", "Berlin", "Madrid"], 1),
                record("Largest planet", ["Mars", "Jupiter", "Venus", "Earth"], 2),
            ],
        )
        .unwrap();
        let bank = QuestionBank::load(path).unwrap();
        Scratch { dir, bank }
    }

    fn session(bank: &mut QuestionBank, input: &str) -> String {
        let mut out = Vec::new();
        run(bank, Options::default(), input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn banner_reports_count_and_exit_stops() {
        let mut ctx = scratch();
        let output = session(&mut ctx.bank, "exit\nplanet\n");
        assert!(output.starts_with("Loaded 2 questions\n"));
        assert!(!output.contains("Jupiter"));
    }

    #[test]
    fn plain_output_without_color() {
        let mut ctx = scratch();
        let input = "planet\nMa\nremove\nzzz\nadd\nQ\nA\nB\nC\nD\n9\n1\n";
        let output = session(&mut ctx.bank, input);
        assert!(!output.contains('\x1b'));
        assert!(output.contains("Type add to add a new question"));
        assert!(output.contains("Search: Jupiter\n"));
        assert!(output.contains("Answer Matches:\n"));
    }

    #[test]
    fn search_prints_correct_answer() {
        let mut ctx = scratch();
        let output = session(&mut ctx.bank, "planet\n");
        assert!(output.contains("Search: Jupiter\n"));
    }

    #[test]
    fn search_reports_answer_matches() {
        let mut ctx = scratch();
        let output = session(&mut ctx.bank, "Ma\n");
        assert!(output.contains("No matches found"));
        assert!(output.contains("Paris\nQ: Capital of France | MA: Madrid"));
        assert!(output.contains("Jupiter\nQ: Largest planet | MA: Mars"));
    }

    #[test]
    fn add_reprompts_invalid_answer() {
        let mut ctx = scratch();
        let input = "add\nBest language\nRust\nGo\nC\nZig\n7\nx\n1\n";
        let output = session(&mut ctx.bank, input);
        assert!(output.contains("Enter a number between 1 and 4"));
        assert!(output.contains("Question added"));
        assert_eq!(ctx.bank.len(), 3);

        let reloaded = QuestionBank::load(ctx.bank.path()).unwrap();
        assert_eq!(reloaded.records()[2].correct_option(), "Rust");
    }

    #[test]
    fn remove_single_match_after_confirmation() {
        let mut ctx = scratch();
        let output = session(&mut ctx.bank, "remove\nFrance\ny\n");
        assert!(output.contains("Question removed"));
        assert_eq!(ctx.bank.len(), 1);
        assert_eq!(QuestionBank::load(ctx.bank.path()).unwrap().len(), 1);
    }

    #[test]
    fn remove_declined_keeps_record() {
        let mut ctx = scratch();
        let output = session(&mut ctx.bank, "remove\nFrance\nn\n");
        assert!(output.contains("Question not removed"));
        assert_eq!(ctx.bank.len(), 2);
    }

    #[test]
    fn remove_selects_among_multiple_matches() {
        let mut ctx = scratch();
        let output = session(&mut ctx.bank, "remove\na\n9\n1\ny\n");
        assert!(output.contains("Multiple matches found"));
        assert!(output.contains("Invalid selection"));
        assert_eq!(ctx.bank.records()[0].question, "Capital of France");
        assert_eq!(ctx.bank.len(), 1);
    }

    #[test]
    fn scratch_directory_is_removed() {
        let ctx = scratch();
        let dir = ctx.dir.clone();
        assert!(dir.exists());
        drop(ctx);
        assert!(!dir.exists());
    }
}
