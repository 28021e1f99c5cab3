//! Substring search over quiz records.

use crate::types::QuizRecord;

/// How a query is compared against question and option text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchMode {
    #[default]
    Exact,
    CaseInsensitive,
}

/// Outcome of matching the query against question text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionMatches<'a> {
    /// No question contains the query.
    None,
    /// Every matching question has the same correct answer.
    Unanimous(&'a str),
    /// All matches share one question text but disagree on the answer.
    SameQuestion(Vec<&'a str>),
    /// Different questions; each entry is `(correct answer, question)`.
    Distinct(Vec<(&'a str, &'a str)>),
}

/// A record whose options contain the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerHit<'a> {
    pub correct: &'a str,
    pub question: &'a str,
    /// First option that contains the query.
    pub matched: &'a str,
}

/// Result of searching a set of records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult<'a> {
    pub questions: QuestionMatches<'a>,
    pub answers: Vec<AnswerHit<'a>>,
}

/// Records whose question text contains `query`.
pub fn find_questions<'a>(
    records: &'a [QuizRecord],
    query: &str,
    mode: SearchMode,
) -> Vec<&'a QuizRecord> {
    let matcher = Matcher::new(query, mode);
    records
        .iter()
        .filter(|record| matcher.is_match(&record.question))
        .collect()
}

/// Search question text and option text for `query`.
pub fn search<'a>(records: &'a [QuizRecord], query: &str, mode: SearchMode) -> SearchResult<'a> {
    let matcher = Matcher::new(query, mode);

    let hits: Vec<&QuizRecord> = records
        .iter()
        .filter(|record| matcher.is_match(&record.question))
        .collect();

    let answers = records
        .iter()
        .filter_map(|record| {
            let matched = record.options.iter().find(|option| matcher.is_match(option))?;
            Some(AnswerHit {
                correct: record.correct_option(),
                question: &record.question,
                matched,
            })
        })
        .collect();

    SearchResult {
        questions: summarize(&hits),
        answers,
    }
}

fn summarize<'a>(hits: &[&'a QuizRecord]) -> QuestionMatches<'a> {
    let Some(first) = hits.first() else {
        return QuestionMatches::None;
    };

    if hits
        .iter()
        .all(|record| record.correct_option() == first.correct_option())
    {
        return QuestionMatches::Unanimous(first.correct_option());
    }

    if hits.iter().all(|record| record.question == first.question) {
        QuestionMatches::SameQuestion(hits.iter().map(|record| record.correct_option()).collect())
    } else {
        QuestionMatches::Distinct(
            hits.iter()
                .map(|record| (record.correct_option(), record.question.as_str()))
                .collect(),
        )
    }
}

struct Matcher {
    needle: String,
    mode: SearchMode,
}

impl Matcher {
    fn new(query: &str, mode: SearchMode) -> Self {
        let needle = normalize_whitespace(query);
        let needle = match mode {
            SearchMode::Exact => needle,
            SearchMode::CaseInsensitive => needle.to_lowercase(),
        };
        Self { needle, mode }
    }

    fn is_match(&self, haystack: &str) -> bool {
        match self.mode {
            SearchMode::Exact => haystack.contains(&self.needle),
            SearchMode::CaseInsensitive => haystack.to_lowercase().contains(&self.needle),
        }
    }
}

/// Normalize whitespace in a string (trim and collapse multiple spaces).
fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
