//! Question bank tests over a table produced by the converter.

mod common;

use quiz_core::{QuestionBank, QuestionMatches, SearchMode};
use quiz_tools::convert::convert_file;
use quiz_tools::repl;

use common::fixtures;
use common::TestContext;

fn converted_bank(ctx: &TestContext) -> QuestionBank {
    let content = [
        fixtures::quiz_line("Capital of France", ["Paris", "Rome", "Berlin", "Madrid"], 1),
        fixtures::quiz_line("Capital of Italy", ["Paris", "Rome", "Berlin", "Madrid"], 2),
    ]
    .join("\n");
    ctx.write_input(&content);
    assert!(convert_file(&ctx.config).unwrap().is_completed());
    QuestionBank::load(&ctx.config.bank).unwrap()
}

#[test]
fn test_bank_loads_converted_table() {
    let ctx = TestContext::new();
    let bank = converted_bank(&ctx);

    assert_eq!(bank.len(), 2);
    assert_eq!(
        bank.search("Italy", SearchMode::Exact).questions,
        QuestionMatches::Unanimous("Rome")
    );
}

#[test]
fn test_bank_session_add_then_search() {
    let ctx = TestContext::new();
    let mut bank = converted_bank(&ctx);

    let input = "add\nCapital of Spain\nParis\nRome\nBerlin\nMadrid\n4\nSpain\nexit\n";
    let mut out = Vec::new();
    repl::run(&mut bank, repl::Options::default(), input.as_bytes(), &mut out).unwrap();
    let output = String::from_utf8(out).unwrap();

    assert!(output.contains("Question added"));
    assert!(output.contains("Loaded 3 questions"));
    assert!(output.contains("Search: Madrid\n"));

    let reloaded = QuestionBank::load(&ctx.config.bank).unwrap();
    assert_eq!(reloaded.len(), 3);
}

#[test]
fn test_bank_session_remove() {
    let ctx = TestContext::new();
    let mut bank = converted_bank(&ctx);

    let input = "remove\nItaly\ny\n";
    let mut out = Vec::new();
    repl::run(&mut bank, repl::Options::default(), input.as_bytes(), &mut out).unwrap();

    let reloaded = QuestionBank::load(&ctx.config.bank).unwrap();
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded.records()[0].question, "Capital of France");
}
