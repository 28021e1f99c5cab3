use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    quiz_tools::run_convert()
}
