fn main() -> anyhow::Result<()> {
    quiz_tools::run_bank()
}
