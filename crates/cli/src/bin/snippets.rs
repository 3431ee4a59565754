use anyhow::Result;

fn main() -> Result<()> {
    review_snippets_cli::main_entry()
}
