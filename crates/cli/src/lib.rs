use anyhow::{Context as AnyhowContext, Result};
use clap::{Parser, ValueEnum};
use review_snippets::{BudgetPolicy, Limit, SnippetConfig, Snippeter};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

mod demos;

pub use demos::{render_demos, Demo, DEMOS};

fn print_stdout(text: &str) -> Result<()> {
    use std::io::Write;

    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.write_all(b"\n"))
        .and_then(|_| stdout.flush())
    {
        if err.kind() == io::ErrorKind::BrokenPipe {
            return Ok(());
        }
        return Err(err.into());
    }
    Ok(())
}

/// Print a snippet from DOCUMENT with every occurrence of the QUERY words
/// highlighted. For the query "deep dish pizza", the strings "deep dish
/// pizza", "deep dish", "dish pizza", "deep", "dish" and "pizza" are all
/// highlighted, and only the longest match at each position.
#[derive(Parser)]
#[command(name = "snippets")]
#[command(about = "Command-line interface to the snippet maker", long_about = None)]
#[command(version)]
struct Cli {
    /// Document to build the snippet from ("-" reads stdin)
    #[arg(required_unless_present = "examples")]
    document: Option<String>,

    /// Query string whose words are highlighted
    #[arg(required_unless_present = "examples")]
    query: Option<String>,

    /// Maximum number of characters in the snippet (integer or "inf")
    #[arg(short, long, value_parser = parse_limit)]
    chars: Option<Limit>,

    /// Maximum number of sentences in the snippet (integer or "inf")
    #[arg(short, long, value_parser = parse_limit)]
    sents: Option<Limit>,

    /// Marker placed before each highlighted span
    #[arg(long)]
    open_tag: Option<String>,

    /// Marker placed after each highlighted span
    #[arg(long)]
    close_tag: Option<String>,

    /// How the budget is enforced
    #[arg(long, value_enum)]
    policy: Option<PolicyFlag>,

    /// TOML file with snippet settings (flags take precedence)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print a JSON report instead of the bare snippet
    #[arg(long)]
    json: bool,

    /// Print the built-in examples and exit
    #[arg(long, conflicts_with_all = ["document", "query"])]
    examples: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(long)]
    quiet: bool,
}

#[derive(Copy, Clone, ValueEnum)]
enum PolicyFlag {
    Strict,
    Legacy,
}

impl PolicyFlag {
    const fn as_domain(self) -> BudgetPolicy {
        match self {
            PolicyFlag::Strict => BudgetPolicy::Strict,
            PolicyFlag::Legacy => BudgetPolicy::Legacy,
        }
    }
}

fn parse_limit(raw: &str) -> std::result::Result<Limit, String> {
    raw.parse::<Limit>().map_err(|err| err.to_string())
}

pub fn main_entry() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let config = resolve_config(&cli)?;

    if cli.examples {
        return print_stdout(render_demos(&config)?.trim_end());
    }

    let (Some(document), Some(query)) = (&cli.document, &cli.query) else {
        anyhow::bail!("DOCUMENT and QUERY are required unless --examples is given");
    };
    let document = read_document(document)?;

    let snippeter = Snippeter::new(config).context("Invalid snippet configuration")?;
    let snippet = snippeter.snippet(&document, query);
    log::debug!(
        "snippet uses {} of {} sentences",
        snippet.sentences.len(),
        snippet.total_sentences
    );

    if cli.json {
        print_stdout(&snippet.to_json_pretty()?)
    } else {
        print_stdout(&snippet.text)
    }
}

/// Start from the config file (or defaults) and apply command-line overrides
fn resolve_config(cli: &Cli) -> Result<SnippetConfig> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => SnippetConfig::default(),
    };

    if let Some(chars) = cli.chars {
        config.budget.max_chars = chars;
    }
    if let Some(sents) = cli.sents {
        config.budget.max_sents = sents;
    }
    if let Some(open_tag) = &cli.open_tag {
        config.open_tag = open_tag.clone();
    }
    if let Some(close_tag) = &cli.close_tag {
        config.close_tag = close_tag.clone();
    }
    if let Some(policy) = cli.policy {
        config.policy = policy.as_domain();
    }

    log::debug!(
        "budget: chars={} sents={} policy={}",
        config.budget.max_chars,
        config.budget.max_sents,
        config.policy.as_str()
    );
    Ok(config)
}

fn load_config(path: &Path) -> Result<SnippetConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("Invalid config file {}", path.display()))
}

fn read_document(arg: &str) -> Result<String> {
    if arg != "-" {
        return Ok(arg.to_string());
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read document from stdin")?;
    Ok(buffer)
}
