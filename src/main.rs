//! hext CLI: extract readable plain text from HTML documents

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use hext::{ExtractPolicy, Profile, html_to_text};

#[derive(Parser)]
#[command(
    name = "hext",
    version,
    about = "Extract plain text from HTML documents",
    long_about = "Parses an HTML document and writes its visible text, with paragraph and \
                  line-break structure preserved and scripts, styles, and form controls dropped."
)]
struct Cli {
    /// HTML file to read (stdin when omitted)
    input: Option<PathBuf>,

    /// Named extraction profile
    #[arg(long, value_enum, default_value = "readable")]
    profile: Profile,

    /// TOML file with a custom tag policy (overrides --profile)
    #[arg(long, value_name = "FILE")]
    policy: Option<PathBuf>,

    /// Write output to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let html = match &cli.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read HTML from stdin")?;
            buffer
        }
    };

    let policy = load_policy(&cli)?;
    let text = html_to_text(&html, &policy)?;

    match &cli.output {
        Some(path) => fs::write(path, &text)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => io::stdout().write_all(text.as_bytes())?,
    }

    Ok(())
}

fn load_policy(cli: &Cli) -> Result<ExtractPolicy> {
    let Some(path) = &cli.policy else {
        return Ok(cli.profile.policy());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read policy file {}", path.display()))?;
    let policy: ExtractPolicy = toml::from_str(&raw)
        .with_context(|| format!("failed to parse policy file {}", path.display()))?;
    policy.validate()?;
    Ok(policy)
}
