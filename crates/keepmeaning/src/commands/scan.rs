//! Scan command: run the lint engine over a file.

use anyhow::{Context, bail};
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use tracing::{debug, instrument};

use keepmeaning_core::text::line_col;
use keepmeaning_core::{Category, Finding, LintConfig, Linter, sort_by_position};

use super::{display_name, read_input_file};

/// Arguments for the `scan` subcommand.
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// File to scan (`-` for stdin).
    pub file: Utf8PathBuf,

    /// Order findings by position instead of by pass.
    #[arg(long)]
    pub sort: bool,

    /// Only report findings in this category.
    #[arg(long, value_enum)]
    pub category: Option<Category>,

    /// Fail when more than this many findings are reported.
    #[arg(long)]
    pub max_findings: Option<usize>,
}

/// Scan a file and print its findings.
///
/// # Arguments
/// * `global_json` - Global `--json` flag from CLI
/// * `lint` - Lint vocabulary and thresholds from config
/// * `config_max_findings` - Default finding gate from config
/// * `max_input` - Input size cap, if any
#[instrument(name = "cmd_scan", skip_all, fields(file = %args.file))]
pub fn cmd_scan(
    args: ScanArgs,
    global_json: bool,
    lint: &LintConfig,
    config_max_findings: Option<usize>,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    debug!(sort = args.sort, category = ?args.category, "executing scan command");

    let content = read_input_file(&args.file, max_input)?;
    let linter = Linter::new(lint).context("invalid [lint] configuration")?;
    let findings = select(linter.scan(&content), args.sort, args.category);
    let name = display_name(&args.file);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&findings)?);
    } else {
        print_findings(name, &content, &findings);
    }

    let max = args.max_findings.or(config_max_findings);
    if let Some(max) = max
        && findings.len() > max
    {
        bail!(
            "{name} has {} findings (max: {max}). Revise the flagged passages.",
            findings.len()
        );
    }

    Ok(())
}

/// Apply the category filter and optional positional sort.
fn select(mut findings: Vec<Finding>, sort: bool, category: Option<Category>) -> Vec<Finding> {
    if let Some(category) = category {
        findings.retain(|f| f.category == category);
    }
    if sort {
        sort_by_position(&mut findings);
    }
    findings
}

fn print_findings(name: &str, content: &str, findings: &[Finding]) {
    for finding in findings {
        let (line, col) = line_col(content, finding.span.start);
        let category = match finding.category {
            Category::Syntax => finding
                .category
                .if_supports_color(Stdout, |t| t.cyan())
                .to_string(),
            _ => finding
                .category
                .if_supports_color(Stdout, |t| t.yellow())
                .to_string(),
        };
        println!(
            "{name}:{line}:{col} [{category}] {} \"{}\"",
            finding.rule.if_supports_color(Stdout, |t| t.bold()),
            finding.excerpt
        );
        println!("    {}", finding.explanation);
        if !finding.suggestion.is_empty() {
            println!(
                "    {}: {}",
                "suggestion".if_supports_color(Stdout, |t| t.dimmed()),
                finding.suggestion
            );
        }
    }

    match findings.len() {
        0 => println!(
            "{name}: {}",
            "no findings".if_supports_color(Stdout, |t| t.green())
        ),
        1 => println!("{name}: 1 finding"),
        n => println!("{name}: {n} findings"),
    }
}
