//! Flow command: score how a file reads as a whole.

use anyhow::{Context, bail};
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use tracing::{debug, instrument};

use keepmeaning_core::flow::average_sentence_length;
use keepmeaning_core::markdown;
use keepmeaning_core::{
    FlowOptions, FlowReport, LintConfig, Linter, MetricsModel, Priority, RecommendationPolicy,
};

use super::{display_name, read_input_file};

/// Arguments for the `flow` subcommand.
#[derive(Args, Debug)]
pub struct FlowArgs {
    /// File to analyze (`-` for stdin). Markdown files are reduced to prose.
    pub file: Utf8PathBuf,

    /// Secondary metrics model.
    #[arg(long, value_enum)]
    pub metrics: Option<MetricsModel>,

    /// Recommendation policy.
    #[arg(long, value_enum)]
    pub recommendations: Option<RecommendationPolicy>,

    /// Fail when the flow score is below this value (0-100).
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub min_score: Option<u8>,
}

/// Compute and print the flow report for a file.
///
/// `lint` supplies the passive-voice auxiliaries for the computed model.
#[instrument(name = "cmd_flow", skip_all, fields(file = %args.file))]
pub fn cmd_flow(
    args: FlowArgs,
    global_json: bool,
    lint: &LintConfig,
    config_options: FlowOptions,
    config_min_score: Option<u8>,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    let content = read_input_file(&args.file, max_input)?;
    let prose = if args.file.extension() == Some("md") {
        markdown::strip_to_prose(&content)
    } else {
        content
    };

    let options = FlowOptions {
        metrics: args.metrics.unwrap_or(config_options.metrics),
        recommendations: args
            .recommendations
            .unwrap_or(config_options.recommendations),
    };
    debug!(?options, "executing flow command");

    let linter = Linter::new(lint).context("invalid [lint] configuration")?;
    let report = linter.compute_flow(&prose, &options);
    let name = display_name(&args.file);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(name, &report, average_sentence_length(&prose), options.metrics);
    }

    if let Some(min) = args.min_score.or(config_min_score)
        && report.flow_score < min
    {
        bail!(
            "{name} has a flow score of {} (min: {min}). Aim for about 15 words per sentence.",
            report.flow_score
        );
    }

    Ok(())
}

fn print_report(name: &str, report: &FlowReport, average: f64, model: MetricsModel) {
    let score = report.flow_score;
    let colored = match score {
        80..=100 => score.if_supports_color(Stdout, |t| t.green()).to_string(),
        50..=79 => score.if_supports_color(Stdout, |t| t.yellow()).to_string(),
        _ => score.if_supports_color(Stdout, |t| t.red()).to_string(),
    };
    println!("{name}: flow score {colored}/100");
    println!("  {}: {average:.1} words", dim("Average sentence"));

    let m = &report.metrics;
    println!();
    println!("{} ({})", heading("Metrics"), model.as_str());
    println!("  {}: {:.1}", dim("Sentence variety"), m.sentence_variety);
    println!(
        "  {}: {:.1} per 100 words",
        dim("Transition density"),
        m.transition_density
    );
    println!("  {}: {:.1}", dim("Passive voice ratio"), m.passive_voice_ratio);
    println!("  {}: {:.1}", dim("Reading grade"), m.flesch_kincaid_grade);

    if report.recommendations.is_empty() {
        return;
    }
    println!();
    println!("{}", heading("Recommendations"));
    for rec in &report.recommendations {
        let priority = match rec.priority {
            Priority::High => "HIGH".if_supports_color(Stdout, |t| t.red()).to_string(),
            Priority::Medium => "MEDIUM".if_supports_color(Stdout, |t| t.yellow()).to_string(),
            Priority::Low => "LOW".if_supports_color(Stdout, |t| t.dimmed()).to_string(),
        };
        println!("  [{priority}] {}: {}", rec.category, rec.tip);
    }
}

fn dim(label: &str) -> String {
    label.if_supports_color(Stdout, |t| t.dimmed()).to_string()
}

fn heading(label: &str) -> String {
    label
        .if_supports_color(Stdout, |t| t.bold().underline().to_string())
        .to_string()
}
