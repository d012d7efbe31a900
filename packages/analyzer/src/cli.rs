//! Command-line interface for the analyzer.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::analyzer::{contract_info, ContractAnalyzer};
use crate::client::GeminiClient;
use crate::config::AnalyzerConfig;
use crate::error::{AnalyzerError, Result};
use crate::samples::{self, SAMPLES};
use crate::types::{Analysis, ContractInfo};

/// Text wrap width for terminal output.
pub const TEXT_WRAP_WIDTH: usize = 100;

/// ContractLens - Summarize contracts, extract key clauses and flag risky language.
#[derive(Parser)]
#[command(name = "contractlens")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a contract with the configured model.
    Analyze {
        #[command(flatten)]
        input: InputArgs,

        /// Use one model call per section instead of a single combined call
        #[arg(long)]
        full: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,
    },

    /// Show word count, limit and the model a contract would be routed to.
    Info {
        #[command(flatten)]
        input: InputArgs,
    },

    /// List the bundled sample contracts.
    Samples,
}

#[derive(Args)]
pub struct InputArgs {
    /// Contract file, or `-` to read from stdin
    pub file: Option<PathBuf>,

    /// Use a bundled sample contract instead of a file
    #[arg(short, long, conflicts_with = "file")]
    pub sample: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Pretty,
    Json,
    Yaml,
}

/// Run the CLI.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            input,
            full,
            format,
        } => analyze_command(&input, full, format).await,
        Commands::Info { input } => info_command(&input),
        Commands::Samples => {
            samples_command();
            Ok(())
        }
    }
}

fn invalid_input(message: String) -> AnalyzerError {
    AnalyzerError::Io(std::io::Error::new(
        std::io::ErrorKind::InvalidInput,
        message,
    ))
}

/// Resolve the contract text from a file, stdin or a bundled sample.
pub fn read_contract(input: &InputArgs) -> Result<String> {
    if let Some(name) = &input.sample {
        return samples::find(name)
            .map(|s| s.text.to_string())
            .ok_or_else(|| {
                let known: Vec<_> = SAMPLES.iter().map(|s| s.name).collect();
                invalid_input(format!(
                    "Unknown sample '{name}'. Available: {}",
                    known.join(", ")
                ))
            });
    }

    match input.file.as_deref() {
        Some(path) if path == Path::new("-") => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
        Some(path) => {
            if !path.is_file() {
                return Err(AnalyzerError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("Contract file does not exist: {}", path.display()),
                )));
            }
            Ok(std::fs::read_to_string(path)?)
        }
        None => Err(invalid_input(
            "No contract given. Pass a FILE, `-` for stdin, or --sample NAME".into(),
        )),
    }
}

async fn analyze_command(input: &InputArgs, full: bool, format: OutputFormat) -> Result<()> {
    let text = read_contract(input)?;
    let config = AnalyzerConfig::from_env()?;
    let client = GeminiClient::new(&config)?;
    let analyzer = ContractAnalyzer::new(client, &config);

    let info = analyzer.contract_info(&text);
    let show_progress = format == OutputFormat::Pretty;
    if show_progress {
        print_info(&info);
        println!();
    }

    let pb = if show_progress {
        let pb = ProgressBar::new_spinner();
        #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .expect("valid template"),
        );
        pb.set_message(if full {
            "Analyzing contract (3 model calls)..."
        } else {
            "Analyzing contract..."
        });
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    } else {
        ProgressBar::hidden()
    };

    let outcome = if full {
        analyzer.analyze(&text).await
    } else {
        analyzer.analyze_efficient(&text).await
    };
    pb.finish_and_clear();
    let analysis = outcome?;

    println!("{}", render(&analysis, format)?);
    Ok(())
}

fn info_command(input: &InputArgs) -> Result<()> {
    let text = read_contract(input)?;
    let config = AnalyzerConfig::offline_from_env()?;
    let info = contract_info(&config, &text);
    print_info(&info);
    if !info.is_valid {
        println!();
        println!(
            "{}",
            style(format!(
                "Contract is not valid for analysis (must be 1 to {} words)",
                info.max_words
            ))
            .red()
            .bold()
        );
    }
    Ok(())
}

fn samples_command() {
    for sample in SAMPLES {
        println!(
            "  {:<10} {}",
            style(sample.name).cyan().bold(),
            sample.description
        );
    }
}

fn print_info(info: &ContractInfo) {
    println!("{}", style("Contract info").bold());
    println!("  Word count: {} / {}", info.word_count, info.max_words);
    println!("  Model: {}", style(&info.model_to_use).green());
    println!(
        "  Long context: {}",
        if info.is_long_context { "yes" } else { "no" }
    );
}

/// Render an analysis in the requested format.
pub fn render(analysis: &Analysis, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => analysis
            .result
            .to_json_pretty()
            .map_err(|e| AnalyzerError::Serialization(e.to_string())),
        OutputFormat::Yaml => serde_yaml_ng::to_string(&analysis.result)
            .map_err(|e| AnalyzerError::Serialization(e.to_string())),
        OutputFormat::Pretty => Ok(render_pretty(analysis)),
    }
}

fn render_pretty(analysis: &Analysis) -> String {
    let result = &analysis.result;
    let mut out = Vec::new();

    out.push(style("SUMMARY").bold().underlined().to_string());
    if result.summary.is_empty() {
        out.push(style("  (no summary)").dim().to_string());
    } else {
        let options = textwrap::Options::new(TEXT_WRAP_WIDTH)
            .initial_indent("  ")
            .subsequent_indent("  ");
        out.push(textwrap::fill(&result.summary, options));
    }
    out.push(String::new());

    out.push(style("CLAUSES").bold().underlined().to_string());
    for clause in &result.clauses {
        let label = style(format!("[{}]", clause.clause_type.label())).cyan();
        if clause.is_not_found() {
            out.push(format!("  {label} {}", style(&clause.text).dim()));
        } else {
            out.push(format!("  {label} {}", clause.text));
        }
    }
    out.push(String::new());

    out.push(style("RISK FLAGS").bold().underlined().to_string());
    if result.risky_clauses.is_empty() {
        out.push(style("  (no risky clauses identified)").dim().to_string());
    }
    for (i, risk) in result.risky_clauses.iter().enumerate() {
        out.push(format!("  {}. \"{}\"", i + 1, style(&risk.clause).yellow()));
        if !risk.reason.is_empty() {
            let options = textwrap::Options::new(TEXT_WRAP_WIDTH)
                .initial_indent("     ")
                .subsequent_indent("     ");
            out.push(textwrap::fill(&risk.reason, options));
        }
    }

    if !analysis.warnings.is_empty() {
        out.push(String::new());
        for warning in &analysis.warnings {
            out.push(
                style(format!(
                    "Warning: {} section unavailable: {}",
                    warning.section, warning.message
                ))
                .yellow()
                .to_string(),
            );
        }
    }

    out.push(String::new());
    out.push(
        style(format!(
            "Tokens: {} in / {} out",
            analysis.token_usage.input_tokens, analysis.token_usage.output_tokens
        ))
        .dim()
        .to_string(),
    );

    out.join("\n")
}
