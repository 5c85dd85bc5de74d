//! CLI entry point for layerguard.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, logging setup, and exit
//! codes. All business logic lives in the `layerguard-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{ArgAction, Parser, Subcommand};
use layerguard_app::{
    CheckInput, ExplainOutput, format_explanation, format_not_found, parse_report_json,
    render_annotations, render_markdown, run_check, run_explain, runtime_error_report,
    serialize_report, to_renderable, verdict_exit_code,
};
use layerguard_settings::{LayerguardConfigV1, Overrides};
use layerguard_types::LayerguardReport;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

#[derive(Parser, Debug)]
#[command(
    name = "layerguard",
    version,
    about = "Layered architecture import guard for Feature-Sliced frontends"
)]
struct Cli {
    /// Project root (directory containing the source tree and layerguard.toml).
    #[arg(long, default_value = ".", global = true)]
    repo_root: Utf8PathBuf,

    /// Path to layerguard config TOML, relative to the repo root.
    #[arg(long, default_value = "layerguard.toml", global = true)]
    config: Utf8PathBuf,

    /// Override profile (strict|warn|compat).
    #[arg(long, global = true)]
    profile: Option<String>,

    /// Override maximum findings to emit.
    #[arg(long, global = true)]
    max_findings: Option<u32>,

    /// Override the import alias (e.g. "@").
    #[arg(long, global = true)]
    alias: Option<String>,

    /// More log output on stderr (-v: debug, -vv: trace). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Scan the source tree, evaluate import policy, and write artifacts.
    Check {
        /// Where to write the JSON report.
        #[arg(long, default_value = "artifacts/layerguard/report.json")]
        report_out: Utf8PathBuf,

        /// Write a Markdown report alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown report (if enabled).
        #[arg(long, default_value = "artifacts/layerguard/comment.md")]
        markdown_out: Utf8PathBuf,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/layerguard/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Render GitHub Actions annotations from an existing JSON report.
    Annotations {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/layerguard/report.json")]
        report: Utf8PathBuf,

        /// Maximum number of annotations to emit.
        #[arg(long, default_value = "10")]
        max: usize,
    },

    /// Explain a check_id or code with remediation guidance.
    Explain {
        /// The check_id (e.g., "layers.direction") or code (e.g., "public_api_bypass") to explain.
        identifier: String,
    },

    /// Print the JSON schema of layerguard.toml.
    ConfigSchema,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.cmd {
        Commands::Check {
            ref report_out,
            write_markdown,
            ref markdown_out,
        } => cmd_check(&cli, report_out, write_markdown, markdown_out),
        Commands::Md { report, output } => cmd_md(report, output),
        Commands::Annotations { report, max } => cmd_annotations(report, max),
        Commands::Explain { identifier } => cmd_explain(&identifier),
        Commands::ConfigSchema => cmd_config_schema(),
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "layerguard=info",
        1 => "layerguard=debug",
        _ => "layerguard=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

fn cmd_check(
    cli: &Cli,
    report_out: &Utf8Path,
    write_markdown: bool,
    markdown_out: &Utf8Path,
) -> anyhow::Result<()> {
    let repo_root = cli
        .repo_root
        .canonicalize_utf8()
        .unwrap_or_else(|_| cli.repo_root.clone());

    let result = (|| -> anyhow::Result<i32> {
        if !repo_root.is_dir() {
            anyhow::bail!("repo root does not exist: {}", repo_root);
        }
        // Load config if present; missing file is allowed (defaults apply).
        let cfg_path = repo_root.join(&cli.config);
        let cfg_text = match std::fs::read_to_string(&cfg_path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %cfg_path, "no config file; using defaults");
                String::new()
            }
            Err(err) => {
                return Err(err).with_context(|| format!("read config: {}", cfg_path));
            }
        };

        let overrides = Overrides {
            profile: cli.profile.clone(),
            max_findings: cli.max_findings,
            alias: cli.alias.clone(),
        };

        let input = CheckInput {
            repo_root: &repo_root,
            config_text: &cfg_text,
            overrides,
        };

        let output = run_check(input)?;

        write_report_file(report_out, &output.report).context("write report json")?;

        if write_markdown {
            let renderable = to_renderable(&output.report);
            let md = render_markdown(&renderable);
            write_text_file(markdown_out, &md).context("write markdown")?;
        }

        Ok(verdict_exit_code(output.report.verdict))
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            let report = runtime_error_report(&format!("{err:#}"));
            if let Err(write_err) = write_report_file(report_out, &report) {
                tracing::warn!(error = %write_err, "could not write runtime error report");
            }
            eprintln!("layerguard error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn write_report_file(path: &Utf8Path, report: &LayerguardReport) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    let data = serialize_report(report).context("serialize report")?;
    std::fs::write(path, data).with_context(|| format!("write report: {}", path))?;
    Ok(())
}

fn write_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, text).with_context(|| format!("write text: {}", path))?;
    Ok(())
}

fn read_report(report_path: &Utf8Path) -> anyhow::Result<LayerguardReport> {
    let report_text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    parse_report_json(&report_text)
}

fn cmd_md(report_path: Utf8PathBuf, output: Option<Utf8PathBuf>) -> anyhow::Result<()> {
    let report = read_report(&report_path)?;
    let md = render_markdown(&to_renderable(&report));

    if let Some(out_path) = output {
        write_text_file(&out_path, &md).context("write markdown output")?;
    } else {
        print!("{}", md);
    }

    Ok(())
}

fn cmd_annotations(report_path: Utf8PathBuf, max: usize) -> anyhow::Result<()> {
    let report = read_report(&report_path)?;
    for annotation in render_annotations(&to_renderable(&report), max) {
        println!("{}", annotation);
    }

    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found {
            explanation,
            related,
            message,
        } => {
            print!("{}", format_explanation(&explanation, &related, message));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_check_ids,
            available_codes,
        } => {
            eprint!(
                "{}",
                format_not_found(&identifier, available_check_ids, available_codes)
            );
            std::process::exit(1);
        }
    }
}

fn cmd_config_schema() -> anyhow::Result<()> {
    let schema = schemars::schema_for!(LayerguardConfigV1);
    let text = serde_json::to_string_pretty(&schema).context("serialize config schema")?;
    println!("{}", text);
    Ok(())
}
