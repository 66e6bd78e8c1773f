use std::path::Path;

use anyhow::{bail, Context};
use colored::Colorize;
use onp_core::{Change, DiffStats};
use onp_text::{diff_text, render_unified, tokenize, TextDiffOptions};

use crate::cli::*;
use crate::config::CliConfig;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let mut config = CliConfig::resolve(cli.config.as_deref())?;
    if let Some(format) = cli.format {
        config.format = format;
    }
    if !config.color {
        colored::control::set_override(false);
    }

    match cli.command {
        Command::Diff(args) => cmd_diff(args, &config),
        Command::Changes(args) => cmd_changes(args, &config),
        Command::Stat(args) => cmd_stat(args, &config),
    }
}

fn read(path: &Path) -> anyhow::Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("cannot read {}", path.display()))
}

fn as_text<'a>(data: &'a [u8], path: &Path) -> anyhow::Result<&'a str> {
    std::str::from_utf8(data).with_context(|| format!("{} is not valid UTF-8", path.display()))
}

/// Change records between the two files of `args` in the configured unit.
fn compute_changes(args: &CompareArgs, config: &CliConfig) -> anyhow::Result<Vec<Change>> {
    let old = read(&args.old)?;
    let new = read(&args.new)?;
    let unit = args.unit.unwrap_or(config.unit);
    let changes = match unit.granularity() {
        None => onp_core::bytes(&old, &new),
        Some(granularity) => {
            let old_toks = tokenize(as_text(&old, &args.old)?, granularity);
            let new_toks = tokenize(as_text(&new, &args.new)?, granularity);
            onp_core::strings(&old_toks, &new_toks)
        }
    };
    tracing::debug!(?unit, changes = changes.len(), "compared files");
    Ok(changes)
}

fn cmd_diff(args: CompareArgs, config: &CliConfig) -> anyhow::Result<()> {
    let unit = args.unit.unwrap_or(config.unit);
    let Some(granularity) = unit.granularity() else {
        bail!("`diff` compares text; use `changes` or `stat` for --unit bytes");
    };
    let options = TextDiffOptions {
        granularity,
        context: args.context.unwrap_or(config.context),
    };
    let diff = diff_text(&read(&args.old)?, &read(&args.new)?, &options);

    if config.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&diff)?);
        return Ok(());
    }
    if diff.is_empty() {
        println!("No changes.");
        return Ok(());
    }

    let rendered = render_unified(
        &diff,
        &args.old.display().to_string(),
        &args.new.display().to_string(),
    );
    for line in rendered.split_terminator('\n') {
        if line.starts_with("---") || line.starts_with("+++") {
            println!("{}", line.bold());
        } else if line.starts_with("@@") {
            println!("{}", line.cyan());
        } else if line.starts_with('-') {
            println!("{}", line.red());
        } else if line.starts_with('+') {
            println!("{}", line.green());
        } else {
            println!("{line}");
        }
    }
    Ok(())
}

fn cmd_changes(args: CompareArgs, config: &CliConfig) -> anyhow::Result<()> {
    let changes = compute_changes(&args, config)?;
    match config.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&changes)?),
        OutputFormat::Text => {
            for c in &changes {
                println!("{},{} -{} +{}", c.a, c.b, c.del, c.ins);
            }
        }
    }
    Ok(())
}

fn cmd_stat(args: CompareArgs, config: &CliConfig) -> anyhow::Result<()> {
    let stats = DiffStats::from_changes(&compute_changes(&args, config)?);
    match config.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
        OutputFormat::Text => println!(
            "{} changes, {} deletions(-), {} insertions(+)",
            stats.changes, stats.deletions, stats.insertions
        ),
    }
    Ok(())
}
