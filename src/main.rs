use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use colored::*;
use dialoguer::Confirm;
use snaker::cli::output::{self, OutputFormat};
use snaker::{BoundaryClass, Config, Identifier, RenameOutcome, Renamer, StringDocument};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "snaker")]
#[command(version, about = "Rename an identifier to snake_case across a file", long_about = None)]
struct Cli {
    /// Identifier to rename
    #[arg(value_name = "IDENTIFIER")]
    identifier: Option<String>,

    /// File to rewrite (reads stdin and writes stdout when omitted)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Rewrite the file in place
    #[arg(short, long, requires = "file")]
    write: bool,

    /// Show the edits and ask before writing
    #[arg(short, long, requires = "write")]
    interactive: bool,

    /// Only list the edits that would be made
    #[arg(short = 'n', long, conflicts_with = "write")]
    dry_run: bool,

    /// Characters that extend an identifier (ascii, unicode)
    #[arg(long, value_name = "CLASS")]
    boundary: Option<BoundaryClass>,

    /// Report format for --dry-run and --write (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Exit with code 1 when nothing was renamed
    #[arg(long)]
    strict: bool,

    /// Log debug diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Print the snake_case form of each identifier and exit
    #[arg(
        long,
        value_name = "IDENTIFIER",
        num_args = 1..,
        conflicts_with_all = ["identifier", "file", "check"]
    )]
    convert: Vec<String>,

    /// Check whether text is a valid identifier and exit
    #[arg(long, value_name = "TEXT", conflicts_with_all = ["identifier", "file"])]
    check: Option<String>,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "snaker", &mut io::stdout());
        return Ok(());
    }

    let colored = !cli.no_color;

    // Handle the helper modes
    if !cli.convert.is_empty() {
        convert_identifiers(&cli.convert, colored);
        return Ok(());
    }
    if let Some(text) = &cli.check {
        check_identifier(text);
        return Ok(());
    }

    let Some(identifier) = cli.identifier.as_deref() else {
        anyhow::bail!("No identifier specified. Use --help for usage information.");
    };

    let config = Config::load(cli.boundary)?;
    debug!(boundary = %config.boundary, "loaded configuration");
    let renamer = Renamer::new(&config);

    let (source, buffer) = match &cli.file {
        Some(path) => (
            path.display().to_string(),
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read file: {}", path.display()))?,
        ),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            ("<stdin>".to_string(), buffer)
        }
    };

    let replacements = if cli.dry_run {
        let outcome = renamer.plan(&buffer, Some(identifier));
        report(&cli, &config, &source, &buffer, &outcome, false, colored)?;
        outcome.replacements()
    } else if let (true, Some(path)) = (cli.write, &cli.file) {
        write_in_place(&cli, &config, &renamer, path, &source, &buffer, identifier, colored)?
    } else {
        let mut document = StringDocument::new(buffer);
        let outcome = renamer.apply(&mut document, Some(identifier));
        if let RenameOutcome::Skipped(reason) = &outcome {
            output::print_skip(reason, colored);
        }
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(document.into_string().as_bytes())
            .context("Failed to write stdout")?;
        stdout.flush().context("Failed to write stdout")?;
        outcome.replacements()
    };

    // Exit with appropriate code
    if cli.strict && replacements == 0 {
        std::process::exit(1);
    }

    Ok(())
}

/// Returns the number of replacements written to `path`
#[allow(clippy::too_many_arguments)]
fn write_in_place(
    cli: &Cli,
    config: &Config,
    renamer: &Renamer,
    path: &Path,
    source: &str,
    buffer: &str,
    identifier: &str,
    colored: bool,
) -> Result<usize> {
    let outcome = renamer.plan(buffer, Some(identifier));
    let rename = match &outcome {
        RenameOutcome::Renamed(rename) if !rename.plan.is_empty() => rename,
        _ => {
            report(cli, config, source, buffer, &outcome, false, colored)?;
            return Ok(0);
        }
    };

    if cli.interactive {
        output::print_report(
            source,
            buffer,
            &outcome,
            false,
            config.context_width,
            colored,
            &OutputFormat::Text,
        )?;
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Rename {} occurrence(s) of {} to {}?",
                rename.replacements(),
                rename.from,
                rename.to
            ))
            .default(false)
            .interact()?;
        if !confirmed {
            eprintln!("Aborted, {} left unchanged", source);
            return Ok(0);
        }
    }

    if config.backup {
        let mut backup = path.as_os_str().to_owned();
        backup.push(".bak");
        fs::copy(path, &backup)
            .with_context(|| format!("Failed to back up file: {}", path.display()))?;
    }

    fs::write(path, rename.plan.apply(buffer))
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    if !cli.interactive {
        report(cli, config, source, buffer, &outcome, true, colored)?;
    } else {
        output::print_rename_summary(rename.replacements(), source, true, colored);
    }

    Ok(rename.replacements())
}

fn report(
    cli: &Cli,
    config: &Config,
    source: &str,
    buffer: &str,
    outcome: &RenameOutcome,
    applied: bool,
    colored: bool,
) -> Result<()> {
    output::print_report(
        source,
        buffer,
        outcome,
        applied,
        config.context_width,
        colored,
        &cli.format,
    )?;

    if matches!(cli.format, OutputFormat::Text) {
        if let RenameOutcome::Renamed(rename) = outcome {
            output::print_rename_summary(rename.replacements(), source, applied, colored);
        }
    }

    Ok(())
}

fn convert_identifiers(identifiers: &[String], colored: bool) {
    for text in identifiers {
        match Identifier::parse(text) {
            Ok(identifier) => println!("{}", identifier.to_snake_case()),
            Err(err) => {
                if colored {
                    eprintln!("{} {}: {}", "Warning:".yellow().bold(), text, err);
                } else {
                    eprintln!("Warning: {}: {}", text, err);
                }
            }
        }
    }
}

fn check_identifier(text: &str) {
    match Identifier::parse(text) {
        Ok(_) => println!("valid"),
        Err(err) => {
            println!("invalid: {}", err);
            std::process::exit(1);
        }
    }
}
