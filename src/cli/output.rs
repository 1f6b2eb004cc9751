use crate::{RenameOutcome, RenameReport, SkipReason};
use anyhow::Result;
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonEdit {
    line: usize,
    column: usize,
    start: usize,
    end: usize,
    replacement: String,
    context: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonOutput {
    source: String,
    from: Option<String>,
    to: Option<String>,
    skipped: Option<String>,
    applied: bool,
    replacements: usize,
    edits: Vec<JsonEdit>,
}

/// Where an edit sits in the buffer, 1-indexed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location<'a> {
    pub line: usize,
    pub column: usize,
    pub line_start: usize,
    pub line_text: &'a str,
}

pub fn locate(buffer: &str, offset: usize) -> Location<'_> {
    let line_start = buffer[..offset].rfind('\n').map_or(0, |i| i + 1);
    let line_end = buffer[offset..]
        .find('\n')
        .map_or(buffer.len(), |i| offset + i);

    Location {
        line: buffer[..offset].matches('\n').count() + 1,
        column: buffer[line_start..offset].chars().count() + 1,
        line_start,
        line_text: &buffer[line_start..line_end],
    }
}

pub fn skip_message(reason: &SkipReason) -> String {
    match reason {
        SkipReason::NoSelection => "nothing selected".to_string(),
        SkipReason::InvalidIdentifier(err) => format!("not an identifier: {}", err),
        SkipReason::AlreadySnakeCase(name) => format!("{} is already snake_case", name),
    }
}

/// Print the edits of a rename, or why it was skipped
pub fn print_report(
    source: &str,
    buffer: &str,
    outcome: &RenameOutcome,
    applied: bool,
    context_width: usize,
    colored_output: bool,
    format: &OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            match outcome {
                RenameOutcome::Skipped(reason) => print_skip(reason, colored_output),
                RenameOutcome::Renamed(report) => {
                    print_text_edits(source, buffer, report, context_width, colored_output)
                }
            }
            Ok(())
        }
        OutputFormat::Json => print_json_report(source, buffer, outcome, applied, context_width),
    }
}

pub fn print_skip(reason: &SkipReason, colored_output: bool) {
    let message = skip_message(reason);
    if colored_output {
        eprintln!("{} {}", "Skipped:".yellow().bold(), message);
    } else {
        eprintln!("Skipped: {}", message);
    }
}

fn print_text_edits(
    source: &str,
    buffer: &str,
    report: &RenameReport,
    context_width: usize,
    colored_output: bool,
) {
    if report.plan.is_empty() {
        return;
    }

    if colored_output {
        println!("\n{}", source.bold().underline());
    } else {
        println!("\n{}", source);
    }

    for edit in &report.plan {
        let location = locate(buffer, edit.start);
        let line_info = format!("{}:{}", location.line, location.column);
        let context = format_context(
            location.line_text,
            edit.start - location.line_start,
            edit.end - edit.start,
            context_width,
            colored_output,
        );

        if colored_output {
            println!(
                "  {} {} {} {}  {}",
                line_info.blue().bold(),
                report.from.red().bold(),
                "→".dimmed(),
                report.to.green().bold(),
                context
            );
        } else {
            println!(
                "  {} {} → {}  {}",
                line_info, report.from, report.to, context
            );
        }
    }
}

fn print_json_report(
    source: &str,
    buffer: &str,
    outcome: &RenameOutcome,
    applied: bool,
    context_width: usize,
) -> Result<()> {
    let output = match outcome {
        RenameOutcome::Skipped(reason) => JsonOutput {
            source: source.to_string(),
            from: None,
            to: None,
            skipped: Some(skip_message(reason)),
            applied: false,
            replacements: 0,
            edits: Vec::new(),
        },
        RenameOutcome::Renamed(report) => JsonOutput {
            source: source.to_string(),
            from: Some(report.from.clone()),
            to: Some(report.to.clone()),
            skipped: None,
            applied,
            replacements: report.replacements(),
            edits: report
                .plan
                .iter()
                .map(|edit| {
                    let location = locate(buffer, edit.start);
                    JsonEdit {
                        line: location.line,
                        column: location.column,
                        start: edit.start,
                        end: edit.end,
                        replacement: edit.replacement.clone(),
                        context: get_context(
                            location.line_text,
                            edit.start - location.line_start,
                            edit.end - edit.start,
                            context_width,
                        ),
                    }
                })
                .collect(),
        },
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Context around `line[offset..offset + word_len]`, with only that span
/// highlighted
fn format_context(
    line: &str,
    offset: usize,
    word_len: usize,
    width: usize,
    colored: bool,
) -> String {
    let (before, word, after) = split_context(line, offset, word_len, width);
    if colored {
        format!("{}{}{}", before, word.red(), after)
    } else {
        format!("{}{}{}", before, word, after)
    }
}

fn get_context(line: &str, offset: usize, word_len: usize, width: usize) -> String {
    format_context(line, offset, word_len, width, false)
}

fn split_context(
    line: &str,
    offset: usize,
    word_len: usize,
    width: usize,
) -> (String, &str, String) {
    let word_end = offset + word_len;
    let mut start = offset.saturating_sub(width);
    while !line.is_char_boundary(start) {
        start -= 1;
    }
    let mut end = (word_end + width).min(line.len());
    while !line.is_char_boundary(end) {
        end += 1;
    }

    let mut before = line[start..offset].trim_start().to_string();
    if start > 0 {
        before.insert_str(0, "...");
    }
    let mut after = line[word_end..end].trim_end().to_string();
    if end < line.len() {
        after.push_str("...");
    }

    (before, &line[offset..word_end], after)
}

pub fn print_rename_summary(replacements: usize, source: &str, applied: bool, colored: bool) {
    let noun = if replacements == 1 {
        "occurrence"
    } else {
        "occurrences"
    };
    let verb = if applied { "renamed" } else { "to rename" };

    if replacements == 0 {
        if colored {
            eprintln!("{}", "No standalone occurrences found.".yellow().bold());
        } else {
            eprintln!("No standalone occurrences found.");
        }
    } else if colored {
        eprintln!(
            "{} {} {} {} in {}",
            "✓".green().bold(),
            replacements.to_string().green().bold(),
            noun,
            verb,
            source
        );
    } else {
        eprintln!("✓ {} {} {} in {}", replacements, noun, verb, source);
    }
}
