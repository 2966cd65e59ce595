use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Local};
use colored::Colorize;
use tracing::debug;

use mdiff_engine::{
    diff_lines, format_diff, format_patch, split_bytes, DiffOutput, LineRecord, PatchOptions,
};

use crate::cli::{Cli, OutputFormat};

/// Exit status when either input could not be read or diffed.
pub const ERROR_STATUS: u8 = 2;

/// What a run produced: the text to print and whether the inputs matched.
pub struct CommandOutput {
    pub rendered: String,
    pub identical: bool,
}

impl CommandOutput {
    /// 0 when the inputs matched, 1 when they differ.
    pub fn status(&self) -> u8 {
        if self.identical {
            0
        } else {
            1
        }
    }
}

/// Run the diff, print the result and return the process exit status.
///
/// Errors are reported on stderr and map to [`ERROR_STATUS`], keeping them
/// apart from the "inputs differ" status.
pub fn run(cli: &Cli) -> u8 {
    match run_command(cli) {
        Ok(output) => {
            if !output.rendered.is_empty() {
                println!("{}", output.rendered);
            }
            output.status()
        }
        Err(err) => {
            eprintln!("mdiff: {err:#}");
            ERROR_STATUS
        }
    }
}

pub fn run_command(cli: &Cli) -> anyhow::Result<CommandOutput> {
    let old = read_lines(&cli.old)?;
    let new = read_lines(&cli.new)?;

    let output = diff_lines(&old, &new)
        .with_context(|| format!("diffing {} against {}", cli.old.display(), cli.new.display()))?;
    debug!(
        distance = output.edit_distance,
        additions = output.additions(),
        deletions = output.deletions(),
        "diff computed"
    );

    let rendered = match cli.format {
        OutputFormat::Json => serde_json::to_string_pretty(&output)?,
        OutputFormat::Text => render_text(cli, &output),
    };

    Ok(CommandOutput {
        rendered,
        identical: output.is_identical(),
    })
}

fn read_lines(path: &Path) -> anyhow::Result<Vec<LineRecord>> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let lines = split_bytes(&bytes).with_context(|| format!("decoding {}", path.display()))?;
    debug!(path = %path.display(), lines = lines.len(), "read input");
    Ok(lines)
}

fn render_text(cli: &Cli, output: &DiffOutput) -> String {
    let text = if cli.unified {
        format_patch(output, &patch_options(cli))
    } else {
        format_diff(output)
    };
    if cli.color {
        colorize(&text, cli.unified)
    } else {
        text
    }
}

fn patch_options(cli: &Cli) -> PatchOptions {
    let old_name = cli
        .label_old
        .clone()
        .unwrap_or_else(|| cli.old.display().to_string());
    let new_name = cli
        .label_new
        .clone()
        .unwrap_or_else(|| cli.new.display().to_string());

    let options = PatchOptions::default()
        .with_names(old_name, new_name)
        .with_context(cli.context);
    if cli.no_timestamps {
        return options;
    }
    options.with_timestamps(modified_time(&cli.old), modified_time(&cli.new))
}

/// File modification time in the `diff -u` header layout, or an empty
/// string when the platform cannot report it.
fn modified_time(path: &Path) -> String {
    std::fs::metadata(path)
        .and_then(|meta| meta.modified())
        .map(|time| {
            DateTime::<Local>::from(time)
                .format("%Y-%m-%d %H:%M:%S%.9f %z")
                .to_string()
        })
        .unwrap_or_default()
}

fn colorize(text: &str, unified: bool) -> String {
    text.split('\n')
        .enumerate()
        .map(|(i, line)| {
            if unified && i < 2 {
                line.bold().to_string()
            } else if unified && line.starts_with("@@") {
                line.cyan().to_string()
            } else if line.starts_with('+') {
                line.green().to_string()
            } else if line.starts_with('-') {
                line.red().to_string()
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
