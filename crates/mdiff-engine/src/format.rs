//! Flat renderer: one line per edit operation.

use crate::edit::{DiffOutput, Edit};

/// Render the edit script as `"  text"`, `"- text"` and `"+ text"` lines,
/// joined by newlines.
pub fn format_diff(output: &DiffOutput) -> String {
    output
        .edits
        .iter()
        .map(format_edit)
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_edit(edit: &Edit) -> String {
    let (prefix, line) = match edit {
        Edit::Equal { .. } => ("  ", edit.old_line()),
        Edit::Delete { .. } => ("- ", edit.old_line()),
        Edit::Insert { .. } => ("+ ", edit.new_line()),
    };
    let text = line.map(|l| l.text.as_str()).unwrap_or_default();
    format!("{prefix}{text}")
}
