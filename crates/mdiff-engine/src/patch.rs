//! Unified patch renderer.
//!
//! The edit script is laid out as two positional lists: the old side (equal
//! and deleted lines) and the new side (equal and inserted lines), each in
//! script order. Position `i` of one list is compared with position `i` of
//! the other; a position past a list's end is absent on that side. Runs of
//! differing positions become change regions, which are widened by the
//! configured context and emitted as hunks.
//!
//! Comparing by position rather than by alignment means a delete run and an
//! insert run of different lengths can shift later equal lines against each
//! other. The hunks then show more `-`/`+` pairs than a line-aligned patch
//! would, but every line of both sides still appears.

use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::edit::DiffOutput;

/// Configuration for rendering a unified patch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchOptions {
    /// Label for the old side in the `---` header.
    pub old_name: String,
    /// Label for the new side in the `+++` header.
    pub new_name: String,
    /// Appended to the `---` header after a tab, when set.
    pub old_timestamp: Option<String>,
    /// Appended to the `+++` header after a tab, when set.
    pub new_timestamp: Option<String>,
    /// Context positions kept before and after each change region.
    pub context: usize,
}

impl Default for PatchOptions {
    fn default() -> Self {
        Self {
            old_name: "old".into(),
            new_name: "new".into(),
            old_timestamp: None,
            new_timestamp: None,
            context: 3,
        }
    }
}

impl PatchOptions {
    /// Set both header labels.
    pub fn with_names(mut self, old: impl Into<String>, new: impl Into<String>) -> Self {
        self.old_name = old.into();
        self.new_name = new.into();
        self
    }

    /// Set both header timestamps. Empty strings count as unset.
    pub fn with_timestamps(mut self, old: impl Into<String>, new: impl Into<String>) -> Self {
        let (old, new): (String, String) = (old.into(), new.into());
        self.old_timestamp = Some(old).filter(|s| !s.is_empty());
        self.new_timestamp = Some(new).filter(|s| !s.is_empty());
        self
    }

    /// Set the number of context positions around each change region.
    pub fn with_context(mut self, context: usize) -> Self {
        self.context = context;
        self
    }
}

/// A rendered unified patch: two header lines followed by hunks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnifiedPatch {
    /// The `---` line, without its prefix.
    pub old_header: String,
    /// The `+++` line, without its prefix.
    pub new_header: String,
    /// Hunks in position order.
    pub hunks: Vec<Hunk>,
}

impl UnifiedPatch {
    /// Returns `true` if the patch has no hunks.
    pub fn is_empty(&self) -> bool {
        self.hunks.is_empty()
    }
}

/// One context-bounded block of a unified patch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hunk {
    /// 1-based first old line covered by this hunk.
    pub old_start: usize,
    /// Number of old lines covered.
    pub old_count: usize,
    /// 1-based first new line covered by this hunk.
    pub new_start: usize,
    /// Number of new lines covered.
    pub new_count: usize,
    /// The hunk body.
    pub lines: Vec<HunkLine>,
}

/// A single body line of a hunk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HunkLine {
    /// Same text on both sides.
    Context(String),
    /// Present only on, or differing on, the new side.
    Added(String),
    /// Present only on, or differing on, the old side.
    Removed(String),
}

impl fmt::Display for HunkLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HunkLine::Context(text) => write!(f, " {text}"),
            HunkLine::Added(text) => write!(f, "+{text}"),
            HunkLine::Removed(text) => write!(f, "-{text}"),
        }
    }
}

impl fmt::Display for Hunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "@@ -{},{} +{},{} @@",
            self.old_start, self.old_count, self.new_start, self.new_count
        )?;
        for line in &self.lines {
            write!(f, "\n{line}")?;
        }
        Ok(())
    }
}

impl fmt::Display for UnifiedPatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "--- {}\n+++ {}", self.old_header, self.new_header)?;
        for hunk in &self.hunks {
            write!(f, "\n{hunk}")?;
        }
        Ok(())
    }
}

/// Build the structured unified patch for a diff.
pub fn build_patch(output: &DiffOutput, options: &PatchOptions) -> UnifiedPatch {
    let old = output.old_text();
    let new = output.new_text();

    let hunks = hunk_windows(&old, &new, options.context)
        .into_iter()
        .map(|window| build_hunk(&old, &new, window))
        .collect();

    UnifiedPatch {
        old_header: header(&options.old_name, options.old_timestamp.as_deref()),
        new_header: header(&options.new_name, options.new_timestamp.as_deref()),
        hunks,
    }
}

/// Render a diff as unified patch text.
pub fn format_patch(output: &DiffOutput, options: &PatchOptions) -> String {
    build_patch(output, options).to_string()
}

fn header(name: &str, timestamp: Option<&str>) -> String {
    match timestamp {
        Some(ts) if !ts.is_empty() => format!("{name}\t{ts}"),
        _ => name.to_string(),
    }
}

/// Maximal runs of positions where the two sides differ.
fn change_regions(old: &[&str], new: &[&str]) -> Vec<Range<usize>> {
    let len = old.len().max(new.len());
    let differs = |i: usize| old.get(i) != new.get(i);

    let mut regions = Vec::new();
    let mut i = 0;
    while i < len {
        if !differs(i) {
            i += 1;
            continue;
        }
        let start = i;
        while i < len && differs(i) {
            i += 1;
        }
        regions.push(start..i);
    }
    regions
}

/// One window per change region, widened by `context` and clamped to the
/// positional length. Windows of neighbouring regions may overlap.
fn hunk_windows(old: &[&str], new: &[&str], context: usize) -> Vec<Range<usize>> {
    let len = old.len().max(new.len());
    change_regions(old, new)
        .into_iter()
        .map(|region| region.start.saturating_sub(context)..(region.end + context).min(len))
        .collect()
}

/// Number of entries of `side` that exist within `range`.
fn present(side: &[&str], range: &Range<usize>) -> usize {
    side.len().min(range.end) - side.len().min(range.start)
}

fn build_hunk(old: &[&str], new: &[&str], window: Range<usize>) -> Hunk {
    let mut lines = Vec::new();
    for i in window.clone() {
        match (old.get(i), new.get(i)) {
            (Some(a), Some(b)) if a == b => lines.push(HunkLine::Context(a.to_string())),
            (None, Some(b)) => lines.push(HunkLine::Added(b.to_string())),
            (Some(a), None) => lines.push(HunkLine::Removed(a.to_string())),
            (Some(a), Some(b)) => {
                lines.push(HunkLine::Removed(a.to_string()));
                lines.push(HunkLine::Added(b.to_string()));
            }
            (None, None) => {}
        }
    }

    Hunk {
        old_start: present(old, &(0..window.start)) + 1,
        old_count: present(old, &window),
        new_start: present(new, &(0..window.start)) + 1,
        new_count: present(new, &window),
        lines,
    }
}
