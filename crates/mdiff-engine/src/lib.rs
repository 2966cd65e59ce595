//! Myers line diff engine.
//!
//! Computes the shortest edit script between two sequences of lines and
//! renders it either as a flat `+`/`-` listing or as a unified patch.
//!
//! # Key Types
//!
//! - [`LineRecord`] -- a numbered input line; matching compares text only
//! - [`DiagonalStore`] -- furthest-reaching x per diagonal, indexed by signed k
//! - [`Trace`] -- one store snapshot per search depth
//! - [`Edit`] / [`DiffOutput`] -- the edit script and its distance
//! - [`UnifiedPatch`] / [`Hunk`] / [`HunkLine`] -- structured unified patch
//!
//! # Example
//!
//! ```
//! use mdiff_engine::{compute_diff, format_patch, PatchOptions};
//!
//! let output = compute_diff("hello", "world").unwrap();
//! assert_eq!(output.edit_distance, 2);
//! assert_eq!(
//!     format_patch(&output, &PatchOptions::default()),
//!     "--- old\n+++ new\n@@ -1,1 +1,1 @@\n-hello\n+world"
//! );
//! ```
//!
//! Every call allocates its own search state, so diffs may run concurrently
//! on separate threads. The search keeps one snapshot of `2 * (n + m) + 1`
//! slots per edit step; see [`search`] for the memory cost.

pub mod backtrack;
pub mod diagonal;
pub mod edit;
pub mod error;
pub mod format;
pub mod line;
pub mod patch;
pub mod search;

pub use backtrack::backtrack;
pub use diagonal::DiagonalStore;
pub use edit::{DiffOutput, Edit, EditTag};
pub use error::{DiffError, DiffResult};
pub use format::format_diff;
pub use line::{split_bytes, split_lines, LineRecord};
pub use patch::{build_patch, format_patch, Hunk, HunkLine, PatchOptions, UnifiedPatch};
pub use search::{shortest_edit, Trace, TraceEntry};

/// Split both texts into lines and diff them.
pub fn compute_diff(old_text: &str, new_text: &str) -> DiffResult<DiffOutput> {
    diff_lines(&split_lines(old_text), &split_lines(new_text))
}

/// Diff two sequences of line records.
pub fn diff_lines(old_lines: &[LineRecord], new_lines: &[LineRecord]) -> DiffResult<DiffOutput> {
    let trace = shortest_edit(old_lines, new_lines)?;
    let edits = backtrack(old_lines, new_lines, &trace)?;
    let edit_distance = trace.edit_distance();
    debug_assert_eq!(
        edit_distance,
        edits.iter().filter(|e| e.is_change()).count()
    );
    Ok(DiffOutput {
        edits,
        edit_distance,
    })
}

/// Render a unified patch with the default `old`/`new` labels and no
/// timestamps.
pub fn format_patch_default(output: &DiffOutput) -> String {
    format_patch(output, &PatchOptions::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn differing_single_lines() {
        let output = compute_diff("hello", "world").unwrap();
        assert_eq!(output.edit_distance, 2);
        assert_eq!(output.edits.len(), 2);
        assert_eq!(output.edits[0].tag(), EditTag::Delete);
        assert_eq!(output.edits[1].tag(), EditTag::Insert);
    }

    #[test]
    fn identical_single_line() {
        let output = compute_diff("hello", "hello").unwrap();
        assert_eq!(output.edit_distance, 0);
        assert_eq!(
            output.edits,
            vec![Edit::Equal {
                old: LineRecord::new(1, "hello"),
                new: LineRecord::new(1, "hello"),
            }]
        );
    }

    #[test]
    fn whole_string_lines() {
        let output = compute_diff("ABCABBA", "CBABAC").unwrap();
        assert_eq!(output.edit_distance, 2);
    }

    #[test]
    fn both_empty() {
        let output = compute_diff("", "").unwrap();
        assert_eq!(output.edit_distance, 0);
        assert!(output.edits.is_empty());
        assert!(output.is_identical());
    }

    #[test]
    fn patch_for_single_line_change() {
        let output = compute_diff("hello", "world").unwrap();
        let text = format_patch_default(&output);
        assert_eq!(
            text.split('\n').collect::<Vec<_>>(),
            vec!["--- old", "+++ new", "@@ -1,1 +1,1 @@", "-hello", "+world"]
        );
    }

    #[test]
    fn unicode_symbols_diff_by_text() {
        let output = compute_diff("a\n→ arrow\nz", "a\n⇒ arrow\nz").unwrap();
        assert_eq!(output.edit_distance, 2);
        let flat = format_diff(&output);
        assert!(flat.contains("- → arrow"));
        assert!(flat.contains("+ ⇒ arrow"));
        let patch = format_patch_default(&output);
        assert!(patch.contains("-→ arrow"));
        assert!(patch.contains("+⇒ arrow"));
    }

    #[test]
    fn pre_split_records() {
        let old = vec![LineRecord::new(1, "x"), LineRecord::new(2, "y")];
        let new = vec![LineRecord::new(1, "y")];
        let output = diff_lines(&old, &new).unwrap();
        assert_eq!(output.edit_distance, 1);
        assert_eq!(output.deletions(), 1);
        assert_eq!(output.new_text(), vec!["y"]);
    }

    /// Edit distance computed by the LCS recurrence, `n + m - 2 * lcs`.
    fn lcs_distance(old: &[String], new: &[String]) -> usize {
        let mut table = vec![vec![0usize; new.len() + 1]; old.len() + 1];
        for i in (0..old.len()).rev() {
            for j in (0..new.len()).rev() {
                table[i][j] = if old[i] == new[j] {
                    table[i + 1][j + 1] + 1
                } else {
                    table[i + 1][j].max(table[i][j + 1])
                };
            }
        }
        old.len() + new.len() - 2 * table[0][0]
    }

    fn lines() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[abc]", 0..12)
    }

    proptest! {
        #[test]
        fn distance_matches_trace_and_script(old in lines(), new in lines()) {
            let old_text = old.join("\n");
            let new_text = new.join("\n");
            let old_lines = split_lines(&old_text);
            let new_lines = split_lines(&new_text);

            let trace = shortest_edit(&old_lines, &new_lines).unwrap();
            let output = diff_lines(&old_lines, &new_lines).unwrap();
            let changes = output.edits.iter().filter(|e| e.is_change()).count();

            prop_assert_eq!(output.edit_distance, trace.edit_distance());
            prop_assert_eq!(output.edit_distance, changes);
            if !trace.is_empty() {
                prop_assert_eq!(trace.len() - 1, output.edit_distance);
            }
        }

        #[test]
        fn distance_is_minimal(old in lines(), new in lines()) {
            let old_lines = split_lines(&old.join("\n"));
            let new_lines = split_lines(&new.join("\n"));
            let old_texts: Vec<String> = old_lines.iter().map(|l| l.text.clone()).collect();
            let new_texts: Vec<String> = new_lines.iter().map(|l| l.text.clone()).collect();

            let output = diff_lines(&old_lines, &new_lines).unwrap();
            prop_assert_eq!(output.edit_distance, lcs_distance(&old_texts, &new_texts));
        }

        #[test]
        fn script_reconstructs_both_sides(old in lines(), new in lines()) {
            let old_text = old.join("\n");
            let new_text = new.join("\n");
            let output = compute_diff(&old_text, &new_text).unwrap();

            prop_assert_eq!(output.old_text().join("\n"), old_text);
            prop_assert_eq!(output.new_text().join("\n"), new_text);
            for edit in &output.edits {
                if let Edit::Equal { old, new } = edit {
                    prop_assert!(old.matches(new));
                }
            }
        }

        #[test]
        fn identical_inputs_are_all_equal(same in lines()) {
            let text = same.join("\n");
            let output = compute_diff(&text, &text).unwrap();
            prop_assert_eq!(output.edit_distance, 0);
            prop_assert!(output.edits.iter().all(|e| !e.is_change()));
        }

        #[test]
        fn flat_format_has_one_line_per_edit(old in lines(), new in lines()) {
            let output = compute_diff(&old.join("\n"), &new.join("\n")).unwrap();
            let flat = format_diff(&output);
            if output.edits.is_empty() {
                prop_assert_eq!(flat, "");
            } else {
                let rendered: Vec<&str> = flat.split('\n').collect();
                prop_assert_eq!(rendered.len(), output.edits.len());
                for (line, edit) in rendered.iter().zip(&output.edits) {
                    let prefix = match edit.tag() {
                        EditTag::Equal => "  ",
                        EditTag::Delete => "- ",
                        EditTag::Insert => "+ ",
                    };
                    prop_assert!(line.starts_with(prefix));
                }
            }
        }

        #[test]
        fn patch_has_hunks_only_for_changes(old in lines(), new in lines()) {
            let output = compute_diff(&old.join("\n"), &new.join("\n")).unwrap();
            let text = format_patch_default(&output);
            let rendered: Vec<&str> = text.split('\n').collect();
            prop_assert_eq!(rendered[0], "--- old");
            prop_assert_eq!(rendered[1], "+++ new");
            let has_hunk = rendered.iter().any(|l| l.starts_with("@@ "));
            prop_assert_eq!(has_hunk, !output.is_identical());
        }
    }
}
